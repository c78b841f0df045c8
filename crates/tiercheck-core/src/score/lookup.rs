use crate::model::FieldValue;
use crate::score::outcome::BracketMatch;
use crate::tables::schema::Bracket;

/// Find the points for a value in an ordered bracket list.
///
/// Brackets are evaluated in table order and the first match wins. An
/// absent value, or one that matches no bracket, yields `None`.
pub fn lookup_points(value: Option<&FieldValue>, brackets: &[Bracket]) -> Option<BracketMatch> {
    let value = value?;
    brackets
        .iter()
        .enumerate()
        .find(|(_, bracket)| bracket.when.matches(value))
        .map(|(index, bracket)| BracketMatch {
            index,
            condition: bracket.when.clone(),
            points: bracket.points,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::schema::Condition;
    use rust_decimal_macros::dec;

    fn wall_brackets() -> Vec<Bracket> {
        vec![
            Bracket {
                when: Condition::AtLeast(dec!(4.57)),
                points: dec!(10.0),
            },
            Bracket {
                when: Condition::AtLeast(dec!(3.69)),
                points: dec!(4.6),
            },
            Bracket {
                when: Condition::AtLeast(dec!(3.08)),
                points: dec!(1.6),
            },
        ]
    }

    #[test]
    fn test_first_matching_bracket_wins() {
        let m = lookup_points(Some(&FieldValue::Numeric(dec!(5))), &wall_brackets()).unwrap();
        assert_eq!(m.index, 0);
        assert_eq!(m.points, dec!(10.0));
    }

    #[test]
    fn test_exact_threshold_matches() {
        let m = lookup_points(Some(&FieldValue::Numeric(dec!(3.69))), &wall_brackets()).unwrap();
        assert_eq!(m.points, dec!(4.6));
    }

    #[test]
    fn test_below_every_threshold_is_none() {
        assert!(lookup_points(Some(&FieldValue::Numeric(dec!(2.5))), &wall_brackets()).is_none());
        assert!(lookup_points(Some(&FieldValue::Numeric(dec!(0))), &wall_brackets()).is_none());
    }

    #[test]
    fn test_absent_value_is_none() {
        assert!(lookup_points(None, &wall_brackets()).is_none());
    }

    #[test]
    fn test_empty_table_is_none() {
        assert!(lookup_points(Some(&FieldValue::Numeric(dec!(5))), &[]).is_none());
    }

    #[test]
    fn test_table_order_is_not_reinterpreted() {
        // Lowest threshold first: the first bracket shadows the rest.
        let mut brackets = wall_brackets();
        brackets.reverse();
        let m = lookup_points(Some(&FieldValue::Numeric(dec!(5))), &brackets).unwrap();
        assert_eq!(m.points, dec!(1.6));
    }

    #[test]
    fn test_category_lookup() {
        let brackets = vec![
            Bracket {
                when: Condition::Category("heat_pump".into()),
                points: dec!(5.4),
            },
            Bracket {
                when: Condition::Category("conventional_tank".into()),
                points: dec!(0),
            },
        ];
        let m = lookup_points(Some(&FieldValue::Category("heat_pump".into())), &brackets).unwrap();
        assert_eq!(m.points, dec!(5.4));
        assert!(lookup_points(Some(&FieldValue::Category("solar".into())), &brackets).is_none());
    }
}
