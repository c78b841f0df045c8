use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four compliance routes in NBC Section 9.36.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pathway {
    /// 9.36.2 to 9.36.4
    Prescriptive,
    /// 9.36.8
    TieredPrescriptive,
    /// 9.36.5
    Performance,
    /// 9.36.7
    TieredPerformance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathwayFamily {
    Prescriptive,
    Performance,
}

impl Pathway {
    pub const ALL: [Pathway; 4] = [
        Pathway::Prescriptive,
        Pathway::TieredPrescriptive,
        Pathway::Performance,
        Pathway::TieredPerformance,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Pathway::Prescriptive => "9362",
            Pathway::TieredPrescriptive => "9368",
            Pathway::Performance => "9365",
            Pathway::TieredPerformance => "9367",
        }
    }

    pub fn family(&self) -> PathwayFamily {
        match self {
            Pathway::Prescriptive | Pathway::TieredPrescriptive => PathwayFamily::Prescriptive,
            Pathway::Performance | Pathway::TieredPerformance => PathwayFamily::Performance,
        }
    }

    /// Tiered pathways report the energy performance tier reached.
    pub fn is_tiered(&self) -> bool {
        matches!(self, Pathway::TieredPrescriptive | Pathway::TieredPerformance)
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pathway::Prescriptive => write!(f, "Prescriptive"),
            Pathway::TieredPrescriptive => write!(f, "Tiered Prescriptive"),
            Pathway::Performance => write!(f, "Performance"),
            Pathway::TieredPerformance => write!(f, "Tiered Performance"),
        }
    }
}

impl fmt::Display for PathwayFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathwayFamily::Prescriptive => write!(f, "Prescriptive"),
            PathwayFamily::Performance => write!(f, "Performance"),
        }
    }
}

/// Result of classifying a raw pathway code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathwayClass {
    Known {
        pathway: Pathway,
        family: PathwayFamily,
    },
    /// No pathway chosen yet. Fields are scored, but no code minimums or
    /// tiers apply.
    Unselected,
    /// The code is not one of the four known pathways; scoring for it is
    /// not yet available.
    Unavailable { code: String },
}

impl PathwayClass {
    pub fn pathway(&self) -> Option<Pathway> {
        match self {
            PathwayClass::Known { pathway, .. } => Some(*pathway),
            PathwayClass::Unselected | PathwayClass::Unavailable { .. } => None,
        }
    }

    /// Whether the input can be scored at all.
    pub fn is_available(&self) -> bool {
        !matches!(self, PathwayClass::Unavailable { .. })
    }
}

impl fmt::Display for PathwayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathwayClass::Known { pathway, family } => {
                write!(f, "{} ({}, {} family)", pathway, pathway.code(), family)
            }
            PathwayClass::Unselected => write!(f, "no pathway selected"),
            PathwayClass::Unavailable { code } => {
                write!(f, "pathway '{}' (not yet available)", code)
            }
        }
    }
}

/// Map a raw pathway code to its pathway and family.
///
/// Accepts the bare code (`"9362"`), the dotted section form (`"9.36.2"`)
/// and an `NBC` prefix. Never fails: a blank code is `Unselected` and
/// anything else is `Unavailable`.
pub fn classify_pathway(code: &str) -> PathwayClass {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return PathwayClass::Unselected;
    }
    let digits: String = trimmed
        .trim_start_matches(|c: char| c.is_ascii_alphabetic() || c.is_whitespace())
        .chars()
        .filter(|c| *c != '.')
        .collect();

    match Pathway::ALL.iter().find(|p| p.code() == digits) {
        Some(&pathway) => PathwayClass::Known {
            pathway,
            family: pathway.family(),
        },
        None => PathwayClass::Unavailable {
            code: trimmed.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(
            classify_pathway("9362"),
            PathwayClass::Known {
                pathway: Pathway::Prescriptive,
                family: PathwayFamily::Prescriptive
            }
        );
        assert_eq!(
            classify_pathway("9367").pathway(),
            Some(Pathway::TieredPerformance)
        );
        assert_eq!(
            classify_pathway("9368").pathway(),
            Some(Pathway::TieredPrescriptive)
        );
    }

    #[test]
    fn test_dotted_and_prefixed_codes() {
        assert_eq!(classify_pathway("9.36.5").pathway(), Some(Pathway::Performance));
        assert_eq!(classify_pathway(" NBC 9368 ").pathway(), Some(Pathway::TieredPrescriptive));
    }

    #[test]
    fn test_unknown_code_is_unavailable() {
        let class = classify_pathway("9369");
        assert!(!class.is_available());
        assert_eq!(
            class,
            PathwayClass::Unavailable {
                code: "9369".into()
            }
        );
        assert!(!classify_pathway("prescriptive please").is_available());
    }

    #[test]
    fn test_blank_code_is_unselected() {
        assert_eq!(classify_pathway(""), PathwayClass::Unselected);
        assert_eq!(classify_pathway("   "), PathwayClass::Unselected);
        assert!(classify_pathway("").is_available());
        assert_eq!(classify_pathway("").pathway(), None);
    }

    #[test]
    fn test_families() {
        assert_eq!(Pathway::TieredPrescriptive.family(), PathwayFamily::Prescriptive);
        assert_eq!(Pathway::TieredPerformance.family(), PathwayFamily::Performance);
        assert!(Pathway::TieredPerformance.is_tiered());
        assert!(!Pathway::Prescriptive.is_tiered());
    }
}
