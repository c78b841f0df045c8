use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scored building parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    AtticRsi,
    WallRsi,
    BelowGradeRsi,
    WindowUValue,
    WaterHeater,
    Ventilation,
    Airtightness,
    BuildingVolume,
}

impl Field {
    /// All scored fields, in the order they are reported.
    pub const ALL: [Field; 8] = [
        Field::AtticRsi,
        Field::WallRsi,
        Field::BelowGradeRsi,
        Field::WindowUValue,
        Field::WaterHeater,
        Field::Ventilation,
        Field::Airtightness,
        Field::BuildingVolume,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::AtticRsi => "attic_rsi",
            Field::WallRsi => "wall_rsi",
            Field::BelowGradeRsi => "below_grade_rsi",
            Field::WindowUValue => "window_u_value",
            Field::WaterHeater => "water_heater",
            Field::Ventilation => "ventilation",
            Field::Airtightness => "airtightness",
            Field::BuildingVolume => "building_volume",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::AtticRsi => "Ceiling below attic",
            Field::WallRsi => "Above-grade walls",
            Field::BelowGradeRsi => "Below-grade walls",
            Field::WindowUValue => "Windows and doors",
            Field::WaterHeater => "Water heater",
            Field::Ventilation => "HRV/ERV",
            Field::Airtightness => "Airtightness",
            Field::BuildingVolume => "Building volume",
        }
    }

    /// Categorical fields are matched against category brackets, all others
    /// against numeric thresholds.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Field::WaterHeater | Field::Ventilation)
    }

    /// Accepts snake_case keys, camelCase form names and a few short aliases.
    pub fn from_str_loose(s: &str) -> Option<Field> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "atticrsi" | "attic" | "ceilingrsi" => Some(Field::AtticRsi),
            "wallrsi" | "wall" | "walls" => Some(Field::WallRsi),
            "belowgradersi" | "belowgrade" | "foundationrsi" => Some(Field::BelowGradeRsi),
            "windowuvalue" | "windowu" | "windows" | "uvalue" => Some(Field::WindowUValue),
            "waterheater" | "waterheatertype" | "dhw" => Some(Field::WaterHeater),
            "ventilation" | "hrv" | "erv" | "hrverv" | "hrvtype" => Some(Field::Ventilation),
            "airtightness" | "ach" | "ach50" => Some(Field::Airtightness),
            "buildingvolume" | "volume" => Some(Field::BuildingVolume),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Climate zone selecting which table variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClimateZone {
    #[serde(rename = "7A")]
    Zone7A,
    #[serde(rename = "7B")]
    Zone7B,
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClimateZone::Zone7A => write!(f, "7A"),
            ClimateZone::Zone7B => write!(f, "7B"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Province {
    Alberta,
    BritishColumbia,
    Manitoba,
    NewBrunswick,
    NewfoundlandAndLabrador,
    NorthwestTerritories,
    NovaScotia,
    Nunavut,
    Ontario,
    PrinceEdwardIsland,
    Quebec,
    Saskatchewan,
    Yukon,
    #[default]
    Unknown,
}

impl Province {
    /// Parse a province from its name or two-letter code. Anything else is
    /// `Unknown`.
    pub fn from_str_loose(s: &str) -> Province {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "ab" | "alberta" => Province::Alberta,
            "bc" | "britishcolumbia" => Province::BritishColumbia,
            "mb" | "manitoba" => Province::Manitoba,
            "nb" | "newbrunswick" => Province::NewBrunswick,
            "nl" | "newfoundland" | "newfoundlandandlabrador" => Province::NewfoundlandAndLabrador,
            "nt" | "northwestterritories" => Province::NorthwestTerritories,
            "ns" | "novascotia" => Province::NovaScotia,
            "nu" | "nunavut" => Province::Nunavut,
            "on" | "ontario" => Province::Ontario,
            "pe" | "pei" | "princeedwardisland" => Province::PrinceEdwardIsland,
            "qc" | "quebec" => Province::Quebec,
            "sk" | "saskatchewan" => Province::Saskatchewan,
            "yt" | "yukon" => Province::Yukon,
            _ => Province::Unknown,
        }
    }

    /// Saskatchewan uses the 7B tables; every other jurisdiction uses 7A.
    pub fn climate_zone(&self) -> ClimateZone {
        match self {
            Province::Saskatchewan => ClimateZone::Zone7B,
            _ => ClimateZone::Zone7A,
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Province::Alberta => "Alberta",
            Province::BritishColumbia => "British Columbia",
            Province::Manitoba => "Manitoba",
            Province::NewBrunswick => "New Brunswick",
            Province::NewfoundlandAndLabrador => "Newfoundland and Labrador",
            Province::NorthwestTerritories => "Northwest Territories",
            Province::NovaScotia => "Nova Scotia",
            Province::Nunavut => "Nunavut",
            Province::Ontario => "Ontario",
            Province::PrinceEdwardIsland => "Prince Edward Island",
            Province::Quebec => "Quebec",
            Province::Saskatchewan => "Saskatchewan",
            Province::Yukon => "Yukon",
            Province::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// A raw form value as stored in a project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
}

impl RawValue {
    pub fn as_text(&self) -> String {
        match self {
            RawValue::Flag(b) => b.to_string(),
            RawValue::Number(n) => n.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// The flat form record as entered. Keys are accepted in snake_case or the
/// camelCase used by stored project records; unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInput {
    #[serde(alias = "atticRsi")]
    pub attic_rsi: Option<RawValue>,
    #[serde(alias = "wallRsi")]
    pub wall_rsi: Option<RawValue>,
    #[serde(alias = "belowGradeRsi")]
    pub below_grade_rsi: Option<RawValue>,
    #[serde(alias = "windowUValue", alias = "windowUvalue")]
    pub window_u_value: Option<RawValue>,
    #[serde(alias = "waterHeater", alias = "waterHeaterType")]
    pub water_heater: Option<RawValue>,
    #[serde(alias = "hrv", alias = "hrvErv", alias = "hrvType")]
    pub ventilation: Option<RawValue>,
    #[serde(alias = "ach50", alias = "airtightnessLevel")]
    pub airtightness: Option<RawValue>,
    #[serde(alias = "buildingVolume")]
    pub building_volume: Option<RawValue>,
    pub province: Option<RawValue>,
    #[serde(alias = "compliancePath", alias = "selectedPathway")]
    pub pathway: Option<RawValue>,
}

impl RawInput {
    pub fn get(&self, field: Field) -> Option<&RawValue> {
        match field {
            Field::AtticRsi => self.attic_rsi.as_ref(),
            Field::WallRsi => self.wall_rsi.as_ref(),
            Field::BelowGradeRsi => self.below_grade_rsi.as_ref(),
            Field::WindowUValue => self.window_u_value.as_ref(),
            Field::WaterHeater => self.water_heater.as_ref(),
            Field::Ventilation => self.ventilation.as_ref(),
            Field::Airtightness => self.airtightness.as_ref(),
            Field::BuildingVolume => self.building_volume.as_ref(),
        }
    }
}

/// A normalized field value ready for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Numeric(Decimal),
    Category(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Numeric(v) => write!(f, "{v}"),
            FieldValue::Category(c) => write!(f, "{c}"),
        }
    }
}

/// Normalized, immutable scoring input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringInput {
    pub attic_rsi: Option<Decimal>,
    pub wall_rsi: Option<Decimal>,
    pub below_grade_rsi: Option<Decimal>,
    pub window_u_value: Option<Decimal>,
    pub water_heater: Option<String>,
    pub ventilation: Option<String>,
    pub airtightness: Option<Decimal>,
    pub building_volume: Option<Decimal>,
    pub province: Province,
    /// Pathway code as entered, trimmed. Classified at scoring time.
    pub pathway: String,
}

impl ScoringInput {
    pub fn value(&self, field: Field) -> Option<FieldValue> {
        let numeric = |v: &Option<Decimal>| v.map(FieldValue::Numeric);
        let category = |v: &Option<String>| v.clone().map(FieldValue::Category);
        match field {
            Field::AtticRsi => numeric(&self.attic_rsi),
            Field::WallRsi => numeric(&self.wall_rsi),
            Field::BelowGradeRsi => numeric(&self.below_grade_rsi),
            Field::WindowUValue => numeric(&self.window_u_value),
            Field::WaterHeater => category(&self.water_heater),
            Field::Ventilation => category(&self.ventilation),
            Field::Airtightness => numeric(&self.airtightness),
            Field::BuildingVolume => numeric(&self.building_volume),
        }
    }

    pub fn climate_zone(&self) -> ClimateZone {
        self.province.climate_zone()
    }
}
