use serde::{Deserialize, Serialize};

/// The glyph shown for every missing or unusable value.
pub const PLACEHOLDER: &str = "—";

/// How integer digits are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// `12,34,567`: last three digits, then pairs (en-IN).
    #[default]
    Indian,
    /// `1,234,567`.
    Western,
}

/// Locale-dependent formatting properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    pub placeholder: String,
    pub currency_symbol: String,
    pub grouping: DigitGrouping,
    pub grouping_separator: char,
    pub minus_sign: char,
    /// chrono strftime pattern for calendar dates.
    pub date_format: String,
    /// chrono strftime pattern for the generation timestamp.
    pub timestamp_format: String,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER.to_string(),
            currency_symbol: "₹".to_string(),
            grouping: DigitGrouping::Indian,
            grouping_separator: ',',
            minus_sign: '-',
            date_format: "%d/%m/%Y".to_string(),
            timestamp_format: "%d/%m/%Y, %I:%M %p".to_string(),
        }
    }
}
