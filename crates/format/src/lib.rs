//! Field formatters for loan documents.
//!
//! Every formatter is total: malformed, missing or unparseable input degrades
//! to the placeholder glyph and never panics. The free functions use
//! [`LocaleSettings::default`]; a [`Formatter`] carries configured settings.

mod currency;
mod date;
mod locale;
mod text;

pub use currency::{coerce_number, group_digits};
pub use date::parse_date;
pub use locale::{DigitGrouping, LocaleSettings, PLACEHOLDER};

use chrono::NaiveDateTime;
use serde_json::Value;

/// How a declared field's raw value is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Date,
    Currency,
}

/// Formats raw record values with one set of locale settings.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    locale: LocaleSettings,
}

impl Formatter {
    pub fn new(locale: LocaleSettings) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &LocaleSettings {
        &self.locale
    }

    pub fn placeholder(&self) -> &str {
        &self.locale.placeholder
    }

    pub fn format(&self, kind: FieldKind, value: Option<&Value>) -> String {
        match kind {
            FieldKind::Text => self.text(value),
            FieldKind::Date => self.date(value),
            FieldKind::Currency => self.currency(value),
        }
    }

    pub fn text(&self, value: Option<&Value>) -> String {
        text::format_text(value, &self.locale)
    }

    pub fn date(&self, value: Option<&Value>) -> String {
        date::format_date(value, &self.locale)
    }

    pub fn currency(&self, value: Option<&Value>) -> String {
        currency::format_currency(value, &self.locale)
    }

    /// The generation timestamp line printed in headers and footers.
    pub fn timestamp(&self, at: &NaiveDateTime) -> String {
        date::format_timestamp(at, &self.locale)
    }
}

/// Text with the default locale.
pub fn format_text(value: Option<&Value>) -> String {
    text::format_text(value, &LocaleSettings::default())
}

/// `DD/MM/YYYY` with the default locale.
pub fn format_date(value: Option<&Value>) -> String {
    date::format_date(value, &LocaleSettings::default())
}

/// Whole-rupee currency with the default locale.
pub fn format_currency(value: Option<&Value>) -> String {
    currency::format_currency(value, &LocaleSettings::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn malformed_inputs() -> Vec<Option<Value>> {
        vec![
            None,
            Some(Value::Null),
            Some(json!("")),
            Some(json!("   ")),
            Some(json!("not a number")),
            Some(json!("12abc")),
            Some(json!(false)),
            Some(json!([])),
            Some(json!({})),
        ]
    }

    #[test]
    fn malformed_input_never_leaks_js_style_garbage() {
        let f = Formatter::default();
        for input in malformed_inputs() {
            for kind in [FieldKind::Text, FieldKind::Date, FieldKind::Currency] {
                let out = f.format(kind, input.as_ref());
                assert!(!out.is_empty(), "{:?} {:?} produced empty output", kind, input);
                for bad in ["NaN", "undefined", "Invalid Date", "null"] {
                    assert!(!out.contains(bad), "{:?} {:?} produced {}", kind, input, out);
                }
            }
        }
    }

    #[test]
    fn dispatches_on_field_kind() {
        let f = Formatter::default();
        let v = json!(1100000);
        assert_eq!(f.format(FieldKind::Currency, Some(&v)), "₹11,00,000");
        assert_eq!(f.format(FieldKind::Text, Some(&v)), "1100000");
        assert_eq!(f.format(FieldKind::Date, Some(&json!("2025-03-09"))), "09/03/2025");
    }

    #[test]
    fn custom_locale_changes_placeholder_everywhere() {
        let f = Formatter::new(LocaleSettings {
            placeholder: "N/A".into(),
            ..LocaleSettings::default()
        });
        assert_eq!(f.text(None), "N/A");
        assert_eq!(f.date(Some(&json!("garbage"))), "N/A");
        assert_eq!(f.currency(Some(&Value::Null)), "N/A");
    }
}
