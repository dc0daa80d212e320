use crate::locale::{DigitGrouping, LocaleSettings};
use serde_json::Value;

/// Numeric coercion for amount fields: JSON numbers and numeric strings.
///
/// Returns `None` for anything that is not a finite number.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            // `f64::from_str` also accepts "inf" and "NaN" spellings.
            if s.is_empty() || s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Inserts grouping separators into a run of ASCII digits.
pub fn group_digits(digits: &str, grouping: DigitGrouping, separator: char) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let mut boundaries = Vec::new();
    match grouping {
        DigitGrouping::Western => {
            let mut i = len;
            while i > 3 {
                i -= 3;
                boundaries.push(i);
            }
        }
        DigitGrouping::Indian => {
            let mut i = len - 3;
            boundaries.push(i);
            while i > 2 {
                i -= 2;
                boundaries.push(i);
            }
        }
    }
    boundaries.reverse();

    let mut out = String::with_capacity(len + boundaries.len());
    let mut start = 0;
    for b in boundaries {
        out.push_str(&digits[start..b]);
        out.push(separator);
        start = b;
    }
    out.push_str(&digits[start..]);
    out
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.trim().is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

pub(crate) fn format_currency(value: Option<&Value>, locale: &LocaleSettings) -> String {
    let Some(amount) = value.filter(|v| !is_falsy(v)).and_then(coerce_number) else {
        return locale.placeholder.clone();
    };

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_digits(&digits, locale.grouping, locale.grouping_separator);
    if rounded < 0.0 {
        format!("{}{}{}", locale.minus_sign, locale.currency_symbol, grouped)
    } else {
        format!("{}{}", locale.currency_symbol, grouped)
    }
}
