use crate::locale::LocaleSettings;
use serde_json::Value;

pub(crate) fn format_text(value: Option<&Value>, locale: &LocaleSettings) -> String {
    let placeholder = || locale.placeholder.clone();
    match value {
        None | Some(Value::Null) => placeholder(),
        Some(Value::String(s)) if s.trim().is_empty() => placeholder(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) if items.is_empty() => placeholder(),
        Some(Value::Object(map)) if map.is_empty() => placeholder(),
        // Joined rows such as `banks: { name: .. }` display by name.
        Some(Value::Object(map)) => match map.get("name") {
            Some(name) if has_content(name) => format_text(Some(name), locale),
            _ => Value::Object(map.clone()).to_string(),
        },
        Some(other) => other.to_string(),
    }
}

fn has_content(value: &Value) -> bool {
    !matches!(value, Value::Null) && !matches!(value, Value::String(s) if s.trim().is_empty())
}
