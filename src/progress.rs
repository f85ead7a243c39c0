use serde_json::{Map, Value};

use crate::META_KEY;

/// Compute the translation completion percentage for a parsed dictionary.
///
/// Every key except the reserved `$meta` entry counts toward the total. A
/// value counts as translated when it is truthy and its string rendering is
/// non-blank: strings must trim to non-empty, `false`, `null` and `0` never
/// count, and arrays/objects always do.
pub fn calculate_progress(dict: &Map<String, Value>) -> u8 {
    let mut total = 0u32;
    let mut translated = 0u32;

    for (key, value) in dict {
        if key == META_KEY {
            continue;
        }
        total += 1;
        if is_translated(value) {
            translated += 1;
        }
    }

    if total == 0 {
        return 0;
    }

    (f64::from(translated) / f64::from(total) * 100.0).round() as u8
}

fn is_translated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
