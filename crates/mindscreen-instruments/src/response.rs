use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answers keyed by item id (`phq_1`, `gad_3`, ...). Values are kept as
/// submitted; scoring coerces them, validation inspects them strictly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<String, Value>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item_id: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(item_id.into(), value.into());
    }

    pub fn get(&self, item_id: &str) -> Option<&Value> {
        self.0.get(item_id)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw JSON object, for persisting alongside the result.
    pub fn to_json_map(&self) -> serde_json::Map<String, Value> {
        self.0.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl From<serde_json::Map<String, Value>> for ResponseSet {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Lenient integer reading used for scoring. Never fails: anything that
/// does not start with an integer counts as 0.
///
/// Follows how a browser-side `parseInt` reads the value's text form.
/// Strings skip leading whitespace, take an optional sign and the leading
/// run of digits (hexadecimal after `0x`), and ignore the rest, so `"2abc"`
/// and `"2.9"` both read as 2 and `"0x1F"` reads as 31. Numbers truncate
/// toward zero unless their text form is exponential (`1e21`, `1e-7`), in
/// which case only the leading digit counts. An array reads as its first
/// element. Results outside `i32` saturate.
pub fn coerce_option(value: &Value) -> i32 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                saturate(i)
            } else if let Some(f) = n.as_f64() {
                let magnitude = f.abs();
                if f != 0.0 && !(1e-6..1e21).contains(&magnitude) {
                    leading_integer(&format!("{f:e}")).unwrap_or(0)
                } else {
                    // `as` saturates and maps NaN to 0.
                    f.trunc() as i32
                }
            } else {
                n.as_u64().map(|u| u.min(i32::MAX as u64) as i32).unwrap_or(0)
            }
        }
        Value::String(s) => leading_integer(s).unwrap_or(0),
        Value::Array(items) => items.first().map(coerce_option).unwrap_or(0),
        _ => 0,
    }
}

/// Strict integer reading used by validation: a whole JSON number, or a
/// string that is entirely a decimal integer once trimmed.
pub fn strict_option(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).ok()
            } else {
                let f = n.as_f64()?;
                (f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64)
                    .then_some(f as i32)
            }
        }
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

fn leading_integer(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        _ => (10, digits),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut total: i64 = 0;
    for c in digits[..end].chars() {
        let digit = c.to_digit(radix).map(i64::from).unwrap_or(0);
        total = total
            .saturating_mul(i64::from(radix))
            .saturating_add(digit);
    }
    Some(saturate(if negative { -total } else { total }))
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
