use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A recipe as served by the recipe endpoint.
///
/// Only `id`, `recipeName` and `tip` are interpreted here. Every other field the
/// backend sends is kept in `extra` so card renderers can still show it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(rename = "recipeName", default)]
    pub recipe_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, recipe_name: impl Into<String>) -> Self {
        Recipe {
            id: id.into(),
            recipe_name: recipe_name.into(),
            ..Default::default()
        }
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    /// Integer value of the id.
    ///
    /// Leading whitespace is skipped and an optional sign is honoured, then the
    /// leading run of decimal digits is read. Trailing garbage is ignored, so
    /// `"12abc"` is 12. Returns `None` when there are no digits at all. The
    /// value is not bounded by any machine integer width.
    pub fn numeric_id(&self) -> Option<NumericId> {
        NumericId::parse_prefix(&self.id)
    }

    /// Tip text if the recipe carries a non-empty one.
    pub fn tip_text(&self) -> Option<&str> {
        self.tip.as_deref().filter(|tip| !tip.is_empty())
    }
}

/// Integer parsed from a recipe id, of any magnitude.
///
/// Ordered by numeric value. Kept as a sign and a digit string without leading
/// zeros, so ids wider than 64 bits still compare correctly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericId {
    negative: bool,
    magnitude: String,
}

impl NumericId {
    fn parse_prefix(text: &str) -> Option<Self> {
        let trimmed = text.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return None;
        }

        let magnitude = rest[..digits_len].trim_start_matches('0');
        if magnitude.is_empty() {
            // -0 and 0 are the same id value
            return Some(Self {
                negative: false,
                magnitude: "0".to_string(),
            });
        }

        Some(Self {
            negative,
            magnitude: magnitude.to_string(),
        })
    }

    /// The value as an `i64`, if it fits
    pub fn as_i64(&self) -> Option<i64> {
        let sign = if self.negative { "-" } else { "" };
        format!("{}{}", sign, self.magnitude).parse().ok()
    }
}

fn cmp_magnitude(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for NumericId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitude(&self.magnitude, &other.magnitude),
            (true, true) => cmp_magnitude(&other.magnitude, &self.magnitude),
        }
    }
}

impl PartialOrd for NumericId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
