use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One typed attribute value on a catalog entity. Catalog JSON carries these
/// as plain numbers, strings, or string arrays, so the representation is
/// untagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
    Tags(Vec<String>),
}

impl AttributeValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tags(&self) -> Option<&[String]> {
        match self {
            AttributeValue::Tags(tags) => Some(tags),
            _ => None,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(tags: Vec<&str>) -> Self {
        AttributeValue::Tags(tags.into_iter().map(str::to_string).collect())
    }
}

/// Which word pair a numeric attribute uses for its direction hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DirectionStyle {
    HighLow,
    HeavyLight,
    FarClose,
}

impl DirectionStyle {
    /// Hint text for a guess above (`true`) or below (`false`) the target.
    pub fn hint(self, above: bool) -> &'static str {
        match (self, above) {
            (DirectionStyle::HighLow, true) => "Too high",
            (DirectionStyle::HighLow, false) => "Too low",
            (DirectionStyle::HeavyLight, true) => "Too heavy",
            (DirectionStyle::HeavyLight, false) => "Too light",
            (DirectionStyle::FarClose, true) => "Too far",
            (DirectionStyle::FarClose, false) => "Too close",
        }
    }
}

/// How a schema column is compared. Tight and wide numeric comparisons differ
/// only in tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum AttributeKind {
    Exact,
    Numeric {
        tolerance: f64,
        direction: DirectionStyle,
    },
    TagSet,
}

/// One column of a category's attribute schema, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AttributeSpec {
    pub name: String,
    pub kind: AttributeKind,
}

impl AttributeSpec {
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn exact(name: impl Into<String>) -> Self {
        Self::new(name, AttributeKind::Exact)
    }

    pub fn numeric(name: impl Into<String>, tolerance: f64, direction: DirectionStyle) -> Self {
        Self::new(
            name,
            AttributeKind::Numeric {
                tolerance,
                direction,
            },
        )
    }

    pub fn tag_set(name: impl Into<String>) -> Self {
        Self::new(name, AttributeKind::TagSet)
    }
}
