use crate::AttributeValue;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Classification of one guessed attribute against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MatchClass {
    Correct,
    Partial,
    Incorrect,
}

/// A classification together with its player-facing hint text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comparison {
    pub class: MatchClass,
    pub hint: String,
}

impl Comparison {
    pub fn correct() -> Self {
        Self {
            class: MatchClass::Correct,
            hint: "Correct".to_string(),
        }
    }

    pub fn incorrect() -> Self {
        Self {
            class: MatchClass::Incorrect,
            hint: "Incorrect".to_string(),
        }
    }

    pub fn with_hint(class: MatchClass, hint: impl Into<String>) -> Self {
        Self {
            class,
            hint: hint.into(),
        }
    }

    pub fn is_correct(&self) -> bool {
        self.class == MatchClass::Correct
    }
}

/// One scored cell of a result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AttributeResult {
    pub attribute: String,
    pub value: AttributeValue,
    pub comparison: Comparison,
}

/// One scored guess: the identity cell first, then one cell per schema
/// column in schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultRow {
    pub entity: String,
    pub cells: Vec<AttributeResult>,
}

impl ResultRow {
    /// The identity comparison doubles as the win condition.
    pub fn is_winning(&self) -> bool {
        self.cells
            .first()
            .is_some_and(|cell| cell.comparison.is_correct())
    }
}
