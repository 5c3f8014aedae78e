use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Contract violations surfaced by the engine. Player input errors never
/// appear here; the session rejects those silently.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    #[error("catalog for mode '{0}' is empty")]
    EmptyCatalog(String),
    #[error("failed to parse catalog data: {0}")]
    CatalogParse(String),
}
