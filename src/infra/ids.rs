use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Непрозрачный идентификатор колоды.
///
/// Внутри — строка UUID v4; наружу (JSON, хранилище) уходит как есть.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DeckId(String);

impl DeckId {
    /// Свежий уникальный ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for DeckId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DeckId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
