use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A normalized identifier: the lowercase, ASCII-alphanumeric form of a
/// display name (`"Mr. Mime"` -> `"mrmime"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ID(String);

impl ID {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the string is already in normalized form.
    pub fn is_normalized(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    }
}

/// Normalize any display name into an [`ID`].
pub fn to_id(s: &str) -> ID {
    ID(s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect())
}

impl fmt::Display for ID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ID {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ID {
    fn from(s: &str) -> Self {
        to_id(s)
    }
}

impl From<String> for ID {
    fn from(s: String) -> Self {
        if ID::is_normalized(&s) {
            ID(s)
        } else {
            to_id(&s)
        }
    }
}
