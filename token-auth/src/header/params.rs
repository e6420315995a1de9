use std::fmt;

/// A single `key=value` parameter from a Token `Authorization` header.
///
/// The value has already had its surrounding double quotes removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamPair {
    pub key: String,
    pub value: String,
}

impl ParamPair {
    /// Create a pair from anything string-like.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl From<(String, String)> for ParamPair {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

impl fmt::Display for ParamPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
