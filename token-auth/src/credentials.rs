use indexmap::IndexMap;
use serde::Serialize;

use crate::header::ParamPair;

/// Parameters sent alongside the token, in header order.
///
/// A key repeated in the header keeps its last value.
pub type TokenOptions = IndexMap<String, String>;

/// Token and auxiliary parameters read from an `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedAuthentication {
    /// Token value; may be empty when the header carried none
    pub token: String,

    /// Every other parameter, without the `token` entry
    pub options: TokenOptions,
}

impl ParsedAuthentication {
    /// Build from tokenizer output.
    ///
    /// The first pair is taken as the token whatever its key; the rest become
    /// options.
    pub fn from_pairs(pairs: Vec<ParamPair>) -> Self {
        let mut pairs = pairs.into_iter();
        let token = pairs.next().map(|pair| pair.value).unwrap_or_default();
        let options = pairs.map(ParamPair::into_parts).collect();

        Self { token, options }
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Look up an option by key.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}
