use once_cell::sync::Lazy;
use regex::Regex;

use super::params::ParamPair;

/// Scheme prefix every Token `Authorization` header starts with.
pub const TOKEN_SCHEME: &str = "Token ";

/// Key the leading parameter is normalized to.
pub const TOKEN_KEY: &str = "token=";

// Clients mix all three separator styles.
static PAIR_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(?:,|;|\t+)\s*").expect("delimiter pattern is valid"));

/// Check whether a header value uses the Token scheme.
///
/// The match is case-sensitive and anchored at the start of the string,
/// and requires the single trailing space.
pub fn has_token_scheme(header: &str) -> bool {
    header.starts_with(TOKEN_SCHEME)
}

/// Parse a Token `Authorization` header into ordered parameter pairs.
///
/// Callers are expected to check [`has_token_scheme`] first. The returned
/// sequence is never empty and its first key is always `token`, whether the
/// client sent `Token abc123` or `Token token="abc123"`. Duplicate keys are
/// kept in order.
///
/// # Arguments
/// * `header` - Raw `Authorization` header value
///
/// # Returns
/// Parameter pairs in header order, values unquoted
pub fn tokenize(header: &str) -> Vec<ParamPair> {
    rewrite_param_values(params_array_from(raw_params(header)))
}

/// Strip the scheme prefix and split the remainder into raw `key=value` strings.
///
/// A leading bare value gets the `token=` key prepended.
pub fn raw_params(header: &str) -> Vec<String> {
    let blob = header.strip_prefix(TOKEN_SCHEME).unwrap_or(header);

    let mut params: Vec<String> = PAIR_DELIMITERS
        .split(blob)
        .map(str::to_string)
        .collect();

    // `Regex::split` always yields at least one item, even for "".
    if let Some(first) = params.first_mut() {
        if !first.starts_with(TOKEN_KEY) {
            first.insert_str(0, TOKEN_KEY);
        }
    }

    params
}

/// Split each raw parameter on its first `=`.
///
/// Everything after the first `=` belongs to the value, so values may contain
/// `=` but keys may not. A parameter without `=` becomes a key with an empty value.
pub fn params_array_from<I, S>(raw: I) -> Vec<ParamPair>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|param| match param.as_ref().split_once('=') {
            Some((key, value)) => ParamPair::new(key, value),
            None => ParamPair::new(param.as_ref(), ""),
        })
        .collect()
}

/// Unquote every value in place.
pub fn rewrite_param_values(pairs: Vec<ParamPair>) -> Vec<ParamPair> {
    pairs
        .into_iter()
        .map(|mut pair| {
            if let Some(inner) = strip_quotes(&pair.value) {
                pair.value = inner.to_string();
            }
            pair
        })
        .collect()
}

/// Remove one pair of surrounding double quotes, if both are present.
///
/// Values without a matching pair of quotes come back unchanged.
pub fn unquote(value: &str) -> &str {
    strip_quotes(value).unwrap_or(value)
}

fn strip_quotes(value: &str) -> Option<&str> {
    value.strip_prefix('"')?.strip_suffix('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(expected: &[(&str, &str)]) -> Vec<ParamPair> {
        expected
            .iter()
            .map(|(key, value)| ParamPair::new(*key, *value))
            .collect()
    }

    #[test]
    fn test_has_token_scheme() {
        assert!(has_token_scheme("Token abc"));
        assert!(has_token_scheme("Token "));
        assert!(!has_token_scheme("token abc"));
        assert!(!has_token_scheme("Bearer abc"));
        assert!(!has_token_scheme("Token"));
        assert!(!has_token_scheme(" Token abc"));
    }

    #[test]
    fn test_raw_params_mixed_delimiters() {
        let result = raw_params("Token token=fake; test=something, param2=true");
        assert_eq!(result, vec!["token=fake", "test=something", "param2=true"]);
    }

    #[test]
    fn test_raw_params_tabs_and_padding() {
        let result = raw_params("Token token=fake\t\ttest=something ,  param2=true");
        assert_eq!(result, vec!["token=fake", "test=something", "param2=true"]);
    }

    #[test]
    fn test_raw_params_prepends_token_key() {
        assert_eq!(raw_params("Token abc123"), vec!["token=abc123"]);
        assert_eq!(raw_params("Token token=abc123"), vec!["token=abc123"]);
    }

    #[test]
    fn test_raw_params_only_first_param_inferred() {
        let result = raw_params("Token abc123, flag");
        assert_eq!(result, vec!["token=abc123", "flag"]);
    }

    #[test]
    fn test_params_array_from() {
        let result = params_array_from(["token=fake", "param2=true"]);
        assert_eq!(result, pairs(&[("token", "fake"), ("param2", "true")]));
    }

    #[test]
    fn test_params_array_from_splits_on_first_equals() {
        let result = params_array_from(["token=abc==", "sig=a=b=c"]);
        assert_eq!(result, pairs(&[("token", "abc=="), ("sig", "a=b=c")]));
    }

    #[test]
    fn test_params_array_from_missing_value() {
        let result = params_array_from(["flag", "empty="]);
        assert_eq!(result, pairs(&[("flag", ""), ("empty", "")]));
    }

    #[test]
    fn test_rewrite_param_values_removes_quotes() {
        let result = rewrite_param_values(pairs(&[("token", "\"fake\""), ("param2", "\"true\"")]));
        assert_eq!(result, pairs(&[("token", "fake"), ("param2", "true")]));
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"info\""), "info");
        assert_eq!(unquote("info"), "info");
        assert_eq!(unquote("\"\""), "");
        assert_eq!(unquote(""), "");
    }

    #[test]
    fn test_unquote_requires_both_quotes() {
        assert_eq!(unquote("\"open"), "\"open");
        assert_eq!(unquote("close\""), "close\"");
        assert_eq!(unquote("\""), "\"");
    }

    #[test]
    fn test_unquote_is_stable_on_unquoted_values() {
        let once = unquote("\"mytesttoken\"");
        assert_eq!(unquote(once), once);
    }

    #[test]
    fn test_tokenize_delimiter_styles_are_equivalent() {
        let expected = pairs(&[("token", "fake"), ("test", "something"), ("param2", "true")]);

        for header in [
            "Token token=fake; test=something, param2=true",
            "Token token=fake, test=something, param2=true",
            "Token token=fake;test=something;param2=true",
            "Token token=fake\ttest=something\t\tparam2=true",
            "Token token=fake ;\ttest=something\t, param2=true",
        ] {
            assert_eq!(tokenize(header), expected, "header: {header:?}");
        }
    }

    #[test]
    fn test_tokenize_bare_and_keyed_token_are_equivalent() {
        let bare = tokenize("Token abc123");
        let keyed = tokenize("Token token=abc123");
        let quoted = tokenize("Token token=\"abc123\"");

        assert_eq!(bare[0], ParamPair::new("token", "abc123"));
        assert_eq!(bare, keyed);
        assert_eq!(bare, quoted);
    }

    #[test]
    fn test_tokenize_quoted_params() {
        let result = tokenize("Token token=\"mytesttoken\", extraparams=\"info\"");
        assert_eq!(
            result,
            pairs(&[("token", "mytesttoken"), ("extraparams", "info")])
        );
    }

    #[test]
    fn test_tokenize_empty_blob() {
        assert_eq!(tokenize("Token "), pairs(&[("token", "")]));
    }

    #[test]
    fn test_tokenize_keeps_duplicates_and_empty_params() {
        let result = tokenize("Token abc, a=1, , a=2,");
        assert_eq!(
            result,
            pairs(&[("token", "abc"), ("a", "1"), ("", ""), ("a", "2"), ("", "")])
        );
    }

    #[test]
    fn test_tokenize_first_key_is_always_token() {
        for header in ["Token ", "Token =x", "Token a=b", "Token ,,,", "Token \"q\""] {
            assert_eq!(tokenize(header)[0].key, "token", "header: {header:?}");
        }
    }
}
