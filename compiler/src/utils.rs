//! Identifier and casing transforms for Haskell output.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashSet;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[[:alnum:]]+").unwrap();

    /// Haskell 2010 reserved identifiers plus the keywords GHC extensions
    /// claim. A lower-camel accessor that lands on one of these gets a `'`.
    pub static ref HASKELL_KEYWORDS: HashSet<&'static str> = [
        "case", "class", "data", "default", "deriving", "do", "else",
        "foreign", "if", "import", "in", "infix", "infixl", "infixr",
        "instance", "let", "module", "newtype", "of", "then", "type",
        "where",
        "mdo", "rec", "proc", "forall", "family", "pattern",
    ]
    .into_iter()
    .collect();
}

/// Quotes `text` as a string literal. JSON escaping is valid Haskell for
/// the ASCII identifiers protobuf allows.
pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

/// Upper-cases the first character of every alphanumeric run and lower-cases
/// the rest, e.g. `"hELLO"` becomes `"Hello"` and `"foo.v1"` becomes `"Foo.V1"`.
pub fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    WORD.replace_all(&lower, |caps: &Captures| {
        let word = &caps[0];
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    })
    .into_owned()
}

/// `snake_case` to `camelCase`.
pub fn to_camel_case(s: &str) -> String {
    s.split('_')
        .enumerate()
        .map(|(i, part)| if i == 0 { part.to_lowercase() } else { capitalize(part) })
        .collect()
}

/// `snake_case` to `PascalCase`.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_').map(capitalize).collect()
}

pub fn escape_haskell_keyword(s: &str) -> String {
    if HASKELL_KEYWORDS.contains(s) {
        format!("{}'", s)
    } else {
        s.to_string()
    }
}

/// The accessor name proto-lens generates for a field.
pub fn to_haskell_field_name(s: &str) -> String {
    escape_haskell_keyword(&to_camel_case(s))
}

/// Resolves a dotted type reference.
///
/// `.foo.Message` => `Message`
/// `google.protobuf.Empty` => `Google.Protobuf.Empty`
pub fn to_haskell_type(s: &str) -> String {
    if s.len() > 1 && s.starts_with('.') {
        return s.rsplit('.').next().unwrap_or(s).to_string();
    }
    s.split('.').map(capitalize).collect::<Vec<_>>().join(".")
}

/// Splits a proto file path into Haskell module segments:
/// `foo/bar_baz.proto` => `["Foo", "BarBaz"]`. Dots inside a directory name
/// separate segments too, so the module name and the file path agree.
pub fn module_segments(path: &str) -> Vec<String> {
    let stem = match path.rfind('.') {
        Some(dot) if !path[dot..].contains('/') => &path[..dot],
        _ => path,
    };
    stem.split(|c| c == '/' || c == '.')
        .filter(|segment| !segment.is_empty())
        .map(to_pascal_case)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("name", "name")]
    #[test_case("full_name", "fullName")]
    #[test_case("HTTP_status_CODE", "httpStatusCode")]
    #[test_case("a__b", "aB")]
    #[test_case("field2_value", "field2Value")]
    fn camel_case(input: &str, expected: &str) {
        assert_eq!(to_camel_case(input), expected);
    }

    #[test_case("status", "Status")]
    #[test_case("my_oneof", "MyOneof")]
    #[test_case("HTTP_status", "HttpStatus")]
    fn pascal_case(input: &str, expected: &str) {
        assert_eq!(to_pascal_case(input), expected);
    }

    #[test_case("type", "type'")]
    #[test_case("data", "data'")]
    #[test_case("pattern", "pattern'")]
    #[test_case("id", "id")]
    #[test_case("types", "types")]
    fn keyword_escaping(input: &str, expected: &str) {
        assert_eq!(to_haskell_field_name(input), expected);
    }

    #[test]
    fn escaping_happens_after_casing() {
        assert_eq!(to_haskell_field_name("TYPE"), "type'");
        assert_eq!(to_haskell_field_name("type_name"), "typeName");
    }

    #[test_case(".foo.bar.Message", "Message")]
    #[test_case(".Message", "Message")]
    #[test_case("google.protobuf.Empty", "Google.Protobuf.Empty")]
    #[test_case("foo", "Foo")]
    fn type_references(input: &str, expected: &str) {
        assert_eq!(to_haskell_type(input), expected);
    }

    #[test_case("simple.proto", &["Simple"])]
    #[test_case("foo/bar_baz.proto", &["Foo", "BarBaz"])]
    #[test_case("api/v1.beta/service.proto", &["Api", "V1", "Beta", "Service"])]
    #[test_case("./local/thing.proto", &["Local", "Thing"])]
    #[test_case("no_extension", &["NoExtension"])]
    fn module_paths(input: &str, expected: &[&str]) {
        assert_eq!(module_segments(input), expected);
    }

    #[test]
    fn quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
    }
}
