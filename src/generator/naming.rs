use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Lowercase letter directly followed by an uppercase letter.
static CASE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\p{Ll})(\p{Lu})").expect("case boundary regex should be valid"));

// Underscore directly followed by a letter.
static UNDERSCORE_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_(\p{L})").expect("underscore regex should be valid"));

/// Identifiers that cannot appear verbatim in generated Python: keywords,
/// shadowed builtins, and the names the generated module itself imports.
///
/// Kept sorted for binary search.
const PYTHON_RESERVED: &[&str] = &[
    "and", "as", "assert", "bool", "break", "bytes", "class", "continue", "decimal", "def",
    "del", "dict", "elif", "else", "enum", "except", "exec", "facility", "finally", "float",
    "for", "from", "global", "id", "if", "import", "in", "int", "is", "lambda", "list", "map",
    "next", "not", "object", "or", "pass", "print", "raise", "return", "self", "set", "str",
    "try", "tuple", "type", "typing", "while", "with", "yield",
];

/// True if `name` would collide with a Python keyword or runtime symbol.
pub fn is_reserved(name: &str) -> bool {
    PYTHON_RESERVED.binary_search(&name).is_ok()
}

/// Convert a camelCase or PascalCase identifier to snake_case.
///
/// An underscore is inserted wherever a lowercase letter is followed by an
/// uppercase one, then the whole result is lowercased. Reserved results get a
/// trailing underscore.
///
/// # Example
///
/// ```rust
/// use fsdgen_python::generator::snake_case;
///
/// assert_eq!(snake_case("UserId"), "user_id");
/// assert_eq!(snake_case("class"), "class_");
/// ```
pub fn snake_case(text: &str) -> String {
    let mut snake = CASE_BOUNDARY.replace_all(text, "${1}_${2}").to_lowercase();
    if is_reserved(&snake) {
        snake.push('_');
    }
    snake
}

/// Convert a snake_case identifier to PascalCase.
///
/// Single forward pass: each underscore followed by a letter is dropped and
/// the letter uppercased, then a lowercase first character is uppercased.
/// Runs of underscores only lose the last one, so `snake_case` and
/// `pascal_case` are not inverses for every input.
pub fn pascal_case(text: &str) -> String {
    let joined = UNDERSCORE_LETTER.replace_all(text, |caps: &Captures<'_>| caps[1].to_uppercase());
    let first = joined.chars().next();
    match first {
        Some(first) if first.is_lowercase() => first
            .to_uppercase()
            .chain(joined[first.len_utf8()..].chars())
            .collect(),
        _ => joined.into_owned(),
    }
}

/// Locale-independent uppercasing.
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_list_is_sorted() {
        let mut sorted = PYTHON_RESERVED.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, PYTHON_RESERVED);
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("UserId"), "user_id");
        assert_eq!(snake_case("getWidgetById"), "get_widget_by_id");
        assert_eq!(snake_case("already_snake"), "already_snake");
        assert_eq!(snake_case("HTTPStatus"), "httpstatus");
        assert_eq!(snake_case(""), "");
    }

    #[test]
    fn test_snake_case_reserved() {
        assert_eq!(snake_case("class"), "class_");
        assert_eq!(snake_case("Type"), "type_");
        assert_eq!(snake_case("id"), "id_");
        assert_eq!(snake_case("facility"), "facility_");
        assert_eq!(snake_case("types"), "types");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("user_id"), "UserId");
        assert_eq!(pascal_case("widget"), "Widget");
        assert_eq!(pascal_case("Widget"), "Widget");
        assert_eq!(pascal_case("a_b_c"), "ABC");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_pascal_case_underscore_runs() {
        assert_eq!(pascal_case("multiple__underscores"), "Multiple_Underscores");
        assert_eq!(pascal_case("trailing_"), "Trailing_");
        assert_eq!(pascal_case("_leading"), "Leading");
        assert_eq!(pascal_case("v_2"), "V_2");
    }

    #[test]
    fn test_to_upper() {
        assert_eq!(to_upper("value_one"), "VALUE_ONE");
        assert_eq!(to_upper("straße"), "STRASSE");
    }
}
