use crate::error::DslGenError;

pub fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

pub fn error(msg: &str, line: usize, column: usize) -> DslGenError {
    DslGenError::ParseError {
        msg: msg.to_string(),
        line,
        column,
    }
}

/// Converts a string to PascalCase.
/// - If the string contains underscores, it splits on underscores and upper-cases the
///   first letter of each word, lower-casing the rest.
/// - If the string is fully uppercase it keeps only the first letter uppercase.
/// - Otherwise it only upper-cases the first letter.
pub fn to_pascal_case(s: &str) -> String {
    fn capitalize(word: &str, lower_rest: bool) -> String {
        let mut chars = word.chars();
        match chars.next() {
            None => String::new(),
            Some(first) if lower_rest => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
            Some(first) => first.to_uppercase().to_string() + chars.as_str(),
        }
    }

    if s.contains('_') {
        s.split('_')
         .filter(|word| !word.is_empty())
         .map(|word| capitalize(word, true))
         .collect::<String>()
    } else {
        capitalize(s, s == s.to_uppercase())
    }
}

/// Converts a string to snake_case.
/// Acronyms stay together, so "sessionID" becomes "session_id" and
/// "DartTestGroup" becomes "dart_test_group".
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                if prev != '_' && (!prev.is_uppercase() || (i + 1 < chars.len() && chars[i + 1].is_lowercase())) {
                    snake.push('_');
                }
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Escapes Rust reserved keywords by suffixing with an underscore.
pub fn escape_rust_keyword(s: &str) -> String {
    let keywords = [
        "as", "async", "await", "break", "const", "continue", "crate", "dyn",
        "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
        "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
        "self", "Self", "static", "struct", "super", "trait", "true", "type",
        "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "typeof", "unsized", "virtual",
        "yield", "try", "gen",
    ];
    if keywords.contains(&s) {
        format!("{}_", s)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("DartTestGroup"), "dart_test_group");
        assert_eq!(to_snake_case("clientID"), "client_id");
        assert_eq!(to_snake_case("HTTPRequest"), "http_request");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("Run_Tests"), "run_tests");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("tests"), "Tests");
        assert_eq!(to_pascal_case("test_cases"), "TestCases");
        assert_eq!(to_pascal_case("SIGNAL"), "Signal");
        assert_eq!(to_pascal_case("dartTestGroup"), "DartTestGroup");
    }

    #[test]
    fn test_keywords_are_escaped() {
        assert_eq!(escape_rust_keyword("type"), "type_");
        assert_eq!(escape_rust_keyword("name"), "name");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("tests"), "\"tests\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
    }
}
