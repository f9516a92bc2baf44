use regex::Regex;
use lazy_static::lazy_static;
use crate::utils::{quote, error};
use crate::error::DslGenError;

lazy_static! {
    pub static ref TOKEN_REGEX: Regex = Regex::new(
        r#"(-?\d+(?:\.\d+)?(?:[eE][-+]?\d+)?|"(?:[^"\\\n]|\\.)*"|[=;{}<>,\[\]()]|\.?[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*|//[^\n]*|/\*(?s:.*?)\*/|\s+)"#
    ).unwrap();
}

#[derive(Debug, PartialEq)]
pub struct Token {
    pub text:   String,
    pub line:   usize,
    pub column: usize,
}

fn is_trivia(part: &str) -> bool {
    part.starts_with("//") || part.starts_with("/*") || part.trim().is_empty()
}

/// Splits `.proto` text into tokens, dropping whitespace and comments.
/// The returned list always ends with an empty EOF token.
pub fn tokenize_schema(text: &str) -> Result<Vec<Token>, DslGenError> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut column = 1;
    let mut last_end = 0;

    for mat in TOKEN_REGEX.find_iter(text) {
        let start = mat.start();
        let end   = mat.end();
        let part  = mat.as_str();

        if start > last_end {
            let unexpected = &text[last_end..start];
            return Err(error(
                &format!("Syntax error: {}", quote(unexpected)),
                line,
                column,
            ));
        }

        if !is_trivia(part) {
            tokens.push(Token {
                text:   part.to_string(),
                line,
                column,
            });
        }

        let newline_count = part.matches('\n').count();
        if newline_count > 0 {
            line += newline_count;
            if let Some(last_line_part) = part.split('\n').last() {
                column = last_line_part.chars().count() + 1;
            }
        } else {
            column += part.chars().count();
        }

        last_end = end;
    }

    if last_end != text.len() {
        let unexpected = &text[last_end..];
        return Err(error(
            &format!("Syntax error: {}", quote(unexpected)),
            line,
            column,
        ));
    }

    tokens.push(Token {
        text:   "".to_string(),
        line,
        column,
    });
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_field() {
        let input = "string name = 1;";
        let expected = vec![
            Token { text: "string".into(), line: 1, column: 1 },
            Token { text: "name".into(),   line: 1, column: 8 },
            Token { text: "=".into(),      line: 1, column: 13 },
            Token { text: "1".into(),      line: 1, column: 15 },
            Token { text: ";".into(),      line: 1, column: 16 },
            Token { text: "".into(),       line: 1, column: 17 },
        ];
        let got = tokenize_schema(input).unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_tokenize_qualified_type_and_comments() {
        let input = "// header\nrepeated .patrol.DartTestCase tests = 2; /* trailing */";
        let got = tokenize_schema(input).unwrap();
        let texts: Vec<&str> = got.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["repeated", ".patrol.DartTestCase", "tests", "=", "2", ";", ""]);
        assert_eq!((got[0].line, got[0].column), (2, 1));
        assert_eq!((got[1].line, got[1].column), (2, 10));
    }

    #[test]
    fn test_tokenize_string_literal_and_map() {
        let input = "syntax = \"proto3\";\nmap<string, int32> counts = 4;";
        let got = tokenize_schema(input).unwrap();
        let texts: Vec<&str> = got.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["syntax", "=", "\"proto3\"", ";", "map", "<", "string", ",", "int32", ">", "counts", "=", "4", ";", ""]
        );
    }

    #[test]
    fn test_tokenize_signed_and_float_numbers() {
        let input = "option a = -1; option b = 1.5; option c = 2.5e-3;";
        let got = tokenize_schema(input).unwrap();
        let numbers: Vec<&str> = got
            .iter()
            .map(|t| t.text.as_str())
            .filter(|t| t.starts_with(|c: char| c == '-' || c.is_ascii_digit()))
            .collect();
        assert_eq!(numbers, vec!["-1", "1.5", "2.5e-3"]);
    }

    #[test]
    fn test_tokenize_unexpected_text() {
        let input = "string name = 1 @";
        let err = tokenize_schema(input).unwrap_err();
        assert!(
            matches!(err, DslGenError::ParseError { line: 1, column: 17, .. }),
            "expected a ParseError but got {:?}",
            err
        );
    }
}
