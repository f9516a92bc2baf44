use std::collections::HashSet;

use crate::{
    tokenizer::Token,
    types::{FieldKind, FieldSchema, MessageSchema, ScalarType, SchemaFile},
    utils::{error, quote},
    error::DslGenError,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER:       Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref TYPE_NAME:        Regex = Regex::new(r"^\.?[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap();
    static ref STRING_LITERAL:   Regex = Regex::new(r#"^".*"$"#).unwrap();
    static ref EQUALS:           Regex = Regex::new(r"^=$").unwrap();
    static ref SEMICOLON:        Regex = Regex::new(r"^;$").unwrap();
    static ref COMMA:            Regex = Regex::new(r"^,$").unwrap();
    static ref INTEGER:          Regex = Regex::new(r"^\d+$").unwrap();
    static ref LEFT_BRACE:       Regex = Regex::new(r"^\{$").unwrap();
    static ref RIGHT_BRACE:      Regex = Regex::new(r"^\}$").unwrap();
    static ref LEFT_ANGLE:       Regex = Regex::new(r"^<$").unwrap();
    static ref RIGHT_ANGLE:      Regex = Regex::new(r"^>$").unwrap();
    static ref LEFT_BRACKET:     Regex = Regex::new(r"^\[$").unwrap();
    static ref RIGHT_BRACKET:    Regex = Regex::new(r"^\]$").unwrap();
    static ref SYNTAX_KEYWORD:   Regex = Regex::new(r"^(syntax|edition)$").unwrap();
    static ref PACKAGE_KEYWORD:  Regex = Regex::new(r"^package$").unwrap();
    static ref IMPORT_KEYWORD:   Regex = Regex::new(r"^import$").unwrap();
    static ref IMPORT_MODIFIER:  Regex = Regex::new(r"^(public|weak)$").unwrap();
    static ref OPTION_KEYWORD:   Regex = Regex::new(r"^option$").unwrap();
    static ref RESERVED_KEYWORD: Regex = Regex::new(r"^(reserved|extensions)$").unwrap();
    static ref MESSAGE_KEYWORD:  Regex = Regex::new(r"^message$").unwrap();
    static ref ENUM_KEYWORD:     Regex = Regex::new(r"^enum$").unwrap();
    static ref ONEOF_KEYWORD:    Regex = Regex::new(r"^oneof$").unwrap();
    static ref MAP_KEYWORD:      Regex = Regex::new(r"^map$").unwrap();
    static ref REPEATED_LABEL:   Regex = Regex::new(r"^repeated$").unwrap();
    static ref SINGULAR_LABEL:   Regex = Regex::new(r"^(optional|required)$").unwrap();
    static ref EOF:              Regex = Regex::new(r"^$").unwrap();
}

struct Parser<'a> {
    tokens: &'a [Token],
    index:  usize,
}

impl<'a> Parser<'a> {
    /// The token list always ends with EOF, so reads past the end stick there.
    fn current(&self) -> &'a Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.index.min(last)]
    }

    fn at_eof(&self) -> bool {
        EOF.is_match(&self.current().text)
    }

    fn peek(&self, test: &Regex) -> bool {
        test.is_match(&self.current().text)
    }

    fn eat(&mut self, test: &Regex) -> bool {
        if self.peek(test) && !self.at_eof() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, test: &Regex, expected: &str) -> Result<&'a Token, DslGenError> {
        let tok = self.current();
        if !self.eat(test) {
            return Err(error(
                &format!("Expected {} but found {}", expected, quote(&tok.text)),
                tok.line,
                tok.column,
            ));
        }
        Ok(tok)
    }

    fn unexpected_token(&self) -> DslGenError {
        let tok = self.current();
        if self.at_eof() {
            return error("Unexpected end of file", tok.line, tok.column);
        }
        error(
            &format!("Unexpected token {}", quote(&tok.text)),
            tok.line,
            tok.column,
        )
    }

    /// Skips everything up to and including the next `;` at the current depth.
    fn skip_statement(&mut self) -> Result<(), DslGenError> {
        while !self.eat(&SEMICOLON) {
            if self.at_eof() || self.peek(&LEFT_BRACE) || self.peek(&RIGHT_BRACE) {
                return Err(self.unexpected_token());
            }
            self.index += 1;
        }
        Ok(())
    }

    /// Skips a `{ ... }` block, including nested blocks.
    fn skip_block(&mut self) -> Result<(), DslGenError> {
        self.expect(&LEFT_BRACE, "\"{\"")?;
        let mut depth = 1;
        while depth > 0 {
            if self.at_eof() {
                return Err(self.unexpected_token());
            }
            if self.peek(&LEFT_BRACE) {
                depth += 1;
            } else if self.peek(&RIGHT_BRACE) {
                depth -= 1;
            }
            self.index += 1;
        }
        Ok(())
    }

    fn field_options(&mut self) -> Result<(), DslGenError> {
        if self.eat(&LEFT_BRACKET) {
            while !self.eat(&RIGHT_BRACKET) {
                if self.at_eof() || self.peek(&SEMICOLON) {
                    return Err(self.unexpected_token());
                }
                self.index += 1;
            }
        }
        Ok(())
    }

    fn field_id(&mut self) -> Result<u32, DslGenError> {
        self.expect(&EQUALS, "\"=\"")?;
        let tok = self.expect(&INTEGER, "integer")?;
        tok.text.parse::<u32>().map_err(|_| {
            error(
                &format!("Invalid field id {}", quote(&tok.text)),
                tok.line,
                tok.column,
            )
        })
    }

    fn field(&mut self, kind_override: Option<&str>) -> Result<FieldSchema, DslGenError> {
        let repeated = if self.eat(&REPEATED_LABEL) {
            true
        } else {
            self.eat(&SINGULAR_LABEL);
            false
        };

        let type_tok = self.current();
        let (kind, value_type) = if self.eat(&MAP_KEYWORD) {
            self.expect(&LEFT_ANGLE, "\"<\"")?;
            let key = self.expect(&TYPE_NAME, "map key type")?;
            self.expect(&COMMA, "\",\"")?;
            let value = self.expect(&TYPE_NAME, "map value type")?;
            self.expect(&RIGHT_ANGLE, "\">\"")?;
            (FieldKind::Other("map".to_string()), format!("map<{}, {}>", key.text, value.text))
        } else {
            self.expect(&TYPE_NAME, "type name")?;
            let scalar = ScalarType::from_name(&type_tok.text).is_some();
            let kind = match (repeated, scalar) {
                (false, true)  => FieldKind::Scalar,
                (false, false) => FieldKind::Message,
                (true, true)   => FieldKind::RepeatedScalar,
                (true, false)  => FieldKind::RepeatedMessage,
            };
            (kind, type_tok.text.clone())
        };

        let name_tok = self.expect(&IDENTIFIER, "identifier")?;
        let id = self.field_id()?;
        self.field_options()?;
        self.expect(&SEMICOLON, "\";\"")?;

        let kind = match kind_override {
            Some(other) => FieldKind::Other(other.to_string()),
            None => kind,
        };

        Ok(FieldSchema {
            name:       name_tok.text.clone(),
            id,
            kind,
            value_type,
            line:       name_tok.line,
            column:     name_tok.column,
        })
    }

    fn message(&mut self, enums: &mut HashSet<String>) -> Result<MessageSchema, DslGenError> {
        let name_tok = self.expect(&IDENTIFIER, "identifier")?;
        self.expect(&LEFT_BRACE, "\"{\"")?;

        let mut fields = Vec::new();
        while !self.eat(&RIGHT_BRACE) {
            if self.at_eof() {
                return Err(self.unexpected_token());
            }
            if self.eat(&SEMICOLON) {
                continue;
            }
            if self.eat(&OPTION_KEYWORD) || self.eat(&RESERVED_KEYWORD) {
                self.skip_statement()?;
            } else if self.eat(&ENUM_KEYWORD) {
                let enum_tok = self.expect(&IDENTIFIER, "identifier")?;
                enums.insert(enum_tok.text.clone());
                enums.insert(format!("{}.{}", name_tok.text, enum_tok.text));
                self.skip_block()?;
            } else if self.peek(&MESSAGE_KEYWORD) {
                let tok = self.current();
                return Err(error("Nested messages are not supported", tok.line, tok.column));
            } else if self.eat(&ONEOF_KEYWORD) {
                self.expect(&IDENTIFIER, "identifier")?;
                self.expect(&LEFT_BRACE, "\"{\"")?;
                while !self.eat(&RIGHT_BRACE) {
                    if self.eat(&OPTION_KEYWORD) {
                        self.skip_statement()?;
                        continue;
                    }
                    fields.push(self.field(Some("oneof"))?);
                }
            } else {
                fields.push(self.field(None)?);
            }
        }

        Ok(MessageSchema {
            name:   name_tok.text.clone(),
            fields,
            line:   name_tok.line,
            column: name_tok.column,
        })
    }
}

/// Strips a leading dot and the file's own package from a type reference, so
/// `.patrol.DartTestCase` and `patrol.DartTestCase` both become `DartTestCase`.
pub fn resolve_type_name(type_name: &str, package: Option<&str>) -> String {
    let name = type_name.strip_prefix('.').unwrap_or(type_name);
    if let Some(package) = package {
        if let Some(rest) = name.strip_prefix(package).and_then(|r| r.strip_prefix('.')) {
            return rest.to_string();
        }
    }
    name.to_string()
}

/// Parses the supported `.proto` subset into a `SchemaFile`.
pub fn parse_schema(tokens: &[Token]) -> Result<SchemaFile, DslGenError> {
    let mut parser   = Parser { tokens, index: 0 };
    let mut messages = Vec::new();
    let mut package  = None;
    let mut enums    = HashSet::new();

    if parser.eat(&SYNTAX_KEYWORD) {
        parser.expect(&EQUALS, "\"=\"")?;
        parser.expect(&STRING_LITERAL, "string literal")?;
        parser.expect(&SEMICOLON, "\";\"")?;
    }

    while !parser.at_eof() {
        if parser.eat(&SEMICOLON) {
            continue;
        }
        if parser.eat(&PACKAGE_KEYWORD) {
            let tok = parser.expect(&TYPE_NAME, "package name")?;
            if package.is_some() {
                return Err(error("Multiple package declarations", tok.line, tok.column));
            }
            package = Some(tok.text.trim_start_matches('.').to_string());
            parser.expect(&SEMICOLON, "\";\"")?;
        } else if parser.eat(&IMPORT_KEYWORD) {
            parser.eat(&IMPORT_MODIFIER);
            parser.expect(&STRING_LITERAL, "string literal")?;
            parser.expect(&SEMICOLON, "\";\"")?;
        } else if parser.eat(&OPTION_KEYWORD) {
            parser.skip_statement()?;
        } else if parser.eat(&ENUM_KEYWORD) {
            let tok = parser.expect(&IDENTIFIER, "identifier")?;
            enums.insert(tok.text.clone());
            parser.skip_block()?;
        } else if parser.eat(&MESSAGE_KEYWORD) {
            messages.push(parser.message(&mut enums)?);
        } else {
            return Err(parser.unexpected_token());
        }
    }

    for message in &mut messages {
        for field in &mut message.fields {
            if matches!(field.kind, FieldKind::Other(_)) {
                continue;
            }
            field.value_type = resolve_type_name(&field.value_type, package.as_deref());
            if enums.contains(&field.value_type) {
                field.kind = FieldKind::Other("enum".to_string());
            }
        }
    }

    Ok(SchemaFile {
        package,
        source: None,
        messages,
    })
}
