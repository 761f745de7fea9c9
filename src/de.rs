//! Parsing documents from text.
//!
//! This module provides the [`Parser`], a recursive-descent parser that
//! turns a character stream into a [`Document`]. There is one production
//! per value shape, dispatched on the first non-whitespace character.
//!
//! The grammar is deliberately lenient where the original wire format is:
//!
//! - A missing comma between array elements or object entries is tolerated;
//!   anything that is not `,` and not the closing bracket starts the next
//!   element.
//! - The character after an object key is consumed without being checked
//!   against `:`.
//! - An unrecognized string escape is silently dropped: both the backslash
//!   and the following character vanish from the payload.
//!
//! Failure is all-or-nothing: any [`ParseError`] aborts the whole load and
//! no partial tree is returned. Text following the root value is ignored.
//!
//! ## Usage
//!
//! Most users should use the crate-root functions:
//!
//! ```rust
//! use json_doc::from_str;
//!
//! let doc = from_str(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! let map = doc.root().as_map().unwrap();
//! assert_eq!(map.get("age").unwrap().as_int().unwrap(), 30);
//! ```

use crate::error::ParseError;
use crate::{Document, JsonMap, Value};

/// The document parser.
///
/// Created via [`Parser::from_str`]; [`Parser::parse`] consumes one value
/// from the front of the input and wraps it into a [`Document`].
pub struct Parser<'de> {
    input: &'de str,
    position: usize,
}

impl<'de> Parser<'de> {
    /// Creates a parser over the given input text.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(input: &'de str) -> Self {
        Parser { input, position: 0 }
    }

    /// Parses one value from the front of the input.
    ///
    /// Trailing text after the root value is left unread.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on any lexical or structural failure; no
    /// partial tree survives an error.
    pub fn parse(&mut self) -> Result<Document, ParseError> {
        self.parse_value().map(Document::new)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        match self.peek_char() {
            None => Err(ParseError::eof("a value")),
            Some('[') => {
                self.next_char();
                self.parse_array()
            }
            Some('{') => {
                self.next_char();
                self.parse_object()
            }
            Some('"') => {
                self.next_char();
                self.parse_string_body().map(Value::String)
            }
            Some('t') => {
                self.next_char();
                self.expect_literal("rue", "true")?;
                Ok(Value::Bool(true))
            }
            Some('f') => {
                self.next_char();
                self.expect_literal("alse", "false")?;
                Ok(Value::Bool(false))
            }
            Some('n') => {
                self.next_char();
                self.expect_literal("ull", "null")?;
                Ok(Value::Null)
            }
            Some(_) => self.parse_number(),
        }
    }

    /// Opening `[` already consumed.
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek_char() {
                None => return Err(ParseError::eof("an array")),
                Some(']') => {
                    self.next_char();
                    break;
                }
                // one comma is skipped as a delimiter; anything else
                // starts the next element
                Some(',') => {
                    self.next_char();
                }
                Some(_) => {}
            }
            items.push(self.parse_value()?);
        }
        Ok(Value::Array(items))
    }

    /// Opening `{` already consumed.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        let mut map = JsonMap::new();
        loop {
            self.skip_whitespace();
            let c = self.next_char().ok_or(ParseError::eof("an object"))?;
            if c == '}' {
                break;
            }
            if c == ',' {
                self.skip_whitespace();
                // the key's opening quote; consumed unchecked, like the colon
                self.next_char().ok_or(ParseError::eof("an object"))?;
            }
            let key = self.parse_string_body()?;
            self.skip_whitespace();
            // the colon; consumed unchecked
            self.next_char().ok_or(ParseError::eof("an object"))?;
            let value = self.parse_value()?;
            // duplicate keys keep the first occurrence
            map.insert_first(key, value);
        }
        Ok(Value::Object(map))
    }

    /// Opening `"` already consumed; reads up to and including the closing
    /// quote.
    fn parse_string_body(&mut self) -> Result<String, ParseError> {
        let mut text = String::new();
        loop {
            let c = self.next_char().ok_or(ParseError::eof("a string"))?;
            match c {
                '"' => break,
                '\\' => {
                    let esc = self.next_char().ok_or(ParseError::eof("a string"))?;
                    match esc {
                        'n' => text.push('\n'),
                        'r' => text.push('\r'),
                        '"' => text.push('"'),
                        't' => text.push('\t'),
                        '\\' => text.push('\\'),
                        // unrecognized escapes vanish entirely
                        _ => {}
                    }
                }
                other => text.push(other),
            }
        }
        Ok(text)
    }

    /// First character of `rest` follows the already-consumed initial
    /// character of the literal.
    fn expect_literal(&mut self, rest: &str, full: &'static str) -> Result<(), ParseError> {
        for expected in rest.chars() {
            match self.next_char() {
                Some(c) if c == expected => {}
                _ => return Err(ParseError::BadLiteral { expected: full }),
            }
        }
        Ok(())
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let mut text = String::new();

        if self.peek_char() == Some('-') {
            text.push('-');
            self.next_char();
        }

        if self.peek_char() == Some('0') {
            text.push('0');
            self.next_char();
            // no further digits may follow a leading zero
            if matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                return Err(ParseError::ExpectedDigit);
            }
        } else {
            self.read_digits(&mut text)?;
        }

        let mut is_int = true;

        if self.peek_char() == Some('.') {
            text.push('.');
            self.next_char();
            self.read_digits(&mut text)?;
            is_int = false;
        }

        if let Some(c @ ('e' | 'E')) = self.peek_char() {
            text.push(c);
            self.next_char();
            if let Some(sign @ ('+' | '-')) = self.peek_char() {
                text.push(sign);
                self.next_char();
            }
            self.read_digits(&mut text)?;
            is_int = false;
        }

        if is_int {
            if let Ok(i) = text.parse::<i32>() {
                return Ok(Value::Int(i));
            }
            // overflow falls back to floating point
        }
        match text.parse::<f64>() {
            Ok(d) => Ok(Value::Double(d)),
            Err(_) => Err(ParseError::BadNumber(text)),
        }
    }

    /// Reads one or more digits into `text`.
    fn read_digits(&mut self, text: &mut String) -> Result<(), ParseError> {
        match self.peek_char() {
            Some(c) if c.is_ascii_digit() => {}
            _ => return Err(ParseError::ExpectedDigit),
        }
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                text.push(c);
                self.next_char();
            } else {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Value, ParseError> {
        Parser::from_str(input).parse().map(Document::into_root)
    }

    #[test]
    fn parses_literals() {
        assert_eq!(parse("null").unwrap(), Value::Null);
        assert_eq!(parse("true").unwrap(), Value::Bool(true));
        assert_eq!(parse("false").unwrap(), Value::Bool(false));
        assert_eq!(parse("  \n\ttrue").unwrap(), Value::Bool(true));
    }

    #[test]
    fn truncated_literal_is_an_error() {
        assert!(matches!(parse("tru"), Err(ParseError::BadLiteral { expected: "true" })));
        assert!(matches!(parse("fals"), Err(ParseError::BadLiteral { expected: "false" })));
        assert!(matches!(parse("nul"), Err(ParseError::BadLiteral { expected: "null" })));
        assert!(matches!(parse("nope"), Err(ParseError::BadLiteral { expected: "null" })));
    }

    #[test]
    fn int_boundary_is_32_bit() {
        assert_eq!(parse("2147483647").unwrap(), Value::Int(2147483647));
        assert_eq!(parse("-2147483648").unwrap(), Value::Int(i32::MIN));
        // one past the boundary overflows into a double
        assert_eq!(parse("2147483648").unwrap(), Value::Double(2147483648.0));
        assert_eq!(parse("-2147483649").unwrap(), Value::Double(-2147483649.0));
    }

    #[test]
    fn integral_valued_doubles_stay_doubles() {
        assert_eq!(parse("1.0").unwrap(), Value::Double(1.0));
        assert_eq!(parse("1e2").unwrap(), Value::Double(100.0));
        assert_eq!(parse("-1.5E-2").unwrap(), Value::Double(-0.015));
        assert_eq!(parse("0.25").unwrap(), Value::Double(0.25));
    }

    #[test]
    fn zero_forms() {
        assert_eq!(parse("0").unwrap(), Value::Int(0));
        assert_eq!(parse("-0").unwrap(), Value::Int(0));
        assert_eq!(parse("0.5").unwrap(), Value::Double(0.5));
    }

    #[test]
    fn leading_zero_followed_by_digit_is_an_error() {
        assert!(matches!(parse("01"), Err(ParseError::ExpectedDigit)));
        assert!(matches!(parse("-07"), Err(ParseError::ExpectedDigit)));
    }

    #[test]
    fn malformed_numbers() {
        assert!(matches!(parse("-"), Err(ParseError::ExpectedDigit)));
        assert!(matches!(parse("1."), Err(ParseError::ExpectedDigit)));
        assert!(matches!(parse("1e"), Err(ParseError::ExpectedDigit)));
        assert!(matches!(parse("1e+"), Err(ParseError::ExpectedDigit)));
        assert!(matches!(parse("x"), Err(ParseError::ExpectedDigit)));
    }

    #[test]
    fn parses_strings_with_escapes() {
        assert_eq!(parse(r#""hello""#).unwrap(), Value::String("hello".to_string()));
        assert_eq!(
            parse(r#""a\nb\tc\rd\"e\\f""#).unwrap(),
            Value::String("a\nb\tc\rd\"e\\f".to_string())
        );
    }

    #[test]
    fn unrecognized_escape_is_dropped() {
        // both the backslash and the escaped character vanish
        assert_eq!(parse(r#""a\xb""#).unwrap(), Value::String("ab".to_string()));
        assert_eq!(parse(r#""\q""#).unwrap(), Value::String(String::new()));
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(matches!(parse(r#""abc"#), Err(ParseError::Eof { expected: "a string" })));
        // input ending on a backslash
        assert!(matches!(parse("\"abc\\"), Err(ParseError::Eof { expected: "a string" })));
    }

    #[test]
    fn parses_arrays() {
        assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));
        assert_eq!(
            parse("[1, 2, 3]").unwrap(),
            Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
        assert_eq!(
            parse(r#"[null, true, "x", 1.5]"#).unwrap(),
            Value::Array(vec![
                Value::Null,
                Value::Bool(true),
                Value::String("x".to_string()),
                Value::Double(1.5),
            ])
        );
    }

    #[test]
    fn missing_comma_is_tolerated() {
        assert_eq!(
            parse("[1 2 3]").unwrap(),
            Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
        assert_eq!(
            parse(r#"["a" "b"]"#).unwrap(),
            Value::Array(vec![
                Value::String("a".to_string()),
                Value::String("b".to_string()),
            ])
        );
    }

    #[test]
    fn unterminated_array_is_an_error() {
        assert!(matches!(parse("[1, 2"), Err(ParseError::Eof { expected: "an array" })));
        assert!(matches!(parse("["), Err(ParseError::Eof { expected: "an array" })));
    }

    #[test]
    fn trailing_comma_in_array_is_an_error() {
        // the comma is skipped as a delimiter, then `]` fails as a number
        assert!(matches!(parse("[1,]"), Err(ParseError::ExpectedDigit)));
    }

    #[test]
    fn parses_objects() {
        let value = parse(r#"{"a": 1, "b": [true], "c": {"d": null}}"#).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("a").unwrap(), &Value::Int(1));
        assert_eq!(map.get("b").unwrap().as_array().unwrap(), &[Value::Bool(true)]);
        assert_eq!(map.get("c").unwrap().as_map().unwrap().get("d").unwrap(), &Value::Null);
    }

    #[test]
    fn empty_object() {
        assert_eq!(parse("{}").unwrap(), Value::Object(JsonMap::new()));
        assert_eq!(parse("{ \n }").unwrap(), Value::Object(JsonMap::new()));
    }

    #[test]
    fn duplicate_keys_keep_first() {
        let value = parse(r#"{"k": 1, "k": 2}"#).unwrap();
        assert_eq!(value.as_map().unwrap().get("k").unwrap(), &Value::Int(1));
    }

    #[test]
    fn unterminated_object_is_an_error() {
        assert!(parse(r#"{"a":1,"b""#).is_err());
        assert!(matches!(parse("{"), Err(ParseError::Eof { expected: "an object" })));
        assert!(parse(r#"{"a":"#).is_err());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse(""), Err(ParseError::Eof { expected: "a value" })));
        assert!(matches!(parse("   \n"), Err(ParseError::Eof { expected: "a value" })));
    }

    #[test]
    fn trailing_text_is_ignored() {
        assert_eq!(parse("42 garbage").unwrap(), Value::Int(42));
        assert_eq!(parse("[1] [2]").unwrap(), Value::Array(vec![Value::Int(1)]));
    }

    #[test]
    fn quoted_null_is_a_string() {
        // `"null"` parses as a string; only the is_null predicate aliases it
        let value = parse(r#""null""#).unwrap();
        assert_eq!(value, Value::String("null".to_string()));
        assert!(value.is_null());
    }
}
