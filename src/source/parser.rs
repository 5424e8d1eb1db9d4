//! Recursive-descent JSON parser with comment capture
//!
//! Member and element order is preserved exactly as written. A member's
//! leading comment wins over a trailing comment on the same line.

use super::types::{Element, Member, RawValue};
use crate::error::{Error, Result};

/// Parse a document from a string
pub fn parse_str(input: &str) -> Result<RawValue> {
    let mut parser = Parser::new(input);
    parser.skip_trivia()?;
    let value = parser.parse_value()?;
    parser.skip_trivia()?;
    if parser.pos < parser.src.len() {
        return Err(parser.unexpected("end of input"));
    }
    Ok(value)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    // ------------------------------------------------------------------
    // Values
    // ------------------------------------------------------------------

    fn parse_value(&mut self) -> Result<RawValue> {
        match self.peek() {
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => Ok(RawValue::String(self.parse_string()?)),
            Some(b't') => self.parse_keyword("true", RawValue::Bool(true)),
            Some(b'f') => self.parse_keyword("false", RawValue::Bool(false)),
            Some(b'n') => self.parse_keyword("null", RawValue::Null),
            Some(b'-' | b'0'..=b'9') => Ok(RawValue::Number(self.parse_number()?)),
            Some(_) => Err(self.unexpected("a value")),
            None => Err(Error::parse(self.pos, "unexpected end of input".to_string())),
        }
    }

    fn parse_object(&mut self) -> Result<RawValue> {
        self.expect(b'{')?;
        let mut members: Vec<Member> = Vec::new();
        loop {
            let leading = self.skip_trivia()?;
            match self.peek() {
                Some(b'}') => {
                    self.bump();
                    break;
                }
                Some(b'"') => {}
                Some(_) => return Err(self.unexpected("an object key or '}'")),
                None => return Err(Error::parse(self.pos, "unterminated object".to_string())),
            }
            let key = self.parse_string()?;
            self.skip_trivia()?;
            self.expect(b':')?;
            self.skip_trivia()?;
            let value = self.parse_value()?;

            let mut trailing = self.take_inline_comment()?;
            self.skip_trivia()?;
            let saw_comma = self.peek() == Some(b',');
            if saw_comma {
                self.bump();
                if trailing.is_empty() {
                    trailing = self.take_inline_comment()?;
                }
            }
            let comment = if leading.is_empty() { trailing } else { leading };
            members.push(Member {
                key,
                value,
                comment,
            });

            if !saw_comma {
                self.skip_trivia()?;
                match self.peek() {
                    Some(b'}') => {
                        self.bump();
                        break;
                    }
                    Some(_) => return Err(self.unexpected("',' or '}'")),
                    None => {
                        return Err(Error::parse(self.pos, "unterminated object".to_string()))
                    }
                }
            }
        }
        Ok(RawValue::Object(members))
    }

    fn parse_array(&mut self) -> Result<RawValue> {
        self.expect(b'[')?;
        let mut elements: Vec<Element> = Vec::new();
        loop {
            let leading = self.skip_trivia()?;
            match self.peek() {
                Some(b']') => {
                    self.bump();
                    break;
                }
                Some(_) => {}
                None => return Err(Error::parse(self.pos, "unterminated array".to_string())),
            }
            let value = self.parse_value()?;

            let mut trailing = self.take_inline_comment()?;
            self.skip_trivia()?;
            let saw_comma = self.peek() == Some(b',');
            if saw_comma {
                self.bump();
                if trailing.is_empty() {
                    trailing = self.take_inline_comment()?;
                }
            }
            let comment = if leading.is_empty() { trailing } else { leading };
            elements.push(Element { value, comment });

            if !saw_comma {
                self.skip_trivia()?;
                match self.peek() {
                    Some(b']') => {
                        self.bump();
                        break;
                    }
                    Some(_) => return Err(self.unexpected("',' or ']'")),
                    None => {
                        return Err(Error::parse(self.pos, "unterminated array".to_string()))
                    }
                }
            }
        }
        Ok(RawValue::Array(elements))
    }

    fn parse_keyword(&mut self, keyword: &str, value: RawValue) -> Result<RawValue> {
        if self.src[self.pos..].starts_with(keyword) {
            self.pos += keyword.len();
            Ok(value)
        } else {
            Err(self.unexpected(&format!("'{keyword}'")))
        }
    }

    fn parse_number(&mut self) -> Result<String> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.bump();
        }
        match self.peek() {
            Some(b'0') => self.bump(),
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(self.unexpected("a digit")),
        }
        if self.peek() == Some(b'.') {
            self.bump();
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.unexpected("a fraction digit"));
            }
            self.skip_digits();
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.bump();
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.bump();
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.unexpected("an exponent digit"));
            }
            self.skip_digits();
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn parse_string(&mut self) -> Result<String> {
        self.expect(b'"')?;
        let mut buf: Vec<u8> = Vec::new();
        loop {
            let Some(c) = self.peek() else {
                return Err(Error::parse(self.pos, "unterminated string".to_string()));
            };
            self.bump();
            match c {
                b'"' => break,
                b'\\' => self.parse_escape(&mut buf)?,
                b'\n' | b'\r' => {
                    return Err(Error::parse(
                        self.pos - 1,
                        "unescaped line break in string".to_string(),
                    ))
                }
                _ => buf.push(c),
            }
        }
        String::from_utf8(buf)
            .map_err(|_| Error::parse(self.pos, "invalid UTF-8 in string".to_string()))
    }

    fn parse_escape(&mut self, buf: &mut Vec<u8>) -> Result<()> {
        let Some(c) = self.peek() else {
            return Err(Error::parse(self.pos, "unterminated escape".to_string()));
        };
        self.bump();
        match c {
            b'"' => buf.push(b'"'),
            b'\\' => buf.push(b'\\'),
            b'/' => buf.push(b'/'),
            b'b' => buf.push(0x08),
            b'f' => buf.push(0x0C),
            b'n' => buf.push(b'\n'),
            b'r' => buf.push(b'\r'),
            b't' => buf.push(b'\t'),
            b'u' => {
                let ch = self.parse_unicode_escape()?;
                let mut utf8 = [0u8; 4];
                buf.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
            }
            _ => {
                return Err(Error::parse(
                    self.pos - 1,
                    format!("invalid escape '\\{}'", c as char),
                ))
            }
        }
        Ok(())
    }

    fn parse_unicode_escape(&mut self) -> Result<char> {
        let high = self.read_hex4()?;
        // Surrogate pair
        if (0xD800..=0xDBFF).contains(&high) {
            if self.peek() != Some(b'\\') {
                return Err(Error::parse(self.pos, "unpaired surrogate".to_string()));
            }
            self.bump();
            if self.peek() != Some(b'u') {
                return Err(Error::parse(self.pos, "unpaired surrogate".to_string()));
            }
            self.bump();
            let low = self.read_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(Error::parse(self.pos, "invalid low surrogate".to_string()));
            }
            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(code)
                .ok_or_else(|| Error::parse(self.pos, "invalid surrogate pair".to_string()));
        }
        if (0xDC00..=0xDFFF).contains(&high) {
            return Err(Error::parse(self.pos, "unpaired surrogate".to_string()));
        }
        char::from_u32(high)
            .ok_or_else(|| Error::parse(self.pos, "invalid unicode escape".to_string()))
    }

    fn read_hex4(&mut self) -> Result<u32> {
        let mut code: u32 = 0;
        for _ in 0..4 {
            let Some(c) = self.peek() else {
                return Err(Error::parse(self.pos, "truncated unicode escape".to_string()));
            };
            let digit = match c {
                b'0'..=b'9' => u32::from(c - b'0'),
                b'a'..=b'f' => u32::from(c - b'a') + 10,
                b'A'..=b'F' => u32::from(c - b'A') + 10,
                _ => {
                    return Err(Error::parse(
                        self.pos,
                        "invalid hex digit in unicode escape".to_string(),
                    ))
                }
            };
            self.bump();
            code = code * 16 + digit;
        }
        Ok(code)
    }

    // ------------------------------------------------------------------
    // Trivia
    // ------------------------------------------------------------------

    /// Skip whitespace and comments; return the first non-empty comment
    /// encountered, verbatim.
    fn skip_trivia(&mut self) -> Result<String> {
        let mut comment = String::new();
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\n' | b'\r') => self.bump(),
                Some(b'/') => {
                    let text = self.read_comment()?;
                    if comment.is_empty() {
                        comment = text;
                    }
                }
                _ => break,
            }
        }
        Ok(comment)
    }

    /// Capture a comment that sits on the same line, before any line break
    fn take_inline_comment(&mut self) -> Result<String> {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.bump();
        }
        if self.peek() == Some(b'/') {
            self.read_comment()
        } else {
            Ok(String::new())
        }
    }

    fn read_comment(&mut self) -> Result<String> {
        let start = self.pos;
        self.bump(); // leading '/'
        match self.peek() {
            Some(b'/') => {
                while !matches!(self.peek(), None | Some(b'\n')) {
                    self.bump();
                }
                Ok(self.src[start..self.pos].trim_end().to_string())
            }
            Some(b'*') => {
                self.bump();
                loop {
                    match self.peek() {
                        Some(b'*') => {
                            self.bump();
                            if self.peek() == Some(b'/') {
                                self.bump();
                                return Ok(self.src[start..self.pos].to_string());
                            }
                        }
                        Some(_) => self.bump(),
                        None => {
                            return Err(Error::parse(
                                start,
                                "unterminated block comment".to_string(),
                            ))
                        }
                    }
                }
            }
            _ => Err(Error::parse(start, "unexpected character '/'".to_string())),
        }
    }

    // ------------------------------------------------------------------
    // Low-level cursor
    // ------------------------------------------------------------------

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_digits(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.bump();
        }
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", expected as char)))
        }
    }

    fn unexpected(&self, expected: &str) -> Error {
        match self.src[self.pos..].chars().next() {
            Some(found) => Error::parse(
                self.pos,
                format!("unexpected character '{found}', expected {expected}"),
            ),
            None => Error::parse(self.pos, format!("unexpected end of input, expected {expected}")),
        }
    }
}
