//! Bracketed list cells: `['Caihua Shan', 'Nikos Mamoulis']`.
//!
//! Cells follow the grammar of a Python list of `str` literals, which is
//! what the upstream writer produces:
//!
//! ```text
//! list  := ws '[' ws ( item ( ws ',' ws item )* ws ','? )? ws ']' ws
//! item  := '\'' char* '\'' | '"' char* '"'
//! ```
//!
//! Inside an item a backslash starts one of `\\ \' \" \a \b \f \n \r \t \v`,
//! an octal escape of one to three digits, or `\xHH \uHHHH \UHHHHHHHH`. Any
//! other escaped character is kept with its backslash. Named `\N{...}`
//! escapes are not supported and stay literal.
//! Commas inside quotes are part of the item. An empty cell is an empty list.

use crate::error::ListError;

/// Decode a bracketed list cell.
pub fn decode_list(cell: &str) -> Result<Vec<String>, ListError> {
    if cell.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut parser = Parser { src: cell, pos: 0 };
    parser.skip_ws();
    if parser.peek() != Some('[') {
        return Err(ListError::MissingOpenBracket);
    }
    parser.bump();

    let mut items = Vec::new();
    loop {
        parser.skip_ws();
        match parser.peek() {
            None => return Err(ListError::MissingCloseBracket),
            Some(']') => {
                parser.bump();
                break;
            }
            Some(quote @ ('\'' | '"')) => {
                items.push(parser.string(quote)?);
                parser.skip_ws();
                match parser.peek() {
                    Some(',') => parser.bump(),
                    Some(']') => {
                        parser.bump();
                        break;
                    }
                    None => return Err(ListError::MissingCloseBracket),
                    Some(found) => {
                        return Err(ListError::UnexpectedChar { found, offset: parser.pos });
                    }
                }
            }
            Some(found) => return Err(ListError::UnexpectedChar { found, offset: parser.pos }),
        }
    }

    parser.skip_ws();
    if parser.pos < cell.len() {
        return Err(ListError::TrailingInput { offset: parser.pos });
    }

    Ok(items)
}

/// Encode items the way Python `repr` renders a list of `str`.
#[must_use]
pub fn encode_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        encode_item(item.as_ref(), &mut out);
    }
    out.push(']');
    out
}

fn encode_item(item: &str, out: &mut String) {
    // repr switches to double quotes only when that avoids escaping
    let quote = if item.contains('\'') && !item.contains('"') { '"' } else { '\'' };

    out.push(quote);
    for c in item.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push(quote);
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Parse a quoted item; `pos` is on the opening quote.
    fn string(&mut self, quote: char) -> Result<String, ListError> {
        let start = self.pos;
        self.bump();

        let mut out = String::new();
        loop {
            let Some(c) = self.peek() else {
                return Err(ListError::UnterminatedString { offset: start });
            };
            let at = self.pos;
            self.bump();

            if c == quote {
                return Ok(out);
            }
            if c == '\\' {
                self.escape(start, at, &mut out)?;
            } else {
                out.push(c);
            }
        }
    }

    fn escape(&mut self, start: usize, at: usize, out: &mut String) -> Result<(), ListError> {
        let Some(c) = self.peek() else {
            return Err(ListError::UnterminatedString { offset: start });
        };
        self.bump();

        match c {
            '\\' | '\'' | '"' => out.push(c),
            'a' => out.push('\u{7}'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{b}'),
            '0'..='7' => out.push(self.octal(c, at)?),
            'x' => out.push(self.hex(2, at)?),
            'u' => out.push(self.hex(4, at)?),
            'U' => out.push(self.hex(8, at)?),
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    /// Up to three octal digits, the first already consumed.
    fn octal(&mut self, first: char, at: usize) -> Result<char, ListError> {
        let mut code = first.to_digit(8).ok_or(ListError::InvalidEscape { offset: at })?;
        for _ in 0..2 {
            match self.peek().and_then(|c| c.to_digit(8)) {
                Some(digit) => {
                    code = code * 8 + digit;
                    self.bump();
                }
                None => break,
            }
        }
        char::from_u32(code).ok_or(ListError::InvalidEscape { offset: at })
    }

    fn hex(&mut self, digits: usize, at: usize) -> Result<char, ListError> {
        let invalid = ListError::InvalidEscape { offset: at };
        let end = self.pos + digits;

        let text = self.src.get(self.pos..end).ok_or_else(|| invalid.clone())?;
        if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid);
        }
        let code = u32::from_str_radix(text, 16).map_err(|_| invalid.clone())?;

        self.pos = end;
        char::from_u32(code).ok_or(invalid)
    }
}
