use alloc::vec::Vec;
use core::fmt::{self, Write as _};
use core::str::FromStr;

use crate::error::ReadError;

use super::Vector;

/// Parse exactly `count` tokens. Nothing is returned unless all of them parse.
pub(crate) fn parse_tokens<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    count: usize,
) -> Result<Vec<T>, ReadError> {
    let mut out = Vec::with_capacity(count);
    for index in 0..count {
        let token = tokens.next().ok_or(ReadError::UnexpectedEnd {
            expected: count,
            found: index,
        })?;
        out.push(token.parse().map_err(|_| ReadError::Parse { index })?);
    }
    Ok(out)
}

/// Read one whitespace-delimited token into `token`, leaving the delimiter
/// unconsumed. Returns `false` at end of input.
#[cfg(feature = "std")]
fn next_token<R: std::io::BufRead>(reader: &mut R, token: &mut Vec<u8>) -> std::io::Result<bool> {
    token.clear();
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(!token.is_empty());
        }
        let mut used = 0;
        let mut complete = false;
        for &b in available {
            if b.is_ascii_whitespace() {
                if !token.is_empty() {
                    complete = true;
                    break;
                }
            } else {
                token.push(b);
            }
            used += 1;
        }
        reader.consume(used);
        if complete {
            return Ok(true);
        }
    }
}

/// Streaming counterpart of [`parse_tokens`].
#[cfg(feature = "std")]
pub(crate) fn parse_reader<T: FromStr, R: std::io::BufRead>(
    reader: &mut R,
    count: usize,
) -> Result<Vec<T>, ReadError> {
    let mut out = Vec::with_capacity(count);
    let mut token = Vec::new();
    for index in 0..count {
        if !next_token(reader, &mut token)? {
            return Err(ReadError::UnexpectedEnd {
                expected: count,
                found: index,
            });
        }
        let value = core::str::from_utf8(&token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(ReadError::Parse { index })?;
        out.push(value);
    }
    Ok(out)
}

// ── Input ───────────────────────────────────────────────────────────

impl<T: FromStr> Vector<T> {
    /// Overwrite every element, in order, from `tokens`.
    ///
    /// Consumes exactly `len()` tokens. The vector is left untouched if the
    /// input runs short or a token fails to parse.
    ///
    /// ```
    /// use dynla::Vector;
    /// let mut v = Vector::<i32>::new(3).unwrap();
    /// let mut tokens = "4 5 6 7".split_whitespace();
    /// v.read_tokens(&mut tokens).unwrap();
    /// assert_eq!(v.as_slice(), &[4, 5, 6]);
    /// assert_eq!(tokens.next(), Some("7"));
    /// ```
    pub fn read_tokens<'a>(
        &mut self,
        tokens: &mut impl Iterator<Item = &'a str>,
    ) -> Result<(), ReadError> {
        let values = parse_tokens(tokens, self.len())?;
        self.fill(values);
        Ok(())
    }

    /// Overwrite every element from whitespace-delimited text.
    pub fn read_str(&mut self, s: &str) -> Result<(), ReadError> {
        self.read_tokens(&mut s.split_whitespace())
    }

    /// Overwrite every element from a buffered reader.
    ///
    /// Tokens may span any number of lines. Input after the last element is
    /// left in the reader.
    ///
    /// ```
    /// use std::io::{Cursor, Read};
    /// use dynla::Vector;
    /// let mut input = Cursor::new("1.5\n2.5 3.5\nrest");
    /// let mut v = Vector::<f64>::new(3).unwrap();
    /// v.read_from(&mut input).unwrap();
    /// assert_eq!(v.as_slice(), &[1.5, 2.5, 3.5]);
    /// let mut rest = String::new();
    /// input.read_to_string(&mut rest).unwrap();
    /// assert_eq!(rest, "\nrest");
    /// ```
    #[cfg(feature = "std")]
    pub fn read_from<R: std::io::BufRead>(&mut self, reader: &mut R) -> Result<(), ReadError> {
        let values = parse_reader(reader, self.len())?;
        self.fill(values);
        Ok(())
    }

    fn fill(&mut self, values: Vec<T>) {
        for (slot, value) in self.iter_mut().zip(values) {
            *slot = value;
        }
    }
}

// ── Output ──────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Vector<T> {
    /// Elements separated by single spaces, no trailing newline. Format
    /// flags such as precision apply to every element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            fmt::Display::fmt(x, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn display_space_separated() {
        let v = Vector::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(format!("{v}"), "1 2 3");
    }

    #[test]
    fn display_forwards_precision() {
        let v = Vector::from_slice(&[1.0, 2.5]).unwrap();
        assert_eq!(format!("{v:.2}"), "1.00 2.50");
    }

    #[test]
    fn read_str_fills_in_order() {
        let mut v = Vector::<i64>::new(4).unwrap();
        v.read_str("  9 -8\n7\t6 ").unwrap();
        assert_eq!(v.as_slice(), &[9, -8, 7, 6]);
    }

    #[test]
    fn read_short_input_leaves_vector_unchanged() {
        let mut v = Vector::from_slice(&[1, 1, 1]).unwrap();
        let err = v.read_str("5 6").unwrap_err();
        assert!(matches!(
            err,
            ReadError::UnexpectedEnd {
                expected: 3,
                found: 2
            }
        ));
        assert_eq!(v.as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn read_bad_token_reports_position() {
        let mut v = Vector::from_slice(&[0, 0, 0]).unwrap();
        let err = v.read_str("1 x 3").unwrap_err();
        assert!(matches!(err, ReadError::Parse { index: 1 }));
        assert_eq!(v.as_slice(), &[0, 0, 0]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_from_spans_lines() {
        let mut input = std::io::Cursor::new("10\n\n20\n30 40");
        let mut v = Vector::<u32>::new(3).unwrap();
        v.read_from(&mut input).unwrap();
        assert_eq!(v.as_slice(), &[10, 20, 30]);

        let mut w = Vector::<u32>::new(1).unwrap();
        w.read_from(&mut input).unwrap();
        assert_eq!(w[0], 40);
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_from_reports_end_of_input() {
        let mut input = std::io::Cursor::new("1 2");
        let mut v = Vector::<u32>::new(3).unwrap();
        assert!(matches!(
            v.read_from(&mut input),
            Err(ReadError::UnexpectedEnd { found: 2, .. })
        ));
    }

    #[test]
    fn display_then_read_back() {
        let v = Vector::from_slice(&[3, -1, 4]).unwrap();
        let mut w = Vector::<i32>::new(3).unwrap();
        w.read_str(&format!("{v}")).unwrap();
        assert_eq!(v, w);
    }
}
