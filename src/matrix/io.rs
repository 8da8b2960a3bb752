use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ReadError;
use crate::vector::parse_tokens;

use super::Matrix;

impl<T: FromStr> Matrix<T> {
    /// Overwrite every element, row-major, from `tokens`.
    ///
    /// Consumes exactly `dim() * dim()` tokens. The matrix is left untouched
    /// if the input runs short or a token fails to parse.
    pub fn read_tokens<'a>(
        &mut self,
        tokens: &mut impl Iterator<Item = &'a str>,
    ) -> Result<(), ReadError> {
        let values = parse_tokens(tokens, self.dim() * self.dim())?;
        self.fill(values);
        Ok(())
    }

    /// Overwrite every element from whitespace-delimited text.
    ///
    /// ```
    /// use dynla::Matrix;
    /// let mut m = Matrix::<i32>::new(2).unwrap();
    /// m.read_str("1 2\n3 4").unwrap();
    /// assert_eq!(m[1], [3, 4]);
    /// ```
    pub fn read_str(&mut self, s: &str) -> Result<(), ReadError> {
        self.read_tokens(&mut s.split_whitespace())
    }

    /// Overwrite every element from a buffered reader.
    #[cfg(feature = "std")]
    pub fn read_from<R: std::io::BufRead>(&mut self, reader: &mut R) -> Result<(), ReadError> {
        let values = crate::vector::parse_reader(reader, self.dim() * self.dim())?;
        self.fill(values);
        Ok(())
    }

    fn fill(&mut self, values: Vec<T>) {
        let mut values = values.into_iter();
        for row in self.rows.iter_mut() {
            for (slot, value) in row.iter_mut().zip(values.by_ref()) {
                *slot = value;
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// One line per row, elements separated by spaces, each row ending in `\n`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter() {
            fmt::Display::fmt(row, f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
