//! Program image representation and the textual loader.
//!
//! On disk a program is decimal integers separated by commas, optionally
//! spread across multiple lines. Lines starting with `;` are comments.

use std::fmt::{self, Display};

use crate::error::ParseError;

/// An Intcode program image: the initial contents of memory, cell 0 first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The initial memory cells.
    pub cells: Vec<i64>,
}

impl Program {
    /// Create a program from raw cells.
    pub fn new(cells: Vec<i64>) -> Self {
        Self { cells }
    }

    /// Parse a textual program image.
    ///
    /// Tokens are decimal integers separated by commas; whitespace around
    /// tokens is ignored, and the image may span multiple lines. Blank
    /// lines and lines starting with `;` are skipped. A token that does
    /// not parse as a signed integer is fatal.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut cells = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            for token in line.split(',') {
                let token = token.trim();
                let value: i64 = token.parse().map_err(|_| ParseError::InvalidToken {
                    line: idx + 1,
                    token: token.to_string(),
                })?;
                cells.push(value);
            }
        }

        Ok(Self { cells })
    }

    /// Number of cells in the image.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the image has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Display for Program {
    /// Canonical one-line comma-separated form. `parse` accepts it back
    /// unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
