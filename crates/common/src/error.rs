//! Errors for loading program images and decoding instructions.

use thiserror::Error;

/// Errors that occur while decoding an instruction from memory.
///
/// Every variant carries the address (`at`) of the cell being decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The low two decimal digits of the cell are not a known opcode.
    #[error("unknown opcode in cell {raw} at address {at}")]
    UnknownOpcode { at: usize, raw: i64 },

    /// A mode digit mapped to a declared parameter is not 0, 1, or 2.
    #[error("unknown parameter mode {digit} in cell {raw} at address {at}")]
    UnknownMode { at: usize, raw: i64, digit: i64 },

    /// The instruction's parameters run past the end of memory.
    #[error("instruction at address {at} is truncated")]
    Truncated { at: usize },
}

/// Errors that occur while parsing a textual program image.
///
/// These are fatal at load time and never reach the machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token between commas did not parse as a signed integer.
    #[error("line {line}: invalid token '{token}'")]
    InvalidToken { line: usize, token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display() {
        assert_eq!(
            DecodeError::UnknownOpcode { at: 4, raw: 50 }.to_string(),
            "unknown opcode in cell 50 at address 4"
        );
        assert_eq!(
            DecodeError::UnknownMode {
                at: 0,
                raw: 302,
                digit: 3
            }
            .to_string(),
            "unknown parameter mode 3 in cell 302 at address 0"
        );
        assert_eq!(
            DecodeError::Truncated { at: 7 }.to_string(),
            "instruction at address 7 is truncated"
        );
    }

    #[test]
    fn parse_error_display() {
        let e = ParseError::InvalidToken {
            line: 2,
            token: "12x".to_string(),
        };
        assert_eq!(e.to_string(), "line 2: invalid token '12x'");
    }
}
