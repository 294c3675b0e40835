//! Parameter addressing modes.

/// How a parameter's raw value maps to an effective value or address.
///
/// Modes are encoded as decimal digits above the two opcode digits of an
/// instruction cell, one digit per parameter; missing digits are position
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamMode {
    /// The parameter's value is an absolute address.
    Position = 0,
    /// The parameter's value is used literally. Never valid as a write
    /// destination.
    Immediate = 1,
    /// The parameter's value is an offset from the relative base register.
    Relative = 2,
}

/// All valid parameter modes.
pub const ALL_MODES: [ParamMode; 3] = [
    ParamMode::Position,
    ParamMode::Immediate,
    ParamMode::Relative,
];

impl ParamMode {
    /// Look up a mode from a single decimal digit of the instruction cell.
    pub fn from_digit(digit: i64) -> Option<ParamMode> {
        match digit {
            0 => Some(ParamMode::Position),
            1 => Some(ParamMode::Immediate),
            2 => Some(ParamMode::Relative),
            _ => None,
        }
    }
}
