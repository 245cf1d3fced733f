//! Validation errors raised by the cluster counter.

/// Reason a byte sequence is not a valid encoded message.
///
/// Positions in `NonDigitCharacter` and `InvalidZeroPlacement` are 0-based
/// indices into the bytes that follow the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The sequence has no bytes.
    #[error("input is empty")]
    EmptyInput,

    /// The first byte is '0'.
    #[error("string starts with 0")]
    LeadingZero,

    /// The first byte is not an ASCII digit.
    #[error("string starts with non-digit character '{}'", .found.escape_ascii())]
    InvalidStartCharacter { found: u8 },

    /// A later byte is not an ASCII digit.
    #[error("encountered non-digit character '{}' at pos. {position}", .found.escape_ascii())]
    NonDigitCharacter { found: u8, position: usize },

    /// A '0' follows a digit other than '1' or '2'.
    #[error("encountered 0 which can not be attached to {preceding} at pos. {position}")]
    InvalidZeroPlacement { preceding: char, position: usize },
}
