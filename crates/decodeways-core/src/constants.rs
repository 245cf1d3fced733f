//! Process-level constants shared by the binary crates.

/// Exit codes reported by the `decodeways` binary.
pub mod exit_codes {
    /// The count was printed.
    pub const SUCCESS: i32 = 0;
    /// Missing argument, unreadable input, or invalid digit string.
    pub const ERROR_GENERIC: i32 = 1;
}
