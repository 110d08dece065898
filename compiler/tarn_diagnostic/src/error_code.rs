//! Error codes for all compiler diagnostics.
//!
//! Each error code is a unique identifier (e.g. `E1001`) with the first
//! digit indicating the phase. Used for documentation lookups and for
//! matching diagnostics in tests.

use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where the first digit indicates phase:
/// - E1xxx: Well-formedness errors
/// - E9xxx: Driver and reporting errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Well-formedness (E1xxx)
    /// String literal is not valid UTF-8
    E1001,
    /// Character literal is not exactly one scalar value
    E1002,
    /// Include alias has more than one segment
    E1003,
    /// `module` use-item has more than one segment
    E1004,
    /// Type variable does not start with a lowercase letter
    E1005,
    /// More than one `provide *` in a module
    E1006,
    /// Record pattern with no fields
    E1007,
    /// Recursive `let` whose value is not a function
    E1008,
    /// Recursive `let` marked mutable
    E1009,
    /// Rational literal with a zero denominator
    E1010,
    /// Unknown attribute
    E1011,
    /// Wrong number of attribute arguments
    E1012,
    /// Attribute not allowed in this position
    E1013,
    /// `break`/`continue` outside of a loop
    E1014,

    // Reporting (E9xxx)
    /// Too many errors; output truncated
    E9001,
}

impl ErrorCode {
    /// Every error code, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
        ErrorCode::E1013,
        ErrorCode::E1014,
        ErrorCode::E9001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Check if this is a well-formedness error (E1xxx range).
    pub fn is_wellformedness_error(&self) -> bool {
        !matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
