//! Errors raised while building seeders.

use std::error::Error;
use std::fmt;

/// Errors from seeder construction and pattern lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedError {
    /// Live-cell probability outside `[0, 1]`, or NaN.
    InvalidDensity {
        /// The rejected value.
        value: f64,
    },
    /// No pattern is registered under this name.
    UnknownPattern {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity { value } => {
                write!(f, "density {value} is not a probability in [0, 1]")
            }
            Self::UnknownPattern { name } => write!(f, "unknown pattern '{name}'"),
        }
    }
}

impl Error for SeedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let err = SeedError::InvalidDensity { value: 1.5 };
        assert_eq!(err.to_string(), "density 1.5 is not a probability in [0, 1]");
        let err = SeedError::UnknownPattern {
            name: "spaceship".into(),
        };
        assert_eq!(err.to_string(), "unknown pattern 'spaceship'");
    }
}
