use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The logarithm argument was zero or negative.
    NonPositiveInput(f64),

    /// The logarithm base was zero or negative.
    NonPositiveBase(f64),

    /// The logarithm base was exactly 1, for which no logarithm exists.
    UnitBase,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NonPositiveInput(x) => {
                write!(f, "ln(x) is undefined for x <= 0 (got x = {}).", x)
            }

            Error::NonPositiveBase(b) => {
                write!(f, "log_b(x) is undefined for b <= 0 (got b = {}).", b)
            }

            Error::UnitBase => write!(f, "log_b(x) is undefined for b = 1."),
        }
    }
}

impl std::error::Error for Error {}
