//! Crate-wide error type
//!
//! Numerical degeneracies inside a tick are recovered locally by the driver;
//! only construction paths hand these back to callers.

/// Errors raised by the simulation kernel
#[derive(Debug)]
pub enum SimError {
    /// `normalize` on a vector with zero (or non-finite) norm
    ZeroLengthVector,
    /// Quadratic with `a` too close to zero for the closed-form solution
    DegenerateQuadratic { a: f64 },
    /// Settings rejected by validation
    InvalidConfig(String),
    /// Body `index` could not be placed without overlap
    Placement { index: usize, attempts: u32 },
    /// Settings JSON could not be decoded
    Parse(serde_json::Error),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::ZeroLengthVector => write!(f, "cannot normalize a zero-length vector"),
            SimError::DegenerateQuadratic { a } => {
                write!(f, "degenerate quadratic: leading coefficient {} is zero", a)
            }
            SimError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            SimError::Placement { index, attempts } => write!(
                f,
                "could not place body {} without overlap after {} attempts",
                index, attempts
            ),
            SimError::Parse(e) => write!(f, "settings parse error: {}", e),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Parse(err)
    }
}
