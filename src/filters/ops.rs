//! Comparison operators shared by every attribute filter

use std::fmt;

/// Binary comparison applied as `key <op> reference`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// key == reference
    Eq,
    /// key >= reference
    Ge,
    /// key <= reference
    Le,
}

impl ComparisonOp {
    /// Applies the operator. Uses `PartialOrd`, so NaN on either side is false.
    pub fn apply<T: PartialOrd + ?Sized>(self, key: &T, reference: &T) -> bool {
        match self {
            ComparisonOp::Eq => key == reference,
            ComparisonOp::Ge => key >= reference,
            ComparisonOp::Le => key <= reference,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "eq",
            ComparisonOp::Ge => "ge",
            ComparisonOp::Le => "le",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
