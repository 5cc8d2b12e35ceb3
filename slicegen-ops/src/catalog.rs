//! The fixed vocabulary of slice operations.

use std::{fmt, str::FromStr};

/// One of the ten operations of the algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Concat,
    Drop,
    DropRight,
    Filter,
    First,
    Last,
    Map,
    Reduce,
    Reverse,
    Uniq,
}

impl Operation {
    /// Every operation, in the order generated code declares them.
    pub const ALL: [Operation; 10] = [
        Operation::Concat,
        Operation::Drop,
        Operation::DropRight,
        Operation::Filter,
        Operation::First,
        Operation::Last,
        Operation::Map,
        Operation::Reduce,
        Operation::Reverse,
        Operation::Uniq,
    ];

    /// Exported name of the operation (e.g., "DropRight").
    pub fn name(self) -> &'static str {
        match self {
            Operation::Concat => "Concat",
            Operation::Drop => "Drop",
            Operation::DropRight => "DropRight",
            Operation::Filter => "Filter",
            Operation::First => "First",
            Operation::Last => "Last",
            Operation::Map => "Map",
            Operation::Reduce => "Reduce",
            Operation::Reverse => "Reverse",
            Operation::Uniq => "Uniq",
        }
    }

    /// One-line description, phrased to follow the operation's name.
    pub fn summary(self) -> &'static str {
        match self {
            Operation::Concat => "returns the elements of slice followed by those of slice2.",
            Operation::Drop => "returns slice without its first n elements.",
            Operation::DropRight => "returns slice without its last n elements.",
            Operation::Filter => "returns the elements for which fn returns true.",
            Operation::First => "returns a slice holding the first element, or an empty slice.",
            Operation::Last => "returns a slice holding the last element, or an empty slice.",
            Operation::Map => "returns the result of applying fn to every element.",
            Operation::Reduce => "folds slice from the left, starting at initial.",
            Operation::Reverse => "returns the elements in reverse order.",
            Operation::Uniq => "returns the elements without later duplicates.",
        }
    }

    /// Whether the operation compares elements by value.
    ///
    /// Element types without value equality cannot offer these.
    pub fn requires_equality(self) -> bool {
        matches!(self, Operation::Uniq)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown operation '{}'", s))
    }
}
