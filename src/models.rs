use std::fmt;

/// Outcome of ordering a course plan.
///
/// A detected cycle is a normal answer, not an error: it carries the courses
/// that never became eligible, but never a partial ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Order<T> {
    /// Every registered course exactly once, prerequisites first
    Sequence(Vec<T>),
    /// No valid order exists. `unresolved` lists the courses that lie on or
    /// downstream of a cycle, in registration order.
    CycleDetected { unresolved: Vec<T> },
}

impl<T> Order<T> {
    pub fn is_cycle(&self) -> bool {
        matches!(self, Order::CycleDetected { .. })
    }

    pub fn as_sequence(&self) -> Option<&[T]> {
        match self {
            Order::Sequence(courses) => Some(courses.as_slice()),
            Order::CycleDetected { .. } => None,
        }
    }

    pub fn into_sequence(self) -> Option<Vec<T>> {
        match self {
            Order::Sequence(courses) => Some(courses),
            Order::CycleDetected { .. } => None,
        }
    }
}

/// Renders `[a, b, c]` for a sequence and `None` for a cycle
impl<T: fmt::Display> fmt::Display for Order<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Sequence(courses) => write!(f, "[{}]", join(courses, ", ")),
            Order::CycleDetected { .. } => write!(f, "None"),
        }
    }
}

/// Join displayable items with a separator
pub fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}
