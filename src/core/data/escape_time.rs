/// Outcome of iterating one point of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapeTime {
    /// Stayed within the escape radius for every allowed iteration.
    Bounded,
    /// Left the escape radius; `iterations` is the zero-based step it escaped on.
    Escaped { iterations: u32 },
}

impl EscapeTime {
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded)
    }

    /// Escape step, or 0 for bounded points.
    #[must_use]
    pub fn iterations(&self) -> u32 {
        match self {
            Self::Bounded => 0,
            Self::Escaped { iterations } => *iterations,
        }
    }
}
