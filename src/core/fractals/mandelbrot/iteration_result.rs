/// Outcome of one escape-time evaluation.
///
/// The recurrence stops either because the orbit escaped or because the
/// iteration budget ran out; there is no third outcome.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IterationResult {
    /// The orbit reached the escape threshold. Exterior point.
    Escaped { smoothed_count: f64 },
    /// The orbit stayed below the threshold for the whole budget. Interior
    /// point. `smoothed_count` is kept as computed, which may be non-finite.
    Bounded { smoothed_count: f64 },
}

impl IterationResult {
    #[must_use]
    pub fn is_interior(&self) -> bool {
        matches!(self, Self::Bounded { .. })
    }

    #[must_use]
    pub fn smoothed_count(&self) -> f64 {
        match *self {
            Self::Escaped { smoothed_count } | Self::Bounded { smoothed_count } => smoothed_count,
        }
    }
}
