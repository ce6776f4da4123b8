//! Direction (Long / Short) of a scalar-market position.

/// Position direction.
///
/// Serialized on the wire as lowercase `"long"` / `"short"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Long,
    Short,
}

impl Direction {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Direction::Long => Direction::Short,
            Direction::Short => Direction::Long,
        }
    }
}
