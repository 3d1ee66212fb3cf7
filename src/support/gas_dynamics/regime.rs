use std::fmt;

/// Subsonic or supersonic.
///
/// Used both to classify a flow and to select a branch of the two-valued
/// area–Mach relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    /// `M ≤ 1`.
    Subsonic,
    /// `M ≥ 1`.
    Supersonic,
}

impl FlowRegime {
    /// Returns the branch a Mach number lies on, with `M = 1` counted as subsonic.
    #[must_use]
    pub fn of_mach(mach: f64) -> Self {
        if mach <= 1.0 {
            Self::Subsonic
        } else {
            Self::Supersonic
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subsonic => f.write_str("subsonic"),
            Self::Supersonic => f.write_str("supersonic"),
        }
    }
}
