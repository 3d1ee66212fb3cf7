use crate::support::gas_dynamics::RootConfig;

/// How element failures affect a batch solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SolveMode {
    /// Failed elements are recorded with NaN outputs and a failure status.
    #[default]
    Batch,

    /// The first failed element aborts the solve.
    Strict,
}

/// Solver configuration for an inlet batch solve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolveConfig {
    /// Failure handling for the batch.
    pub mode: SolveMode,

    /// Bisection settings for the area–Mach inversion and shock angle solves.
    pub root: RootConfig,
}

impl SolveConfig {
    /// Returns the default configuration in [`SolveMode::Strict`].
    #[must_use]
    pub fn strict() -> Self {
        Self {
            mode: SolveMode::Strict,
            ..Self::default()
        }
    }
}
