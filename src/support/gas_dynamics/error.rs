use thiserror::Error;

use super::FlowRegime;

/// Errors returned by the gas dynamics relations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GasDynamicsError {
    /// An input lies outside the domain of the relation.
    ///
    /// For example `gamma ≤ 1`, or a subsonic upstream Mach number passed to
    /// a shock relation.
    #[error("out of domain: {context}")]
    Domain { context: String },

    /// The area–Mach relation has no root on the requested branch.
    #[error("no {branch} root for area-Mach value {f_m}: {reason}")]
    NoRoot {
        f_m: f64,
        branch: FlowRegime,
        reason: &'static str,
    },

    /// The requested shock geometry exceeds the attached-shock limit.
    #[error("detached shock at M1={mach}: {context}")]
    DetachedShock { mach: f64, context: String },

    /// The root solver failed to converge.
    #[error("root solve failed: {context}")]
    Solver { context: String },
}

impl GasDynamicsError {
    pub(crate) fn domain(context: impl Into<String>) -> Self {
        Self::Domain {
            context: context.into(),
        }
    }
}
