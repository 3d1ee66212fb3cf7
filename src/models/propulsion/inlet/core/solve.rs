//! Batch assembly over independent elements.

use crate::support::thermo::GasProperties;

use super::{
    ElementOutcome, ElementStatus, EngineFaceState, FlowState, FreestreamState, InletError,
    InletGeometry, InletSolution, SolveConfig, SolveInletError, SolveMode,
    element::solve_element, input::batch_len,
};

type ElementResult = Result<(EngineFaceState, ElementOutcome), InletError>;

/// Solves every element of the batch.
///
/// # Errors
///
/// Returns [`SolveInletError::Input`] if the batch inputs are inconsistent,
/// and in [`SolveMode::Strict`] returns [`SolveInletError::Element`] for the
/// lowest failing element.
pub(super) fn solve(
    freestream: &FreestreamState,
    geometry: &InletGeometry,
    gas: &GasProperties,
    config: &SolveConfig,
) -> Result<InletSolution, SolveInletError> {
    let len = batch_len(freestream, geometry)?;

    let results = evaluate(len, |index| {
        let input = freestream.element(index, geometry);
        solve_element(index, &input, geometry, gas, config)
    });

    if let (SolveMode::Strict, Some((index, err))) = (config.mode, first_failure(&results)) {
        return Err(SolveInletError::Element {
            index,
            source: err.clone(),
        });
    }

    let (state, status) = results
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok((state, outcome)) => (state, ElementStatus::Solved(outcome)),
            Err(err) => {
                log::warn!("element {index} failed: {err}");
                (EngineFaceState::nan(), ElementStatus::Failed(err))
            }
        })
        .unzip::<_, _, FlowState, Vec<_>>();

    Ok(InletSolution { state, status })
}

fn first_failure(results: &[ElementResult]) -> Option<(usize, &InletError)> {
    results
        .iter()
        .enumerate()
        .find_map(|(index, result)| result.as_ref().err().map(|err| (index, err)))
}

#[cfg(not(feature = "rayon"))]
fn evaluate(len: usize, solve_at: impl Fn(usize) -> ElementResult) -> Vec<ElementResult> {
    (0..len).map(solve_at).collect()
}

#[cfg(feature = "rayon")]
fn evaluate(
    len: usize,
    solve_at: impl Fn(usize) -> ElementResult + Sync + Send,
) -> Vec<ElementResult> {
    use rayon::prelude::*;

    (0..len).into_par_iter().map(solve_at).collect()
}
