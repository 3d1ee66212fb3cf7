//! Batch inputs for the inlet solver.
//!
//! Every per-condition field is a [`Batched`] value: a scalar broadcasts to
//! the batch length and arrays must all share one length.

mod batched;
mod freestream;
mod geometry;

pub use batched::Batched;
pub use freestream::FreestreamState;
pub use geometry::{InletGeometry, ShockGeometry};

pub(crate) use freestream::ElementInput;

use super::InputError;

/// Resolves the batch length shared by every array input.
///
/// # Errors
///
/// Returns [`InputError::LengthMismatch`] if two array inputs differ in length.
pub(super) fn batch_len(
    freestream: &FreestreamState,
    geometry: &InletGeometry,
) -> Result<usize, InputError> {
    let lengths = [
        ("mach", freestream.mach.array_len()),
        ("stagnation_pressure", freestream.stagnation_pressure.array_len()),
        ("stagnation_temperature", freestream.stagnation_temperature.array_len()),
        ("static_pressure", freestream.static_pressure.array_len()),
        ("stream_tube_area", geometry.stream_tube_area.array_len()),
    ];

    let mut expected: Option<(&'static str, usize)> = None;
    for (field, len) in lengths {
        let Some(len) = len else { continue };
        match expected {
            None => expected = Some((field, len)),
            Some((first, n)) if n != len => {
                return Err(InputError::LengthMismatch {
                    field,
                    found: len,
                    reference: first,
                    expected: n,
                });
            }
            Some(_) => {}
        }
    }

    Ok(expected.map_or(1, |(_, n)| n))
}
