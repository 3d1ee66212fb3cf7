//! Propulsion system models.
//!
//! This module contains models for air-breathing propulsion components,
//! starting with the inlet that delivers air to the engine face.

pub mod inlet;
