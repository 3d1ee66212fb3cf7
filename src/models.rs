//! Public Twine models.
//!
//! Models are organized into domain-specific submodules. Each model keeps its
//! computation in an internal `core` module, and its [`twine_core::Model`]
//! implementation is a thin adapter over that core.

pub mod propulsion;
