//! Exact simulation of Clifford circuits on stabilizer states held in CH-form.
//!
//! A state is stored as `ω U_C U_H ∣s⟩` (see [`chform`]); the generators S,
//! CX, and CZ update `U_C` directly, while Hadamards are resolved through
//! [`desuper`] whenever they split the state across two basis vectors.
//!
//! Only Clifford gates are supported. Everything is tracked exactly,
//! including the global phase.

pub mod bits;
pub mod chform;
pub mod desuper;
pub mod error;
pub mod gate;
pub mod outcome;

#[cfg(test)]
mod dense;
