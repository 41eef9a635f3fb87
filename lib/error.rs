//! Internal-consistency faults.
//!
//! Caller contract violations (out-of-range qubits, repeated qubits in a
//! two-qubit gate, mismatched lengths) panic instead; they are bugs at the call
//! site, not conditions to recover from.

use thiserror::Error;

/// Failures that indicate a corrupted CH-form or malformed input data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChError {
    /// A Hadamard that leaves the state on a single basis vector must carry an
    /// odd phase exponent; an even one means the CH-form does not describe a
    /// normalized state.
    #[error("Hadamard on qubit {qubit} does not preserve the norm: exponent g[{qubit}] = {exponent} is even on a non-splitting branch")]
    NormViolation { qubit: usize, exponent: u8 },

    /// One of the algebraic relations between `A`, `B`, `C`, and `g` fails.
    #[error("CH-form invariant violated: {0}")]
    BrokenInvariant(String),

    /// A basis outcome string contained something other than `0` or `1`.
    #[error("invalid basis outcome character {0:?}: expected '0' or '1'")]
    InvalidOutcome(char),
}

pub type ChResult<T> = Result<T, ChError>;
