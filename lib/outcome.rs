//! Computational-basis outcomes and their overlap with a CH-form state.

use std::{ fmt, str::FromStr };
use num_complex::Complex64 as C64;
use crate::{
    chform::StabState,
    error::ChError,
};

/// A definite outcome of measuring every qubit in the Z-basis, ordered from
/// qubit 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BasisOutcome(Vec<bool>);

impl From<Vec<bool>> for BasisOutcome {
    fn from(bits: Vec<bool>) -> Self { Self(bits) }
}

impl FromStr for BasisOutcome {
    type Err = ChError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                x => Err(ChError::InvalidOutcome(x)),
            })
            .collect::<Result<Vec<bool>, ChError>>()
            .map(Self)
    }
}

impl fmt::Display for BasisOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{}", u8::from(*b)))
    }
}

impl BasisOutcome {
    pub fn bits(&self) -> &[bool] { &self.0 }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Return `⟨self∣ψ⟩`.
    ///
    /// *Panics if `self` and `state` cover different numbers of qubits.*
    pub fn overlap(&self, state: &StabState) -> C64 {
        state.amplitude(&self.0)
    }

    /// Return the Born-rule probability `∣⟨self∣ψ⟩∣²`.
    pub fn probability(&self, state: &StabState) -> f64 {
        self.overlap(state).norm_sqr()
    }
}
