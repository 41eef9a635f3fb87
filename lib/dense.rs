//! Naive state-vector simulation, used as a reference in tests.
//!
//! Qubit 0 is the most significant bit of a basis index, matching
//! [`StabState::state_vector`].

use std::f64::consts::FRAC_1_SQRT_2;
use nalgebra as na;
use num_complex::Complex64 as C64;
use crate::{ chform::StabState, gate::Gate };

#[derive(Clone, Debug)]
pub(crate) struct Dense {
    n: usize,
    amps: na::DVector<C64>,
}

impl Dense {
    pub(crate) fn new(n: usize) -> Self {
        let mut amps = na::DVector::zeros(1 << n);
        amps[0] = C64::from(1.0);
        Self { n, amps }
    }

    pub(crate) fn from_state(state: &StabState) -> Self {
        Self { n: state.num_qubits(), amps: state.state_vector() }
    }

    pub(crate) fn amps(&self) -> &na::DVector<C64> { &self.amps }

    fn mask(&self, k: usize) -> usize { 1 << (self.n - 1 - k) }

    pub(crate) fn apply(&mut self, gate: Gate) {
        let dim = self.amps.len();
        match gate {
            Gate::S(k) => {
                let mk = self.mask(k);
                (0..dim).filter(|idx| idx & mk != 0)
                    .for_each(|idx| { self.amps[idx] *= C64::i(); });
            },
            Gate::CZ(t, c) => {
                let mtc = self.mask(t) | self.mask(c);
                (0..dim).filter(|idx| idx & mtc == mtc)
                    .for_each(|idx| { self.amps[idx] = -self.amps[idx]; });
            },
            Gate::CX(t, c) => {
                let (mt, mc) = (self.mask(t), self.mask(c));
                (0..dim).filter(|idx| idx & mc != 0 && idx & mt == 0)
                    .for_each(|idx| { self.amps.swap_rows(idx, idx | mt); });
            },
            Gate::H(k) => {
                let mk = self.mask(k);
                for idx in (0..dim).filter(|idx| idx & mk == 0) {
                    let a0 = self.amps[idx];
                    let a1 = self.amps[idx | mk];
                    self.amps[idx] = (a0 + a1) * FRAC_1_SQRT_2;
                    self.amps[idx | mk] = (a0 - a1) * FRAC_1_SQRT_2;
                }
            },
        }
    }

    pub(crate) fn apply_pauli_y(&mut self, k: usize) {
        let mk = self.mask(k);
        for idx in (0..self.amps.len()).filter(|idx| idx & mk == 0) {
            let a0 = self.amps[idx];
            let a1 = self.amps[idx | mk];
            self.amps[idx] = -C64::i() * a1;
            self.amps[idx | mk] = C64::i() * a0;
        }
    }
}
