//! *n*-qubit stabilizer states in CH-form.
//!
//! Following [arXiv:1808.00128][ch-form], any stabilizer state can be written
//! as
//!
//! ```text
//! ∣ψ⟩ = ω U_C U_H ∣s⟩
//! ```
//!
//! where `ω` is a complex scalar, `U_C` is a Clifford built from S, CX, and CZ
//! gates only (a "C-type" Clifford, for which `U_C ∣0…0⟩ = ∣0…0⟩`), `U_H =
//! H^{v_0} ⊗ … ⊗ H^{v_{n-1}}` is a layer of Hadamards selected by a bit vector
//! `v`, and `∣s⟩` is a computational basis state. `U_C` is stored by its
//! action on single-qubit Paulis,
//!
//! ```text
//! U_C⁻¹ Z_p U_C = Z(B_p)
//! U_C⁻¹ X_p U_C = i^{g_p} X(A_p) Z(C_p)
//! ```
//!
//! where `A_p`, `B_p`, `C_p` are the `p`-th rows of `n × n` binary matrices and
//! `g` is a vector of integers modulo 4. Commutation relations between the
//! Paulis then require
//!
//! * `A Bᵗ = I` (so `B` is always invertible);
//! * `A Cᵗ` symmetric;
//! * `g_p = A_p · C_p` (mod 2).
//!
//! S, CX, and CZ gates update `A`, `B`, `C`, `g` in *O*(*n*) time. Hadamards
//! either rescale `ω` or, when they split the state into two basis vectors,
//! are collapsed back into CH-form by [`desuperpositionize`] at *O*(*n*²)
//! cost.
//!
//! # Example
//! ```
//! use ch_sim::{ chform::StabState, gate::Gate };
//!
//! // initialize a new state to ∣000⟩
//! let mut state = StabState::new(3);
//!
//! // generate a GHZ state
//! let ghz = Gate::H(0) | Gate::CX(1, 0) | Gate::CX(2, 1);
//! ghz.apply(&mut state).unwrap();
//!
//! println!("{}", state.as_kets());
//! // +0.7071+0.0000i∣000⟩ +0.7071+0.0000i∣111⟩
//! ```
//!
//! [ch-form]: https://arxiv.org/abs/1808.00128

use std::{ f64::consts::FRAC_1_SQRT_2, fmt };
use itertools::Itertools;
use nalgebra as na;
use num_complex::Complex64 as C64;
use crate::{
    bits::{ BitMatrix, BitVec, Mod4Vec },
    desuper::{ desuperpositionize, Desuperposition },
    error::{ ChError, ChResult },
    gate::{ CGate, Gate, Phase },
};

/// A stabilizer state of a finite register of qubits in CH-form.
#[derive(Clone, Debug, PartialEq)]
pub struct StabState {
    pub(crate) n: usize,
    pub(crate) a: BitMatrix, // X-part of U_C⁻¹ X_p U_C, by rows
    pub(crate) b: BitMatrix, // U_C⁻¹ Z_p U_C, by rows
    pub(crate) c: BitMatrix, // Z-part of U_C⁻¹ X_p U_C, by rows
    pub(crate) g: Mod4Vec, // powers of i on U_C⁻¹ X_p U_C
    pub(crate) v: BitVec, // Hadamard selector
    pub(crate) s: BitVec, // basis vector
    pub(crate) phase: C64,
}

/// The two ways a Hadamard can act on a CH-form state, as computed by
/// [`StabState::hadamard_update`].
#[derive(Clone, Debug, PartialEq)]
pub enum HadamardUpdate {
    /// Both branches of the Hadamard land on the same basis vector `s`; only
    /// `s` and the scalar phase change.
    Interfere { s: BitVec, factor: C64 },
    /// The branches differ; `v` and `s` are replaced and the corrections are
    /// right-multiplied onto `U_C`.
    Split { factor: C64, desuper: Desuperposition },
}

impl StabState {
    /// Create a new state of size `n` initialized to ∣0...0⟩.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            a: BitMatrix::identity(n),
            b: BitMatrix::identity(n),
            c: BitMatrix::zeros(n),
            g: Mod4Vec::zeros(n),
            v: BitVec::zeros(n),
            s: BitVec::zeros(n),
            phase: C64::from(1.0),
        }
    }

    /// Return the number of qubits.
    pub fn num_qubits(&self) -> usize { self.n }

    pub fn a(&self) -> &BitMatrix { &self.a }

    pub fn b(&self) -> &BitMatrix { &self.b }

    pub fn c(&self) -> &BitMatrix { &self.c }

    pub fn g(&self) -> &Mod4Vec { &self.g }

    pub fn v(&self) -> &BitVec { &self.v }

    pub fn s(&self) -> &BitVec { &self.s }

    pub fn phase(&self) -> C64 { self.phase }

    fn check_qubit(&self, k: usize) {
        if k >= self.n {
            panic!(
                "StabState: qubit index {} out of bounds for {} qubits", k, self.n);
        }
    }

    fn check_gate(&self, gate: Gate) {
        if !gate.is_valid_for(self.n) {
            panic!(
                "StabState: gate {} is invalid for a register of {} qubits",
                gate, self.n,
            );
        }
    }

    fn apply_ctype(&mut self, cgate: CGate) -> &mut Self {
        let gate = Gate::from(cgate);
        self.check_gate(gate);
        log::trace!(target: "ch_sim::gate", "applying {}", gate);
        cgate.left_multiply(self)
    }

    /// Apply an S gate to the `k`-th qubit.
    ///
    /// *Panics if `k` is out of bounds.*
    pub fn apply_s(&mut self, k: usize) -> &mut Self {
        self.apply_ctype(CGate::S(k))
    }

    /// Apply a CNOT gate to qubit `t`, with qubit `c` as control.
    ///
    /// *Panics if either index is out of bounds or `t == c`.*
    pub fn apply_cx(&mut self, t: usize, c: usize) -> &mut Self {
        self.apply_ctype(CGate::CX(t, c))
    }

    /// Apply a CZ gate to qubits `t` and `c`.
    ///
    /// *Panics if either index is out of bounds or `t == c`.*
    pub fn apply_cz(&mut self, t: usize, c: usize) -> &mut Self {
        self.apply_ctype(CGate::CZ(t, c))
    }

    /// Apply a Z gate to the `k`-th qubit.
    pub fn apply_z(&mut self, k: usize) -> &mut Self {
        self.apply_s(k).apply_s(k)
    }

    /// Apply an X gate to the `k`-th qubit.
    pub fn apply_x(&mut self, k: usize) -> ChResult<&mut Self> {
        self.apply_h(k)?.apply_z(k).apply_h(k)
    }

    /// Apply a Y gate to the `k`-th qubit.
    pub fn apply_y(&mut self, k: usize) -> ChResult<&mut Self> {
        self.apply_s(k).apply_s(k).apply_s(k)
            .apply_x(k)
            .map(|state| state.apply_s(k))
    }

    /// Compute the effect of a Hadamard on the `k`-th qubit without changing
    /// `self`.
    ///
    /// *Panics if `k` is out of bounds.*
    pub fn hadamard_update(&self, k: usize) -> ChResult<HadamardUpdate> {
        self.check_qubit(k);
        let vbar = self.v.not();
        let (ak, bk, ck) = (self.a.row(k), self.b.row(k), self.c.row(k));
        let gk = self.g[k];

        let t = &self.s ^ &(bk & &self.v);
        let mut u = &self.s ^ &(ak & &vbar);
        u ^= &(ck & &self.v);

        let alpha = (bk & &vbar).dot(&self.s);
        let beta
            = (ck & &vbar).dot(&self.s) ^ (ak & &self.v).dot(&(ck ^ &self.s));

        if t == u {
            if gk % 2 == 0 {
                return Err(ChError::NormViolation { qubit: k, exponent: gk });
            }
            let factor
                = (
                    Phase::sign(alpha).as_complex()
                    + (Phase::i_pow(gk) + Phase::sign(beta)).as_complex()
                ) * FRAC_1_SQRT_2;
            Ok(HadamardUpdate::Interfere { s: t, factor })
        } else {
            let delta = (gk + 2 * (u8::from(alpha) + u8::from(beta))) % 4;
            let desuper = desuperpositionize(&t, &u, delta, &self.v);
            // the 1/√2 from H cancels the √2 in ω
            let factor = (Phase::sign(alpha) + desuper.phase).as_complex();
            Ok(HadamardUpdate::Split { factor, desuper })
        }
    }

    /// Apply a Hadamard gate to the `k`-th qubit.
    ///
    /// *Panics if `k` is out of bounds.*
    pub fn apply_h(&mut self, k: usize) -> ChResult<&mut Self> {
        self.check_qubit(k);
        log::trace!(target: "ch_sim::gate", "applying {}", Gate::H(k));
        match self.hadamard_update(k)? {
            HadamardUpdate::Interfere { s, factor } => {
                self.s = s;
                self.phase *= factor;
            },
            HadamardUpdate::Split { factor, desuper } => {
                let Desuperposition { v, s, gates, .. } = desuper;
                self.phase *= factor;
                self.v = v;
                self.s = s;
                gates.into_iter()
                    .for_each(|cgate| { cgate.right_multiply(self); });
            },
        }
        Ok(self)
    }

    /// Perform the action of a gate.
    ///
    /// *Panics if any qubit index is out of bounds or a two-qubit gate names
    /// the same qubit twice.*
    pub fn apply_gate(&mut self, gate: Gate) -> ChResult<&mut Self> {
        match gate.as_ctype() {
            Some(cgate) => Ok(self.apply_ctype(cgate)),
            None => {
                let Gate::H(k) = gate else { unreachable!() };
                self.apply_h(k)
            },
        }
    }

    /// Perform a series of gates.
    pub fn apply_circuit<'a, I>(&mut self, gates: I) -> ChResult<&mut Self>
    where I: IntoIterator<Item = &'a Gate>
    {
        for gate in gates.into_iter() { self.apply_gate(*gate)?; }
        Ok(self)
    }

    /// Verify the algebraic relations between `A`, `B`, `C`, and `g`, and
    /// that the scalar phase has unit modulus.
    pub fn check_invariants(&self) -> ChResult<()> {
        if self.a.mul_transpose(&self.b) != BitMatrix::identity(self.n) {
            return Err(ChError::BrokenInvariant("A·Bᵗ ≠ I".to_string()));
        }
        if !self.b.is_invertible() {
            return Err(ChError::BrokenInvariant("B is singular".to_string()));
        }
        if !self.a.mul_transpose(&self.c).is_symmetric() {
            return Err(
                ChError::BrokenInvariant("A·Cᵗ is not symmetric".to_string()));
        }
        let maybe_p
            = (0..self.n)
            .find(|p| {
                (self.g[*p] % 2 == 1) != self.a.row(*p).dot(self.c.row(*p))
            });
        if let Some(p) = maybe_p {
            return Err(
                ChError::BrokenInvariant(
                    format!("g[{}] = {} disagrees with A_{}·C_{}", p, self.g[p], p, p)
                )
            );
        }
        if (self.phase.norm() - 1.0).abs() > 1e-9 {
            return Err(
                ChError::BrokenInvariant(
                    format!("|ω| = {} is not 1", self.phase.norm())
                )
            );
        }
        Ok(())
    }

    /// Compute the amplitude `⟨x∣ψ⟩` for a computational basis state `x`.
    ///
    /// *Panics if `x` does not have one entry per qubit.*
    pub fn amplitude(&self, x: &[bool]) -> C64 {
        if x.len() != self.n {
            panic!(
                "StabState: basis state of length {} for {} qubits",
                x.len(), self.n,
            );
        }
        // ⟨x∣U_C = ⟨0…0∣ U_C⁻¹ X(x) U_C, expanded as i^e X(xa) Z(zb)
        let mut e: u8 = 0;
        let mut xa = BitVec::zeros(self.n);
        let mut zb = BitVec::zeros(self.n);
        for p in x.iter().positions(|b| *b) {
            e += self.g[p] + 2 * u8::from(zb.dot(self.a.row(p)));
            xa ^= self.a.row(p);
            zb ^= self.c.row(p);
            e %= 4;
        }
        e += 2 * u8::from(xa.dot(&zb));

        // ⟨xa∣U_H∣s⟩
        let mismatch = &(&xa ^ &self.s) & &self.v.not();
        if !mismatch.is_zero() { return C64::from(0.0); }
        e += 2 * u8::from((&xa & &self.v).dot(&self.s));
        let h = self.v.count_ones() as i32;
        self.phase * Phase::i_pow(e % 4).as_complex() * FRAC_1_SQRT_2.powi(h)
    }

    /// Compute all 2<sup>*n*</sup> amplitudes, with qubit 0 as the most
    /// significant bit of the index.
    ///
    /// *Panics if the register is too large to index.*
    pub fn state_vector(&self) -> na::DVector<C64> {
        if self.n >= usize::BITS as usize - 1 {
            panic!("StabState: {} qubits are too many for a state vector", self.n);
        }
        let dim: usize = 1 << self.n;
        na::DVector::from_iterator(
            dim,
            (0..dim).map(|idx| self.amplitude(&index_bits(idx, self.n))),
        )
    }

    /// Convert `self` to a list of basis states with nonzero amplitude, in
    /// ascending index order.
    pub fn as_kets(&self) -> Kets {
        let terms
            = self.state_vector().iter().enumerate()
            .filter(|(_, amp)| amp.norm() > 1e-12)
            .map(|(idx, amp)| {
                BasisState { amp: *amp, bits: index_bits(idx, self.n) }
            })
            .collect();
        Kets(terms)
    }
}

/// Expand `idx` into `n` bits, most significant first.
pub(crate) fn index_bits(idx: usize, n: usize) -> Vec<bool> {
    (0..n).map(|k| (idx >> (n - 1 - k)) & 1 == 1).collect()
}

impl fmt::Display for StabState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ω = {:+.4}{:+.4}i", self.phase.re, self.phase.im)?;
        write!(f, "{:w$} | {:w$} | {:w$} | g v s", "A", "B", "C", w = self.n)?;
        for p in 0..self.n {
            writeln!(f)?;
            write!(
                f, "{} | {} | {} | {} {} {}",
                self.a.row(p), self.b.row(p), self.c.row(p),
                self.g[p], u8::from(self.v.get(p)), u8::from(self.s.get(p)),
            )?;
        }
        Ok(())
    }
}

/// A single basis state with a complex amplitude.
#[derive(Clone, Debug, PartialEq)]
pub struct BasisState {
    pub amp: C64,
    pub bits: Vec<bool>,
}

impl fmt::Display for BasisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.4}{:+.4}i", self.amp.re, self.amp.im)?;
        write!(f, "∣")?;
        for b in self.bits.iter() { write!(f, "{}", u8::from(*b))?; }
        write!(f, "⟩")?;
        Ok(())
    }
}

/// A superposition of basis states.
#[derive(Clone, Debug, PartialEq)]
pub struct Kets(pub Vec<BasisState>);

impl fmt::Display for Kets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

#[cfg(test)]
mod test {
    use std::{ sync::Mutex, thread::{ self, ThreadId } };
    use rand::{ rngs::StdRng, SeedableRng };
    use crate::{ dense::Dense, gate::Composite };
    use super::*;

    fn assert_close(lhs: &na::DVector<C64>, rhs: &na::DVector<C64>) {
        assert_eq!(lhs.len(), rhs.len());
        for (k, (l, r)) in lhs.iter().zip(rhs.iter()).enumerate() {
            assert!(
                (l - r).norm() < 1e-9,
                "amplitude {} differs: {} vs {}", k, l, r,
            );
        }
    }

    fn random_state(n: usize, len: usize, seed: u64) -> StabState {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = StabState::new(n);
        Composite::random(n, len, &mut rng).apply(&mut state).unwrap();
        state
    }

    #[test]
    fn initial_state() {
        let state = StabState::new(3);
        assert!(state.check_invariants().is_ok());
        let psi = state.state_vector();
        assert_eq!(psi[0], C64::from(1.0));
        assert!(psi.iter().skip(1).all(|amp| amp.norm() == 0.0));
        assert_eq!(state.as_kets().to_string(), "+1.0000+0.0000i∣000⟩");
    }

    #[test]
    fn hadamard_round_trip() {
        let mut state = StabState::new(2);
        state.apply_h(0).unwrap();
        assert_eq!(state.v(), &BitVec::from_bools(&[true, false]));
        state.apply_h(0).unwrap();
        assert_eq!(state.s(), &BitVec::zeros(2));
        assert_eq!(state.v(), &BitVec::zeros(2));
        assert!((state.phase().norm() - 1.0).abs() < 1e-12);
        assert_eq!(state, StabState::new(2));
    }

    #[test]
    fn bell_state() {
        let mut state = StabState::new(2);
        (Gate::H(0) | Gate::CX(1, 0)).apply(&mut state).unwrap();
        let expected
            = na::DVector::from_vec(vec![
                C64::from(FRAC_1_SQRT_2),
                C64::from(0.0),
                C64::from(0.0),
                C64::from(FRAC_1_SQRT_2),
            ]);
        assert_close(&state.state_vector(), &expected);
        let kets = state.as_kets();
        assert_eq!(kets.0.len(), 2);
        assert_eq!(kets.0[0].bits, vec![false, false]);
        assert_eq!(kets.0[1].bits, vec![true, true]);
    }

    #[test]
    fn hadamard_arms() {
        let state = StabState::new(1);
        assert!(matches!(
            state.hadamard_update(0),
            Ok(HadamardUpdate::Split { .. }),
        ));

        // S∣+⟩ is not split by a Hadamard
        let mut state = StabState::new(1);
        state.apply_h(0).unwrap().apply_s(0);
        let Ok(HadamardUpdate::Interfere { s, factor })
            = state.hadamard_update(0) else { panic!("expected Interfere") };
        assert_eq!(s, BitVec::from_bools(&[true]));
        assert!((factor - C64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)).norm() < 1e-12);
    }

    #[test]
    fn s_has_order_four() {
        for seed in 0..10 {
            let init = random_state(4, 40, seed);
            let mut state = init.clone();
            (0..4).for_each(|_| { state.apply_s(2); });
            assert_eq!(state, init);
        }
    }

    #[test]
    fn cx_cz_self_inverse() {
        for seed in 0..10 {
            let init = random_state(4, 40, 100 + seed);
            let mut state = init.clone();
            state.apply_cx(1, 3).apply_cx(1, 3);
            assert_eq!(state, init);
            state.apply_cz(0, 2).apply_cz(0, 2);
            assert_eq!(state, init);
        }
    }

    #[test]
    fn hadamard_involution() {
        for seed in 0..20 {
            let init = random_state(4, 60, 200 + seed);
            let mut state = init.clone();
            state.apply_h(seed as usize % 4).unwrap();
            state.apply_h(seed as usize % 4).unwrap();
            assert_close(&state.state_vector(), &init.state_vector());
        }
    }

    #[test]
    fn commuting_gates() {
        for seed in 0..10 {
            let init = random_state(4, 60, 300 + seed);

            let mut lhs = init.clone();
            let mut rhs = init.clone();
            lhs.apply_cz(0, 1).apply_cz(1, 0);
            rhs.apply_cz(1, 0).apply_cz(0, 1);
            assert_eq!(lhs, rhs);

            let mut lhs = init.clone();
            let mut rhs = init.clone();
            lhs.apply_cz(0, 1).apply_cz(2, 3);
            rhs.apply_cz(2, 3).apply_cz(0, 1);
            assert_eq!(lhs, rhs);

            let mut lhs = init.clone();
            let mut rhs = init.clone();
            lhs.apply_cz(0, 1).apply_cz(1, 2);
            rhs.apply_cz(1, 2).apply_cz(0, 1);
            assert_eq!(lhs, rhs);

            let mut lhs = init.clone();
            let mut rhs = init.clone();
            lhs.apply_s(1).apply_cz(1, 3);
            rhs.apply_cz(1, 3).apply_s(1);
            assert_eq!(lhs, rhs);

            let mut lhs = init.clone();
            let mut rhs = init.clone();
            lhs.apply_cx(1, 0).apply_cx(2, 0);
            rhs.apply_cx(2, 0).apply_cx(1, 0);
            assert_eq!(lhs, rhs);
            assert_close(&lhs.state_vector(), &rhs.state_vector());
        }
    }

    #[test]
    fn pauli_compositions() {
        let init = random_state(3, 40, 400);
        for k in 0..3 {
            let mut via_gates = init.clone();
            let mut reference = Dense::from_state(&init);
            Composite::pauli_y(k).apply(&mut via_gates).unwrap();
            reference.apply_pauli_y(k);
            assert_close(&via_gates.state_vector(), reference.amps());

            let mut direct = init.clone();
            direct.apply_y(k).unwrap();
            assert_close(&direct.state_vector(), reference.amps());

            let mut x = init.clone();
            x.apply_x(k).unwrap().apply_x(k).unwrap();
            assert_close(&x.state_vector(), &init.state_vector());
        }
    }

    #[test]
    fn matches_dense_simulation() {
        for n in 1..=5 {
            for seed in 0..8 {
                let mut rng = StdRng::seed_from_u64(1000 * n as u64 + seed);
                let mut state = StabState::new(n);
                let mut dense = Dense::new(n);
                for gate in Composite::random(n, 150, &mut rng) {
                    state.apply_gate(gate).unwrap();
                    dense.apply(gate);
                    assert!(
                        state.check_invariants().is_ok(),
                        "invariants broken after {}: {:?}",
                        gate, state.check_invariants(),
                    );
                    assert!(state.b().is_invertible());
                    assert_close(&state.state_vector(), dense.amps());
                }
            }
        }
    }

    #[test]
    fn corrupted_exponent_is_reported() {
        let mut state = StabState::new(1);
        state.apply_h(0).unwrap().apply_s(0);
        state.g = Mod4Vec::zeros(1);
        state.g.add_at(0, 2);
        assert_eq!(
            state.apply_h(0).unwrap_err(),
            ChError::NormViolation { qubit: 0, exponent: 2 },
        );
        assert!(matches!(
            state.check_invariants(),
            Err(ChError::BrokenInvariant(_)),
        ));
    }

    #[test]
    fn broken_symplectic_form_is_reported() {
        let mut state = StabState::new(2);
        state.b.row_xor(0, 1);
        assert_eq!(
            state.check_invariants(),
            Err(ChError::BrokenInvariant("A·Bᵗ ≠ I".to_string())),
        );
    }

    #[test]
    #[should_panic]
    fn out_of_range_qubit_panics() {
        StabState::new(2).apply_s(2);
    }

    #[test]
    #[should_panic]
    fn repeated_qubit_panics() {
        StabState::new(2).apply_cx(1, 1);
    }

    struct GateLog {
        lines: Mutex<Vec<(ThreadId, String)>>,
    }

    impl log::Log for GateLog {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.target() == "ch_sim::gate"
        }

        fn log(&self, record: &log::Record) {
            if !self.enabled(record.metadata()) { return; }
            if let Ok(mut lines) = self.lines.lock() {
                lines.push((thread::current().id(), record.args().to_string()));
            }
        }

        fn flush(&self) { }
    }

    static GATE_LOG: GateLog = GateLog { lines: Mutex::new(Vec::new()) };

    #[test]
    fn every_entry_point_traces_its_gates() {
        let _ = log::set_logger(&GATE_LOG);
        log::set_max_level(log::LevelFilter::Trace);

        let mut state = StabState::new(2);
        state.apply_s(0).apply_cx(1, 0).apply_cz(0, 1);
        state.apply_h(0).unwrap();
        state.apply_x(1).unwrap();
        state.apply_gate(Gate::S(1)).unwrap();
        (Gate::H(0) | Gate::CZ(1, 0)).apply(&mut state).unwrap();

        let me = thread::current().id();
        let lines: Vec<String>
            = GATE_LOG.lines.lock().unwrap().iter()
            .filter(|(id, _)| *id == me)
            .map(|(_, line)| line.clone())
            .collect();
        assert_eq!(
            lines,
            vec![
                "applying S(0)",
                "applying CX(1, 0)",
                "applying CZ(0, 1)",
                "applying H(0)",
                "applying H(1)",
                "applying S(1)",
                "applying S(1)",
                "applying H(1)",
                "applying S(1)",
                "applying H(0)",
                "applying CZ(1, 0)",
            ],
        );
    }

    #[test]
    fn display() {
        let mut state = StabState::new(2);
        state.apply_h(0).unwrap();
        let shown = state.to_string();
        assert!(shown.starts_with("ω = +1.0000+0.0000i"));
        assert!(shown.contains("10 | 10 | 00 | 0 1 0"));
    }
}
