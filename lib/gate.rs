//! Gates whose operations belong to the *n*-qubit Clifford group, and their
//! action on CH-form states.
//!
//! The C-type gates (S, CX, CZ) act on a [`StabState`] purely through its
//! `U_C` part, and can be multiplied onto it from either side; see
//! [`CGate`]. The Hadamard is the only generator that touches `U_H`, and is
//! applied through [`StabState::apply_h`].
//!
//! See also: <https://en.wikipedia.org/wiki/Clifford_gates>

use std::{
    fmt,
    ops::{ Add, AddAssign, BitOr },
};
use itertools::Itertools;
use num_complex::Complex64 as C64;
use rand::Rng;
use crate::{
    chform::StabState,
    error::ChResult,
};

/// The argument of a complex phase factor, limited to integer multiples of π/4.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// 0
    Pi0,
    /// π/4
    Pi1q,
    /// π/2
    Pi1h,
    /// 3π/4
    Pi3q,
    /// π
    Pi,
    /// 5π/4
    Pi5q,
    /// 3π/2
    Pi3h,
    /// 7π/4
    Pi7q,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Pi0 => write!(f, "+1"),
            Self::Pi1q => write!(f, "+e^iπ/4"),
            Self::Pi1h => write!(f, "+i"),
            Self::Pi3q => write!(f, "+e^i3π/4"),
            Self::Pi => write!(f, "-1"),
            Self::Pi5q => write!(f, "+e^i5π/4"),
            Self::Pi3h => write!(f, "-i"),
            Self::Pi7q => write!(f, "+e^i7π/4"),
        }
    }
}

impl Phase {
    /// Convert to the bare multiple of π/4.
    pub fn to_int(&self) -> i8 {
        match self {
            Self::Pi0  => 0,
            Self::Pi1q => 1,
            Self::Pi1h => 2,
            Self::Pi3q => 3,
            Self::Pi   => 4,
            Self::Pi5q => 5,
            Self::Pi3h => 6,
            Self::Pi7q => 7,
        }
    }

    /// Convert from a bare multiple of π/4 (modulo 8).
    pub fn from_int(i: i8) -> Self {
        match i.rem_euclid(8) {
            0 => Self::Pi0,
            1 => Self::Pi1q,
            2 => Self::Pi1h,
            3 => Self::Pi3q,
            4 => Self::Pi,
            5 => Self::Pi5q,
            6 => Self::Pi3h,
            7 => Self::Pi7q,
            _ => unreachable!(),
        }
    }

    /// The phase *i*<sup>`k`</sup>, for `k` taken modulo 4.
    pub fn i_pow(k: u8) -> Self { Self::from_int(2 * (k % 4) as i8) }

    /// The sign (-1)<sup>`b`</sup>.
    pub fn sign(b: bool) -> Self { if b { Self::Pi } else { Self::Pi0 } }

    pub fn as_complex(self) -> C64 {
        use std::f64::consts::FRAC_PI_4 as PI4;
        match self {
            Self::Pi0  => 1.0_f64.into(),
            Self::Pi1q => C64::cis(PI4),
            Self::Pi1h => C64::i(),
            Self::Pi3q => C64::cis(3.0 * PI4),
            Self::Pi   => (-1.0_f64).into(),
            Self::Pi5q => C64::cis(5.0 * PI4),
            Self::Pi3h => -C64::i(),
            Self::Pi7q => C64::cis(7.0 * PI4),
        }
    }
}

impl Add for Phase {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_int(self.to_int() + rhs.to_int())
    }
}

impl AddAssign for Phase {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

/// Kind tag for a [`Gate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GateKind {
    S,
    CX,
    CZ,
    H,
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Structural descriptor of a gate: its kind and the qubits it acts on, in
/// the same order as the gate's fields (target first).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GateData {
    pub kind: GateKind,
    pub qubits: Vec<usize>,
}

/// A single C-type gate, i.e. one that can be absorbed entirely into the
/// `U_C` factor of a CH-form state.
///
/// Two-qubit gates list the target first and the control second.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CGate {
    /// π/2 rotation about Z
    S(usize),
    /// Z-controlled π rotation about X: `CX(target, control)`.
    CX(usize, usize),
    /// Z-controlled π rotation about Z: `CZ(target, control)`.
    CZ(usize, usize),
}

impl CGate {
    /// Compute the CH-form of `ω (G U_C) U_H ∣s⟩` from that of `ω U_C U_H
    /// ∣s⟩`.
    pub fn left_multiply(self, state: &mut StabState) -> &mut StabState {
        match self {
            Self::S(t) => {
                state.c.row_xor_from(t, &state.b, t);
                state.g.add_at(t, 3);
            },
            Self::CX(t, c) => {
                let ca = state.c.row(c).dot(state.a.row(t));
                let gt = state.g[t];
                state.g.add_at(c, gt + 2 * u8::from(ca));
                state.b.row_xor(t, c);
                state.a.row_xor(c, t);
                state.c.row_xor(c, t);
            },
            Self::CZ(t, c) => {
                state.c.row_xor_from(c, &state.b, t);
                state.c.row_xor_from(t, &state.b, c);
            },
        }
        state
    }

    /// Compute the CH-form of `ω (U_C G) U_H ∣s⟩` from that of `ω U_C U_H
    /// ∣s⟩`.
    pub fn right_multiply(self, state: &mut StabState) -> &mut StabState {
        match self {
            Self::S(t) => {
                let at = state.a.col(t);
                state.c.col_xor_from(t, &state.a, t);
                state.g.sub_bits(&at);
            },
            Self::CX(t, c) => {
                state.b.col_xor(c, t);
                state.a.col_xor(t, c);
                state.c.col_xor(c, t);
            },
            Self::CZ(t, c) => {
                let both = &state.a.col(c) & &state.a.col(t);
                state.c.col_xor_from(c, &state.a, t);
                state.c.col_xor_from(t, &state.a, c);
                state.g.add_scaled(&both, 2);
            },
        }
        state
    }
}

impl From<CGate> for Gate {
    fn from(cgate: CGate) -> Self {
        match cgate {
            CGate::S(t) => Self::S(t),
            CGate::CX(t, c) => Self::CX(t, c),
            CGate::CZ(t, c) => Self::CZ(t, c),
        }
    }
}

impl fmt::Display for CGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Gate::from(*self).fmt(f)
    }
}

/// Description of a single Clifford generator.
///
/// Two-qubit gates list the target first and the control second.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// π/2 rotation about Z
    S(usize),
    /// Z-controlled π rotation about X: `CX(target, control)`.
    CX(usize, usize),
    /// Z-controlled π rotation about Z: `CZ(target, control)`.
    CZ(usize, usize),
    /// Hadamard
    H(usize),
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::S(t) => write!(f, "S({})", t),
            Self::CX(t, c) => write!(f, "CX({}, {})", t, c),
            Self::CZ(t, c) => write!(f, "CZ({}, {})", t, c),
            Self::H(t) => write!(f, "H({})", t),
        }
    }
}

impl Gate {
    /// Return the C-type form of `self`, if it has one.
    pub fn as_ctype(&self) -> Option<CGate> {
        match *self {
            Self::S(t) => Some(CGate::S(t)),
            Self::CX(t, c) => Some(CGate::CX(t, c)),
            Self::CZ(t, c) => Some(CGate::CZ(t, c)),
            Self::H(_) => None,
        }
    }

    pub fn kind(&self) -> GateKind {
        match self {
            Self::S(..) => GateKind::S,
            Self::CX(..) => GateKind::CX,
            Self::CZ(..) => GateKind::CZ,
            Self::H(..) => GateKind::H,
        }
    }

    /// Return the indices of all qubits acted on, target first.
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Self::S(t) | Self::H(t) => vec![t],
            Self::CX(t, c) | Self::CZ(t, c) => vec![t, c],
        }
    }

    /// Return the structural descriptor of `self`.
    pub fn data(&self) -> GateData {
        GateData { kind: self.kind(), qubits: self.qubits() }
    }

    /// Return `true` if all qubit indices are less than `n` and two-qubit gate
    /// indices are distinct.
    pub fn is_valid_for(&self, n: usize) -> bool {
        match *self {
            Self::S(k) | Self::H(k) => k < n,
            Self::CX(t, c) | Self::CZ(t, c) => t < n && c < n && t != c,
        }
    }

    /// Apply `self` to a state in place, returning the same state.
    ///
    /// *Panics if any qubit index is out of bounds for `state` or a two-qubit
    /// gate names the same qubit twice.*
    pub fn apply<'a>(&self, state: &'a mut StabState)
        -> ChResult<&'a mut StabState>
    {
        state.apply_gate(*self)
    }

    /// Chain `self` with further gates, producing a flat sequence in which
    /// `self` comes first.
    pub fn then<G>(self, other: G) -> Composite
    where G: Into<Composite>
    {
        let mut comp = Composite::from(self);
        comp.extend(other.into());
        comp
    }

    /// Sample a random generator acting on a register of `n` qubits. Two-qubit
    /// gates are only drawn when `n > 1`.
    ///
    /// *Panics if `n == 0`.*
    pub fn sample<R>(n: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        if n == 0 { panic!("Gate::sample: register must be non-empty"); }
        let kinds: usize = if n > 1 { 4 } else { 2 };
        let a: usize = rng.gen_range(0..n);
        match rng.gen_range(0..kinds) {
            0 => Self::H(a),
            1 => Self::S(a),
            k => {
                // second index drawn from the n - 1 qubits other than `a`
                let mut b: usize = rng.gen_range(0..n - 1);
                if b >= a { b += 1; }
                if k == 2 { Self::CX(a, b) } else { Self::CZ(a, b) }
            },
        }
    }
}

/// An ordered, flat sequence of [`Gate`]s, applied first to last.
///
/// Sequences never nest: appending one `Composite` to another splices its
/// gates in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Composite(Vec<Gate>);

impl IntoIterator for Composite {
    type Item = Gate;
    type IntoIter = <Vec<Gate> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a> IntoIterator for &'a Composite {
    type Item = &'a Gate;
    type IntoIter = <&'a Vec<Gate> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl FromIterator<Gate> for Composite {
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = Gate>
    {
        Self(iter.into_iter().collect())
    }
}

impl From<Gate> for Composite {
    fn from(gate: Gate) -> Self { Self(vec![gate]) }
}

impl From<Vec<Gate>> for Composite {
    fn from(gates: Vec<Gate>) -> Self { Self(gates) }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

impl Composite {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn gates(&self) -> &[Gate] { &self.0 }

    /// Append a single gate to the end of the sequence.
    pub fn append(&mut self, gate: Gate) -> &mut Self {
        self.0.push(gate);
        self
    }

    /// Splice the gates of `other` onto the end of the sequence.
    pub fn extend(&mut self, other: Composite) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    /// Apply every gate in order to `state`, returning the same state.
    ///
    /// Stops at the first failing gate; gates before it remain applied.
    pub fn apply<'a>(&self, state: &'a mut StabState)
        -> ChResult<&'a mut StabState>
    {
        state.apply_circuit(self)
    }

    /// Pauli Z on qubit `k`, as `S S`.
    pub fn pauli_z(k: usize) -> Self {
        Self(vec![Gate::S(k), Gate::S(k)])
    }

    /// Pauli X on qubit `k`, as `H Z H`.
    pub fn pauli_x(k: usize) -> Self {
        Gate::H(k).then(Self::pauli_z(k)).then(Gate::H(k))
    }

    /// Pauli Y on qubit `k`, as `S X S†` (`S† = S S S`).
    pub fn pauli_y(k: usize) -> Self {
        Self(vec![Gate::S(k); 3])
            .then(Self::pauli_x(k))
            .then(Gate::S(k))
    }

    /// Consume `self` and chain further gates onto its end.
    pub fn then<G>(mut self, other: G) -> Self
    where G: Into<Composite>
    {
        self.extend(other.into());
        self
    }

    /// Sample a sequence of `len` random generators on `n` qubits; see
    /// [`Gate::sample`].
    pub fn random<R>(n: usize, len: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        (0..len).map(|_| Gate::sample(n, rng)).collect()
    }
}

impl BitOr<Gate> for Gate {
    type Output = Composite;

    fn bitor(self, rhs: Gate) -> Self::Output { self.then(rhs) }
}

impl BitOr<Composite> for Gate {
    type Output = Composite;

    fn bitor(self, rhs: Composite) -> Self::Output { self.then(rhs) }
}

impl BitOr<Gate> for Composite {
    type Output = Composite;

    fn bitor(self, rhs: Gate) -> Self::Output { self.then(rhs) }
}

impl BitOr<Composite> for Composite {
    type Output = Composite;

    fn bitor(self, rhs: Composite) -> Self::Output { self.then(rhs) }
}

#[cfg(test)]
mod test {
    use rand::{ rngs::StdRng, SeedableRng };
    use super::*;

    #[test]
    fn phase_arithmetic() {
        assert_eq!(Phase::i_pow(1) + Phase::i_pow(3), Phase::Pi0);
        assert_eq!(Phase::i_pow(2), Phase::Pi);
        assert_eq!(Phase::Pi1q + Phase::Pi7q, Phase::Pi0);
        assert_eq!(Phase::Pi3q + Phase::Pi3h, Phase::Pi1q);
        assert_eq!(Phase::sign(true) + Phase::sign(true), Phase::Pi0);
        assert!((Phase::Pi3h.as_complex() + C64::i()).norm() < 1e-15);
    }

    #[test]
    fn display_and_data() {
        assert_eq!(Gate::S(0).to_string(), "S(0)");
        assert_eq!(Gate::CX(1, 0).to_string(), "CX(1, 0)");
        assert_eq!(CGate::CZ(2, 3).to_string(), "CZ(2, 3)");
        assert_eq!(
            Gate::CX(1, 0).data(),
            GateData { kind: GateKind::CX, qubits: vec![1, 0] },
        );
        assert_eq!(Gate::H(4).data().kind.to_string(), "H");
        assert_eq!(Gate::H(2).as_ctype(), None);
        assert_eq!(Gate::S(2).as_ctype(), Some(CGate::S(2)));
    }

    #[test]
    fn composition_is_flat() {
        let a = Gate::H(0) | Gate::CX(1, 0);
        let b = Gate::S(1) | Gate::CZ(0, 1);
        let ab = a.clone() | b.clone();
        assert_eq!(ab.len(), 4);
        assert_eq!(
            ab.gates(),
            &[Gate::H(0), Gate::CX(1, 0), Gate::S(1), Gate::CZ(0, 1)],
        );
        let front = Gate::H(2) | b;
        assert_eq!(front.gates()[0], Gate::H(2));
        assert_eq!(front.len(), 3);
        assert_eq!(ab.to_string(), "[H(0), CX(1, 0), S(1), CZ(0, 1)]");

        let mut seq = Composite::new();
        seq.append(Gate::S(0)).extend(a);
        assert_eq!(seq.len(), 3);
        assert_eq!(Composite::pauli_y(0).len(), 8);
    }

    #[test]
    fn validity() {
        assert!(Gate::CX(0, 1).is_valid_for(2));
        assert!(!Gate::CX(1, 1).is_valid_for(2));
        assert!(!Gate::H(2).is_valid_for(2));
    }

    #[test]
    fn sampled_gates_are_valid() {
        let mut rng = StdRng::seed_from_u64(10546);
        for n in 1..6 {
            let circ = Composite::random(n, 200, &mut rng);
            assert!(circ.into_iter().all(|g| g.is_valid_for(n)));
        }
    }
}
