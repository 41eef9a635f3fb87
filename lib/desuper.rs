//! Collapse of a two-term superposition back into a single CH-form term.
//!
//! A Hadamard acting on `U_C U_H ∣s⟩` in general produces `U_C U_H (∣t⟩ +
//! i^δ ∣u⟩)` with `t ≠ u`. Following Proposition 4 of
//! [arXiv:1808.00128][ch-form], there is always a C-type circuit `W`, a new
//! Hadamard layer `U_H'`, and a basis vector `s'` such that
//!
//! ```text
//! U_H (∣t⟩ + i^δ ∣u⟩) = ω W U_H' ∣s'⟩
//! ```
//!
//! where `∣ω∣ = √2`. `W` is absorbed into `U_C` by right-multiplication.
//!
//! The construction picks a pivot qubit `q` on which `t` and `u` differ,
//! preferring one outside the Hadamard layer. Conjugating a fan-out of CNOTs
//! out of `q` through `U_H` gives `W` (CX where neither end carries a Hadamard,
//! CZ where only the far end does, reversed CX where both do), after which the
//! two branches differ on `q` alone and the remaining one-qubit state is
//! rewritten as `S^a H^b ∣c⟩`.
//!
//! [ch-form]: https://arxiv.org/abs/1808.00128

use crate::{
    bits::BitVec,
    gate::{ CGate, Phase },
};

/// Result of [`desuperpositionize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Desuperposition {
    /// Phase of the prefactor; the full prefactor is `ω = √2 · phase`.
    pub phase: Phase,
    /// New Hadamard selector.
    pub v: BitVec,
    /// New basis vector.
    pub s: BitVec,
    /// Corrections to right-multiply onto `U_C`, in order.
    ///
    /// The fan-out comes first, one gate per other differing qubit in
    /// ascending index order, with CX and CZ interleaved as the qubits
    /// require. With no Hadamard on the pivot, every fan-out gate uses it as
    /// the control of a CX or one end of a CZ; otherwise they are all CXs onto
    /// the pivot. Either way the fan-out gates commute, so any reordering of
    /// them gives the same state. A trailing `S` on the pivot, if present, is
    /// last.
    pub gates: Vec<CGate>,
}

impl Desuperposition {
    /// The full complex prefactor `ω`, including the √2 norm of `∣t⟩ + i^δ
    /// ∣u⟩`.
    pub fn omega(&self) -> num_complex::Complex64 {
        self.phase.as_complex() * std::f64::consts::SQRT_2
    }
}

/// Select the pivot qubit for a pair of differing basis vectors: the lowest
/// index on which they differ and `v` is unset, otherwise the lowest index on
/// which they differ.
///
/// Returns `None` if `t == u`.
pub fn pivot(t: &BitVec, u: &BitVec, v: &BitVec) -> Option<usize> {
    let d = t ^ u;
    let maybe_q = d.ones().find(|i| !v.get(*i));
    maybe_q.or_else(|| d.ones().next())
}

/// Rewrite `U_H (∣t⟩ + i^δ ∣u⟩)` as `ω W U_H' ∣s'⟩`, where `U_H` is selected
/// by `v`.
///
/// *Panics if `t == u` or the three vectors differ in length.*
pub fn desuperpositionize(t: &BitVec, u: &BitVec, delta: u8, v: &BitVec)
    -> Desuperposition
{
    if t.len() != u.len() || t.len() != v.len() {
        panic!(
            "desuperpositionize: length mismatch (t: {}, u: {}, v: {})",
            t.len(), u.len(), v.len(),
        );
    }
    let Some(q) = pivot(t, u, v) else {
        panic!("desuperpositionize: branches must differ");
    };
    let vq = v.get(q);
    let d = t ^ u;

    let gates_fanout: Vec<CGate>
        = d.ones()
        .filter(|i| *i != q)
        .map(|i| {
            if vq {
                CGate::CX(q, i)
            } else if v.get(i) {
                CGate::CZ(i, q)
            } else {
                CGate::CX(i, q)
            }
        })
        .collect();

    // after the fan-out, the branches agree everywhere except q; keep the one
    // with a 0 there, pulling i^δ out front if it was the second
    let mut delta = delta % 4;
    let mut phase = Phase::Pi0;
    let mut s = if t.get(q) {
        phase += Phase::i_pow(delta);
        delta = (4 - delta) % 4;
        u.clone()
    } else {
        t.clone()
    };

    // H^{v_q} (∣0⟩ + i^δ ∣1⟩) = √2 e^{iθ} S^a H^b ∣c⟩
    let (a, b, c, theta): (bool, bool, bool, Phase)
        = match (vq, delta) {
            (false, k) => (k % 2 == 1, true, k >= 2, Phase::Pi0),
            (true, 0) => (false, false, false, Phase::Pi0),
            (true, 2) => (false, false, true, Phase::Pi0),
            (true, 1) => (true, true, true, Phase::Pi1q),
            (true, 3) => (true, true, false, Phase::Pi7q),
            _ => unreachable!(),
        };
    phase += theta;

    let mut v_new = v.clone();
    v_new.set(q, b);
    s.set(q, c);
    let mut gates = gates_fanout;
    if a { gates.push(CGate::S(q)); }

    log::debug!(
        target: "ch_sim::desuper",
        "split resolved on pivot {} (v_q = {}): {} correction(s), prefactor √2·{}",
        q, u8::from(vq), gates.len(), phase,
    );
    Desuperposition { phase, v: v_new, s, gates }
}
