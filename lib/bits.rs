//! Packed GF(2) vectors and square matrices, plus vectors of integers modulo
//! 4.
//!
//! Bits are packed into `u32` words, with the `k`-th bit living in word `k >>
//! 5` under the mask `PW[k & 31]`. All binary operations require operands of
//! equal length and panic otherwise; a mismatch is always a caller bug.

use std::{
    fmt,
    ops::{ BitAnd, BitXor, BitXorAssign, Index },
};

pub(crate) const PW: [u32; 32] = [ // PW[i] = 2^i
    1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768,
    65536, 131072, 262144, 524288, 1048576, 2097152, 4194304, 8388608, 16777216,
    33554432, 67108864, 134217728, 268435456, 536870912, 1073741824, 2147483648
];

/// A fixed-length vector over GF(2).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitVec {
    n: usize,
    words: Vec<u32>, // size floor(n / 32) + 1; bits past `n` are always zero
}

impl BitVec {
    /// Create the all-zero vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self { n, words: vec![0; (n >> 5) + 1] }
    }

    /// Create the `k`-th standard basis vector of length `n`.
    ///
    /// *Panics if `k >= n`.*
    pub fn unit(n: usize, k: usize) -> Self {
        let mut e = Self::zeros(n);
        e.set(k, true);
        e
    }

    /// Pack a slice of booleans.
    pub fn from_bools(bits: &[bool]) -> Self {
        let mut v = Self::zeros(bits.len());
        bits.iter().enumerate()
            .filter(|(_, b)| **b)
            .for_each(|(k, _)| { v.words[k >> 5] |= PW[k & 31]; });
        v
    }

    pub fn len(&self) -> usize { self.n }

    pub fn is_empty(&self) -> bool { self.n == 0 }

    fn check_index(&self, k: usize) {
        if k >= self.n {
            panic!("BitVec: index {} out of bounds for length {}", k, self.n);
        }
    }

    fn check_len(&self, other: &Self) {
        if self.n != other.n {
            panic!("BitVec: length mismatch ({} vs {})", self.n, other.n);
        }
    }

    /// Return the `k`-th bit.
    pub fn get(&self, k: usize) -> bool {
        self.check_index(k);
        self.words[k >> 5] & PW[k & 31] != 0
    }

    /// Set the `k`-th bit.
    pub fn set(&mut self, k: usize, b: bool) {
        self.check_index(k);
        if b {
            self.words[k >> 5] |= PW[k & 31];
        } else {
            self.words[k >> 5] &= !PW[k & 31];
        }
    }

    /// Flip the `k`-th bit.
    pub fn flip(&mut self, k: usize) {
        self.check_index(k);
        self.words[k >> 5] ^= PW[k & 31];
    }

    /// Elementwise complement, `1 - self`.
    pub fn not(&self) -> Self {
        let mut words: Vec<u32> = self.words.iter().map(|w| !w).collect();
        if let Some(last) = words.last_mut() {
            *last &= PW[self.n & 31] - 1;
        }
        Self { n: self.n, words }
    }

    /// GF(2) inner product: the parity of the elementwise AND.
    pub fn dot(&self, other: &Self) -> bool {
        self.check_len(other);
        self.words.iter().zip(&other.words)
            .map(|(a, b)| (a & b).count_ones())
            .sum::<u32>() % 2 == 1
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Return `true` if no bit is set.
    pub fn is_zero(&self) -> bool { self.words.iter().all(|w| *w == 0) }

    /// Iterate over all bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.n).map(|k| self.words[k >> 5] & PW[k & 31] != 0)
    }

    /// Iterate over the indices of set bits in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().enumerate().filter(|(_, b)| *b).map(|(k, _)| k)
    }
}

impl BitXorAssign<&BitVec> for BitVec {
    fn bitxor_assign(&mut self, rhs: &BitVec) {
        self.check_len(rhs);
        self.words.iter_mut().zip(&rhs.words)
            .for_each(|(a, b)| { *a ^= b; });
    }
}

impl BitXor<&BitVec> for &BitVec {
    type Output = BitVec;

    fn bitxor(self, rhs: &BitVec) -> Self::Output {
        let mut out = self.clone();
        out ^= rhs;
        out
    }
}

impl BitAnd<&BitVec> for &BitVec {
    type Output = BitVec;

    fn bitand(self, rhs: &BitVec) -> Self::Output {
        self.check_len(rhs);
        let words
            = self.words.iter().zip(&rhs.words)
            .map(|(a, b)| a & b)
            .collect();
        BitVec { n: self.n, words }
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|b| write!(f, "{}", u8::from(b)))
    }
}

/// A square `n × n` matrix over GF(2), stored as packed rows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    n: usize,
    rows: Vec<BitVec>,
}

impl BitMatrix {
    /// Create the `n × n` zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self { n, rows: vec![BitVec::zeros(n); n] }
    }

    /// Create the `n × n` identity.
    pub fn identity(n: usize) -> Self {
        Self { n, rows: (0..n).map(|i| BitVec::unit(n, i)).collect() }
    }

    /// Build a matrix from its rows.
    ///
    /// *Panics if the rows do not form a square matrix.*
    pub fn from_rows(rows: Vec<BitVec>) -> Self {
        let n = rows.len();
        if rows.iter().any(|r| r.len() != n) {
            panic!("BitMatrix: rows must all have length {}", n);
        }
        Self { n, rows }
    }

    pub fn row(&self, i: usize) -> &BitVec { &self.rows[i] }

    /// Copy out the `j`-th column.
    pub fn col(&self, j: usize) -> BitVec {
        let mut c = BitVec::zeros(self.n);
        self.rows.iter().enumerate()
            .filter(|(_, r)| r.get(j))
            .for_each(|(i, _)| { c.set(i, true); });
        c
    }

    /// `row[dst] ^= row[src]`.
    pub fn row_xor(&mut self, dst: usize, src: usize) {
        if dst == src {
            self.rows[dst] = BitVec::zeros(self.n);
            return;
        }
        let src_row = self.rows[src].clone();
        self.rows[dst] ^= &src_row;
    }

    /// `self.row[dst] ^= other.row[src]`.
    pub fn row_xor_from(&mut self, dst: usize, other: &Self, src: usize) {
        self.rows[dst] ^= &other.rows[src];
    }

    /// `col[dst] ^= col[src]`.
    pub fn col_xor(&mut self, dst: usize, src: usize) {
        self.rows.iter_mut()
            .for_each(|r| { if r.get(src) { r.flip(dst); } });
    }

    /// `self.col[dst] ^= other.col[src]`.
    pub fn col_xor_from(&mut self, dst: usize, other: &Self, src: usize) {
        self.rows.iter_mut().zip(&other.rows)
            .for_each(|(r, o)| { if o.get(src) { r.flip(dst); } });
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self { n: self.n, rows: (0..self.n).map(|j| self.col(j)).collect() }
    }

    /// Compute `self · otherᵗ`, whose `(i, j)`-th entry is the inner product
    /// of row `i` of `self` with row `j` of `other`.
    pub fn mul_transpose(&self, other: &Self) -> Self {
        let rows
            = self.rows.iter()
            .map(|ri| {
                let bits: Vec<bool>
                    = other.rows.iter().map(|rj| ri.dot(rj)).collect();
                BitVec::from_bools(&bits)
            })
            .collect();
        Self::from_rows(rows)
    }

    pub fn is_symmetric(&self) -> bool { *self == self.transpose() }

    /// Rank over GF(2), by Gaussian elimination on a copy.
    pub fn rank(&self) -> usize {
        let mut rows = self.rows.clone();
        let mut rank: usize = 0;
        for j in 0..self.n {
            let Some(pivot) = (rank..self.n).find(|i| rows[*i].get(j))
                else { continue; };
            rows.swap(rank, pivot);
            let pivot_row = rows[rank].clone();
            rows.iter_mut().enumerate()
                .filter(|(i, r)| *i != rank && r.get(j))
                .for_each(|(_, r)| { *r ^= &pivot_row; });
            rank += 1;
        }
        rank
    }

    pub fn is_invertible(&self) -> bool { self.rank() == self.n }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.rows.iter().enumerate() {
            write!(f, "{}", r)?;
            if i < self.n - 1 { writeln!(f)?; }
        }
        Ok(())
    }
}

/// A fixed-length vector of integers modulo 4, each stored in `0..4`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mod4Vec(Vec<u8>);

impl Mod4Vec {
    pub fn zeros(n: usize) -> Self { Self(vec![0; n]) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// `self[k] += x (mod 4)`.
    pub fn add_at(&mut self, k: usize, x: u8) {
        self.0[k] = (self.0[k] + x % 4) % 4;
    }

    /// `self += scale · bits (mod 4)`, elementwise.
    pub fn add_scaled(&mut self, bits: &BitVec, scale: u8) {
        if bits.len() != self.len() {
            panic!("Mod4Vec: length mismatch ({} vs {})", self.len(), bits.len());
        }
        self.0.iter_mut().zip(bits.iter())
            .filter(|(_, b)| *b)
            .for_each(|(gk, _)| { *gk = (*gk + scale % 4) % 4; });
    }

    /// `self -= bits (mod 4)`, elementwise.
    pub fn sub_bits(&mut self, bits: &BitVec) { self.add_scaled(bits, 3); }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ { self.0.iter().copied() }
}

impl Index<usize> for Mod4Vec {
    type Output = u8;

    fn index(&self, k: usize) -> &Self::Output { &self.0[k] }
}

impl fmt::Display for Mod4Vec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|gk| write!(f, "{}", gk))
    }
}
