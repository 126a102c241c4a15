//! Fixed-length bit vectors over GF(2).
//!
//! Addition is XOR and multiplication is AND. A [`BitVector`] is used for
//! matrix rows, target patterns, and operation assignments alike.
//!
//! # Example
//!
//! ```
//! use togglesolve::BitVector;
//!
//! let mut a = BitVector::from_pattern(".##.").unwrap();
//! let b = BitVector::from_pattern("#.#.").unwrap();
//! a.xor_assign(&b);
//! assert_eq!(a.to_string(), "##..");
//! assert_eq!(a.weight(), 2);
//! ```

use core::fmt;

use bitvec::prelude::*;

type Bits = BitVec<usize, Lsb0>;

/// An ordered, fixed-length sequence of bits.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitVector {
    bits: Bits,
}

impl BitVector {
    /// All-zero vector of `len` bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: Bits::repeat(false, len),
        }
    }

    /// Vector with one bit per element of `values`.
    pub fn from_bools(values: &[bool]) -> Self {
        Self {
            bits: values.iter().copied().collect(),
        }
    }

    /// Vector of `len` bits with the listed indices set.
    ///
    /// Indices at or beyond `len` are ignored. A repeated index is set once.
    pub fn from_indices(len: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut v = Self::zeros(len);
        for i in indices {
            if i < len {
                v.bits.set(i, true);
            }
        }
        v
    }

    /// Parse a `.`/`#` pattern (`#` is a set bit).
    ///
    /// Returns `None` if any other character appears.
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        pattern
            .chars()
            .map(|c| match c {
                '#' => Some(true),
                '.' => Some(false),
                _ => None,
            })
            .collect::<Option<Bits>>()
            .map(|bits| Self { bits })
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for the zero-length vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `index`; out-of-range reads are `false`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.bits.get(index).is_some_and(|b| *b)
    }

    /// Set bit `index` to `value`. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        if index < self.len() {
            self.bits.set(index, value);
        }
    }

    /// Flip bit `index`. Out-of-range flips are ignored.
    #[inline]
    pub fn toggle(&mut self, index: usize) {
        if index < self.len() {
            let old = self.bits[index];
            self.bits.set(index, !old);
        }
    }

    /// In-place GF(2) addition.
    ///
    /// Both vectors must have the same length; extra bits of `other` are
    /// not read and missing bits are treated as zero.
    #[inline]
    pub fn xor_assign(&mut self, other: &BitVector) {
        if self.len() == other.len() {
            self.bits ^= other.bits.as_bitslice();
        } else {
            let len = self.len();
            for i in other.bits.iter_ones().take_while(|&i| i < len) {
                let old = self.bits[i];
                self.bits.set(i, !old);
            }
        }
    }

    /// GF(2) inner product: parity of the AND of both vectors.
    pub fn dot(&self, other: &BitVector) -> bool {
        self.bits
            .iter_ones()
            .filter(|&i| other.get(i))
            .count()
            % 2
            == 1
    }

    /// Hamming weight (number of set bits).
    #[inline]
    pub fn weight(&self) -> usize {
        self.bits.count_ones()
    }

    /// True if no bit is set.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.bits.not_any()
    }

    /// Indices of set bits, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Treat the vector as a little-endian binary counter and add one.
    ///
    /// Returns `false` when the counter wraps back to zero.
    pub fn increment(&mut self) -> bool {
        for i in 0..self.len() {
            if self.bits[i] {
                self.bits.set(i, false);
            } else {
                self.bits.set(i, true);
                return true;
            }
        }
        false
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bits.iter() {
            f.write_str(if *b { "#" } else { "." })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector[{self}]")
    }
}
