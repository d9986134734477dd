//! Exact rational frequencies.
//!
//! Period detection takes the GCD of every component frequency, which only
//! works on exact fractions. Frequencies are therefore stored as a reduced
//! numerator/denominator pair and converted to `f64` only when an arrow
//! actually rotates.

use std::fmt;

use num_integer::Integer;

use crate::error::{EpicycleError, Result};

/// Rotation frequency in cycles per unit time, always in lowest terms
///
/// The denominator is strictly positive; the sign lives in the numerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frequency {
    numer: i64,
    denom: i64,
}

impl Frequency {
    pub const ZERO: Frequency = Frequency { numer: 0, denom: 1 };

    /// Create the reduced fraction `numer / denom`
    pub fn new(numer: i64, denom: i64) -> Result<Self> {
        if denom == 0 {
            return Err(EpicycleError::InvalidState(format!(
                "frequency {}/0 has a zero denominator",
                numer
            )));
        }
        Ok(Self::reduced(numer, denom))
    }

    fn reduced(numer: i64, denom: i64) -> Self {
        let g = numer.gcd(&denom).max(1);
        let sign = denom.signum();
        Self {
            numer: sign * numer / g,
            denom: sign * denom / g,
        }
    }

    pub fn numer(&self) -> i64 {
        self.numer
    }

    pub fn denom(&self) -> i64 {
        self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    /// Lossy conversion, used for rotation updates only
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Largest frequency that both `self` and `other` are integer multiples of
    ///
    /// Computed as gcd(numerators) / lcm(denominators) on the reduced forms.
    pub fn gcd(&self, other: &Frequency) -> Frequency {
        Self::reduced(self.numer.gcd(&other.numer), self.denom.lcm(&other.denom))
    }

    /// GCD over a whole set of frequencies, `None` for an empty set
    pub fn gcd_all<I>(frequencies: I) -> Option<Frequency>
    where
        I: IntoIterator<Item = Frequency>,
    {
        let mut iter = frequencies.into_iter();
        let first = iter.next()?;
        Some(iter.fold(first, |acc, f| acc.gcd(&f)))
    }

    /// Time for one full cycle (`1 / self`), `None` for a zero frequency
    pub fn period(&self) -> Option<f64> {
        if self.is_zero() {
            None
        } else {
            Some((self.denom as f64 / self.numer as f64).abs())
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}
