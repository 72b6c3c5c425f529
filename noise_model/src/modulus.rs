//! Moduli that may exceed the `f64` range.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use serde::de::{self, Deserialize, Deserializer, Visitor};

use crate::error::NoiseError;

const MANTISSA_BITS: u32 = 52;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
const EXPONENT_BIAS: i64 = 1023;

/// A strictly positive real modulus stored as `mantissa * 2^exponent`.
///
/// The mantissa is always normalised to `[1, 2)`, so `log2` and ratios stay
/// exact (up to `f64` rounding of the mantissa) however large the modulus is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modulus {
    mantissa: f64,
    exponent: i64,
}

impl Modulus {
    /// Build a modulus from a finite positive `f64`.
    pub fn from_f64(value: f64) -> Result<Self, NoiseError> {
        if !(value.is_finite() && value > 0.0) {
            return Err(NoiseError::NonPositiveModulus(value));
        }
        Ok(Self::split(value, 0))
    }

    /// Exactly `2^exponent`.
    pub fn pow2(exponent: i64) -> Self {
        Self {
            mantissa: 1.0,
            exponent,
        }
    }

    /// Build a modulus from a positive integer, rounded to 53 significant bits.
    pub fn from_u64(value: u64) -> Result<Self, NoiseError> {
        if value == 0 {
            return Err(NoiseError::NonPositiveModulus(0.0));
        }
        Ok(Self::split(value as f64, 0))
    }

    /// Build a modulus from an arbitrary precision integer. The 64 leading
    /// bits are rounded to an `f64`, so the result can be one ulp away from
    /// the correctly rounded value.
    pub fn from_biguint(value: &BigUint) -> Result<Self, NoiseError> {
        if value.is_zero() {
            return Err(NoiseError::NonPositiveModulus(0.0));
        }
        let bits = value.bits();
        let shift = bits.saturating_sub(u64::BITS as u64);
        let top = (value >> shift)
            .to_u64()
            .ok_or_else(|| NoiseError::InvalidModulus(value.to_string()))?;
        Ok(Self::split(top as f64, shift as i64))
    }

    /// `log2` of the modulus. Never overflows.
    pub fn log2(&self) -> f64 {
        self.exponent as f64 + self.mantissa.log2()
    }

    /// `self / other` as an `f64`.
    ///
    /// A ratio below the smallest subnormal is `0.0`; only a ratio above the
    /// `f64` range is an error.
    pub fn ratio(&self, other: &Modulus) -> Result<f64, NoiseError> {
        self.scale(other, 1.0)
    }

    /// `value * self / other`, with the exponent difference applied last so
    /// that the product does not leave the `f64` range before it has to.
    pub fn scale(&self, other: &Modulus, value: f64) -> Result<f64, NoiseError> {
        let exponent = self
            .exponent
            .saturating_sub(other.exponent)
            .clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        let scaled = libm::ldexp(value * (self.mantissa / other.mantissa), exponent);
        if scaled.is_finite() {
            Ok(scaled)
        } else {
            Err(NoiseError::Overflow("modulus ratio"))
        }
    }

    /// The modulus as an `f64`, if it is representable.
    pub fn to_f64(&self) -> Option<f64> {
        let exponent = i32::try_from(self.exponent).ok()?;
        let value = libm::ldexp(self.mantissa, exponent);
        (value.is_finite() && value > 0.0).then_some(value)
    }

    fn split(value: f64, extra_exponent: i64) -> Self {
        // subnormals carry no implicit leading bit
        let (value, scale) = if value < f64::MIN_POSITIVE {
            (value * 2f64.powi(64), -64)
        } else {
            (value, 0)
        };
        let bits = value.to_bits();
        let exponent = ((bits >> MANTISSA_BITS) & 0x7ff) as i64 - EXPONENT_BIAS;
        let mantissa =
            f64::from_bits((bits & MANTISSA_MASK) | ((EXPONENT_BIAS as u64) << MANTISSA_BITS));
        Self {
            mantissa,
            exponent: exponent + scale + extra_exponent,
        }
    }
}

impl PartialOrd for Modulus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.exponent.cmp(&other.exponent) {
            Ordering::Equal => self.mantissa.partial_cmp(&other.mantissa),
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mantissa == 1.0 {
            write!(f, "2^{}", self.exponent)
        } else if let Some(value) = self.to_f64() {
            write!(f, "{value:e}")
        } else {
            write!(f, "{:e}*2^{}", self.mantissa, self.exponent)
        }
    }
}

/// Parses `2^k`, `m*2^k`, decimal integers of any length and float literals.
impl FromStr for Modulus {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || NoiseError::InvalidModulus(s.to_string());

        if let Some((base, exponent)) = s.split_once('^') {
            let exponent: i64 = exponent.trim().parse().map_err(|_| invalid())?;
            let (factor, base) = match base.split_once('*') {
                Some((factor, base)) => (Self::from_str(factor)?, base),
                None => (Self::pow2(0), base),
            };
            if base.trim() != "2" {
                return Err(invalid());
            }
            return Ok(Self {
                mantissa: factor.mantissa,
                exponent: factor
                    .exponent
                    .checked_add(exponent)
                    .ok_or(NoiseError::Overflow("modulus exponent"))?,
            });
        }

        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            let value = BigUint::parse_bytes(s.as_bytes(), 10).ok_or_else(invalid)?;
            return Self::from_biguint(&value);
        }

        let value: f64 = s.parse().map_err(|_| invalid())?;
        Self::from_f64(value)
    }
}

impl<'de> Deserialize<'de> for Modulus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ModulusVisitor)
    }
}

struct ModulusVisitor;

impl Visitor<'_> for ModulusVisitor {
    type Value = Modulus;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a positive number or a modulus literal such as \"2^825\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Modulus, E> {
        Modulus::from_u64(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Modulus, E> {
        let v = u64::try_from(v)
            .map_err(|_| E::custom(NoiseError::NonPositiveModulus(v as f64)))?;
        self.visit_u64(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Modulus, E> {
        Modulus::from_f64(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Modulus, E> {
        v.parse().map_err(E::custom)
    }
}
