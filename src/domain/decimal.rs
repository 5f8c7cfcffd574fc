//! Unbounded decimal numeric type backed by bigdecimal.
//!
//! Provides canonical parsing from strings, formatting without exponent notation,
//! and division rounded once to an explicit number of significant digits.

use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Lossless decimal numeric type for ledger amounts.
///
/// No digit or magnitude limit: token amounts with 18+ fractional digits pass
/// through unchanged. Serializes to a JSON string in canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(BigDecimal);

impl Decimal {
    /// Create a Decimal from a BigDecimal.
    pub fn new(value: BigDecimal) -> Self {
        Decimal(value)
    }

    /// Parse a Decimal from a string losslessly.
    ///
    /// Plain notation (`"0.25"`) and scientific notation (`"2.5E-1"`) are both accepted.
    ///
    /// # Errors
    /// Returns an error if the string is not a valid decimal number.
    pub fn from_str_canonical(s: &str) -> Result<Self, ParseBigDecimalError> {
        BigDecimal::from_str(s.trim()).map(Decimal)
    }

    /// Format the Decimal as a canonical string (no exponent notation, no trailing zeros).
    pub fn to_canonical_string(&self) -> String {
        if self.0.is_zero() {
            return "0".to_string();
        }
        let (mantissa, scale) = self.0.normalized().as_bigint_and_exponent();
        let sign = if mantissa.sign() == Sign::Minus { "-" } else { "" };
        let digits = mantissa.magnitude().to_string();

        if scale <= 0 {
            let zeros = "0".repeat(scale.unsigned_abs() as usize);
            return format!("{}{}{}", sign, digits, zeros);
        }

        let scale = scale as usize;
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            format!("{}{}.{}", sign, int_part, frac_part)
        } else {
            format!("{}0.{}{}", sign, "0".repeat(scale - digits.len()), digits)
        }
    }

    /// Get the underlying BigDecimal.
    pub fn inner(&self) -> &BigDecimal {
        &self.0
    }

    /// The additive identity (0).
    pub fn zero() -> Self {
        Decimal(BigDecimal::zero())
    }

    /// Returns true if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Round to `digits` significant digits, ties to even.
    ///
    /// Integer digits beyond the limit are replaced with zeros (`12345` to 2
    /// digits is `12000`). A limit of zero is treated as one.
    pub fn round_significant(&self, digits: u32) -> Self {
        if self.0.is_zero() {
            return self.clone();
        }
        let prec = NonZeroU64::new(u64::from(digits.max(1))).unwrap_or(NonZeroU64::MIN);
        Decimal(self.0.with_precision_round(prec, RoundingMode::HalfEven))
    }

    /// Divide by `rhs` and round the exact quotient once to `significant_digits`.
    ///
    /// The precision applies to this call only. Returns `None` when `rhs` is zero.
    pub fn checked_div_with_precision(&self, rhs: &Decimal, significant_digits: u32) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        let digits = significant_digits.max(1);

        let (num, num_scale) = self.0.as_bigint_and_exponent();
        let (den, den_scale) = rhs.0.as_bigint_and_exponent();
        let sign = if num.sign() == den.sign() {
            Sign::Plus
        } else {
            Sign::Minus
        };
        let mut num: BigUint = num.magnitude().clone();
        let mut den: BigUint = den.magnitude().clone();

        // Scale so the integer quotient carries at least two digits past the limit.
        let shift = i64::from(digits) + 2 + digit_count(&den) - digit_count(&num);
        if shift >= 0 {
            num *= pow10(shift);
        } else {
            den *= pow10(-shift);
        }

        let mut quotient = &num / &den;
        let mut scale = num_scale - den_scale + shift;
        if !(&num % &den).is_zero() {
            // Sticky digit: an inexact tail can never look like an exact tie.
            quotient = quotient * 10u32 + 1u32;
            scale += 1;
        }

        let exact_enough = Decimal(BigDecimal::new(BigInt::from_biguint(sign, quotient), scale));
        Some(exact_enough.round_significant(digits))
    }
}

fn digit_count(n: &BigUint) -> i64 {
    n.to_string().len() as i64
}

fn pow10(exp: i64) -> BigUint {
    BigUint::from(10u32).pow(exp.unsigned_abs() as u32)
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl FromStr for Decimal {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_canonical(s)
    }
}

impl From<BigDecimal> for Decimal {
    fn from(value: BigDecimal) -> Self {
        Decimal(value)
    }
}

impl From<Decimal> for BigDecimal {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Decimal::from_str_canonical(&s).map_err(serde::de::Error::custom)
    }
}
