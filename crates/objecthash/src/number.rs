use std::fmt;

use crate::errors::NormalizationError;

/// Smallest magnitude at which consecutive integers stop being representable as `f64`.
pub const MAX_SAFE_INTEGER: u64 = 1 << 53;

/// A finite double, the single numeric form of the value model.
///
/// Integer constructors narrow explicitly. Magnitudes at or above
/// [`MAX_SAFE_INTEGER`] round to the nearest double, so distinct large integers
/// may become the same `Number`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Number(f64);

impl Number {
    /// Wraps `value`, or returns `None` for NaN and infinities.
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    /// Narrows a signed integer (lossy above 2^53).
    pub fn from_i64(value: i64) -> Self {
        Self(value as f64)
    }

    /// Narrows an unsigned integer (lossy above 2^53).
    pub fn from_u64(value: u64) -> Self {
        Self(value as f64)
    }

    /// Narrows a 128-bit signed integer (lossy above 2^53).
    pub fn from_i128(value: i128) -> Self {
        Self(value as f64)
    }

    /// Narrows a 128-bit unsigned integer (lossy above 2^53).
    pub fn from_u128(value: u128) -> Self {
        Self(value as f64)
    }

    /// The wrapped double.
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Canonical text hashed for this number.
    ///
    /// Zero of either sign is `+0:`. Anything else is a sign character, the binary
    /// exponent `e` in decimal, `:`, then the binary digits of the mantissa `m`,
    /// where `|x| = m * 2^e` and `0.5 < m <= 1`:
    ///
    /// ```rust
    /// use objecthash::Number;
    ///
    /// assert_eq!(Number::from_i64(1).canonical(), "+0:1");
    /// assert_eq!(Number::new(1.5).unwrap().canonical(), "+1:011");
    /// assert_eq!(Number::new(-0.0).unwrap().canonical(), "+0:");
    /// ```
    pub fn canonical(self) -> String {
        canonical_float(self.0)
    }
}

impl TryFrom<f64> for Number {
    type Error = NormalizationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Number::new(value).ok_or_else(|| NormalizationError::NonFiniteNumber {
            path: "root".to_string(),
        })
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

// Every step below is exact in binary floating point: halving and doubling only
// move the exponent, and subtracting 1 from a value in [1, 2) drops the top bit.
fn canonical_float(value: f64) -> String {
    debug_assert!(value.is_finite());
    if value == 0.0 {
        return "+0:".to_string();
    }

    let mut out = String::with_capacity(64);
    let mut f = value;
    if f < 0.0 {
        out.push('-');
        f = -f;
    } else {
        out.push('+');
    }

    let mut exponent: i32 = 0;
    while f > 1.0 {
        f /= 2.0;
        exponent += 1;
    }
    while f <= 0.5 {
        f *= 2.0;
        exponent -= 1;
    }
    out.push_str(&exponent.to_string());
    out.push(':');

    while f != 0.0 {
        if f >= 1.0 {
            out.push('1');
            f -= 1.0;
        } else {
            out.push('0');
        }
        f *= 2.0;
    }
    out
}
