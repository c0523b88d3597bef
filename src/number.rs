// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;

use num_traits::Float;
use num_traits::PrimInt;
use num_traits::Signed;
use serde::de::Deserialize;
use serde::de::Deserializer;
use serde::ser::Serialize;
use serde::ser::Serializer;

use crate::constants::*;
use crate::error::Error;
use crate::error::ParseResult;
use crate::error::Result;

/// Signed integer widths accepted by the integer parser.
///
/// Digits are accumulated as an unsigned `u64` magnitude and converted at the
/// end, so the negative limit `|MIN| = MAX + 1` needs no special casing.
pub trait IntegerNative: PrimInt + Signed + Debug + Display + Default + 'static {
    /// Decimal digits of the widest value, e.g. 3 for `i8`.
    const MAX_DIGITS: usize;
    /// `MAX` as an unsigned magnitude.
    const MAX_MAGNITUDE: u64;

    /// Builds the signed value from a magnitude that is at most
    /// `MAX_MAGNITUDE`, or `MAX_MAGNITUDE + 1` when `negative`.
    fn from_magnitude(magnitude: u64, negative: bool) -> Self;
}

macro_rules! impl_integer_native {
    ($ty:ty, $digits:expr) => {
        impl IntegerNative for $ty {
            const MAX_DIGITS: usize = $digits;
            const MAX_MAGNITUDE: u64 = <$ty>::MAX as u64;

            #[inline]
            fn from_magnitude(magnitude: u64, negative: bool) -> Self {
                let value = magnitude as $ty;
                if negative {
                    value.wrapping_neg()
                } else {
                    value
                }
            }
        }
    };
}

impl_integer_native!(i8, INT8_MAX_DIGITS);
impl_integer_native!(i16, INT16_MAX_DIGITS);
impl_integer_native!(i32, INT32_MAX_DIGITS);
impl_integer_native!(i64, INT64_MAX_DIGITS);

/// Floating-point widths accepted by the float parser.
pub trait FloatNative: Float + Debug + Display + Default + 'static {
    /// Narrows the `f64` accumulator to this width.
    fn from_f64(value: f64) -> Self;

    /// Parses a decimal literal with an exponent from the start of `buf`,
    /// returning the value and the number of bytes consumed.
    fn parse_scientific(buf: &[u8]) -> Option<(Self, usize)>;
}

impl FloatNative for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn parse_scientific(buf: &[u8]) -> Option<(Self, usize)> {
        fast_float2::parse_partial::<f32, _>(buf).ok()
    }
}

impl FloatNative for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn parse_scientific(buf: &[u8]) -> Option<(Self, usize)> {
        fast_float2::parse_partial::<f64, _>(buf).ok()
    }
}

/// Storage widths for fixed precision decimals.
pub trait DecimalNative:
    PrimInt + Signed + itoa::Integer + Debug + Display + Default + Hash + 'static
{
    /// Largest precision whose values all fit, e.g. 18 for `i64`.
    const MAX_PRECISION: u8;
    const TEN: Self;
    const TWO: Self;
    /// `10^0 ..= 10^MAX_PRECISION`.
    const SCALE_MULTIPLIERS: &'static [Self];

    fn from_digit(digit: u8) -> Self;

    /// Returns `10^scale`, or `None` when it does not fit the width.
    #[inline]
    fn scale_multiplier(scale: i32) -> Option<Self> {
        usize::try_from(scale)
            .ok()
            .and_then(|idx| Self::SCALE_MULTIPLIERS.get(idx))
            .copied()
    }
}

macro_rules! impl_decimal_native {
    ($ty:ty, $precision:expr, $table:expr) => {
        impl DecimalNative for $ty {
            const MAX_PRECISION: u8 = $precision;
            const TEN: Self = 10;
            const TWO: Self = 2;
            const SCALE_MULTIPLIERS: &'static [Self] = &$table;

            #[inline]
            fn from_digit(digit: u8) -> Self {
                digit as $ty
            }
        }
    };
}

impl_decimal_native!(i32, MAX_DECIMAL32_PRECISION, SCALE_MULTIPLIERS_32);
impl_decimal_native!(i64, MAX_DECIMAL64_PRECISION, SCALE_MULTIPLIERS_64);
impl_decimal_native!(i128, MAX_DECIMAL128_PRECISION, SCALE_MULTIPLIERS_128);

/// A decimal stored as a scaled integer: `value × 10^-scale`.
///
/// The scale is a parameter of the parse call, not part of the value, so the
/// caller keeps track of it. This mirrors how columnar engines store decimal
/// columns: the type lives on the column, each slot is a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DecimalValue<T> {
    value: T,
}

impl<T: Copy> DecimalValue<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: DecimalNative> DecimalValue<T> {
    /// Renders the value with exactly `scale` fractional digits,
    /// e.g. raw `-5` with scale 2 is `-0.05`.
    pub fn display(&self, scale: u8) -> DecimalDisplay<T> {
        DecimalDisplay {
            value: self.value,
            scale,
        }
    }
}

impl<T> From<T> for DecimalValue<T> {
    fn from(value: T) -> Self {
        Self { value }
    }
}

impl<T: Serialize> Serialize for DecimalValue<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DecimalValue<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(|value| Self { value })
    }
}

/// Display adapter returned by [`DecimalValue::display`].
pub struct DecimalDisplay<T> {
    value: T,
    scale: u8,
}

impl<T: DecimalNative> Display for DecimalDisplay<T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut buffer = itoa::Buffer::new();
        let s = buffer.format(self.value);
        let (sign, digits) = match s.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", s),
        };
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{}{}.{}", sign, int_part, frac_part)
        } else {
            write!(f, "{}0.{:0>width$}", sign, digits, width = scale)
        }
    }
}

/// Target decimal type of a cast: total digits and digits after the dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalType {
    precision: u8,
    scale: u8,
}

impl DecimalType {
    pub fn try_new(precision: u8, scale: u8) -> Result<Self> {
        if precision == 0 || precision > MAX_DECIMAL128_PRECISION || scale > precision {
            return Err(Error::InvalidDecimalType { precision, scale });
        }
        Ok(Self { precision, scale })
    }

    #[inline]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    #[inline]
    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// Whether values of this type fit the storage width `T`.
    #[inline]
    pub fn fits<T: DecimalNative>(&self) -> bool {
        self.precision <= T::MAX_PRECISION
    }

    /// Parses `buf` into this type. A type wider than `T` fails.
    pub fn parse<T: DecimalNative>(&self, buf: &[u8], round: bool) -> (DecimalValue<T>, ParseResult) {
        crate::parser::parse_decimal(buf, self.precision, self.scale, round)
    }
}

impl Display for DecimalType {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "DECIMAL({}, {})", self.precision, self.scale)
    }
}
