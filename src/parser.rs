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

//! Entry points for casting text to numbers.
//!
//! Every parser first runs assuming the input has no leading whitespace, which
//! is the common case. If that attempt does not succeed and the input does
//! start with whitespace, it is retried once after skipping it, so padded
//! inputs pay for a second pass but unpadded ones never do.

mod boolean;
mod decimal;
mod float;
mod int;

use self::boolean::parse_bool_internal;
use self::decimal::parse_decimal_internal;
use self::float::parse_float_internal;
use self::int::parse_int_base_internal;
use self::int::parse_int_internal;
use crate::error::ParseResult;
use crate::number::DecimalNative;
use crate::number::DecimalValue;
use crate::number::FloatNative;
use crate::number::IntegerNative;
use crate::util::skip_leading_whitespace;

#[inline]
fn retry_after_whitespace<T>(
    buf: &[u8],
    first: (T, ParseResult),
    parse: impl FnOnce(&[u8]) -> (T, ParseResult),
) -> (T, ParseResult) {
    if first.1 == ParseResult::Success {
        return first;
    }
    let i = skip_leading_whitespace(buf);
    if i == 0 {
        return first;
    }
    tracing::trace!(skipped = i, "retrying parse without leading whitespace");
    parse(&buf[i..])
}

/// Parses a base 10 signed integer.
///
/// Leading and trailing whitespace is accepted. Values out of range are capped
/// at `T::MIN`/`T::MAX` and reported as `Overflow`.
///
/// ```
/// use strcast::{parse_int, ParseResult};
///
/// assert_eq!(parse_int::<i32>(b"  42 "), (42, ParseResult::Success));
/// assert_eq!(parse_int::<i8>(b"300"), (127, ParseResult::Overflow));
/// ```
#[inline]
pub fn parse_int<T: IntegerNative>(buf: &[u8]) -> (T, ParseResult) {
    let first = parse_int_internal::<T>(buf);
    retry_after_whitespace(buf, first, parse_int_internal::<T>)
}

/// Parses a signed integer written in `base`, which must be in `2..=36`.
/// Letters of either case are digits 10 to 35.
///
/// ```
/// use strcast::{parse_int_base, ParseResult};
///
/// assert_eq!(parse_int_base::<i64>(b"ff", 16), (255, ParseResult::Success));
/// assert_eq!(parse_int_base::<i64>(b"z", 36), (35, ParseResult::Success));
/// ```
#[inline]
pub fn parse_int_base<T: IntegerNative>(buf: &[u8], base: u32) -> (T, ParseResult) {
    let first = parse_int_base_internal::<T>(buf, base);
    retry_after_whitespace(buf, first, |buf| parse_int_base_internal(buf, base))
}

/// Parses a floating-point number, including `inf`, `infinity` and `nan`
/// in any case. Magnitudes too large for `T` give a signed infinity and
/// `Overflow`.
#[inline]
pub fn parse_float<T: FloatNative>(buf: &[u8]) -> (T, ParseResult) {
    let first = parse_float_internal::<T>(buf);
    retry_after_whitespace(buf, first, parse_float_internal::<T>)
}

/// Parses `true` or `false`, case insensitive.
#[inline]
pub fn parse_bool(buf: &[u8]) -> (bool, ParseResult) {
    let first = parse_bool_internal(buf);
    retry_after_whitespace(buf, first, parse_bool_internal)
}

/// Parses a decimal into `DECIMAL(type_precision, type_scale)` stored in `T`.
///
/// The returned raw value means `raw × 10^-type_scale`. Too many integer digits
/// is `Overflow`; too many fractional digits is `Underflow` with the value
/// rounded half up (`round`) or truncated. A precision wider than `T` holds
/// fails.
///
/// ```
/// use strcast::{parse_decimal, ParseResult};
///
/// let (value, result) = parse_decimal::<i64>(b"123.456", 6, 2, true);
/// assert_eq!((value.value(), result), (12346, ParseResult::Underflow));
/// ```
#[inline]
pub fn parse_decimal<T: DecimalNative>(
    buf: &[u8],
    type_precision: u8,
    type_scale: u8,
    round: bool,
) -> (DecimalValue<T>, ParseResult) {
    parse_decimal_internal::<T>(buf, type_precision, type_scale, round)
}

/// Text parsing keyed by target type, for callers that dispatch on a type
/// parameter instead of picking a function.
pub trait ParseText: Sized {
    fn parse_text(buf: &[u8]) -> (Self, ParseResult);
}

macro_rules! impl_parse_text {
    ($parser:ident: $($ty:ty),+) => {
        $(
            impl ParseText for $ty {
                #[inline]
                fn parse_text(buf: &[u8]) -> (Self, ParseResult) {
                    $parser::<$ty>(buf)
                }
            }
        )+
    };
}

impl_parse_text!(parse_int: i8, i16, i32, i64);
impl_parse_text!(parse_float: f32, f64);

impl ParseText for bool {
    #[inline]
    fn parse_text(buf: &[u8]) -> (Self, ParseResult) {
        parse_bool(buf)
    }
}
