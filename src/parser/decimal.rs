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

use super::int::parse_int_internal;
use crate::error::ParseResult;
use crate::number::DecimalNative;
use crate::number::DecimalValue;
use crate::util::scale_down_and_round;
use crate::util::split_sign;
use crate::util::trim_whitespace;

/// Parses a decimal into a `DECIMAL(type_precision, type_scale)` stored in `T`.
///
/// Special cases:
/// 1. `''` fails, an empty string does not parse.
/// 2. `'   #   '` is `#`, leading and trailing whitespace is ignored.
/// 3. `'.'` is zero, a single dot parses as zero.
/// 4. `'#.'` is `#`, a trailing dot is ignored.
///
/// On `Overflow` the accumulated, possibly truncated, digits are returned as-is.
/// On `Underflow` the value is truncated or rounded half up to `type_scale`,
/// depending on `round`.
pub(crate) fn parse_decimal_internal<T: DecimalNative>(
    buf: &[u8],
    type_precision: u8,
    type_scale: u8,
    round: bool,
) -> (DecimalValue<T>, ParseResult) {
    if type_precision == 0 || type_precision > T::MAX_PRECISION || type_scale > type_precision {
        return (DecimalValue::default(), ParseResult::Failure);
    }
    let type_precision = type_precision as i32;
    let type_scale = type_scale as i32;

    let (is_negative, mut buf) = split_sign(trim_whitespace(buf));

    // Leading zeros are not counted as digits.
    let mut found_value = false;
    while let [b'0', rest @ ..] = buf {
        found_value = true;
        buf = rest;
    }

    // Zeros right after the dot count as fractional digits only. This tells
    // 0.01e2, which fits DECIMAL(1, 0), apart from 0.10e2, which does not.
    let mut digits_after_dot = 0_i32;
    let mut found_dot = false;
    if let [b'.', rest @ ..] = buf {
        found_dot = true;
        buf = rest;
        while let [b'0', rest @ ..] = buf {
            found_value = true;
            digits_after_dot += 1;
            buf = rest;
        }
    }

    let mut total_digits = 0_i32;
    let mut exponent = 0_i32;
    let mut first_truncated_digit = 0_u8;
    let mut value = T::zero();
    for (i, &c) in buf.iter().enumerate() {
        match c {
            b'0'..=b'9' => {
                found_value = true;
                let digit = c - b'0';
                // Digits past the type precision are dropped so the storage
                // cannot overflow, e.g. 10000000000e-10 into DECIMAL(1, 0).
                // The exponent and the truncated count fix this up below.
                if total_digits < type_precision {
                    value = value * T::TEN + T::from_digit(digit);
                } else if round && total_digits == type_precision {
                    first_truncated_digit = digit;
                }
                total_digits += 1;
                digits_after_dot += found_dot as i32;
            }
            b'.' if !found_dot => found_dot = true,
            b'e' | b'E' => {
                let (exp, result) = parse_int_internal::<i8>(&buf[i + 1..]);
                if result != ParseResult::Success {
                    // An exponent too negative for i8 means far too many
                    // fractional digits, not a huge magnitude.
                    if result == ParseResult::Overflow && exp < 0 {
                        tracing::trace!("decimal exponent below i8 range, reporting underflow");
                        return (DecimalValue::default(), ParseResult::Underflow);
                    }
                    return (DecimalValue::default(), result);
                }
                exponent = exp as i32;
                break;
            }
            _ => return (DecimalValue::default(), ParseResult::Failure),
        }
    }

    // Count truncated digits before the exponent moves the precision.
    let truncated_digits = (total_digits - type_precision).max(0);
    // Precision and scale of the literal itself. The scale of `value` differs
    // when digits were truncated.
    let (precision, scale) = apply_exponent(total_digits, digits_after_dot, exponent, &mut value);

    let mut result = ParseResult::Success;
    if precision - scale > type_precision - type_scale {
        // Too many digits left of the dot.
        result = ParseResult::Overflow;
    } else if scale > type_scale {
        // Too many digits right of the dot.
        result = ParseResult::Underflow;
        let value_scale = scale - truncated_digits;
        let shift = value_scale - type_scale;
        if shift > 0 {
            value = scale_down_and_round(value, shift, round);
        } else {
            // All kept digits are needed, round on the first dropped one.
            debug_assert_eq!(shift, 0);
            if first_truncated_digit >= 5 {
                value = value + T::one();
            }
            if T::scale_multiplier(type_precision) == Some(value) {
                tracing::trace!("decimal rounding carried past the type precision");
                result = ParseResult::Overflow;
            }
        }
    } else if !found_value && !found_dot {
        return (DecimalValue::default(), ParseResult::Failure);
    } else if type_scale > scale {
        // Not enough fractional digits, scale up. This cannot overflow, the
        // integer digits were checked above.
        debug_assert_eq!(truncated_digits, 0);
        if let Some(multiplier) = T::scale_multiplier(type_scale - scale) {
            value = value * multiplier;
        }
    }

    let value = if is_negative { -value } else { value };
    (DecimalValue::new(value), result)
}

/// Applies `exponent` to the digits read so far and returns the precision and
/// scale of the literal.
///
/// `0.1e3` reads as precision 1, scale 1; the exponent moves it to scale 0 and
/// the value to 100, precision 3. `100e-4` only changes the scale, to 4, and the
/// precision follows it up to 4.
fn apply_exponent<T: DecimalNative>(
    total_digits: i32,
    digits_after_dot: i32,
    exponent: i32,
    value: &mut T,
) -> (i32, i32) {
    if exponent > digits_after_dot {
        let shift = exponent - digits_after_dot;
        // A product that does not fit is always classified as overflow, since
        // its precision then exceeds the widest type.
        if let Some(scaled) = T::scale_multiplier(shift).and_then(|m| value.checked_mul(&m)) {
            *value = scaled;
        }
        (total_digits + shift, 0)
    } else {
        let scale = digits_after_dot - exponent;
        // 0.001 has one digit but scale 3, leading zeros were skipped.
        (total_digits.max(scale), scale)
    }
}
