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

use crate::constants::INFINITY_SUFFIX;
use crate::constants::INF_TOKEN;
use crate::constants::MAX_FRACTION_SIG_FIGS;
use crate::constants::NAN_TOKEN;
use crate::error::ParseResult;
use crate::number::FloatNative;
use crate::util::is_all_whitespace;
use crate::util::split_sign;
use crate::util::starts_with_ignore_case;

/// Matches `inf` or `infinity` at the start of `buf`, case insensitive,
/// followed only by whitespace.
#[inline]
fn is_infinity(buf: &[u8]) -> bool {
    if !starts_with_ignore_case(buf, INF_TOKEN) {
        return false;
    }
    let rest = &buf[INF_TOKEN.len()..];
    if starts_with_ignore_case(rest, INFINITY_SUFFIX) {
        return is_all_whitespace(&rest[INFINITY_SUFFIX.len()..]);
    }
    is_all_whitespace(rest)
}

/// Matches `nan` at the start of `buf`, case insensitive, followed only by whitespace.
#[inline]
fn is_nan(buf: &[u8]) -> bool {
    starts_with_ignore_case(buf, NAN_TOKEN) && is_all_whitespace(&buf[NAN_TOKEN.len()..])
}

/// Parses a floating-point number. Leading whitespace fails, trailing whitespace
/// is allowed.
///
/// Plain decimals are accumulated in an `f64`: the integer part directly, the
/// fraction as an integer remainder over a power of ten so that up to 18
/// significant digits survive. Literals with an exponent are handed to
/// `fast_float2`, which rounds correctly where the accumulation would not.
pub(crate) fn parse_float_internal<T: FloatNative>(buf: &[u8]) -> (T, ParseResult) {
    let (negative, digits) = split_sign(buf);
    if digits.is_empty() {
        return (T::zero(), ParseResult::Failure);
    }

    if is_infinity(digits) {
        let value = if negative {
            T::neg_infinity()
        } else {
            T::infinity()
        };
        return (value, ParseResult::Success);
    }
    if is_nan(digits) {
        let value = if negative { -T::nan() } else { T::nan() };
        return (value, ParseResult::Success);
    }

    let mut val = 0_f64;
    let mut divide = 1_f64;
    let mut decimal = false;
    let mut remainder = 0_i64;
    // Digits seen so far, excluding leading zeros.
    let mut sig_figs = 0_u32;
    let mut has_exponent = false;
    for (i, &c) in digits.iter().enumerate() {
        match c {
            b'0'..=b'9' => {
                if c != b'0' || sig_figs > 0 {
                    sig_figs += 1;
                }
                let digit = c - b'0';
                if decimal {
                    if sig_figs <= MAX_FRACTION_SIG_FIGS {
                        remainder = remainder * 10 + digit as i64;
                        divide *= 10.0;
                    }
                } else {
                    val = val * 10.0 + digit as f64;
                }
            }
            b'.' if !decimal => decimal = true,
            b'e' | b'E' => {
                has_exponent = true;
                break;
            }
            _ => {
                if i == 0 || !is_all_whitespace(&digits[i..]) {
                    return (T::zero(), ParseResult::Failure);
                }
                break;
            }
        }
    }

    let value = if has_exponent {
        tracing::trace!("delegating scientific notation to fast_float2");
        match T::parse_scientific(digits) {
            Some((value, consumed)) if is_all_whitespace(&digits[consumed..]) => value,
            _ => return (T::zero(), ParseResult::Failure),
        }
    } else {
        T::from_f64(val + remainder as f64 / divide)
    };

    let result = if value.is_infinite() {
        ParseResult::Overflow
    } else {
        ParseResult::Success
    };
    (if negative { -value } else { value }, result)
}
