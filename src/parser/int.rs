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

use crate::error::ParseResult;
use crate::number::IntegerNative;
use crate::util::is_all_whitespace;

const MIN_BASE: u32 = 2;
const MAX_BASE: u32 = 36;

/// Parses a base 10 integer. Leading whitespace fails, trailing whitespace is allowed.
///
/// On overflow the min/max value of `T`, matching the sign of the input, is returned.
pub(crate) fn parse_int_internal<T: IntegerNative>(buf: &[u8]) -> (T, ParseResult) {
    let (negative, start) = match buf.first() {
        None => return (T::zero(), ParseResult::Failure),
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        Some(_) => (false, 0),
    };

    // Fast path: too few digits to overflow.
    if buf.len() - start < T::MAX_DIGITS {
        return match parse_int_no_overflow(&buf[start..]) {
            Some(val) => (T::from_magnitude(val, negative), ParseResult::Success),
            None => (T::zero(), ParseResult::Failure),
        };
    }

    let max_val = if negative {
        T::MAX_MAGNITUDE + 1
    } else {
        T::MAX_MAGNITUDE
    };
    let max_div_10 = max_val / 10;
    let max_mod_10 = max_val % 10;

    let mut val = 0_u64;
    for (i, &c) in buf[start..].iter().enumerate() {
        if c.is_ascii_digit() {
            let digit = (c - b'0') as u64;
            // Adding this digit would push past the limit.
            if val > max_div_10 - u64::from(digit > max_mod_10) {
                return (T::from_magnitude(max_val, negative), ParseResult::Overflow);
            }
            val = val * 10 + digit;
        } else {
            // Either the first char was not a digit, or the rest is not all whitespace.
            if i == 0 || !is_all_whitespace(&buf[start + i..]) {
                return (T::zero(), ParseResult::Failure);
            }
            break;
        }
    }
    (T::from_magnitude(val, negative), ParseResult::Success)
}

/// Accumulates unsigned decimal digits that are known not to overflow `u64`.
/// Trailing whitespace is skipped.
#[inline]
fn parse_int_no_overflow(buf: &[u8]) -> Option<u64> {
    // Factor out the first char so a bare sign or a non-digit fails early.
    let (first, rest) = buf.split_first()?;
    if !first.is_ascii_digit() {
        return None;
    }
    let mut val = (first - b'0') as u64;
    for (i, &c) in rest.iter().enumerate() {
        if c.is_ascii_digit() {
            val = val * 10 + (c - b'0') as u64;
        } else if is_all_whitespace(&rest[i..]) {
            return Some(val);
        } else {
            return None;
        }
    }
    Some(val)
}

/// Parses an integer written in `base` (2 to 36), with `a..z` / `A..Z` as
/// digits 10 to 35. Leading whitespace fails, trailing whitespace is allowed.
///
/// A digit that does not belong to `base` ends the number.
pub(crate) fn parse_int_base_internal<T: IntegerNative>(
    buf: &[u8],
    base: u32,
) -> (T, ParseResult) {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return (T::zero(), ParseResult::Failure);
    }
    let (negative, start) = match buf.first() {
        None => return (T::zero(), ParseResult::Failure),
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        Some(_) => (false, 0),
    };

    let base = base as u64;
    let max_val = if negative {
        T::MAX_MAGNITUDE + 1
    } else {
        T::MAX_MAGNITUDE
    };
    let max_div_base = max_val / base;
    let max_mod_base = max_val % base;

    let mut val = 0_u64;
    let mut found_digit = false;
    for (i, &c) in buf[start..].iter().enumerate() {
        let digit = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'z' => c - b'a' + 10,
            b'A'..=b'Z' => c - b'A' + 10,
            _ => {
                if i == 0 || !is_all_whitespace(&buf[start + i..]) {
                    return (T::zero(), ParseResult::Failure);
                }
                break;
            }
        };
        let digit = digit as u64;
        if digit >= base {
            break;
        }
        if val > max_div_base - u64::from(digit > max_mod_base) {
            return (T::from_magnitude(max_val, negative), ParseResult::Overflow);
        }
        val = val * base + digit;
        found_digit = true;
    }
    if !found_digit {
        return (T::zero(), ParseResult::Failure);
    }
    (T::from_magnitude(val, negative), ParseResult::Success)
}
