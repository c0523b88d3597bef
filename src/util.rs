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

use crate::number::DecimalNative;

/// Returns true for space, `\t`, `\n`, `\v`, `\f` and `\r`.
///
/// Unlike [`u8::is_ascii_whitespace`], vertical tab counts as whitespace.
#[inline]
pub fn is_whitespace(c: u8) -> bool {
    c == b' ' || matches!(c, b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Returns the position of the first non-whitespace byte in `buf`.
#[inline]
pub fn skip_leading_whitespace(buf: &[u8]) -> usize {
    buf.iter().take_while(|c| is_whitespace(**c)).count()
}

/// Returns true if `buf` only contains whitespace. An empty span qualifies.
#[inline]
pub fn is_all_whitespace(buf: &[u8]) -> bool {
    buf.iter().all(|c| is_whitespace(*c))
}

/// Strips whitespace from both ends of `buf`.
#[inline]
pub fn trim_whitespace(buf: &[u8]) -> &[u8] {
    let start = skip_leading_whitespace(buf);
    let buf = &buf[start..];
    let end = buf.len()
        - buf
            .iter()
            .rev()
            .take_while(|c| is_whitespace(**c))
            .count();
    &buf[..end]
}

/// Splits an optional leading `+` or `-` off `buf`.
#[inline]
pub(crate) fn split_sign(buf: &[u8]) -> (bool, &[u8]) {
    match buf {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, buf),
    }
}

/// Case-insensitive check that `buf` starts with `token`.
#[inline]
pub(crate) fn starts_with_ignore_case(buf: &[u8], token: &[u8]) -> bool {
    buf.len() >= token.len() && buf[..token.len()].eq_ignore_ascii_case(token)
}

/// Divides `value` by `10^delta_scale`, rounding half away from zero when
/// `round` is set and truncating otherwise.
///
/// A divisor wider than the storage type always yields zero, since every
/// stored value is smaller than it.
pub(crate) fn scale_down_and_round<T: DecimalNative>(value: T, delta_scale: i32, round: bool) -> T {
    debug_assert!(delta_scale > 0);
    let Some(divisor) = T::scale_multiplier(delta_scale) else {
        return T::zero();
    };
    let result = value / divisor;
    let remainder = value % divisor;
    if round && remainder.abs() >= divisor / T::TWO {
        if value > T::zero() {
            result + T::one()
        } else {
            result - T::one()
        }
    } else {
        result
    }
}
