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

// Decimal digits of the widest value of each integer width, e.g. i8::MIN is "-128".
// Inputs with fewer digits than this can never overflow.
pub(crate) const INT8_MAX_DIGITS: usize = 3;
pub(crate) const INT16_MAX_DIGITS: usize = 5;
pub(crate) const INT32_MAX_DIGITS: usize = 10;
pub(crate) const INT64_MAX_DIGITS: usize = 19;

// Largest decimal precision each storage width can hold.
pub(crate) const MAX_DECIMAL32_PRECISION: u8 = 9;
pub(crate) const MAX_DECIMAL64_PRECISION: u8 = 18;
pub(crate) const MAX_DECIMAL128_PRECISION: u8 = 38;

// Significant digits kept in the fractional accumulator of the float parser.
pub(crate) const MAX_FRACTION_SIG_FIGS: u32 = 18;

// Special float tokens, matched case-insensitively
pub(crate) const INF_TOKEN: &[u8] = b"inf";
pub(crate) const INFINITY_SUFFIX: &[u8] = b"inity";
pub(crate) const NAN_TOKEN: &[u8] = b"nan";

// Boolean tokens, matched case-insensitively
pub(crate) const TRUE_TOKEN: &[u8] = b"true";
pub(crate) const FALSE_TOKEN: &[u8] = b"false";

macro_rules! scale_multipliers {
    ($name:ident, $ty:ty, $len:expr) => {
        /// Powers of ten `10^0 ..= 10^(len - 1)` representable in the storage width.
        pub(crate) const $name: [$ty; $len] = {
            let mut table = [1 as $ty; $len];
            let mut i = 1;
            while i < $len {
                table[i] = table[i - 1] * 10;
                i += 1;
            }
            table
        };
    };
}

scale_multipliers!(SCALE_MULTIPLIERS_32, i32, 10);
scale_multipliers!(SCALE_MULTIPLIERS_64, i64, 19);
scale_multipliers!(SCALE_MULTIPLIERS_128, i128, 39);
