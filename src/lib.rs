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

//! `strcast` casts text to numbers the way a SQL engine does: byte spans in, a typed value and a parse status out. It is meant to sit under compiled cast expressions, so every path is allocation-free and never panics on input.
//!
//! ## Features
//!
//! - Signed integers of 8, 16, 32 and 64 bits, in base 10 or any base from 2 to 36.
//! - `f32` and `f64`, including `inf`, `infinity` and `nan`. Scientific notation is converted with `fast_float2`.
//! - Case-insensitive booleans.
//! - Fixed precision and scale decimals stored in `i32`, `i64` or `i128`, with rounding or truncation of excess fractional digits.
//!
//! ## Parse status
//!
//! Every parser returns a value together with a [`ParseResult`]:
//!
//! - `Success`: the value is exact.
//! - `Failure`: the input is not a number of the requested shape, the value is meaningless.
//! - `Overflow`: the magnitude does not fit. Integers are capped at `MIN`/`MAX`, floats become a signed infinity, decimals keep their accumulated digits.
//! - `Underflow`: a decimal had more fractional digits than its scale. The value is rounded or truncated.
//!
//! Leading and trailing whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`) is ignored.
//!
//! ## An example
//!
//! ```
//! use strcast::{parse_decimal, parse_int, DecimalType, ParseResult};
//!
//! assert_eq!(parse_int::<i16>(b" -32768"), (i16::MIN, ParseResult::Success));
//! assert_eq!(parse_int::<i16>(b"40000"), (i16::MAX, ParseResult::Overflow));
//!
//! // DECIMAL(5, 2)
//! let (value, result) = parse_decimal::<i64>(b"1.005", 5, 2, true);
//! assert_eq!(result, ParseResult::Underflow);
//! assert_eq!(value.display(2).to_string(), "1.01");
//!
//! let ty = DecimalType::try_new(5, 0).unwrap();
//! let (_, result) = ty.parse::<i64>(b"999999", true);
//! assert_eq!(result, ParseResult::Overflow);
//! ```

#![allow(clippy::uninlined_format_args)]

mod constants;
mod error;
mod number;
mod parser;
mod util;

pub use error::Error;
pub use error::ParseResult;
pub use error::Result;
pub use number::DecimalDisplay;
pub use number::DecimalNative;
pub use number::DecimalType;
pub use number::DecimalValue;
pub use number::FloatNative;
pub use number::IntegerNative;
pub use parser::parse_bool;
pub use parser::parse_decimal;
pub use parser::parse_float;
pub use parser::parse_int;
pub use parser::parse_int_base;
pub use parser::ParseText;
pub use util::is_all_whitespace;
pub use util::is_whitespace;
pub use util::skip_leading_whitespace;
pub use util::trim_whitespace;
