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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::de;
use serde::de::Deserialize;
use serde::de::Deserializer;
use serde::ser::Serialize;
use serde::ser::Serializer;

/// Outcome of a single parse call.
///
/// Parsers return the status next to the value instead of failing through a
/// `Result`, so generated code can pick its own null or error policy.
/// On `Overflow` and `Underflow` the value returned alongside is still usable:
/// a clamped integer, a signed infinity or a truncated/rounded decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseResult {
    #[default]
    Success,
    /// Malformed or empty input. The returned value must not be used.
    Failure,
    /// Magnitude out of range for the target, or too many integer digits
    /// for a decimal type.
    Overflow,
    /// More fractional digits than the decimal scale allows.
    Underflow,
}

impl ParseResult {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, ParseResult::Failure)
    }

    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, ParseResult::Overflow)
    }

    #[inline]
    pub fn is_underflow(&self) -> bool {
        matches!(self, ParseResult::Underflow)
    }

    /// Strict conversion: only `Success` keeps the value.
    pub fn into_result<T>(self, value: T) -> Result<T> {
        match self {
            ParseResult::Success => Ok(value),
            ParseResult::Failure => Err(Error::InvalidNumber),
            ParseResult::Overflow => Err(Error::Overflow),
            ParseResult::Underflow => Err(Error::Underflow),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ParseResult::Success => "success",
            ParseResult::Failure => "failure",
            ParseResult::Overflow => "overflow",
            ParseResult::Underflow => "underflow",
        }
    }
}

impl Display for ParseResult {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ParseResult {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ParseResult {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ParseResultVisitor;

        impl de::Visitor<'_> for ParseResultVisitor {
            type Value = ParseResult;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("one of success, failure, overflow, underflow")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                match v {
                    "success" => Ok(ParseResult::Success),
                    "failure" => Ok(ParseResult::Failure),
                    "overflow" => Ok(ParseResult::Overflow),
                    "underflow" => Ok(ParseResult::Underflow),
                    _ => Err(E::unknown_variant(
                        v,
                        &["success", "failure", "overflow", "underflow"],
                    )),
                }
            }
        }
        deserializer.deserialize_str(ParseResultVisitor)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidNumber,
    Overflow,
    Underflow,
    InvalidDecimalType { precision: u8, scale: u8 },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidNumber => write!(f, "invalid number"),
            Error::Overflow => write!(f, "number out of range"),
            Error::Underflow => write!(f, "number has too many fractional digits"),
            Error::InvalidDecimalType { precision, scale } => {
                write!(f, "invalid decimal type ({}, {})", precision, scale)
            }
        }
    }
}

impl std::error::Error for Error {}
