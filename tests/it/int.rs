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

use strcast::{parse_int, parse_int_base, IntegerNative, ParseResult};

fn test_parse_ok<T: IntegerNative>(tests: Vec<(&str, T)>) {
    for (s, v) in tests {
        assert_eq!(parse_int::<T>(s.as_bytes()), (v, ParseResult::Success), "input {:?}", s);
    }
}

fn test_parse_err<T: IntegerNative>(tests: &[&str]) {
    for s in tests {
        let (_, result) = parse_int::<T>(s.as_bytes());
        assert_eq!(result, ParseResult::Failure, "input {:?}", s);
    }
}

fn test_boundaries<T: IntegerNative + Debug>(min: T, max: T, below: &str, above: &str) {
    let min_s = min.to_string();
    let max_s = max.to_string();
    assert_eq!(parse_int::<T>(min_s.as_bytes()), (min, ParseResult::Success));
    assert_eq!(parse_int::<T>(max_s.as_bytes()), (max, ParseResult::Success));
    assert_eq!(parse_int::<T>(below.as_bytes()), (min, ParseResult::Overflow));
    assert_eq!(parse_int::<T>(above.as_bytes()), (max, ParseResult::Overflow));
}

#[test]
fn test_parse_int_boundaries() {
    test_boundaries::<i8>(i8::MIN, i8::MAX, "-129", "128");
    test_boundaries::<i16>(i16::MIN, i16::MAX, "-32769", "32768");
    test_boundaries::<i32>(i32::MIN, i32::MAX, "-2147483649", "2147483648");
    test_boundaries::<i64>(
        i64::MIN,
        i64::MAX,
        "-9223372036854775809",
        "9223372036854775808",
    );
}

#[test]
fn test_parse_int_far_out_of_range() {
    assert_eq!(
        parse_int::<i32>(b"99999999999999999999999999"),
        (i32::MAX, ParseResult::Overflow)
    );
    assert_eq!(
        parse_int::<i64>(b"-99999999999999999999999999"),
        (i64::MIN, ParseResult::Overflow)
    );
    assert_eq!(parse_int::<i8>(b"+1000"), (i8::MAX, ParseResult::Overflow));
}

#[test]
fn test_parse_int_whitespace() {
    test_parse_ok::<i32>(vec![
        ("42", 42),
        ("  42", 42),
        ("42  ", 42),
        (" \t42\n", 42),
        ("\x0b-7\x0c", -7),
        ("+0", 0),
        ("-0", 0),
        ("007", 7),
    ]);
    test_parse_err::<i32>(&["", "   ", "4 2", "+", "-", " - 1", "1_000", "0x10", "1.5", "١"]);
}

#[test]
fn test_parse_int_base() {
    let tests: Vec<(&str, u32, i64, ParseResult)> = vec![
        ("ff", 16, 255, ParseResult::Success),
        ("FF", 16, 255, ParseResult::Success),
        ("z", 36, 35, ParseResult::Success),
        ("Zz", 36, 35 * 36 + 35, ParseResult::Success),
        ("-777", 8, -511, ParseResult::Success),
        ("  101  ", 2, 5, ParseResult::Success),
        ("7fffffffffffffff", 16, i64::MAX, ParseResult::Success),
        ("-8000000000000000", 16, i64::MIN, ParseResult::Success),
        ("8000000000000000", 16, i64::MAX, ParseResult::Overflow),
        ("-8000000000000001", 16, i64::MIN, ParseResult::Overflow),
        ("19", 8, 1, ParseResult::Success),
        ("9", 8, 0, ParseResult::Failure),
        ("1_0", 2, 0, ParseResult::Failure),
        ("10", 0, 0, ParseResult::Failure),
        ("10", 1, 0, ParseResult::Failure),
        ("10", 37, 0, ParseResult::Failure),
        ("", 10, 0, ParseResult::Failure),
    ];
    for (s, base, v, result) in tests {
        assert_eq!(
            parse_int_base::<i64>(s.as_bytes(), base),
            (v, result),
            "input {:?} base {}",
            s,
            base
        );
    }
}

#[test]
fn test_parse_int_not_null_terminated() {
    let buf = b"12345";
    assert_eq!(parse_int::<i32>(&buf[..2]), (12, ParseResult::Success));
    assert_eq!(parse_int::<i32>(&buf[1..4]), (234, ParseResult::Success));
}
