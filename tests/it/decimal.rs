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

use strcast::{parse_decimal, DecimalNative, DecimalType, ParseResult};

fn parse<T: DecimalNative>(s: &str, precision: u8, scale: u8, round: bool) -> (T, ParseResult) {
    let (value, result) = parse_decimal::<T>(s.as_bytes(), precision, scale, round);
    (value.value(), result)
}

fn test_parse_ok(tests: Vec<(&str, u8, u8, i64)>) {
    for (s, precision, scale, v) in tests {
        assert_eq!(
            parse::<i64>(s, precision, scale, true),
            (v, ParseResult::Success),
            "input {:?} DECIMAL({}, {})",
            s,
            precision,
            scale
        );
    }
}

fn test_parse_err(tests: &[&str]) {
    for s in tests {
        let (_, result) = parse::<i64>(s, 10, 2, true);
        assert_eq!(result, ParseResult::Failure, "input {:?}", s);
    }
}

#[test]
fn test_parse_decimal_plain() {
    test_parse_ok(vec![
        ("0", 5, 2, 0),
        (".", 5, 2, 0),
        ("+.", 5, 2, 0),
        ("1", 5, 2, 100),
        ("12.", 4, 1, 120),
        ("-1.5", 5, 2, -150),
        ("  -0.05  ", 3, 2, -5),
        ("\t123.45\n", 5, 2, 12345),
        ("000123.4", 5, 2, 12340),
        ("999.99", 5, 2, 99999),
        ("-999.99", 5, 2, -99999),
        ("0.00", 2, 2, 0),
        ("-0", 3, 0, 0),
    ]);
    test_parse_err(&["", "   ", "-", "+", "abc", "1.2.3", "1 2", "1,5", "--1", "1.5x", "e5"]);
}

#[test]
fn test_parse_decimal_exponent() {
    test_parse_ok(vec![
        ("1.5e2", 5, 0, 150),
        ("1.5E2", 5, 0, 150),
        ("-12e-1", 3, 1, -12),
        ("1.2345e2", 5, 2, 12345),
        ("0.01e2", 1, 0, 1),
        ("  25e-2  ", 3, 2, 25),
    ]);
    test_parse_err(&["1e", "1e-", "1e+", "1e1.5", "1e2e3"]);
}

#[test]
fn test_parse_decimal_overflow() {
    let tests = vec![
        ("999999", 5, 0),
        ("1000", 5, 2),
        ("-1000", 5, 2),
        ("1.5", 1, 1),
        ("0.10e2", 1, 0),
        ("1e200", 5, 2),
    ];
    for (s, precision, scale) in tests {
        let (_, result) = parse::<i64>(s, precision, scale, true);
        assert_eq!(result, ParseResult::Overflow, "input {:?}", s);
    }
}

#[test]
fn test_parse_decimal_underflow() {
    let tests: Vec<(&str, u8, u8, i64, i64)> = vec![
        // (input, precision, scale, rounded, truncated)
        ("123.456", 6, 2, 12346, 12345),
        ("-123.456", 6, 2, -12346, -12345),
        ("1.005", 5, 2, 101, 100),
        ("-1.005", 5, 2, -101, -100),
        ("0.004", 3, 2, 0, 0),
        ("0.005", 3, 2, 1, 0),
        ("1.23456789", 3, 2, 123, 123),
        ("9.995", 4, 2, 1000, 999),
        // Trailing zeros past the scale are still extra fractional digits.
        ("000123.4500", 5, 2, 12345, 12345),
    ];
    for (s, precision, scale, rounded, truncated) in tests {
        assert_eq!(
            parse::<i64>(s, precision, scale, true),
            (rounded, ParseResult::Underflow),
            "input {:?}",
            s
        );
        assert_eq!(
            parse::<i64>(s, precision, scale, false),
            (truncated, ParseResult::Underflow),
            "input {:?}",
            s
        );
    }

    assert_eq!(parse::<i64>("1e-200", 5, 2, true), (0, ParseResult::Underflow));
}

#[test]
fn test_parse_decimal_rounding_carry() {
    // 99.96 keeps 999 and rounds on the dropped 6, carrying into a fourth
    // integer digit that DECIMAL(3, 1) cannot hold.
    assert_eq!(parse::<i64>("99.96", 3, 1, true), (1000, ParseResult::Overflow));
    assert_eq!(parse::<i64>("99.96", 3, 1, false), (999, ParseResult::Underflow));
    assert_eq!(parse::<i64>("99.94", 3, 1, true), (999, ParseResult::Underflow));
    assert_eq!(parse::<i64>("-99.96", 3, 1, true), (-1000, ParseResult::Overflow));
}

#[test]
fn test_parse_decimal_widths() {
    assert_eq!(parse::<i32>("12345.6789", 9, 4, true), (123456789, ParseResult::Success));
    assert_eq!(
        parse::<i32>("-99999.9999", 9, 4, true),
        (-999999999, ParseResult::Success)
    );
    assert_eq!(parse::<i32>("1", 10, 0, true), (0, ParseResult::Failure));

    assert_eq!(
        parse::<i128>("12345678901234567890.123456789012345678", 38, 18, true),
        (12345678901234567890123456789012345678, ParseResult::Success)
    );
    assert_eq!(
        parse::<i128>("-0.99999999999999999999999999999999999999", 38, 38, true),
        (-(10_i128.pow(38) - 1), ParseResult::Success)
    );
}

#[test]
fn test_decimal_type_parse() {
    let ty = DecimalType::try_new(6, 2).unwrap();
    let (value, result) = ty.parse::<i64>(b"123.456", true);
    assert_eq!(result, ParseResult::Underflow);
    assert_eq!(value.display(ty.scale()).to_string(), "123.46");

    // Rendering a parsed value and parsing it again is stable.
    let rendered = value.display(ty.scale()).to_string();
    assert_eq!(ty.parse::<i64>(rendered.as_bytes(), true), (value, ParseResult::Success));

    let wide = DecimalType::try_new(10, 2).unwrap();
    assert!(!wide.fits::<i32>());
    assert_eq!(wide.parse::<i32>(b"1.5", true).1, ParseResult::Failure);
    assert_eq!(wide.parse::<i64>(b"1.5", true).0.value(), 150);
}
