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

use strcast::{parse_decimal, DecimalValue, ParseResult};

#[test]
fn test_serialize_parse_result() {
    let tests = vec![
        (ParseResult::Success, "\"success\""),
        (ParseResult::Failure, "\"failure\""),
        (ParseResult::Overflow, "\"overflow\""),
        (ParseResult::Underflow, "\"underflow\""),
    ];
    for (result, expected) in tests {
        assert_eq!(serde_json::to_string(&result).unwrap(), expected);
        let back: ParseResult = serde_json::from_str(expected).unwrap();
        assert_eq!(back, result);
    }

    assert!(serde_json::from_str::<ParseResult>("\"Success\"").is_err());
    assert!(serde_json::from_str::<ParseResult>("\"nan\"").is_err());
    assert!(serde_json::from_str::<ParseResult>("0").is_err());
}

#[test]
fn test_serialize_decimal_value() {
    // The raw integer is written as-is, the scale belongs to the type.
    let value = DecimalValue::new(-12346_i64);
    assert_eq!(serde_json::to_string(&value).unwrap(), "-12346");
    let back: DecimalValue<i64> = serde_json::from_str("-12346").unwrap();
    assert_eq!(back, value);

    let parsed = parse_decimal::<i32>(b"123.456", 6, 2, true);
    let json = serde_json::to_string(&parsed).unwrap();
    assert_eq!(json, "[12346,\"underflow\"]");
    let back: (DecimalValue<i32>, ParseResult) = serde_json::from_str(&json).unwrap();
    assert_eq!(back, parsed);

    assert!(serde_json::from_str::<DecimalValue<i32>>("1.5").is_err());
}
