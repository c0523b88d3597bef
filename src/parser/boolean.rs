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

use crate::constants::FALSE_TOKEN;
use crate::constants::TRUE_TOKEN;
use crate::error::ParseResult;
use crate::util::is_all_whitespace;
use crate::util::starts_with_ignore_case;

/// Parses `true` or `false`, case insensitive.
/// Leading whitespace fails, trailing whitespace is allowed.
pub(crate) fn parse_bool_internal(buf: &[u8]) -> (bool, ParseResult) {
    if starts_with_ignore_case(buf, TRUE_TOKEN) && is_all_whitespace(&buf[TRUE_TOKEN.len()..]) {
        return (true, ParseResult::Success);
    }
    if starts_with_ignore_case(buf, FALSE_TOKEN) && is_all_whitespace(&buf[FALSE_TOKEN.len()..]) {
        return (false, ParseResult::Success);
    }
    (false, ParseResult::Failure)
}
