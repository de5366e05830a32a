// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use regex::Regex;

use crate::regex_util::{RegexConsume, RegexFullMatch};

use super::helper_constants::{CAPTURE_UP_TO_SECOND_NUMBER_START, DIGITS, PLUS_CHARS};

/// Helper struct holding the regular expressions needed to clean raw dialed
/// input before emergency matching.
pub(super) struct ShortNumberRegExps {
    /// Regular expression of acceptable characters that may start a phone
    /// number for the purposes of parsing. This allows us to strip away
    /// meaningless prefixes to phone numbers that may be mistakenly given to
    /// us. This consists of digits, the plus symbol and arabic-indic digits.
    /// This corresponds to VALID_START_CHAR in the java version.
    pub valid_start_char_pattern: Regex,

    /// A single trailing character that we want to remove: anything that is
    /// not alpha, numerical or the hash sign (which may signify an extension).
    /// This corresponds to UNWANTED_END_CHAR_PATTERN in the java version.
    pub unwanted_end_char_pattern: Regex,

    /// Regular expression of valid characters before a marker that might
    /// indicate a second number.
    pub capture_up_to_second_number_start_pattern: Regex,

    pub plus_chars_pattern: Regex,
}

impl ShortNumberRegExps {
    pub fn new() -> Self {
        Self {
            valid_start_char_pattern: Regex::new(&format!("[{}{}]", PLUS_CHARS, DIGITS)).unwrap(),
            unwanted_end_char_pattern: Regex::new("[^\\p{N}\\p{L}#]").unwrap(),
            capture_up_to_second_number_start_pattern: Regex::new(
                CAPTURE_UP_TO_SECOND_NUMBER_START,
            )
            .unwrap(),
            plus_chars_pattern: Regex::new(&format!("[{}]+", PLUS_CHARS)).unwrap(),
        }
    }

    /// Extracts the part of `number` that looks like the dialed number: skips
    /// leading decoration up to the first digit or plus sign, trims trailing
    /// non-number characters and cuts off anything that starts a second
    /// number. Returns an empty string when no number-like part exists.
    pub fn extract_possible_number<'a>(&self, number: &'a str) -> &'a str {
        let Some(start) = self.valid_start_char_pattern.find(number) else {
            return "";
        };
        let mut possible_number = &number[start.start()..];

        let mut bytes_to_trim = 0;
        for char in possible_number.chars().rev() {
            if !self
                .unwanted_end_char_pattern
                .full_match(&char.to_string())
            {
                break;
            }
            bytes_to_trim += char.len_utf8();
        }
        possible_number = &possible_number[..possible_number.len() - bytes_to_trim];

        if let Some(captures) = self
            .capture_up_to_second_number_start_pattern
            .captures(possible_number)
        {
            if let Some(up_to_second_number) = captures.get(1) {
                possible_number = up_to_second_number.as_str();
            }
        }
        possible_number
    }

    pub fn starts_with_plus_chars(&self, number: &str) -> bool {
        self.plus_chars_pattern.matches_start(number)
    }
}
