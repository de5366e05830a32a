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

/// A phone number as the classifier consumes it: a country calling code plus
/// the national significant number, with the leading-zero bookkeeping needed
/// to render the national number back into digits.
///
/// The classifier never mutates a number; callers construct one and hand out
/// shared references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    country_code: i32,
    national_number: u64,
    italian_leading_zero: bool,
    number_of_leading_zeros: i32,
    raw_input: Option<String>,
}

impl Default for PhoneNumber {
    fn default() -> Self {
        Self {
            country_code: 0,
            national_number: 0,
            italian_leading_zero: false,
            // One leading zero is implied whenever italian_leading_zero is set.
            number_of_leading_zeros: 1,
            raw_input: None,
        }
    }
}

impl PhoneNumber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn set_country_code(&mut self, country_code: i32) {
        self.country_code = country_code;
    }

    /// The national significant number as an integer; significant leading
    /// zeros are carried separately via `italian_leading_zero`.
    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn set_national_number(&mut self, national_number: u64) {
        self.national_number = national_number;
    }

    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }

    pub fn set_italian_leading_zero(&mut self, italian_leading_zero: bool) {
        self.italian_leading_zero = italian_leading_zero;
    }

    pub fn number_of_leading_zeros(&self) -> i32 {
        self.number_of_leading_zeros
    }

    pub fn set_number_of_leading_zeros(&mut self, number_of_leading_zeros: i32) {
        self.number_of_leading_zeros = number_of_leading_zeros;
    }

    pub fn raw_input(&self) -> &str {
        self.raw_input.as_deref().unwrap_or("")
    }

    pub fn has_raw_input(&self) -> bool {
        self.raw_input.is_some()
    }

    pub fn set_raw_input(&mut self, raw_input: String) {
        self.raw_input = Some(raw_input);
    }
}
