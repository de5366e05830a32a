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

use crate::phonenumber::PhoneNumber;

/// Renders the national significant number of `number` as a digit string,
/// including any significant leading zeros.
pub(super) fn get_national_significant_number(number: &PhoneNumber) -> String {
    let mut buf = itoa::Buffer::new();
    let national_number = buf.format(number.national_number());
    if number.italian_leading_zero() && number.number_of_leading_zeros() > 0 {
        let leading_zeros = "0".repeat(number.number_of_leading_zeros() as usize);
        return fast_cat::concat_str!(&leading_zeros, national_number);
    }
    national_number.to_owned()
}

/// Normalizes a string of characters representing a phone number to ASCII
/// digits only. Unicode decimal digits are converted to their ASCII value,
/// everything else is stripped.
pub(super) fn normalize_digits_only(number: &str) -> String {
    let normalized = dec_from_char::normalize_decimals(number);
    normalized.chars().filter(|c| c.is_ascii_digit()).collect()
}
