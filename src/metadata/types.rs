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

/// One named number-pattern category inside a region's metadata.
///
/// An absent national number pattern means no numbers of this category exist
/// for the region. `possible_length` lists the lengths a number of this
/// category may have; an empty list means the general description's lengths
/// apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumberDesc {
    national_number_pattern: Option<String>,
    possible_length: Vec<i32>,
    example_number: Option<String>,
}

impl PhoneNumberDesc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn national_number_pattern(&self) -> &str {
        self.national_number_pattern.as_deref().unwrap_or("")
    }

    pub fn has_national_number_pattern(&self) -> bool {
        self.national_number_pattern.is_some()
    }

    pub fn set_national_number_pattern(&mut self, pattern: impl Into<String>) {
        self.national_number_pattern = Some(pattern.into());
    }

    pub fn possible_length(&self) -> &[i32] {
        &self.possible_length
    }

    pub fn add_possible_length(&mut self, length: i32) {
        self.possible_length.push(length);
    }

    pub fn example_number(&self) -> &str {
        self.example_number.as_deref().unwrap_or("")
    }

    pub fn has_example_number(&self) -> bool {
        self.example_number.is_some()
    }

    pub fn set_example_number(&mut self, example_number: impl Into<String>) {
        self.example_number = Some(example_number.into());
    }
}

/// The short number metadata for one region, or for one country calling code
/// in the case of non-geographical entities.
///
/// A region is only usable if its general description is present; any other
/// descriptor may be absent and is then treated as matching nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneMetadata {
    id: String,
    country_code: i32,
    main_country_for_code: bool,
    general_desc: Option<PhoneNumberDesc>,
    short_code: Option<PhoneNumberDesc>,
    toll_free: Option<PhoneNumberDesc>,
    standard_rate: Option<PhoneNumberDesc>,
    premium_rate: Option<PhoneNumberDesc>,
    carrier_specific: Option<PhoneNumberDesc>,
    sms_services: Option<PhoneNumberDesc>,
    emergency: Option<PhoneNumberDesc>,
}

impl PhoneMetadata {
    pub fn new(id: impl Into<String>, country_code: i32) -> Self {
        Self {
            id: id.into(),
            country_code,
            main_country_for_code: false,
            general_desc: None,
            short_code: None,
            toll_free: None,
            standard_rate: None,
            premium_rate: None,
            carrier_specific: None,
            sms_services: None,
            emergency: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }

    pub fn set_main_country_for_code(&mut self, main_country_for_code: bool) {
        self.main_country_for_code = main_country_for_code;
    }

    pub fn general_desc(&self) -> Option<&PhoneNumberDesc> {
        self.general_desc.as_ref()
    }

    pub fn set_general_desc(&mut self, desc: PhoneNumberDesc) {
        self.general_desc = Some(desc);
    }

    pub fn short_code(&self) -> Option<&PhoneNumberDesc> {
        self.short_code.as_ref()
    }

    pub fn set_short_code(&mut self, desc: PhoneNumberDesc) {
        self.short_code = Some(desc);
    }

    pub fn toll_free(&self) -> Option<&PhoneNumberDesc> {
        self.toll_free.as_ref()
    }

    pub fn set_toll_free(&mut self, desc: PhoneNumberDesc) {
        self.toll_free = Some(desc);
    }

    pub fn standard_rate(&self) -> Option<&PhoneNumberDesc> {
        self.standard_rate.as_ref()
    }

    pub fn set_standard_rate(&mut self, desc: PhoneNumberDesc) {
        self.standard_rate = Some(desc);
    }

    pub fn premium_rate(&self) -> Option<&PhoneNumberDesc> {
        self.premium_rate.as_ref()
    }

    pub fn set_premium_rate(&mut self, desc: PhoneNumberDesc) {
        self.premium_rate = Some(desc);
    }

    pub fn carrier_specific(&self) -> Option<&PhoneNumberDesc> {
        self.carrier_specific.as_ref()
    }

    pub fn set_carrier_specific(&mut self, desc: PhoneNumberDesc) {
        self.carrier_specific = Some(desc);
    }

    pub fn sms_services(&self) -> Option<&PhoneNumberDesc> {
        self.sms_services.as_ref()
    }

    pub fn set_sms_services(&mut self, desc: PhoneNumberDesc) {
        self.sms_services = Some(desc);
    }

    pub fn emergency(&self) -> Option<&PhoneNumberDesc> {
        self.emergency.as_ref()
    }

    pub fn set_emergency(&mut self, desc: PhoneNumberDesc) {
        self.emergency = Some(desc);
    }
}
