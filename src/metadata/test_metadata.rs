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

//! Hand-built metadata for unit tests. The patterns here are deliberately
//! small and unambiguous so that each test pins down exactly one behavior;
//! they are not real-world data.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::interfaces::ShortNumberMetadataSource;
use crate::shortnumberinfo::helper_constants::REGION_CODE_FOR_NON_GEO_ENTITY;

use super::{MetadataUnreadableError, PhoneMetadata, PhoneNumberDesc};

/// A region that the test source claims to support but cannot load, for
/// exercising the unreadable-metadata failure path.
pub(crate) const UNREADABLE_REGION: &str = "XX";

static SUPPORTED_REGIONS: &[&str] = &["BB", "BR", "DE", "FR", "US", UNREADABLE_REGION];

static COUNTRY_CODE_TO_REGION_CODES: &[(i32, &[&str])] = &[
    (1, &["US", "BB"]),
    (33, &["FR"]),
    (49, &["DE"]),
    (55, &["BR"]),
    (979, &[REGION_CODE_FOR_NON_GEO_ENTITY]),
];

fn desc(pattern: &str, possible_length: &[i32], example_number: &str) -> PhoneNumberDesc {
    let mut desc = PhoneNumberDesc::new();
    desc.set_national_number_pattern(pattern);
    for length in possible_length {
        desc.add_possible_length(*length);
    }
    if !example_number.is_empty() {
        desc.set_example_number(example_number);
    }
    desc
}

fn metadata_us() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("US", 1);
    metadata.set_main_country_for_code(true);
    metadata.set_general_desc(desc("[1-9]\\d{2,5}", &[3, 4, 5, 6], ""));
    metadata.set_short_code(desc("911|24280|33669|46645|74815|91998", &[3, 5], "911"));
    metadata.set_toll_free(desc("24280", &[5], "24280"));
    metadata.set_standard_rate(desc("91998", &[5], "91998"));
    metadata.set_premium_rate(desc("74815", &[5], "74815"));
    metadata.set_carrier_specific(desc("33669", &[5], "33669"));
    metadata.set_sms_services(desc("46645", &[5], "46645"));
    metadata.set_emergency(desc("112|911", &[3], "911"));
    metadata
}

fn metadata_bb() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("BB", 1);
    metadata.set_general_desc(desc("[1-9]\\d{2,4}", &[3, 4, 5], ""));
    metadata.set_short_code(desc("[2-9]11|312\\d{2}|52738", &[3, 5], "211"));
    metadata.set_standard_rate(desc("312\\d{2}", &[5], "31234"));
    metadata.set_premium_rate(desc("52738", &[5], "52738"));
    metadata.set_emergency(desc("911", &[3], "911"));
    metadata
}

fn metadata_fr() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("FR", 33);
    metadata.set_general_desc(desc("[1-8]\\d{2,3}", &[3, 4], ""));
    metadata.set_short_code(desc("1(?:12|0\\d{2})|3\\d{3}", &[3, 4], "1010"));
    metadata.set_toll_free(desc("3030", &[4], "3030"));
    metadata.set_standard_rate(desc("1010", &[4], "1010"));
    metadata.set_premium_rate(desc("3246", &[4], "3246"));
    metadata.set_carrier_specific(desc("202\\d", &[4], "2024"));
    metadata.set_sms_services(desc("63\\d{2}", &[4], "6310"));
    metadata.set_emergency(desc("112", &[3], "112"));
    metadata
}

fn metadata_de() -> PhoneMetadata {
    // Note the short-code pattern accepts "115" while the general possible
    // lengths do not; validity requires both gates to pass.
    let mut metadata = PhoneMetadata::new("DE", 49);
    metadata.set_general_desc(desc("1\\d{3,4}", &[4, 5], ""));
    metadata.set_short_code(desc("115|1\\d{3,4}", &[3, 4, 5], "1234"));
    metadata
}

fn metadata_br() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("BR", 55);
    metadata.set_general_desc(desc("[1-9]\\d{2,4}", &[3, 4, 5], ""));
    metadata.set_short_code(desc("190|40404|911", &[3, 5], "190"));
    metadata.set_toll_free(desc("40404", &[5], "40404"));
    metadata.set_emergency(desc("190|911", &[3], "190"));
    metadata
}

fn metadata_001_premium_services() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new(REGION_CODE_FOR_NON_GEO_ENTITY, 979);
    metadata.set_general_desc(desc("[1-9]\\d{4}", &[5], ""));
    metadata.set_short_code(desc("[1-9]\\d{4}", &[5], "12345"));
    metadata.set_premium_rate(desc("[1-9]\\d{4}", &[5], "12345"));
    metadata
}

/// Source over the tables above that counts region loads, so tests can prove
/// the engine's cache calls the loader at most once per region.
pub(crate) struct TestMetadataSource {
    region_loads: Arc<AtomicUsize>,
}

impl TestMetadataSource {
    pub fn new() -> Self {
        Self {
            region_loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle onto the load counter, valid after the source is boxed away.
    pub fn region_loads_handle(&self) -> Arc<AtomicUsize> {
        self.region_loads.clone()
    }
}

impl ShortNumberMetadataSource for TestMetadataSource {
    fn supported_regions(&self) -> &[&str] {
        SUPPORTED_REGIONS
    }

    fn region_codes_for_country_calling_code(&self, country_calling_code: i32) -> &[&str] {
        COUNTRY_CODE_TO_REGION_CODES
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|found| COUNTRY_CODE_TO_REGION_CODES[found].1)
            .unwrap_or(&[])
    }

    fn load_region_metadata(
        &self,
        region_code: &str,
    ) -> Result<PhoneMetadata, MetadataUnreadableError> {
        self.region_loads.fetch_add(1, Ordering::SeqCst);
        match region_code {
            "BB" => Ok(metadata_bb()),
            "BR" => Ok(metadata_br()),
            "DE" => Ok(metadata_de()),
            "FR" => Ok(metadata_fr()),
            "US" => Ok(metadata_us()),
            _ => Err(MetadataUnreadableError(region_code.to_owned())),
        }
    }

    fn load_non_geographical_metadata(
        &self,
        country_calling_code: i32,
    ) -> Result<PhoneMetadata, MetadataUnreadableError> {
        match country_calling_code {
            979 => Ok(metadata_001_premium_services()),
            _ => Err(MetadataUnreadableError(country_calling_code.to_string())),
        }
    }
}
