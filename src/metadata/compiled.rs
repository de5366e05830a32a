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

use crate::interfaces::ShortNumberMetadataSource;
use crate::shortnumberinfo::helper_constants::REGION_CODE_FOR_NON_GEO_ENTITY;

use super::{MetadataUnreadableError, PhoneMetadata, PhoneNumberDesc};

/// The fixed set of region codes this build has backing data for.
static SUPPORTED_REGIONS: &[&str] = &[
    "AU", "BB", "BR", "CA", "CL", "DE", "FR", "GB", "NI", "US",
];

/// Regions sharing a country calling code, main country first. The order is
/// part of the contract: when several regions share a code, the first region
/// whose short-code pattern accepts a number is picked. Sorted ascending by
/// calling code.
static COUNTRY_CODE_TO_REGION_CODES: &[(i32, &[&str])] = &[
    (1, &["US", "CA", "BB"]),
    (33, &["FR"]),
    (44, &["GB"]),
    (49, &["DE"]),
    (55, &["BR"]),
    (56, &["CL"]),
    (61, &["AU"]),
    (505, &["NI"]),
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
    metadata.set_short_code(desc("[1-9]\\d{2,5}", &[3, 4, 5, 6], "911"));
    metadata.set_toll_free(desc("611|9(?:11|33)", &[3], "611"));
    metadata.set_standard_rate(desc("242\\d{2}", &[5], "24242"));
    metadata.set_premium_rate(desc("24280", &[5], "24280"));
    metadata.set_carrier_specific(desc("336\\d{2}", &[5], "33669"));
    metadata.set_sms_services(desc("44\\d{3}", &[5], "44678"));
    metadata.set_emergency(desc("112|911", &[3], "911"));
    metadata
}

fn metadata_ca() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("CA", 1);
    metadata.set_general_desc(desc("[1-9]\\d{2,5}", &[3, 4, 5, 6], ""));
    metadata.set_short_code(desc("[2-8]11|9(?:11|88)", &[3], "911"));
    metadata.set_toll_free(desc("[2-8]11", &[3], "211"));
    metadata.set_premium_rate(desc("27\\d{3}", &[5], "27373"));
    metadata.set_emergency(desc("112|911|988", &[3], "911"));
    metadata
}

fn metadata_bb() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("BB", 1);
    metadata.set_general_desc(desc("[2-9]\\d{2}", &[3], ""));
    metadata.set_short_code(desc("[2359]11", &[3], "211"));
    metadata.set_emergency(desc("[2359]11", &[3], "211"));
    metadata
}

fn metadata_br() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("BR", 55);
    metadata.set_general_desc(desc("1\\d{2,4}|4\\d{4}", &[3, 4, 5], ""));
    metadata.set_short_code(desc("1(?:12|28|9[0-2])|40404", &[3, 5], "190"));
    metadata.set_toll_free(desc("40404", &[5], "40404"));
    metadata.set_sms_services(desc("40404", &[5], "40404"));
    metadata.set_emergency(desc("1(?:12|28|9[0-2])", &[3], "190"));
    metadata
}

fn metadata_cl() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("CL", 56);
    metadata.set_general_desc(desc("1\\d{2,4}", &[3, 4, 5], ""));
    metadata.set_short_code(desc("1(?:213|3[1-3]|4[0-4])", &[3, 4], "131"));
    metadata.set_emergency(desc("13[1-3]", &[3], "131"));
    metadata
}

fn metadata_ni() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("NI", 505);
    metadata.set_general_desc(desc("1\\d{2,3}", &[3, 4], ""));
    metadata.set_short_code(desc("1(?:1[58]|2[08])", &[3], "118"));
    metadata.set_emergency(desc("1(?:1[58]|2[08])", &[3], "118"));
    metadata
}

fn metadata_de() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("DE", 49);
    metadata.set_general_desc(desc("1\\d{2,5}", &[3, 4, 5, 6], ""));
    metadata.set_short_code(desc("11(?:[025]|6\\d{3})", &[3, 6], "115"));
    metadata.set_toll_free(desc("116\\d{3}", &[6], "116116"));
    metadata.set_emergency(desc("11[02]", &[3], "110"));
    metadata
}

fn metadata_fr() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("FR", 33);
    metadata.set_general_desc(desc("[1-8]\\d{1,5}", &[2, 3, 4, 5, 6], ""));
    metadata.set_short_code(desc("1(?:0\\d{2}|1[02459]|[578])|3\\d{3}", &[2, 3, 4], "1010"));
    metadata.set_standard_rate(desc("10(?:10|23)", &[4], "1010"));
    metadata.set_premium_rate(desc("3\\d{3}", &[4], "3246"));
    metadata.set_carrier_specific(desc("118\\d{3}", &[6], "118712"));
    metadata.set_emergency(desc("1(?:12|[578])", &[2, 3], "112"));
    metadata
}

fn metadata_gb() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("GB", 44);
    metadata.set_general_desc(desc("[1-9]\\d{2,5}", &[3, 4, 5, 6], ""));
    metadata.set_short_code(desc("116\\d{3}|999", &[3, 6], "999"));
    metadata.set_toll_free(desc("116\\d{3}", &[6], "116123"));
    metadata.set_emergency(desc("112|999", &[3], "999"));
    metadata
}

fn metadata_au() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new("AU", 61);
    metadata.set_general_desc(desc("[0-3]\\d{2,4}", &[3, 4, 5], ""));
    metadata.set_short_code(desc("000|1(?:06|25\\d{2})", &[3, 5], "000"));
    metadata.set_emergency(desc("000|112", &[3], "000"));
    metadata
}

/// International premium services sharing calling code 979; there is no
/// single region behind them, so the non-geographic sentinel is used.
fn metadata_001_premium_services() -> PhoneMetadata {
    let mut metadata = PhoneMetadata::new(REGION_CODE_FOR_NON_GEO_ENTITY, 979);
    metadata.set_general_desc(desc("[1-9]\\d{4}", &[5], ""));
    metadata.set_short_code(desc("[1-9]\\d{4}", &[5], "12345"));
    metadata.set_premium_rate(desc("[1-9]\\d{4}", &[5], "12345"));
    metadata
}

/// Metadata source over the compiled-in tables above. Records are built on
/// demand; the engine caches them per region.
pub struct CompiledMetadataSource;

impl CompiledMetadataSource {
    pub fn new() -> Self {
        Self
    }
}

impl ShortNumberMetadataSource for CompiledMetadataSource {
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
        match region_code {
            "AU" => Ok(metadata_au()),
            "BB" => Ok(metadata_bb()),
            "BR" => Ok(metadata_br()),
            "CA" => Ok(metadata_ca()),
            "CL" => Ok(metadata_cl()),
            "DE" => Ok(metadata_de()),
            "FR" => Ok(metadata_fr()),
            "GB" => Ok(metadata_gb()),
            "NI" => Ok(metadata_ni()),
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
