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

use std::{collections::HashSet, sync::Arc};

use dashmap::DashMap;
use log::{error, trace};

use crate::{
    interfaces::{MatcherApi, ShortNumberMetadataSource},
    metadata::{CompiledMetadataSource, MetadataUnreadableError, PhoneMetadata, PhoneNumberDesc},
    phonenumber::PhoneNumber,
    regex_based_matcher::RegexBasedMatcher,
};

use super::{
    ShortNumberCost,
    helper_constants::{
        REGION_CODE_FOR_NON_GEO_ENTITY, REGIONS_WHERE_EMERGENCY_NUMBERS_MUST_BE_EXACT,
    },
    helper_functions::{get_national_significant_number, normalize_digits_only},
    short_number_regexps::ShortNumberRegExps,
};

/// Methods for getting information about short phone numbers, such as short
/// codes and emergency numbers.
///
/// The service owns its own metadata cache and is explicitly constructed by
/// whoever composes the application; there is no global instance. After a
/// region's metadata has been loaded once it is shared freely between
/// concurrent callers.
pub struct ShortNumberInfo {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi + Send + Sync>,

    /// Helper class holding the regular expressions needed to clean up raw
    /// dialed input.
    reg_exps: ShortNumberRegExps,

    /// Backing store the per-region records are read from.
    source: Box<dyn ShortNumberMetadataSource>,

    /// The fixed set of region codes the source has data for; everything else
    /// answers "no metadata" without attempting a load.
    supported_regions: HashSet<String>,

    /// Read-through cache from a region code to its metadata, populated with
    /// an atomic insert-if-absent on first use. Entries are never mutated
    /// after insertion.
    region_to_metadata_cache: DashMap<String, Arc<PhoneMetadata>>,

    /// Like the above, for non-geographical entities keyed by their country
    /// calling code.
    non_geo_metadata_cache: DashMap<i32, Arc<PhoneMetadata>>,
}

impl ShortNumberInfo {
    pub fn new() -> Self {
        Self::new_for_source(Box::new(CompiledMetadataSource::new()))
    }

    /// Builds a service over an injected metadata source, e.g. for tests or
    /// for consumers shipping their own metadata.
    pub fn new_for_source(source: Box<dyn ShortNumberMetadataSource>) -> Self {
        let supported_regions = source
            .supported_regions()
            .iter()
            .map(|region_code| (*region_code).to_owned())
            .collect();
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: ShortNumberRegExps::new(),
            source,
            supported_regions,
            region_to_metadata_cache: DashMap::new(),
            non_geo_metadata_cache: DashMap::new(),
        }
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.supported_regions.iter().map(String::as_str)
    }

    /// Returns the metadata for the given region, loading and caching it on
    /// first use. `None` when the region is outside the supported set.
    fn get_metadata_for_region(&self, region_code: &str) -> Option<Arc<PhoneMetadata>> {
        if !self.supported_regions.contains(region_code) {
            return None;
        }
        if let Some(metadata) = self.region_to_metadata_cache.get(region_code) {
            return Some(metadata.value().clone());
        }
        trace!("Loading short number metadata for region {}", region_code);
        let loaded = self
            .region_to_metadata_cache
            .entry(region_code.to_owned())
            .or_try_insert_with(|| self.source.load_region_metadata(region_code).map(Arc::new));
        match loaded {
            Ok(entry) => Some(entry.value().clone()),
            Err(err) => abort_on_unreadable_metadata(err),
        }
    }

    /// Routes the non-geographical sentinel region to the metadata keyed by
    /// country calling code; everything else goes through the region cache.
    fn get_metadata_for_region_or_calling_code(
        &self,
        country_calling_code: i32,
        region_code: &str,
    ) -> Option<Arc<PhoneMetadata>> {
        if region_code != REGION_CODE_FOR_NON_GEO_ENTITY {
            return self.get_metadata_for_region(region_code);
        }
        if !self
            .source
            .region_codes_for_country_calling_code(country_calling_code)
            .contains(&REGION_CODE_FOR_NON_GEO_ENTITY)
        {
            return None;
        }
        if let Some(metadata) = self.non_geo_metadata_cache.get(&country_calling_code) {
            return Some(metadata.value().clone());
        }
        trace!(
            "Loading short number metadata for non-geographical entity {}",
            country_calling_code
        );
        let loaded = self
            .non_geo_metadata_cache
            .entry(country_calling_code)
            .or_try_insert_with(|| {
                self.source
                    .load_non_geographical_metadata(country_calling_code)
                    .map(Arc::new)
            });
        match loaded {
            Ok(entry) => Some(entry.value().clone()),
            Err(err) => abort_on_unreadable_metadata(err),
        }
    }

    /// Helper method to check that the region code of the number matches one
    /// of the regions for its country calling code; every ForRegion operation
    /// applies this guard before consulting metadata.
    fn region_dialing_from_matches_number(
        &self,
        number: &PhoneNumber,
        region_dialing_from: &str,
    ) -> bool {
        self.source
            .region_codes_for_country_calling_code(number.country_code())
            .contains(&region_dialing_from)
    }

    /// Tests a number against a descriptor's possible lengths first and only
    /// then against its pattern, so that a descriptor without a pattern still
    /// degrades to a length check.
    fn matches_possible_number_and_national_number(
        &self,
        number: &str,
        number_desc: Option<&PhoneNumberDesc>,
    ) -> bool {
        let Some(number_desc) = number_desc else {
            return false;
        };
        if !number_desc.possible_length().is_empty()
            && !number_desc
                .possible_length()
                .contains(&(number.len() as i32))
        {
            return false;
        }
        self.matcher_api.match_national_number(number, number_desc, false)
    }

    /// Picks the one region a short number belongs to out of the candidates
    /// sharing its country calling code: the first region, in the source's
    /// stable candidate order, whose short-code pattern accepts the national
    /// significant number. A single candidate is returned unchecked.
    fn get_region_code_for_short_number_from_region_list<'a>(
        &self,
        number: &PhoneNumber,
        region_codes: &[&'a str],
    ) -> Option<&'a str> {
        if region_codes.is_empty() {
            return None;
        }
        if region_codes.len() == 1 {
            return Some(region_codes[0]);
        }
        let national_number = get_national_significant_number(number);
        for &region_code in region_codes {
            if let Some(metadata) =
                self.get_metadata_for_region_or_calling_code(number.country_code(), region_code)
            {
                if self
                    .matches_possible_number_and_national_number(
                        &national_number,
                        metadata.short_code(),
                    )
                {
                    return Some(region_code);
                }
            }
        }
        None
    }

    /// Check whether a short number is a possible number when dialed from the
    /// given region. This provides a more lenient check than
    /// [`Self::is_valid_short_number_for_region`]: only the number's length
    /// is checked against the general lengths for the region.
    pub fn is_possible_short_number_for_region(
        &self,
        short_number: &PhoneNumber,
        region_dialing_from: &str,
    ) -> bool {
        if !self.region_dialing_from_matches_number(short_number, region_dialing_from) {
            return false;
        }
        let Some(metadata) = self.get_metadata_for_region_or_calling_code(
            short_number.country_code(),
            region_dialing_from,
        ) else {
            return false;
        };
        let short_number_length = get_national_significant_number(short_number).len() as i32;
        metadata
            .general_desc()
            .is_some_and(|desc| desc.possible_length().contains(&short_number_length))
    }

    /// Check whether a short number is a possible number. The number is
    /// possible as soon as any region sharing its country calling code
    /// accepts its length.
    pub fn is_possible_short_number(&self, number: &PhoneNumber) -> bool {
        let region_codes = self
            .source
            .region_codes_for_country_calling_code(number.country_code());
        let short_number_length = get_national_significant_number(number).len() as i32;
        for &region_code in region_codes {
            let Some(metadata) =
                self.get_metadata_for_region_or_calling_code(number.country_code(), region_code)
            else {
                continue;
            };
            if metadata
                .general_desc()
                .is_some_and(|desc| desc.possible_length().contains(&short_number_length))
            {
                return true;
            }
        }
        false
    }

    /// Tests whether a short number matches a valid pattern in the given
    /// region. Note that this doesn't verify the number is actually in use,
    /// which is impossible to tell by just looking at the number itself.
    pub fn is_valid_short_number_for_region(
        &self,
        short_number: &PhoneNumber,
        region_dialing_from: &str,
    ) -> bool {
        if !self.region_dialing_from_matches_number(short_number, region_dialing_from) {
            return false;
        }
        let Some(metadata) = self.get_metadata_for_region_or_calling_code(
            short_number.country_code(),
            region_dialing_from,
        ) else {
            return false;
        };
        let short_number = get_national_significant_number(short_number);
        // Validity is the conjunction of the general and the short-code
        // gates, not just the short-code match.
        if !self.matches_possible_number_and_national_number(&short_number, metadata.general_desc())
        {
            return false;
        }
        self.matches_possible_number_and_national_number(&short_number, metadata.short_code())
    }

    /// Tests whether a short number matches a valid pattern in any region
    /// sharing its country calling code.
    pub fn is_valid_short_number(&self, number: &PhoneNumber) -> bool {
        let region_codes = self
            .source
            .region_codes_for_country_calling_code(number.country_code());
        let region_code =
            self.get_region_code_for_short_number_from_region_list(number, region_codes);
        if region_codes.len() > 1 && region_code.is_some() {
            // A match out of several candidate regions was made on the
            // short-code pattern already, so the number is proven valid.
            return true;
        }
        let Some(region_code) = region_code else {
            return false;
        };
        self.is_valid_short_number_for_region(number, region_code)
    }

    /// Gets the expected cost category of a short number when dialed from a
    /// region.
    ///
    /// The descriptors are consulted in strictly decreasing order of expense,
    /// so a number covered by overlapping patterns resolves to the costliest
    /// interpretation. Note this method assumes the number is intended as a
    /// short number; use [`Self::is_valid_short_number_for_region`] first if
    /// that is not known.
    pub fn get_expected_cost_for_region(
        &self,
        short_number: &PhoneNumber,
        region_dialing_from: &str,
    ) -> ShortNumberCost {
        if !self.region_dialing_from_matches_number(short_number, region_dialing_from) {
            return ShortNumberCost::UnknownCost;
        }
        let Some(metadata) = self.get_metadata_for_region_or_calling_code(
            short_number.country_code(),
            region_dialing_from,
        ) else {
            return ShortNumberCost::UnknownCost;
        };

        let short_number = get_national_significant_number(short_number);
        // The possible lengths are not present for a particular sub-type if
        // they match the general description; for this reason the general
        // description is checked first to drop numbers of an unexpected
        // length early.
        if !metadata
            .general_desc()
            .is_some_and(|desc| desc.possible_length().contains(&(short_number.len() as i32)))
        {
            return ShortNumberCost::UnknownCost;
        }

        if self.matches_possible_number_and_national_number(&short_number, metadata.premium_rate())
        {
            return ShortNumberCost::PremiumRate;
        }
        if self.matches_possible_number_and_national_number(&short_number, metadata.standard_rate())
        {
            return ShortNumberCost::StandardRate;
        }
        if self.matches_possible_number_and_national_number(&short_number, metadata.toll_free()) {
            return ShortNumberCost::TollFree;
        }
        if self.is_emergency_number(&short_number, region_dialing_from) {
            // Emergency numbers are implicitly toll-free even when no
            // toll-free descriptor covers them.
            return ShortNumberCost::TollFree;
        }
        ShortNumberCost::UnknownCost
    }

    /// Gets the expected cost of a short number across all regions sharing
    /// its country calling code.
    ///
    /// The fold takes the worst case into account: any premium-rate verdict
    /// wins outright, and once some region renders the cost indeterminate the
    /// number is never reported cheaper than unknown, since it might secretly
    /// be premium-rate there. Toll-free never overrides an earlier verdict.
    pub fn get_expected_cost(&self, number: &PhoneNumber) -> ShortNumberCost {
        let region_codes = self
            .source
            .region_codes_for_country_calling_code(number.country_code());
        if region_codes.is_empty() {
            return ShortNumberCost::UnknownCost;
        }
        if region_codes.len() == 1 {
            return self.get_expected_cost_for_region(number, region_codes[0]);
        }
        let mut cost = ShortNumberCost::TollFree;
        for &region_code in region_codes {
            match self.get_expected_cost_for_region(number, region_code) {
                ShortNumberCost::PremiumRate => return ShortNumberCost::PremiumRate,
                ShortNumberCost::UnknownCost => cost = ShortNumberCost::UnknownCost,
                ShortNumberCost::StandardRate => {
                    if cost != ShortNumberCost::UnknownCost {
                        cost = ShortNumberCost::StandardRate;
                    }
                }
                ShortNumberCost::TollFree => {}
            }
        }
        cost
    }

    /// Returns true if the given number, exactly as dialed, might be used to
    /// connect to an emergency service in the given region.
    ///
    /// This accepts a number with extra digits appended to a recognized
    /// emergency number, except in regions where emergency numbers must be
    /// dialed exactly. `"9116666666"` connects in the US while `"9111"` does
    /// not in Brazil.
    pub fn connects_to_emergency_number(&self, number: &str, region_dialing_from: &str) -> bool {
        self.matches_emergency_number_helper(number, region_dialing_from, true)
    }

    /// Returns true if the given number exactly matches an emergency service
    /// number in the given region.
    pub fn is_emergency_number(&self, number: &str, region_dialing_from: &str) -> bool {
        self.matches_emergency_number_helper(number, region_dialing_from, false)
    }

    fn matches_emergency_number_helper(
        &self,
        number: &str,
        region_dialing_from: &str,
        allow_prefix_match: bool,
    ) -> bool {
        let possible_number = self.reg_exps.extract_possible_number(number);
        if self.reg_exps.starts_with_plus_chars(possible_number) {
            // A leading plus is an international indicator; a number dialed
            // that way never reaches emergency services.
            return false;
        }
        let Some(metadata) = self.get_metadata_for_region(region_dialing_from) else {
            return false;
        };
        let Some(emergency_desc) = metadata.emergency() else {
            return false;
        };

        let normalized_number = normalize_digits_only(possible_number);
        let allow_prefix_match_for_region = allow_prefix_match
            && !REGIONS_WHERE_EMERGENCY_NUMBERS_MUST_BE_EXACT.contains(&region_dialing_from);
        self.matcher_api.match_national_number(
            &normalized_number,
            emergency_desc,
            allow_prefix_match_for_region,
        )
    }

    /// Given a valid short number, determines whether it is carrier-specific,
    /// i.e. the call may not reach the intended destination when dialed from
    /// a device on another carrier's network.
    pub fn is_carrier_specific(&self, number: &PhoneNumber) -> bool {
        let region_codes = self
            .source
            .region_codes_for_country_calling_code(number.country_code());
        let Some(region_code) =
            self.get_region_code_for_short_number_from_region_list(number, region_codes)
        else {
            return false;
        };
        let national_number = get_national_significant_number(number);
        self.get_metadata_for_region_or_calling_code(number.country_code(), region_code)
            .is_some_and(|metadata| {
                self.matches_possible_number_and_national_number(
                    &national_number,
                    metadata.carrier_specific(),
                )
            })
    }

    /// Like [`Self::is_carrier_specific`] but for an explicitly chosen
    /// dialing region rather than the resolved one.
    pub fn is_carrier_specific_for_region(
        &self,
        number: &PhoneNumber,
        region_dialing_from: &str,
    ) -> bool {
        if !self.region_dialing_from_matches_number(number, region_dialing_from) {
            return false;
        }
        let national_number = get_national_significant_number(number);
        self.get_metadata_for_region_or_calling_code(number.country_code(), region_dialing_from)
            .is_some_and(|metadata| {
                self.matches_possible_number_and_national_number(
                    &national_number,
                    metadata.carrier_specific(),
                )
            })
    }

    /// Given a valid short number, determines whether it is an SMS service:
    /// a number to which text messages can be sent, which may or may not
    /// accept voice calls.
    pub fn is_sms_service_for_region(
        &self,
        number: &PhoneNumber,
        region_dialing_from: &str,
    ) -> bool {
        if !self.region_dialing_from_matches_number(number, region_dialing_from) {
            return false;
        }
        let national_number = get_national_significant_number(number);
        self.get_metadata_for_region_or_calling_code(number.country_code(), region_dialing_from)
            .is_some_and(|metadata| {
                self.matches_possible_number_and_national_number(
                    &national_number,
                    metadata.sms_services(),
                )
            })
    }

    /// Gets a valid short number for the given region, when the metadata
    /// carries an example.
    pub fn get_example_short_number(&self, region_code: &str) -> Option<String> {
        let metadata = self.get_metadata_for_region(region_code)?;
        let desc = metadata.short_code()?;
        desc.has_example_number()
            .then(|| desc.example_number().to_owned())
    }

    /// Gets a valid short number of the given cost category for the region.
    /// There is no descriptor behind the unknown cost category, so it never
    /// yields an example.
    pub fn get_example_short_number_for_cost(
        &self,
        region_code: &str,
        cost: ShortNumberCost,
    ) -> Option<String> {
        let metadata = self.get_metadata_for_region(region_code)?;
        let desc = match cost {
            ShortNumberCost::TollFree => metadata.toll_free(),
            ShortNumberCost::StandardRate => metadata.standard_rate(),
            ShortNumberCost::PremiumRate => metadata.premium_rate(),
            ShortNumberCost::UnknownCost => None,
        }?;
        desc.has_example_number()
            .then(|| desc.example_number().to_owned())
    }
}

/// Supported region codes are drawn from a fixed compiled-in set, so an
/// unreadable record behind one of them is a packaging defect; classification
/// never recovers from it.
fn abort_on_unreadable_metadata(err: MetadataUnreadableError) -> ! {
    error!("{}", err);
    panic!("{}", err);
}
