use crate::metadata::{MetadataUnreadableError, PhoneMetadata, PhoneNumberDesc};

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi {
    /// Returns whether the given national number (a string containing only decimal
    /// digits) matches the national number pattern defined in the given
    /// PhoneNumberDesc message.
    fn match_national_number(
        &self,
        number: &str,
        number_desc: &PhoneNumberDesc,
        allow_prefix_match: bool,
    ) -> bool;
}

/// Backing store for per-region short number metadata.
///
/// The engine only ever asks to load regions drawn from `supported_regions`;
/// a load failure for one of those is a packaging defect, reported as
/// [`MetadataUnreadableError`]. Region codes outside the supported set are
/// never passed to the loaders.
///
/// The candidate ordering returned by `region_codes_for_country_calling_code`
/// is load-bearing: when several regions share a calling code, the first
/// region whose short-code pattern accepts a number wins, so the ordering
/// must be stable and reproducible across calls and processes.
pub trait ShortNumberMetadataSource: Send + Sync {
    /// The fixed set of region codes this source has backing data for.
    fn supported_regions(&self) -> &[&str];

    /// Region codes sharing the given country calling code, main country
    /// first. Empty when the calling code is unknown.
    fn region_codes_for_country_calling_code(&self, country_calling_code: i32) -> &[&str];

    fn load_region_metadata(
        &self,
        region_code: &str,
    ) -> Result<PhoneMetadata, MetadataUnreadableError>;

    /// Metadata for a non-geographical entity, keyed by country calling code
    /// since there is no single region to key by.
    fn load_non_geographical_metadata(
        &self,
        country_calling_code: i32,
    ) -> Result<PhoneMetadata, MetadataUnreadableError>;
}
