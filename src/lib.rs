mod shortnumberinfo;
mod interfaces;
mod metadata;
mod phonenumber;
mod regexp_cache;
mod regex_based_matcher;
pub(crate) mod regex_util;


pub use interfaces::ShortNumberMetadataSource;
pub use metadata::{MetadataUnreadableError, PhoneMetadata, PhoneNumberDesc};
pub use phonenumber::PhoneNumber;
pub use shortnumberinfo::{ShortNumberCost, ShortNumberInfo};
