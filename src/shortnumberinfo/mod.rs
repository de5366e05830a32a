mod enums;
mod helper_functions;
mod short_number_info;
mod short_number_regexps;

pub(crate) mod helper_constants;

pub use enums::ShortNumberCost;
pub use short_number_info::ShortNumberInfo;
