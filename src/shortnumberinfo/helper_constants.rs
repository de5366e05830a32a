pub const PLUS_CHARS: &'static str = "+\u{FF0B}";

pub const DIGITS: &'static str = r"\p{Nd}";

// Regular expression of characters typically used to start a second phone
// number for the purposes of parsing. This allows us to strip off parts of
// the number that are actually the start of another number, such as for:
// (530) 583-6985 x302/x2303 -> the second extension here makes this actually
// two phone numbers, (530) 583-6985 x302 and (530) 583-6985 x2303. We remove
// the second extension so that the first number is parsed correctly. The
// string preceding this is captured.
// This corresponds to SECOND_NUMBER_START in the java version.
pub const CAPTURE_UP_TO_SECOND_NUMBER_START: &'static str = r"(.*)[\\/] *x";

pub const REGION_CODE_FOR_NON_GEO_ENTITY: &'static str = "001";

/// In these regions appending extra digits to an emergency number must not be
/// treated as still reaching emergency services, so prefix matching is never
/// allowed for them. Kept as a fixed membership set apart from the matching
/// logic.
pub const REGIONS_WHERE_EMERGENCY_NUMBERS_MUST_BE_EXACT: &[&str] = &["BR", "CL", "NI"];
