use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Word boundaries inside a CamelCase identifier
    static ref LOWER_UPPER: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
    static ref ACRONYM_WORD: Regex = Regex::new(r"([A-Z])([A-Z][a-z])").unwrap();
}

/// Convert a CamelCase identifier to snake_case.
///
/// An underscore goes between a lowercase letter and a following uppercase
/// one, and between the last two letters of an uppercase run that is followed
/// by a lowercase letter, so `DHCPInfo` becomes `dhcp_info`.
pub fn to_snake_case(name: &str) -> String {
    // The two boundary kinds never share a position, and inserting `_` for
    // one cannot create or hide a match of the other.
    let split = LOWER_UPPER.replace_all(name, "${1}_${2}");
    let split = ACRONYM_WORD.replace_all(&split, "${1}_${2}");
    split.to_lowercase()
}
