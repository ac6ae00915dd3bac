/// Remove every occurrence of `marker` from `name`.
///
/// This is a global removal, not a prefix strip: `SCFooSCBar` loses both
/// markers. Generated variable names depend on this, so keep it that way.
pub fn strip_marker(name: &str, marker: &str) -> String {
    if marker.is_empty() {
        return name.to_string();
    }
    name.replace(marker, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix_marker() {
        assert_eq!(strip_marker("SCNetworkReachability", "SC"), "NetworkReachability");
        assert_eq!(strip_marker("CaptiveNetwork", "SC"), "CaptiveNetwork");
    }

    #[test]
    fn test_strips_every_occurrence() {
        assert_eq!(strip_marker("SCFooSCBar", "SC"), "FooBar");
        assert_eq!(strip_marker("DESCRIPTION", "SC"), "DERIPTION");
    }

    #[test]
    fn test_empty_marker_is_noop() {
        assert_eq!(strip_marker("SCPreferences", ""), "SCPreferences");
    }
}
