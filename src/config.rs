use crate::error::{GenError, Result};

/// SystemConfiguration headers that get bindings generated, in script order.
pub const FRAMEWORK_HEADERS: &[&str] = &[
    "CaptiveNetwork",
    "DHCPClientPreferences",
    "SCDynamicStore",
    "SCDynamicStoreCopyDHCPInfo",
    "SCDynamicStoreCopySpecific",
    "SCDynamicStoreKey",
    "SCNetwork",
    "SCNetworkConfiguration",
    "SCNetworkConnection",
    "SCNetworkReachability",
    "SCPreferences",
    "SCPreferencesPath",
    "SCPreferencesSetSpecific",
    "SCSchemaDefinitions",
    "SystemConfiguration",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub names: Vec<String>,
    pub marker: String,
    pub header_extension: String,
    pub binding_extension: String,
    pub header_var_suffix: String,
    pub binding_var_suffix: String,
    pub header_base_var: String,
    pub binding_base_var: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            names: FRAMEWORK_HEADERS.iter().map(|s| s.to_string()).collect(),
            marker: "SC".to_string(),
            header_extension: "h".to_string(),
            binding_extension: "rs".to_string(),
            header_var_suffix: "_HEADER_PATH".to_string(),
            binding_var_suffix: "_BINDING_PATH".to_string(),
            header_base_var: "SC_HEADER_PATH".to_string(),
            binding_base_var: "SC_BINDING_PATH".to_string(),
        }
    }
}

impl Config {
    /// Default literals applied to a different name list.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Reject empty literals; they would produce unusable shell lines.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("marker", &self.marker),
            ("header_extension", &self.header_extension),
            ("binding_extension", &self.binding_extension),
            ("header_var_suffix", &self.header_var_suffix),
            ("binding_var_suffix", &self.binding_var_suffix),
            ("header_base_var", &self.header_base_var),
            ("binding_base_var", &self.binding_base_var),
        ];

        for (field, value) in fields {
            if value.is_empty() {
                return Err(GenError::InvalidConfig(format!("{} must not be empty", field)));
            }
        }

        Ok(())
    }
}
