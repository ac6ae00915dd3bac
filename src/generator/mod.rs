use crate::error::{GenError, Result};
use crate::naming::normalize;
use crate::{Config, Item};
use std::collections::HashMap;

pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Derive every field of one item from its original API name
    pub fn derive_item(&self, original_name: &str) -> Item {
        let config = &self.config;
        let normalized_name = normalize(original_name, &config.marker);
        let upper = normalized_name.to_uppercase();

        Item {
            header_file_name: format!("{}.{}", original_name, config.header_extension),
            binding_file_name: format!("{}.{}", normalized_name, config.binding_extension),
            header_var_name: format!("{}{}", upper, config.header_var_suffix),
            binding_var_name: format!("{}{}", upper, config.binding_var_suffix),
            original_name: original_name.to_string(),
            normalized_name,
        }
    }

    /// Derive items for the configured name list, in order.
    ///
    /// Fails if a name is empty or if two names derive the same shell
    /// variable, since the second assignment would silently win in the
    /// generated script.
    pub fn derive_items(&self) -> Result<Vec<Item>> {
        let mut items = Vec::with_capacity(self.config.names.len());
        // variable name -> original name that first derived it
        let mut seen: HashMap<String, String> = HashMap::new();

        for (index, name) in self.config.names.iter().enumerate() {
            if name.is_empty() {
                return Err(GenError::EmptyName { index });
            }

            let item = self.derive_item(name);
            tracing::debug!(
                "{} -> {} ({}, {})",
                item.original_name,
                item.normalized_name,
                item.header_var_name,
                item.binding_var_name
            );

            for var in [&item.header_var_name, &item.binding_var_name] {
                if let Some(first) = seen.get(var) {
                    return Err(GenError::DuplicateVariable {
                        var: var.clone(),
                        first: first.clone(),
                        second: item.original_name.clone(),
                    });
                }
            }
            seen.insert(item.header_var_name.clone(), item.original_name.clone());
            seen.insert(item.binding_var_name.clone(), item.original_name.clone());

            items.push(item);
        }

        tracing::info!("derived {} items", items.len());
        Ok(items)
    }
}

/// Look up the item derived from `original_name`
pub fn find_item<'a>(items: &'a [Item], original_name: &str) -> Option<&'a Item> {
    items.iter().find(|item| item.original_name == original_name)
}
