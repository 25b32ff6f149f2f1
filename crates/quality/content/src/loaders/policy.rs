//! Policy settings loader.

use std::path::Path;

use quality_core::PolicySettings;

use crate::loaders::{LoadResult, read_file};

/// Loader for policy settings from TOML files.
///
/// Unspecified fields fall back to the defaults of
/// [`PolicySettings::default`], so a policy file only needs to state what
/// it changes. Loaded settings are validated before they are returned.
pub struct PolicyLoader;

impl PolicyLoader {
    /// Load policy settings from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing PolicySettings
    ///
    /// # Returns
    ///
    /// Returns validated PolicySettings.
    pub fn load(path: &Path) -> LoadResult<PolicySettings> {
        Self::from_toml_str(&read_file(path)?)
    }

    /// Parse and validate policy settings from a TOML string.
    pub fn from_toml_str(content: &str) -> LoadResult<PolicySettings> {
        let settings: PolicySettings = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse policy TOML: {}", e))?;
        settings
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid policy settings: {}", e))?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quality_core::{ItemCategory, Quality};

    #[test]
    fn partial_policy_inherits_defaults() {
        let toml = r#"
            use_table_quality = false
            standard_supply_quality = "good"

            [meal]
            enforced = true
            min = "poor"
            max = "masterwork"
        "#;
        let settings = PolicyLoader::from_toml_str(toml).unwrap();

        assert!(!settings.use_table_quality);
        assert_eq!(settings.standard_supply_quality, Quality::Good);
        assert_eq!(settings.meal.min, Quality::Poor);
        assert_eq!(settings.meal.max, Quality::Masterwork);
        assert!(settings.meal.enforced);

        // Untouched fields keep their defaults.
        assert!(settings.use_skill_requirements);
        assert!(settings.weapon.enforced);
        assert!(!settings.drug.enforced);
        assert!(
            settings
                .bounds(ItemCategory::Weapon)
                .is_some_and(|b| b.max == Quality::Legendary)
        );
    }

    #[test]
    fn empty_policy_is_the_default_policy() {
        let settings = PolicyLoader::from_toml_str("").unwrap();
        assert_eq!(settings, PolicySettings::default());
    }

    #[test]
    fn inverted_bounds_are_rejected_at_load_time() {
        let toml = r#"
            [drug]
            enforced = true
            min = "legendary"
            max = "awful"
        "#;
        let error = PolicyLoader::from_toml_str(toml).unwrap_err();
        assert!(error.to_string().contains("Invalid policy settings"));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let error = PolicyLoader::from_toml_str("weapon = 3").unwrap_err();
        assert!(error.to_string().contains("Failed to parse policy TOML"));
    }

    #[test]
    fn unknown_quality_names_are_rejected() {
        let toml = r#"
            standard_supply_quality = "superb"
        "#;
        assert!(PolicyLoader::from_toml_str(toml).is_err());
    }
}
