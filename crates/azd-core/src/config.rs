use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Option name to string value. Keys are unique, ordering is not significant.
pub type Configuration = HashMap<String, String>;

/// A configuration is usable for deployment once it carries at least one entry.
pub fn validate_config(config: &Configuration) -> bool {
    !config.is_empty()
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to parse client profiles: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown client profile '{name}' (available: {available})")]
    Unknown { name: String, available: String },
}

/// Named client configurations a binary hands to [`crate::Client::new`].
///
/// Each binary embeds its profiles as a TOML document, one table per profile:
///
/// ```toml
/// [deploy]
/// subscription = "default"
/// region = "eastus"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Profiles {
    profiles: HashMap<String, Configuration>,
}

impl Profiles {
    pub fn from_toml_str(text: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str::<Self>(text)?)
    }

    /// Returns an owned copy of the named profile.
    pub fn get(&self, name: &str) -> Result<Configuration, ProfileError> {
        self.profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ProfileError::Unknown {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Profile names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.profiles.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Profiles {
        Profiles::from_toml_str(
            r#"
            [deploy]
            subscription = "default"
            region = "eastus"

            [custom]
            extension = "extension1"
            mode = "custom"
            "#,
        )
        .expect("fixture profiles should parse")
    }

    #[test]
    fn resolves_named_profile() {
        let deploy = fixture().get("deploy").expect("deploy profile exists");
        assert_eq!(deploy.get("subscription").map(String::as_str), Some("default"));
        assert_eq!(deploy.get("region").map(String::as_str), Some("eastus"));
        assert_eq!(deploy.len(), 2);
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let err = fixture().get("missing").expect_err("must fail");
        assert!(matches!(&err, ProfileError::Unknown { name, .. } if name == "missing"));
        assert_eq!(
            err.to_string(),
            "unknown client profile 'missing' (available: custom, deploy)"
        );
    }

    #[test]
    fn names_are_sorted() {
        assert_eq!(fixture().names(), vec!["custom", "deploy"]);
        assert!(Profiles::default().names().is_empty());
    }

    #[test]
    fn rejects_non_string_values() {
        let err = Profiles::from_toml_str("[deploy]\nreplicas = 3\n").expect_err("must fail");
        assert!(matches!(err, ProfileError::Parse(_)));
    }

    #[test]
    fn empty_configuration_is_invalid() {
        assert!(!validate_config(&Configuration::new()));
        assert!(validate_config(&Configuration::from([(
            "a".to_string(),
            "b".to_string()
        )])));
    }
}
