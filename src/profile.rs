//! Vulkan profiles JSON documents.
//!
//! A profiles file declares named capability blocks and named profiles that
//! reference them. Resolving a profile merges its blocks into one
//! [`ResolvedProfile`], which is what the expectation table is built from.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profiles file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse profiles file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("profile {0} is not defined")]
    UnknownProfile(String),
    #[error("profile {profile} references undefined capability block {block}")]
    UnknownCapability { profile: String, block: String },
    #[error("profile {profile} lists an empty set of alternative capabilities")]
    EmptyAlternatives { profile: String },
    #[error("malformed api-version {0:?}, expected major.minor.patch")]
    ApiVersion(String),
}

/// Vulkan API version as written in profiles (`"1.3.204"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ApiVersion {
    pub const V1_1: ApiVersion = ApiVersion::new(1, 1, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn parse(text: &str) -> Result<Self, ProfileError> {
        let parts = text
            .trim()
            .split('.')
            .map(|part| part.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ProfileError::ApiVersion(text.to_string()))?;

        match parts.as_slice() {
            [major, minor] => Ok(Self::new(*major, *minor, 0)),
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(ProfileError::ApiVersion(text.to_string())),
        }
    }

    /// Packs the version the way `VK_MAKE_API_VERSION` does, variant 0.
    pub fn to_vk(self) -> u32 {
        ash::vk::make_api_version(0, self.major, self.minor, self.patch)
    }

    pub fn from_vk(version: u32) -> Self {
        Self::new(
            ash::vk::api_version_major(version),
            ash::vk::api_version_minor(version),
            ash::vk::api_version_patch(version),
        )
    }

    /// Compares major and minor only, patch levels never gate availability.
    pub fn at_least(self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// One named capability block.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    #[serde(default)]
    pub extensions: IndexMap<String, u32>,
    #[serde(default)]
    pub features: Map<String, Value>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub formats: Map<String, Value>,
    #[serde(default)]
    pub queue_families_properties: Vec<Map<String, Value>>,
}

impl Capabilities {
    fn merge(&mut self, other: &Capabilities) {
        for (name, version) in &other.extensions {
            let entry = self.extensions.entry(name.clone()).or_insert(0);
            *entry = (*entry).max(*version);
        }
        merge_objects(&mut self.features, &other.features);
        merge_objects(&mut self.properties, &other.properties);
        merge_objects(&mut self.formats, &other.formats);
        self.queue_families_properties
            .extend(other.queue_families_properties.iter().cloned());
    }
}

/// Later values win, objects are merged member by member.
fn merge_objects(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        match (target.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_objects(existing, incoming);
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

/// A profile entry references capability blocks either directly or as a set
/// of alternatives.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum CapabilityRef {
    Block(String),
    Alternatives(Vec<String>),
}

#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub version: u32,
    #[serde(rename = "api-version")]
    pub api_version: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub contributors: Map<String, Value>,
    #[serde(default)]
    pub history: Vec<Value>,
    pub capabilities: Vec<CapabilityRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProfilesFile {
    #[serde(rename = "$schema", default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub capabilities: IndexMap<String, Capabilities>,
    #[serde(default)]
    pub profiles: IndexMap<String, Profile>,
}

/// The merged capability set of one profile.
#[derive(Clone, Debug)]
pub struct ResolvedProfile {
    pub name: String,
    pub label: String,
    pub api_version: ApiVersion,
    pub capabilities: Capabilities,
}

impl ProfilesFile {
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn resolve(&self, name: &str) -> Result<ResolvedProfile, ProfileError> {
        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| ProfileError::UnknownProfile(name.to_string()))?;

        let mut capabilities = Capabilities::default();
        for reference in &profile.capabilities {
            let block = match reference {
                CapabilityRef::Block(block) => block,
                CapabilityRef::Alternatives(blocks) => {
                    let first = blocks.first().ok_or_else(|| ProfileError::EmptyAlternatives {
                        profile: name.to_string(),
                    })?;
                    log::debug!(
                        "Profile {} offers alternatives {:?}, using {}",
                        name,
                        blocks,
                        first
                    );
                    first
                }
            };

            let block_caps =
                self.capabilities
                    .get(block)
                    .ok_or_else(|| ProfileError::UnknownCapability {
                        profile: name.to_string(),
                        block: block.clone(),
                    })?;
            capabilities.merge(block_caps);
        }

        Ok(ResolvedProfile {
            name: name.to_string(),
            label: profile.label.clone(),
            api_version: ApiVersion::parse(&profile.api_version)?,
            capabilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;

    fn sample() -> ProfilesFile {
        serde_json::from_value(json!({
            "$schema": "https://schema.khronos.org/vulkan/profiles-0.8.1-204.json#",
            "capabilities": {
                "baseline": {
                    "extensions": { "VK_KHR_maintenance3": 1 },
                    "properties": {
                        "VkPhysicalDeviceProperties": {
                            "limits": { "maxImageDimension1D": 102, "maxImageDimension2D": 103 }
                        }
                    }
                },
                "extra": {
                    "extensions": { "VK_KHR_maintenance3": 2 },
                    "properties": {
                        "VkPhysicalDeviceProperties": {
                            "limits": { "maxImageDimension2D": 200 }
                        }
                    }
                },
                "other": { "features": { "VkPhysicalDeviceFeatures": { "wideLines": true } } }
            },
            "profiles": {
                "VP_TEST": {
                    "version": 1,
                    "api-version": "1.2.198",
                    "label": "Test",
                    "description": "",
                    "capabilities": ["baseline", ["extra", "other"]]
                },
                "VP_BROKEN": {
                    "api-version": "1.2",
                    "capabilities": ["missing"]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn parses_api_versions() {
        assert_eq!(ApiVersion::parse("1.3.204").unwrap(), ApiVersion::new(1, 3, 204));
        assert_eq!(ApiVersion::parse("1.2").unwrap(), ApiVersion::new(1, 2, 0));
        assert!(ApiVersion::parse("1").is_err());
        assert!(ApiVersion::parse("1.x.0").is_err());
        assert!(ApiVersion::new(1, 2, 0).at_least(1, 1));
        assert!(!ApiVersion::new(1, 2, 0).at_least(1, 3));
    }

    #[test]
    fn api_version_packs_like_vulkan() {
        let version = ApiVersion::new(1, 3, 204);
        assert_eq!(ApiVersion::from_vk(version.to_vk()), version);
        assert_eq!(version.to_string(), "1.3.204");
    }

    #[test]
    fn resolve_merges_blocks_in_order() {
        let resolved = sample().resolve("VP_TEST").unwrap();
        assert_eq!(resolved.api_version, ApiVersion::new(1, 2, 198));
        assert_eq!(resolved.capabilities.extensions["VK_KHR_maintenance3"], 2);

        let limits = &resolved.capabilities.properties["VkPhysicalDeviceProperties"]["limits"];
        assert_eq!(limits["maxImageDimension1D"], json!(102));
        assert_eq!(limits["maxImageDimension2D"], json!(200));
        assert!(!resolved.capabilities.features.contains_key("VkPhysicalDeviceFeatures"));
    }

    #[test]
    fn resolve_reports_missing_pieces() {
        let file = sample();
        assert!(matches!(
            file.resolve("VP_NOPE"),
            Err(ProfileError::UnknownProfile(_))
        ));
        assert!(matches!(
            file.resolve("VP_BROKEN"),
            Err(ProfileError::UnknownCapability { .. })
        ));
        assert_eq!(file.profile_names().collect::<Vec<_>>(), ["VP_TEST", "VP_BROKEN"]);
    }

    #[test]
    fn resolve_rejects_empty_alternatives() {
        let file: ProfilesFile = serde_json::from_value(json!({
            "capabilities": { "baseline": {} },
            "profiles": {
                "VP_HOLLOW": { "api-version": "1.1.0", "capabilities": [[]] }
            }
        }))
        .unwrap();

        match file.resolve("VP_HOLLOW") {
            Err(ProfileError::EmptyAlternatives { profile }) => assert_eq!(profile, "VP_HOLLOW"),
            other => panic!("expected EmptyAlternatives, got {:?}", other.map(|p| p.name)),
        }
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "capabilities": {{}}, "profiles": {{ "VP_EMPTY": {{ "api-version": "1.1.0", "capabilities": [] }} }} }}"#
        )
        .unwrap();

        let loaded = ProfilesFile::load(file.path()).unwrap();
        let resolved = loaded.resolve("VP_EMPTY").unwrap();
        assert_eq!(resolved.api_version, ApiVersion::V1_1);
    }

    #[test]
    fn load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            ProfilesFile::load(file.path()),
            Err(ProfileError::Parse { .. })
        ));
    }
}
