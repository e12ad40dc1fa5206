//! Configuration of the Profiles layer.
//!
//! The layer reads its settings either from the process environment or from a
//! `VkLayerSettingsCreateInfoEXT` chained into instance creation.

use anyhow::Context;
use ash::vk;
use log::debug;
use serde::{Deserialize, Serialize};
use std::ffi::{c_char, CStr, CString};
use std::path::{Path, PathBuf};

pub const PROFILES_LAYER: &CStr =
    unsafe { CStr::from_bytes_with_nul_unchecked(b"VK_LAYER_KHRONOS_profiles\0") };

const SETTING_PROFILE_FILE: &CStr =
    unsafe { CStr::from_bytes_with_nul_unchecked(b"profile_file\0") };
const SETTING_PROFILE_NAME: &CStr =
    unsafe { CStr::from_bytes_with_nul_unchecked(b"profile_name\0") };
const SETTING_SIMULATE_CAPABILITIES: &CStr =
    unsafe { CStr::from_bytes_with_nul_unchecked(b"simulate_capabilities\0") };

pub const ENV_LAYER_PATH: &str = "VK_LAYER_PATH";
const ENV_PROFILE_FILE: &str = "VK_KHRONOS_PROFILES_PROFILE_FILE";
const ENV_PROFILE_NAME: &str = "VK_KHRONOS_PROFILES_PROFILE_NAME";
const ENV_SIMULATE_CAPABILITIES: &str = "VK_KHRONOS_PROFILES_SIMULATE_CAPABILITIES";

/// Capability groups the layer can simulate instead of intersecting with the
/// real device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulateCapability {
    #[serde(rename = "SIMULATE_API_VERSION_BIT")]
    ApiVersion,
    #[serde(rename = "SIMULATE_FEATURES_BIT")]
    Features,
    #[serde(rename = "SIMULATE_PROPERTIES_BIT")]
    Properties,
    #[serde(rename = "SIMULATE_EXTENSIONS_BIT")]
    Extensions,
    #[serde(rename = "SIMULATE_FORMATS_BIT")]
    Formats,
    #[serde(rename = "SIMULATE_QUEUE_FAMILY_PROPERTIES_BIT")]
    QueueFamilyProperties,
}

impl SimulateCapability {
    pub const ALL: [SimulateCapability; 6] = [
        SimulateCapability::ApiVersion,
        SimulateCapability::Features,
        SimulateCapability::Properties,
        SimulateCapability::Extensions,
        SimulateCapability::Formats,
        SimulateCapability::QueueFamilyProperties,
    ];

    pub fn setting_name(self) -> &'static str {
        match self {
            SimulateCapability::ApiVersion => "SIMULATE_API_VERSION_BIT",
            SimulateCapability::Features => "SIMULATE_FEATURES_BIT",
            SimulateCapability::Properties => "SIMULATE_PROPERTIES_BIT",
            SimulateCapability::Extensions => "SIMULATE_EXTENSIONS_BIT",
            SimulateCapability::Formats => "SIMULATE_FORMATS_BIT",
            SimulateCapability::QueueFamilyProperties => "SIMULATE_QUEUE_FAMILY_PROPERTIES_BIT",
        }
    }
}

/// How settings reach the layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsTransport {
    #[default]
    Environment,
    LayerSettingsExt,
}

#[derive(Clone, Debug)]
pub struct LayerSettings {
    pub profile_file: PathBuf,
    pub profile_name: String,
    pub simulate: Vec<SimulateCapability>,
}

/// Owns the strings a `VkLayerSettingEXT` array points into.
pub struct LayerSettingValues {
    _strings: Vec<CString>,
    _pointers: Vec<Box<[*const c_char]>>,
    settings: Vec<vk::LayerSettingEXT<'static>>,
}

impl LayerSettingValues {
    pub fn settings(&self) -> &[vk::LayerSettingEXT<'static>] {
        &self.settings
    }
}

/// Points the loader at the directory containing the layer manifest.
pub fn apply_layer_path(path: &Path) {
    debug!("Setting {}={}", ENV_LAYER_PATH, path.display());
    std::env::set_var(ENV_LAYER_PATH, path);
}

impl LayerSettings {
    fn simulate_names(&self) -> Vec<String> {
        self.simulate
            .iter()
            .map(|capability| capability.setting_name().to_string())
            .collect()
    }

    fn entries(&self) -> Vec<(&'static CStr, &'static str, Vec<String>)> {
        vec![
            (
                SETTING_PROFILE_FILE,
                ENV_PROFILE_FILE,
                vec![self.profile_file.to_string_lossy().into_owned()],
            ),
            (
                SETTING_PROFILE_NAME,
                ENV_PROFILE_NAME,
                vec![self.profile_name.clone()],
            ),
            (
                SETTING_SIMULATE_CAPABILITIES,
                ENV_SIMULATE_CAPABILITIES,
                self.simulate_names(),
            ),
        ]
    }

    /// Environment variables equivalent to these settings.
    pub fn environment(&self) -> Vec<(&'static str, String)> {
        self.entries()
            .into_iter()
            .map(|(_, variable, values)| (variable, values.join(",")))
            .collect()
    }

    pub fn apply_environment(&self) {
        for (variable, value) in self.environment() {
            debug!("Setting {}={}", variable, value);
            std::env::set_var(variable, value);
        }
    }

    /// Builds the `VK_EXT_layer_settings` array for the Profiles layer.
    pub fn to_layer_settings(&self) -> anyhow::Result<LayerSettingValues> {
        let mut strings = Vec::new();
        let mut pointers = Vec::new();
        let mut settings = Vec::new();

        for (setting_name, _, values) in self.entries() {
            let mut value_pointers = Vec::with_capacity(values.len());
            for value in values {
                let value = CString::new(value)
                    .with_context(|| format!("Invalid value for layer setting {:?}", setting_name))?;
                value_pointers.push(value.as_ptr());
                strings.push(value);
            }
            let value_pointers = value_pointers.into_boxed_slice();

            let mut setting = vk::LayerSettingEXT::default();
            setting.p_layer_name = PROFILES_LAYER.as_ptr();
            setting.p_setting_name = setting_name.as_ptr();
            setting.ty = vk::LayerSettingTypeEXT::STRING;
            setting.value_count = value_pointers.len() as u32;
            setting.p_values = value_pointers.as_ptr().cast();

            settings.push(setting);
            pointers.push(value_pointers);
        }

        Ok(LayerSettingValues {
            _strings: strings,
            _pointers: pointers,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings() -> LayerSettings {
        LayerSettings {
            profile_file: PathBuf::from("profiles/VP_LUNARG_test_api.json"),
            profile_name: "VP_LUNARG_test_api".to_string(),
            simulate: SimulateCapability::ALL.to_vec(),
        }
    }

    #[test]
    fn environment_lists_every_simulated_capability() {
        assert_eq!(
            settings().environment(),
            [
                (
                    "VK_KHRONOS_PROFILES_PROFILE_FILE",
                    "profiles/VP_LUNARG_test_api.json".to_string()
                ),
                ("VK_KHRONOS_PROFILES_PROFILE_NAME", "VP_LUNARG_test_api".to_string()),
                (
                    "VK_KHRONOS_PROFILES_SIMULATE_CAPABILITIES",
                    "SIMULATE_API_VERSION_BIT,SIMULATE_FEATURES_BIT,SIMULATE_PROPERTIES_BIT,\
                     SIMULATE_EXTENSIONS_BIT,SIMULATE_FORMATS_BIT,SIMULATE_QUEUE_FAMILY_PROPERTIES_BIT"
                        .to_string()
                ),
            ]
        );
    }

    #[test]
    fn layer_settings_point_at_owned_strings() {
        let values = settings().to_layer_settings().unwrap();
        let settings = values.settings();
        assert_eq!(settings.len(), 3);

        let simulate = &settings[2];
        assert_eq!(simulate.value_count, 6);
        let first = unsafe {
            let strings = simulate.p_values as *const *const c_char;
            CStr::from_ptr(*strings)
        };
        assert_eq!(first.to_str().unwrap(), "SIMULATE_API_VERSION_BIT");

        let layer = unsafe { CStr::from_ptr(settings[0].p_layer_name) };
        assert_eq!(layer, PROFILES_LAYER);
    }

    #[test]
    fn simulate_names_deserialize() {
        let parsed: Vec<SimulateCapability> =
            serde_json::from_str(r#"["SIMULATE_FEATURES_BIT", "SIMULATE_FORMATS_BIT"]"#).unwrap();
        assert_eq!(
            parsed,
            [SimulateCapability::Features, SimulateCapability::Formats]
        );
    }
}
