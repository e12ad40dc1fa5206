use crate::vk::layer::{SettingsTransport, SimulateCapability};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Run configuration, loaded from JSON and overridden by command-line flags.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Directory holding the Profiles layer manifest, exported as `VK_LAYER_PATH`.
    pub layer_path: Option<PathBuf>,
    pub profile_file: PathBuf,
    pub profile_name: String,
    pub simulate: Vec<SimulateCapability>,
    pub transport: SettingsTransport,
    pub device_index: Option<usize>,
    pub validation: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            layer_path: None,
            profile_file: PathBuf::from("profiles/VP_LUNARG_test_api.json"),
            profile_name: "VP_LUNARG_test_api".to_string(),
            simulate: SimulateCapability::ALL.to_vec(),
            transport: SettingsTransport::default(),
            device_index: None,
            validation: false,
        }
    }
}

impl CheckConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
