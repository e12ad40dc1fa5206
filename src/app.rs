use crate::check::{self, CaseResult};
use crate::config::CheckConfig;
use crate::expect::derive;
use crate::profile::{ApiVersion, ProfilesFile, ResolvedProfile};
use crate::vk::Session;
use anyhow::Context;
use build_info::BuildInfo;
use log::info;

/// Result of checking one profile against the simulated device.
pub struct Run {
    pub profile: ResolvedProfile,
    pub device_api_version: ApiVersion,
    pub cases: Vec<CaseResult>,
}

pub struct App {
    config: CheckConfig,
    build_info: BuildInfo,
}

impl App {
    pub fn new(config: CheckConfig, bi: BuildInfo) -> Self {
        Self {
            config,
            build_info: bi,
        }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    pub fn load_profiles(&self) -> anyhow::Result<ProfilesFile> {
        let path = &self.config.profile_file;
        info!("Loading profiles from {}", path.display());
        ProfilesFile::load(path).context("Failed to load profiles file")
    }

    /// Resolves the configured profile, acquires the device through the
    /// Profiles layer and runs every check case.
    pub fn run(&self) -> anyhow::Result<Run> {
        let profile = self
            .load_profiles()?
            .resolve(&self.config.profile_name)
            .context("Failed to resolve profile")?;
        let table = derive(&profile);
        info!(
            "Profile {} ({}) declares {} checks",
            profile.name,
            profile.api_version,
            table.len()
        );

        let mut session = unsafe { Session::new(&self.config, &profile, &self.build_info)? };
        let device_api_version = session.device_api_version();
        let cases = check::run(&table, &mut session);
        drop(session);

        Ok(Run {
            profile,
            device_api_version,
            cases,
        })
    }
}
