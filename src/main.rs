use clap::Parser;
use log::{info, LevelFilter};
use profcheck::app::App;
use profcheck::config::CheckConfig;
use profcheck::get_build_info;
use profcheck::logging::setup_logging;
use profcheck::report::{Report, Summary};
use profcheck::vk::layer::SettingsTransport;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Arguments {
    #[clap(short = 'c', long, help = "Path to the config file in JSON format")]
    config: Option<PathBuf>,
    #[clap(short = 'f', long, help = "Vulkan profiles JSON file")]
    profile_file: Option<PathBuf>,
    #[clap(short = 'p', long, help = "Profile to check within the profiles file")]
    profile_name: Option<String>,
    #[clap(long, help = "Directory containing the Profiles layer manifest")]
    layer_path: Option<PathBuf>,
    #[clap(long, help = "Physical device to check, by enumeration index")]
    device_index: Option<usize>,
    #[clap(
        long,
        help = "Pass layer settings through VK_EXT_layer_settings instead of the environment"
    )]
    layer_settings: bool,
    #[clap(long, help = "Enable the validation layer when it is installed")]
    validation: bool,
    #[clap(short = 'l', long, help = "List the profiles in the profiles file and exit")]
    list: bool,
    #[clap(short = 'r', long, help = "Write a JSON report to this path")]
    report: Option<PathBuf>,
    #[clap(long, help = "Also write the log to this file")]
    log_file: Option<PathBuf>,
    #[clap(long, help = "Disable ANSI colours in console output")]
    no_color: bool,
    #[clap(short = 'v', long, help = "Log debug output")]
    verbose: bool,
}

impl Arguments {
    fn into_config(self) -> anyhow::Result<CheckConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading config from file: {}", path.display());
                CheckConfig::load(path)?
            }
            None => {
                info!("No config file provided, using default config");
                CheckConfig::default()
            }
        };

        if let Some(profile_file) = self.profile_file {
            config.profile_file = profile_file;
        }
        if let Some(profile_name) = self.profile_name {
            config.profile_name = profile_name;
        }
        if let Some(layer_path) = self.layer_path {
            config.layer_path = Some(layer_path);
        }
        if let Some(device_index) = self.device_index {
            config.device_index = Some(device_index);
        }
        if self.layer_settings {
            config.transport = SettingsTransport::LayerSettingsExt;
        }
        config.validation |= self.validation;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    setup_logging(level, args.log_file.clone(), !args.no_color)?;
    info!("Starting with args: {:?}", args);

    let list = args.list;
    let report_path = args.report.clone();
    let config = args.into_config()?;
    let app = App::new(config, get_build_info().clone());

    if list {
        let profiles = app.load_profiles()?;
        for name in profiles.profile_names() {
            let profile = &profiles.profiles[name];
            println!("{} (API {}) {}", name, profile.api_version, profile.label);
        }
        return Ok(());
    }

    let run = app.run()?;
    let summary = Summary::of(&run.cases);
    summary.log(&run.cases);

    if let Some(path) = report_path {
        Report::new(
            &run.profile.name,
            run.profile.api_version,
            run.device_api_version,
            &run.cases,
        )
        .write(&path)?;
    }

    if !summary.succeeded() {
        anyhow::bail!(
            "{} of {} cases failed for profile {}",
            summary.cases.failed,
            run.cases.len(),
            app.config().profile_name
        );
    }

    Ok(())
}
