use crate::get_build_info;
use anyhow::Context;
use build_info::{BuildInfo, VersionControl};
use log::{info, Level, LevelFilter};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Instant, SystemTime};

fn format_system_time(system_time: SystemTime) -> String {
    let datetime: chrono::DateTime<chrono::Utc> = system_time.into();
    datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn print_build_info(bi: &BuildInfo) {
    info!(r" ___  ___  ___  ___  ___  _ _  ___  ___  _ __");
    info!(r"| . \| . \| . || __>|  _>| | || __>|  _>| / /");
    info!(r"|  _/|   /| | || _> | <__|   || _> | <__|  \ ");
    info!(r"|_|  |_\_\`___'|_|  `___/|_|_||___>`___/|_\_\");

    info!("Current time: {}", format_system_time(SystemTime::now()));
    info!("Build Information:");
    info!("  Version: {}", bi.crate_info.version);
    info!("  Features: {:?}", bi.crate_info.enabled_features);
    info!("  Timestamp: {}", bi.timestamp);
    info!("  Profile: {}", bi.profile);
    info!("  Optimizations: {}", bi.optimization_level);
    info!("  Target: {}", bi.target);
    info!("  Compiler: {}", bi.compiler);
    if let Some(VersionControl::Git(git)) = &bi.version_control {
        info!("  VCS (Git) Information:");
        info!("    Commit: {} ({})", git.commit_id, git.commit_timestamp);
        info!("    Is dirty: {}", git.dirty);
        info!("    Refs: {:?}, {:?}", git.branch, git.tags);
    }
}

// Used for the elapsed-time column
static START_TIME: OnceLock<Instant> = OnceLock::new();

fn format_inner<'a, F, const COLORED: bool>(
    message: &'a fmt::Arguments<'a>,
    record: &'a log::Record<'a>,
    callback: F,
) where
    F: FnOnce(fmt::Arguments),
{
    let red: &'static str = if COLORED { "\x1B[31m" } else { "" };
    let yellow: &'static str = if COLORED { "\x1B[33m" } else { "" };
    let green: &'static str = if COLORED { "\x1B[32m" } else { "" };
    let blue: &'static str = if COLORED { "\x1B[34m" } else { "" };
    let magenta: &'static str = if COLORED { "\x1B[35m" } else { "" };
    let cyan: &'static str = if COLORED { "\x1B[36m" } else { "" };
    let white: &'static str = if COLORED { "\x1B[37m" } else { "" };
    let reset: &'static str = if COLORED { "\x1B[0m" } else { "" };

    let elapsed = START_TIME
        .get()
        .map(|start| start.elapsed())
        .unwrap_or_default();

    // File name only, module paths are long
    let file = Path::new(record.file().unwrap_or("unknown"));
    let base = file.file_name().unwrap_or_default().to_string_lossy();
    let location = format!("{}:{}", base, record.line().unwrap_or(0));

    callback(format_args!(
        "[{cyan}{:^10.3}{reset}][{magenta}{:^22}{reset}][{yellow}{:^10}{reset}][{}{:>5}{reset}]: {}",
        elapsed.as_secs_f32(),
        location,
        std::thread::current().name().unwrap_or("main"),
        match record.level() {
            Level::Error => red,
            Level::Warn => yellow,
            Level::Info => green,
            Level::Debug => blue,
            Level::Trace => white,
        },
        record.level(),
        message,
    ))
}

fn format<'a, F>(message: &'a fmt::Arguments<'a>, record: &'a log::Record<'a>, callback: F)
where
    F: FnOnce(fmt::Arguments),
{
    format_inner::<F, false>(message, record, callback);
}

fn format_colored<'a, F>(message: &'a fmt::Arguments<'a>, record: &'a log::Record<'a>, callback: F)
where
    F: FnOnce(fmt::Arguments),
{
    format_inner::<F, true>(message, record, callback);
}

pub fn setup_logging(
    level: LevelFilter,
    file_logging: Option<PathBuf>,
    colored: bool,
) -> anyhow::Result<()> {
    START_TIME.set(Instant::now()).ok();

    let mut console = fern::Dispatch::new().chain(std::io::stdout());
    if colored {
        console = console.format(|cb, args, r| format_colored(args, r, |fmt| cb.finish(fmt)));
    } else {
        console = console.format(|cb, args, r| format(args, r, |fmt| cb.finish(fmt)));
    }

    let mut dispatch = fern::Dispatch::new().level(level).chain(console);
    if let Some(path) = file_logging {
        let file = fern::log_file(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|cb, args, r| format(args, r, |fmt| cb.finish(fmt)))
                .chain(file),
        );
    }

    dispatch.apply().context("Failed to install logger")?;

    print_build_info(get_build_info());
    Ok(())
}
