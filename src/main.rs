// SPDX-License-Identifier: GPL-3.0-only
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;

use monitor_ctrl::config::{Config, SettingsProfile};
use monitor_ctrl::error::{AppError, Result};
use monitor_ctrl::monitor::{Device, spawn_discovery};
use monitor_ctrl::protocols::ddc_ci::DdcCiDisplay;
use monitor_ctrl::settings::{
    ApplyOptions, ModelFilter, Property, SettingsBatch, apply_settings, is_valid_separator,
    select_targets,
};

#[macro_use]
extern crate tracing;

/// Apply VCP settings to DDC/CI monitors
///
/// Settings are `key=value` pairs joined by a separator, e.g.
/// `brightness=50:color_preset=sRGB:rgb_gain=[90,95,100]`.
#[derive(Parser, Debug)]
#[command(name = "monitor-ctrl")]
#[command(version)]
pub struct Args {
    /// Only touch monitors of this model (`*` for all)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Settings batch to apply
    #[arg(short, long)]
    pub settings: Option<String>,

    /// Apply a saved profile
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Store the `--settings` batch as a profile with this name
    #[arg(long)]
    pub save_profile: Option<String>,

    /// Restore factory defaults before applying settings
    #[arg(short = 'r', long)]
    pub reset_factory: bool,

    /// Run video auto-setup before applying settings
    #[arg(short = 't', long)]
    pub auto_setup: bool,

    /// List the model of every monitor and exit
    #[arg(short, long)]
    pub list: bool,

    /// Print every readable property of the selected monitors
    #[arg(long)]
    pub show: bool,

    /// Separator between settings
    #[arg(long)]
    pub separator: Option<char>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    fn has_device_work(&self) -> bool {
        self.list
            || self.show
            || self.settings.is_some()
            || self.profile.is_some()
            || self.reset_factory
            || self.auto_setup
    }
}

fn setup_logs(verbose: bool, log_file: Option<&Path>) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = if verbose { "debug" } else { "info" };
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new(format!(
        "warn,{}={level}",
        env!("CARGO_CRATE_NAME")
    )));

    let file = log_file.and_then(|path| match File::create(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("can't open log file {}: {e}", path.display());
            None
        }
    });
    let (stderr_layer, file_layer) = match file {
        Some(file) => (
            None,
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            ),
        ),
        None => (Some(fmt::layer().with_target(false)), None),
    };

    #[cfg(target_os = "linux")]
    let journal_layer = tracing_journald::layer().ok();
    #[cfg(not(target_os = "linux"))]
    let journal_layer: Option<tracing_subscriber::layer::Identity> = None;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(stderr_layer)
        .with(file_layer)
        .with(journal_layer)
        .init();
}

/// Profile batch first, then the command line batch
fn resolve_batch(args: &Args, config: &Config, separator: char) -> Result<String> {
    let mut parts = Vec::new();
    if let Some(name) = &args.profile {
        let profile = config
            .get_profile(name)
            .ok_or_else(|| AppError::ProfileNotFound(name.clone()))?;
        parts.push(profile.settings.clone());
    }
    if let Some(settings) = &args.settings {
        parts.push(settings.clone());
    }
    Ok(parts.join(&separator.to_string()))
}

fn list(devices: &[Device<DdcCiDisplay>]) {
    for device in devices {
        println!("{}\t{}\t{}", device.model(), device.display_type(), device.id());
    }
}

fn show(devices: &mut [Device<DdcCiDisplay>], filter: &ModelFilter) {
    for device in select_targets(devices, filter) {
        println!("{} ({})", device.model(), device.id());
        for property in Property::ALL.into_iter().filter(|p| p.is_readable()) {
            println!("  {:<18} {}", property.name(), property.read(device));
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = Config::load();
    let log_file = args
        .log_file
        .clone()
        .or_else(|| loaded.as_ref().ok().and_then(|c| c.log_file.clone()));
    setup_logs(args.verbose, log_file.as_deref());

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("errors loading config: {}", e);
            Config::default()
        }
    };

    let separator = args.separator.unwrap_or(config.separator);
    if !is_valid_separator(separator) {
        error!("invalid separator: {:?}", separator);
        return ExitCode::FAILURE;
    }

    if let Some(name) = &args.save_profile {
        match &args.settings {
            Some(settings) => {
                let profile = SettingsProfile::new(name.clone(), settings.clone());
                if config.save_profile(profile) {
                    match config.save() {
                        Ok(()) => info!("profile saved: {}", name),
                        Err(e) => error!("failed to save config: {}", e),
                    }
                }
            }
            None => warn!("--save-profile needs --settings"),
        }
    }

    if !args.has_device_work() {
        if args.save_profile.is_none() {
            warn!("nothing to do: pass --settings, --profile, --reset-factory, --auto-setup, --list or --show");
        }
        return ExitCode::SUCCESS;
    }

    let batch_text = match resolve_batch(&args, &config, separator) {
        Ok(batch_text) => batch_text,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut devices = match spawn_discovery().await {
        Ok(Ok(devices)) => devices,
        Ok(Err(e)) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
        Err(_) => {
            error!("discovery worker went away");
            return ExitCode::FAILURE;
        }
    };
    if devices.is_empty() {
        error!("no DDC/CI monitors found");
        return ExitCode::FAILURE;
    }

    if args.list {
        list(&devices);
        return ExitCode::SUCCESS;
    }

    let options = ApplyOptions {
        model_filter: ModelFilter::parse(args.model.as_deref().unwrap_or(&config.model_filter)),
        reset_factory: args.reset_factory,
        auto_setup: args.auto_setup,
    };
    let batch = SettingsBatch::parse(&batch_text, separator);
    let show_after = args.show;

    let result = tokio::task::spawn_blocking(move || {
        if options.reset_factory || options.auto_setup || !batch.is_empty() {
            let report = apply_settings(&mut devices, &options, &batch);
            if report.devices_matched == 0 {
                warn!("no monitor matches model filter {:?}", options.model_filter);
            }
        }
        if show_after {
            show(&mut devices, &options.model_filter);
        }
    })
    .await;

    if let Err(e) = result.map_err(|e| AppError::TaskJoin(e.to_string())) {
        error!("{}", e);
    }
    ExitCode::SUCCESS
}
