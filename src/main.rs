#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod history;
mod pages;
mod theme;

use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context;
use portfolio_core::PortfolioConfig;

/// Startup settings, set once before launch
static STARTUP: OnceLock<Startup> = OnceLock::new();

/// What the launcher hands to the app
#[derive(Debug, Clone, Default)]
pub struct Startup {
    pub config: PortfolioConfig,
    /// Project to open on launch
    pub open: Option<String>,
}

/// Get the startup settings (defaults when the launcher set none)
pub fn startup() -> &'static Startup {
    STARTUP.get_or_init(Startup::default)
}

/// Defaults, then the config file, then the breakpoint override
#[cfg_attr(not(feature = "desktop"), allow(dead_code))]
fn load_config(path: Option<&Path>, mobile_breakpoint: Option<u32>) -> anyhow::Result<PortfolioConfig> {
    let mut config = match path {
        Some(path) => PortfolioConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PortfolioConfig::default(),
    };
    if let Some(breakpoint) = mobile_breakpoint {
        config.mobile_breakpoint_px = breakpoint;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[cfg(feature = "desktop")]
mod desktop {
    use std::path::PathBuf;

    use clap::Parser;
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
    use portfolio_core::logging::{init_logging, DEFAULT_FILTER};

    use super::{load_config, Startup, STARTUP};

    /// Portfolio Showcase - games, 3D models and environments
    #[derive(Parser, Debug)]
    #[command(name = "portfolio")]
    #[command(about = "Portfolio showcase with project catalog, detail views and lightbox")]
    pub struct Args {
        /// JSON config file
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Viewport width (px) at or below which the mobile layout applies
        #[arg(short, long)]
        pub mobile_breakpoint: Option<u32>,

        /// Open a project's detail view on launch (project id)
        #[arg(short, long)]
        pub open: Option<String>,

        /// Log filter used when RUST_LOG is unset
        #[arg(long, default_value = DEFAULT_FILTER)]
        pub log: String,
    }

    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        init_logging(&args.log);

        let config = load_config(args.config.as_deref(), args.mobile_breakpoint)?;
        let title = "Portfolio".to_string();

        tracing::info!(
            breakpoint = config.mobile_breakpoint_px,
            open = ?args.open,
            "Starting '{}'",
            title
        );

        let window = WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
            .with_resizable(true);

        let _ = STARTUP.set(Startup {
            config,
            open: args.open,
        });

        dioxus::LaunchBuilder::desktop()
            .with_cfg(Config::new().with_window(window))
            .launch(crate::app::App);
        Ok(())
    }
}

#[cfg(feature = "desktop")]
fn main() -> anyhow::Result<()> {
    desktop::run()
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
fn main() {
    let _ = STARTUP.set(Startup::default());
    dioxus::launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let config = load_config(None, None).unwrap();
        assert_eq!(config, PortfolioConfig::default());
    }

    #[test]
    fn flag_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"mobile_breakpoint_px": 600}}"#).unwrap();

        let from_file = load_config(Some(file.path()), None).unwrap();
        assert_eq!(from_file.mobile_breakpoint_px, 600);

        let overridden = load_config(Some(file.path()), Some(900)).unwrap();
        assert_eq!(overridden.mobile_breakpoint_px, 900);
    }

    #[test]
    fn zero_breakpoint_rejected() {
        assert!(load_config(None, Some(0)).is_err());
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = load_config(Some(Path::new("/nonexistent/portfolio.json")), None).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/portfolio.json"));
    }
}
