use anyhow::{Context, Result, bail};
use dioxus::prelude::*;
use mailblocks_config::{Config, EditorConfig};
use mailblocks_engine::io;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::App;

/// Everything the app shell needs, resolved once before the window opens
#[derive(Debug, Clone, PartialEq)]
struct Startup {
    templates_path: PathBuf,
    editor: EditorConfig,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("mailblocks starting up");

    let args: Vec<String> = env::args().skip(1).collect();
    let startup = match resolve_startup(&args, Config::load()) {
        Ok(startup) => startup,
        Err(e) => {
            let program_name = env::args()
                .next()
                .unwrap_or_else(|| "mailblocks-dioxus".to_string());
            eprintln!("Error: {e:#}");
            eprintln!("Usage: {program_name} [templates-folder-path]");
            eprintln!("Or create a config file at {}", Config::config_path().display());
            process::exit(1);
        }
    };

    log::info!("Using templates folder {}", startup.templates_path.display());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(startup)
        .launch(app_root);
}

/// Templates folder from the command line, otherwise from the config file.
/// Editor preferences always come from the config file when it can be read.
fn resolve_startup(
    args: &[String],
    config: Result<Option<Config>, mailblocks_config::ConfigError>,
) -> Result<Startup> {
    let (templates_path, editor) = match (args, config) {
        ([path], Ok(config)) => (
            PathBuf::from(path),
            config.map(|c| c.editor).unwrap_or_default(),
        ),
        ([path], Err(e)) => {
            log::warn!("Ignoring unreadable config file: {e}");
            (PathBuf::from(path), EditorConfig::default())
        }
        ([], Ok(Some(config))) => {
            log::info!("Loaded templates path from config");
            (config.templates_path, config.editor)
        }
        ([], Ok(None)) => bail!("No templates folder given and no config file found"),
        ([], Err(e)) => return Err(e).context("Failed to load config file"),
        _ => bail!("Expected at most one argument"),
    };

    io::validate_templates_dir(&templates_path).with_context(|| {
        format!("Templates path '{}' is invalid", templates_path.display())
    })?;

    Ok(Startup {
        templates_path,
        editor,
    })
}

fn app_root() -> Element {
    let startup = use_context::<Startup>();

    rsx! {
        App {
            templates_path: startup.templates_path,
            editor: startup.editor
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("mailblocks")
        .with_inner_size(LogicalSize::new(1280.0, 860.0))
        .with_always_on_top(false);

    Config::default().with_window(window)
}
