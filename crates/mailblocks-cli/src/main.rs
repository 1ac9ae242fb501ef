use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mailblocks_config::Config;
use mailblocks_engine::{Template, io, render_template_to_html};
use relative_path::RelativePathBuf;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mailblocks-cli")]
#[command(version)]
#[command(about = "List, create and export mailblocks email templates")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List templates with their block counts
    List {
        /// Templates folder; defaults to `templates_path` from the config file
        dir: Option<PathBuf>,
    },
    /// Render a template file to a standalone HTML email
    Export {
        file: PathBuf,
        /// Write the HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a starter template
    New {
        file: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::List { dir } => {
            let dir = resolve_templates_dir(dir)?;
            list_templates(&dir, &mut out)
        }
        Command::Export { file, output } => {
            let html = export_template(&file)?;
            match output {
                Some(path) => {
                    fs::write(&path, html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    log::info!("exported {} to {}", file.display(), path.display());
                    Ok(())
                }
                None => Ok(out.write_all(html.as_bytes())?),
            }
        }
        Command::New { file, name } => {
            let name = name.unwrap_or_else(|| default_template_name(&file));
            create_template(&file, &name)?;
            writeln!(out, "Created {}", file.display())?;
            Ok(())
        }
    }
}

fn resolve_templates_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir);
    }
    match Config::load()? {
        Some(config) => Ok(config.templates_path),
        None => bail!(
            "No templates folder given and no config file found at {}",
            Config::config_path().display()
        ),
    }
}

fn list_templates(dir: &Path, out: &mut impl Write) -> Result<()> {
    io::validate_templates_dir(dir)?;

    for file in io::list_template_files(dir)? {
        match io::read_template(file.relative_path(), dir) {
            Ok(template) => writeln!(
                out,
                "{}\t{}\t{} blocks",
                file.relative_path(),
                template.name,
                template.blocks().len()
            )?,
            Err(e) => {
                log::warn!("skipping {}: {e}", file.relative_path());
                writeln!(out, "{}\t(invalid)", file.relative_path())?;
            }
        }
    }
    Ok(())
}

fn export_template(file: &Path) -> Result<String> {
    let bytes = fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let template = Template::from_bytes(&bytes)
        .with_context(|| format!("invalid template {}", file.display()))?;
    Ok(render_template_to_html(&template))
}

fn create_template(file: &Path, name: &str) -> Result<()> {
    if file.exists() {
        bail!("{} already exists", file.display());
    }
    let file_name = file
        .file_name()
        .with_context(|| format!("{} is not a file path", file.display()))?;
    let root = file.parent().unwrap_or(Path::new(""));
    let relative = RelativePathBuf::from_path(file_name)?;

    io::write_template(&relative, root, &Template::starter(name))?;
    Ok(())
}

fn default_template_name(file: &Path) -> String {
    file.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_else(|| "Untitled".to_string())
}
