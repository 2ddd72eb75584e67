//! fe - render form element definitions to HTML

use std::fs;
use std::path::Path;

use clap::Parser;
use colored::*;
use eyre::{Context, Result, bail};
use tracing::{debug, info};

use formelements::cli::{Cli, Command};
use formelements::{Config, Element, Renderer, TemplateRegistry, sort_by_order};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    // stdout carries the rendered HTML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
    Ok(())
}

fn load_elements(path: &Path) -> Result<Vec<Element>> {
    debug!(?path, "load_elements: called");
    let content = fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "yml" || ext == "yaml");

    let elements = if is_yaml {
        Element::list_from_yaml(&content).context(format!("Failed to parse {}", path.display()))?
    } else {
        Element::list_from_json(&content).context(format!("Failed to parse {}", path.display()))?
    };
    Ok(elements)
}

fn cmd_render(registry: &TemplateRegistry, files: &[impl AsRef<Path>], sort: bool, keep_going: bool) -> Result<()> {
    let renderer = Renderer::new(registry);
    let mut failures = 0usize;

    for file in files {
        let path = file.as_ref();
        let mut elements = load_elements(path)?;
        if sort {
            sort_by_order(&mut elements);
        }
        info!("Rendering {} elements from {}", elements.len(), path.display());

        if !keep_going {
            let html = renderer
                .render_fragment(&elements)
                .context(format!("Failed to render {}", path.display()))?;
            println!("{}", html);
            continue;
        }

        for (element, result) in elements.iter().zip(renderer.render_all(&elements)) {
            match result {
                Ok(html) => println!("{}", html),
                Err(e) => {
                    failures += 1;
                    eprintln!("{} {} [{}]: {}", "✗".red(), path.display(), element.id.yellow(), e);
                }
            }
        }
    }

    if failures > 0 {
        bail!("{} element(s) failed to render", failures);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    if let Some(dir) = cli.template_dir {
        debug!(?dir, "main: template dir from CLI");
        config.template_dir = Some(dir);
    }

    let registry = TemplateRegistry::from_config(&config).context("Failed to compile templates")?;

    match cli.command {
        Command::Render {
            files,
            sort,
            keep_going,
        } => cmd_render(&registry, &files, sort, keep_going)?,
        Command::Types => {
            for element_type in registry.types() {
                println!("{}", element_type);
            }
        }
        Command::Show { element_type } => match registry.source(&element_type) {
            Some(source) => println!("{}", source),
            None => bail!("No template registered for element type '{}'", element_type),
        },
    }

    Ok(())
}
