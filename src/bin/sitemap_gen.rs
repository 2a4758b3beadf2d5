//! Command-line front end for the sitemap generator.
//!
//! Reads a JSON manifest (see [`sitemap_xml::dto::manifest`]), validates it
//! against every sitemap rule and writes the XML document.
//!
//! # Usage
//!
//! ```bash
//! # Render to stdout
//! cargo run --bin sitemap-gen -- render sitemap.json
//!
//! # Render to a file, indented by two spaces
//! cargo run --bin sitemap-gen -- render sitemap.json -o sitemap.xml --indent 2
//!
//! # Validate only
//! cargo run --bin sitemap-gen -- check sitemap.json
//!
//! # Read the manifest from stdin
//! cat sitemap.json | cargo run --bin sitemap-gen -- render -
//! ```
//!
//! # Environment Variables
//!
//! - `SITEMAP_INDENT` - Default indentation (overridden by `--indent`)
//! - `RUST_LOG` / `LOG_FORMAT` - Logging, written to stderr

use sitemap_xml::application::XmlGenerator;
use sitemap_xml::config::{self, MAX_INDENT};
use sitemap_xml::domain::entities::{Sitemap, SitemapEntries};
use sitemap_xml::dto::parse_sitemap;
use sitemap_xml::logging::init_tracing;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Sitemap generator.
#[derive(Parser)]
#[command(name = "sitemap-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a manifest as sitemap XML
    Render {
        /// Manifest file, or `-` for stdin
        manifest: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spaces per nesting level, 0 for compact output
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Validate a manifest without rendering it
    Check {
        /// Manifest file, or `-` for stdin
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config)?;
    config.print_summary();

    match cli.command {
        Commands::Render {
            manifest,
            output,
            indent,
        } => {
            if let Some(indent) = indent {
                anyhow::ensure!(
                    indent <= MAX_INDENT,
                    "--indent must be between 0 and {MAX_INDENT}, got {indent}"
                );
                config.indent = indent;
            }
            let sitemap = load_sitemap(&manifest)?;
            render(&sitemap, config.generator_options(), output.as_deref())?;
        }
        Commands::Check { manifest } => {
            let sitemap = load_sitemap(&manifest)?;
            print_summary(&sitemap);
        }
    }

    Ok(())
}

/// Reads and validates a manifest.
fn load_sitemap(path: &Path) -> Result<Sitemap> {
    let input = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read manifest from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?
    };

    match parse_sitemap(&input) {
        Ok(sitemap) => {
            tracing::debug!(items = sitemap.len(), "Manifest validated");
            Ok(sitemap)
        }
        Err(e) => {
            eprintln!("{} {}", "Invalid sitemap:".red().bold(), e);
            Err(e.into())
        }
    }
}

/// Renders `sitemap` to `output`, or to stdout when no path is given.
fn render(
    sitemap: &Sitemap,
    options: sitemap_xml::application::GeneratorOptions,
    output: Option<&Path>,
) -> Result<()> {
    let xml = XmlGenerator::new(options).render(sitemap)?;

    match output {
        Some(path) => {
            std::fs::write(path, &xml)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} {} ({} bytes)",
                "Sitemap written to".green().bold(),
                path.display().to_string().cyan(),
                xml.len()
            );
        }
        None => {
            io::stdout()
                .write_all(xml.as_bytes())
                .context("Failed to write sitemap to stdout")?;
        }
    }

    Ok(())
}

/// Prints what the validated sitemap contains.
fn print_summary(sitemap: &Sitemap) {
    println!("{}", "Sitemap is valid".green().bold());
    match sitemap.entries() {
        SitemapEntries::Index(children) => {
            println!("  Type:     {}", "sitemapindex".cyan());
            println!("  Sitemaps: {}", children.len());
        }
        SitemapEntries::Pages(pages) => {
            let images: usize = pages.iter().map(|p| p.images().len()).sum();
            let videos: usize = pages.iter().map(|p| p.videos().len()).sum();
            println!("  Type:   {}", "urlset".cyan());
            println!("  Pages:  {}", pages.len());
            println!("  Images: {}", images);
            println!("  Videos: {}", videos);
        }
    }
}
