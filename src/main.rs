//! drawer-labels - CLI tool to print drawer labels.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use drawer_labels::config::{DEFAULT_INKSCAPE, DEFAULT_OUTPUT, DEFAULT_PDFUNITE};
use drawer_labels::{
    load_catalog, validate_catalog, Catalog, DocumentAssembler, InkscapeConverter, PdfUnite,
    RegistryCollection,
};

/// Print labels for small-parts storage drawers.
#[derive(Parser, Debug)]
#[command(name = "drawer-labels")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Drawer keys to print, in order
    keys: Vec<String>,

    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Output PDF file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Directory for intermediate page files
    #[arg(short, long, default_value = ".")]
    work_dir: PathBuf,

    /// SVG to PDF converter program
    #[arg(long, default_value = DEFAULT_INKSCAPE)]
    inkscape: String,

    /// Use the Inkscape 0.9x command line
    #[arg(long)]
    legacy_inkscape: bool,

    /// PDF merge program
    #[arg(long, default_value = DEFAULT_PDFUNITE)]
    pdfunite: String,

    /// List every drawer in the catalog instead of printing
    #[arg(long)]
    list: bool,

    /// Validate the catalog only, don't print
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load the catalog
    let catalog = match &args.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin().context("Failed to parse built-in catalog")?,
    };

    info!(
        "Loaded {} registr(ies), {} drawer(s)",
        catalog.registries.len(),
        catalog.num_drawers()
    );

    // Validate
    let validation = validate_catalog(&catalog);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Catalog validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let mut collection = catalog.build()?;

    if args.list {
        print_listing(&collection);
        return Ok(());
    }

    let converter = InkscapeConverter {
        program: args.inkscape,
        legacy: args.legacy_inkscape,
    };
    let merger = PdfUnite {
        program: args.pdfunite,
    };
    let assembler = DocumentAssembler::new(&converter, &merger, &args.work_dir, &args.output);

    assembler
        .assemble(&mut collection, args.keys.as_slice())
        .context("Failed to print labels")?;

    Ok(())
}

/// Print every registry and drawer, bottom lines included.
fn print_listing(collection: &RegistryCollection) {
    for registry in collection.registries() {
        let config = registry.config();
        println!(
            "{} ({} x {} x {} mm, {} per page)",
            config.name, config.length, config.width, config.height, config.page_capacity
        );
        for drawer in registry.drawers() {
            if drawer.has_bottom() {
                println!(
                    "  {:<24} {}  [{}]",
                    drawer.key,
                    drawer.front.join(" / "),
                    drawer.bottom.join(", ")
                );
            } else {
                println!("  {:<24} {}", drawer.key, drawer.front.join(" / "));
            }
        }
    }
}
