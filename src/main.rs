//! Notebook Configurator - Main entry point
//!
//! Launches the interactive configurator, or runs one of the headless
//! commands against the same catalog and state machine.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use notebook_configurator::cli::{Cli, Commands};
use notebook_configurator::options::value_from_text;
use notebook_configurator::{
    App, AttributeType, Catalog, CatalogLoader, CatalogSource, Configurator, SelectionOutcome,
    Settings, derive_options,
};

/// Initialize the tracing subscriber.
///
/// The interactive screen owns the terminal, so without a log file its logs
/// are discarded rather than written over the alternate screen.
fn init_logging(cli: &Cli) -> Result<()> {
    let filter = |default: &str| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if cli.is_interactive() => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_writer(std::io::sink)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli)?;
    info!("Notebook configurator starting up");

    let settings = Settings::load_or_default(cli.config.as_deref())?;
    debug!("Settings loaded: {:?}", settings);
    let source = cli.catalog_source(&settings);

    match &cli.command {
        None | Some(Commands::Run) => run_tui(settings, source)?,
        Some(Commands::Validate { catalog }) => validate_catalog(catalog),
        Some(Commands::Options) => print_options(source),
        Some(Commands::Quote { color, layout }) => {
            print_quote(&settings, source, color.as_deref(), layout.as_deref())
        }
        Some(Commands::InitConfig { path, force }) => init_config(path, *force)?,
    }

    Ok(())
}

/// Run the interactive configurator
fn run_tui(settings: Settings, source: CatalogSource) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(settings, source);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result.map_err(Into::into)
}

/// Strictly parse and check a catalog file
fn validate_catalog(path: &Path) {
    info!("Validating catalog file: {:?}", path);
    let catalog = match Catalog::load_from_file(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            eprintln!("✗ Failed to load catalog {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let issues = catalog.validate();
    if issues.is_empty() {
        println!(
            "✓ Catalog is valid: {} variants, {} colours, {} layouts",
            catalog.len(),
            derive_options(&catalog, AttributeType::CoverColour).len(),
            derive_options(&catalog, AttributeType::PaperType).len()
        );
    } else {
        eprintln!("✗ Catalog has {} issue(s):", issues.len());
        for issue in &issues {
            eprintln!("  - {}", issue);
        }
        std::process::exit(1);
    }
}

/// List derived options
fn print_options(source: CatalogSource) {
    let catalog = CatalogLoader::new(source).load();
    if catalog.is_empty() {
        println!("No product found");
        return;
    }

    for (title, attr_type, prefix) in [
        ("Colours", AttributeType::CoverColour, "color"),
        ("Layouts", AttributeType::PaperType, "layout"),
    ] {
        println!("{}:", title);
        for option in derive_options(&catalog, attr_type) {
            let label = option.label.unwrap_or_default();
            let value = option.value.map(|v| v.to_string()).unwrap_or_default();
            println!("  {:<12} {:<12} {}-{}", value, label, prefix, label);
        }
    }
}

/// Run the state machine headlessly and print what the screen would show
fn print_quote(
    settings: &Settings,
    source: CatalogSource,
    color: Option<&str>,
    layout: Option<&str>,
) {
    let mut configurator = Configurator::with_catalog(
        settings.product_label.clone(),
        CatalogLoader::new(source).load(),
    );
    if !configurator.has_product() {
        println!("No product found");
        return;
    }

    let mut outcome = None;
    if let Some(text) = color {
        let value = value_from_text(configurator.colour_options(), text);
        outcome = Some(configurator.select_color(value));
    }
    if let Some(text) = layout {
        let value = value_from_text(configurator.layout_options(), text);
        outcome = Some(configurator.select_layout(value));
    }

    println!("{}", configurator.heading());
    for cell in configurator.summary(&settings.currency_symbol).cells {
        println!("  {:<8} {:<20} [{}]", cell.field, cell.text, cell.test_id);
    }

    if outcome == Some(SelectionOutcome::Unmatched) {
        eprintln!("note: this combination is not in the catalog");
    }
}

/// Write default settings
fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Settings::default().save_to_file(path)?;
    println!("✓ Settings written to {}", path.display());
    Ok(())
}
