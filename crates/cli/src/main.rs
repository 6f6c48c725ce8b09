use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{
    ClientConfig, FilePerkSource, HttpPerkSource, PerkCollection, PerkSource, DEFAULT_BASE_URL,
    DEFAULT_PERKS_PATH,
};
use page::{Listing, ListingPage, PageView};
use pipeline::MerchantSelection;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Perks - public perk directory
#[derive(Parser)]
#[command(name = "perks")]
#[command(about = "Browse and filter the public perk directory", long_about = None)]
struct Cli {
    /// Base URL of the perks backend
    #[arg(long, env = "PERKS_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Path of the "all public perks" endpoint
    #[arg(long, env = "PERKS_PATH", default_value = DEFAULT_PERKS_PATH)]
    perks_path: String,

    /// Read perks from a JSON file instead of the backend
    #[arg(long)]
    file: Option<PathBuf>,

    /// Give up on the backend after this many seconds (default: wait forever)
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List perks, optionally filtered by title and merchant
    List {
        /// Case-insensitive substring of the perk title
        #[arg(long)]
        name: Option<String>,

        /// Exact merchant name (omit for all merchants)
        #[arg(long)]
        merchant: Option<String>,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the merchants available for filtering
    Merchants,
}

/// Where the CLI reads perks from
enum CliSource {
    Http(HttpPerkSource),
    File(FilePerkSource),
}

impl PerkSource for CliSource {
    fn name(&self) -> &str {
        match self {
            CliSource::Http(source) => source.name(),
            CliSource::File(source) => source.name(),
        }
    }

    async fn fetch_all(&self) -> data_loader::Result<PerkCollection> {
        match self {
            CliSource::Http(source) => source.fetch_all().await,
            CliSource::File(source) => source.fetch_all().await,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = build_source(&cli)?;
    let page = ListingPage::new(source);

    // Status lines go to stderr so `--json` output stays clean
    eprintln!("Loading perks...");
    let start = Instant::now();
    page.activate().await;
    let listing = ready_listing(page.view())?;
    eprintln!(
        "{} Loaded {} perks in {:?}",
        "✓".green(),
        listing.total,
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            name,
            merchant,
            json,
        } => handle_list(&page, name, merchant, json)?,
        Commands::Merchants => handle_merchants(&listing),
    }

    Ok(())
}

fn build_source(cli: &Cli) -> Result<CliSource> {
    if let Some(path) = &cli.file {
        return Ok(CliSource::File(FilePerkSource::new(path)));
    }

    let mut config = ClientConfig::new(&cli.api_url).with_perks_path(&cli.perks_path);
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let source = HttpPerkSource::new(&config).context("Failed to configure perks backend")?;
    Ok(CliSource::Http(source))
}

/// Turn a page view into a listing, or explain why there is none
fn ready_listing(view: PageView) -> Result<Listing> {
    match view {
        PageView::Ready(listing) => Ok(listing),
        PageView::Failed(err) => {
            eprintln!("{} Could not load perks", "✗".red());
            Err(anyhow::Error::new(err).context("Failed to load perks"))
        }
        PageView::Loading | PageView::Unmounted => Err(anyhow!("Perk directory is not loaded")),
    }
}

/// Handle the 'list' command
fn handle_list<S: PerkSource + 'static>(
    page: &ListingPage<S>,
    name: Option<String>,
    merchant: Option<String>,
    json: bool,
) -> Result<()> {
    if let Some(name) = name {
        page.set_name_query(name);
    }
    if let Some(merchant) = merchant {
        page.select_merchant(MerchantSelection::from_option_value(&merchant));
    }

    let listing = ready_listing(page.view())?;

    if json {
        let output = serde_json::to_string_pretty(&listing).context("Failed to encode listing")?;
        println!("{}", output);
    } else {
        print_listing(&listing);
    }
    Ok(())
}

/// Handle the 'merchants' command
fn handle_merchants(listing: &Listing) {
    println!("{}", "Merchants:".bold().blue());
    for option in &listing.merchant_options {
        println!("{}{} ({} perks)", "• ".green(), option.label, option.count);
    }
}

/// Helper function to format and print a listing
fn print_listing(listing: &Listing) {
    println!("{}", "Perk Directory:".bold().blue());

    if listing.visible.is_empty() {
        println!("  No perks match the current filters.");
    }

    for (rank, perk) in listing.visible.iter().enumerate() {
        let merchant = if perk.merchant.is_empty() {
            "unknown merchant".dimmed().to_string()
        } else {
            perk.merchant.cyan().to_string()
        };
        println!(
            "{}. {} [{}] {}",
            (rank + 1).to_string().green(),
            perk.title,
            merchant,
            format!("#{}", perk.id).dimmed()
        );
        if let Some(description) = perk.attributes.get("description").and_then(|d| d.as_str()) {
            println!("   {}", description);
        }
    }

    println!("{}", listing.summary.to_string().bold());
}
