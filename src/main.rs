use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use serde::Serialize;
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use slcat::billing;
use slcat::catalog::Session;
use slcat::config;
use slcat::error::CatalogError;

#[derive(Parser)]
#[command(
    name = "slcat",
    version,
    about = "SoftLayer billing catalog normalizer",
    long_about = r#"slcat — pull pricing and catalog metadata from the SoftLayer account API and flatten it into normalized records.

Records are printed as pretty JSON for downstream pricing catalogs and invoice-reporting jobs. Provide credentials through SL_USERNAME / SL_API_KEY environment variables or an `--env-file`.

Examples:
  1) Preset pricing across datacenters:
      slcat presets
  2) OS catalog with tiered license fees:
      slcat os --prices
  3) Last month's recurring invoice total:
      slcat invoices last
"#,
    after_help = "Use `slcat <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List instance presets with per-datacenter monthly pricing
    #[command(about = "List instance presets with per-datacenter monthly pricing", long_about = "Aggregate the per-component prices of every public cloud preset into one monthly price per datacenter. Datacenters where a preset is unavailable carry an explicit null.")]
    Presets,
    /// List the OS image catalog
    #[command(about = "List the OS image catalog", long_about = "List importable OS images with deprecated families, 32-bit variants and LAMP stacks filtered out. Pass `--prices` to join each image to its capacity-tiered monthly license fees.")]
    Os {
        /// Include capacity-tiered license pricing
        #[arg(long)]
        prices: bool,
    },
    /// List block-storage prices per datacenter
    Storage,
    /// List data-transfer prices per datacenter
    Transfer,
    /// List canonical regions
    #[command(about = "List canonical regions", long_about = "List the deduplicated datacenter regions with their countries, one per metro. Use `--json` for machine-readable output.")]
    Regions {
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the country → datacenter map
    DatacenterMap,
    /// Summarize recurring invoices
    #[command(about = "Summarize recurring invoices", long_about = "Sum the account's RECURRING invoices, either for the current month (`last`), an explicit month (`month 2026 7`), or the projected next invoice (`next`).")]
    Invoices {
        #[command(subcommand)]
        sub: InvoiceCommands,
    },
    /// Validate configuration (env vars / API credentials)
    #[command(about = "Validate configuration and ensure API connectivity.", long_about = "Validate the SL_USERNAME / SL_API_KEY environment variables, and validate the credentials by attempting to fetch the datacenter listing from the remote API.")]
    CheckConfig,
}

#[derive(Subcommand)]
enum InvoiceCommands {
    /// Sum this month's recurring invoices (billing last month's usage)
    Last,
    /// Sum recurring invoices created in a given month
    Month { year: i32, month: u32 },
    /// Show the projected next-invoice total
    Next,
}

fn print_json<T: Serialize>(value: &T) {
    let json_str = serde_json::to_string_pretty(value).unwrap_or_else(|_| "<non-json>".into());
    println!("{}", json_str);
}

fn fail(err: CatalogError) -> ! {
    eprintln!("{}", yansi::Paint::new(format!("{}", err)).red());
    process::exit(1);
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        slcat::api::set_silent(true);
    }

    config::load_env_file(cli.env_file.as_deref());
    let session = Session::from_env();

    match cli.command {
        Commands::Presets => match session.preset_records().await {
            Ok(records) => print_json(&records),
            Err(e) => fail(e),
        },
        Commands::Os { prices } => match session.os_records(prices).await {
            Ok(records) => print_json(&records),
            Err(e) => fail(e),
        },
        Commands::Storage => match session.storage_records().await {
            Ok(records) => print_json(&records),
            Err(e) => fail(e),
        },
        Commands::Transfer => match session.transfer_records().await {
            Ok(records) => print_json(&records),
            Err(e) => fail(e),
        },
        Commands::Regions { json } => match session.region_records().await {
            Ok(records) => {
                if json {
                    print_json(&records);
                    return;
                }
                let mut table = Table::new();
                table.load_preset(presets::UTF8_FULL);
                table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
                table.set_content_arrangement(ContentArrangement::Dynamic);
                if let Some((Width(w), _)) = terminal_size() {
                    table.set_width(w - 4);
                }
                table.set_header(vec!["Region", "Country", "Provider"]);
                for record in &records {
                    table.add_row(vec![&record.region, &record.country, &record.provider]);
                }
                println!("\n{table}\n");
            }
            Err(e) => fail(e),
        },
        Commands::DatacenterMap => match session.datacenter_map().await {
            Ok(map) => print_json(&map),
            Err(e) => fail(e),
        },
        Commands::Invoices { sub } => match sub {
            InvoiceCommands::Last => match billing::last_recurring_summary(session.client()).await {
                Ok(summary) => print_json(&summary),
                Err(e) => fail(e),
            },
            InvoiceCommands::Month { year, month } => {
                match billing::recurring_summary(session.client(), Some((year, month))).await {
                    Ok(summary) => print_json(&summary),
                    Err(e) => fail(e),
                }
            }
            InvoiceCommands::Next => match billing::next_invoice_total(session.client()).await {
                Ok(total) => println!("{}", total),
                Err(e) => fail(e),
            },
        },
        Commands::CheckConfig => {
            let mut ok = true;
            if session.client().username().trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("SL_USERNAME is not configured").red());
                ok = false;
            }
            if session.client().api_key().trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("SL_API_KEY is not configured").red());
                ok = false;
            }
            if !ok {
                process::exit(1);
            }
            match session.region_records().await {
                Ok(_) => {
                    println!(
                        "{}",
                        yansi::Paint::new("Configuration looks valid (datacenters returned)")
                            .green()
                    );
                }
                Err(e) => {
                    eprintln!(
                        "{}: {}",
                        yansi::Paint::new("Configuration appears invalid").red(),
                        e
                    );
                    process::exit(1);
                }
            }
        }
    }
}
