//! Valuescope CLI binary.
//!
//! Provides command-line interface for statement lookup and valuation.

mod integration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use integration::output_dir::{prepare_output_dir, report_file_name};
use polars::prelude::DataFrame;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use valuescope::output::{
    ExportFormat, Exporter, ReportBuilder, ViewOptions, format_amount,
};
use valuescope::universe::{PsxUniverse, Universe};
use valuescope::{TickerRequest, ValuationPanel, handle_compute, handle_ticker};
use valuescope_data::statements::DEFAULT_BASE_URL;
use valuescope_data::{ClientConfig, DataError, StatementClient, StatementKind};
use valuescope_valuation::{
    ValuationInput, ValuationMethod, available_methods, get_method_info,
};

#[derive(Parser)]
#[command(name = "valuescope")]
#[command(about = "Valuescope: financial statements and intrinsic valuation", long_about = None)]
#[command(version)]
struct Cli {
    /// Root URL of the statement pages
    #[arg(long, global = true, env = "VALUESCOPE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Currency label for valuation results
    #[arg(long, global = true, default_value = "PKR")]
    currency: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the ticker symbols that can be looked up
    Symbols,

    /// Describe the valuation methods
    Methods {
        /// Method name (ggm, dcf, peg); all methods when omitted
        name: Option<String>,
    },

    /// Fetch and chart the financial statements of a ticker
    Financials {
        /// Ticker symbol
        symbol: String,

        /// Statements to show (income, balance, cash, ratios); all when omitted
        #[arg(long, value_delimiter = ',', value_parser = parse_kind)]
        show: Vec<StatementKind>,

        /// Print each shown statement as a table
        #[arg(long)]
        table: bool,

        /// Export the fetched statements (csv, json, pretty-json)
        #[arg(long, value_parser = parse_format)]
        export: Option<ExportFormat>,

        /// Output directory for exports and reports
        #[arg(long)]
        out: Option<PathBuf>,

        /// Write a JSON report
        #[arg(long)]
        report: bool,
    },

    /// Compute a valuation
    Value {
        #[command(subcommand)]
        method: ValueMethod,
    },

    /// Start an interactive session
    Interactive,
}

#[derive(Subcommand)]
enum ValueMethod {
    /// Gordon Growth Model: D / (r - g)
    #[command(allow_negative_numbers = true)]
    Ggm {
        /// Expected dividend next year
        #[arg(long, default_value_t = 0.0)]
        dividend: f64,

        /// Dividend growth rate (%)
        #[arg(long, default_value_t = 0.0)]
        growth_rate: f64,

        /// Required rate of return (%)
        #[arg(long, default_value_t = 0.1)]
        required_rate: f64,
    },

    /// Five-year discounted cash flow
    #[command(allow_negative_numbers = true)]
    Dcf {
        /// Most recent free cash flow
        #[arg(long, default_value_t = 0.0)]
        recent_fcf: f64,

        /// Free cash flow growth rate (%)
        #[arg(long, default_value_t = 0.0)]
        growth_rate: f64,

        /// Discount rate (%)
        #[arg(long, default_value_t = 0.0)]
        discount_rate: f64,
    },

    /// PEG ratio: P/E divided by growth (%)
    #[command(allow_negative_numbers = true)]
    Peg {
        /// Price to earnings ratio
        #[arg(long, default_value_t = 0.0)]
        pe_ratio: f64,

        /// Earnings growth rate (%)
        #[arg(long, default_value_t = 0.0)]
        growth_rate: f64,
    },
}

impl ValueMethod {
    fn inputs(&self) -> (ValuationMethod, Vec<(&'static str, f64)>) {
        match *self {
            Self::Ggm {
                dividend,
                growth_rate,
                required_rate,
            } => (
                ValuationMethod::GordonGrowth,
                vec![
                    ("dividend", dividend),
                    ("growth_rate", growth_rate),
                    ("required_rate", required_rate),
                ],
            ),
            Self::Dcf {
                recent_fcf,
                growth_rate,
                discount_rate,
            } => (
                ValuationMethod::DiscountedCashFlow,
                vec![
                    ("recent_fcf", recent_fcf),
                    ("growth_rate", growth_rate),
                    ("discount_rate", discount_rate),
                ],
            ),
            Self::Peg {
                pe_ratio,
                growth_rate,
            } => (
                ValuationMethod::PegRatio,
                vec![("pe_ratio", pe_ratio), ("growth_rate", growth_rate)],
            ),
        }
    }
}

fn parse_kind(s: &str) -> Result<StatementKind, String> {
    s.parse().map_err(|e: DataError| e.to_string())
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse::<ExportFormat>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    integration::logging::init(cli.verbose)?;

    let config = ClientConfig {
        base_url: cli.base_url,
        ..ClientConfig::default()
    };

    match cli.command {
        Commands::Symbols => list_symbols(),
        Commands::Methods { name } => describe_methods(name.as_deref())?,
        Commands::Financials {
            symbol,
            show,
            table,
            export,
            out,
            report,
        } => {
            let client = StatementClient::with_config(config)?;
            let options = FinancialsOptions {
                show,
                table,
                export,
                out,
                report,
            };
            show_financials(&client, &symbol, &cli.currency, options).await?;
        }
        Commands::Value { method } => compute_value(&method, &cli.currency)?,
        Commands::Interactive => {
            let client = StatementClient::with_config(config)?;
            integration::interactive::run(&client, &cli.currency).await?;
        }
    }

    Ok(())
}

fn print_header(title: &str) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{:^62}║", title);
    println!("╚══════════════════════════════════════════════════════════════╝\n");
}

fn list_symbols() {
    let universe = PsxUniverse::new();
    print_header("PSX SYMBOLS");
    for chunk in universe.symbols().chunks(8) {
        let row: Vec<String> = chunk.iter().map(|s| format!("{s:<10}")).collect();
        println!("  {}", row.join("").trim_end());
    }
    println!("\n{} symbols", universe.size());
}

fn describe_methods(name: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let methods = match name {
        Some(name) => {
            vec![get_method_info(name).ok_or_else(|| format!("Unknown valuation method: {name}"))?]
        }
        None => available_methods(),
    };

    for info in methods {
        print_header(info.name);
        println!("{}", info.description);
        println!("\nFormula: {}", info.formula);
        println!("\nInputs:");
        for field in info.fields {
            println!(
                "  --{:<16} {:<32} default {}, {}",
                field.key.replace('_', "-"),
                field.label,
                field.default,
                field.bound
            );
        }
    }
    Ok(())
}

struct FinancialsOptions {
    show: Vec<StatementKind>,
    table: bool,
    export: Option<ExportFormat>,
    out: Option<PathBuf>,
    report: bool,
}

async fn show_financials(
    client: &StatementClient,
    symbol: &str,
    currency: &str,
    options: FinancialsOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let universe = PsxUniverse::new();
    let show = if options.show.is_empty() {
        StatementKind::all().to_vec()
    } else {
        options.show
    };
    let request = TickerRequest {
        symbol: symbol.to_string(),
        show: show.clone(),
    };

    print_header(&format!("FINANCIAL STATEMENTS: {}", symbol.trim().to_uppercase()));

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Fetching statements...");

    let response = match handle_ticker(client, &universe, &request, &ViewOptions::default()).await {
        Ok(response) => {
            pb.finish_with_message(format!(
                "Fetched {}/{} statements",
                response.fetch.set.len(),
                StatementKind::all().len()
            ));
            response
        }
        Err(e) => {
            pb.finish_with_message("Failed!");
            return Err(e.into());
        }
    };
    println!();
    println!("{}", response.view);

    let fetch = response.fetch;
    if options.table {
        for &kind in &show {
            if let Some(statement) = fetch.set.get(kind) {
                let df: DataFrame = statement.to_dataframe()?;
                println!("{}\n{}\n", kind.title(), df);
            }
        }
    }

    if options.export.is_none() && !options.report {
        return Ok(());
    }

    let dir = prepare_output_dir(options.out.as_deref())?;
    if let Some(format) = options.export {
        let path = dir.join(format.file_name(fetch.set.symbol()));
        fetch.set.export_to_file(&path, format)?;
        println!("Exported {} statements to {}", fetch.set.len(), path.display());
    }
    if options.report {
        let path = dir.join(report_file_name(fetch.set.symbol()));
        ReportBuilder::new()
            .currency(currency)
            .statements(&fetch.set)?
            .failures(&fetch.failures)
            .build()
            .write_to(&path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn compute_value(method: &ValueMethod, currency: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (kind, inputs) = method.inputs();
    let mut panel = ValuationPanel::new(kind);
    for (key, value) in inputs {
        panel.set(key, value)?;
    }

    let response = handle_compute(&mut panel, currency)?;

    print_header(&kind.name().to_uppercase());
    for field in kind.fields() {
        let value = panel.input().get(field.key).unwrap_or(field.default);
        println!("  {:<32} {:>14}", field.label, value);
    }
    println!();

    if let ValuationInput::Dcf(inputs) = panel.input() {
        println!("  {:<6} {:>18} {:>18}", "Year", "Future cash flow", "Present value");
        println!("  {}", "-".repeat(44));
        for row in inputs.projection() {
            println!(
                "  {:<6} {:>18} {:>18}",
                row.year,
                format_amount(row.future_cash_flow),
                format_amount(row.present_value)
            );
        }
        println!();
    }

    println!("{}", response.line);
    Ok(())
}
