mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::investment::InvestCompareArgs;
use commands::loan::{AmortizeArgs, AnalyzeArgs, RealValueArgs};
use commands::reference::LendersArgs;

/// Loan affordability and inflation analytics
#[derive(Parser)]
#[command(
    name = "loan",
    version,
    about = "Loan affordability and inflation analytics",
    long_about = "A CLI for fixed-rate loan analytics with decimal precision. \
                  Computes annuity payments, inflation-adjusted present values of \
                  the payment stream, and lump-sum investment comparisons against \
                  indicative lender and asset reference tables."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly annuity payment and nominal loan totals
    Amortize(AmortizeArgs),
    /// Inflation-adjusted present value of the payment stream
    RealValue(RealValueArgs),
    /// Compare investing the principal against the loan's total cost
    InvestCompare(InvestCompareArgs),
    /// Full analysis: amortisation, real values and investment comparison
    Analyze(AnalyzeArgs),
    /// List the indicative lender-rate table for a product
    Lenders(LendersArgs),
    /// List the indicative asset CAGR table
    Assets,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Amortize(args) => commands::loan::run_amortize(args),
        Commands::RealValue(args) => commands::loan::run_real_value(args),
        Commands::InvestCompare(args) => commands::investment::run_invest_compare(args),
        Commands::Analyze(args) => commands::loan::run_analyze(args),
        Commands::Lenders(args) => commands::reference::run_lenders(args),
        Commands::Assets => commands::reference::run_assets(),
        Commands::Version => {
            println!("loan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
