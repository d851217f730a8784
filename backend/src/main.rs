//! Cardload CLI - Convert CSV card decks to JSON
//!
//! ```bash
//! cardload convert                       # data.csv -> data.json
//! cardload convert deck.csv -o deck.json
//! cardload parse deck.csv                # Dump raw rows as JSON
//! cardload check deck.json               # Verify a produced document
//! ```

use clap::{Parser, Subcommand};
use cardload::report::{log_error, log_info, log_info_indent, log_success, log_warning};
use cardload::transform::{read_input, write_output};
use cardload::{convert_file, parse_rows, verify_document, ConvertOptions, REPORTER};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cardload")]
#[command(about = "Convert CSV card decks to JSON", long_about = None)]
struct Cli {
    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CSV deck to a JSON document (default command)
    Convert {
        /// Input CSV file (default: $CARDLOAD_INPUT or data.csv)
        input: Option<PathBuf>,

        /// Output JSON file (default: $CARDLOAD_OUTPUT or data.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a CSV file and print its raw rows as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a JSON document produced by `convert`
    Check {
        /// Input JSON file
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    REPORTER.set_quiet(cli.quiet);

    let command = cli.command.unwrap_or(Commands::Convert {
        input: None,
        output: None,
    });

    let result = match command {
        Commands::Convert { input, output } => cmd_convert(input, output),
        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),
        Commands::Check { input } => cmd_check(&input),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ConvertOptions::from_env().with_overrides(input, output);
    log_info(format!("Processing: {}", options.input.display()));

    let summary = convert_file(&options)?;
    REPORTER.transcoded(&summary.transcoded);
    REPORTER.summary(&summary);

    Ok(())
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    log_info(format!("Parsing CSV: {}", input.display()));

    let text = read_input(input)?;
    let parsed = parse_rows(&text)?;
    log_info_indent(format!("Columns: {}", parsed.headers.join(", ")), 1);
    log_success(format!("Parsed {} rows", parsed.rows.len()));

    let rows: Vec<Value> = parsed.rows.iter().map(|row| row.to_json()).collect();
    let json = serde_json::to_string_pretty(&rows)?;
    match output {
        Some(path) => {
            write_output(path, &json)?;
            log_info(format!("Output written to: {}", path.display()));
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log_info(format!("Checking: {}", input.display()));

    let text = read_input(input)?;
    let cards = verify_document(&text)?;

    let mut seen = std::collections::HashSet::new();
    let duplicates = cards.iter().filter(|c| !seen.insert(c.id)).count();
    if duplicates > 0 {
        log_warning(format!("{} cards share an id with an earlier card", duplicates));
    }

    log_success(format!("{} cards, canonical layout", cards.len()));
    Ok(())
}
