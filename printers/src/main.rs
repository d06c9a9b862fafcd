//! Printer Table CLI - render printer listings offline
//!
//! # Commands
//!
//! ```bash
//! printer-table render printers_2024-05.csv -o index.html   # Standalone page
//! printer-table table printers_2024-05.csv                  # Table fragment only
//! printer-table parse printers_2024-05.csv                  # Rows as JSON
//! printer-table check-ip 10.0.0.5 256.1.1.1                 # IPv4 link check
//! printer-table file-name --offset-days 5                   # Current listing name
//! ```
//!
//! # Environment
//!
//! Read from the process or a `.env` file:
//!
//! - `FOUNDPRINTERS_DIR` - listing directory (default `foundprinters`)
//! - `PRINTERS_FILENAME_OFFSET_DAYS` - default for `--offset-days` (default `0`)
//! - `PRINTERS_MONTH` - default for `--month` (`MM-YYYY`)

use chrono::Local;
use clap::{Parser, Subcommand};
use printer_table::{
    is_valid_ip, listing_path, parse_listing_file, read_listing, render_csv, render_page,
    PageError, PageResult, RenderOptions, FOUNDPRINTERS_DIR,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "printer-table")]
#[command(about = "Render printer listing CSV files as linked HTML tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a listing as a standalone HTML page
    Render {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Filename label (default: input file name)
        #[arg(short, long)]
        label: Option<String>,

        /// Escape markup in cell text
        #[arg(long)]
        escape: bool,
    },

    /// Render only the table fragment
    Table {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Escape markup in cell text
        #[arg(long)]
        escape: bool,
    },

    /// Split a listing and output rows as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check whether values would be linked as IPv4 addresses
    CheckIp {
        /// Values to check
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Print the listing path for a month
    FileName {
        /// Listing directory
        #[arg(short, long, env = "FOUNDPRINTERS_DIR", default_value = FOUNDPRINTERS_DIR)]
        dir: String,

        /// Month override (MM-YYYY)
        #[arg(short, long, env = "PRINTERS_MONTH")]
        month: Option<String>,

        /// Days subtracted from the date before naming
        #[arg(long, env = "PRINTERS_FILENAME_OFFSET_DAYS", allow_hyphen_values = true)]
        offset_days: Option<String>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            label,
            escape,
        } => cmd_render(&input, output.as_deref(), label, escape),

        Commands::Table {
            input,
            output,
            escape,
        } => cmd_table(&input, output.as_deref(), escape),

        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),

        Commands::CheckIp { values } => cmd_check_ip(&values),

        Commands::FileName {
            dir,
            month,
            offset_days,
        } => cmd_file_name(&dir, month.as_deref(), offset_days.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn options(escape: bool) -> RenderOptions {
    if escape {
        RenderOptions::escaped()
    } else {
        RenderOptions::default()
    }
}

fn default_label(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    label: Option<String>,
    escape: bool,
) -> PageResult<()> {
    eprintln!("📄 Rendering: {}", input.display());

    let (text, encoding) = read_listing(input)?;
    eprintln!("   Encoding: {}", encoding);

    let label = label.unwrap_or_else(|| default_label(input));
    let table = render_csv(&text, &options(escape));
    let page = render_page(&label, &table);

    write_output(&page, output)?;
    eprintln!("✅ Rendered {} rows", text.split('\n').count());
    Ok(())
}

fn cmd_table(input: &Path, output: Option<&Path>, escape: bool) -> PageResult<()> {
    let (text, _) = read_listing(input)?;
    let table = render_csv(&text, &options(escape));
    write_output(&table, output)
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> PageResult<()> {
    eprintln!("📄 Parsing: {}", input.display());

    let result = parse_listing_file(input)?;
    eprintln!("   Encoding: {}", result.encoding);
    eprintln!("   Rows: {}", result.table.len());
    eprintln!("   Widest row: {} cells", result.table.width());
    if result.table.is_ragged() {
        eprintln!("   ⚠️  Rows have differing cell counts");
    }

    let json = serde_json::to_string_pretty(&result.table)?;
    write_output(&json, output)
}

fn cmd_check_ip(values: &[String]) -> PageResult<()> {
    let mut invalid = 0;

    for value in values {
        if is_valid_ip(value) {
            println!("{}: valid", value);
        } else {
            invalid += 1;
            println!("{}: invalid", value);
        }
    }

    if invalid > 0 {
        return Err(PageError::InvalidAddresses(invalid));
    }

    Ok(())
}

fn cmd_file_name(dir: &str, month: Option<&str>, offset_days: Option<&str>) -> PageResult<()> {
    let path = listing_path(dir, month, offset_days, Local::now().date_naive())?;
    println!("{}", path.display());
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> PageResult<()> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
