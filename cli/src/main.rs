//! unsheet CLI - spreadsheet table extraction tool
//!
//! A command-line tool for converting tables from XLSX, XLS, XLSB, and ODS
//! workbooks to CSV.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use unsheet::render::JsonFormat;
use unsheet::{ConvertOptions, CsvOptions};

/// Spreadsheet table extraction to CSV
#[derive(Parser)]
#[command(
    name = "unsheet",
    version,
    about = "Extract spreadsheet tables to CSV",
    long_about = "unsheet - spreadsheet table extraction tool.\n\n\
                  Converts one table of an XLSX, XLS, XLSB, or ODS workbook\n\
                  (by default the first table of the first sheet) to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a workbook table to CSV
    #[command(visible_alias = "csv")]
    Convert {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sheet to read (0-based)
        #[arg(long, default_value_t = 0)]
        sheet: usize,

        /// Table within the sheet (0-based)
        #[arg(long, default_value_t = 0)]
        table: usize,

        /// Field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// Terminate records with \r\n instead of \n
        #[arg(long)]
        crlf: bool,
    },

    /// Show workbook information
    Info {
        /// Input file path
        input: PathBuf,
    },

    /// Dump the parsed workbook as JSON
    Json {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            sheet,
            table,
            delimiter,
            crlf,
        } => {
            if !delimiter.is_ascii() {
                return Err("delimiter must be a single ASCII character".into());
            }
            let options = ConvertOptions::new()
                .with_sheet(sheet)
                .with_table(table)
                .with_csv(CsvOptions::new().with_delimiter(delimiter as u8).with_crlf(crlf));

            let pb = create_spinner("Parsing workbook...");
            let document = unsheet::parse_file(&input)?;

            match output {
                Some(path) => {
                    pb.set_message("Writing CSV...");
                    let report = unsheet::convert_document(&document, &path, &options)?;
                    pb.finish_and_clear();
                    println!(
                        "{} Converted to CSV: {} ({} rows x {} columns)",
                        "✓".green().bold(),
                        path.display(),
                        report.rows,
                        report.columns
                    );
                }
                None => {
                    let csv = unsheet::document_to_csv(&document, &options)?;
                    pb.finish_and_clear();
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    write!(handle, "{}", csv)?;
                }
            }
        }

        Commands::Info { input } => {
            let pb = create_spinner("Analyzing workbook...");

            let format = unsheet::detect_format_from_path(&input)?;
            let document = unsheet::parse_file(&input)?;

            pb.finish_and_clear();

            println!("{}", "Workbook Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("{}: {}", "Format".bold(), format);
            println!("{}: {}", "Sheets".bold(), document.sheet_count());

            for sheet in &document.sheets {
                match sheet.first_table() {
                    Some(table) => println!(
                        "  {} {} ({} rows x {} columns, {} non-empty cells)",
                        "•".bold(),
                        sheet.name,
                        table.row_count(),
                        table.column_count(),
                        table.non_empty_cell_count()
                    ),
                    None => println!("  {} {} (empty)", "•".bold(), sheet.name),
                }
            }
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            let pb = create_spinner("Parsing workbook...");

            let document = unsheet::parse_file(&input)?;
            pb.set_message("Rendering JSON...");

            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = unsheet::render::to_json(&document, format)?;

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!(
                    "{} Converted to JSON: {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "unsheet".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Spreadsheet table extraction to CSV");
    println!();
    println!("Supported formats: XLSX, XLS, XLSB, ODS");
    println!("Repository: https://github.com/unsheet/unsheet");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
