//! paleoclim-tables CLI - table-understanding parser for paleoclimate data files

use clap::Parser;
use paleoclim_tables::{Table, TableParser};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Parses paleoclimate data-access files (NOAA Standard template or
/// free-form Non-Standard layouts) into structured tables.
#[derive(Parser, Debug)]
#[command(name = "paleoclim-tables")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input .txt file(s) to parse
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Tab-stop width used for column math
    #[arg(long, default_value = "8")]
    tab_width: usize,

    /// Output format: text (default), json, or csv
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Show row data in addition to column names and attrs
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut parser = TableParser::new();
    parser.tab_width(args.tab_width);

    let mut exit_code = ExitCode::SUCCESS;
    let mut csv_header_printed = false;

    for file in &args.files {
        match parser.parse_path(file) {
            Ok(tables) => {
                for table in &tables {
                    match args.format {
                        OutputFormat::Text => print_text_output(file, table, args.verbose),
                        OutputFormat::Json => print_json_output(file, table, args.verbose),
                        OutputFormat::Csv => {
                            print_csv_output(file, table, &mut csv_header_printed)
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {e}", file.display());
                exit_code = ExitCode::FAILURE;
            }
        }
    }

    exit_code
}

fn print_text_output(path: &Path, table: &Table, verbose: bool) {
    println!("File: {}", path.display());
    println!("  Columns: {}", table.column_names().join(", "));
    println!("  Rows: {}", table.rows.len());
    for (key, value) in &table.attrs {
        println!("  {key}: {value}");
    }

    if verbose {
        println!("  Data:");
        for row in &table.rows {
            let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("")).collect();
            println!("    {}", cells.join(" | "));
        }
    }

    println!();
}

fn print_json_output(path: &Path, table: &Table, verbose: bool) {
    let columns = table.column_names();
    let columns_json = columns
        .iter()
        .map(|c| format!("\"{}\"", escape_json(c)))
        .collect::<Vec<_>>()
        .join(",");
    let attrs_json = table
        .attrs
        .iter()
        .map(|(k, v)| format!(r#""{}":"{}""#, escape_json(k), escape_json(v)))
        .collect::<Vec<_>>()
        .join(",");

    print!(
        r#"{{"file":"{}","columns":[{}],"num_rows":{},"attrs":{{{}}}"#,
        escape_json(&path.display().to_string()),
        columns_json,
        table.rows.len(),
        attrs_json
    );

    if verbose {
        print!(r#","rows":["#);
        for (i, row) in table.rows.iter().enumerate() {
            if i > 0 {
                print!(",");
            }
            let cells = row
                .iter()
                .map(|c| match c {
                    Some(v) => format!("\"{}\"", escape_json(v)),
                    None => "null".to_string(),
                })
                .collect::<Vec<_>>()
                .join(",");
            print!("[{cells}]");
        }
        print!("]");
    }

    println!("}}");
}

fn print_csv_output(path: &Path, table: &Table, header_printed: &mut bool) {
    if !*header_printed {
        println!("file,columns,num_rows");
        *header_printed = true;
    }
    println!(
        "{},{},{}",
        path.display(),
        table.column_names().join("|"),
        table.rows.len()
    );
}

fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
