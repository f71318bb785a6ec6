//! apidocs-dump — print a summary of a generated documentation table.

use anyhow::{Context, Result};
use clap::Parser;
use scrapedocs::output::msgpack;
use scrapedocs::ApiTable;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apidocs-dump", about = "Summarize a scraped API documentation table")]
struct Cli {
    /// MessagePack table written by scrapedocs
    file: PathBuf,

    /// API to print in full
    #[arg(short = 'k', long, default_value = "ImportFile")]
    key: String,

    /// Number of keys to list
    #[arg(short = 'n', long, default_value_t = 20)]
    limit: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let bytes =
        fs::read(&cli.file).with_context(|| format!("failed to read {}", cli.file.display()))?;
    let table = msgpack::decode(&bytes)
        .with_context(|| format!("failed to decode {}", cli.file.display()))?;
    print!("{}", summarize(&table, &cli.key, cli.limit));
    Ok(())
}

fn summarize(table: &ApiTable, key: &str, limit: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total APIs: {}", table.len());

    let _ = writeln!(out, "\nFirst {} keys:", limit);
    for (name, api) in table.iter().take(limit) {
        let desc: String = api
            .description
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(60)
            .collect();
        let _ = writeln!(out, "  {}: {}...", name, desc);
    }

    let _ = writeln!(out, "\nSample - {}:", key);
    match table.get(key) {
        Some(api) => {
            let params: Vec<&str> = api.parameters.keys().map(String::as_str).collect();
            let _ = writeln!(
                out,
                "  Description: {}",
                api.description.as_deref().unwrap_or_default()
            );
            let _ = writeln!(out, "  Parameters: {}", params.join(", "));
            let _ = writeln!(
                out,
                "  ReturnValue: {}",
                api.return_value.as_deref().unwrap_or_default()
            );
        }
        None => {
            let _ = writeln!(out, "  (not found)");
        }
    }
    out
}
