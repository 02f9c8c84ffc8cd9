use std::fs;
use std::path::PathBuf;

use clap::Parser;
use pets_api::Application;

#[derive(Parser)]
#[command(name = "gen-openapi")]
#[command(about = "Print the pets-api OpenAPI document without starting the server", long_about = None)]
struct Cli {
    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let entry = Application::entry_point();
    let json = entry.document().to_pretty_json()?;

    match cli.output {
        Some(path) => {
            fs::write(&path, json)?;
            eprintln!("Wrote {} to {}", entry.metadata.document_name(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
