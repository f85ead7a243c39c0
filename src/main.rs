use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process;

use manifest_gen::GenerateOptions;

/// Manifest Generator - aggregate dictionary metadata for the shared i18n repository
#[derive(Parser, Debug)]
#[command(name = "manifest-gen")]
#[command(author, version, long_about = None)]
#[command(help_template = "{name} {version}\n{about}\n\nUSAGE:\n    {usage}\n\n{all-args}")]
struct Cli {
    /// Repository root containing the plugins/ and themes/ directories
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    match manifest_gen::run_generate(&GenerateOptions::new(cli.root)) {
        Ok(manifest) => {
            println!("{}", "Manifest generated successfully.".green());
            println!(
                "  {} plugin dictionaries, {} theme dictionaries",
                manifest.plugins.len(),
                manifest.themes.len()
            );
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
