//! Main entry point for the mcpacker packaging tool

use mcpacker::manifest::{self, PackManifest};
use mcpacker::{packager, PackConfig};

fn main() -> std::process::ExitCode {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    let config = PackConfig::default();

    println!("Packaging .mcpack add-on...");
    packager::pack(&config)?;

    if let Some(m) = PackManifest::load(&config.source_dir)? {
        manifest::write_distribution_copies(&config.output_path, &m)?;
    }

    println!("Pack done! At: {}", config.output_path.display());
    Ok(())
}
