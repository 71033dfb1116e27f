//! Tool for embedding TrueType fonts into a generated C++ header and source pair.

use std::process::ExitCode;

use chrono::Local;
use font_embedder::embed;

mod cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = cli::get_config();
    log::debug!("{config:?}");

    let generated = Local::now().naive_local();
    let report = match embed(&config, &generated) {
        Ok(report) => report,
        Err(error) if error.is_io() => {
            eprintln!("{:?}", anyhow::Error::new(error));
            return ExitCode::FAILURE;
        }
        Err(error) => {
            println!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };

    println!("Found {} .{} files", report.mappings.len(), config.extension);
    for mapping in &report.mappings {
        println!("  - {mapping}");
    }
    println!("Generated header: {}", config.output_header.display());
    println!("Generated source: {}", config.output_source.display());
    println!("{}", report.summary);

    ExitCode::SUCCESS
}
