use clap::Parser;
use gradebook::core::config::{self, CliOverrides, Diagnostics};
use gradebook::core::roster::IdScheme;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gradebook", about = "Keyboard-driven student roster")]
struct Args {
    /// Config file to read instead of ~/.gradebook/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// File to write the log to
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// How new students are numbered
    #[arg(long, value_enum)]
    id_scheme: Option<IdScheme>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // No logger exists yet; anything worth saying is held until it does.
    let mut diagnostics = Diagnostics::default();
    let loaded = match &args.config {
        Some(path) => config::load_config_from(path, &mut diagnostics),
        None => config::load_config(&mut diagnostics),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        eprintln!("Ignoring config: {e}");
        diagnostics.warn(format!("Ignoring config: {e}"));
        config::GradebookConfig::default()
    });

    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level,
            log_file: args.log_file,
            id_scheme: args.id_scheme,
        },
        &mut diagnostics,
    );

    // The terminal belongs to the TUI, so the log goes to a file.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
    diagnostics.replay();

    log::info!(
        "Gradebook starting up (id scheme: {:?}, log: {})",
        resolved.id_scheme,
        resolved.log_file.display()
    );

    gradebook::tui::run(resolved)
}
