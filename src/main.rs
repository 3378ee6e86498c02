use clap::Parser;
use readable::input;
use readable::output;
use readable::units;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "readable")]
#[command(version, about = "Rewrite unit-library template names into readable units", long_about = None)]
struct Cli {
    /// Input files, concatenated in order (default: stdin; "-" also reads stdin)
    files: Vec<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match rewrite_sources(&cli.files) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn rewrite_sources(files: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    let contents = input::read_sources(files)?;
    let rewritten = units::rewrite_bytes(&contents);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::write_output(&mut out, &rewritten)?;

    Ok(())
}
