use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Write};
use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;
use crate::cli::Args;
use crate::config::Config;
use crate::usernamer::Usernamer;

mod abbrev;
mod cli;
mod config;
mod error;
mod generator;
mod permute;
mod usernamer;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    init_logging();

    let args = Args::parse();

    let mut usernamer = if args.no_config {
        Usernamer::with_config(Config::default())
    } else {
        Usernamer::new(args.config.as_deref())?
    };
    if args.lowercase {
        usernamer.force_lowercase();
    }

    let candidates = usernamer.candidates(&args.name)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("Failed to create output file {}", path.display()))?;
            write_candidates(BufWriter::new(file), &candidates)
                .wrap_err("Failed to write candidates")?;
        }
        None => {
            let stdout = BufWriter::new(io::stdout().lock());
            match write_candidates(stdout, &candidates) {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    tracing::debug!("Output closed early");
                }
                result => result.wrap_err("Failed to write candidates")?,
            }
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("USERNAMER_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_candidates<W: Write>(mut out: W, candidates: &[String]) -> io::Result<()> {
    for candidate in candidates {
        writeln!(out, "{}", candidate)?;
    }
    out.flush()
}
