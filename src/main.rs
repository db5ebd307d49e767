#![doc = include_str!("../README.md")]

use clap::Parser;
use core::error::Error;
use log::LevelFilter;
use sprig::{Config, Example, RenderFormat, read_config, render_element};
use std::{io::stdout, path::PathBuf, process::exit};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// A configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Selects an element tree to render.
    #[arg(long, value_enum, default_value_t)]
    example: Example,
    /// Sets an output format.
    #[arg(long, value_enum, default_value_t)]
    format: RenderFormat,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        exit(1)
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        config,
        example,
        format,
        verbose,
    } = Arguments::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let config = match config {
        Some(path) => read_config(&path)?,
        None => Config::default(),
    };

    render_element(&config, &example.element(), format, &mut stdout().lock())?;

    Ok(())
}
