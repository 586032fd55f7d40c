//! bio - inspect files through a bytesio stream
//!
//! Main CLI entry point. Every subcommand loads its input into a
//! `ByteBuffer` and reports what the stream sees.

use anyhow::{bail, Context, Result};
use bytesio::config::CONFIG_FILE;
use bytesio::{logging, ByteBuffer, BytesioConfig, ReadSize};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bio")]
#[command(version)]
#[command(about = "Inspect files through an in-memory byte stream", long_about = None)]
struct Cli {
    /// Config file (default: search for bytesio.toml upwards from the cwd)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the input in fixed-size chunks and print "offset<TAB>length" per chunk
    Chunks {
        /// Input file, or "-" for stdin
        input: PathBuf,

        /// Chunk size in bytes, or "all" (default from config)
        #[arg(short, long)]
        size: Option<String>,
    },

    /// Print the effective configuration
    Config {
        /// Write a default bytesio.toml into the current directory
        #[arg(long)]
        init: bool,
    },

    /// Print every line of the input
    Lines {
        /// Input file, or "-" for stdin
        input: PathBuf,

        /// Prefix each line with its number
        #[arg(short, long)]
        number: bool,
    },

    /// Show size, capacity and line count of the loaded stream
    Stat {
        /// Input file, or "-" for stdin
        input: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct StatReport {
    input: String,
    size: usize,
    capacity: usize,
    lines: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BytesioConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BytesioConfig::load_from_cwd().context("Failed to load config")?,
    };
    logging::init_logging(&config.log);

    match cli.command {
        Commands::Chunks { input, size } => {
            let size = size.unwrap_or_else(|| config.cli.chunk_size.clone());
            cmd_chunks(&config, &input, &size)
        }
        Commands::Config { init } => cmd_config(&config, init),
        Commands::Lines { input, number } => {
            cmd_lines(&config, &input, number || config.cli.number_lines)
        }
        Commands::Stat { input, json } => cmd_stat(&config, &input, json),
    }
}

/// Load a file (or stdin for "-") into a fresh stream positioned at its start.
fn load_buffer(config: &BytesioConfig, input: &Path) -> Result<ByteBuffer> {
    let bytes = if input == Path::new("-") {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        bytes
    } else {
        fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?
    };

    let mut buffer = ByteBuffer::with_config(&config.buffer);
    buffer
        .reinit(&bytes)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    Ok(buffer)
}

fn cmd_chunks(config: &BytesioConfig, input: &Path, size: &str) -> Result<()> {
    let size: ReadSize = size.parse()?;
    let mut buffer = load_buffer(config, input)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    loop {
        let offset = buffer.position()?;
        let chunk = buffer.read(size)?;
        if chunk.is_empty() {
            break;
        }
        writeln!(out, "{}\t{}", offset, chunk.len())?;
    }
    Ok(())
}

fn cmd_config(config: &BytesioConfig, init: bool) -> Result<()> {
    if !init {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        bail!("{} already exists", CONFIG_FILE);
    }
    BytesioConfig::default().save(path)?;
    println!("Wrote {}", CONFIG_FILE);
    Ok(())
}

fn cmd_lines(config: &BytesioConfig, input: &Path, number: bool) -> Result<()> {
    let mut buffer = load_buffer(config, input)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (i, line) in buffer.iter_lines()?.enumerate() {
        if number {
            write!(out, "{:>6}\t", i + 1)?;
        }
        out.write_all(line)?;
    }
    out.flush()?;
    Ok(())
}

fn cmd_stat(config: &BytesioConfig, input: &Path, json: bool) -> Result<()> {
    let mut buffer = load_buffer(config, input)?;
    let lines = buffer.iter_lines()?.count();
    let report = StatReport {
        input: input.display().to_string(),
        size: buffer.size()?,
        capacity: buffer.capacity()?,
        lines,
    };
    buffer.close();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("input:    {}", report.input);
        println!("size:     {}", report.size);
        println!("capacity: {}", report.capacity);
        println!("lines:    {}", report.lines);
    }
    Ok(())
}
