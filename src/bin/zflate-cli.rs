//! zflate-cli - Command-line interface for zflate
//!
//! A command-line tool for compressing files into zlib-wrapped DEFLATE
//! streams and inspecting the resulting stream headers.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use zflate::{compress_bytes, engine_constants, DEFAULT_COMPRESSION};

#[derive(Parser)]
#[command(name = "zflate-cli")]
#[command(about = "A CLI tool for zlib/DEFLATE compression")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a zlib stream
    Compress {
        /// Input file to compress
        input: PathBuf,

        /// Output compressed file
        output: PathBuf,

        /// Compression level: -1 (engine default), 0 (store) through 9 (best)
        #[arg(short, long, default_value_t = DEFAULT_COMPRESSION, allow_negative_numbers = true)]
        level: i32,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Inspect the zlib header of a compressed file
    Info {
        /// Compressed file to analyze
        input: PathBuf,
    },

    /// List the engine constants this crate exports
    Constants,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            level,
            force,
        } => compress_file(&input, &output, level, force, cli.verbose, cli.quiet),
        Commands::Info { input } => show_file_info(&input, cli.verbose),
        Commands::Constants => list_constants(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn compress_file(
    input: &PathBuf,
    output: &PathBuf,
    level: i32,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    if output.exists() && !force {
        return Err(format!(
            "Output file '{}' already exists. Use --force to overwrite",
            output.display()
        )
        .into());
    }

    if verbose {
        println!(
            "Compressing '{}' to '{}' at level {}",
            input.display(),
            output.display(),
            level
        );
    }

    let start_time = Instant::now();

    let input_data = fs::read(input)?;
    let input_size = input_data.len();

    if verbose {
        println!("Input size: {} bytes", input_size);
    }

    // Show progress bar for large files
    let progress = if !quiet && input_size > 1024 * 1024 {
        let pb = ProgressBar::new(2);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Compressing...");
        Some(pb)
    } else {
        None
    };

    if let Some(ref pb) = progress {
        pb.inc(1);
    }

    let compressed_data =
        compress_bytes(&input_data, level).map_err(|e| format!("Compression failed: {}", e))?;

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Compression complete");
    }

    fs::write(output, &compressed_data)?;

    let compression_time = start_time.elapsed();
    let output_size = compressed_data.len();
    let compression_ratio = (output_size as f64 / input_size.max(1) as f64) * 100.0;

    if !quiet {
        println!("✓ Compression successful!");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes", output_size);
        println!("  Ratio:  {:.1}%", compression_ratio);
        println!("  Time:   {:.2?}", compression_time);

        if compression_ratio > 100.0 {
            println!("  Note: File expanded during compression (common for small/random data)");
        }
    }

    Ok(())
}

fn show_file_info(input: &PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    let data = fs::read(input)?;
    let file_size = data.len();

    if data.len() < 2 {
        return Err("File too small to carry a zlib header".into());
    }

    // zlib header: CMF (method + window size) then FLG (check bits, preset
    // dictionary flag, level hint).
    let cmf = data[0];
    let flg = data[1];
    let method = cmf & 0x0f;
    let cinfo = cmf >> 4;
    let header_valid = method == 8 && cinfo <= 7 && (u16::from(cmf) * 256 + u16::from(flg)) % 31 == 0;

    let level_str = match flg >> 6 {
        0 => "fastest",
        1 => "fast",
        2 => "default",
        _ => "maximum",
    };

    println!("zlib Stream Information:");
    println!("  File: {}", input.display());
    println!("  Size: {} bytes", file_size);
    println!(
        "  Method: {} ({})",
        if method == 8 { "deflate" } else { "unknown" },
        method
    );
    if method == 8 {
        println!("  Window Size: {} bytes", 1u32 << (u32::from(cinfo) + 8));
    }
    println!("  Level Hint: {}", level_str);
    println!(
        "  Preset Dictionary: {}",
        if flg & 0x20 != 0 { "yes" } else { "no" }
    );
    println!(
        "  Status: {}",
        if header_valid {
            "✓ Valid zlib header"
        } else {
            "✗ Invalid zlib header"
        }
    );

    if verbose {
        println!("  Header bytes: {:02x} {:02x}", cmf, flg);
    }

    Ok(())
}

fn list_constants() -> Result<(), Box<dyn std::error::Error>> {
    println!("Exported engine constants:");
    for (name, value) in engine_constants() {
        println!("  {:<20} {}", name, value);
    }
    Ok(())
}
