//! neonscii binary: decode an image, run the glyph pipeline, deliver the
//! output to stdout or a file.
//!
//! All transport concerns live here; the pipeline itself is a pure
//! function in the library crate.

mod cli;

use clap::Parser;
use cli::{Args, Command};
use neonscii::ascii;
use neonscii::config::Config;
use std::fs;

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(Command::Palettes) = args.command {
        print_palettes();
        return Ok(());
    }

    let image_path = args
        .image
        .as_ref()
        .ok_or("no input image given (see --help)")?;
    let config = Config::load(args.config.as_deref())?;
    let target = args.resolve(&config)?;

    let bytes = fs::read(image_path)
        .map_err(|e| format!("failed to read '{}': {}", image_path.display(), e))?;
    let rendered = ascii::transcode_bytes(&bytes, &target, args.mode.into())?;

    match &args.output {
        Some(path) => fs::write(path, &rendered)
            .map_err(|e| format!("failed to write '{}': {}", path.display(), e))?,
        None => println!("{}", rendered),
    }
    Ok(())
}

fn print_palettes() {
    for charset in [
        ascii::Charset::Classic,
        ascii::Charset::Standard,
        ascii::Charset::Blocks,
        ascii::Charset::Minimal,
    ] {
        println!("{:<10} {}", charset.name(), charset.glyphs());
    }
}
