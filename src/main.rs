//! # image2canvas CLI
//!
//! Writes a grayscale HTML canvas document for an image to standard output.
//!
//! ## Usage
//!
//! ```bash
//! image2canvas photo.jpg > photo.html
//!
//! # Show what is happening on stderr
//! RUST_LOG=info image2canvas photo.jpg > photo.html
//! ```

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use image2canvas::{Image2CanvasError, RasterDecoder, pipeline};

/// image2canvas - Generate grayscale canvas code for an image
#[derive(Parser, Debug)]
#[command(name = "image2canvas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input image (JPEG, PNG, GIF, BMP, WebP, ...)
    #[arg(value_name = "IMAGE")]
    image: PathBuf,
}

fn main() {
    env_logger::init();

    let stdout = io::stdout();
    if let Err(e) = run(std::env::args_os(), &mut stdout.lock()) {
        match e {
            Image2CanvasError::Usage(msg) => eprintln!("{}", msg),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}

fn run<I, T, W>(args: I, out: &mut W) -> Result<(), Image2CanvasError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e)?;
            return Ok(());
        }
        Err(e) => return Err(Image2CanvasError::Usage(e.to_string().trim_end().to_string())),
    };

    let document = pipeline::convert(&RasterDecoder::new(), &cli.image)?;
    out.write_all(document.as_bytes())?;
    out.flush()?;
    Ok(())
}
