use crate::{cli::ComplementArgs, output::resolve_output_path, status};
use anyhow::{Context, Result};
use image_effect::{Effect, ImageEffect, codec};
use std::{
    fmt,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone)]
pub struct ComplementReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub file_bytes: u64,
    pub raw_bytes: usize,
    pub output_bytes: u64,
}

impl fmt::Display for ComplementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .output
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        write!(
            f,
            "Converted {} ({} bytes, {} raw bytes) to complementary {} ({} bytes)",
            self.input.display(),
            self.file_bytes,
            self.raw_bytes,
            name,
            self.output_bytes
        )
    }
}

/// Decode `args.infile`, complement its colors and write the result as PNG.
pub fn run_complement(args: &ComplementArgs, out_dir: &Path) -> Result<ComplementReport> {
    status::log_message(&format!(
        "Processing {} to complement...",
        args.infile.display()
    ));

    let decoded = codec::decode_file(&args.infile)
        .with_context(|| format!("Failed to decode {}", args.infile.display()))?;
    let raw_bytes = decoded.buffer.len();

    let mut buffer = decoded.buffer;
    ImageEffect::Complement
        .apply(&mut buffer)
        .context("Failed to complement pixels")?;

    let output = resolve_output_path(&args.infile, args.outfile.as_deref(), out_dir);
    log::info!(
        "writing {}x{} image to {}",
        buffer.width(),
        buffer.height(),
        output.display()
    );

    let output_bytes = codec::write_png(&buffer, &output, &args.png_config())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(ComplementReport {
        input: args.infile.clone(),
        output,
        file_bytes: decoded.file_size,
        raw_bytes,
        output_bytes,
    })
}
