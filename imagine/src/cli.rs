use clap::{Args, Parser, Subcommand, ValueHint, error::ErrorKind};
use image_effect::PngConfig;
use std::{ffi::OsString, path::PathBuf};

pub const USAGE: &str = "imag.in.e - a tool for manipulating images

Usage:

imagine complement <infile> [outfile] - converts image pixels to complementary colors

Examples:
  imagine complement input.png output.png
";

#[derive(Debug, Parser)]
#[command(
    name = "imagine",
    version,
    about = "imag.in.e - a tool for manipulating images",
    override_usage = "imagine [OPTIONS] complement <INFILE> [OUTFILE]"
)]
pub struct Cli {
    /// Directory generated images are written to
    #[arg(
        long,
        global = true,
        env = "IMAGINE_OUT_DIR",
        default_value = "out",
        value_hint = ValueHint::DirPath
    )]
    pub out_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert image pixels to complementary colors
    Complement(ComplementArgs),
}

#[derive(Debug, Args)]
pub struct ComplementArgs {
    /// Input image (e.g. PNG or JPEG)
    #[arg(value_hint = ValueHint::FilePath)]
    pub infile: PathBuf,

    /// Output name. A bare file name is placed in the output directory,
    /// the extension is always replaced with .png
    #[arg(value_hint = ValueHint::FilePath)]
    pub outfile: Option<PathBuf>,

    /// Always write a truecolor PNG, even for images with few colors
    #[arg(long)]
    pub no_palette: bool,

    /// Do not tag the output as sRGB
    #[arg(long)]
    pub no_srgb: bool,
}

impl ComplementArgs {
    pub fn png_config(&self) -> PngConfig {
        PngConfig::new()
            .with_palette(!self.no_palette)
            .with_srgb(!self.no_srgb)
    }
}

pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Print whatever the parse failure calls for and return the exit code.
/// Help and version are successes, everything else is a usage error.
pub fn report_parse_error(e: &clap::Error) -> u8 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print_clap_error(e);
            0
        }
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            println!("{USAGE}");
            1
        }
        _ => {
            print_clap_error(e);
            println!("{USAGE}");
            1
        }
    }
}

fn print_clap_error(e: &clap::Error) {
    if let Err(err) = e.print() {
        log::warn!("failed to print cli message: {err}");
    }
}
