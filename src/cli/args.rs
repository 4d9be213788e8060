//! Command-line argument parsing for cropdoc
//!
//! The first argument is the image path, taken verbatim. No flags exist:
//! `--`, `--help` and `-V` are paths like any other, and anything after the
//! first argument is ignored.

use clap::Parser;
use std::ffi::OsString;
use std::path::Path;

/// cropdoc - Diagnose a plant disease from a leaf image
#[derive(Parser, Debug)]
#[command(name = "cropdoc")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Print a JSON plant disease diagnosis for an image", long_about = None)]
pub struct Args {
    /// Path to the leaf image
    #[arg(value_name = "IMAGE_PATH", value_parser = clap::value_parser!(OsString))]
    pub image_path: OsString,

    /// Ignored
    #[arg(value_name = "IGNORED", value_parser = clap::value_parser!(OsString), hide = true)]
    pub ignored: Vec<OsString>,
}

impl Args {
    /// Parse `std::env::args_os()`, exiting with a usage error when no path is given
    pub fn parse_verbatim() -> Self {
        Self::try_parse_verbatim(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse an argv (program name first) treating every argument as a value.
    ///
    /// An escape is inserted after the program name so clap never interprets
    /// what follows; a literal `--` supplied by the caller becomes the path.
    pub fn try_parse_verbatim<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("cropdoc"));

        let escaped = std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(argv);
        Self::try_parse_from(escaped)
    }

    /// The image path as given on the command line
    pub fn image_path(&self) -> &Path {
        Path::new(&self.image_path)
    }
}
