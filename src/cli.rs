// src/cli.rs

use std::path::PathBuf;

use clap::{CommandFactory, Parser, error::ErrorKind};

use crate::config::consts::{DEFAULT_BUNDLE_FILE, DEFAULT_OUT_DIR};
use crate::config::options::{EnumKind, OutputFormat, Params};
use crate::error::PoolError;
use crate::runner;

/// Build item ID pools from the IsaacDocs enum tables.
///
/// By default all four tables are fetched and bundled into a single
/// `itemmap.js` defining one `window.*_ID_POOL` global per table.
#[derive(Parser, Debug)]
#[command(name = "id_pools", version, about)]
pub struct Args {
    /// Enum table(s) to fetch (repeatable or comma-separated; default: all four)
    #[arg(short, long = "kind", value_enum, value_delimiter = ',')]
    pub kind: Vec<EnumKind>,

    /// Output format for stdout/split outputs
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// JS variable name override (js format; applies to a single kind only)
    #[arg(long = "var", value_name = "NAME")]
    pub var_name: Option<String>,

    /// Directory for split outputs
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Print to stdout instead of writing files (single kind only)
    #[arg(long, conflicts_with = "split")]
    pub stdout: bool,

    /// Path of the bundled output
    #[arg(long, value_name = "FILE", default_value = DEFAULT_BUNDLE_FILE)]
    pub bundle_out: PathBuf,

    /// Skip the bundled output
    #[arg(long)]
    pub no_bundle: bool,

    /// Also write one file per kind under --out-dir
    #[arg(long)]
    pub split: bool,
}

impl Args {
    /// Effective kind selection: explicit flags, or all four.
    pub fn selected_kinds(&self) -> Vec<EnumKind> {
        if self.kind.is_empty() {
            EnumKind::ALL.to_vec()
        } else {
            self.kind.clone()
        }
    }

    /// Flag-combination checks that clap can't express declaratively.
    pub fn validate(&self) -> Result<(), String> {
        if self.stdout && self.selected_kinds().len() != 1 {
            return Err("--stdout requires exactly one --kind".into());
        }
        Ok(())
    }

    pub fn into_params(self) -> Params {
        let kinds = self.selected_kinds();
        Params {
            kinds,
            format: self.format,
            var_name: self.var_name,
            out_dir: self.out_dir,
            stdout: self.stdout,
            bundle_out: self.bundle_out,
            no_bundle: self.no_bundle,
            write_split: self.split,
        }
    }
}

/// Parse arguments, validate, and run. Usage errors exit with clap's
/// usage status (2); pipeline errors propagate to the caller.
pub fn run() -> Result<(), PoolError> {
    let args = Args::parse();

    if let Err(msg) = args.validate() {
        // Routed through clap so the message and exit status match
        // its own usage errors.
        Args::command()
            .error(ErrorKind::ArgumentConflict, msg)
            .exit();
    }

    let params = args.into_params();
    runner::run(&params).map(|_| ())
}
