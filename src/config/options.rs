// src/config/options.rs

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

use super::consts::{BASE_URL, DEFAULT_BUNDLE_FILE, DEFAULT_OUT_DIR};

/// The four enum tables the docs site publishes.
/// Each kind carries its page, the enumerator prefix to strip, the default
/// JS variable name, and the stem used for split output files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EnumKind {
    Collectibles,
    Trinkets,
    Pills,
    Cards,
}

impl EnumKind {
    /// Fixed processing order; also the bundle order.
    pub const ALL: [EnumKind; 4] = [
        EnumKind::Collectibles,
        EnumKind::Trinkets,
        EnumKind::Pills,
        EnumKind::Cards,
    ];

    pub fn page(self) -> &'static str {
        match self {
            EnumKind::Collectibles => "CollectibleType.html",
            EnumKind::Trinkets => "TrinketType.html",
            EnumKind::Pills => "PillEffect.html",
            EnumKind::Cards => "Card.html",
        }
    }

    pub fn url(self) -> String {
        format!("{}{}", BASE_URL, self.page())
    }

    /// Enumerator prefix, stripped as `{prefix}_` from each name.
    pub fn prefix(self) -> &'static str {
        match self {
            EnumKind::Collectibles => "COLLECTIBLE",
            EnumKind::Trinkets => "TRINKET",
            EnumKind::Pills => "PILLEFFECT",
            EnumKind::Cards => "CARD",
        }
    }

    /// Default variable name for the js format and the bundle globals.
    pub fn pool_var(self) -> &'static str {
        match self {
            EnumKind::Collectibles => "COLLECTIBLE_ID_POOL",
            EnumKind::Trinkets => "TRINKET_ID_POOL",
            EnumKind::Pills => "PILL_ID_POOL",
            EnumKind::Cards => "CARD_ID_POOL",
        }
    }

    /// File stem for split outputs (extension comes from the format).
    pub fn file_stem(self) -> &'static str {
        match self {
            EnumKind::Collectibles => "collectible_pool",
            EnumKind::Trinkets => "trinket_pool",
            EnumKind::Pills => "pill_pool",
            EnumKind::Cards => "card_pool",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnumKind::Collectibles => "collectibles",
            EnumKind::Trinkets => "trinkets",
            EnumKind::Pills => "pills",
            EnumKind::Cards => "cards",
        }
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain array-of-pairs data.
    Json,
    /// A `const` variable assignment of the same list.
    Js,
}

impl OutputFormat {
    pub fn ext(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Js => "js",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Params {
    pub kinds: Vec<EnumKind>,        // which tables to process
    pub format: OutputFormat,        // stdout/split dialect
    pub var_name: Option<String>,    // js variable override (single kind)
    pub out_dir: PathBuf,            // directory for split outputs
    pub stdout: bool,                // print instead of writing files
    pub bundle_out: PathBuf,         // bundled output path
    pub no_bundle: bool,             // skip the bundle
    pub write_split: bool,           // write per-kind files
}

impl Default for Params {
    fn default() -> Self {
        Self {
            kinds: EnumKind::ALL.to_vec(),
            format: OutputFormat::Json,
            var_name: None,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            stdout: false,
            bundle_out: PathBuf::from(DEFAULT_BUNDLE_FILE),
            no_bundle: false,
            write_split: false,
        }
    }
}
