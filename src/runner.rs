// src/runner.rs

use std::path::PathBuf;

use log::{info, warn};

use crate::{
    config::options::{EnumKind, Params},
    emit, file,
    error::PoolError,
    specs::enums::{self, EnumPair},
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Top-level driver: run the fetch→parse→sort→emit pipeline for the
/// selected kinds and route the results per the requested modes.
pub fn run(params: &Params) -> Result<RunSummary, PoolError> {
    if params.stdout {
        return run_stdout(params);
    }

    let mut written = Vec::new();

    if params.write_split {
        written.extend(run_split(params)?);
    }

    // The bundle always covers all four kinds, whatever was selected.
    if !params.no_bundle {
        let bundle = build_bundle_with(enums::fetch_pairs);
        file::write_text(&params.bundle_out, &bundle)?;
        println!("Wrote bundled pools -> {}", params.bundle_out.display());
        written.push(params.bundle_out.clone());
    }

    info!("{} file(s) written", written.len());
    Ok(RunSummary { files_written: written })
}

/// stdout mode: exactly one kind, print the serialized pool, write nothing.
fn run_stdout(params: &Params) -> Result<RunSummary, PoolError> {
    let kind = match params.kinds[..] {
        [kind] => kind,
        _ => {
            return Err(PoolError::Usage(
                "stdout mode requires exactly one kind".into(),
            ));
        }
    };

    let pairs = enums::fetch_pairs(kind)?;
    let content = emit::render(kind, &pairs, params.format, params.var_name.as_deref());
    println!("{content}");

    Ok(RunSummary { files_written: Vec::new() })
}

/// Split mode: one file per selected kind under the output directory.
/// A fetch failure here is fatal.
fn run_split(params: &Params) -> Result<Vec<PathBuf>, PoolError> {
    file::ensure_directory(&params.out_dir)?;

    // The variable override only applies to a single-kind selection.
    let var_override = match params.kinds[..] {
        [_] => params.var_name.as_deref(),
        _ => None,
    };

    let mut written = Vec::with_capacity(params.kinds.len());

    for &kind in &params.kinds {
        let pairs = enums::fetch_pairs(kind)?;
        let content = emit::render(kind, &pairs, params.format, var_override);
        let path = params
            .out_dir
            .join(format!("{}.{}", kind.file_stem(), params.format.ext()));
        file::write_text(&path, &content)?;
        println!("Wrote {kind} -> {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Assemble the bundle text from a per-kind fetcher. A kind whose fetch
/// fails contributes an empty pool; the bundle itself never aborts.
pub fn build_bundle_with<F>(fetch: F) -> String
where
    F: Fn(EnumKind) -> Result<Vec<EnumPair>, PoolError>,
{
    let mut sections = vec![
        String::from("// Auto-generated by id_pools"),
        String::from("// Item ID pools for display (loaded by script.js)"),
        String::new(),
    ];

    for kind in EnumKind::ALL {
        match fetch(kind) {
            Ok(pairs) => sections.push(emit::to_window_array(&pairs, kind.pool_var())),
            Err(e) => {
                warn!("{kind}: {e}; emitting empty pool");
                sections.push(format!("window.{} = [];\n", kind.pool_var()));
            }
        }
    }

    sections.join("\n")
}
