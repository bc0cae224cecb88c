use anyhow::Result;
use reuse_inventory::{is_index_file, is_test_file, ComponentScanner};
use reuse_protocol::{HookRequest, HookResponse};
use reuse_similarity::SimilarityEngine;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::render;

/// Path fragment that marks a file as a component candidate.
const COMPONENTS_MARKER: &str = "src/components/";

/// Run the editor-hook flow: one JSON request on stdin, one JSON response on
/// stdout. Every outcome continues the caller; malformed input is allowed
/// through rather than failing the hook.
pub fn run(root: &Path, engine: &SimilarityEngine) -> Result<()> {
    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        return emit(HookResponse::allow());
    }

    let Ok(request) = serde_json::from_str::<HookRequest>(&input) else {
        log::debug!("Hook request is not valid JSON; allowing");
        return emit(HookResponse::allow());
    };

    emit(evaluate(root, engine, &request.path))
}

fn evaluate(root: &Path, engine: &SimilarityEngine, raw_path: &str) -> HookResponse {
    let path = raw_path.replace('\\', "/");

    if !path.contains(COMPONENTS_MARKER) {
        return HookResponse::allow();
    }

    // An existing file is a read or an edit, not a new component.
    let absolute = if Path::new(&path).is_absolute() {
        PathBuf::from(&path)
    } else {
        root.join(&path)
    };
    if absolute.exists() {
        return HookResponse::allow();
    }

    let basename = path.rsplit('/').next().unwrap_or(&path);
    if basename.is_empty() || is_index_file(basename) || is_test_file(basename) {
        return HookResponse::allow();
    }

    let components_dir = root.join("src").join("components");
    let inventory = ComponentScanner::new(&components_dir).collect();
    let matches = engine.rank(basename, &inventory);
    if matches.is_empty() {
        return HookResponse::allow();
    }

    render::hook_advisory(basename, &matches)
}

fn emit(response: HookResponse) -> Result<()> {
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
