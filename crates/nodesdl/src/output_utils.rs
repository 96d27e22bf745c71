use anyhow::Context;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// Schema files found under a set of paths.
#[derive(Debug, Default)]
pub(crate) struct SdlFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Finds every file at or under `paths` whose extension is one of
/// `sdl_file_exts`.
///
/// A single file passed on its own is used whatever its extension.
pub(crate) fn find_sdl_files(paths: &[PathBuf], sdl_file_exts: &[String]) -> anyhow::Result<SdlFiles> {
    let sdl_file_exts: HashSet<&str> = sdl_file_exts
        .iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = SdlFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = entry.with_context(|| format!("Failed to scan {}", path.display()))?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            let ext = entry_path.extension().map(|ext| ext.to_string_lossy());
            if ext.is_some_and(|ext| sdl_file_exts.contains(ext.as_ref())) {
                log::trace!("Found schema file at {entry_path:#?}.");
                found.file_paths.push(canonicalize(entry_path)?);
            } else {
                found.num_skipped += 1;
            }
        }
    }

    if found.file_paths.is_empty() && paths.len() == 1 && paths[0].is_file() {
        let file_path = canonicalize(&paths[0])?;
        log::warn!(
            "Proceeding with {file_path:#?} even though it doesn't match any of \
            the --sdl-file-exts ({}).",
            sdl_file_exts
                .iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = 0;
        found.file_paths.push(file_path);
    }

    log::debug!("Found {} schema files.", found.file_paths.len());
    Ok(found)
}

fn canonicalize(path: &std::path::Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path).with_context(|| format!("Failed to resolve {}", path.display()))
}
