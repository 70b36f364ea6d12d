use std::path::{Path, PathBuf};

const FALLBACK_STEM: &str = "output";

/// Where a generated image goes.
///
/// Without `outfile` the input's file stem is reused under `out_dir`. A bare
/// `outfile` name is also placed under `out_dir`, one with a directory part is
/// used as given. The extension is always `png`.
pub fn resolve_output_path(infile: &Path, outfile: Option<&Path>, out_dir: &Path) -> PathBuf {
    match outfile {
        Some(p) if has_dir_component(p) => p.with_extension("png"),
        Some(p) => out_dir.join(p).with_extension("png"),
        None => {
            // Only the input's own extension goes, dots inside the stem stay
            let mut name = infile
                .file_stem()
                .map(|s| s.to_os_string())
                .unwrap_or_else(|| FALLBACK_STEM.into());
            name.push(".png");
            out_dir.join(name)
        }
    }
}

fn has_dir_component(path: &Path) -> bool {
    path.parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty())
}
