use fs_err as fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::errors::Result;

pub const FALLBACK_NAME: &str = "project";
pub const SUMMARY_SUFFIX: &str = "_ux_research_summary.txt";

/// `<brand or "project">_ux_research_summary.txt`, kept to a single path segment.
pub fn summary_filename(brand_name: &str) -> String {
    let base = if brand_name.trim().is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        brand_name.replace(['/', '\\'], "_")
    };
    format!("{base}{SUMMARY_SUFFIX}")
}

/// Write `content` as plain UTF-8 text into `dir`. Empty content is a no-op.
pub fn export_text(content: &str, suggested_filename: &str, dir: &Path) -> Result<Option<PathBuf>> {
    if content.is_empty() {
        return Ok(None);
    }

    fs::create_dir_all(dir)?;
    let target = dir.join(suggested_filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(&target).map_err(|e| e.error)?;

    tracing::debug!(path = %target.display(), bytes = content.len(), "exported text");
    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filename_uses_brand_or_fallback() {
        assert_eq!(summary_filename("Lumina Health"), "Lumina Health_ux_research_summary.txt");
        assert_eq!(summary_filename(""), "project_ux_research_summary.txt");
        assert_eq!(summary_filename("   "), "project_ux_research_summary.txt");
        assert_eq!(summary_filename("a/b\\c"), "a_b_c_ux_research_summary.txt");
    }

    #[test]
    fn empty_content_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let out = export_text("", "x.txt", tmp.path()).unwrap();
        assert!(out.is_none());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn writes_verbatim_text() {
        let tmp = tempfile::tempdir().unwrap();
        let body = "Findings\n  - calm tone\n  - trust signals\n";
        let path = export_text(body, &summary_filename("Acme"), &tmp.path().join("out")).unwrap().unwrap();
        assert_eq!(path, tmp.path().join("out").join("Acme_ux_research_summary.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), body);
    }

    #[test]
    fn overwrites_previous_export() {
        let tmp = tempfile::tempdir().unwrap();
        let name = summary_filename("");
        export_text("old", &name, tmp.path()).unwrap();
        let path = export_text("new", &name, tmp.path()).unwrap().unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "new");
    }
}
