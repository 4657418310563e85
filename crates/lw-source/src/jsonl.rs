//! Fragment files: one JSON `Fragment` per line.
//!
//! Used for offline runs (`lwatch run --fragments`) and test fixtures.

use std::path::Path;

use lw_core::entities::Fragment;

use crate::error::SourceError;

/// Read every fragment in `path`, in file order.
///
/// # Errors
///
/// Returns [`SourceError::Io`] if the file cannot be opened and
/// [`SourceError::Parse`] with the 1-based line number for a malformed line.
pub fn load_fragments(path: &Path) -> Result<Vec<Fragment>, SourceError> {
    let fragments = serde_jsonlines::json_lines::<Fragment, _>(path)?
        .enumerate()
        .map(|(index, line)| {
            line.map_err(|e| {
                SourceError::Parse(format!("{} line {}: {e}", path.display(), index + 1))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(path = %path.display(), fragments = fragments.len(), "loaded fragment file");
    Ok(fragments)
}

/// Write `fragments` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`SourceError::Io`] if the file cannot be written.
pub fn save_fragments(path: &Path, fragments: &[Fragment]) -> Result<(), SourceError> {
    serde_jsonlines::write_json_lines(path, fragments)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn saved_fragments_load_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fragments.jsonl");
        let fragments = vec![
            Fragment::heading("January 3, 2023 - Transporter 6", Some("jan3")),
            Fragment::detail("Launch from SLC-40"),
        ];

        save_fragments(&path, &fragments).unwrap();
        assert_eq!(load_fragments(&path).unwrap(), fragments);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.lines().count(), 2);
        assert!(!raw.lines().nth(1).unwrap().contains("anchor_id"));
    }

    #[test]
    fn hand_written_lines_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fragments.jsonl");
        std::fs::write(
            &path,
            "{\"kind\":\"heading\",\"text\":\"March 2023 - Polaris Dawn\"}\n{\"kind\":\"detail\",\"text\":\"Launch\"}\n",
        )
        .unwrap();

        let fragments = load_fragments(&path).unwrap();
        assert_eq!(fragments[0], Fragment::heading("March 2023 - Polaris Dawn", None));
        assert_eq!(fragments[1], Fragment::detail("Launch"));
    }

    #[test]
    fn bad_line_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fragments.jsonl");
        std::fs::write(&path, "{\"kind\":\"detail\",\"text\":\"ok\"}\n{\"kind\":\"footer\"}\n").unwrap();

        let err = load_fragments(&path).unwrap_err();
        assert!(matches!(err, SourceError::Parse(ref msg) if msg.contains("line 2")));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_fragments(Path::new("/definitely/not/here.jsonl")).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
