//! Probe-path file location.

use std::path::{Path, PathBuf};

use tracing::trace;

/// Locate a data file by probing a fixed ordered list of candidate paths.
///
/// Candidates, in order: `<data_dir>/<file>`, `../<data_dir>/<file>`,
/// `./<file>`, `<file>`. The first one that exists as a regular file wins.
pub(crate) fn locate(data_dir: &Path, file_name: &str) -> Option<PathBuf> {
    let candidates = [
        data_dir.join(file_name),
        Path::new("..").join(data_dir).join(file_name),
        Path::new(".").join(file_name),
        PathBuf::from(file_name),
    ];

    for candidate in candidates {
        if candidate.is_file() {
            trace!(path = %candidate.display(), "Located data file");
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_file_under_the_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join("data");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::write(data_dir.join("t.csv"), "a,b\n").unwrap();

        let found = locate(&data_dir, "t.csv").unwrap();
        assert_eq!(found, data_dir.join("t.csv"));
    }

    #[test]
    fn missing_everywhere_yields_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(locate(&tmp.path().join("data"), "absent.csv"), None);
    }

    #[test]
    fn directories_do_not_count_as_files() {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join("data");
        std::fs::create_dir_all(data_dir.join("t.csv")).unwrap();
        assert_eq!(locate(&data_dir, "t.csv"), None);
    }
}
