//! Service log tailing for failure reports.

use std::path::Path;

use crate::error::SuperviseError;

/// Read the last `n` lines of the file at `path`.
///
/// Returns an empty vec when the file does not exist yet (the service may
/// fail before writing anything).
///
/// # Errors
///
/// Returns [`SuperviseError::Io`] on read failure.
pub fn tail_lines(path: &Path, n: usize) -> Result<Vec<String>, SuperviseError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(SuperviseError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let lines: Vec<&str> = contents.lines().collect();
    let start = lines.len().saturating_sub(n);
    Ok(lines[start..].iter().map(ToString::to_string).collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::tail_lines;

    #[test]
    fn returns_last_n_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("svc.log");
        std::fs::write(&path, "one\ntwo\nthree\nfour\n").unwrap();

        let tail = tail_lines(&path, 2).unwrap();
        assert_eq!(tail, vec!["three", "four"]);
    }

    #[test]
    fn short_file_returns_all_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("svc.log");
        std::fs::write(&path, "only\n").unwrap();

        let tail = tail_lines(&path, 50).unwrap();
        assert_eq!(tail, vec!["only"]);
    }

    #[test]
    fn missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let tail = tail_lines(&temp.path().join("absent.log"), 10).unwrap();
        assert!(tail.is_empty());
    }
}
