use crate::units::UnitsError;
use std::io::Read;
use std::path::Path;

/// Concatenate the named sources into one buffer.
///
/// No paths means standard input; a path of `-` also reads standard input. The whole input
/// is buffered so a match can span line breaks. Bytes are kept as read, in any encoding.
pub fn read_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<u8>, UnitsError> {
    let mut contents = Vec::new();

    if paths.is_empty() {
        read_stdin(&mut contents)?;
        return Ok(contents);
    }

    for path in paths {
        let path = path.as_ref();
        if path == Path::new("-") {
            read_stdin(&mut contents)?;
        } else {
            let bytes = std::fs::read(path).map_err(|source| UnitsError::Io {
                path: path.display().to_string(),
                source,
            })?;
            contents.extend_from_slice(&bytes);
        }
    }

    Ok(contents)
}

fn read_stdin(contents: &mut Vec<u8>) -> Result<(), UnitsError> {
    std::io::stdin()
        .lock()
        .read_to_end(contents)
        .map(|_| ())
        .map_err(|source| UnitsError::Io {
            path: "<stdin>".to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_sources_concatenates_in_order() {
        let mut first = NamedTempFile::new().unwrap();
        write!(first, "one\n").unwrap();
        let mut second = NamedTempFile::new().unwrap();
        write!(second, "two").unwrap();

        let contents = read_sources(&[first.path(), second.path()]).unwrap();
        assert_eq!(contents, b"one\ntwo");
    }

    #[test]
    fn test_read_sources_keeps_non_utf8_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"caf\xe9\n").unwrap();

        let contents = read_sources(&[file.path()]).unwrap();
        assert_eq!(contents, b"caf\xe9\n");
    }

    #[test]
    fn test_read_sources_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.log");

        let err = read_sources(&[&missing]).unwrap_err();
        match err {
            UnitsError::Io { path, .. } => assert!(path.ends_with("missing.log")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
