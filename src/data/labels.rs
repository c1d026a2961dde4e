use std::path::Path;

use crate::error::{Error, Result};

/// Reads whitespace-separated integer class labels from a text file.
pub fn read_ground_truth(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_ground_truth(&text)
}

pub fn parse_ground_truth(text: &str) -> Result<Vec<u8>> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<u8>().map_err(|_| Error::MalformedLabel {
                position,
                token: token.to_owned(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn any_whitespace_separates_labels() {
        assert_eq!(parse_ground_truth("3 1\n4\t1 5\n").unwrap(), vec![3, 1, 4, 1, 5]);
        assert!(parse_ground_truth("  \n").unwrap().is_empty());
    }

    #[test]
    fn malformed_token_is_located() {
        match parse_ground_truth("1 2 x 4") {
            Err(Error::MalformedLabel { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_ground_truth("-1").is_err());
        assert!(parse_ground_truth("256").is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "7 2 1 0").unwrap();
        assert_eq!(read_ground_truth(file.path()).unwrap(), vec![7, 2, 1, 0]);
        assert!(matches!(read_ground_truth("/no/such/gt.txt"), Err(Error::Io { .. })));
    }
}
