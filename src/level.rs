//! Level description reader.
//!
//! A level file is plain text read line by line:
//!
//! ```text
//! # Frogger level
//! Bkg Background 0 0
//! ```
//!
//! - `Bkg <texture> <x> <y>` places a background texture with its top-left
//!   corner at `(x, y)`;
//! - a line starting with `#` is a comment and is echoed to the log;
//! - any other token is skipped.
//!
//! Several directives may share a line. An unreadable file or a `Bkg` with
//! missing or non-numeric coordinates is an error; the binary treats it as
//! fatal.

use std::path::{Path, PathBuf};

use glam::Vec2;
use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("cannot open level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("level line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum LevelItem {
    Background { texture: String, pos: Vec2 },
}

pub fn parse_level(text: &str) -> Result<Vec<LevelItem>, LevelError> {
    let mut items = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            info!("{}", trimmed);
            continue;
        }
        let mut tokens = trimmed.split_whitespace();
        while let Some(token) = tokens.next() {
            if token != "Bkg" {
                debug!("level line {}: skipping token {:?}", line_no, token);
                continue;
            }
            let texture = tokens.next().ok_or_else(|| LevelError::Malformed {
                line: line_no,
                reason: "Bkg without a texture name".to_string(),
            })?;
            let x = coordinate(tokens.next(), line_no, "x")?;
            let y = coordinate(tokens.next(), line_no, "y")?;
            items.push(LevelItem::Background {
                texture: texture.to_string(),
                pos: Vec2::new(x, y),
            });
        }
    }
    Ok(items)
}

fn coordinate(token: Option<&str>, line: usize, axis: &str) -> Result<f32, LevelError> {
    let token = token.ok_or_else(|| LevelError::Malformed {
        line,
        reason: format!("Bkg without a {} coordinate", axis),
    })?;
    token.parse::<f32>().map_err(|_| LevelError::Malformed {
        line,
        reason: format!("Bkg {} coordinate {:?} is not a number", axis, token),
    })
}

pub fn read_level(path: &Path) -> Result<Vec<LevelItem>, LevelError> {
    let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_level(&text)?;
    info!("level {} loaded, {} items", path.display(), items.len());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_backgrounds_and_comments() {
        let items = parse_level("# a comment Bkg ignored 1 2\nBkg Background 0 0\n").unwrap();
        assert_eq!(
            items,
            vec![LevelItem::Background {
                texture: "Background".to_string(),
                pos: Vec2::ZERO,
            }]
        );
    }

    #[test]
    fn test_unknown_tokens_are_skipped() {
        let items = parse_level("Lane 1 2 3\nfoo Bkg Sky 10 -5.5 bar\n").unwrap();
        assert_eq!(
            items,
            vec![LevelItem::Background {
                texture: "Sky".to_string(),
                pos: Vec2::new(10.0, -5.5),
            }]
        );
    }

    #[test]
    fn test_malformed_bkg() {
        let err = parse_level("\nBkg Sky ten 0").unwrap_err();
        match err {
            LevelError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error {other}"),
        }
        assert!(matches!(
            parse_level("Bkg Sky 1"),
            Err(LevelError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn test_read_level_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# level").unwrap();
        writeln!(file, "Bkg Background 0 0").unwrap();
        let items = read_level(file.path()).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_level(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, LevelError::Io { .. }));
    }
}
