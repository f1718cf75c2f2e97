//! Batch input loading.
//!
//! Two formats are accepted:
//!
//! ```text
//! pairs.json   [{"icao": "LFPT", "text": "PPR 24 HR"}, ...]
//! pairs.tsv    LFPT<TAB>PPR 24 HR      (blank lines and '#' comments skipped)
//! ```
//!
//! The format is picked from the file extension: `.json` is JSON, anything
//! else is tab-separated.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One aerodrome's notification text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportText {
    pub icao: String,
    pub text: String,
}

/// Load `(icao, text)` pairs from `path`.
pub fn load_pairs(path: &Path) -> Result<Vec<AirportText>> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let pairs = if is_json { serde_json::from_str(&content)? } else { parse_tsv(path, &content)? };
    tracing::debug!(path = %path.display(), count = pairs.len(), "loaded batch input");
    Ok(pairs)
}

fn parse_tsv(path: &Path, content: &str) -> Result<Vec<AirportText>> {
    let mut pairs = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((icao, text)) = line.split_once('\t') else {
            return Err(Error::InvalidLine {
                path: path.to_path_buf(),
                line: idx + 1,
                reason: "expected ICAO<TAB>text".to_string(),
            });
        };
        let icao = icao.trim();
        if icao.is_empty() {
            return Err(Error::InvalidLine {
                path: path.to_path_buf(),
                line: idx + 1,
                reason: "empty ICAO".to_string(),
            });
        }
        pairs.push(AirportText { icao: icao.to_string(), text: text.to_string() });
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_tsv() {
        let file = write_temp(".tsv", "# icao\ttext\nLFPT\tPPR 24 HR\n\nEGTF\tO/R\n");
        let pairs = load_pairs(file.path()).unwrap();
        assert_eq!(
            pairs,
            vec![
                AirportText { icao: "LFPT".to_string(), text: "PPR 24 HR".to_string() },
                AirportText { icao: "EGTF".to_string(), text: "O/R".to_string() },
            ]
        );
    }

    #[test]
    fn tsv_keeps_empty_text() {
        let file = write_temp(".tsv", "LFPT\t\n");
        let pairs = load_pairs(file.path()).unwrap();
        assert_eq!(pairs[0].text, "");
    }

    #[test]
    fn loads_json() {
        let file = write_temp(".json", r#"[{"icao": "EDFE", "text": "H24"}]"#);
        let pairs = load_pairs(file.path()).unwrap();
        assert_eq!(pairs, vec![AirportText { icao: "EDFE".to_string(), text: "H24".to_string() }]);
    }

    #[test]
    fn rejects_line_without_tab() {
        let file = write_temp(".tsv", "LFPT\tPPR 24 HR\nLFPN PPR 48 HR\n");
        match load_pairs(file.path()) {
            Err(Error::InvalidLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected InvalidLine, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_json() {
        let file = write_temp(".json", "{not json");
        assert!(matches!(load_pairs(file.path()), Err(Error::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(load_pairs(Path::new("/nonexistent/pairs.tsv")), Err(Error::Io(_))));
    }
}
