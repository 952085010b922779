//! CSV serialization of the word tally

use crate::text::WordTally;
use crate::OutputResult;
use regex::Regex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Returns `path` untouched when free, otherwise the first ` (N)`-suffixed
/// variant that does not exist yet
///
/// A stem that already carries a ` (N)` suffix is normalized first, so
/// repeated runs produce `word_data (1).csv`, `word_data (2).csv`, … rather
/// than stacking suffixes.
pub fn safe_file_name(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    let suffix = Regex::new(r"\s\(\d+\)$").unwrap();
    let base = suffix.replace(stem, "").into_owned();

    let mut i = 1;
    loop {
        let candidate = parent.join(format!("{} ({}){}", base, i, extension));
        if !candidate.exists() {
            return candidate;
        }
        i += 1;
    }
}

/// Writes the tally as `word,freq` rows in discovery order
pub fn write_tally_csv(path: &Path, tally: &WordTally) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "word,freq")?;
    for (word, count) in tally.iter() {
        writeln!(writer, "{},{}", word, count)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::WordAggregator;

    #[test]
    fn writes_header_and_rows_in_discovery_order() {
        let aggregator = WordAggregator::new();
        aggregator.record(Some("banana apple banana"));
        aggregator.record(Some("cherry"));
        let (_, tally) = aggregator.snapshot();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_tally_csv(&path, &tally).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "word,freq\nbanana,2\napple,1\ncherry,1\n");
    }

    #[test]
    fn free_path_is_returned_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("word_data.csv");
        assert_eq!(safe_file_name(&path), path);
    }

    #[test]
    fn occupied_path_gets_numeric_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("word_data.csv");
        std::fs::write(&path, "taken").unwrap();

        assert_eq!(safe_file_name(&path), dir.path().join("word_data (1).csv"));

        std::fs::write(dir.path().join("word_data (1).csv"), "also taken").unwrap();
        assert_eq!(safe_file_name(&path), dir.path().join("word_data (2).csv"));
    }

    #[test]
    fn suffixed_stem_is_normalized_not_stacked() {
        let dir = tempfile::tempdir().unwrap();
        let suffixed = dir.path().join("word_data (1).csv");
        std::fs::write(&suffixed, "taken").unwrap();

        // "word_data (1).csv" exists, so the next free normalized name is (2)
        assert_eq!(
            safe_file_name(&suffixed),
            dir.path().join("word_data (2).csv")
        );
    }
}
