// ABOUTME: Serialization of extracted records to JSON and CSV files.
// ABOUTME: Both writers overwrite deterministically and flush on success; failures name the path.

//! Persisting a record set to durable file formats.
//!
//! Both writers are idempotent: re-running with the same input overwrites
//! the destination, it never appends. The two output targets are
//! independent; a failure writing one has no effect on the other.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ScrapeError;
use crate::record::Record;

/// Write the records as a pretty-printed JSON array of
/// `{"title", "link"}` objects, in extraction order.
pub fn write_json(records: &[Record], path: &Path) -> Result<(), ScrapeError> {
    let op = "WriteJson";
    let file = File::create(path).map_err(|e| write_error(path, op, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| write_error(path, op, e))?;
    writer.flush().map_err(|e| write_error(path, op, e))?;
    Ok(())
}

/// Write the records as CSV with a `title,link` header row, one data row
/// per record in extraction order. Fields containing the delimiter, a
/// quote, or a line break are quoted per the standard rules.
pub fn write_csv(records: &[Record], path: &Path) -> Result<(), ScrapeError> {
    let op = "WriteCsv";
    // Header written explicitly so it is present even for an empty set.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| write_error(path, op, e))?;
    writer
        .write_record(["title", "link"])
        .map_err(|e| write_error(path, op, e))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| write_error(path, op, e))?;
    }
    writer.flush().map_err(|e| write_error(path, op, e))?;
    Ok(())
}

fn write_error(
    path: &Path,
    op: &str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> ScrapeError {
    ScrapeError::write(
        path.display().to_string(),
        op,
        Some(anyhow::Error::new(source)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("A", "http://x/1"),
            Record::new("B", "http://x/2"),
        ]
    }

    #[test]
    fn json_round_trip_preserves_fields_and_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let records = sample_records();

        write_json(&records, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Record> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn json_keys_are_title_then_link() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        write_json(&sample_records(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let title_pos = text.find("\"title\"").unwrap();
        let link_pos = text.find("\"link\"").unwrap();
        assert!(title_pos < link_pos);
        // Pretty-printed: multi-line with indentation.
        assert!(text.contains("\n  "));
    }

    #[test]
    fn json_empty_set_is_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.json");

        write_json(&[], &path).unwrap();

        let parsed: Vec<Record> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn csv_round_trip_preserves_pairs_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let records = sample_records();

        write_csv(&records, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["title", "link"])
        );
        let parsed: Vec<Record> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn csv_quotes_delimiters_quotes_and_line_breaks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quoted.csv");
        let records = vec![
            Record::new("comma, inside", "http://x/1"),
            Record::new("has \"quotes\"", "http://x/2"),
            Record::new("line\nbreak", "http://x/3"),
        ];

        write_csv(&records, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let parsed: Vec<Record> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn csv_empty_set_still_has_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&[], &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), "title,link");
    }

    #[test]
    fn rerunning_overwrites_never_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        write_json(&sample_records(), &path).unwrap();
        write_json(&[Record::new("only", "/one")], &path).unwrap();

        let parsed: Vec<Record> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, vec![Record::new("only", "/one")]);
    }

    #[test]
    fn missing_directory_is_a_write_error_naming_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("out.json");

        let err = write_json(&sample_records(), &path).unwrap_err();
        assert!(err.is_write());
        assert!(err.subject.contains("no-such-dir"));

        let err = write_csv(&sample_records(), &path).unwrap_err();
        assert!(err.is_write());
    }

    #[test]
    fn json_and_csv_outputs_decode_to_equivalent_record_sets() {
        let dir = TempDir::new().unwrap();
        let json_path = dir.path().join("out.json");
        let csv_path = dir.path().join("out.csv");
        let records = vec![
            Record::new("Plain", "http://x/1"),
            Record::new("Tricky, \"one\"", "http://x/2?a=b&c=d"),
        ];

        write_json(&records, &json_path).unwrap();
        write_csv(&records, &csv_path).unwrap();

        let from_json: Vec<Record> =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        let from_csv: Vec<Record> = csv::Reader::from_path(&csv_path)
            .unwrap()
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(from_json, from_csv);
    }
}
