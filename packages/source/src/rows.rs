//! CSV text to raw row records.

use traffic_map_source_models::RawRow;

use crate::SourceError;

/// Parses CSV text into raw rows.
///
/// The header row defines column names. Empty lines are skipped and
/// leading/trailing whitespace is trimmed from headers and fields.
///
/// # Errors
///
/// Returns [`SourceError::Csv`] if the CSV is malformed (e.g., a row with a
/// different field count than the header).
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, field)| (header.to_string(), field.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_columns_by_header() {
        let rows = parse_rows("acci_id,acci_name\n1,collision\n2,rollover\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["acci_id"], "1");
        assert_eq!(rows[1]["acci_name"], "rollover");
    }

    #[test]
    fn trims_whitespace_from_fields() {
        let rows = parse_rows("id, name \n 1 ,  collision  \n").unwrap();
        assert_eq!(rows[0]["id"], "1");
        assert_eq!(rows[0]["name"], "collision");
    }

    #[test]
    fn skips_empty_lines() {
        let rows = parse_rows("id,name\n1,a\n\n2,b\n").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn ragged_row_is_csv_error() {
        let err = parse_rows("id,name\n1,a,extra\n").unwrap_err();
        assert!(matches!(err, SourceError::Csv(_)));
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(parse_rows("").unwrap().is_empty());
    }
}
