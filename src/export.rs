//! CSV export of the displayed result table.
use crate::error::ExportError;
use crate::table::TableCells;
use csv::WriterBuilder;

pub const EXPORT_FILENAME: &str = "ticker-scores.csv";

pub fn table_to_csv(cells: &TableCells) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(&cells.header)?;
    for row in &cells.body {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::{FilterCatalog, ScoreRow};
    use crate::table::{table_cells, NumberStyle};

    #[test]
    fn test_export_matches_displayed_table() {
        let catalog = FilterCatalog::new(vec!["A".to_string(), "B".to_string()]);
        let rows = vec![ScoreRow::new("X").with_score("A", 1.0).with_score("B", 2.0)];
        let csv = table_to_csv(&table_cells(&catalog, &rows, NumberStyle::Plain)).unwrap();
        assert_eq!(csv, "ticker,A,B\nX,1,2\n");
    }

    #[test]
    fn test_export_quotes_commas() {
        let cells = TableCells {
            header: vec!["ticker".to_string(), "debt, net".to_string()],
            body: vec![],
        };
        assert_eq!(table_to_csv(&cells).unwrap(), "ticker,\"debt, net\"\n");
    }
}
