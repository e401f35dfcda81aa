//! Projection of score rows onto the displayed table.
use crate::structs::{FilterCatalog, ScoreRow};

pub const TICKER_COLUMN: &str = "ticker";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    #[default]
    Plain,
    /// Thousands, millions and billions shortened to K/M/B.
    Compact,
}

const COMPACT_UNITS: [(f64, &str); 3] = [(1e3, "K"), (1e6, "M"), (1e9, "B")];

pub fn format_value(value: Option<f64>, style: NumberStyle) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match style {
        NumberStyle::Plain => value.to_string(),
        NumberStyle::Compact => {
            let cents = (value * 100.0).round() / 100.0;
            if cents.abs() < 1e3 {
                return format!("{:.2}", cents);
            }
            // pick the unit after rounding so 999_999 reads 1M, not 1000K
            let (scale, suffix) = COMPACT_UNITS
                .iter()
                .copied()
                .find(|(scale, _)| (value / scale).round().abs() < 1e3)
                .unwrap_or(COMPACT_UNITS[COMPACT_UNITS.len() - 1]);
            format!("{:.0}{}", (value / scale).round(), suffix)
        }
    }
}

/// Header and body cells as rendered: `ticker` first, then one column per
/// catalog entry in catalog order. Fields missing from a row render empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCells {
    pub header: Vec<String>,
    pub body: Vec<Vec<String>>,
}

pub fn table_cells(catalog: &FilterCatalog, rows: &[ScoreRow], style: NumberStyle) -> TableCells {
    let mut header = Vec::with_capacity(catalog.len() + 1);
    header.push(TICKER_COLUMN.to_string());
    header.extend(catalog.iter().cloned());

    let body = rows
        .iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(catalog.len() + 1);
            cells.push(row.ticker.clone());
            cells.extend(
                catalog
                    .iter()
                    .map(|name| format_value(row.score(name), style)),
            );
            cells
        })
        .collect();

    TableCells { header, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_cells_header_and_row() {
        let catalog = FilterCatalog::new(vec!["A".to_string(), "B".to_string()]);
        let rows = vec![ScoreRow::new("X").with_score("A", 1.0).with_score("B", 2.0)];
        let cells = table_cells(&catalog, &rows, NumberStyle::Plain);
        assert_eq!(cells.header, vec!["ticker", "A", "B"]);
        assert_eq!(cells.body, vec![vec!["X", "1", "2"]]);
    }

    #[test]
    fn test_table_cells_before_catalog_load() {
        let rows = vec![ScoreRow::new("X").with_score("A", 1.0)];
        let cells = table_cells(&FilterCatalog::default(), &rows, NumberStyle::Plain);
        assert_eq!(cells.header, vec!["ticker"]);
        assert_eq!(cells.body, vec![vec!["X"]]);
    }

    #[test]
    fn test_missing_field_renders_empty() {
        let catalog = FilterCatalog::new(vec!["A".to_string(), "B".to_string()]);
        let rows = vec![ScoreRow::new("Y").with_score("B", 0.5)];
        let cells = table_cells(&catalog, &rows, NumberStyle::Plain);
        assert_eq!(cells.body[0], vec!["Y", "", "0.5"]);
    }

    #[test]
    fn test_compact_format() {
        assert_eq!(format_value(Some(12.3456), NumberStyle::Compact), "12.35");
        assert_eq!(format_value(Some(1234.0), NumberStyle::Compact), "1K");
        assert_eq!(format_value(Some(2_600_000.0), NumberStyle::Compact), "3M");
        assert_eq!(format_value(Some(-4_100_000_000.0), NumberStyle::Compact), "-4B");
        assert_eq!(format_value(None, NumberStyle::Compact), "");
    }

    #[test]
    fn test_compact_rounding_moves_to_next_unit() {
        assert_eq!(format_value(Some(999.996), NumberStyle::Compact), "1K");
        assert_eq!(format_value(Some(999_999.0), NumberStyle::Compact), "1M");
        assert_eq!(format_value(Some(999_999_999.0), NumberStyle::Compact), "1B");
        assert_eq!(format_value(Some(-999_999.0), NumberStyle::Compact), "-1M");
        assert_eq!(format_value(Some(999.994), NumberStyle::Compact), "999.99");
        assert_eq!(format_value(Some(5e12), NumberStyle::Compact), "5000B");
    }

    #[test]
    fn test_plain_format() {
        assert_eq!(format_value(Some(2.5), NumberStyle::Plain), "2.5");
        assert_eq!(format_value(Some(-7.0), NumberStyle::Plain), "-7");
    }
}
