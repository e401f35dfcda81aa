use crate::structs::{FilterCatalog, ScoreRow};
use crate::table::{table_cells, NumberStyle};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultTableProps {
    pub catalog: FilterCatalog,
    pub rows: Rc<Vec<ScoreRow>>,
    #[prop_or_default]
    pub number_style: NumberStyle,
}

#[function_component(ResultTable)]
pub fn result_table(props: &ResultTableProps) -> Html {
    let cells = table_cells(&props.catalog, &props.rows, props.number_style);
    // tickers are not guaranteed unique, so body rows are keyed by position
    let cell_style = "border: 1px solid #dddddd; padding: 2px 8px; text-align: right;";

    html! {
        <table style="border-collapse: collapse; margin: 16px auto;">
            <thead>
                <tr>
                    { for cells.header.iter().map(|name| html! {
                        <th style={cell_style}>{ name }</th>
                    }) }
                </tr>
            </thead>
            <tbody>
                { for cells.body.iter().enumerate().map(|(i, row)| html! {
                    <tr key={i}>
                        { for row.iter().map(|cell| html! {
                            <td style={cell_style}>{ cell }</td>
                        }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    async fn render(catalog: &[&str], rows: Vec<ScoreRow>) -> String {
        let props = ResultTableProps {
            catalog: FilterCatalog::new(catalog.iter().map(|s| s.to_string()).collect()),
            rows: Rc::new(rows),
            number_style: NumberStyle::Plain,
        };
        LocalServerRenderer::<ResultTable>::with_props(props)
            .hydratable(false)
            .render()
            .await
    }

    /// Text of every cell with the given tag, in document order.
    fn cell_texts(html: &str, tag: &str) -> Vec<String> {
        let close = format!("</{}>", tag);
        html.split(&close)
            .filter_map(|chunk| {
                let open = chunk.rfind(&format!("<{}", tag))?;
                let text_start = chunk[open..].find('>')? + open + 1;
                Some(chunk[text_start..].to_string())
            })
            .collect()
    }

    #[tokio::test]
    async fn test_renders_ticker_and_catalog_columns() {
        let rows = vec![ScoreRow::new("X").with_score("A", 1.0).with_score("B", 2.0)];
        let html = render(&["A", "B"], rows).await;
        assert_eq!(cell_texts(&html, "th"), vec!["ticker", "A", "B"]);
        assert_eq!(cell_texts(&html, "td"), vec!["X", "1", "2"]);
        assert_eq!(html.matches("<tr").count(), 2);
    }

    #[tokio::test]
    async fn test_one_body_row_per_score_row() {
        let rows = vec![
            ScoreRow::new("X").with_score("A", 1.0),
            ScoreRow::new("X").with_score("A", 3.0),
        ];
        let html = render(&["A"], rows).await;
        assert_eq!(cell_texts(&html, "td"), vec!["X", "1", "X", "3"]);
    }
}
