pub mod filter_row;
pub mod result_table;
pub mod search_page;
pub mod status_bar;

pub use filter_row::*;
pub use result_table::*;
pub use search_page::*;
pub use status_bar::*;
