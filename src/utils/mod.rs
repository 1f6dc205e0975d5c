pub mod number_parser;
pub mod table_formatter;

pub use number_parser::NumberParser;
pub use table_formatter::TableFormatter;
