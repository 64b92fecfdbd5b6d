//! Wide TSV reading.

mod reader;

pub use reader::read_tsv_table;
