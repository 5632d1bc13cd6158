//! Export of the entry list

mod csv_writer;

pub use csv_writer::{write_csv, HEADERS};
