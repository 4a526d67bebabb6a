//! Profession table adapters.

mod csv_source;
mod in_memory;

pub use csv_source::CsvProfessionSource;
pub use in_memory::InMemoryProfessionSource;
