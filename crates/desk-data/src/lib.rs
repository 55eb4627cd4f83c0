//! Quote source implementations.
//!
//! The dashboard core only depends on the `QuoteSource` contract; this
//! crate supplies the sources it is wired to:
//! - `StaticQuoteSource`: in-memory fixture data
//! - `CsvQuoteSource`: per-symbol CSV files of dated closes
//! - `CachedQuoteSource`: TTL memo over any other source

mod cache;
mod csv_source;
mod memory;

pub use cache::CachedQuoteSource;
pub use csv_source::CsvQuoteSource;
pub use memory::StaticQuoteSource;
