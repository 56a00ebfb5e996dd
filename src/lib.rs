pub mod engine_types;
pub mod sieve_math;
pub mod prime_table;
pub mod config;
pub mod output;
pub mod prompt;

pub use engine_types::{PrimeResult, TableError};
pub use prime_table::PrimeTable;
