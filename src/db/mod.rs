pub mod catalog;
pub mod connection;
mod dialect;
pub mod providers;
pub mod sequence;

pub use catalog::Catalog;
pub use dialect::Dialect;
pub use providers::{DbProvider, DbProviders};
