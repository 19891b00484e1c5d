pub mod audit;
pub mod catalog;
pub mod csv_export;
pub mod dedup;
pub mod error;
pub mod id;
pub mod product;
pub mod session;
