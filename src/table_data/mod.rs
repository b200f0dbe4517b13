pub mod data_loader;
pub mod error;
pub mod source;
pub mod table_cache;
