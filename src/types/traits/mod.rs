pub mod any;
pub mod types;
pub(crate) mod utils;
