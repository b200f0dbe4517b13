pub mod dashboard_view;
pub mod frames;
pub mod season;
pub mod table_kind;
pub mod traits;
pub mod workday;
