mod aggregation;
mod bike_share;
mod error;
mod filtering;
mod snapshot;
mod table_data;
mod types;

#[cfg(test)]
mod test_fixtures;

pub use bike_share::*;
pub use error::BikeShareError;
pub use filtering::*;
pub use snapshot::*;

pub use aggregation::correlation::*;
pub use aggregation::distribution::*;
pub use aggregation::hourly::*;
pub use aggregation::monthly::*;
pub use aggregation::summary::*;
pub use aggregation::trend::*;

pub use table_data::data_loader::*;
pub use table_data::error::LoadError;
pub use table_data::source::*;
pub use table_data::table_cache::TableCache;

pub use types::dashboard_view::*;
pub use types::season::*;
pub use types::table_kind::TableKind;
pub use types::workday::WorkdayKind;

pub use types::frames::daily_frame::*;
pub use types::frames::hourly_frame::*;

pub use types::traits::any::any_date::AnyDate;
pub use types::traits::types::DateRange;
pub use types::traits::types::Month;
pub use types::traits::types::Year;
