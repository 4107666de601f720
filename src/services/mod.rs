pub mod data_source;
pub mod user_service;

pub use data_source::DataSource;
pub use user_service::PgDataSource;
