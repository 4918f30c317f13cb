pub mod http_api;
pub mod sqlite_store;

pub use http_api::HttpUserApi;
pub use sqlite_store::SqliteUserStore;
