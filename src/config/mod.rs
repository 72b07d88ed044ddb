pub mod schema;

pub use schema::{Config, NotifyConfig, StoreConfig};
