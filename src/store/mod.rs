pub mod factory;
pub mod http;
pub mod http_client;
pub mod traits;

pub use factory::build_store;
pub use http::HttpStore;
pub use traits::{ContactStore, TagStore};
