pub mod db;
pub mod error;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::SignalStore;
