mod dest;
pub mod error;
pub mod store;

pub use crate::dest::Destination;
pub use crate::store::ObjectStore;
use std::sync::Arc;

pub type StoreHandle = Arc<dyn ObjectStore + Send + Sync>;
