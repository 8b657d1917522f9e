//! [`LinkStore`] backends: DynamoDB for production, an in-memory map for
//! local runs and tests, and a timeout decorator usable with either.

pub mod dynamodb;
pub mod memory;
pub mod timeout;

pub use dynamodb::{DynamoDbLinkStore, DynamoDbSettings};
pub use memory::InMemoryLinkStore;
pub use snip_core::store::{LinkStore, Result};
pub use snip_core::{Link, ShortCode, StorageError};
pub use timeout::TimeoutLinkStore;
