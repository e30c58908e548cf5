pub mod collections;
pub mod command;
pub mod concurrency;
pub mod fetch;
pub mod fibonacci;
pub mod memoize;
pub mod numbers;
pub mod showcase;
pub mod timer;

pub use crate::domain::model::{FetchResult, GreetingStyle, Person, ProcessedNumbers};
pub use crate::domain::ports::{CacheStore, ConfigProvider, DataSource, Greeter};
pub use crate::utils::error::Result;
