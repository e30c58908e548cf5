use crate::domain::model::{FetchResult, GreetingStyle, Person};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

pub trait Greeter {
    fn greet(&self) -> String;
}

impl Greeter for Person {
    fn greet(&self) -> String {
        self.greet_with(GreetingStyle::default())
    }
}

/// Backing map for a memoized function.
pub trait CacheStore<K, V>: Default {
    fn get(&self, key: &K) -> Option<&V>;
    fn insert(&mut self, key: K, value: V);
    fn len(&self) -> usize;
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResult>;
}

pub trait ConfigProvider: Send + Sync {
    fn person(&self) -> Person;
    fn greeting_style(&self) -> GreetingStyle;
    fn fibonacci_count(&self) -> usize;
    fn factorial_input(&self) -> u32;
    fn numbers(&self) -> &[i64];
    fn command(&self) -> &serde_json::Value;
    fn counter_tasks(&self) -> usize;
    fn division(&self) -> (f64, f64);
    fn inventory(&self) -> &BTreeMap<String, u32>;
    fn fetch_urls(&self) -> &[String];
    fn fetch_delay(&self) -> Duration;
}
