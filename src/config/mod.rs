#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::collections::default_inventory;
use crate::core::fibonacci::MAX_TERMS;
use crate::core::memoize::MAX_FACTORIAL_INPUT;
use crate::domain::model::{GreetingStyle, Person};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Resolved settings for one run. The defaults reproduce the stock demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseSettings {
    pub greeting_style: GreetingStyle,
    pub fibonacci_count: usize,
    pub factorial_input: u32,
    pub numbers: Vec<i64>,
    pub command: Value,
    pub counter_tasks: usize,
    pub person: Person,
    pub division: DivisionSettings,
    pub inventory: BTreeMap<String, u32>,
    pub fetch: FetchSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DivisionSettings {
    pub numerator: f64,
    pub denominator: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    pub urls: Vec<String>,
    pub delay_ms: u64,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            greeting_style: GreetingStyle::Contracted,
            fibonacci_count: 10,
            factorial_input: 10,
            numbers: vec![1, 2, 3, 4, 5],
            command: Value::from(vec!["move", "north"]),
            counter_tasks: 100,
            person: Person::new("Alice", 30, Some("alice@example.com".to_string())),
            division: DivisionSettings::default(),
            inventory: default_inventory(),
            fetch: FetchSettings::default(),
        }
    }
}

impl Default for DivisionSettings {
    fn default() -> Self {
        Self {
            numerator: 10.0,
            denominator: 2.0,
        }
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            urls: vec![
                "https://example.com/1".to_string(),
                "https://example.com/2".to_string(),
            ],
            delay_ms: 100,
        }
    }
}

impl ConfigProvider for ShowcaseSettings {
    fn person(&self) -> Person {
        self.person.clone()
    }

    fn greeting_style(&self) -> GreetingStyle {
        self.greeting_style
    }

    fn fibonacci_count(&self) -> usize {
        self.fibonacci_count
    }

    fn factorial_input(&self) -> u32 {
        self.factorial_input
    }

    fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    fn command(&self) -> &Value {
        &self.command
    }

    fn counter_tasks(&self) -> usize {
        self.counter_tasks
    }

    fn division(&self) -> (f64, f64) {
        (self.division.numerator, self.division.denominator)
    }

    fn inventory(&self) -> &BTreeMap<String, u32> {
        &self.inventory
    }

    fn fetch_urls(&self) -> &[String] {
        &self.fetch.urls
    }

    fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch.delay_ms)
    }
}

impl Validate for ShowcaseSettings {
    fn validate(&self) -> Result<()> {
        validate_range("fibonacci_count", self.fibonacci_count, 0, MAX_TERMS)?;
        validate_range("factorial_input", self.factorial_input, 0, MAX_FACTORIAL_INPUT)?;
        validate_positive_number("counter_tasks", self.counter_tasks, 1)?;

        for url in &self.fetch.urls {
            validate_url("fetch.urls", url)?;
        }

        Ok(())
    }
}
