pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::ShowcaseSettings;

pub use crate::core::command::{handle_command, handle_value, Command};
pub use crate::core::fetch::{fetch_all, SimulatedSource};
pub use crate::core::fibonacci::{fibonacci, Fibonacci};
pub use crate::core::memoize::{factorial, Memoized};
pub use crate::core::numbers::process_numbers;
pub use crate::core::showcase::{Showcase, ShowcaseReport};
pub use crate::core::timer::Timer;
pub use domain::model::{FetchResult, GreetingStyle, Person};
pub use domain::ports::Greeter;
pub use utils::error::{Result, ShowcaseError};
