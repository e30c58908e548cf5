use crate::config::ShowcaseSettings;
use crate::core::command::text_to_value;
use crate::domain::model::GreetingStyle;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "feature-showcase")]
#[command(about = "Runs a tour of small language features and prints each result")]
pub struct CliConfig {
    /// Path to a TOML file with showcase settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Greet with "I am" instead of "I'm"
    #[arg(long)]
    pub formal: bool,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i64>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub fibonacci_count: Option<usize>,

    #[arg(long)]
    pub factorial: Option<u32>,

    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub numbers: Option<Vec<i64>>,

    /// Command text, e.g. "move north" or "attack goblin 5"
    #[arg(long)]
    pub command: Option<String>,

    #[arg(long)]
    pub counter_tasks: Option<usize>,

    #[arg(long, allow_negative_numbers = true)]
    pub numerator: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub denominator: Option<f64>,

    #[arg(long, value_delimiter = ',')]
    pub urls: Option<Vec<String>>,

    #[arg(long)]
    pub fetch_delay_ms: Option<u64>,
}

impl CliConfig {
    /// Builds the run settings: defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<ShowcaseSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                ShowcaseSettings::from_file(path)?
            }
            None => ShowcaseSettings::default(),
        };

        if self.formal {
            settings.greeting_style = GreetingStyle::Formal;
        }
        if let Some(name) = &self.name {
            settings.person.name = name.clone();
        }
        if let Some(age) = self.age {
            settings.person.age = age;
        }
        if let Some(email) = &self.email {
            settings.person.email = Some(email.clone());
        }
        if let Some(count) = self.fibonacci_count {
            settings.fibonacci_count = count;
        }
        if let Some(n) = self.factorial {
            settings.factorial_input = n;
        }
        if let Some(numbers) = &self.numbers {
            settings.numbers = numbers.clone();
        }
        if let Some(command) = &self.command {
            settings.command = text_to_value(command);
        }
        if let Some(tasks) = self.counter_tasks {
            settings.counter_tasks = tasks;
        }
        if let Some(numerator) = self.numerator {
            settings.division.numerator = numerator;
        }
        if let Some(denominator) = self.denominator {
            settings.division.denominator = denominator;
        }
        if let Some(urls) = &self.urls {
            settings.fetch.urls = urls.clone();
        }
        if let Some(delay_ms) = self.fetch_delay_ms {
            settings.fetch.delay_ms = delay_ms;
        }

        Ok(settings)
    }
}
