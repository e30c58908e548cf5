use crate::core::collections::{describe_inventory, squares};
use crate::core::command::handle_value;
use crate::core::concurrency::{collect_squares, count_concurrently, squares_via_channel};
use crate::core::fetch::{fetch_all, SimulatedSource};
use crate::core::fibonacci::{fibonacci, Fibonacci, MAX_TERMS};
use crate::core::memoize::factorial;
use crate::core::numbers::{divide, process_numbers};
use crate::core::timer::timed;
use crate::domain::model::{FetchResult, ProcessedNumbers};
use crate::domain::ports::{ConfigProvider, DataSource};
use crate::utils::error::{Result, ShowcaseError};
use std::io::Write;
use std::time::Duration;

/// Everything one run computed, in the order it was printed.
#[derive(Debug, Clone)]
pub struct ShowcaseReport {
    pub greeting: String,
    pub person: String,
    pub fibonacci_lazy: Vec<u64>,
    pub fibonacci_eager: Vec<u64>,
    pub factorial: u128,
    pub processed: ProcessedNumbers,
    pub processing_time: Duration,
    pub command_response: String,
    pub slice_squares: Vec<i128>,
    pub inventory_lines: Vec<String>,
    pub channel_squares: Vec<i128>,
    pub counter_value: usize,
    pub division: Option<f64>,
    pub fetch_results: Vec<FetchResult>,
}

pub struct Showcase<C: ConfigProvider> {
    config: C,
    source: Box<dyn DataSource>,
}

impl<C: ConfigProvider> Showcase<C> {
    pub fn new(config: C) -> Self {
        let source = SimulatedSource::new(config.fetch_delay());
        Self::with_source(config, source)
    }

    pub fn with_source(config: C, source: impl DataSource + 'static) -> Self {
        Self {
            config,
            source: Box::new(source),
        }
    }

    /// Runs every demo step once and writes one line per result to `out`.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<ShowcaseReport> {
        tracing::info!("Starting feature showcase");

        let person = self.config.person();
        let greeting = person.greet_with(self.config.greeting_style());
        writeln!(out, "{}", greeting)?;
        writeln!(out, "{}", person)?;

        let count = self.config.fibonacci_count();
        // Checked once, before either producer prints.
        if count > MAX_TERMS {
            return Err(ShowcaseError::overflow("fibonacci", count));
        }
        tracing::debug!("Generating {} Fibonacci terms", count);
        let fibonacci_lazy: Vec<u64> = Fibonacci::new(count).collect();
        writeln!(out, "Fibonacci: {:?}", fibonacci_lazy)?;
        let fibonacci_eager = fibonacci(count)?;
        writeln!(
            out,
            "First {} Fibonacci numbers: {:?}",
            count, fibonacci_eager
        )?;

        let n = self.config.factorial_input();
        let factorial = factorial(n)?;
        writeln!(out, "Factorial of {}: {}", n, factorial)?;

        let (processed, processing_time) =
            timed("process_numbers", || process_numbers(self.config.numbers()));
        writeln!(
            out,
            "Processed in {:.4}s: {}",
            processing_time.as_secs_f64(),
            serde_json::to_string(&processed)?
        )?;

        let command_response = handle_value(self.config.command());
        tracing::debug!("Command {} -> {}", self.config.command(), command_response);
        writeln!(out, "{}", command_response)?;

        let slice_squares = squares(self.config.numbers());
        writeln!(
            out,
            "Squares of {:?}: {:?}",
            self.config.numbers(),
            slice_squares
        )?;

        let inventory_lines = describe_inventory(self.config.inventory());
        for line in &inventory_lines {
            writeln!(out, "{}", line)?;
        }

        let channel_squares =
            collect_squares(squares_via_channel(self.config.numbers().to_vec())?).await;
        let joined: Vec<String> = channel_squares.iter().map(|sq| sq.to_string()).collect();
        writeln!(out, "Squares via channel: {}", joined.join(", "))?;

        let tasks = self.config.counter_tasks();
        let counter_value = count_concurrently(tasks).await?;
        writeln!(
            out,
            "Counter value after {} increments: {}",
            tasks, counter_value
        )?;

        let (numerator, denominator) = self.config.division();
        let division = match divide(numerator, denominator) {
            Ok(result) => {
                writeln!(out, "Division result: {:.2}", result)?;
                Some(result)
            }
            Err(e) => {
                tracing::warn!("Division skipped: {}", e);
                writeln!(out, "Error: {}", e)?;
                None
            }
        };

        let fetch_results = fetch_all(self.source.as_ref(), self.config.fetch_urls()).await?;
        writeln!(
            out,
            "Async results: {}",
            serde_json::to_string(&fetch_results)?
        )?;

        tracing::info!("Feature showcase finished");

        Ok(ShowcaseReport {
            greeting,
            person: person.to_string(),
            fibonacci_lazy,
            fibonacci_eager,
            factorial,
            processed,
            processing_time,
            command_response,
            slice_squares,
            inventory_lines,
            channel_squares,
            counter_value,
            division,
            fetch_results,
        })
    }
}
