use std::time::{Duration, Instant};

/// Measures how long a scope takes.
///
/// `scope` marks the start and hands back a guard. Dropping the guard records
/// the elapsed time, so it is recorded on every way out of the scope,
/// including a panic unwinding through it.
#[derive(Debug, Default)]
pub struct Timer {
    elapsed: Option<Duration>,
}

#[must_use = "the scope closes as soon as the guard is dropped"]
pub struct TimerGuard<'a> {
    timer: &'a mut Timer,
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&mut self) -> TimerGuard<'_> {
        TimerGuard {
            timer: self,
            start: Instant::now(),
        }
    }

    /// `None` until a scope has closed.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }
}

impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        self.timer.elapsed = Some(self.start.elapsed());
    }
}

/// Runs `work` inside a timer scope and returns its output with the elapsed time.
pub fn timed<T>(label: &str, work: impl FnOnce() -> T) -> (T, Duration) {
    let mut timer = Timer::new();
    let output = {
        let _scope = timer.scope();
        work()
    };
    let elapsed = timer.elapsed().unwrap_or_default();
    tracing::debug!("⏱️ {} took {:?}", label, elapsed);
    (output, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_elapsed_is_recorded_on_scope_exit() {
        let mut timer = Timer::new();
        assert!(timer.elapsed().is_none());

        {
            let _scope = timer.scope();
            std::thread::sleep(Duration::from_millis(5));
        }

        assert!(timer.elapsed().unwrap() >= Duration::from_millis(5));
    }

    #[test]
    fn test_elapsed_is_recorded_when_scope_panics() {
        let mut timer = Timer::new();

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let _scope = timer.scope();
            panic!("work failed");
        }));

        assert!(outcome.is_err());
        assert!(timer.elapsed().is_some());
    }

    #[test]
    fn test_reused_timer_keeps_latest_scope() {
        let mut timer = Timer::new();
        {
            let _scope = timer.scope();
            std::thread::sleep(Duration::from_millis(20));
        }
        let first = timer.elapsed().unwrap();
        {
            let _scope = timer.scope();
        }
        assert!(timer.elapsed().unwrap() < first);
    }

    #[test]
    fn test_timed_returns_output() {
        let (sum, elapsed) = timed("sum", || (1..=10).sum::<i32>());
        assert_eq!(sum, 55);
        assert!(elapsed < Duration::from_secs(1));
    }
}
