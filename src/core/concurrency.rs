use crate::utils::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

#[derive(Debug, Default)]
pub struct ConcurrentCounter {
    count: Mutex<usize>,
}

impl ConcurrentCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        *self.count.lock() += 1;
    }

    pub fn value(&self) -> usize {
        *self.count.lock()
    }
}

/// Spawns `tasks` tasks that each increment a shared counter once.
pub async fn count_concurrently(tasks: usize) -> Result<usize> {
    let counter = Arc::new(ConcurrentCounter::new());

    let handles: Vec<_> = (0..tasks)
        .map(|_| {
            let counter = Arc::clone(&counter);
            tokio::spawn(async move { counter.increment() })
        })
        .collect();

    for handle in handles {
        handle.await?;
    }

    Ok(counter.value())
}

/// Sends the square of each number down a channel from a spawned producer.
///
/// The channel closes once the last square is sent. Fails with
/// `RuntimeUnavailable` when called outside a tokio runtime.
pub fn squares_via_channel(numbers: Vec<i64>) -> Result<mpsc::Receiver<i128>> {
    let handle = Handle::try_current()?;
    let (tx, rx) = mpsc::channel(numbers.len().max(1));
    handle.spawn(async move {
        for n in numbers {
            let square = i128::from(n) * i128::from(n);
            if tx.send(square).await.is_err() {
                tracing::debug!("Square receiver dropped, stopping producer");
                break;
            }
        }
    });
    Ok(rx)
}

pub async fn collect_squares(mut rx: mpsc::Receiver<i128>) -> Vec<i128> {
    let mut squares = Vec::new();
    while let Some(square) = rx.recv().await {
        squares.push(square);
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ShowcaseError;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_counter_reaches_task_count() {
        assert_eq!(count_concurrently(100).await.unwrap(), 100);
    }

    #[tokio::test]
    async fn test_counter_with_no_tasks() {
        assert_eq!(count_concurrently(0).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_squares_arrive_in_order() {
        let squares = collect_squares(squares_via_channel(vec![1, 2, 3, 4, 5]).unwrap()).await;
        assert_eq!(squares, vec![1, 4, 9, 16, 25]);
    }

    #[tokio::test]
    async fn test_empty_channel_closes() {
        assert!(collect_squares(squares_via_channel(Vec::new()).unwrap())
            .await
            .is_empty());
    }

    #[test]
    fn test_channel_without_runtime_is_an_error() {
        let result = squares_via_channel(vec![1, 2, 3]);
        assert!(matches!(result, Err(ShowcaseError::RuntimeUnavailable(_))));
    }
}
