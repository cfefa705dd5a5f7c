use std::future::Future;
use std::time::{Duration, Instant};

/// Run a future to completion and measure how long it took.
///
/// The measurement is scoped to this one call; nothing is recorded globally.
///
/// # Example
///
/// ```rust
/// use rule110::utils::timed;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (value, elapsed) = timed(async { 6 * 7 }).await;
/// assert_eq!(value, 42);
/// assert!(elapsed.as_secs() < 1);
/// # }
/// ```
pub async fn timed<F: Future>(future: F) -> (F::Output, Duration) {
    let start = Instant::now();
    let output = future.await;
    (output, start.elapsed())
}
