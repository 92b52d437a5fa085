//! Interval-driven async refresh with latest-value delivery.

use std::future::Future;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use crate::error::ChartResult;

/// Repeatedly invokes an async producer and retains its latest result.
///
/// The producer runs immediately on spawn and then once per period. Slow
/// invocations overlap rather than delaying the next tick, and every
/// invocation carries a generation number: a completion is applied only when
/// its generation is newer than the last applied one, so an early request
/// that finishes late can never overwrite fresher data.
///
/// Failed invocations are logged and skipped; ticking continues. Dropping the
/// poller (or calling [`stop`](Self::stop)) aborts the task, after which no
/// in-flight completion can update the held value. To change the producer's
/// parameters, drop the poller and spawn a new one.
pub struct Poller<T> {
    latest: watch::Receiver<Option<T>>,
    handle: JoinHandle<()>,
}

impl<T> Poller<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn spawn<P, Fut>(period: Duration, producer: P) -> Self
    where
        P: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ChartResult<T>> + Send + 'static,
    {
        let (tx, rx) = watch::channel(None);
        let handle = tokio::spawn(poll_loop(period, producer, tx));
        Self { latest: rx, handle }
    }

    /// Clone of the most recent successful result, if any yet.
    #[must_use]
    pub fn latest(&self) -> Option<T> {
        self.latest.borrow().clone()
    }

    /// Receiver that observes every applied result; useful for render loops
    /// that want change notification instead of sampling.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<T>> {
        self.latest.clone()
    }

    /// Stops polling. In-flight invocations are dropped without effect.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn poll_loop<T, P, Fut>(period: Duration, producer: P, tx: watch::Sender<Option<T>>)
where
    T: Clone + Send + Sync + 'static,
    P: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = ChartResult<T>> + Send + 'static,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut in_flight = FuturesUnordered::new();
    let mut issued: u64 = 0;
    let mut applied: u64 = 0;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                issued += 1;
                let generation = issued;
                let invocation = producer();
                in_flight.push(async move { (generation, invocation.await) });
            }
            Some((generation, result)) = in_flight.next() => {
                match result {
                    Ok(value) if generation > applied => {
                        applied = generation;
                        if tx.send(Some(value)).is_err() {
                            return;
                        }
                    }
                    Ok(_) => {
                        tracing::debug!(generation, applied, "discarding stale poll result");
                    }
                    Err(error) => {
                        tracing::warn!(generation, %error, "poll tick failed");
                    }
                }
            }
        }
    }
}
