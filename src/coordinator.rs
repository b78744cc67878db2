use std::{future::Future, pin::pin, time::Duration};

use async_trait::async_trait;
use bon::Builder;
use tokio::{
    signal,
    time::{MissedTickBehavior, interval},
};

use crate::prelude::*;

pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(60);

/// Source of the polled data.
#[async_trait]
pub trait Fetch: Sync {
    type Output: Send;

    async fn fetch(&self) -> Result<Self::Output>;
}

/// Periodically refreshes the data, keeping the last good result around.
#[must_use]
#[derive(Builder)]
pub struct Coordinator<F: Fetch> {
    fetcher: F,

    #[builder(into, default = DEFAULT_UPDATE_INTERVAL)]
    interval: Duration,

    #[builder(skip)]
    data: Option<F::Output>,

    #[builder(skip = true)]
    last_update_success: bool,
}

impl<F: Fetch> Coordinator<F> {
    pub const fn data(&self) -> Option<&F::Output> {
        self.data.as_ref()
    }

    pub const fn last_update_success(&self) -> bool {
        self.last_update_success
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch once.
    ///
    /// On failure, the previous data stays available while the update is marked unsuccessful.
    /// The failure is logged once per failing streak.
    pub async fn refresh(&mut self) -> Result<&F::Output> {
        match self.fetcher.fetch().await {
            Ok(data) => {
                if !self.last_update_success {
                    info!("fetching data recovered");
                }
                self.last_update_success = true;
                Ok(self.data.insert(data))
            }
            Err(error) => {
                if self.last_update_success {
                    error!("error fetching data: {error:#}");
                } else {
                    debug!("error fetching data: {error:#}");
                }
                self.last_update_success = false;
                Err(error)
            }
        }
    }

    /// The very first refresh must succeed, there is nothing to fall back to.
    pub async fn first_refresh(&mut self) -> Result<&F::Output> {
        self.refresh().await.context("failed to load initial data")
    }

    /// Poll until Ctrl-C.
    pub async fn run(self, listener: impl FnMut(&Self)) -> Result {
        let shutdown = async { signal::ctrl_c().await.context("failed to listen for Ctrl-C") };
        self.run_until(shutdown, listener).await.map(drop)
    }

    /// Refresh on every tick until `shutdown` resolves, notifying the listener after each attempt.
    ///
    /// The first tick happens one interval from now.
    pub async fn run_until(
        mut self,
        shutdown: impl Future<Output = Result>,
        mut listener: impl FnMut(&Self),
    ) -> Result<Self> {
        ensure!(!self.interval.is_zero(), "the update interval must be positive");

        let mut ticker = interval(self.interval);
        ticker.reset_after(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut shutdown = pin!(shutdown);

        loop {
            tokio::select! {
                result = &mut shutdown => {
                    result?;
                    info!("shutting down…");
                    return Ok(self);
                }
                _ = ticker.tick() => {}
            }

            // Already logged and reflected in `last_update_success`.
            let _ = self.refresh().await;
            listener(&self);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, sync::Mutex};

    use super::*;

    struct Scripted(Mutex<VecDeque<Result<u32>>>);

    impl Scripted {
        fn new(results: impl IntoIterator<Item = Result<u32>>) -> Self {
            Self(Mutex::new(results.into_iter().collect()))
        }
    }

    #[async_trait]
    impl Fetch for Scripted {
        type Output = u32;

        async fn fetch(&self) -> Result<u32> {
            self.0.lock().unwrap().pop_front().unwrap_or_else(|| Err(anyhow!("exhausted")))
        }
    }

    fn coordinator(results: impl IntoIterator<Item = Result<u32>>) -> Coordinator<Scripted> {
        Coordinator::builder()
            .fetcher(Scripted::new(results))
            .interval(Duration::from_millis(1))
            .build()
    }

    #[tokio::test]
    async fn refresh_caches_data() -> Result {
        let mut coordinator = coordinator([Ok(1), Ok(2)]);
        assert!(coordinator.data().is_none());
        assert_eq!(*coordinator.refresh().await?, 1);
        assert_eq!(*coordinator.refresh().await?, 2);
        assert_eq!(coordinator.data(), Some(&2));
        assert!(coordinator.last_update_success());
        Ok(())
    }

    #[tokio::test]
    async fn failure_keeps_last_good_data() -> Result {
        let mut coordinator = coordinator([Ok(1), Err(anyhow!("timeout")), Ok(3)]);
        coordinator.first_refresh().await?;

        assert!(coordinator.refresh().await.is_err());
        assert!(!coordinator.last_update_success());
        assert_eq!(coordinator.data(), Some(&1));

        assert_eq!(*coordinator.refresh().await?, 3);
        assert!(coordinator.last_update_success());
        Ok(())
    }

    #[tokio::test]
    async fn first_refresh_fails() {
        let mut coordinator = coordinator([Err(anyhow!("connection refused"))]);
        let error = coordinator.first_refresh().await.unwrap_err();
        assert_eq!(error.to_string(), "failed to load initial data");
        assert!(coordinator.data().is_none());
        assert!(!coordinator.last_update_success());
    }

    #[tokio::test]
    async fn run_until_notifies_listener() -> Result {
        let mut n_notifications = 0;
        let coordinator = coordinator([Ok(1), Ok(2), Ok(3)])
            .run_until(
                async {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    Ok(())
                },
                |_| n_notifications += 1,
            )
            .await?;
        assert!(n_notifications >= 1);
        assert!(coordinator.data().is_some());
        Ok(())
    }

    #[test]
    fn default_interval_ok() {
        let coordinator = Coordinator::builder().fetcher(Scripted::new([])).build();
        assert_eq!(coordinator.interval(), DEFAULT_UPDATE_INTERVAL);
    }

    #[tokio::test]
    async fn run_until_rejects_zero_interval() {
        let result = Coordinator::builder()
            .fetcher(Scripted::new([]))
            .interval(Duration::ZERO)
            .build()
            .run_until(async { Ok(()) }, |_| {})
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn run_rejects_zero_interval() {
        let error = Coordinator::builder()
            .fetcher(Scripted::new([]))
            .interval(Duration::ZERO)
            .build()
            .run(|_| {})
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "the update interval must be positive");
    }

    #[tokio::test]
    async fn run_until_propagates_shutdown_error() {
        let result = coordinator([])
            .run_until(async { Err(anyhow!("signal handler failed")) }, |_| {})
            .await;
        assert!(result.is_err());
    }
}
