use std::time::Duration;

use tokio::task::JoinHandle;

/// Cancelable one-shot timer behind the search refetch.
///
/// Arming cancels any shot that has not fired yet and starts the delay over;
/// a shot that already fired is past aborting, so only pending work is ever
/// cancelled.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn arm<F>(&mut self, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter_pair() -> (Arc<AtomicUsize>, impl Fn() -> usize) {
        let count = Arc::new(AtomicUsize::new(0));
        let reader = count.clone();
        (count, move || reader.load(Ordering::SeqCst))
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_the_delay() {
        let (count, fired) = counter_pair();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        let count_ref = count.clone();
        debouncer.arm(move || {
            count_ref.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(fired(), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_rearms_collapse_to_one_shot() {
        let (count, fired) = counter_pair();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        // Four keystrokes 100ms apart; only the last one survives.
        for _ in 0..4 {
            let count_ref = count.clone();
            debouncer.arm(move || {
                count_ref.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(fired(), 0);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_a_pending_shot() {
        let (count, fired) = counter_pair();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        let count_ref = count.clone();
        debouncer.arm(move || {
            count_ref.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(fired(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_fire_is_a_noop() {
        let (count, fired) = counter_pair();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        let count_ref = count.clone();
        debouncer.arm(move || {
            count_ref.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(fired(), 1);

        debouncer.cancel();
        assert_eq!(fired(), 1);
    }
}
