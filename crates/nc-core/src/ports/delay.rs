use std::time::Duration;

/// Suspends the caller. Injected so staged progress can run on paused time
/// in tests.
#[async_trait::async_trait]
pub trait DelayPort: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
