use std::time::Duration;

use async_trait::async_trait;
use nc_core::ports::DelayPort;

/// Progress ticks backed by the tokio timer.
pub struct TokioDelay;

#[async_trait]
impl DelayPort for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
