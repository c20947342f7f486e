//! Browser timer for the mock verifier

use async_trait::async_trait;
use kp_core::Timer;
use std::time::Duration;

pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
