//! Simulated call latency.

use std::time::Duration;

/// Wait `duration` on whatever timer the target provides.
pub(crate) async fn pause(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    #[cfg(feature = "browser")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(all(not(feature = "browser"), not(target_arch = "wasm32")))]
    {
        tokio::time::sleep(duration).await;
    }
    #[cfg(all(not(feature = "browser"), target_arch = "wasm32"))]
    {
        let _ = duration;
    }
}
