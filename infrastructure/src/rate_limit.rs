//! Call-rate limiting for text generators
//!
//! Every technique handler and the summary step share one generator, so a
//! single limiter placed here bounds the whole process.

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use scamper_application::{GenerationError, GenerationParams, TextGenerator};
use std::num::NonZeroU32;
use tracing::debug;

/// Wraps a [`TextGenerator`] and waits for a permit before each call
pub struct RateLimitedGenerator<G: TextGenerator> {
    inner: G,
    limiter: Option<DefaultDirectRateLimiter>,
}

impl<G: TextGenerator> RateLimitedGenerator<G> {
    /// `max_calls_per_minute == 0` disables limiting.
    pub fn new(inner: G, max_calls_per_minute: u32) -> Self {
        let limiter = NonZeroU32::new(max_calls_per_minute)
            .map(|n| RateLimiter::direct(Quota::per_minute(n)));
        Self { inner, limiter }
    }

    pub fn is_limited(&self) -> bool {
        self.limiter.is_some()
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

#[async_trait]
impl<G: TextGenerator> TextGenerator for RateLimitedGenerator<G> {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError> {
        if let Some(limiter) = &self.limiter {
            if limiter.check().is_err() {
                debug!("Generation rate limit reached, waiting for a permit");
                limiter.until_ready().await;
            }
        }
        self.inner.generate(prompt, params).await
    }
}
