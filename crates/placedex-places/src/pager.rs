//! Paginated search drive as an explicit state machine.
//!
//! Replaces the nested retry/pagination loop shape with named states and
//! clear transition conditions:
//!
//! ```text
//! Requesting ──200──▶ PageAvailable ──token──▶ Backoff(page delay) ──▶ Requesting
//!     │                     │
//!     │429, attempts left   └─no token──▶ Done
//!     ▼
//! Backoff(2^attempt s + jitter) ──▶ Requesting
//!     │429, ceiling hit
//!     ▼
//! Exhausted  (pagination stops silently; the query is abandoned)
//! ```
//!
//! Any other failure moves to `Done` and propagates the error so the
//! orchestrator can log it and continue with the next query.

use std::time::Duration;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::grid::GridPoint;
use crate::types::ApiPlace;

/// Hard page ceiling per query, guarding against cycling page tokens.
const MAX_PAGES: usize = 60;

/// Retry and pacing policy for one paginated query.
#[derive(Debug, Clone)]
pub struct PagerPolicy {
    /// Additional attempts after the first 429 before the query is abandoned.
    pub max_retries: u32,
    /// Base for the exponential rate-limit backoff, in seconds. The wait
    /// before retry `n` is `base * 2^(n-1)` seconds plus a fractional jitter
    /// (zero base means no wait, used by tests).
    pub backoff_base_secs: u64,
    /// Fixed delay before requesting each subsequent page, per API guidance.
    pub page_delay: Duration,
}

impl Default for PagerPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            backoff_base_secs: 1,
            page_delay: Duration::from_secs(2),
        }
    }
}

enum PagerState {
    Requesting {
        token: Option<String>,
        attempt: u32,
    },
    Backoff {
        token: Option<String>,
        next_attempt: u32,
        delay: Duration,
    },
    PageAvailable {
        places: Vec<ApiPlace>,
        next_token: Option<String>,
    },
    Exhausted,
    Done,
}

/// Drives one query's pagination through the state machine above.
pub struct SearchPager<'a> {
    client: &'a PlacesClient,
    query: String,
    center: GridPoint,
    radius_m: f64,
    policy: PagerPolicy,
    state: PagerState,
    pages_fetched: usize,
}

impl<'a> SearchPager<'a> {
    #[must_use]
    pub fn new(
        client: &'a PlacesClient,
        query: &str,
        center: GridPoint,
        radius_m: f64,
        policy: PagerPolicy,
    ) -> Self {
        Self {
            client,
            query: query.to_owned(),
            center,
            radius_m,
            policy,
            state: PagerState::Requesting {
                token: None,
                attempt: 0,
            },
            pages_fetched: 0,
        }
    }

    /// Whether the pager stopped because the retry ceiling was exhausted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, PagerState::Exhausted)
    }

    /// Advances the state machine until the next page is available or
    /// pagination ends.
    ///
    /// Returns `Ok(Some(places))` for each page, `Ok(None)` once pagination
    /// is over, including the silent stop after the retry ceiling.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::UnexpectedStatus`], [`PlacesError::Http`],
    ///   [`PlacesError::Deserialize`]: the request failed for a reason a
    ///   backoff cannot fix; the pager moves to `Done`.
    /// - [`PlacesError::PaginationLimit`]: more than [`MAX_PAGES`] pages.
    pub async fn next_page(&mut self) -> Result<Option<Vec<ApiPlace>>, PlacesError> {
        loop {
            match std::mem::replace(&mut self.state, PagerState::Done) {
                PagerState::Done => return Ok(None),
                PagerState::Exhausted => {
                    self.state = PagerState::Exhausted;
                    return Ok(None);
                }
                PagerState::Requesting { token, attempt } => {
                    if self.pages_fetched >= MAX_PAGES {
                        return Err(PlacesError::PaginationLimit {
                            query: self.query.clone(),
                            max_pages: MAX_PAGES,
                        });
                    }
                    match self
                        .client
                        .search_page(&self.query, self.center, self.radius_m, token.as_deref())
                        .await
                    {
                        Ok(page) => {
                            self.pages_fetched += 1;
                            self.state = PagerState::PageAvailable {
                                places: page.places,
                                next_token: page.next_page_token,
                            };
                        }
                        Err(PlacesError::RateLimited) if attempt < self.policy.max_retries => {
                            let delay = rate_limit_delay(self.policy.backoff_base_secs, attempt);
                            tracing::warn!(
                                query = %self.query,
                                attempt,
                                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                                "rate limited, backing off"
                            );
                            self.state = PagerState::Backoff {
                                token,
                                next_attempt: attempt + 1,
                                delay,
                            };
                        }
                        Err(PlacesError::RateLimited) => {
                            tracing::warn!(
                                query = %self.query,
                                max_retries = self.policy.max_retries,
                                "retry ceiling reached, abandoning query"
                            );
                            self.state = PagerState::Exhausted;
                            return Ok(None);
                        }
                        Err(err) => return Err(err),
                    }
                }
                PagerState::Backoff {
                    token,
                    next_attempt,
                    delay,
                } => {
                    tokio::time::sleep(delay).await;
                    self.state = PagerState::Requesting {
                        token,
                        attempt: next_attempt,
                    };
                }
                PagerState::PageAvailable { places, next_token } => {
                    self.state = match next_token {
                        Some(token) => PagerState::Backoff {
                            token: Some(token),
                            next_attempt: 0,
                            delay: self.policy.page_delay,
                        },
                        None => PagerState::Done,
                    };
                    return Ok(Some(places));
                }
            }
        }
    }
}

/// `base * 2^attempt` seconds plus a fractional jitter so simultaneous
/// retries spread out. A zero base disables the wait entirely. Capped at
/// 60 seconds.
fn rate_limit_delay(base_secs: u64, attempt: u32) -> Duration {
    const MAX_DELAY_SECS: u64 = 60;
    let secs = base_secs
        .saturating_mul(1u64 << attempt.min(16))
        .min(MAX_DELAY_SECS);
    if secs == 0 {
        return Duration::ZERO;
    }
    #[allow(clippy::cast_precision_loss)]
    Duration::from_secs_f64(secs as f64 + rand::random::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_grows_exponentially() {
        let d0 = rate_limit_delay(1, 0);
        let d3 = rate_limit_delay(1, 3);
        assert!(d0.as_secs_f64() >= 1.0 && d0.as_secs_f64() < 2.0, "{d0:?}");
        assert!(d3.as_secs_f64() >= 8.0 && d3.as_secs_f64() < 9.0, "{d3:?}");
    }

    #[test]
    fn zero_base_means_no_wait() {
        assert_eq!(rate_limit_delay(0, 5), Duration::ZERO);
    }

    #[test]
    fn delay_is_capped_at_sixty_seconds() {
        let d = rate_limit_delay(u64::MAX, u32::MAX);
        assert!(d.as_secs_f64() >= 60.0 && d.as_secs_f64() < 61.0, "{d:?}");
    }
}
