//! # rollcall-advisor: Advisory-Insight Client
//!
//! Ships a textual summary of the registry's aggregate stats to a
//! third-party advisory service and brings back free-text advice.
//!
//! ## Call Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Advisory Call Flow                                 │
//! │                                                                         │
//! │  RegistrySummary                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  summary_text() ──► "Active members: 15\nTotal revenue: 5130\n..."     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST {endpoint} { "summary": "..." }   (bounded by timeout)           │
//! │       │                                                                 │
//! │       ├── 2xx ────► response body = advice text                         │
//! │       │                                                                 │
//! │       └── anything else (timeout, refused, non-success, read error)    │
//! │                │                                                        │
//! │                ▼                                                        │
//! │           FALLBACK_ADVICE (fixed string, logged at warn)               │
//! │                                                                         │
//! │  The call NEVER mutates domain state and NEVER propagates an error     │
//! │  to the caller. It is fire-and-forget from the registry's view.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use rollcall_core::RegistrySummary;

pub mod config;

pub use config::{AdvisorConfig, ConfigError};

// =============================================================================
// Fallback
// =============================================================================

/// Advice returned whenever the advisory service cannot be reached or
/// answers with anything other than success.
pub const FALLBACK_ADVICE: &str =
    "Advisory service is unavailable right now. Review the location breakdown \
     and revenue figures with your own judgment.";

// =============================================================================
// Summary Text
// =============================================================================

/// Renders the aggregate stats as the plain-text summary the advisory
/// service expects: total count, total revenue, then one line per location.
///
/// Revenue figures use display rounding; the exact amounts never leave the
/// core.
pub fn summary_text(summary: &RegistrySummary) -> String {
    let mut text = format!(
        "Active members: {}\nTotal revenue: {}\nPer location:\n",
        summary.total_count, summary.total_revenue
    );
    for row in &summary.per_location {
        text.push_str(&format!(
            "- {}: {} members, income {}\n",
            row.location.code(),
            row.count,
            row.income
        ));
    }
    text
}

// =============================================================================
// Client
// =============================================================================

/// Request payload for the advisory endpoint.
#[derive(Debug, Serialize)]
struct AdviceRequest<'a> {
    summary: &'a str,
}

/// HTTP client for the advisory-insight service.
#[derive(Debug, Clone)]
pub struct AdvisoryClient {
    http: reqwest::Client,
    config: AdvisorConfig,
}

impl AdvisoryClient {
    /// Creates a client from the given configuration.
    ///
    /// The per-request timeout is baked into the underlying HTTP client, so
    /// a hung advisory service can never stall a caller past it.
    pub fn new(config: AdvisorConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        AdvisoryClient { http, config }
    }

    /// Requests advice for the given summary.
    ///
    /// Always returns a usable string: the service's free-text advice on
    /// success, [`FALLBACK_ADVICE`] on any failure. Errors are logged at
    /// warn level and nothing is retried.
    pub async fn advise(&self, summary: &RegistrySummary) -> String {
        let text = summary_text(summary);
        debug!(endpoint = %self.config.endpoint, "requesting advisory insight");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&AdviceRequest { summary: &text })
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(advice) => advice,
                Err(err) => {
                    warn!(error = %err, "advisory response body unreadable, using fallback");
                    FALLBACK_ADVICE.to_string()
                }
            },
            Ok(resp) => {
                warn!(status = %resp.status(), "advisory service returned non-success, using fallback");
                FALLBACK_ADVICE.to_string()
            }
            Err(err) => {
                warn!(error = %err, "advisory request failed, using fallback");
                FALLBACK_ADVICE.to_string()
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
