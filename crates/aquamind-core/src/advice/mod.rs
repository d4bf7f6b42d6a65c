//! Motivational advice: model, trigger policy and generator seam.
//!
//! Advice is disposable. It is replaced wholesale on every refresh and
//! never persisted; a failing generator degrades to a fixed local
//! fallback instead of surfacing an error.

pub mod gemini;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceCategory {
    Motivation,
    Health,
    Alert,
}

impl std::fmt::Display for AdviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AdviceCategory::Motivation => "motivation",
            AdviceCategory::Health => "health",
            AdviceCategory::Alert => "alert",
        })
    }
}

/// A short motivational message plus category tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub message: String,
    pub category: AdviceCategory,
}

impl Advice {
    /// Returned whenever the remote generator fails for any reason.
    pub fn fallback() -> Self {
        Self {
            message: "Su içmeyi unutma, vücudun sana teşekkür edecek!".to_string(),
            category: AdviceCategory::Motivation,
        }
    }
}

/// The remote advice collaborator.
///
/// `generate` is infallible by contract: any upstream failure (network,
/// malformed response, quota) collapses into [`Advice::fallback`].
#[async_trait]
pub trait AdviceGenerator: Send + Sync {
    async fn generate(&self, settings: &Settings, current_intake_ml: f64) -> Advice;
}

/// Decides when to ask for a fresh message.
///
/// The on-add trigger is intentionally randomized and unseeded; only the
/// probability parameter is configurable.
#[derive(Debug, Clone)]
pub struct TriggerPolicy {
    refresh_probability: f64,
}

impl Default for TriggerPolicy {
    fn default() -> Self {
        // Matches the original client: refresh after ~30% of logged drinks.
        Self::new(0.3)
    }
}

impl TriggerPolicy {
    pub fn new(refresh_probability: f64) -> Self {
        Self {
            refresh_probability: refresh_probability.clamp(0.0, 1.0),
        }
    }

    pub fn refresh_probability(&self) -> f64 {
        self.refresh_probability
    }

    /// True on startup iff no drinks were logged today yet.
    pub fn should_refresh_on_startup(&self, log_count: usize) -> bool {
        log_count == 0
    }

    /// Independent draw per intake-add event.
    pub fn should_refresh_on_add(&self) -> bool {
        self.should_refresh_on_add_with(&mut rand::thread_rng())
    }

    /// Same policy with an injected rng, for deterministic tests.
    pub fn should_refresh_on_add_with<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen::<f64>() < self.refresh_probability
    }
}
