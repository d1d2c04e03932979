//! # Quote Session
//!
//! An interactive front-end edits its inputs one field at a time and wants
//! a fresh breakdown after every edit. `QuoteSession` owns that mutable
//! input state and recomputes through the pure engine, reusing the previous
//! result while the inputs are unchanged.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::session::QuoteSession;
//! use quote_core::{GlobalConfig, JobDetails};
//!
//! let mut session = QuoteSession::new(GlobalConfig::default(), JobDetails::default());
//! let before = session.breakdown().total_with_markup;
//!
//! session.update_job(|job| job.markup_percentage = 50.0);
//! assert!(session.breakdown().total_with_markup > before);
//! ```

use tracing::trace;

use crate::calculations::quote::{compute_breakdown, CostBreakdown};
use crate::config::GlobalConfig;
use crate::job::JobDetails;

/// Inputs and memoized result for one quoting session.
#[derive(Debug, Clone)]
pub struct QuoteSession {
    config: GlobalConfig,
    job: JobDetails,
    /// Last computed result with the inputs it was computed from
    cached: Option<(GlobalConfig, JobDetails, CostBreakdown)>,
    recomputes: u64,
}

impl QuoteSession {
    pub fn new(config: GlobalConfig, job: JobDetails) -> Self {
        QuoteSession {
            config,
            job,
            cached: None,
            recomputes: 0,
        }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    pub fn job(&self) -> &JobDetails {
        &self.job
    }

    /// Edit the shop configuration in place.
    pub fn update_config(&mut self, edit: impl FnOnce(&mut GlobalConfig)) {
        edit(&mut self.config);
    }

    /// Edit the job in place.
    pub fn update_job(&mut self, edit: impl FnOnce(&mut JobDetails)) {
        edit(&mut self.job);
    }

    /// Breakdown for the current inputs.
    ///
    /// Identical to `compute_breakdown(self.config(), self.job())`; the engine
    /// only runs when the inputs differ from the last call.
    pub fn breakdown(&mut self) -> CostBreakdown {
        if let Some((config, job, breakdown)) = &self.cached {
            if *config == self.config && *job == self.job {
                trace!("quote inputs unchanged, reusing breakdown");
                return *breakdown;
            }
        }

        let breakdown = compute_breakdown(&self.config, &self.job);
        self.recomputes += 1;
        trace!(recomputes = self.recomputes, "recomputed quote breakdown");
        self.cached = Some((self.config.clone(), self.job.clone(), breakdown));
        breakdown
    }

    /// How many times the engine has run for this session
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}

impl Default for QuoteSession {
    fn default() -> Self {
        QuoteSession::new(GlobalConfig::default(), JobDetails::default())
    }
}
