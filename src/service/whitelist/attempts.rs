//! Lifetime attempt accounting for whitelist submissions.

use crate::{
    error::whitelist::WhitelistError,
    model::whitelist::{WhitelistRequest, WhitelistStatus},
};

/// Lifetime cap on whitelist submissions per account. Never resets, not
/// even when every prior request was rejected.
pub const MAX_ATTEMPTS: u32 = 3;

/// Attempt budget of an account that is allowed to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptBudget {
    /// Requests the account has already submitted.
    pub used: u32,
}

impl AttemptBudget {
    /// Submissions still available, counting the one being made.
    pub fn remaining(&self) -> u32 {
        MAX_ATTEMPTS - self.used
    }
}

/// Decides whether an account may submit a new application.
///
/// Pure decision over the account's full request history. The cap check
/// runs before the pending check: an account with a spent budget gets the
/// max-attempts refusal even when one of its requests is still pending.
///
/// # Arguments
/// - `existing` - Every request the account has ever submitted
///
/// # Returns
/// - `Ok(AttemptBudget)` - Submission allowed, with the used count
/// - `Err(WhitelistError::MaxAttemptsReached)` - Lifetime cap spent
/// - `Err(WhitelistError::ActiveRequestExists)` - A request is pending
pub fn check_eligibility(existing: &[WhitelistRequest]) -> Result<AttemptBudget, WhitelistError> {
    let used = existing.len() as u32;

    if used >= MAX_ATTEMPTS {
        return Err(WhitelistError::MaxAttemptsReached(MAX_ATTEMPTS));
    }

    if existing
        .iter()
        .any(|request| request.status == WhitelistStatus::Pending)
    {
        return Err(WhitelistError::ActiveRequestExists);
    }

    Ok(AttemptBudget { used })
}
