//! Role side effects of whitelist status transitions.
//!
//! The state machine is fully connected: an admin may move a request
//! between any two states. Each transition maps to a fixed list of role
//! mutations, kept separate from the status assignment itself so the
//! external effect can fail without disturbing the stored state.

use crate::model::whitelist::WhitelistStatus;

/// A single mutation to apply against the Discord role system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleAction {
    GrantWhitelisted,
    RevokeWhitelisted,
    GrantWaiting,
    RemoveWaiting,
}

/// Maps a status change to the role mutations it implies.
///
/// Re-asserting the current status implies no role work; grants and
/// revokes are idempotent on Discord's side, so there is nothing to
/// re-apply.
pub fn role_actions(from: WhitelistStatus, to: WhitelistStatus) -> &'static [RoleAction] {
    use RoleAction::*;
    use WhitelistStatus::*;

    match (from, to) {
        (Pending, Approved) => &[GrantWhitelisted, RemoveWaiting],
        (Pending, Rejected) => &[RemoveWaiting],
        (Approved, Rejected) => &[RevokeWhitelisted],
        (Approved, Pending) => &[RevokeWhitelisted, GrantWaiting],
        (Rejected, Approved) => &[GrantWhitelisted, RemoveWaiting],
        (Rejected, Pending) => &[GrantWaiting],
        (Pending, Pending) | (Approved, Approved) | (Rejected, Rejected) => &[],
    }
}
