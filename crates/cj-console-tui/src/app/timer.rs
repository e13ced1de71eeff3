//! Guarded delayed actions
//!
//! The console simulates request latency and auto-redirects with fixed
//! delays. Each delayed action carries a guard naming the page (and reset
//! step) it belongs to: the action fires only if the user is still there
//! when it comes due, and explicit navigation cancels everything pending.
//! A redirect can therefore never act on a screen the user already left.

use std::time::{Duration, Instant};

use cj_console_core::{Page, ResetStep};

/// Simulated latency for the login credential check
pub const LOGIN_DELAY: Duration = Duration::from_millis(800);

/// Simulated latency for the reset identity check
pub const RESET_REQUEST_DELAY: Duration = Duration::from_millis(1000);

/// Delay before success messages redirect back to login
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// What a delayed action does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delayed {
    /// Run the login credential check against the store
    CompleteCredentialCheck,
    /// Run the reset step-1 identity check
    CompleteIdentityCheck,
    /// Reset succeeded: redirect to login
    RedirectAfterReset,
    /// Sign-up succeeded: redirect to login
    RedirectAfterSignup,
}

/// Condition under which a delayed action is still valid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    /// Page that must still be rendered
    pub page: Page,
    /// Reset sub-step that must still be current, if any
    pub reset_step: Option<ResetStep>,
}

impl Guard {
    /// Guard on a page alone
    pub fn page(page: Page) -> Self {
        Self {
            page,
            reset_step: None,
        }
    }

    /// Guard on the forgot-password page at a specific step
    pub fn reset_step(step: ResetStep) -> Self {
        Self {
            page: Page::ForgotPassword,
            reset_step: Some(step),
        }
    }

    fn holds(&self, page: Page, reset_step: ResetStep) -> bool {
        self.page == page && self.reset_step.map_or(true, |step| step == reset_step)
    }
}

#[derive(Debug, Clone)]
struct DelayedAction {
    due: Instant,
    guard: Guard,
    kind: Delayed,
}

/// Pending delayed actions for the whole app
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<DelayedAction>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an action to fire after `delay` if `guard` still holds
    pub fn schedule(&mut self, delay: Duration, guard: Guard, kind: Delayed) {
        self.schedule_at(Instant::now() + delay, guard, kind);
    }

    /// Schedule with an explicit deadline (test seam)
    pub fn schedule_at(&mut self, due: Instant, guard: Guard, kind: Delayed) {
        tracing::debug!(?kind, ?guard, "scheduled delayed action");
        self.pending.push(DelayedAction { due, guard, kind });
    }

    /// Drain every action that has come due.
    ///
    /// Due actions whose guard no longer holds are dropped silently; the
    /// rest are returned in schedule order for the app to execute.
    pub fn take_due(&mut self, now: Instant, page: Page, reset_step: ResetStep) -> Vec<Delayed> {
        let mut fired = Vec::new();
        self.pending.retain(|action| {
            if now < action.due {
                return true;
            }
            if action.guard.holds(page, reset_step) {
                fired.push(action.kind);
            } else {
                tracing::debug!(kind = ?action.kind, "dropped stale delayed action");
            }
            false
        });
        fired
    }

    /// Cancel everything pending (called on explicit navigation)
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(count = self.pending.len(), "cancelled pending actions");
            self.pending.clear();
        }
    }

    /// Whether an action of this kind is in flight
    pub fn has_pending(&self, kind: Delayed) -> bool {
        self.pending.iter().any(|action| action.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn past() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_due_action_fires_when_guard_holds() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(past(), Guard::page(Page::Login), Delayed::CompleteCredentialCheck);

        let fired = scheduler.take_due(Instant::now(), Page::Login, ResetStep::Verify);
        assert_eq!(fired, vec![Delayed::CompleteCredentialCheck]);
        assert!(!scheduler.has_pending(Delayed::CompleteCredentialCheck));
    }

    #[test]
    fn test_stale_action_is_dropped() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(past(), Guard::page(Page::Signup), Delayed::RedirectAfterSignup);

        // User navigated to login before the redirect came due.
        let fired = scheduler.take_due(Instant::now(), Page::Login, ResetStep::Verify);
        assert!(fired.is_empty());
        assert!(!scheduler.has_pending(Delayed::RedirectAfterSignup));
    }

    #[test]
    fn test_reset_step_guard() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(
            past(),
            Guard::reset_step(ResetStep::Replace),
            Delayed::RedirectAfterReset,
        );

        // Still on the page but back on step 1: stale.
        let fired = scheduler.take_due(Instant::now(), Page::ForgotPassword, ResetStep::Verify);
        assert!(fired.is_empty());
    }

    #[test]
    fn test_not_yet_due_action_stays_pending() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(
            Duration::from_secs(60),
            Guard::page(Page::Login),
            Delayed::CompleteCredentialCheck,
        );

        let fired = scheduler.take_due(Instant::now(), Page::Login, ResetStep::Verify);
        assert!(fired.is_empty());
        assert!(scheduler.has_pending(Delayed::CompleteCredentialCheck));
    }

    #[test]
    fn test_double_submit_fires_twice() {
        // The UI stays responsive during the simulated latency, so a second
        // submit schedules a second check. Both fire; executing the check
        // twice is harmless because it re-reads the same form state.
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(past(), Guard::page(Page::Login), Delayed::CompleteCredentialCheck);
        scheduler.schedule_at(past(), Guard::page(Page::Login), Delayed::CompleteCredentialCheck);

        let fired = scheduler.take_due(Instant::now(), Page::Login, ResetStep::Verify);
        assert_eq!(fired.len(), 2);
    }

    #[test]
    fn test_cancel_all() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_at(past(), Guard::page(Page::Login), Delayed::CompleteCredentialCheck);
        scheduler.cancel_all();

        let fired = scheduler.take_due(Instant::now(), Page::Login, ResetStep::Verify);
        assert!(fired.is_empty());
    }
}
