//! The single deferred transition the sequencer may have outstanding.
//!
//! Scheduling always replaces what was pending, and every schedule gets a
//! fresh token, so a transition that was cancelled (or superseded) can never
//! fire against the state that replaced it.

/// Identity of one scheduled transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(u64);

/// What happens when the pending timer runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Settle delay after a letter is finished: load the next letter.
    NextLetter,
    /// Celebration finished: return to the menu.
    ReturnToMenu,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    token: TransitionToken,
    transition: Transition,
    remaining: f32,
}

/// Holds at most one pending transition.
#[derive(Debug, Default)]
pub struct TransitionSlot {
    pending: Option<Pending>,
    next_token: u64,
}

impl TransitionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `transition` after `delay` seconds, cancelling anything pending.
    pub fn schedule(&mut self, transition: Transition, delay: f32) -> TransitionToken {
        if let Some(old) = self.pending.take() {
            log::debug!("transition {:?} superseded by {:?}", old.transition, transition);
        }
        self.next_token += 1;
        let token = TransitionToken(self.next_token);
        self.pending = Some(Pending {
            token,
            transition,
            remaining: delay.max(0.0),
        });
        token
    }

    /// Drop whatever is pending.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Drop the pending transition only if it is still `token`.
    pub fn cancel_token(&mut self, token: TransitionToken) -> bool {
        if self.pending_token() == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn pending(&self) -> Option<Transition> {
        self.pending.map(|p| p.transition)
    }

    pub fn pending_token(&self) -> Option<TransitionToken> {
        self.pending.map(|p| p.token)
    }

    /// Run the timer down. Returns the transition when it fires; the slot is
    /// empty afterwards.
    pub fn tick(&mut self, dt: f32) -> Option<Transition> {
        let pending = self.pending.as_mut()?;
        pending.remaining -= dt.max(0.0);
        if pending.remaining > 0.0 {
            return None;
        }
        self.pending.take().map(|p| p.transition)
    }
}
