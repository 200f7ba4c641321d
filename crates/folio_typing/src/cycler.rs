//! Typewriter cycler
//!
//! Types a role one character at a time, pauses, deletes it, pauses again,
//! then moves to the next role. The rotation wraps forever.
//!
//! The state machine is pure: [`CyclerState::advance`] maps a state to the
//! next state plus the frame to render and the delay to wait. Timer
//! integration lives in [`crate::driver`].
//!
//! ```text
//!   TYPING (0 -> N) --end pause--> DELETING (N -> 0) --pre-type pause--> next role
//! ```
//!
//! There is no explicit pause state. A pause is the elevated delay requested
//! by the step that crosses a boundary.

use crate::roles::RoleList;
use crate::sink::TextSink;
use crate::timing::TypingTiming;
use std::time::Duration;

/// Direction of the current phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

/// Phase boundary crossed by a step, if any
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    None,
    /// Last character typed; deletion starts after the end pause
    WordComplete,
    /// Last character deleted; the role advanced and typing resumes after the pre-type pause
    DeletionComplete,
}

/// One rendered frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step<'a> {
    /// Text to display
    pub text: &'a str,
    /// Delay before the next step
    pub delay: Duration,
    pub boundary: Boundary,
}

/// Position of the typewriter within the rotation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CyclerState {
    /// Active role
    pub role_index: usize,
    /// Characters of the active role currently displayed
    pub char_index: usize,
    pub is_deleting: bool,
    /// Delay requested by the most recent step
    pub type_speed: Duration,
}

impl CyclerState {
    /// Initial state: first role, nothing displayed, typing
    pub fn new(timing: &TypingTiming) -> Self {
        Self {
            role_index: 0,
            char_index: 0,
            is_deleting: false,
            type_speed: timing.type_delay,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_deleting {
            Phase::Deleting
        } else {
            Phase::Typing
        }
    }

    /// Compute the next state and the frame it renders
    pub fn advance<'a>(self, roles: &'a RoleList, timing: &TypingTiming) -> (Self, Step<'a>) {
        let role = self.role_index % roles.len();
        let len = roles.char_len(role);
        let mut next = Self {
            role_index: role,
            ..self
        };

        if next.is_deleting {
            next.char_index = next.char_index.min(len).saturating_sub(1);
            next.type_speed = timing.delete_delay;
        } else {
            next.char_index = (next.char_index + 1).min(len);
            next.type_speed = timing.type_delay;
        }

        let text = roles.prefix(role, next.char_index);

        let boundary = if !next.is_deleting && next.char_index == len {
            next.is_deleting = true;
            next.type_speed = timing.end_pause;
            Boundary::WordComplete
        } else if next.is_deleting && next.char_index == 0 {
            next.is_deleting = false;
            next.role_index = roles.next_index(role);
            next.type_speed = timing.pre_type_pause;
            Boundary::DeletionComplete
        } else {
            Boundary::None
        };

        let step = Step {
            text,
            delay: next.type_speed,
            boundary,
        };
        (next, step)
    }
}

/// A role list, its timings, and the current position in the rotation
#[derive(Clone, Debug)]
pub struct TypingCycler {
    roles: RoleList,
    timing: TypingTiming,
    state: CyclerState,
}

impl TypingCycler {
    /// Create a cycler with the default cadence
    pub fn new(roles: RoleList) -> Self {
        Self::with_timing(roles, TypingTiming::default())
    }

    pub fn with_timing(roles: RoleList, timing: TypingTiming) -> Self {
        let state = CyclerState::new(&timing);
        Self {
            roles,
            timing,
            state,
        }
    }

    pub fn roles(&self) -> &RoleList {
        &self.roles
    }

    pub fn timing(&self) -> &TypingTiming {
        &self.timing
    }

    pub fn state(&self) -> CyclerState {
        self.state
    }

    /// Text currently displayed
    pub fn text(&self) -> &str {
        self.roles.prefix(self.state.role_index, self.state.char_index)
    }

    /// Role being typed or deleted
    pub fn current_role(&self) -> &str {
        self.roles.role(self.state.role_index)
    }

    /// Advance one step
    pub fn step(&mut self) -> Step<'_> {
        let (next, step) = self.state.advance(&self.roles, &self.timing);

        match step.boundary {
            Boundary::WordComplete => {
                tracing::trace!(role = next.role_index, "typed {:?}", step.text);
            }
            Boundary::DeletionComplete => {
                tracing::trace!(
                    from = self.state.role_index,
                    to = next.role_index,
                    "deleted role, advancing"
                );
            }
            Boundary::None => {}
        }

        self.state = next;
        step
    }

    /// Advance one step and write the frame to `sink`
    ///
    /// Returns the delay to wait before the next call.
    pub fn render<S: TextSink + ?Sized>(&mut self, sink: &mut S) -> Duration {
        let step = self.step();
        sink.set_text(step.text);
        step.delay
    }
}
