//! Toast notification lifecycle.
//!
//! Only one toast lives at a time. Every transition names the toast it is
//! meant for, so a timer that outlives its toast (or fires after the user
//! already closed it) falls through as a no-op.

/// Delay before a freshly inserted toast slides in.
pub const ENTER_DELAY_MS: u32 = 100;
/// Lifetime of a toast nobody closes, measured from creation.
pub const AUTO_DISMISS_MS: u32 = 4000;
/// Length of the slide-out transition before the toast is detached.
pub const EXIT_TRANSITION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Neutral,
}

impl NotificationKind {
    /// Unknown kinds get the neutral look.
    pub fn from_name(name: &str) -> Self {
        match name {
            "info" => NotificationKind::Info,
            "success" => NotificationKind::Success,
            _ => NotificationKind::Neutral,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Neutral => "default",
        }
    }

    pub fn border_color(&self) -> &'static str {
        match self {
            NotificationKind::Info => "#2563eb",
            NotificationKind::Success => "#10b981",
            NotificationKind::Neutral => "#e5e7eb",
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            NotificationKind::Info => "#2563eb",
            NotificationKind::Success => "#10b981",
            NotificationKind::Neutral => "#374151",
        }
    }
}

impl From<&str> for NotificationKind {
    fn from(name: &str) -> Self {
        NotificationKind::from_name(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Created,
    Visible,
    Dismissing,
    Removed,
}

impl Phase {
    pub fn is_on_screen(&self) -> bool {
        matches!(self, Phase::Visible)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: Phase,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NotificationAction {
    Present { message: String, kind: NotificationKind },
    Show(u64),
    Dismiss(u64),
    Detach(u64),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The toast that should be in the document, if any.
    pub fn live(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.phase != Phase::Removed)
    }

    /// Applies one transition. Returns whether anything changed.
    pub fn apply(&mut self, action: NotificationAction) -> bool {
        match action {
            NotificationAction::Present { message, kind } => {
                // The old toast goes away at once, without its exit transition.
                self.next_id += 1;
                self.current = Some(Notification {
                    id: self.next_id,
                    message,
                    kind,
                    phase: Phase::Created,
                });
                true
            }
            NotificationAction::Show(id) => self.advance(id, &[Phase::Created], Phase::Visible),
            NotificationAction::Dismiss(id) => {
                self.advance(id, &[Phase::Created, Phase::Visible], Phase::Dismissing)
            }
            NotificationAction::Detach(id) => self.advance(id, &[Phase::Dismissing], Phase::Removed),
        }
    }

    fn advance(&mut self, id: u64, from: &[Phase], to: Phase) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && from.contains(&n.phase) => {
                n.phase = to;
                true
            }
            _ => false,
        }
    }

    /// Timers the presenter has to start after entering the current phase,
    /// as `(delay_ms, action)` pairs.
    pub fn follow_ups(&self) -> Vec<(u32, NotificationAction)> {
        let Some(n) = self.current.as_ref() else {
            return Vec::new();
        };
        match n.phase {
            Phase::Created => vec![
                (ENTER_DELAY_MS, NotificationAction::Show(n.id)),
                (AUTO_DISMISS_MS, NotificationAction::Dismiss(n.id)),
            ],
            Phase::Dismissing => vec![(EXIT_TRANSITION_MS, NotificationAction::Detach(n.id))],
            Phase::Visible | Phase::Removed => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs pending timers in deadline order, the way the browser would.
    struct Clock {
        now: u32,
        pending: Vec<(u32, NotificationAction)>,
    }

    impl Clock {
        fn new() -> Self {
            Self { now: 0, pending: Vec::new() }
        }

        fn dispatch(&mut self, state: &mut NotificationState, action: NotificationAction) -> bool {
            let changed = state.apply(action);
            if changed {
                for (delay, follow_up) in state.follow_ups() {
                    self.pending.push((self.now + delay, follow_up));
                }
            }
            changed
        }

        /// Fires every timer due up to `until`. Returns how many changed state.
        fn run_until(&mut self, state: &mut NotificationState, until: u32) -> usize {
            let mut effective = 0;
            loop {
                self.pending.sort_by_key(|(at, _)| *at);
                match self.pending.first() {
                    Some((at, _)) if *at <= until => {
                        let (at, action) = self.pending.remove(0);
                        self.now = at;
                        if self.dispatch(state, action) {
                            effective += 1;
                        }
                    }
                    _ => break,
                }
            }
            self.now = until;
            effective
        }
    }

    fn present(message: &str) -> NotificationAction {
        NotificationAction::Present {
            message: message.to_string(),
            kind: NotificationKind::Info,
        }
    }

    #[test]
    fn unknown_kinds_are_neutral() {
        assert_eq!(NotificationKind::from_name("info"), NotificationKind::Info);
        assert_eq!(NotificationKind::from_name("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::from("warning"), NotificationKind::Neutral);
        assert_eq!(NotificationKind::from("warning").name(), "default");
    }

    #[test]
    fn new_toast_replaces_old_one() {
        let mut state = NotificationState::new();
        state.apply(present("first"));
        state.apply(present("second"));

        let live = state.live().unwrap();
        assert_eq!(live.message, "second");
        assert_eq!(live.phase, Phase::Created);
    }

    #[test]
    fn slides_in_after_enter_delay() {
        let mut state = NotificationState::new();
        let mut clock = Clock::new();
        clock.dispatch(&mut state, present("hi"));

        clock.run_until(&mut state, ENTER_DELAY_MS - 1);
        assert_eq!(state.live().unwrap().phase, Phase::Created);
        clock.run_until(&mut state, ENTER_DELAY_MS);
        assert!(state.live().unwrap().phase.is_on_screen());
    }

    #[test]
    fn auto_dismiss_detaches_between_4000_and_4300_ms() {
        let mut state = NotificationState::new();
        let mut clock = Clock::new();
        clock.dispatch(&mut state, present("hi"));

        clock.run_until(&mut state, 3999);
        assert_eq!(state.live().unwrap().phase, Phase::Visible);
        clock.run_until(&mut state, 4000);
        assert_eq!(state.live().unwrap().phase, Phase::Dismissing);
        clock.run_until(&mut state, 4299);
        assert!(state.live().is_some());
        clock.run_until(&mut state, 4300);
        assert!(state.live().is_none());
    }

    #[test]
    fn manual_close_makes_timeout_a_no_op() {
        let mut state = NotificationState::new();
        let mut clock = Clock::new();
        clock.dispatch(&mut state, present("hi"));
        clock.run_until(&mut state, 1000);

        let id = state.live().unwrap().id;
        assert!(clock.dispatch(&mut state, NotificationAction::Dismiss(id)));
        clock.run_until(&mut state, 1300);
        assert!(state.live().is_none());

        // The 4000 ms dismissal still fires but finds nothing to act on.
        assert_eq!(clock.run_until(&mut state, 10_000), 0);
        assert!(clock.pending.is_empty());
    }

    #[test]
    fn double_close_is_ignored() {
        let mut state = NotificationState::new();
        state.apply(present("hi"));
        let id = state.live().unwrap().id;

        assert!(state.apply(NotificationAction::Dismiss(id)));
        assert!(!state.apply(NotificationAction::Dismiss(id)));
        assert!(state.apply(NotificationAction::Detach(id)));
        assert!(!state.apply(NotificationAction::Detach(id)));
    }

    #[test]
    fn stale_timers_leave_the_newer_toast_alone() {
        let mut state = NotificationState::new();
        let mut clock = Clock::new();
        clock.dispatch(&mut state, present("first"));
        clock.run_until(&mut state, 2000);
        clock.dispatch(&mut state, present("second"));

        // First toast's auto dismissal is due at 4000, the second's at 6000.
        clock.run_until(&mut state, 5000);
        let live = state.live().unwrap();
        assert_eq!(live.message, "second");
        assert_eq!(live.phase, Phase::Visible);

        clock.run_until(&mut state, 6300);
        assert!(state.live().is_none());
    }
}
