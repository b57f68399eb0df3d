// Transition presenter - enter/exit animation state for the slide slot
//
// Only one slot is visible at a time: the outgoing slide finishes its exit
// before the incoming one starts entering. Times are in seconds on the
// UI clock (egui's `input.time`).

use std::time::Duration;

/// Horizontal distance travelled during enter and exit (in points)
pub const SLIDE_DISTANCE: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Settled,
    Exiting,
    Removed,
}

#[derive(Clone, Debug)]
struct Slot {
    route: String,
    phase: Phase,
    started: f64,
    // Opacity the exit starts from, below 1.0 when an enter was cut short
    exit_from: f32,
}

/// What to draw this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame<'a> {
    pub route: &'a str,
    pub phase: Phase,
    pub opacity: f32,
    pub offset_x: f32,
}

pub struct TransitionPresenter {
    enter_secs: f64,
    exit_secs: f64,
    slot: Option<Slot>,
    pending: Option<String>,
}

impl TransitionPresenter {
    pub fn new(enter: Duration, exit: Duration) -> Self {
        Self {
            enter_secs: enter.as_secs_f64(),
            exit_secs: exit.as_secs_f64(),
            slot: None,
            pending: None,
        }
    }

    /// Make `route` the slide that should end up visible.
    ///
    /// Safe to call every frame: the same route is a no-op once entering.
    pub fn show(&mut self, route: &str, now: f64) {
        self.update(now);

        let Some(slot) = self.slot.as_mut().filter(|s| s.phase != Phase::Removed) else {
            self.enter(route, now);
            return;
        };

        if slot.route == route {
            if slot.phase == Phase::Exiting {
                // Came back before the exit finished
                self.pending = None;
                self.enter(route, now);
            }
            return;
        }

        match slot.phase {
            Phase::Entering | Phase::Settled => {
                let from = Self::visibility(slot, self.enter_secs, now);
                slot.phase = Phase::Exiting;
                slot.started = now;
                slot.exit_from = from;
                self.pending = Some(route.to_string());
            }
            Phase::Exiting => self.pending = Some(route.to_string()),
            Phase::Removed => {}
        }
    }

    /// Drop the slot without an exit animation (the active content is not a slide)
    pub fn clear(&mut self) {
        self.slot = None;
        self.pending = None;
    }

    /// Advance phases whose duration has run out
    pub fn update(&mut self, now: f64) {
        let Some(slot) = self.slot.as_mut() else {
            return;
        };
        match slot.phase {
            Phase::Entering if now - slot.started >= self.enter_secs => {
                slot.phase = Phase::Settled;
            }
            Phase::Exiting if now - slot.started >= self.exit_secs => {
                let ended = slot.started + self.exit_secs;
                slot.phase = Phase::Removed;
                if let Some(next) = self.pending.take() {
                    self.enter(&next, ended);
                    // The new enter may already be over if frames were sparse
                    self.update(now);
                }
            }
            _ => {}
        }
    }

    pub fn phase(&self) -> Phase {
        self.slot.as_ref().map_or(Phase::Removed, |s| s.phase)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase(), Phase::Entering | Phase::Exiting)
    }

    pub fn frame(&self, now: f64) -> Option<Frame<'_>> {
        let slot = self.slot.as_ref()?;
        let (opacity, offset_x) = match slot.phase {
            Phase::Entering => {
                let e = ease_out(progress(now - slot.started, self.enter_secs));
                (e, SLIDE_DISTANCE * (1.0 - e))
            }
            Phase::Settled => (1.0, 0.0),
            Phase::Exiting => {
                let e = ease_in(progress(now - slot.started, self.exit_secs));
                (slot.exit_from * (1.0 - e), -SLIDE_DISTANCE * e)
            }
            Phase::Removed => return None,
        };
        Some(Frame {
            route: &slot.route,
            phase: slot.phase,
            opacity,
            offset_x,
        })
    }

    fn enter(&mut self, route: &str, now: f64) {
        self.slot = Some(Slot {
            route: route.to_string(),
            phase: Phase::Entering,
            started: now,
            exit_from: 1.0,
        });
    }

    fn visibility(slot: &Slot, enter_secs: f64, now: f64) -> f32 {
        match slot.phase {
            Phase::Entering => ease_out(progress(now - slot.started, enter_secs)),
            _ => 1.0,
        }
    }
}

fn progress(elapsed: f64, duration: f64) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0) as f32
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in(t: f32) -> f32 {
    t.powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter() -> TransitionPresenter {
        TransitionPresenter::new(Duration::from_millis(500), Duration::from_millis(300))
    }

    #[test]
    fn test_first_mount_enters_then_settles() {
        let mut p = presenter();
        assert_eq!(p.phase(), Phase::Removed);
        assert!(p.frame(0.0).is_none());

        p.show("/", 0.0);
        assert_eq!(p.phase(), Phase::Entering);
        let frame = p.frame(0.0).unwrap();
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.offset_x, SLIDE_DISTANCE);

        p.show("/", 0.25);
        assert_eq!(p.phase(), Phase::Entering);
        assert!(p.is_animating());

        p.show("/", 0.5);
        assert_eq!(p.phase(), Phase::Settled);
        assert!(!p.is_animating());
        let frame = p.frame(0.5).unwrap();
        assert_eq!((frame.opacity, frame.offset_x), (1.0, 0.0));
    }

    #[test]
    fn test_route_change_waits_for_exit() {
        let mut p = presenter();
        p.show("/", 0.0);
        p.show("/", 1.0);

        p.show("/background", 1.0);
        assert_eq!(p.phase(), Phase::Exiting);
        assert_eq!(p.frame(1.1).unwrap().route, "/");

        p.show("/background", 1.3);
        assert_eq!(p.phase(), Phase::Entering);
        let frame = p.frame(1.3).unwrap();
        assert_eq!(frame.route, "/background");
        assert!(frame.opacity < 0.01);

        p.show("/background", 1.8);
        assert_eq!(p.phase(), Phase::Settled);
    }

    #[test]
    fn test_exit_slides_left_and_fades() {
        let mut p = presenter();
        p.show("/", 0.0);
        p.show("/", 1.0);
        p.show("/work", 1.0);
        let mid = p.frame(1.15).unwrap();
        assert!(mid.offset_x < 0.0);
        assert!(mid.opacity < 1.0 && mid.opacity > 0.0);
    }

    #[test]
    fn test_rapid_navigation_keeps_latest_target() {
        let mut p = presenter();
        p.show("/", 0.0);
        p.show("/", 1.0);
        p.show("/background", 1.0);
        p.show("/work", 1.1);
        p.show("/london", 1.2);
        assert_eq!(p.frame(1.2).unwrap().route, "/");

        p.show("/london", 1.3);
        assert_eq!(p.frame(1.3).unwrap().route, "/london");
        assert_eq!(p.phase(), Phase::Entering);
    }

    #[test]
    fn test_interrupted_enter_exits_from_current_opacity() {
        let mut p = presenter();
        p.show("/", 0.0);
        let seen = p.frame(0.1).unwrap().opacity;
        p.show("/work", 0.1);
        assert_eq!(p.phase(), Phase::Exiting);
        let start = p.frame(0.1).unwrap().opacity;
        assert!((start - seen).abs() < 1e-6);
        assert!(start < 1.0);
    }

    #[test]
    fn test_returning_during_exit_reenters() {
        let mut p = presenter();
        p.show("/", 0.0);
        p.show("/", 1.0);
        p.show("/work", 1.0);
        p.show("/", 1.1);
        assert_eq!(p.phase(), Phase::Entering);
        assert_eq!(p.frame(1.1).unwrap().route, "/");
        p.show("/", 1.7);
        assert_eq!(p.phase(), Phase::Settled);
    }

    #[test]
    fn test_clear_removes_without_exit() {
        let mut p = presenter();
        p.show("/work", 0.0);
        p.clear();
        assert_eq!(p.phase(), Phase::Removed);
        assert!(p.frame(0.1).is_none());

        p.show("/work", 0.2);
        assert_eq!(p.phase(), Phase::Entering);
    }

    #[test]
    fn test_sparse_frames_catch_up() {
        let mut p = presenter();
        p.show("/", 0.0);
        p.show("/work", 5.0);
        p.show("/work", 10.0);
        assert_eq!(p.phase(), Phase::Settled);
        assert_eq!(p.frame(10.0).unwrap().route, "/work");
    }

    #[test]
    fn test_zero_durations_settle_immediately() {
        let mut p = TransitionPresenter::new(Duration::ZERO, Duration::ZERO);
        p.show("/", 0.0);
        p.update(0.0);
        assert_eq!(p.phase(), Phase::Settled);
        p.show("/work", 0.0);
        p.update(0.0);
        assert_eq!(p.phase(), Phase::Settled);
        assert_eq!(p.frame(0.0).unwrap().route, "/work");
    }
}
