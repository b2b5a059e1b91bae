#![forbid(unsafe_code)]

//! Drag capture, clamp, offset recording, and settle state machine.
//!
//! [`DragController`] turns a pointer-event stream into child movement on a
//! [`DragHost`]:
//! - pointer-down over a child captures it immediately,
//! - pointer-move drags the captured child by the pointer delta, clamped by
//!   the [`DragPolicy`], and records each non-zero step into the host's
//!   offset store,
//! - pointer-up releases with the release velocity, pointer-cancel releases
//!   with zero velocity,
//! - [`tick`](DragController::tick) advances whatever settle motion the
//!   policy asked for on release.
//!
//! # Invariants
//!
//! 1. At most one child is captured at a time. A pointer-down while a drag
//!    is in progress is tracked but never steals the capture.
//! 2. Every pointer id seen on a down is tracked until its up/cancel, so
//!    moves and releases are attributed by id, not by arrival order.
//! 3. Zero-delta steps never reach the offset store.
//! 4. Events that cannot be attributed to a tracked pointer are ignored and
//!    leave all state untouched.
//! 5. With the default policy a release never settles: `tick` returns
//!    `false` immediately afterwards.

use ahash::AHashMap;
use dragbox_core::animation::{Animation, SettleMotion};
use dragbox_core::event::{PointerEvent, PointerEventKind, Velocity};
use dragbox_core::geometry::Point;
use dragbox_core::velocity::VelocityTracker;
use dragbox_core::{debug, trace};
use dragbox_layout::{ChildId, DragBounds};

use crate::config::{DragConfig, DragConfigError};
use crate::host::DragHost;
use crate::policy::{ClampToPadding, DragPolicy, ReleaseAction};

/// Drag lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Nothing captured.
    #[default]
    Idle,
    /// A child is following a pointer.
    Dragging,
    /// A released child is animating toward its rest position.
    Settling,
}

/// Reason why an incoming event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragIgnoredReason {
    /// No down was seen for this pointer id.
    UnknownPointer,
    /// The pointer is not over any child.
    NoChildUnderPointer,
    /// The policy refused the capture.
    CaptureRejected,
    /// Another pointer already drags a child.
    SessionAlreadyActive,
    /// The named child is not the captured one.
    NoActiveSession,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// A child was captured.
    Captured { child: ChildId, pointer_id: u32 },
    /// The captured child moved.
    Moved,
    /// The captured pointer moved but the clamp kept the child in place.
    Held,
    /// The captured child was released.
    Released {
        child: ChildId,
        velocity: Velocity,
        settling: bool,
    },
    /// Pointer bookkeeping was updated without affecting any capture.
    Tracked,
    /// The event was ignored.
    Ignored(DragIgnoredReason),
}

/// One non-zero movement step of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildMovement {
    pub child: ChildId,
    /// New left edge.
    pub left: i32,
    /// New top edge.
    pub top: i32,
    /// Horizontal step.
    pub dx: i32,
    /// Vertical step.
    pub dy: i32,
}

/// Result of one controller dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDispatch {
    pub outcome: DragOutcome,
    pub movement: Option<ChildMovement>,
    /// Controller state after the dispatch.
    pub state: DragState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PointerTrack {
    initial: Point,
    last: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragSession {
    child: ChildId,
    /// `None` once released, or for programmatic slides.
    pointer_id: Option<u32>,
    position: Point,
}

/// Single-capture drag state machine.
#[derive(Debug, Clone)]
pub struct DragController<P = ClampToPadding> {
    policy: P,
    config: DragConfig,
    state: DragState,
    pointers: AHashMap<u32, PointerTrack>,
    session: Option<DragSession>,
    settle: Option<SettleMotion>,
    velocity: VelocityTracker,
}

impl DragController<ClampToPadding> {
    /// Construct a controller with the default clamp-to-padding policy.
    pub fn new(config: DragConfig) -> Result<Self, DragConfigError> {
        Self::with_policy(ClampToPadding, config)
    }
}

impl<P: DragPolicy> DragController<P> {
    /// Construct a controller with a custom policy.
    pub fn with_policy(policy: P, config: DragConfig) -> Result<Self, DragConfigError> {
        config.validate()?;
        Ok(Self {
            policy,
            config,
            state: DragState::Idle,
            pointers: AHashMap::new(),
            session: None,
            settle: None,
            velocity: VelocityTracker::default(),
        })
    }

    /// Controller configuration.
    #[must_use]
    pub const fn config(&self) -> DragConfig {
        self.config
    }

    /// Current drag state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Whether a settle motion is in progress.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.state == DragState::Settling
    }

    /// The injected policy.
    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Mutable access to the injected policy.
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Child being dragged or settled, if any.
    #[must_use]
    pub fn captured_child(&self) -> Option<ChildId> {
        self.session.map(|session| session.child)
    }

    /// Pointer id driving the current drag, if any.
    #[must_use]
    pub fn active_pointer_id(&self) -> Option<u32> {
        self.session.and_then(|session| session.pointer_id)
    }

    /// Whether a down was seen for `pointer_id` without a matching up.
    #[must_use]
    pub fn is_pointer_down(&self, pointer_id: u32) -> bool {
        self.pointers.contains_key(&pointer_id)
    }

    /// Decide whether to intercept the gesture `event` belongs to.
    ///
    /// Returns `true` once a child is being dragged. Downs capture only a
    /// settling child; moves capture once the pointer travels past the touch
    /// slop along an axis the child can move on.
    pub fn begin_intercept<H: DragHost>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                self.track_down(event);
                if self.state == DragState::Settling
                    && let Some(session) = self.session
                    && host.child_at(event.x, event.y) == Some(session.child)
                    && self.try_capture(session.child, event.pointer_id, host)
                {
                    self.record_sample(event);
                }
            }
            PointerEventKind::Move => {
                let Some(track) = self.pointers.get_mut(&event.pointer_id) else {
                    return self.state == DragState::Dragging;
                };
                track.last = event.position();
                if self.state != DragState::Dragging
                    && self.capture_after_slop(event.pointer_id, host).is_some()
                {
                    self.record_sample(event);
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.process_event(event, host);
            }
        }
        self.state == DragState::Dragging
    }

    /// Feed one pointer event into the state machine.
    pub fn process_event<H: DragHost>(
        &mut self,
        event: &PointerEvent,
        host: &mut H,
    ) -> DragDispatch {
        let dispatch = match event.kind {
            PointerEventKind::Down => self.pointer_down(event, host),
            PointerEventKind::Move => self.pointer_move(event, host),
            PointerEventKind::Up | PointerEventKind::Cancel => self.pointer_end(event, host),
        };
        if matches!(dispatch.outcome, DragOutcome::Ignored(_)) {
            trace!(
                pointer_id = event.pointer_id,
                outcome = ?dispatch.outcome,
                "pointer event ignored"
            );
        }
        dispatch
    }

    /// `max(padding_left, min(raw_left, width - child_width - padding_right))`
    /// under the default policy.
    #[must_use]
    pub fn clamp_horizontal(
        &self,
        child: ChildId,
        raw_left: i32,
        child_width: u16,
        bounds: &DragBounds,
    ) -> i32 {
        self.policy.clamp_horizontal(child, raw_left, child_width, bounds)
    }

    /// `max(padding_top, min(raw_top, height - child_height - padding_bottom))`
    /// under the default policy.
    #[must_use]
    pub fn clamp_vertical(
        &self,
        child: ChildId,
        raw_top: i32,
        child_height: u16,
        bounds: &DragBounds,
    ) -> i32 {
        self.policy.clamp_vertical(child, raw_top, child_height, bounds)
    }

    /// Record one movement step into the host's offset store and notify the
    /// policy. Zero steps are dropped.
    pub fn on_position_changed<H: DragHost>(&mut self, movement: ChildMovement, host: &mut H) {
        if movement.dx == 0 && movement.dy == 0 {
            return;
        }
        host.offsets_mut().accumulate(movement.child, movement.dx, movement.dy);
        if let Some(session) = self.session.as_mut()
            && session.child == movement.child
        {
            session.position = Point::new(movement.left, movement.top);
        }
        self.policy.on_position_changed(movement);
    }

    /// Release the captured `child` with `velocity`.
    ///
    /// The policy decides whether the child stops, slides, or flings.
    pub fn on_release<H: DragHost>(
        &mut self,
        child: ChildId,
        velocity: Velocity,
        host: &mut H,
    ) -> DragDispatch {
        match self.session {
            Some(session) if self.state == DragState::Dragging && session.child == child => {
                self.release(child, velocity, host)
            }
            _ => self.dispatch(
                DragOutcome::Ignored(DragIgnoredReason::NoActiveSession),
                None,
            ),
        }
    }

    /// Advance the settle motion by one frame interval.
    ///
    /// Returns whether another frame should be scheduled.
    pub fn tick<H: DragHost>(&mut self, host: &mut H) -> bool {
        if self.state != DragState::Settling {
            return false;
        }
        let (Some(session), Some(motion)) = (self.session, self.settle.as_mut()) else {
            self.finish_settle();
            return false;
        };
        motion.tick(self.config.frame_interval);
        let target = motion.position();
        let complete = motion.is_complete();
        if !self.step_to(session.child, target, host) || complete {
            self.finish_settle();
            return false;
        }
        true
    }

    /// Capture `child` for `pointer_id` without asking the policy.
    ///
    /// Interrupts any settle motion. Returns `false` if the child is not in
    /// the host.
    pub fn capture_child<H: DragHost>(
        &mut self,
        child: ChildId,
        pointer_id: u32,
        host: &H,
    ) -> bool {
        let Some(rect) = host.child_rect(child) else {
            return false;
        };
        self.settle = None;
        self.velocity.clear();
        self.session = Some(DragSession {
            child,
            pointer_id: Some(pointer_id),
            position: rect.origin(),
        });
        debug!(child = child.get(), pointer_id, "child captured");
        self.set_state(DragState::Dragging);
        true
    }

    /// Slide `child` to `(left, top)` (clamped) with a spring.
    ///
    /// Refused while a pointer drags a child. Returns whether settling
    /// started; a child already at the target does not settle.
    pub fn smooth_slide_to<H: DragHost>(
        &mut self,
        child: ChildId,
        left: i32,
        top: i32,
        host: &mut H,
    ) -> bool {
        if self.state == DragState::Dragging {
            return false;
        }
        let Some(rect) = host.child_rect(child) else {
            return false;
        };
        let bounds = host.bounds();
        let target = Point::new(
            self.policy.clamp_horizontal(child, left, rect.width, &bounds),
            self.policy.clamp_vertical(child, top, rect.height, &bounds),
        );
        let motion = SettleMotion::slide(rect.origin(), target);
        self.start_settle(child, rect.origin(), motion)
    }

    /// Stop any settle motion, jumping to its final position, and forget all
    /// pointer tracking.
    pub fn abort<H: DragHost>(&mut self, host: &mut H) {
        self.cancel();
        if self.state == DragState::Settling
            && let (Some(session), Some(motion)) = (self.session, self.settle.take())
        {
            self.step_to(session.child, motion.final_position(), host);
        }
        self.session = None;
        self.settle = None;
        self.set_state(DragState::Idle);
    }

    /// Forget all pointer tracking and velocity samples.
    pub fn cancel(&mut self) {
        self.pointers.clear();
        self.velocity.clear();
    }

    /// Drop any session on `child`; call when the child leaves the host.
    pub fn child_removed(&mut self, child: ChildId) {
        if self.captured_child() == Some(child) {
            debug!(child = child.get(), "captured child removed");
            self.session = None;
            self.settle = None;
            self.velocity.clear();
            self.set_state(DragState::Idle);
        }
    }

    fn dispatch(&self, outcome: DragOutcome, movement: Option<ChildMovement>) -> DragDispatch {
        DragDispatch {
            outcome,
            movement,
            state: self.state,
        }
    }

    fn set_state(&mut self, state: DragState) {
        if self.state != state {
            trace!(from = ?self.state, to = ?state, "drag state changed");
            self.state = state;
            self.policy.on_drag_state_changed(state);
        }
    }

    fn track_down(&mut self, event: &PointerEvent) {
        let at = event.position();
        self.pointers.insert(
            event.pointer_id,
            PointerTrack {
                initial: at,
                last: at,
            },
        );
    }

    fn record_sample(&mut self, event: &PointerEvent) {
        if let Some(time) = event.timestamp {
            self.velocity.add_sample(event.position(), time);
        }
    }

    fn try_capture<H: DragHost>(&mut self, child: ChildId, pointer_id: u32, host: &H) -> bool {
        if let Some(session) = self.session
            && self.state == DragState::Dragging
            && session.child == child
            && session.pointer_id == Some(pointer_id)
        {
            return true;
        }
        self.policy.try_capture(child, pointer_id) && self.capture_child(child, pointer_id, host)
    }

    /// Capture the child under the pointer's initial position once the pointer
    /// has moved past the touch slop. Returns `None` if no capture happened.
    fn capture_after_slop<H: DragHost>(&mut self, pointer_id: u32, host: &H) -> Option<ChildId> {
        let track = *self.pointers.get(&pointer_id)?;
        let child = host.child_at(track.initial.x, track.initial.y)?;
        let rect = host.child_rect(child)?;
        let bounds = host.bounds();
        let axes = self.policy.drag_axes(child, rect.size(), &bounds);
        let (dx, dy) = track.last.delta_from(track.initial);
        if !axes.exceeds_slop(dx, dy, self.config.touch_slop) {
            return None;
        }
        self.try_capture(child, pointer_id, host).then_some(child)
    }

    fn pointer_down<H: DragHost>(&mut self, event: &PointerEvent, host: &mut H) -> DragDispatch {
        self.track_down(event);
        if self.state == DragState::Dragging {
            return self.dispatch(
                DragOutcome::Ignored(DragIgnoredReason::SessionAlreadyActive),
                None,
            );
        }
        let Some(child) = host.child_at(event.x, event.y) else {
            return self.dispatch(
                DragOutcome::Ignored(DragIgnoredReason::NoChildUnderPointer),
                None,
            );
        };
        if !self.try_capture(child, event.pointer_id, host) {
            return self.dispatch(
                DragOutcome::Ignored(DragIgnoredReason::CaptureRejected),
                None,
            );
        }
        self.record_sample(event);
        self.dispatch(
            DragOutcome::Captured {
                child,
                pointer_id: event.pointer_id,
            },
            None,
        )
    }

    fn pointer_move<H: DragHost>(&mut self, event: &PointerEvent, host: &mut H) -> DragDispatch {
        let Some(track) = self.pointers.get_mut(&event.pointer_id) else {
            return self.dispatch(
                DragOutcome::Ignored(DragIgnoredReason::UnknownPointer),
                None,
            );
        };
        let previous = track.last;
        track.last = event.position();

        match self.session {
            Some(session)
                if self.state == DragState::Dragging
                    && session.pointer_id == Some(event.pointer_id) =>
            {
                self.record_sample(event);
                let (dx, dy) = event.position().delta_from(previous);
                self.drag_by(session.child, dx, dy, host)
            }
            _ if self.state == DragState::Dragging => self.dispatch(DragOutcome::Tracked, None),
            _ => match self.capture_after_slop(event.pointer_id, host) {
                Some(child) => {
                    self.record_sample(event);
                    self.dispatch(
                        DragOutcome::Captured {
                            child,
                            pointer_id: event.pointer_id,
                        },
                        None,
                    )
                }
                None => self.dispatch(DragOutcome::Tracked, None),
            },
        }
    }

    fn pointer_end<H: DragHost>(&mut self, event: &PointerEvent, host: &mut H) -> DragDispatch {
        if self.pointers.remove(&event.pointer_id).is_none() {
            return self.dispatch(
                DragOutcome::Ignored(DragIgnoredReason::UnknownPointer),
                None,
            );
        }
        match self.session {
            Some(session)
                if self.state == DragState::Dragging
                    && session.pointer_id == Some(event.pointer_id) =>
            {
                let velocity = match event.kind {
                    PointerEventKind::Up => {
                        self.record_sample(event);
                        event.velocity.unwrap_or_else(|| self.velocity.estimate())
                    }
                    _ => Velocity::ZERO,
                };
                self.release(session.child, velocity, host)
            }
            _ => self.dispatch(DragOutcome::Tracked, None),
        }
    }

    fn drag_by<H: DragHost>(
        &mut self,
        child: ChildId,
        dx: i32,
        dy: i32,
        host: &mut H,
    ) -> DragDispatch {
        let Some(rect) = host.child_rect(child) else {
            self.child_removed(child);
            return self.dispatch(
                DragOutcome::Ignored(DragIgnoredReason::NoActiveSession),
                None,
            );
        };
        let bounds = host.bounds();
        let left = if dx != 0 {
            self.policy.clamp_horizontal(child, rect.x.saturating_add(dx), rect.width, &bounds)
        } else {
            rect.x
        };
        let top = if dy != 0 {
            self.policy.clamp_vertical(child, rect.y.saturating_add(dy), rect.height, &bounds)
        } else {
            rect.y
        };
        let (step_x, step_y) = Point::new(left, top).delta_from(rect.origin());
        let movement = ChildMovement {
            child,
            left,
            top,
            dx: step_x,
            dy: step_y,
        };
        if movement.dx == 0 && movement.dy == 0 {
            return self.dispatch(DragOutcome::Held, None);
        }
        host.offset_child(child, movement.dx, movement.dy);
        self.on_position_changed(movement, host);
        self.dispatch(DragOutcome::Moved, Some(movement))
    }

    fn release<H: DragHost>(
        &mut self,
        child: ChildId,
        velocity: Velocity,
        host: &mut H,
    ) -> DragDispatch {
        let velocity = velocity.clamp_magnitude(
            self.config.min_fling_velocity,
            self.config.max_fling_velocity,
        );
        self.velocity.clear();
        let action = self.policy.on_released(child, velocity);
        debug!(child = child.get(), action = ?action, "child released");

        let motion = host.child_rect(child).and_then(|rect| {
            let bounds = host.bounds();
            let from = rect.origin();
            match action {
                ReleaseAction::Stop => None,
                ReleaseAction::SettleAt(target) => {
                    let target = Point::new(
                        self.policy.clamp_horizontal(child, target.x, rect.width, &bounds),
                        self.policy.clamp_vertical(child, target.y, rect.height, &bounds),
                    );
                    Some((from, SettleMotion::slide(from, target)))
                }
                ReleaseAction::Fling => {
                    let min = Point::new(
                        self.policy.clamp_horizontal(child, i32::MIN, rect.width, &bounds),
                        self.policy.clamp_vertical(child, i32::MIN, rect.height, &bounds),
                    );
                    let max = Point::new(
                        self.policy.clamp_horizontal(child, i32::MAX, rect.width, &bounds),
                        self.policy.clamp_vertical(child, i32::MAX, rect.height, &bounds),
                    );
                    let motion = SettleMotion::fling(
                        from,
                        velocity,
                        self.config.fling_friction,
                        min,
                        max,
                    );
                    Some((from, motion))
                }
            }
        });

        let settling = match motion {
            Some((from, motion)) => self.start_settle(child, from, motion),
            None => {
                self.session = None;
                self.set_state(DragState::Idle);
                false
            }
        };
        self.dispatch(
            DragOutcome::Released {
                child,
                velocity,
                settling,
            },
            None,
        )
    }

    fn start_settle(&mut self, child: ChildId, from: Point, motion: SettleMotion) -> bool {
        if motion.is_complete() && motion.position() == from {
            self.session = None;
            self.settle = None;
            self.set_state(DragState::Idle);
            return false;
        }
        debug!(
            child = child.get(),
            to_x = motion.final_position().x,
            to_y = motion.final_position().y,
            "settle started"
        );
        self.session = Some(DragSession {
            child,
            pointer_id: None,
            position: from,
        });
        self.settle = Some(motion);
        self.set_state(DragState::Settling);
        true
    }

    /// Move `child` to `target`, recording the step. Returns `false` if the
    /// child is gone.
    fn step_to<H: DragHost>(&mut self, child: ChildId, target: Point, host: &mut H) -> bool {
        let Some(rect) = host.child_rect(child) else {
            return false;
        };
        let (dx, dy) = target.delta_from(rect.origin());
        if dx != 0 || dy != 0 {
            host.offset_child(child, dx, dy);
            self.on_position_changed(
                ChildMovement {
                    child,
                    left: target.x,
                    top: target.y,
                    dx,
                    dy,
                },
                host,
            );
        }
        true
    }

    fn finish_settle(&mut self) {
        debug!("settle finished");
        self.session = None;
        self.settle = None;
        self.set_state(DragState::Idle);
    }
}
