//! The drag/snap/elastic-stretch interaction state machine.
//!
//! Owns every signal the shape generator and render layer consume:
//! the committed position, the live drag offset, the sticked flag and its
//! spring-smoothed counterpart, and the vertical perturbation. All of it
//! advances through explicit [`TabDragState::tick`] calls; pointer input
//! always lands before the next frame's derived reads.
//!
//! Re-entrancy is the one correctness concern: a drag that begins while a
//! settle animation is in flight must fold the settle's current value into
//! the new session's baseline instead of snapping anything back, and the
//! superseded settle must never commit a selection. Session identifiers
//! guard the latter.

use crate::snap::SnapGrid;
use stickytab_animation::{
    Animatable, AnimationType, FlingProjection, SpringSpec, VelocityTracker1D,
};

/// Maximum fling velocity in logical px/s, matching the platform default.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Tactile cues the embedding layer may forward to a haptic engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticCue {
    /// Light cue when a drag session begins.
    DragStart,
    /// Stronger cue the instant the elastic threshold is first crossed.
    StretchStart,
}

/// Side effects produced by a transition, dispatched by the widget layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Haptic(HapticCue),
    StretchStarted,
    StretchEnded,
    /// A settle completed without cancellation, or a placeholder was tapped.
    Selected(usize),
}

/// An in-flight return-to-grid animation, tagged with the session that
/// started it so a newer drag can cancel its commit.
#[derive(Debug, Clone, Copy)]
struct Settle {
    session: u64,
    destination: f32,
}

pub struct TabDragState {
    grid: SnapGrid,
    max_stretch: f32,
    projection: FlingProjection,

    /// Committed location along the track; animated by direct selection.
    position: Animatable,
    /// Live drag offset relative to the committed position.
    offset: Animatable,
    /// Vertical perturbation from the drag's y delta.
    offset_y: Animatable,
    /// Spring-smoothed stick signal: converges to 1 when sticked, 0 when
    /// not, giving the visual handoff between anchored-stretch and
    /// follow-the-finger.
    sticking: Animatable,
    sticked: bool,

    /// Offset carried over from an interrupted settle.
    baseline: f32,
    session: u64,
    settle: Option<Settle>,
    /// Whether this session already crossed the elastic threshold.
    stretched: bool,
    selected: usize,
    tracker: VelocityTracker1D,
}

impl TabDragState {
    pub fn new(grid: SnapGrid, max_stretch: f32, projection: FlingProjection) -> Self {
        Self {
            grid,
            max_stretch: max_stretch.max(0.0),
            projection,
            position: Animatable::new(0.0),
            offset: Animatable::new(0.0),
            offset_y: Animatable::new(0.0),
            sticking: Animatable::new(1.0),
            sticked: true,
            baseline: 0.0,
            session: 0,
            settle: None,
            stretched: false,
            selected: 0,
            tracker: VelocityTracker1D::new(),
        }
    }

    fn spring() -> AnimationType {
        AnimationType::Spring(SpringSpec::bouncy())
    }

    /// Begin a drag session. Any in-flight settle is cancelled in place:
    /// its current animated value is frozen and becomes the new baseline.
    pub fn drag_begin(&mut self, time_ms: i64) -> Vec<DragEvent> {
        self.session += 1;
        if self.offset.is_running() {
            self.offset.freeze();
            log::trace!(
                "drag {} supersedes settle at offset {}",
                self.session,
                self.offset.value()
            );
        }
        if self.position.is_running() {
            self.position.freeze();
        }
        self.baseline = self.offset.value();
        self.stretched = false;
        self.tracker.reset();
        self.tracker
            .add_sample(time_ms, self.position.value() + self.offset.value());

        vec![DragEvent::Haptic(HapticCue::DragStart)]
    }

    /// Incremental pointer update. `raw_dx`/`raw_dy` are the accumulated
    /// translation since the gesture began.
    pub fn drag_move(&mut self, raw_dx: f32, raw_dy: f32, time_ms: i64) -> Vec<DragEvent> {
        self.offset.snap_to(raw_dx + self.baseline);
        self.offset_y.snap_to(raw_dy);
        self.tracker
            .add_sample(time_ms, self.position.value() + self.offset.value());

        let mut events = Vec::new();
        if self.sticked && raw_dx.abs() > self.max_stretch {
            // Flips at most once per session: the flag only resets on a
            // committed settle or a direct selection.
            self.sticked = false;
            self.sticking.animate_to(0.0, Self::spring());
            self.stretched = true;
            log::trace!("drag {} crossed the elastic threshold", self.session);
            events.push(DragEvent::Haptic(HapticCue::StretchStart));
            events.push(DragEvent::StretchStarted);
        }
        events
    }

    /// End the session using the tracked gesture velocity.
    pub fn drag_end(&mut self) -> Vec<DragEvent> {
        let velocity = self.tracker.calculate_velocity_with_max(MAX_FLING_VELOCITY);
        self.drag_end_with_velocity(velocity)
    }

    /// End the session with an explicit exit velocity in px/s.
    pub fn drag_end_with_velocity(&mut self, velocity: f32) -> Vec<DragEvent> {
        let release = self.position.value() + self.offset.value();
        let destination = self.grid.select(release, velocity, &self.projection);
        log::trace!(
            "drag {} released at {release} with velocity {velocity}, settling to {destination} \
             (free fling would coast {} ms)",
            self.session,
            self.projection.duration_millis(velocity)
        );

        if self.sticked && destination != self.position.value() {
            // Carried past the anchor without ever crossing the threshold;
            // let go so the body glides instead of teleporting on commit.
            self.sticked = false;
            self.sticking.animate_to(0.0, Self::spring());
        }

        self.settle = Some(Settle {
            session: self.session,
            destination,
        });
        self.offset
            .animate_to(destination - self.position.value(), Self::spring());
        self.offset_y.animate_to(0.0, Self::spring());

        if self.stretched {
            vec![DragEvent::StretchEnded]
        } else {
            Vec::new()
        }
    }

    /// Direct selection (placeholder tap): bypasses the drag path entirely.
    pub fn select(&mut self, index: usize) -> Vec<DragEvent> {
        let index = index.min(self.grid.count() - 1);
        self.session += 1;
        self.settle = None;
        self.offset.snap_to(0.0);
        self.offset_y.snap_to(0.0);
        self.baseline = 0.0;
        self.stretched = false;
        self.sticked = true;
        self.sticking.animate_to(1.0, Self::spring());
        self.position
            .animate_to(self.grid.position_of(index), Self::spring());
        self.selected = index;
        log::debug!("direct selection of tab {index}");

        vec![DragEvent::Selected(index)]
    }

    /// Advance all animations to `frame_time_nanos` and perform the settle
    /// completion check.
    pub fn tick(&mut self, frame_time_nanos: u64) -> Vec<DragEvent> {
        let offset_done = self.offset.tick(frame_time_nanos);
        self.offset_y.tick(frame_time_nanos);
        self.position.tick(frame_time_nanos);
        self.sticking.tick(frame_time_nanos);

        let mut events = Vec::new();
        if offset_done {
            if let Some(settle) = self.settle.take() {
                if settle.session == self.session {
                    self.position.snap_to(settle.destination);
                    self.offset.snap_to(0.0);
                    self.baseline = 0.0;
                    self.sticked = true;
                    self.sticking.animate_to(1.0, Self::spring());
                    self.selected = self.grid.index_of(settle.destination);
                    log::trace!(
                        "settle committed at {} (tab {})",
                        settle.destination,
                        self.selected
                    );
                    events.push(DragEvent::Selected(self.selected));
                } else {
                    // Superseded: keep the in-flight value as the next
                    // baseline and leave position and selection untouched.
                    self.baseline = self.offset.value();
                    log::trace!("settle from session {} cancelled", settle.session);
                }
            }
        }
        events
    }

    /// Committed horizontal location along the track.
    pub fn position(&self) -> f32 {
        self.position.value()
    }

    /// Live drag offset relative to the committed position.
    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    /// Vertical perturbation fed to the shape generator.
    pub fn vertical_offset(&self) -> f32 {
        self.offset_y.value()
    }

    pub fn is_sticked(&self) -> bool {
        self.sticked
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn max_stretch(&self) -> f32 {
        self.max_stretch
    }

    /// Visual translation: the committed position while sticked, blending
    /// into position + offset as the stick spring releases.
    pub fn translation(&self) -> f32 {
        self.position.value() + (1.0 - self.sticking.value()) * self.offset.value()
    }

    /// Deformation signal in [-1, 1] driving the shape generator.
    pub fn progress(&self) -> f32 {
        if self.max_stretch <= 0.0 {
            return 0.0;
        }
        let normalized = (self.offset.value() / self.max_stretch).clamp(-1.0, 1.0);
        self.sticking.value() * normalized
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
