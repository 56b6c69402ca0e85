//! The widget facade: configuration, state machine and shape generator
//! wired together, producing one [`TabFrame`] per display refresh.

use crate::config::{ResolvedTabs, StickyTabConfig, TabFill};
use crate::drag::{DragEvent, HapticCue, TabDragState};
use crate::placeholder::{cover_opacity, label_opacity};
use crate::shape::TabShape;
use stickytab_animation::FlingProjection;
use stickytab_graphics::{Brush, Color, Path};

type SelectCallback = Box<dyn FnMut(usize)>;
type VoidCallback = Box<dyn FnMut()>;
type HapticCallback = Box<dyn FnMut(HapticCue)>;

#[derive(Default)]
struct Callbacks {
    on_select: Option<SelectCallback>,
    on_stretch_start: Option<VoidCallback>,
    on_stretch_end: Option<VoidCallback>,
    on_haptic: Option<HapticCallback>,
}

/// Per-placeholder render output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaceholderFrame {
    /// Horizontal translation of the slot.
    pub translation: f32,
    /// Opacity of the static cover pill.
    pub cover_opacity: f32,
    /// Configured placeholder color with the cover opacity already applied.
    pub cover_color: Color,
    /// Opacity of the slot's label.
    pub label_opacity: f32,
}

/// Everything the render layer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TabFrame {
    /// The deformed capsule outline, in tab-local coordinates.
    pub outline: Path,
    /// Fill for the outline.
    pub fill: Brush,
    /// Horizontal translation of the outline within the container.
    pub translation: f32,
    /// Committed, debounced selection.
    pub selected: usize,
    pub placeholders: Vec<PlaceholderFrame>,
}

/// The sticky tab selector.
pub struct StickyTab {
    labels: Vec<String>,
    tabs: ResolvedTabs,
    fill: TabFill,
    placeholder_color: Color,
    shape: TabShape,
    state: TabDragState,
    callbacks: Callbacks,
}

impl StickyTab {
    pub fn new(config: StickyTabConfig) -> Self {
        let tabs = config.resolve();
        let shape = TabShape::new(
            tabs.tab_width,
            tabs.tab_height,
            tabs.head_radius,
            tabs.tail_radius,
            tabs.horizontal_resistance,
            tabs.vertical_resistance,
        );
        let projection = FlingProjection::with_density(config.density.max(f32::EPSILON));
        let state = TabDragState::new(tabs.grid(), tabs.max_stretch, projection);
        Self {
            labels: config.labels,
            tabs,
            fill: config.fill,
            placeholder_color: config.placeholder_color,
            shape,
            state,
            callbacks: Callbacks::default(),
        }
    }

    pub fn on_select(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.callbacks.on_select = Some(Box::new(callback));
        self
    }

    pub fn on_stretch_start(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_stretch_start = Some(Box::new(callback));
        self
    }

    pub fn on_stretch_end(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_stretch_end = Some(Box::new(callback));
        self
    }

    pub fn on_haptic(mut self, callback: impl FnMut(HapticCue) + 'static) -> Self {
        self.callbacks.on_haptic = Some(Box::new(callback));
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn metrics(&self) -> &ResolvedTabs {
        &self.tabs
    }

    /// Background color of the static placeholder pills.
    pub fn placeholder_color(&self) -> Color {
        self.placeholder_color
    }

    pub fn drag_state(&self) -> &TabDragState {
        &self.state
    }

    /// Committed, debounced selection.
    pub fn selected_index(&self) -> usize {
        self.state.selected_index()
    }

    pub fn drag_begin(&mut self, time_ms: i64) {
        let events = self.state.drag_begin(time_ms);
        self.dispatch(events);
    }

    pub fn drag_move(&mut self, raw_dx: f32, raw_dy: f32, time_ms: i64) {
        let events = self.state.drag_move(raw_dx, raw_dy, time_ms);
        self.dispatch(events);
    }

    pub fn drag_end(&mut self) {
        let events = self.state.drag_end();
        self.dispatch(events);
    }

    pub fn drag_end_with_velocity(&mut self, velocity: f32) {
        let events = self.state.drag_end_with_velocity(velocity);
        self.dispatch(events);
    }

    /// Direct tap on placeholder `index`.
    pub fn select(&mut self, index: usize) {
        let events = self.state.select(index);
        self.dispatch(events);
    }

    /// Advance to `frame_time_nanos` and produce the frame to paint.
    pub fn frame(&mut self, frame_time_nanos: u64) -> TabFrame {
        let events = self.state.tick(frame_time_nanos);
        self.dispatch(events);

        let progress = self.state.progress();
        let translation = self.state.translation();
        let placeholders = (0..self.tabs.count)
            .map(|index| {
                let cover = cover_opacity(translation, index, self.tabs.step);
                PlaceholderFrame {
                    translation: index as f32 * self.tabs.step,
                    cover_opacity: cover,
                    cover_color: self.placeholder_color.with_alpha(cover),
                    label_opacity: label_opacity(translation, index, self.tabs.step),
                }
            })
            .collect();

        TabFrame {
            outline: self.shape.outline(progress, self.state.vertical_offset()),
            fill: self.fill.brush(progress),
            translation,
            selected: self.state.selected_index(),
            placeholders,
        }
    }

    fn dispatch(&mut self, events: Vec<DragEvent>) {
        for event in events {
            match event {
                DragEvent::Haptic(cue) => {
                    if let Some(callback) = self.callbacks.on_haptic.as_mut() {
                        callback(cue);
                    }
                }
                DragEvent::StretchStarted => {
                    if let Some(callback) = self.callbacks.on_stretch_start.as_mut() {
                        callback();
                    }
                }
                DragEvent::StretchEnded => {
                    if let Some(callback) = self.callbacks.on_stretch_end.as_mut() {
                        callback();
                    }
                }
                DragEvent::Selected(index) => {
                    if let Some(callback) = self.callbacks.on_select.as_mut() {
                        callback(index);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/widget_tests.rs"]
mod tests;
