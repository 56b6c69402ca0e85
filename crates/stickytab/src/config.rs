//! Widget configuration and the metrics derived from it.
//!
//! Everything the excluded composition layer supplies arrives here once, at
//! construction time. Out-of-domain inputs are silently corrected (with a
//! warning) rather than rejected; the widget has no error channel.

use crate::shape::MIN_BODY_HEIGHT;
use crate::snap::SnapGrid;
use stickytab_graphics::{Brush, Color, Size};

/// How the tab body is painted.
#[derive(Clone, Debug, PartialEq)]
pub enum TabFill {
    /// Linear gradient over ordered color stops.
    Gradient(Vec<Color>),
    /// Solid color interpolating from `rest` toward `stretched` as the
    /// deformation grows, symmetric for both stretch directions.
    Solid { rest: Color, stretched: Color },
}

impl TabFill {
    /// Brush for the current deformation signal.
    pub fn brush(&self, progress: f32) -> Brush {
        match self {
            TabFill::Gradient(colors) => Brush::linear_gradient(colors.clone()),
            TabFill::Solid { rest, stretched } => {
                Brush::solid(rest.lerp(stretched, progress.abs().clamp(0.0, 1.0)))
            }
        }
    }
}

impl Default for TabFill {
    fn default() -> Self {
        TabFill::Gradient(vec![
            Color::from_rgb_u8(0xcc, 0x2b, 0x5e),
            Color::from_rgb_u8(0x75, 0x3a, 0x88),
        ])
    }
}

/// Sticky tab configuration, builder style.
#[derive(Clone, Debug, PartialEq)]
pub struct StickyTabConfig {
    pub labels: Vec<String>,
    pub container_width: f32,
    pub inner_padding: f32,
    pub tab_height: f32,
    /// Fixed tab width; derived from the container when `None`.
    pub tab_width: Option<f32>,
    pub tab_gap: f32,
    /// Leading-edge corner radius; half the tab height when `None`.
    pub head_radius: Option<f32>,
    /// Trailing-edge corner radius; half the tab height when `None`.
    pub tail_radius: Option<f32>,
    pub border_width: f32,
    /// Stretch multiplier, >= 1. The greater the value, the further the tab
    /// stretches horizontally.
    pub horizontal_resistance: f32,
    /// Shrink multiplier in (0, 1]. The lesser the value, the more the tab
    /// shrinks vertically under stretch.
    pub vertical_resistance: f32,
    pub fill: TabFill,
    pub placeholder_color: Color,
    /// Screen density factor feeding the fling projection (1.0 = mdpi).
    pub density: f32,
}

impl Default for StickyTabConfig {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            container_width: 360.0,
            inner_padding: 7.0,
            tab_height: 40.0,
            tab_width: None,
            tab_gap: 20.0,
            head_radius: None,
            tail_radius: None,
            border_width: 3.0,
            horizontal_resistance: 1.5,
            vertical_resistance: 0.9,
            fill: TabFill::default(),
            placeholder_color: Color::from_rgb_u8(0x75, 0x3a, 0x88),
            density: 1.0,
        }
    }
}

impl StickyTabConfig {
    pub fn new(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn container_width(mut self, width: f32) -> Self {
        self.container_width = width;
        self
    }

    pub fn inner_padding(mut self, padding: f32) -> Self {
        self.inner_padding = padding;
        self
    }

    pub fn tab_height(mut self, height: f32) -> Self {
        self.tab_height = height;
        self
    }

    pub fn tab_width(mut self, width: f32) -> Self {
        self.tab_width = Some(width);
        self
    }

    pub fn tab_gap(mut self, gap: f32) -> Self {
        self.tab_gap = gap;
        self
    }

    pub fn head_radius(mut self, radius: f32) -> Self {
        self.head_radius = Some(radius);
        self
    }

    pub fn tail_radius(mut self, radius: f32) -> Self {
        self.tail_radius = Some(radius);
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    pub fn horizontal_resistance(mut self, resistance: f32) -> Self {
        self.horizontal_resistance = resistance;
        self
    }

    pub fn vertical_resistance(mut self, resistance: f32) -> Self {
        self.vertical_resistance = resistance;
        self
    }

    pub fn fill(mut self, fill: TabFill) -> Self {
        self.fill = fill;
        self
    }

    pub fn placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = color;
        self
    }

    pub fn density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Normalize the configuration and compute the derived metrics.
    pub fn resolve(&self) -> ResolvedTabs {
        let count = self.labels.len().max(1);
        if self.labels.len() < 2 {
            log::warn!(
                "sticky tab configured with {} label(s); the control needs at least 2 to be useful",
                self.labels.len()
            );
        }

        let tab_width = match self.tab_width {
            Some(width) => width,
            None => (self.container_width - 2.0 * self.inner_padding) / count as f32 - self.tab_gap,
        };
        let tab_width = if tab_width > 0.0 {
            tab_width
        } else {
            log::warn!("derived tab width {tab_width} is not positive; clamping to 1");
            1.0
        };

        let horizontal_resistance = if self.horizontal_resistance >= 1.0 {
            self.horizontal_resistance
        } else {
            log::warn!(
                "horizontal resistance {} out of domain (must be >= 1); clamping",
                self.horizontal_resistance
            );
            1.0
        };
        let vertical_resistance = if self.vertical_resistance > 0.0 && self.vertical_resistance <= 1.0
        {
            self.vertical_resistance
        } else {
            let clamped = if self.vertical_resistance <= 0.0 {
                (MIN_BODY_HEIGHT / self.tab_height).min(1.0)
            } else {
                1.0
            };
            log::warn!(
                "vertical resistance {} out of domain (must be in (0, 1]); clamping to {clamped}",
                self.vertical_resistance
            );
            clamped
        };

        let max_radius = (self.tab_height / 2.0).min(tab_width / 2.0).max(0.0);
        let head_radius = self
            .head_radius
            .unwrap_or(self.tab_height / 2.0)
            .clamp(0.0, max_radius);
        let tail_radius = self
            .tail_radius
            .unwrap_or(self.tab_height / 2.0)
            .clamp(0.0, max_radius);

        ResolvedTabs {
            count,
            tab_width,
            tab_height: self.tab_height,
            inner_padding: self.inner_padding,
            tab_gap: self.tab_gap,
            border_width: self.border_width,
            head_radius,
            tail_radius,
            horizontal_resistance,
            vertical_resistance,
            container_width: self.container_width,
            container_height: self.tab_height + 2.0 * self.inner_padding + 2.0 * self.border_width,
            container_radius: (head_radius + tail_radius) / 2.0 + self.inner_padding,
            step: tab_width + self.tab_gap,
            max_stretch: tab_width * horizontal_resistance,
        }
    }
}

/// Normalized configuration plus derived metrics, computed once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTabs {
    pub count: usize,
    pub tab_width: f32,
    pub tab_height: f32,
    pub inner_padding: f32,
    pub tab_gap: f32,
    pub border_width: f32,
    pub head_radius: f32,
    pub tail_radius: f32,
    pub horizontal_resistance: f32,
    pub vertical_resistance: f32,
    pub container_width: f32,
    pub container_height: f32,
    pub container_radius: f32,
    /// Distance between adjacent snap coordinates.
    pub step: f32,
    /// Elastic stretch threshold: tab width x horizontal resistance.
    pub max_stretch: f32,
}

impl ResolvedTabs {
    pub fn grid(&self) -> SnapGrid {
        SnapGrid::new(self.count, self.step)
    }

    /// Outer dimensions of the container the widget is laid out in.
    pub fn container_size(&self) -> Size {
        Size::new(self.container_width, self.container_height)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
