//! Easing curves, animation specs and the tick-driven `Animatable`.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Multi-stop linear interpolation with output clamped to the range edges.
///
/// Maps `value` from `input` stops to `output` stops the way the deformation
/// signals are specified: piecewise-linear between adjacent stops, flat
/// outside the first/last stop. `input` must be sorted ascending and both
/// slices must have the same length of at least two.
pub fn interpolate(value: f32, input: &[f32], output: &[f32]) -> f32 {
    debug_assert!(input.len() >= 2 && input.len() == output.len());

    if value <= input[0] {
        return output[0];
    }
    let last = input.len() - 1;
    if value >= input[last] {
        return output[last];
    }

    let mut hi = 1;
    while input[hi] < value {
        hi += 1;
    }
    let lo = hi - 1;
    let span = input[hi] - input[lo];
    if span <= f32::EPSILON {
        return output[hi];
    }
    let fraction = (value - input[lo]) / span;
    output[lo].lerp(&output[hi], fraction)
}

/// Easing functions for timed animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    LinearEasing,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric value matching the x fraction,
    // with a bisection fallback when the derivative degenerates.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Timed animation specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 = under-damped (bouncy).
    pub damping_ratio: f32,
    /// Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold to stop the animation (progress units / s).
    pub velocity_threshold: f32,
    /// Position threshold to stop the animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Under-damped spring that may overshoot before settling. The settle
    /// and stick transitions use this.
    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn stiff() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 3000.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Spring(SpringSpec::default())
    }
}

/// A scalar value that can be set directly, frozen in place, or animated
/// toward a target, advanced by explicit frame timestamps.
///
/// The widget owns a handful of these and calls [`Animatable::tick`] once
/// per display refresh; there is no shared runtime and no frame-callback
/// registration to cancel.
#[derive(Debug, Clone)]
pub struct Animatable {
    current: f32,
    velocity: f32,
    start: f32,
    target: f32,
    animation: AnimationType,
    start_time_nanos: Option<u64>,
    last_time_nanos: Option<u64>,
    running: bool,
}

impl Animatable {
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            velocity: 0.0,
            start: initial,
            target: initial,
            animation: AnimationType::default(),
            start_time_nanos: None,
            last_time_nanos: None,
            running: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Animate from the current value to `target`.
    pub fn animate_to(&mut self, target: f32, animation: AnimationType) {
        self.start = self.current;
        self.target = target;
        self.animation = animation;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_time_nanos = None;
        self.running = true;
    }

    /// Jump to `value` immediately, cancelling any running animation.
    pub fn snap_to(&mut self, value: f32) {
        self.current = value;
        self.start = value;
        self.target = value;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_time_nanos = None;
        self.running = false;
    }

    /// Stop a running animation in place, retaining the current animated
    /// value. Used when a new gesture supersedes an in-flight settle.
    pub fn freeze(&mut self) {
        let current = self.current;
        self.snap_to(current);
    }

    /// Advance the animation to `frame_time_nanos`. Returns `true` on the
    /// tick the animation reaches its target.
    pub fn tick(&mut self, frame_time_nanos: u64) -> bool {
        if !self.running {
            return false;
        }

        match self.animation {
            AnimationType::Tween(spec) => {
                let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
                let elapsed = frame_time_nanos.saturating_sub(start_time);
                let duration = (spec.duration_millis * 1_000_000).max(1);
                let linear = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);
                self.current = self.start.lerp(&self.target, spec.easing.transform(linear));
                if linear >= 1.0 {
                    self.finish();
                    return true;
                }
                false
            }
            AnimationType::Spring(spec) => {
                self.start_time_nanos.get_or_insert(frame_time_nanos);
                let last = *self.last_time_nanos.get_or_insert(frame_time_nanos);
                self.last_time_nanos = Some(frame_time_nanos);
                let dt = frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0;
                if dt == 0.0 {
                    return false;
                }

                // Damped harmonic oscillator in progress space, integrated
                // with semi-implicit Euler at a fixed sub-step for
                // stability on long frames.
                let span = self.target - self.start;
                if span.abs() < f32::EPSILON {
                    self.finish();
                    return true;
                }
                let stiffness = spec.stiffness;
                let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();

                let mut progress = (self.current - self.start) / span;
                let mut elapsed = 0.0f32;
                let timestep: f32 = 0.016;
                while elapsed < dt {
                    let step = timestep.min(dt - elapsed);
                    let displacement = progress - 1.0;
                    let force = -stiffness * displacement - damping * self.velocity;
                    self.velocity += force * step;
                    progress = (progress + self.velocity * step).clamp(-1.0, 2.0);
                    elapsed += step;
                }
                self.current = self.start.lerp(&self.target, progress);

                let at_rest = self.velocity.abs() < spec.velocity_threshold;
                let near_target = (progress - 1.0).abs() < spec.position_threshold;
                if at_rest && near_target {
                    self.finish();
                    return true;
                }
                false
            }
        }
    }

    fn finish(&mut self) {
        self.current = self.target;
        self.start = self.target;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_time_nanos = None;
        self.running = false;
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
