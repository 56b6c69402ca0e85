//! Placeholder opacity signals.
//!
//! Each tab slot renders a static cover (a dimmed pill the indicator can
//! sit over) and a label. Both fade as the live indicator translation
//! approaches the slot: the cover disappears under the indicator while the
//! label shows through it.

use stickytab_animation::interpolate;

/// Cover opacity for slot `index`: 0.2 while the indicator occupies a
/// neighboring slot, 0 when it covers this one, clamped outside.
pub fn cover_opacity(translation: f32, index: usize, step: f32) -> f32 {
    slot_opacity(translation, index, step, &[0.2, 0.0, 0.2])
}

/// Label opacity for slot `index`: fully visible only while the indicator
/// covers this slot.
pub fn label_opacity(translation: f32, index: usize, step: f32) -> f32 {
    slot_opacity(translation, index, step, &[0.0, 1.0, 0.0])
}

fn slot_opacity(translation: f32, index: usize, step: f32, output: &[f32; 3]) -> f32 {
    if step <= 0.0 {
        return output[1];
    }
    let center = index as f32 * step;
    interpolate(
        translation,
        &[center - step, center, center + step],
        output,
    )
}
