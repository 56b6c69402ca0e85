use super::*;
use crate::config::StickyTabConfig;
use crate::drag::HapticCue;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use stickytab_graphics::Color;

const FRAME_NANOS: u64 = 16_666_667;

fn solid_fill() -> TabFill {
    TabFill::Solid {
        rest: Color::from_rgb_u8(0x45, 0xa6, 0xe5),
        stretched: Color::from_rgb_u8(0x97, 0xc8, 0xe8),
    }
}

fn config() -> StickyTabConfig {
    // step 110, elastic threshold 90 * 1.5 = 135
    StickyTabConfig::new(["Home", "Search", "Likes", "Profile"])
        .tab_width(90.0)
        .tab_gap(20.0)
        .fill(solid_fill())
}

fn run_frames(tab: &mut StickyTab, start_nanos: u64, frames: u64) {
    for frame in 1..=frames {
        tab.frame(start_nanos + frame * FRAME_NANOS);
    }
}

#[test]
fn resting_frame_is_undeformed() {
    let mut tab = StickyTab::new(config());
    let frame = tab.frame(FRAME_NANOS);

    assert_eq!(frame.translation, 0.0);
    assert_eq!(frame.selected, 0);
    assert_eq!(frame.fill, solid_fill().brush(0.0));

    let metrics = *tab.metrics();
    let rest = TabShape::new(
        metrics.tab_width,
        metrics.tab_height,
        metrics.head_radius,
        metrics.tail_radius,
        metrics.horizontal_resistance,
        metrics.vertical_resistance,
    )
    .outline(0.0, 0.0);
    assert_eq!(frame.outline, rest);

    assert_eq!(frame.placeholders.len(), 4);
    let home = frame.placeholders[0];
    assert_eq!(home.translation, 0.0);
    assert_eq!(home.cover_opacity, 0.0);
    assert_eq!(home.cover_color, tab.placeholder_color().with_alpha(0.0));
    assert_eq!(home.label_opacity, 1.0);
    // The occupied slot's neighbor shows its dimmed cover and no label.
    let search = frame.placeholders[1];
    assert_eq!(search.translation, 110.0);
    assert_eq!(search.cover_opacity, 0.2);
    assert_eq!(search.cover_color, tab.placeholder_color().with_alpha(0.2));
    assert_eq!(search.label_opacity, 0.0);
}

#[test]
fn stretching_deforms_without_moving_the_anchor() {
    let mut tab = StickyTab::new(config());
    let rest = tab.frame(FRAME_NANOS);

    tab.drag_begin(0);
    tab.drag_move(100.0, 0.0, 16);
    let stretched = tab.frame(2 * FRAME_NANOS);

    assert_eq!(stretched.translation, 0.0);
    assert_ne!(stretched.outline, rest.outline);
    assert_ne!(stretched.fill, rest.fill);
    assert_eq!(stretched.selected, 0);
}

#[test]
fn drag_gesture_drives_callbacks_and_selection() {
    let selections = Rc::new(RefCell::new(Vec::new()));
    let stretch_starts = Rc::new(Cell::new(0u32));
    let stretch_ends = Rc::new(Cell::new(0u32));
    let haptics = Rc::new(RefCell::new(Vec::new()));

    let mut tab = StickyTab::new(config())
        .on_select({
            let selections = selections.clone();
            move |index| selections.borrow_mut().push(index)
        })
        .on_stretch_start({
            let stretch_starts = stretch_starts.clone();
            move || stretch_starts.set(stretch_starts.get() + 1)
        })
        .on_stretch_end({
            let stretch_ends = stretch_ends.clone();
            move || stretch_ends.set(stretch_ends.get() + 1)
        })
        .on_haptic({
            let haptics = haptics.clone();
            move |cue| haptics.borrow_mut().push(cue)
        });

    tab.drag_begin(0);
    tab.drag_move(140.0, 0.0, 16);
    tab.drag_move(150.0, 0.0, 24);
    tab.drag_end_with_velocity(0.0);
    run_frames(&mut tab, 0, 60);

    assert_eq!(
        *haptics.borrow(),
        vec![HapticCue::DragStart, HapticCue::StretchStart]
    );
    assert_eq!(stretch_starts.get(), 1);
    assert_eq!(stretch_ends.get(), 1);
    // Released at 150: nearest grid point is 110, the second slot.
    assert_eq!(*selections.borrow(), vec![1]);
    assert_eq!(tab.selected_index(), 1);

    let settled = tab.frame(120 * FRAME_NANOS);
    assert_eq!(settled.translation, 110.0);
    assert_eq!(settled.selected, 1);
}

#[test]
fn tap_selection_fires_immediately_then_glides() {
    let selections = Rc::new(RefCell::new(Vec::new()));
    let mut tab = StickyTab::new(config()).on_select({
        let selections = selections.clone();
        move |index| selections.borrow_mut().push(index)
    });

    tab.select(2);
    assert_eq!(*selections.borrow(), vec![2]);
    assert_eq!(tab.selected_index(), 2);

    run_frames(&mut tab, 0, 60);
    let frame = tab.frame(120 * FRAME_NANOS);
    assert_eq!(frame.translation, 220.0);
    assert_eq!(frame.selected, 2);
    // The glide never re-reports the selection.
    assert_eq!(*selections.borrow(), vec![2]);
}

#[test]
fn labels_are_preserved_in_order() {
    let tab = StickyTab::new(config().placeholder_color(Color::WHITE));
    assert_eq!(tab.labels(), ["Home", "Search", "Likes", "Profile"]);
    assert_eq!(tab.metrics().step, 110.0);
    assert_eq!(tab.metrics().max_stretch, 135.0);
    assert_eq!(tab.placeholder_color(), Color::WHITE);
}
