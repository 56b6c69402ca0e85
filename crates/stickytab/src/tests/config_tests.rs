use super::*;
use stickytab_graphics::{Brush, Color, Size};

fn labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Tab {i}")).collect()
}

#[test]
fn tab_width_is_derived_from_container() {
    let tabs = StickyTabConfig::new(labels(4))
        .container_width(360.0)
        .inner_padding(7.0)
        .tab_gap(20.0)
        .resolve();

    // (360 - 2*7) / 4 - 20
    assert!((tabs.tab_width - 66.5).abs() < 1e-4);
    assert!((tabs.step - 86.5).abs() < 1e-4);
    assert_eq!(tabs.count, 4);
}

#[test]
fn explicit_tab_width_wins() {
    let tabs = StickyTabConfig::new(labels(3)).tab_width(90.0).resolve();
    assert_eq!(tabs.tab_width, 90.0);
    assert_eq!(tabs.max_stretch, 90.0 * tabs.horizontal_resistance);
}

#[test]
fn container_metrics_follow_the_tab() {
    let tabs = StickyTabConfig::new(labels(4))
        .tab_height(40.0)
        .inner_padding(7.0)
        .border_width(3.0)
        .tab_width(90.0)
        .resolve();

    assert_eq!(tabs.container_height, 40.0 + 2.0 * 7.0 + 2.0 * 3.0);
    assert_eq!(tabs.container_size(), Size::new(360.0, 60.0));
    // default radii are half the tab height
    assert_eq!(tabs.head_radius, 20.0);
    assert_eq!(tabs.container_radius, 20.0 + 7.0);
}

#[test]
fn out_of_domain_resistances_are_corrected() {
    let tabs = StickyTabConfig::new(labels(2))
        .horizontal_resistance(0.4)
        .vertical_resistance(3.0)
        .resolve();
    assert_eq!(tabs.horizontal_resistance, 1.0);
    assert_eq!(tabs.vertical_resistance, 1.0);

    let tabs = StickyTabConfig::new(labels(2))
        .tab_height(40.0)
        .vertical_resistance(-0.5)
        .resolve();
    assert!(tabs.vertical_resistance > 0.0 && tabs.vertical_resistance <= 1.0);
}

#[test]
fn oversized_radii_are_clamped_to_body_thickness() {
    let tabs = StickyTabConfig::new(labels(3))
        .tab_height(40.0)
        .tab_width(90.0)
        .head_radius(500.0)
        .tail_radius(35.0)
        .resolve();
    assert_eq!(tabs.head_radius, 20.0);
    assert_eq!(tabs.tail_radius, 20.0);
}

#[test]
fn grid_spans_the_drag_range() {
    let grid = StickyTabConfig::new(labels(4)).tab_width(90.0).tab_gap(20.0).resolve().grid();
    assert_eq!(grid.points(), vec![0.0, 110.0, 220.0, 330.0]);
    assert_eq!(grid.max_travel(), 330.0);
}

#[test]
fn solid_fill_interpolates_symmetrically() {
    let fill = TabFill::Solid {
        rest: Color::from_rgb_u8(0x45, 0xa6, 0xe5),
        stretched: Color::from_rgb_u8(0x97, 0xc8, 0xe8),
    };
    let rest = fill.brush(0.0);
    let forward = fill.brush(0.7);
    let backward = fill.brush(-0.7);
    assert_eq!(forward, backward);
    assert_ne!(rest, forward);
    assert_eq!(rest, Brush::solid(Color::from_rgb_u8(0x45, 0xa6, 0xe5)));
}

#[test]
fn gradient_fill_keeps_its_stops() {
    let colors = vec![Color::from_rgb_u8(0xcc, 0x2b, 0x5e), Color::from_rgb_u8(0x75, 0x3a, 0x88)];
    let fill = TabFill::Gradient(colors.clone());
    assert_eq!(fill.brush(0.9), Brush::linear_gradient(colors));
}
