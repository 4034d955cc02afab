//! Integration tests for the settings tabs and color presets.

use egui::Color32;
use kittest::Queryable as _;

mod common;

use crate::common::default_harness;

#[test]
fn test_design_tab_shows_color_and_logo_controls() {
    let mut harness = default_harness();
    harness.step();

    harness.get_by_label("Design").click();
    harness.step();

    for label in ["QR Color", "Background", "Upload Logo", "Pink", "Purple", "Blue"] {
        assert!(
            harness.query_by_label_contains(label).is_some(),
            "{label} should be displayed on the Design tab"
        );
    }
}

#[test]
fn test_advanced_tab_shows_tracking_field() {
    let mut harness = default_harness();
    harness.step();

    harness.get_by_label("Advanced").click();
    harness.step();

    assert!(
        harness
            .query_by_label_contains("Google Analytics ID")
            .is_some(),
        "tracking id field label should be displayed"
    );
    assert!(
        harness
            .query_by_label_contains("Add tracking parameters to your QR code")
            .is_some(),
        "explanatory note should be displayed"
    );
}

#[test]
fn test_preset_sets_both_colors() {
    let mut harness = default_harness();
    harness.step();

    harness.get_by_label("Design").click();
    harness.step();

    harness.get_by_label("Pink").click();
    harness.step();

    let state = harness.state().state();
    assert_eq!(
        state.composition.fg_color,
        Color32::from_rgb(0xFF, 0x69, 0xB4)
    );
    assert_eq!(
        state.composition.bg_color,
        Color32::from_rgb(0xFF, 0xE4, 0xE1)
    );
    // The hex mirrors follow the preset.
    assert_eq!(state.hex_buffers.fg, "#FF69B4");
    assert_eq!(state.hex_buffers.bg, "#FFE4E1");
}

#[test]
fn test_each_preset_applies_its_palette() {
    let presets = [
        ("Purple", (0x93, 0x70, 0xDB), (0xE6, 0xE6, 0xFA)),
        ("Blue", (0x41, 0x69, 0xE1), (0xE0, 0xF6, 0xFF)),
    ];

    for (label, fg, bg) in presets {
        let mut harness = default_harness();
        harness.step();
        harness.get_by_label("Design").click();
        harness.step();
        harness.get_by_label(label).click();
        harness.step();

        let state = harness.state().state();
        assert_eq!(
            state.composition.fg_color,
            Color32::from_rgb(fg.0, fg.1, fg.2),
            "{label} preset foreground"
        );
        assert_eq!(
            state.composition.bg_color,
            Color32::from_rgb(bg.0, bg.1, bg.2),
            "{label} preset background"
        );
    }
}
