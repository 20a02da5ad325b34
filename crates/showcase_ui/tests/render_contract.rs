//! # Render Contract Verification
//!
//! Samples the full view at every millisecond of a run and checks the
//! geometry invariants frame by frame, for every size.

use showcase_ui::{
    AnimationPhase, ButtonConfig, Extent, Glyph, IconPlacement, PresetBook, Rect, Sequencer,
    SizeKind,
};

#[test]
fn verify_icon_inside_shell_every_frame() {
    for kind in SizeKind::ALL {
        let mut seq = Sequencer::new(ButtonConfig::default().with_size(kind));
        seq.trigger(0);

        for t in 0..=2_000 {
            seq.advance_to(t);
            let view = seq.view();
            let icon = view.icon.expect("button has an icon");

            // Auto width never drops below min-width.
            let width = view.shell.resolved_width(0.0);
            let shell = Rect::new(0.0, 0.0, width, view.shell.height);
            let bounds = icon.bounds(&shell);
            assert!(
                shell.contains_rect(&bounds),
                "{kind} t={t} {}: icon {bounds:?} outside {shell:?}",
                seq.phase()
            );
        }
    }
}

#[test]
fn verify_label_clear_of_icon_at_rest() {
    for kind in SizeKind::ALL {
        let seq = Sequencer::new(ButtonConfig::default().with_size(kind));
        let view = seq.view();
        assert!(view.is_initial_text_visible);

        let profile = kind.profile();
        let shell = Rect::new(0.0, 0.0, profile.min_width, profile.height);
        let icon = view.icon.expect("button has an icon").bounds(&shell);
        let label = Rect::new(
            profile.text_left,
            0.0,
            profile.min_width - profile.text_left,
            profile.height,
        );
        assert!(!label.intersects(&icon), "{kind}");
    }
}

#[test]
fn verify_glyph_and_placement_through_run() {
    let mut seq = Sequencer::default();
    seq.trigger(0);

    let checkpoints = [
        (0, AnimationPhase::TextFading, Glyph::Pending, false),
        (300, AnimationPhase::IconCentering, Glyph::Pending, true),
        (620, AnimationPhase::ShellCompressing, Glyph::Pending, true),
        (1020, AnimationPhase::ShellRelaxing, Glyph::Pending, true),
        (1340, AnimationPhase::IconSwapping, Glyph::Done, true),
        (1640, AnimationPhase::ShellExpanding, Glyph::Done, false),
    ];
    for (t, phase, glyph, centered) in checkpoints {
        seq.advance_to(t);
        assert_eq!(seq.phase(), phase);
        let icon = seq.view().icon.expect("button has an icon");
        assert_eq!(icon.active_glyph(), glyph, "{phase}");
        assert_eq!(icon.placement == IconPlacement::Centered, centered, "{phase}");
    }
}

#[test]
fn verify_shell_widths_from_loaded_preset() {
    let book = PresetBook::from_toml_str(
        r"
        [presets.slow]
        shell_compress = 900

        [sizes.large]
        height = 96.0
        min_width = 320.0
        compact_width = 80.0
        icon_size = 48.0
        icon_left = 32.0
        text_left = 96.0
        font_size = 24.0
        ",
    )
    .expect("valid presets");

    let mut seq = Sequencer::new(book.button("slow", SizeKind::Large).expect("known preset"));
    seq.trigger(0);
    seq.advance_to(620);

    let view = seq.view();
    assert_eq!(seq.phase(), AnimationPhase::ShellCompressing);
    assert_eq!(view.shell.width, Extent::Px(80.0));
    assert_eq!(view.shell.resize.duration_ms, 900);

    seq.advance_to(620 + 900);
    assert_eq!(seq.phase(), AnimationPhase::ShellRelaxing);
    assert_eq!(seq.view().shell.width, Extent::Px(96.0));
}
