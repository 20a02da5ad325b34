//! # Sequence Timeline Verification
//!
//! Drives full runs on a virtual clock and checks what a renderer polling
//! every millisecond would observe.
//!
//! Run with: cargo test -p showcase_ui --test sequence_timeline

use showcase_shared::{Clock, ManualClock};
use showcase_ui::{
    AnimationPhase, ButtonConfig, PhaseTiming, SequenceDriver, Sequencer, SequencerEvent,
    SequencerState,
};

/// Polls `driver` once per millisecond up to `until_ms`, recording every
/// distinct state with the time it was first seen.
fn observe(
    driver: &mut SequenceDriver<Sequencer, &ManualClock>,
    clock: &ManualClock,
    until_ms: u64,
) -> Vec<(u64, SequencerState)> {
    let mut seen: Vec<(u64, SequencerState)> = Vec::new();
    loop {
        driver.pump();
        let state = driver.sequencer().state();
        if seen.last().map(|(_, last)| *last) != Some(state) {
            seen.push((clock.now_ms(), state));
        }
        if clock.now_ms() >= until_ms {
            return seen;
        }
        clock.advance(1);
    }
}

fn scenario_timing() -> PhaseTiming {
    PhaseTiming {
        text_fade_out: 300,
        icon_center: 400,
        shell_compress: 400,
        shell_relax: 400,
        icon_swap: 300,
        shell_expand: 400,
        text_fade_in_delay: 150,
        ..PhaseTiming::instant()
    }
}

#[test]
fn verify_default_scenario_timeline() {
    let clock = ManualClock::default();
    let config = ButtonConfig::default().with_timing(scenario_timing());
    let mut driver = SequenceDriver::new(Sequencer::new(config), &clock);

    driver.trigger();
    let seen = observe(&mut driver, &clock, 2_500);

    let phase = |phase| SequencerState {
        phase,
        success_text_visible: false,
    };
    assert_eq!(
        seen,
        vec![
            (0, phase(AnimationPhase::TextFading)),
            (300, phase(AnimationPhase::IconCentering)),
            (620, phase(AnimationPhase::ShellCompressing)),
            (1020, phase(AnimationPhase::ShellRelaxing)),
            (1340, phase(AnimationPhase::IconSwapping)),
            (1640, phase(AnimationPhase::ShellExpanding)),
            (1790, SequencerState::TERMINAL),
        ]
    );
}

#[test]
fn verify_every_phase_visited_once_in_order() {
    let mut seq = Sequencer::default();
    seq.trigger(0);
    seq.advance_to(u64::MAX);

    let phases: Vec<_> = seq
        .drain_events()
        .filter_map(|event| match event {
            SequencerEvent::PhaseEntered { phase, .. } => Some(phase),
            SequencerEvent::SuccessTextShown { .. } => None,
        })
        .collect();
    assert_eq!(phases, AnimationPhase::ALL[1..].to_vec());
}

#[test]
fn verify_reduced_motion_never_shows_intermediate_phases() {
    let clock = ManualClock::default();
    let config = ButtonConfig::default().with_reduced_motion(true);
    let mut driver = SequenceDriver::new(Sequencer::new(config), &clock);

    driver.trigger();
    let seen = observe(&mut driver, &clock, 1);
    assert_eq!(seen, vec![(0, SequencerState::TERMINAL)]);

    let view = driver.sequencer().view();
    assert!(view.shell.success_label.visible);
    assert!(view.show_tick_glyph);
    assert!(view.shell.resize.is_instant());
}

#[test]
fn verify_no_icon_route() {
    let clock = ManualClock::default();
    let config = ButtonConfig::default().with_icon(false);
    let mut driver = SequenceDriver::new(Sequencer::new(config), &clock);

    driver.trigger();
    let seen = observe(&mut driver, &clock, 1_000);

    for (_, state) in &seen {
        assert!(
            !state.phase.requires_icon(),
            "icon phase {} visited without an icon",
            state.phase
        );
    }
    let times: Vec<_> = seen.iter().map(|(t, s)| (*t, s.phase)).collect();
    assert_eq!(
        times,
        vec![
            (0, AnimationPhase::TextFading),
            (300, AnimationPhase::ShellExpanding),
            (450, AnimationPhase::ShellExpanding),
        ]
    );
    assert!(seen.last().is_some_and(|(_, s)| s.success_text_visible));
}

#[test]
fn verify_post_delays_shift_the_timeline() {
    let timing = PhaseTiming {
        delay_after_text_fade_out: 100,
        delay_after_shell_compress: 50,
        ..scenario_timing()
    };
    let mut seq = Sequencer::new(ButtonConfig::default().with_timing(timing));
    seq.trigger(0);
    seq.advance_to(u64::MAX);

    let times: Vec<_> = seq.drain_events().map(|e| e.at_ms()).collect();
    assert_eq!(times, vec![0, 400, 720, 1170, 1490, 1790, 1940]);
}

#[test]
fn verify_icon_on_left_across_a_run() {
    let mut seq = Sequencer::default();
    assert!(seq.is_icon_on_left());
    seq.trigger(0);

    for t in 0..=1_800 {
        seq.advance_to(t);
        let expected = matches!(
            seq.phase(),
            AnimationPhase::Idle | AnimationPhase::ShellExpanding
        );
        assert_eq!(seq.is_icon_on_left(), expected, "t={t} phase={}", seq.phase());
        assert_eq!(seq.is_initial_text_visible(), seq.phase() == AnimationPhase::Idle);
    }
}

#[test]
fn verify_dropping_driver_disposes_run() {
    let clock = ManualClock::default();
    let mut seq = Sequencer::default();
    {
        let mut driver = SequenceDriver::new(&mut seq, &clock);
        driver.trigger();
        clock.advance(700);
        driver.pump();
        assert_eq!(driver.sequencer().phase(), AnimationPhase::ShellCompressing);
        assert_eq!(driver.sequencer().next_deadline(), Some(1_020));
    }

    assert!(!seq.is_running());
    assert_eq!(seq.next_deadline(), None);
    assert_eq!(seq.advance_to(5_000), 0);
    assert_eq!(seq.phase(), AnimationPhase::ShellCompressing);
    assert!(seq.drain_events().all(|event| event.at_ms() <= 620));
}
