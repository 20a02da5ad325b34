//! # Run Recording
//!
//! Plays a whole button run against a [`ManualClock`] so it can be printed
//! or asserted on without waiting for it.

use showcase_shared::{Clock, ManualClock};
use showcase_ui::{
    AnimationPhase, ButtonConfig, SequenceDriver, Sequencer, SequencerEvent, SizeProfile, Tween,
};

/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE_EM: f32 = 0.55;

/// Plays a run from a click at t=0 and returns every event in order.
#[must_use]
pub fn record_timeline(config: ButtonConfig) -> Vec<SequencerEvent> {
    let clock = ManualClock::default();
    let mut driver = SequenceDriver::new(Sequencer::new(config), &clock);

    driver.trigger();
    let mut events: Vec<SequencerEvent> = driver.sequencer_mut().drain_events().collect();

    while let Some(due) = driver.sequencer().next_deadline() {
        clock.set(due);
        driver.pump();
        events.extend(driver.sequencer_mut().drain_events());
    }

    tracing::debug!("Recorded {} event(s) over {} step(s)", events.len(), driver.fired());
    events
}

/// One frame of the shell width animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthSample {
    /// Frame time.
    pub at_ms: u64,
    /// Phase on that frame.
    pub phase: AnimationPhase,
    /// Animated width in px.
    pub width: f32,
}

/// Width the shell takes when sized by its content.
///
/// Label text is estimated from its character count.
#[must_use]
pub fn estimate_content_width(profile: &SizeProfile, label: &str, show_icon: bool) -> f32 {
    let leading = if show_icon {
        profile.text_left
    } else {
        profile.icon_left
    };
    #[allow(clippy::cast_precision_loss)]
    let text = label.chars().count() as f32 * profile.font_size * GLYPH_ADVANCE_EM;
    leading + text + profile.icon_left
}

/// Samples the shell width every `frame_ms` from the click until both the
/// run and the last resize transition have finished.
///
/// A zero `frame_ms` is treated as 1.
#[must_use]
pub fn sample_widths(config: ButtonConfig, frame_ms: u32) -> Vec<WidthSample> {
    let frame_ms = frame_ms.max(1);
    let content_width = estimate_content_width(&config.profile, &config.label, config.show_icon);

    let clock = ManualClock::default();
    let mut driver = SequenceDriver::new(Sequencer::new(config), &clock);
    let mut width = Tween::new(driver.sequencer().view().shell.resolved_width(content_width));
    let mut samples = Vec::new();

    driver.trigger();
    loop {
        driver.pump();
        drop(driver.sequencer_mut().drain_events());

        let view = driver.sequencer().view();
        width.retarget(view.shell.resolved_width(content_width), view.shell.resize);
        samples.push(WidthSample {
            at_ms: clock.now_ms(),
            phase: view.state.phase,
            width: width.value(),
        });

        if !driver.sequencer().is_running() && width.is_complete() {
            break;
        }
        width.advance(frame_ms);
        clock.advance(u64::from(frame_ms));
    }
    samples
}
