//! # Animation Sequencer
//!
//! Drives one button through its phases in response to a single click.
//!
//! ## Scheduling
//!
//! A trigger snapshots the [`TransitionTable`] into a run plan. The plan is
//! consumed by one loop, [`Sequencer::advance_to`], which fires every step
//! whose deadline has passed. Each deadline is measured from the previous
//! step's *scheduled* time, so a late poll never stretches the timeline.
//!
//! ## Guard
//!
//! Only an idle button can be triggered. A trigger at any other time is
//! dropped without effect; there is no error to report. Once started, a run
//! is not affected by reconfiguration and completes unless cancelled.

use crate::config::ButtonConfig;
use crate::icon::{render_icon, IconInputs, IconView};
use crate::phase::AnimationPhase;
use crate::render::RenderContext;
use crate::shell::{render_shell, ShellView};
use crate::timing::{PlannedStep, StepAction, TransitionTable};

/// The mutable record owned by one button instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequencerState {
    /// Current phase.
    pub phase: AnimationPhase,
    /// Success label shown.
    pub success_text_visible: bool,
}

impl SequencerState {
    /// Where every run ends.
    pub const TERMINAL: Self = Self {
        phase: AnimationPhase::ShellExpanding,
        success_text_visible: true,
    };
}

/// Observable change produced by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// A phase became active.
    PhaseEntered {
        /// The new phase.
        phase: AnimationPhase,
        /// Virtual time of the change.
        at_ms: u64,
    },
    /// The success label became visible.
    SuccessTextShown {
        /// Virtual time of the change.
        at_ms: u64,
    },
}

impl SequencerEvent {
    /// When the change happened.
    #[must_use]
    pub const fn at_ms(&self) -> u64 {
        match *self {
            Self::PhaseEntered { at_ms, .. } | Self::SuccessTextShown { at_ms } => at_ms,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonView {
    /// State being rendered (terminal when success is forced).
    pub state: SequencerState,
    /// Initial label visible.
    pub is_initial_text_visible: bool,
    /// Icon wants the centre.
    pub is_icon_centered: bool,
    /// Icon pinned left.
    pub is_icon_on_left: bool,
    /// Tick rather than plane.
    pub show_tick_glyph: bool,
    /// Shell box model.
    pub shell: ShellView,
    /// Icon, if the button has one.
    pub icon: Option<IconView>,
}

/// The click-driven phase machine for one button.
#[derive(Debug, Clone)]
pub struct Sequencer {
    /// Current settings.
    config: ButtonConfig,
    /// Phase and success flag.
    state: SequencerState,
    /// Steps of the run in progress.
    plan: Vec<PlannedStep>,
    /// Index of the next step to fire.
    cursor: usize,
    /// Deadline of `plan[cursor]`.
    next_due_ms: Option<u64>,
    /// Changes not yet drained.
    events: Vec<SequencerEvent>,
}

impl Sequencer {
    /// Creates an idle sequencer.
    #[must_use]
    pub fn new(config: ButtonConfig) -> Self {
        Self {
            config,
            state: SequencerState::default(),
            plan: Vec::new(),
            cursor: 0,
            next_due_ms: None,
            events: Vec::with_capacity(8),
        }
    }

    /// Returns the current settings.
    #[must_use]
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Replaces the settings. A run in progress keeps its original plan.
    pub fn reconfigure(&mut self, config: ButtonConfig) {
        tracing::info!(
            "Button reconfigured: size={} icon={} reduced_motion={} forced_success={}",
            config.size,
            config.show_icon,
            config.reduced_motion,
            config.forced_success
        );
        self.config = config;
    }

    /// Sets the reduced-motion preference re-read from the host.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        let config = self.config.clone().with_reduced_motion(reduced_motion);
        self.reconfigure(config);
    }

    /// Returns the local state, ignoring forced success.
    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.state.phase
    }

    /// Returns true while steps are pending.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Deadline of the next pending step.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Starts a run at `now_ms`. Ignored unless idle.
    pub fn trigger(&mut self, now_ms: u64) {
        if self.state.phase != AnimationPhase::Idle {
            tracing::trace!("Trigger ignored in phase {}", self.state.phase);
            return;
        }

        if self.config.reduced_motion {
            self.state = SequencerState::TERMINAL;
            self.events.push(SequencerEvent::PhaseEntered {
                phase: AnimationPhase::ShellExpanding,
                at_ms: now_ms,
            });
            self.events.push(SequencerEvent::SuccessTextShown { at_ms: now_ms });
            tracing::info!("Run completed instantly at {now_ms}ms (reduced motion)");
            return;
        }

        let table = TransitionTable::new(&self.config.timing, self.config.show_icon);
        self.plan = table.plan();
        self.cursor = 0;
        self.next_due_ms = self.plan.first().map(|step| now_ms.saturating_add(step.delay_ms));

        self.state.success_text_visible = false;
        self.enter(AnimationPhase::TextFading, now_ms);
    }

    /// Fires every step due at or before `now_ms`. Returns how many fired.
    pub fn advance_to(&mut self, now_ms: u64) -> usize {
        let mut fired = 0;
        while let Some(due) = self.next_due_ms {
            if due > now_ms {
                break;
            }
            let step = self.plan[self.cursor];
            self.cursor += 1;
            self.next_due_ms = self
                .plan
                .get(self.cursor)
                .map(|next| due.saturating_add(next.delay_ms));

            match step.action {
                StepAction::Enter(phase) => self.enter(phase, due),
                StepAction::RevealSuccessText => {
                    self.state.success_text_visible = true;
                    self.events.push(SequencerEvent::SuccessTextShown { at_ms: due });
                    tracing::info!("Run completed at {due}ms");
                }
            }
            fired += 1;
        }

        if self.next_due_ms.is_none() && !self.plan.is_empty() {
            self.plan.clear();
            self.cursor = 0;
        }
        fired
    }

    /// Drops pending steps. The current phase stays as it is.
    pub fn cancel(&mut self) {
        if self.next_due_ms.take().is_some() {
            tracing::debug!(
                "Run cancelled in phase {} with {} step(s) pending",
                self.state.phase,
                self.plan.len() - self.cursor
            );
        }
        self.plan.clear();
        self.cursor = 0;
    }

    /// Cancels any run and returns to idle.
    pub fn reset(&mut self) {
        self.cancel();
        self.state = SequencerState::default();
    }

    /// Takes the changes recorded since the last drain.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, SequencerEvent> {
        self.events.drain(..)
    }

    /// State to render: terminal when success is forced, local otherwise.
    #[must_use]
    pub fn effective_state(&self) -> SequencerState {
        if self.config.forced_success {
            SequencerState::TERMINAL
        } else {
            self.state
        }
    }

    /// Initial label visible.
    #[must_use]
    pub fn is_initial_text_visible(&self) -> bool {
        self.effective_state().phase.is_initial_text_visible()
    }

    /// Icon wants the centre.
    #[must_use]
    pub fn is_icon_centered(&self) -> bool {
        self.effective_state().phase.is_icon_centered()
    }

    /// Icon pinned left.
    #[must_use]
    pub fn is_icon_on_left(&self) -> bool {
        self.effective_state().phase.is_icon_on_left()
    }

    /// Tick rather than plane: while swapping, and from success onwards.
    #[must_use]
    pub fn show_tick_glyph(&self) -> bool {
        let phase = self.effective_state().phase;
        let success_state = phase == AnimationPhase::ShellExpanding || self.config.forced_success;
        phase == AnimationPhase::IconSwapping || success_state
    }

    /// Builds the full render snapshot.
    #[must_use]
    pub fn view(&self) -> ButtonView {
        let state = self.effective_state();
        let ctx = RenderContext::from_config(&self.config);
        let show_tick_glyph = self.show_tick_glyph();

        let icon = self.config.show_icon.then(|| {
            render_icon(
                IconInputs {
                    show_tick_glyph,
                    is_icon_centered: state.phase.is_icon_centered(),
                    is_icon_on_left: state.phase.is_icon_on_left(),
                    phase: state.phase,
                },
                &ctx,
            )
        });

        ButtonView {
            state,
            is_initial_text_visible: state.phase.is_initial_text_visible(),
            is_icon_centered: state.phase.is_icon_centered(),
            is_icon_on_left: state.phase.is_icon_on_left(),
            show_tick_glyph,
            shell: render_shell(state, &ctx),
            icon,
        }
    }

    fn enter(&mut self, phase: AnimationPhase, at_ms: u64) {
        let old = self.state.phase;
        self.state.phase = phase;
        self.events.push(SequencerEvent::PhaseEntered { phase, at_ms });
        tracing::debug!("Button phase transition: {old} -> {phase} at {at_ms}ms");
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(ButtonConfig::default())
    }
}
