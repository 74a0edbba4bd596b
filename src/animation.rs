use tracing::debug;

use crate::constants::PER_CARD_DURATION_MS;
use crate::element::{EffectTag, VisualElement};
use crate::scheduler::Scheduler;
use crate::state::AnimationState;

pub const RESET_MESSAGE: &str = "Animations reset successfully";

/// Duration grows with the batch size so the removal timer does not cut a
/// large collection short: `base_ms` plus 100 ms per element.
pub fn compute_duration(count: usize, base_ms: u32) -> u32 {
    base_ms + count as u32 * PER_CARD_DURATION_MS
}

enum AnimTask {
    RemoveTag(EffectTag),
    ClearAnimating,
    AutoPulse { duration_ms: u32 },
}

/// Gates animation triggers to at most one in flight. An accepted trigger
/// tags every element immediately and schedules both the tag removal and the
/// return to `Idle` after the requested duration.
pub struct AnimationController {
    state: AnimationState,
    scheduler: Scheduler<AnimTask>,
}

impl AnimationController {
    pub fn new() -> Self {
        Self {
            state: AnimationState::Idle,
            scheduler: Scheduler::new(),
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Starts an animation cycle unless one is already running. Returns
    /// false when the request is dropped; the caller may reissue it later.
    pub fn try_apply_animation<E: VisualElement>(
        &mut self,
        elements: &mut [E],
        tag: EffectTag,
        duration_ms: u32,
    ) -> bool {
        if self.state == AnimationState::Animating {
            debug!(tag = tag.as_str(), "animation in flight, request dropped");
            return false;
        }

        self.state = AnimationState::Animating;
        for element in elements.iter_mut() {
            element.add_tag(tag);
        }
        self.scheduler.schedule(duration_ms, AnimTask::RemoveTag(tag));
        self.scheduler.schedule(duration_ms, AnimTask::ClearAnimating);

        debug!(
            tag = tag.as_str(),
            duration_ms,
            count = elements.len(),
            "animation started"
        );
        true
    }

    /// Strips every known tag from every element, whatever the gating state.
    /// A removal already scheduled by `try_apply_animation` fires as a no-op
    /// afterwards.
    pub fn reset_all<E: VisualElement>(&self, elements: &mut [E]) -> &'static str {
        for element in elements.iter_mut() {
            for tag in EffectTag::ALL {
                element.remove_tag(tag);
            }
        }
        RESET_MESSAGE
    }

    /// Arms the one-shot startup pulse fired `delay_ms` after launch.
    pub fn schedule_auto_pulse(&mut self, delay_ms: u32, duration_ms: u32) {
        self.scheduler
            .schedule(delay_ms, AnimTask::AutoPulse { duration_ms });
    }

    /// Consumes frame time and applies every deferred action that came due.
    pub fn tick<E: VisualElement>(&mut self, dt_ms: f32, elements: &mut [E]) {
        for task in self.scheduler.advance(dt_ms) {
            match task {
                AnimTask::RemoveTag(tag) => {
                    for element in elements.iter_mut() {
                        element.remove_tag(tag);
                    }
                }
                AnimTask::ClearAnimating => {
                    self.state = AnimationState::Idle;
                }
                AnimTask::AutoPulse { duration_ms } => {
                    self.try_apply_animation(elements, EffectTag::Pulse, duration_ms);
                }
            }
        }
    }
}
