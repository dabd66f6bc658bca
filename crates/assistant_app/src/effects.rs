use std::time::Instant;

use app_logging::{app_debug, app_info};
use assistant_core::{Effect, Msg};

/// Runs the effects requested by the core update function.
///
/// The only asynchronous operation in the shell is the generation timer; it
/// is held here as a deadline rather than a spawned task so that navigation
/// or teardown can drop it without a callback ever firing into a discarded
/// session.
pub struct EffectRunner {
    generation_deadline: Option<Instant>,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self {
            generation_deadline: None,
        }
    }

    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleGeneration { delay } => {
                    app_info!("Generation scheduled, completes in {:?}", delay);
                    self.generation_deadline = Some(Instant::now() + delay);
                }
                Effect::CancelGeneration => self.cancel(),
            }
        }
    }

    /// Disarms a pending deadline. Called for the `CancelGeneration` effect
    /// and on shell teardown.
    pub fn cancel(&mut self) {
        if self.generation_deadline.take().is_some() {
            app_info!("Pending generation timer cancelled");
        }
    }

    /// Returns the completion message exactly once when the armed deadline
    /// has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<Msg> {
        match self.generation_deadline {
            Some(deadline) if deadline <= now => {
                app_debug!("Generation timer fired");
                self.generation_deadline = None;
                Some(Msg::GenerationFinished)
            }
            _ => None,
        }
    }

    /// The next instant the event loop must wake up for, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.generation_deadline
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn armed_deadline_fires_exactly_once() {
        let mut runner = EffectRunner::new();
        runner.apply(vec![Effect::ScheduleGeneration {
            delay: Duration::ZERO,
        }]);

        let now = Instant::now();
        assert_eq!(runner.take_due(now), Some(Msg::GenerationFinished));
        assert_eq!(runner.take_due(now), None);
        assert!(runner.next_deadline().is_none());
    }

    #[test]
    fn future_deadline_does_not_fire_early() {
        let mut runner = EffectRunner::new();
        runner.apply(vec![Effect::ScheduleGeneration {
            delay: Duration::from_secs(60),
        }]);

        assert_eq!(runner.take_due(Instant::now()), None);
        assert!(runner.next_deadline().is_some());
    }

    #[test]
    fn cancel_drops_the_deadline() {
        let mut runner = EffectRunner::new();
        runner.apply(vec![Effect::ScheduleGeneration {
            delay: Duration::ZERO,
        }]);
        runner.apply(vec![Effect::CancelGeneration]);

        assert_eq!(runner.take_due(Instant::now()), None);
    }

    #[test]
    fn cancel_without_deadline_is_harmless() {
        let mut runner = EffectRunner::new();
        runner.cancel();
        assert_eq!(runner.take_due(Instant::now()), None);
    }
}
