use std::time::Duration;

/// Delay between entering `Generating` and the completion message.
pub const GENERATION_DELAY: Duration = Duration::from_millis(3000);

/// Side effects requested by the update function. The shell owns the timer;
/// the core only asks for it to be armed or disarmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Arm the generation timer; `GenerationFinished` is delivered after
    /// `delay` unless cancelled first.
    ScheduleGeneration { delay: Duration },
    /// Disarm a pending generation timer, if any.
    CancelGeneration,
}
