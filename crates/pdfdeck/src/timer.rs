use std::time::{Duration, Instant};

/// Elapsed-presentation-time counter. Starts on the first navigation and
/// never resets or pauses afterwards, including past the last slide.
#[derive(Debug, Default, Clone, Copy)]
pub struct PresentationTimer {
    started: Option<Instant>,
}

impl PresentationTimer {
    pub fn start_if_needed(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Zero until the timer has been started.
    pub fn elapsed(&self) -> Duration {
        self.started.map(|t| t.elapsed()).unwrap_or(Duration::ZERO)
    }
}

/// Formats a duration as MM:SS. Minutes are not capped at 60, so a talk
/// running past the hour reads "73:05" rather than wrapping.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
