use crate::ElapsedTimer;

/// Logs how long a scope took.
///
/// Starts timing on construction and emits a debug event with the label
/// and the elapsed milliseconds when dropped. With no subscriber installed
/// the drop is silent.
pub struct ScopedTimer {
    label: String,
    timer: ElapsedTimer<u64>,
}

impl ScopedTimer {
    /// Start timing the current scope under `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            timer: ElapsedTimer::new(),
        }
    }

    /// Current reading in milliseconds.
    pub fn elapsed_milliseconds(&self) -> u64 {
        self.timer.elapsed_milliseconds()
    }

    /// Emit the timing event without consuming the timer.
    pub fn log_elapsed(&self) {
        tracing::debug!("{}: {} ms", self.label, self.elapsed_milliseconds());
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.log_elapsed();
    }
}
