//! Voice capture lifecycle.
//!
//! DESIGN
//! ======
//! `Idle` and `Recording` are the user-visible states. `Starting` covers the
//! wait for the microphone permission prompt; it looks like `Idle` on screen
//! but refuses a second start, so only one capture session can exist.

#[cfg(test)]
#[path = "recorder_test.rs"]
mod recorder_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecorderPhase {
    #[default]
    Idle,
    Starting,
    Recording,
}

impl RecorderPhase {
    /// Idle → Starting. Returns false (and stays put) from any other phase.
    pub fn request(&mut self) -> bool {
        if *self != Self::Idle {
            return false;
        }
        *self = Self::Starting;
        true
    }

    /// Starting → Recording once the microphone is granted.
    pub fn started(&mut self) -> bool {
        if *self != Self::Starting {
            return false;
        }
        *self = Self::Recording;
        true
    }

    /// Starting → Idle after a denied or failed start.
    pub fn failed(&mut self) {
        if *self == Self::Starting {
            *self = Self::Idle;
        }
    }

    /// Recording → Idle. Returns false when nothing was recording.
    pub fn stop(&mut self) -> bool {
        if *self != Self::Recording {
            return false;
        }
        *self = Self::Idle;
        true
    }

    #[must_use]
    pub fn is_recording(self) -> bool {
        self == Self::Recording
    }

    /// Icon classes for the record button.
    #[must_use]
    pub fn button_icon(self) -> &'static str {
        if self.is_recording() { "fas fa-stop" } else { "fas fa-microphone" }
    }
}
