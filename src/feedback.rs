//! Notifications for sound and haptic collaborators.
//!
//! The calculator never plays anything itself; it reports what happened and
//! lets a [`FeedbackSink`] decide.

use crate::app::Mode;
use crate::calculator::Key;

/// The kind of sound a key press maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackCue {
    Numbers,
    Operators,
    Equals,
    Memory,
    Clear,
    Functions,
    /// Novelty mode was just switched on.
    Activation,
}

impl FeedbackCue {
    /// Sound file stem for the cue, e.g. `sounds/<mode>/<stem>.mp3`.
    pub fn sound_name(self) -> &'static str {
        match self {
            Self::Numbers => "numbers",
            Self::Operators => "operators",
            Self::Equals => "equals",
            Self::Memory => "memory",
            Self::Clear => "clear",
            Self::Functions => "functions",
            Self::Activation => "pookie-activation",
        }
    }
}

impl From<Key> for FeedbackCue {
    fn from(key: Key) -> Self {
        match key {
            Key::Digit(_) | Key::DecimalPoint => Self::Numbers,
            Key::Operator(_) => Self::Operators,
            Key::Equals => Self::Equals,
            Key::Clear => Self::Clear,
            k if k.is_memory() => Self::Memory,
            _ => Self::Functions,
        }
    }
}

/// One notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackEvent {
    pub cue: FeedbackCue,
    pub mode: Mode,
    /// Whether the user wants this cue to be audible.
    pub sound: bool,
    /// Whether the user wants a vibration pulse.
    pub vibrate: bool,
}

/// Receives feedback notifications.
pub trait FeedbackSink {
    fn notify(&mut self, event: FeedbackEvent);
}

/// Ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl FeedbackSink for Silent {
    fn notify(&mut self, _event: FeedbackEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;

    #[test]
    fn test_key_cues() {
        assert_eq!(FeedbackCue::from(Key::Digit('4')), FeedbackCue::Numbers);
        assert_eq!(FeedbackCue::from(Key::DecimalPoint), FeedbackCue::Numbers);
        assert_eq!(
            FeedbackCue::from(Key::Operator(Operator::Divide)),
            FeedbackCue::Operators
        );
        assert_eq!(FeedbackCue::from(Key::Equals), FeedbackCue::Equals);
        assert_eq!(FeedbackCue::from(Key::MemoryRecall), FeedbackCue::Memory);
        assert_eq!(FeedbackCue::from(Key::Clear), FeedbackCue::Clear);
        assert_eq!(FeedbackCue::from(Key::Percent), FeedbackCue::Functions);
        assert_eq!(FeedbackCue::from(Key::ToggleSign), FeedbackCue::Functions);
    }
}
