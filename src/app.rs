//! The calculator controller.
//!
//! [`Calculator`] ties the input state machine to its collaborators: the
//! response table for novelty mode, the persisted history and settings, and
//! the feedback sink. Front ends feed it [`Key`]s and render [`Calculator::display`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::calculator::{CalculatorState, Key, Memory, Operator};
use crate::feedback::{FeedbackCue, FeedbackEvent, FeedbackSink, Silent};
use crate::history::{History, HistoryItem, default_descriptions};
use crate::responses::Responder;
use crate::settings::{Settings, Theme};
use crate::store::KeyValueStore;

/// How results are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Results are shown as numbers and recorded in history.
    #[default]
    Normal,
    /// Results are replaced by a message from the response table.
    Novelty,
}

impl Mode {
    pub fn is_novelty(self) -> bool {
        self == Self::Novelty
    }
}

/// Label on the clear key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearLabel {
    /// Clears only the operand being typed.
    Entry,
    /// Clears everything.
    All,
}

impl ClearLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "C",
            Self::All => "AC",
        }
    }
}

/// A calculator instance with its collaborators.
pub struct Calculator {
    state: CalculatorState,
    memory: Memory,
    mode: Mode,
    settings: Settings,
    /// Theme to return to when novelty mode is switched off.
    plain_theme: Theme,
    history: History,
    history_descriptions: Vec<String>,
    responder: Responder,
    store: Box<dyn KeyValueStore>,
    feedback: Box<dyn FeedbackSink>,
    rng: StdRng,
}

impl Calculator {
    /// Create a calculator, restoring settings and history from `store`.
    ///
    /// The saved theme decides the starting mode.
    pub fn new(store: Box<dyn KeyValueStore>, responder: Responder) -> Self {
        let settings = Settings::load(store.as_ref());
        let history = History::load(store.as_ref());
        let mode = mode_for(settings.theme);

        debug!(theme = %settings.theme, entries = history.len(), "Calculator restored");

        Self {
            state: CalculatorState::new(),
            memory: Memory::default(),
            mode,
            plain_theme: if settings.theme.is_novelty() {
                Theme::Light
            } else {
                settings.theme
            },
            settings,
            history,
            history_descriptions: default_descriptions(),
            responder,
            store,
            feedback: Box::new(Silent),
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed seed for message selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_feedback(mut self, feedback: Box<dyn FeedbackSink>) -> Self {
        self.feedback = feedback;
        self
    }

    /// Replace the lines shown beside history entries.
    pub fn with_history_descriptions(mut self, descriptions: Vec<String>) -> Self {
        self.history_descriptions = descriptions;
        self
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn memory(&self) -> f64 {
        self.memory.value()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// History entries with their descriptions, newest first.
    pub fn history_items(&self) -> Vec<HistoryItem> {
        self.history.items(&self.history_descriptions)
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// The text to render: the operand, a result, or a response.
    pub fn display(&self) -> &str {
        &self.state.current_operand
    }

    pub fn clear_label(&self) -> ClearLabel {
        if self.state.has_input() {
            ClearLabel::Entry
        } else {
            ClearLabel::All
        }
    }

    /// Apply a key press and notify the feedback sink.
    pub fn press(&mut self, key: Key) {
        self.emit(FeedbackCue::from(key));

        match key {
            Key::Digit(_) | Key::DecimalPoint => {
                if let Some(c) = key.digit_char() {
                    self.append_digit(c);
                }
            }
            Key::Operator(op) => self.choose_operator(op),
            Key::Equals => self.evaluate(),
            Key::Clear => match self.clear_label() {
                ClearLabel::Entry => self.state.clear_entry(),
                ClearLabel::All => self.clear(),
            },
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
            Key::MemoryAdd => self.memory.add(&self.state.current_operand),
            Key::MemorySubtract => self.memory.subtract(&self.state.current_operand),
            Key::MemoryRecall => self.state.recall(self.memory.value()),
            Key::MemoryClear => self.memory.clear(),
        }
    }

    pub fn append_digit(&mut self, digit: char) {
        self.state.append_digit(digit);
    }

    /// Set the pending operator, finishing a chained operation first.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.state.current_operand.is_empty() {
            return;
        }

        if self.state.should_chain() {
            self.evaluate();
        }

        self.state.set_operator(op);
    }

    /// Finish the pending operation (the `=` key).
    pub fn evaluate(&mut self) {
        let Some(computation) = self.state.compute() else {
            if self.mode.is_novelty() {
                let response = self
                    .responder
                    .respond(&self.state.current_operand, &mut self.rng);
                self.state.settle(response.text);
            }
            return;
        };

        debug!(calculation = %computation.expression(), mode = ?self.mode, "Evaluated");

        match self.mode {
            Mode::Normal => {
                if let Err(e) = self.history.record(&computation, self.store.as_mut()) {
                    warn!("Failed to save history: {e}");
                }
                self.state.settle(computation.result);
            }
            Mode::Novelty => {
                let response = self.responder.respond(&computation.result, &mut self.rng);
                self.state.settle(response.text);
            }
        }
    }

    pub fn toggle_sign(&mut self) {
        self.state.toggle_sign();
    }

    pub fn percent(&mut self) {
        self.state.percent();
    }

    /// Reset the operands and pending operator (AC).
    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Switch novelty mode on or off, starting from a clean slate.
    ///
    /// History and memory are kept.
    pub fn toggle_novelty(&mut self) {
        self.state.clear();

        let theme = if self.mode.is_novelty() {
            self.plain_theme
        } else {
            Theme::Pookie
        };
        self.apply_theme(theme);

        if self.mode.is_novelty() {
            self.emit(FeedbackCue::Activation);
        }
        info!(mode = ?self.mode, "Display mode toggled");
    }

    /// Switch theme, which also sets the mode, and persist it.
    pub fn apply_theme(&mut self, theme: Theme) {
        if !theme.is_novelty() {
            self.plain_theme = theme;
        }

        self.settings.theme = theme;
        self.mode = mode_for(theme);

        if let Err(e) = self.settings.save_theme(self.store.as_mut()) {
            warn!("Failed to save theme: {e}");
        }
    }

    /// Persist the full settings record after outside changes.
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.apply_theme(settings.theme);

        if let Err(e) = self.settings.save(self.store.as_mut()) {
            warn!("Failed to save settings: {e}");
        }
    }

    pub fn clear_history(&mut self) {
        if let Err(e) = self.history.clear(self.store.as_mut()) {
            warn!("Failed to clear history: {e}");
        }
    }

    fn emit(&mut self, cue: FeedbackCue) {
        self.feedback.notify(FeedbackEvent {
            cue,
            mode: self.mode,
            sound: self.settings.sounds_audible(),
            vibrate: self.settings.vibration,
        });
    }
}

fn mode_for(theme: Theme) -> Mode {
    if theme.is_novelty() {
        Mode::Novelty
    } else {
        Mode::Normal
    }
}
