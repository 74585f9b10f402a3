//! A keypad calculator with a novelty display mode.
//!
//! In normal mode results are shown as numbers and kept in a short
//! history. In novelty mode each result is classified by a fixed set of
//! numeric rules and replaced with a message from a response table.

pub mod app;
pub mod assets;
pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod feedback;
pub mod history;
pub mod responses;
pub mod settings;
pub mod store;

pub use app::{Calculator, ClearLabel, Mode};
pub use calculator::{CalculatorState, Key, Operator};
pub use responses::{Responder, Response};
