//! Novelty-mode responses: turning a result into a message.
//!
//! This module provides functionality to:
//! - Load message tables from a lines file, or fall back to the embedded one
//! - Classify a numeric result into a message category
//! - Pick and render a message for that category

mod category;
mod classify;
mod table;

pub use category::Category;
pub use classify::{candidates, classify, is_double_number, is_perfect_square, is_prime};
pub use table::{FileResource, Message, MessageTable, TableOrigin, TableResource};

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::calculator::parse_operand;

/// Placeholder replaced with the result text.
pub const ANSWER_PLACEHOLDER: &str = "{answer}";

/// Used when no table has anything to say.
const LAST_RESORT: &str = "You're my favorite calculation: {answer}! 💕";

/// A rendered response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// The category the message came from, `None` for the last-resort line.
    pub category: Option<Category>,
    pub text: String,
}

/// Picks messages for results, consulting the active table first and the
/// embedded table second.
#[derive(Clone, Debug)]
pub struct Responder {
    active: MessageTable,
    fallback: MessageTable,
}

impl Responder {
    /// Load the active table from `resource`, using the embedded table if it
    /// is unavailable.
    pub fn initialize(resource: &dyn TableResource) -> Self {
        let active = match resource.fetch() {
            Ok(text) => {
                let table = MessageTable::parse(&text)
                    .with_origin(TableOrigin::Resource(resource.describe()));
                info!(
                    source = %resource.describe(),
                    messages = table.len(),
                    "Loaded message table"
                );
                table
            }
            Err(e) => {
                warn!("{e}; using embedded message table");
                MessageTable::embedded()
            }
        };

        Self::new(active, MessageTable::embedded())
    }

    /// Build from explicit tables.
    pub fn new(active: MessageTable, fallback: MessageTable) -> Self {
        Self { active, fallback }
    }

    pub fn active(&self) -> &MessageTable {
        &self.active
    }

    /// Produce the message for `result`. Never empty.
    pub fn respond<R: Rng + ?Sized>(&self, result: &str, rng: &mut R) -> Response {
        let value = parse_operand(result).unwrap_or(f64::NAN);

        for table in [&self.active, &self.fallback] {
            if let Some(category) = classify(value, table) {
                let template = pick(table.messages(category), category, value, rng);
                debug!(%category, result, "Selected response");
                return Response {
                    category: Some(category),
                    text: render(template, result),
                };
            }
        }

        debug!(result, "No response table populated, using last resort");
        Response {
            category: None,
            text: render(LAST_RESORT, result),
        }
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(MessageTable::embedded(), MessageTable::embedded())
    }
}

/// Replace every placeholder with the result text.
pub fn render(template: &str, result: &str) -> String {
    template.replace(ANSWER_PLACEHOLDER, result)
}

/// Choose a template from a non-empty category.
///
/// Specific puns prefer the message tagged with the result's integer part.
fn pick<'a, R: Rng + ?Sized>(
    messages: &'a [Message],
    category: Category,
    value: f64,
    rng: &mut R,
) -> &'a str {
    if category == Category::SpecificPun {
        let number = value.floor();
        if let Some(message) = messages
            .iter()
            .find(|m| m.tag.is_some_and(|tag| f64::from(tag) == number))
        {
            return &message.text;
        }
    }

    messages
        .choose(rng)
        .map(|m| m.text.as_str())
        .unwrap_or(LAST_RESORT)
}
