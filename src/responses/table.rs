//! Message tables and the line-oriented format they are loaded from.
//!
//! A lines file is a sequence of sections. A line starting with
//! `Answers` names a section; the non-empty lines that follow are its
//! messages. Lines starting with `//`, `-` or `(` are skipped, except for
//! number tags of the form `(7): "..."`, which attach a message to a number.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use super::category::Category;
use crate::assets;
use crate::error::TableError;

/// Prefix of a section header line.
const SECTION_MARKER: &str = "Answers";

/// Line prefixes that never carry a message.
const RESERVED_PREFIXES: &[&str] = &["//", "-", "("];

lazy_static! {
    /// `(7): "You're my lucky 7."` with optional quotes around the message.
    static ref NUMBER_TAG: Regex = Regex::new(r#"^\((\d+)\):\s*"?(.*?)"?\s*$"#).unwrap();
}

/// A single message template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The number this message is about, for tagged lines.
    pub tag: Option<u32>,
    /// Template text; `{answer}` marks where the result goes.
    pub text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            tag: None,
            text: text.into(),
        }
    }

    pub fn tagged(tag: u32, text: impl Into<String>) -> Self {
        Self {
            tag: Some(tag),
            text: text.into(),
        }
    }

    /// Parse one message line, or `None` for reserved lines.
    fn parse(line: &str) -> Option<Self> {
        if let Some(caps) = NUMBER_TAG.captures(line) {
            let tag = caps[1].parse().ok()?;
            let text = caps[2].trim();
            return (!text.is_empty()).then(|| Self::tagged(tag, text));
        }

        if RESERVED_PREFIXES.iter().any(|p| line.starts_with(p)) {
            return None;
        }

        Some(Self::new(line))
    }
}

/// Where a table's contents came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableOrigin {
    /// Loaded from an external resource.
    Resource(String),
    /// The copy compiled into the binary.
    Embedded,
    /// Built directly in code (tests, custom front ends).
    Inline,
}

/// Messages grouped by category. An empty category counts as absent.
#[derive(Clone, Debug)]
pub struct MessageTable {
    sections: BTreeMap<Category, Vec<Message>>,
    origin: TableOrigin,
}

impl MessageTable {
    /// A table with no messages at all.
    pub fn empty() -> Self {
        Self {
            sections: BTreeMap::new(),
            origin: TableOrigin::Inline,
        }
    }

    /// Parse a lines file.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::empty();
        // Messages under an unknown header are dropped.
        let mut current: Option<Option<Category>> = None;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with(SECTION_MARKER) {
                let category = Category::from_header(line);
                if category.is_none() {
                    debug!(header = line, "Skipping unknown message section");
                }
                current = Some(category);
                continue;
            }

            let Some(Some(category)) = current else {
                continue;
            };

            if let Some(message) = Message::parse(line) {
                table.push(category, message);
            }
        }

        table
    }

    /// The table compiled into the binary.
    ///
    /// Empty (so every lookup falls through) if the asset is somehow missing.
    pub fn embedded() -> Self {
        match assets::text(assets::POOKIE_LINES) {
            Ok(text) => Self::parse(&text).with_origin(TableOrigin::Embedded),
            Err(e) => {
                warn!("{e}");
                Self::empty().with_origin(TableOrigin::Embedded)
            }
        }
    }

    pub fn with_origin(mut self, origin: TableOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Add a message to a category.
    pub fn push(&mut self, category: Category, message: Message) {
        self.sections.entry(category).or_default().push(message);
    }

    /// Builder form of [`Self::push`] for untagged messages.
    pub fn with(mut self, category: Category, text: &str) -> Self {
        self.push(category, Message::new(text));
        self
    }

    pub fn messages(&self, category: Category) -> &[Message] {
        self.sections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the category has at least one message.
    pub fn has(&self, category: Category) -> bool {
        !self.messages(category).is_empty()
    }

    pub fn origin(&self) -> &TableOrigin {
        &self.origin
    }

    /// Number of messages across all categories.
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Supplies the raw text of a lines file.
pub trait TableResource {
    /// Fetch the file contents, or report that it is unavailable.
    fn fetch(&self) -> Result<String, TableError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// A lines file on disk. `None` means nothing was configured.
#[derive(Clone, Debug, Default)]
pub struct FileResource {
    path: Option<PathBuf>,
}

impl FileResource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl TableResource for FileResource {
    fn fetch(&self) -> Result<String, TableError> {
        let path = self.path.as_ref().ok_or(TableError::NotConfigured)?;
        fs::read_to_string(path).map_err(|source| TableError::Unreadable {
            path: path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "<none>".to_string(),
        }
    }
}

/// In-memory text, for tests and front ends that already hold the file.
impl TableResource for &str {
    fn fetch(&self) -> Result<String, TableError> {
        Ok((*self).to_string())
    }

    fn describe(&self) -> String {
        "<inline>".to_string()
    }
}
