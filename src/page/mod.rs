pub mod collector;
pub mod history;

use std::path::Path;
use scraper::{Html, Selector};

use crate::error::PageError;

pub use collector::{Poem, PoemCollector, PoemLine};
pub use history::{HistoryContainer, HistoryView};

/// Class carried by every generated poem line element
pub const POEM_LINE_SELECTOR: &str = ".generated-poem";
/// Element holding the poem title
pub const POEM_TITLE_SELECTOR: &str = "#poem-title";
/// Id of the container the history list renders into
pub const HISTORY_CONTAINER_ID: &str = "localStorageData";

/// A generated poem page, parsed read-only
pub struct PoemPage {
    document: Html,
}

impl PoemPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub fn load(path: &Path) -> Result<Self, PageError> {
        let html = std::fs::read_to_string(path)?;
        Ok(Self::parse(&html))
    }

    /// Text content of every match, in document order
    pub fn texts(&self, selector: &Selector) -> Vec<String> {
        self.document
            .select(selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    /// Text content of the first match
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.document
            .select(selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector, PageError> {
    Selector::parse(selector).map_err(|e| PageError::Selector {
        selector: selector.to_string(),
        reason: format!("{:?}", e),
    })
}
