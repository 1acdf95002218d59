use scraper::Selector;

use super::{parse_selector, PoemPage, POEM_LINE_SELECTOR, POEM_TITLE_SELECTOR};
use crate::error::PageError;

/// Text content of one poem line element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemLine(String);

impl PoemLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

/// Poem lines in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Poem {
    lines: Vec<PoemLine>,
}

impl Poem {
    pub fn new(lines: Vec<PoemLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[PoemLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with no separator, exactly as stored
    pub fn text(&self) -> String {
        self.lines.iter().map(PoemLine::text).collect()
    }
}

/// Reads poem lines and the title out of a generated poem page
pub struct PoemCollector {
    line_selector: Selector,
    title_selector: Selector,
}

impl PoemCollector {
    pub fn new() -> Result<Self, PageError> {
        Self::with_selectors(POEM_LINE_SELECTOR, POEM_TITLE_SELECTOR)
    }

    pub fn with_selectors(line: &str, title: &str) -> Result<Self, PageError> {
        Ok(Self {
            line_selector: parse_selector(line)?,
            title_selector: parse_selector(title)?,
        })
    }

    /// Every poem line in document order, untrimmed. Empty when the page has none.
    pub fn collect(&self, page: &PoemPage) -> Vec<PoemLine> {
        page.texts(&self.line_selector)
            .into_iter()
            .map(PoemLine::new)
            .collect()
    }

    pub fn collect_poem(&self, page: &PoemPage) -> Poem {
        Poem::new(self.collect(page))
    }

    pub fn title(&self, page: &PoemPage) -> Option<String> {
        page.first_text(&self.title_selector)
    }
}
