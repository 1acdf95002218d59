use super::HISTORY_CONTAINER_ID;
use crate::storage::StorageAdapter;

/// Display container the history list renders into.
/// Each render appends one list; nothing is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryContainer {
    lists: Vec<Vec<String>>,
}

impl HistoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_list(&mut self, items: Vec<String>) {
        self.lists.push(items);
    }

    pub fn clear(&mut self) {
        self.lists.clear();
    }

    pub fn lists(&self) -> &[Vec<String>] {
        &self.lists
    }

    /// All items across every appended list
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.lists.iter().flatten().map(String::as_str)
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<div id=\"{}\">", HISTORY_CONTAINER_ID);
        for list in &self.lists {
            html.push_str("<ul>");
            for item in list {
                html.push_str("<li>");
                html.push_str(&escape_html(item));
                html.push_str("</li>");
            }
            html.push_str("</ul>");
        }
        html.push_str("</div>");
        html
    }
}

pub struct HistoryView;

impl HistoryView {
    /// Append one `title: poem` item per stored entry to `container`.
    /// Callers clear the container first to avoid duplicate lists.
    pub fn render(storage: &dyn StorageAdapter, container: &mut HistoryContainer) {
        let items: Vec<String> = storage
            .list_keys()
            .into_iter()
            .map(|title| {
                let poem = storage.get(&title).unwrap_or_default();
                format!("{}: {}", title, poem)
            })
            .collect();
        tracing::debug!("Rendering {} stored poems", items.len());
        container.append_list(items);
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
