//! Tests for rendering the stored poem history

mod common;

use common::{narrator, poem_page_html, RecordingSpeech};
use poem_narrator_lib::page::{HistoryContainer, HistoryView, PoemPage};
use poem_narrator_lib::storage::{MemoryStorage, StorageAdapter};

#[test]
fn test_render_lists_title_value_pairs() {
    let mut storage = MemoryStorage::new();
    storage.put("Ocean", "Waves crashGulls cry").unwrap();
    storage.put("Desert", "Dunes").unwrap();

    let mut container = HistoryContainer::new();
    HistoryView::render(&storage, &mut container);

    assert_eq!(container.lists().len(), 1);
    let items: Vec<&str> = container.items().collect();
    assert_eq!(items, vec!["Ocean: Waves crashGulls cry", "Desert: Dunes"]);
}

#[test]
fn test_render_empty_storage_appends_empty_list() {
    let storage = MemoryStorage::new();
    let mut container = HistoryContainer::new();

    HistoryView::render(&storage, &mut container);

    assert_eq!(container.lists().len(), 1);
    assert_eq!(container.items().count(), 0);
    assert_eq!(container.to_html(), "<div id=\"localStorageData\"><ul></ul></div>");
}

#[test]
fn test_render_twice_appends_duplicates_unless_cleared() {
    let mut storage = MemoryStorage::new();
    storage.put("Ocean", "Waves").unwrap();
    let mut container = HistoryContainer::new();

    HistoryView::render(&storage, &mut container);
    HistoryView::render(&storage, &mut container);
    assert_eq!(container.items().count(), 2);

    container.clear();
    HistoryView::render(&storage, &mut container);
    assert_eq!(container.items().collect::<Vec<_>>(), vec!["Ocean: Waves"]);
}

#[test]
fn test_render_after_narration() {
    let (speech, _spoken) = RecordingSpeech::new(Vec::new());
    let mut narrator = narrator(speech, MemoryStorage::new());
    narrator.narrate_poem(&PoemPage::parse(&poem_page_html(Some("Ocean"), &["Waves crash", "Gulls cry"])));

    let mut container = HistoryContainer::new();
    HistoryView::render(narrator.storage(), &mut container);

    assert_eq!(
        container.to_html(),
        "<div id=\"localStorageData\"><ul><li>Ocean: Waves crashGulls cry</li></ul></div>"
    );
}
