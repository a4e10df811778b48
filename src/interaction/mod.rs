use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::spells::{BookIndex, SortMode};

/// Scroll direction reported with a narrative step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Inbound events from the host's scroll controller and list controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleEvent {
    /// A narrative step for `book` scrolled into view.
    BookStep {
        book: BookIndex,
        direction: ScrollDirection,
    },
    SpellSelected(Option<String>),
    SortModeChanged(SortMode),
}

/// Selection and narrative state shared by the article's charts.
///
/// Only [`ArticleState::apply`] mutates it; charts read it through the
/// accessors and pass it into their pure query functions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleState {
    current_book: Option<BookIndex>,
    previous_book: Option<BookIndex>,
    selected_spell: Option<String>,
    sort_mode: SortMode,
}

impl ArticleState {
    #[must_use]
    pub fn current_book(&self) -> Option<BookIndex> {
        self.current_book
    }

    /// Book shown before the latest step: the one after it when scrolling
    /// up, the one before it when scrolling down.
    #[must_use]
    pub fn previous_book(&self) -> Option<BookIndex> {
        self.previous_book
    }

    #[must_use]
    pub fn selected_spell(&self) -> Option<&str> {
        self.selected_spell.as_deref()
    }

    #[must_use]
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    #[must_use]
    pub fn with_sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    /// Applies one event. Returns `true` when any state changed.
    pub fn apply(&mut self, event: ArticleEvent) -> bool {
        let before = self.clone();
        match event {
            ArticleEvent::BookStep { book, direction } => {
                self.previous_book = match direction {
                    ScrollDirection::Up => book.next(),
                    ScrollDirection::Down => book.previous(),
                };
                self.current_book = Some(book);
            }
            ArticleEvent::SpellSelected(spell) => self.selected_spell = spell,
            ArticleEvent::SortModeChanged(mode) => self.sort_mode = mode,
        }

        let changed = *self != before;
        debug!(
            changed,
            current_book = ?self.current_book,
            previous_book = ?self.previous_book,
            selected_spell = ?self.selected_spell,
            sort_mode = ?self.sort_mode,
            "article event applied"
        );
        changed
    }
}
