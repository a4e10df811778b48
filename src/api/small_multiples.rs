use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::interaction::ArticleState;
use crate::spells::{
    BookIndex, BookTitles, SortMode, SpellCatalog, StyleAttributes, UniqueSpellRecord,
    book_title_opacity, list_unique_spells, resolve_spell_style, selected_mentions,
};

/// One per-book cell of the small-multiples grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPanel {
    pub book: BookIndex,
    pub title: String,
    /// Mentions of the selected spell in this book; 0 without a selection.
    pub mentions: u32,
    pub title_opacity: f64,
    pub has_content: bool,
    pub is_current: bool,
}

impl BookPanel {
    /// Counter text, hidden when the selected spell is absent.
    #[must_use]
    pub fn mentions_label(&self) -> Option<String> {
        (self.mentions != 0).then(|| self.mentions.to_string())
    }
}

/// One clickable entry of the spell list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellListEntry {
    pub record: UniqueSpellRecord,
    pub selected: bool,
    pub style: StyleAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmallMultiplesFrame {
    pub panels: Vec<BookPanel>,
    pub spells: Vec<SpellListEntry>,
    pub sort_mode: SortMode,
}

impl SmallMultiplesFrame {
    #[must_use]
    pub fn panel(&self, book: BookIndex) -> Option<&BookPanel> {
        self.panels.iter().find(|panel| panel.book == book)
    }
}

/// Builds the small-multiples section from static data and article state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallMultiplesView;

impl SmallMultiplesView {
    #[must_use]
    pub fn build(
        catalog: &SpellCatalog,
        titles: &BookTitles,
        state: &ArticleState,
    ) -> SmallMultiplesFrame {
        let selected = state.selected_spell();

        let panels: Vec<BookPanel> = BookIndex::all()
            .map(|book| {
                let mentions = selected_mentions(catalog, selected, book);
                BookPanel {
                    book,
                    title: titles
                        .title(book)
                        .map_or_else(|| format!("Book {book}"), str::to_owned),
                    mentions,
                    title_opacity: book_title_opacity(mentions),
                    has_content: catalog.has_content(book),
                    is_current: state.current_book() == Some(book),
                }
            })
            .collect();

        let spells: Vec<SpellListEntry> = list_unique_spells(catalog, state.sort_mode())
            .into_iter()
            .map(|record| SpellListEntry {
                selected: selected == Some(record.spell.as_str()),
                style: resolve_spell_style(&record, selected),
                record,
            })
            .collect();

        debug!(
            panels = panels.len(),
            spells = spells.len(),
            sort_mode = ?state.sort_mode(),
            selected = ?selected,
            "small multiples frame built"
        );
        SmallMultiplesFrame {
            panels,
            spells,
            sort_mode: state.sort_mode(),
        }
    }

    /// Book the progression chart should show: the current book, when it
    /// has any spell data.
    #[must_use]
    pub fn focused_book(catalog: &SpellCatalog, state: &ArticleState) -> Option<BookIndex> {
        state
            .current_book()
            .filter(|&book| catalog.has_content(book))
    }
}
