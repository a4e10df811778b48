//! Per-book spell mention data, aggregation and list styling.

pub mod aggregate;
pub mod record;
pub mod style;

pub use aggregate::{
    SortMode, aggregate, alphabetical_key, list_unique_spells, mentions_in_book,
    selected_mentions, sort_unique_spells,
};
pub use record::{BookIndex, BookTitles, SpellCatalog, SpellRecord, SpellType, UniqueSpellRecord};
pub use style::{StyleAttributes, book_title_opacity, resolve_spell_style, spell_type_color};
