use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::spells::{BookIndex, SpellCatalog, UniqueSpellRecord};

/// Ordering of the unique spell list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    Alphabetical,
    #[default]
    Popularity,
}

/// Merges every book's records into one record per spell name.
///
/// Mentions are summed; type and effect come from the first book that
/// lists the spell. The result keeps first-seen order, walking books in
/// ascending order.
#[must_use]
pub fn aggregate(catalog: &SpellCatalog) -> Vec<UniqueSpellRecord> {
    let mut merged: IndexMap<&str, UniqueSpellRecord> = IndexMap::new();
    let mut books = 0usize;
    for (_, records) in catalog.books() {
        books += 1;
        for record in records {
            merged
                .entry(record.spell.as_str())
                .and_modify(|unique| unique.mentions += u64::from(record.mentions))
                .or_insert_with(|| UniqueSpellRecord::from(record));
        }
    }

    debug!(books, unique = merged.len(), "aggregated spell mentions");
    merged.into_values().collect()
}

/// Sort key for the alphabetical listing.
///
/// A parenthesized variant such as `(Obliviate)` sorts under its inner name.
#[must_use]
pub fn alphabetical_key(spell: &str) -> &str {
    match spell.strip_prefix('(') {
        Some(inner) => inner.strip_suffix(')').unwrap_or(inner),
        None => spell,
    }
}

/// Stable in-place sort; ties keep their incoming order.
pub fn sort_unique_spells(records: &mut [UniqueSpellRecord], mode: SortMode) {
    match mode {
        SortMode::Alphabetical => records
            .sort_by(|a, b| alphabetical_key(&a.spell).cmp(alphabetical_key(&b.spell))),
        SortMode::Popularity => records.sort_by(|a, b| b.mentions.cmp(&a.mentions)),
    }
}

/// Aggregated, sorted spell list ready for display.
#[must_use]
pub fn list_unique_spells(catalog: &SpellCatalog, mode: SortMode) -> Vec<UniqueSpellRecord> {
    let mut records = aggregate(catalog);
    sort_unique_spells(&mut records, mode);
    records
}

/// Mentions of `spell` in one book, or 0 when that book does not list it.
#[must_use]
pub fn mentions_in_book(catalog: &SpellCatalog, spell: &str, book: BookIndex) -> u32 {
    catalog
        .book(book)
        .iter()
        .find(|record| record.spell == spell)
        .map_or(0, |record| record.mentions)
}

/// Like [`mentions_in_book`], with no selection resolving to 0.
#[must_use]
pub fn selected_mentions(catalog: &SpellCatalog, selected: Option<&str>, book: BookIndex) -> u32 {
    selected.map_or(0, |spell| mentions_in_book(catalog, spell, book))
}
