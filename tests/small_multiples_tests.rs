use spell_charts::api::SmallMultiplesView;
use spell_charts::interaction::{ArticleEvent, ArticleState, ScrollDirection};
use spell_charts::spells::{
    BookIndex, BookTitles, SortMode, SpellCatalog, SpellRecord, SpellType, book_title_opacity,
    resolve_spell_style, spell_type_color,
};

fn book(n: u8) -> BookIndex {
    BookIndex::new(n).expect("valid book")
}

fn catalog() -> SpellCatalog {
    SpellCatalog::new()
        .with_book(
            book(1),
            vec![
                SpellRecord::new("Wingardium Leviosa", SpellType::Charm, "Levitates", 6),
                SpellRecord::new("Accio", SpellType::Charm, "Summons", 3),
            ],
        )
        .with_book(
            book(2),
            vec![
                SpellRecord::new("Accio", SpellType::Charm, "Summons", 5),
                SpellRecord::new("(Obliviate)", SpellType::Charm, "Erases memory", 1),
            ],
        )
        .with_book(
            book(4),
            vec![SpellRecord::new("Crucio", SpellType::Curse, "Torture", 7)],
        )
}

#[test]
fn panels_cover_every_book_without_selection() {
    let frame = SmallMultiplesView::build(&catalog(), &BookTitles::series(), &ArticleState::default());

    assert_eq!(frame.panels.len(), 7);
    for panel in &frame.panels {
        assert_eq!(panel.mentions, 0);
        assert_eq!(panel.mentions_label(), None);
        assert_eq!(panel.title_opacity, 0.1);
        assert!(!panel.is_current);
    }
    let first = frame.panel(book(1)).expect("book 1 panel");
    assert_eq!(first.title, "Philosopher's Stone");
    assert!(first.has_content);
    assert!(!frame.panel(book(3)).expect("book 3 panel").has_content);
}

#[test]
fn default_sort_is_popularity() {
    let frame = SmallMultiplesView::build(&catalog(), &BookTitles::series(), &ArticleState::default());

    assert_eq!(frame.sort_mode, SortMode::Popularity);
    let names: Vec<&str> = frame
        .spells
        .iter()
        .map(|entry| entry.record.spell.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Accio", "Crucio", "Wingardium Leviosa", "(Obliviate)"]
    );
    assert!(frame.spells.iter().all(|entry| !entry.selected));
}

#[test]
fn selection_drives_per_book_mentions_and_styles() {
    let mut state = ArticleState::default();
    state.apply(ArticleEvent::SpellSelected(Some("Accio".to_owned())));
    let frame = SmallMultiplesView::build(&catalog(), &BookTitles::series(), &state);

    let first = frame.panel(book(1)).expect("book 1");
    assert_eq!(first.mentions, 3);
    assert_eq!(first.mentions_label().as_deref(), Some("3"));
    assert_eq!(first.title_opacity, 1.0);
    assert_eq!(frame.panel(book(2)).expect("book 2").mentions, 5);
    let third = frame.panel(book(3)).expect("book 3");
    assert_eq!(third.mentions, 0);
    assert_eq!(third.title_opacity, 0.1);

    let accio = frame
        .spells
        .iter()
        .find(|entry| entry.record.spell == "Accio")
        .expect("accio listed");
    assert!(accio.selected);
    assert_eq!(accio.record.mentions, 8);
    assert_eq!(accio.style.opacity, 1.0);
    assert_eq!(accio.style.background, Some(spell_type_color(&SpellType::Charm)));
}

#[test]
fn alphabetical_mode_and_current_book_flow_through() {
    let mut state = ArticleState::default();
    state.apply(ArticleEvent::SortModeChanged(SortMode::Alphabetical));
    state.apply(ArticleEvent::BookStep {
        book: book(2),
        direction: ScrollDirection::Down,
    });
    let frame = SmallMultiplesView::build(&catalog(), &BookTitles::series(), &state);

    let names: Vec<&str> = frame
        .spells
        .iter()
        .map(|entry| entry.record.spell.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Accio", "Crucio", "(Obliviate)", "Wingardium Leviosa"]
    );
    assert!(frame.panel(book(2)).expect("book 2").is_current);
}

#[test]
fn focused_book_requires_content() {
    let catalog = catalog();
    let mut state = ArticleState::default();
    assert_eq!(SmallMultiplesView::focused_book(&catalog, &state), None);

    state.apply(ArticleEvent::BookStep {
        book: book(3),
        direction: ScrollDirection::Down,
    });
    assert_eq!(SmallMultiplesView::focused_book(&catalog, &state), None);

    state.apply(ArticleEvent::BookStep {
        book: book(4),
        direction: ScrollDirection::Down,
    });
    assert_eq!(SmallMultiplesView::focused_book(&catalog, &state), Some(book(4)));
}

#[test]
fn missing_titles_fall_back_to_book_number() {
    let frame = SmallMultiplesView::build(&catalog(), &BookTitles::default(), &ArticleState::default());
    assert_eq!(frame.panel(book(5)).expect("book 5").title, "Book 5");
}

#[test]
fn style_resolution_depends_only_on_record_and_selection() {
    let frame = SmallMultiplesView::build(&catalog(), &BookTitles::series(), &ArticleState::default());
    let crucio = &frame
        .spells
        .iter()
        .find(|entry| entry.record.spell == "Crucio")
        .expect("crucio listed")
        .record;
    let leviosa = &frame
        .spells
        .iter()
        .find(|entry| entry.record.spell == "Wingardium Leviosa")
        .expect("leviosa listed")
        .record;

    let unselected = resolve_spell_style(crucio, None);
    assert_eq!(unselected.opacity, 0.4);
    assert_eq!(unselected.background, None);

    let selected_curse = resolve_spell_style(crucio, Some("Crucio"));
    assert_eq!(selected_curse.opacity, 1.0);
    assert_eq!(selected_curse.text_color.red, 1.0);

    let selected_charm = resolve_spell_style(leviosa, Some("Wingardium Leviosa"));
    assert_eq!(selected_charm.text_color.red, 0.0);
    assert_eq!(resolve_spell_style(leviosa, Some("Crucio")).opacity, 0.4);

    assert_eq!(book_title_opacity(12), 1.0);
    assert_eq!(book_title_opacity(0), 0.1);
}
