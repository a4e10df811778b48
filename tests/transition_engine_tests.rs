use approx::assert_relative_eq;
use spell_charts::ChartError;
use spell_charts::animation::{
    AnimatedStyle, Ease, StylePatch, TransitionConfig, TransitionEngine, TransitionPhase,
};
use spell_charts::core::Coordinate;

const DURATION_MS: f64 = 100.0;

fn config() -> TransitionConfig {
    TransitionConfig {
        from: AnimatedStyle::new(10.0, 0.8),
        enter: StylePatch::new(Some(0.0), Some(1.0)),
        update: None,
        leave: StylePatch::opacity(0.0),
        duration_ms: DURATION_MS,
        ease: Ease::Linear,
    }
}

fn engine() -> TransitionEngine<Coordinate> {
    TransitionEngine::new(config()).expect("engine init")
}

fn points(keys: &[usize]) -> Vec<Coordinate> {
    keys.iter()
        .map(|&key| Coordinate::new(key, key as f64, key as f64 * 10.0))
        .collect()
}

fn rendered_keys(engine: &TransitionEngine<Coordinate>) -> Vec<usize> {
    engine.rendered().map(|(&key, _)| key).collect()
}

#[test]
fn diff_assigns_enter_update_and_leave_phases() {
    let mut engine = engine();
    engine.sync(points(&[0, 1, 2])).expect("initial sync");
    engine.tick(DURATION_MS).expect("settle");

    let diff = engine.sync(points(&[1, 2, 3])).expect("diff");
    assert_eq!(diff.entering, vec![3]);
    assert_eq!(diff.updating, vec![1, 2]);
    assert_eq!(diff.leaving, vec![0]);

    assert_eq!(engine.phase(&0), Some(TransitionPhase::Leave));
    assert_eq!(engine.phase(&1), Some(TransitionPhase::Update));
    assert_eq!(engine.phase(&2), Some(TransitionPhase::Update));
    assert_eq!(engine.phase(&3), Some(TransitionPhase::Enter));
    assert_eq!(rendered_keys(&engine), vec![0, 1, 2, 3]);
    assert_eq!(engine.interactive_keys(), vec![1, 2, 3]);
}

#[test]
fn leaving_key_is_removed_only_after_its_animation_completes() {
    let mut engine = engine();
    engine.sync(points(&[0, 1, 2])).expect("initial sync");
    engine.tick(DURATION_MS).expect("settle");
    engine.sync(points(&[1, 2, 3])).expect("diff");

    engine.tick(DURATION_MS / 2.0).expect("half way");
    assert!(engine.contains(&0));
    let style = engine.style(&0).expect("still rendered");
    assert_relative_eq!(style.opacity, 0.5, epsilon = 1e-12);

    engine.tick(DURATION_MS / 2.0).expect("complete");
    assert!(!engine.contains(&0));
    assert_eq!(engine.len(), 3);
    assert!(!engine.is_animating());
}

#[test]
fn re_adding_a_removed_key_starts_a_fresh_enter() {
    let mut engine = engine();
    engine.sync(points(&[0, 1, 2])).expect("initial sync");
    engine.tick(DURATION_MS).expect("settle");
    engine.sync(points(&[1, 2, 3])).expect("diff");
    engine.tick(DURATION_MS).expect("leave completes");
    assert!(!engine.contains(&0));

    let diff = engine.sync(points(&[0, 1, 2, 3])).expect("re-add");
    assert_eq!(diff.entering, vec![0]);
    assert_eq!(engine.phase(&0), Some(TransitionPhase::Enter));
    assert_eq!(engine.style(&0), Some(AnimatedStyle::new(10.0, 0.8)));
}

#[test]
fn re_entry_during_leave_continues_from_current_style() {
    let mut engine = engine();
    engine.sync(points(&[0])).expect("enter");
    engine.tick(DURATION_MS).expect("settle");
    engine.sync(Vec::new()).expect("leave");
    engine.tick(40.0).expect("partial leave");

    let mid_leave = engine.style(&0).expect("leaving key rendered");
    assert_relative_eq!(mid_leave.opacity, 0.6, epsilon = 1e-12);

    let diff = engine.sync(points(&[0])).expect("re-enter");
    assert_eq!(diff.entering, vec![0]);
    assert_eq!(engine.phase(&0), Some(TransitionPhase::Enter));
    assert_eq!(engine.style(&0), Some(mid_leave));

    engine.tick(DURATION_MS / 2.0).expect("half of re-entry");
    let style = engine.style(&0).expect("entering");
    assert_relative_eq!(style.opacity, 0.8, epsilon = 1e-12);
    assert_relative_eq!(style.dash_offset, 0.0, epsilon = 1e-12);
}

#[test]
fn entering_style_eases_from_origin_to_target() {
    let mut engine = engine();
    engine.sync(points(&[0])).expect("enter");
    assert_eq!(engine.style(&0), Some(AnimatedStyle::new(10.0, 0.8)));

    engine.tick(25.0).expect("quarter");
    let style = engine.style(&0).expect("entering");
    assert_relative_eq!(style.dash_offset, 7.5, epsilon = 1e-12);
    assert_relative_eq!(style.opacity, 0.85, epsilon = 1e-12);

    let still_animating = engine.tick(75.0).expect("finish");
    assert!(!still_animating);
    assert_eq!(engine.style(&0), Some(AnimatedStyle::new(0.0, 1.0)));
}

#[test]
fn update_mid_enter_keeps_running_animation() {
    let mut engine = engine();
    engine.sync(points(&[0])).expect("enter");
    engine.tick(50.0).expect("half");
    let started_at = engine.record(&0).expect("record").started_at_ms;

    engine.sync(points(&[0])).expect("update");
    let record = engine.record(&0).expect("record");
    assert_eq!(record.phase, TransitionPhase::Update);
    assert_eq!(record.started_at_ms, started_at);

    engine.tick(50.0).expect("finish");
    assert_eq!(engine.style(&0), Some(AnimatedStyle::new(0.0, 1.0)));
    assert!(!engine.is_animating());
}

#[test]
fn update_carries_the_new_item_payload() {
    let mut engine = engine();
    engine.sync(points(&[0])).expect("enter");
    engine
        .sync(vec![Coordinate::new(0, 4.0, 400.0)])
        .expect("update");

    let record = engine.record(&0).expect("record");
    assert_eq!(record.item, Coordinate::new(0, 4.0, 400.0));
}

#[test]
fn empty_collection_drives_every_key_into_leave() {
    let mut engine = engine();
    engine.sync(points(&[0, 1, 2])).expect("enter");

    let diff = engine.sync(Vec::new()).expect("empty");
    assert_eq!(diff.leaving, vec![0, 1, 2]);
    assert!(engine.interactive_keys().is_empty());
    assert_eq!(engine.len(), 3);

    engine.tick(DURATION_MS).expect("finish");
    assert!(engine.is_empty());
}

#[test]
fn leaving_key_kept_across_further_diffs_is_not_restarted() {
    let mut engine = engine();
    engine.sync(points(&[0, 1])).expect("enter");
    engine.tick(DURATION_MS).expect("settle");
    engine.sync(points(&[1])).expect("0 leaves");
    engine.tick(50.0).expect("half");
    let started_at = engine.record(&0).expect("record").started_at_ms;

    let diff = engine.sync(points(&[1, 2])).expect("another diff");
    assert!(diff.leaving.is_empty());
    assert_eq!(engine.record(&0).expect("record").started_at_ms, started_at);
}

#[test]
fn duplicate_keys_are_rejected_without_mutation() {
    let mut engine = engine();
    engine.sync(points(&[0, 1])).expect("enter");

    let err = engine
        .sync(points(&[2, 2]))
        .expect_err("duplicate keys must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(rendered_keys(&engine), vec![0, 1]);
    assert_eq!(engine.phase(&0), Some(TransitionPhase::Enter));
}

#[test]
fn replace_dataset_cancels_exits_of_absent_keys() {
    let mut engine = engine();
    engine.sync(points(&[0, 1])).expect("enter");
    engine.tick(DURATION_MS).expect("settle");
    engine.sync(points(&[1])).expect("0 leaves");
    engine.tick(10.0).expect("partial");

    let diff = engine.replace_dataset(points(&[5])).expect("replace");
    assert!(!engine.contains(&0));
    assert_eq!(diff.entering, vec![5]);
    assert_eq!(diff.leaving, vec![1]);
    assert_eq!(engine.phase(&1), Some(TransitionPhase::Leave));
}

#[test]
fn replace_dataset_cancels_entries_of_absent_keys() {
    let mut engine = engine();
    engine.sync(points(&[0, 1])).expect("enter");
    engine.tick(30.0).expect("mid enter");
    assert_eq!(engine.phase(&0), Some(TransitionPhase::Enter));

    let diff = engine.replace_dataset(points(&[5])).expect("replace");
    assert!(!engine.contains(&0));
    assert!(!engine.contains(&1));
    assert_eq!(diff.entering, vec![5]);
    assert!(diff.leaving.is_empty());
    assert_eq!(rendered_keys(&engine), vec![5]);
}

#[test]
fn replace_dataset_keeps_mid_enter_keys_it_contains() {
    let mut engine = engine();
    engine.sync(points(&[0, 1])).expect("enter");
    engine.tick(30.0).expect("mid enter");

    let diff = engine.replace_dataset(points(&[1, 2])).expect("replace");
    assert!(!engine.contains(&0));
    assert_eq!(diff.updating, vec![1]);
    assert_eq!(diff.entering, vec![2]);
    assert_relative_eq!(
        engine.style(&1).expect("key 1").opacity,
        0.8 + 0.2 * 0.3,
        epsilon = 1e-9
    );
}

#[test]
fn replace_dataset_re_enters_leaving_keys_it_contains() {
    let mut engine = engine();
    engine.sync(points(&[0])).expect("enter");
    engine.tick(DURATION_MS).expect("settle");
    engine.sync(Vec::new()).expect("leave");

    let diff = engine.replace_dataset(points(&[0])).expect("replace");
    assert_eq!(diff.entering, vec![0]);
    assert_eq!(engine.phase(&0), Some(TransitionPhase::Enter));
}

#[test]
fn teardown_drops_all_keys() {
    let mut engine = engine();
    engine.sync(points(&[0, 1, 2])).expect("enter");
    engine.teardown();

    assert!(engine.is_empty());
    assert!(!engine.is_animating());
}

#[test]
fn invalid_tick_and_config_are_rejected() {
    let mut engine = engine();
    let err = engine.tick(-1.0).expect_err("negative delta must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    let err = engine.tick(f64::NAN).expect_err("nan delta must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let mut bad = config();
    bad.duration_ms = 0.0;
    let err = TransitionEngine::<Coordinate>::new(bad).expect_err("zero duration must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let mut bad = config();
    bad.leave = StylePatch::opacity(f64::INFINITY);
    let err = engine.set_config(bad).expect_err("non-finite style must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn zero_tick_keeps_styles_in_place() {
    let mut engine = engine();
    engine.sync(points(&[0])).expect("enter");
    assert!(engine.tick(0.0).expect("zero tick"));
    assert_eq!(engine.style(&0), Some(AnimatedStyle::new(10.0, 0.8)));
}
