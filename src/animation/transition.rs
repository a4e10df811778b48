use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::animation::{AnimatedStyle, Ease, StylePatch};
use crate::core::Coordinate;
use crate::error::{ChartError, ChartResult};

/// Stable identity of an item across successive collections.
pub trait Keyed {
    type Key: Clone + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;
}

impl Keyed for Coordinate {
    type Key = usize;

    fn key(&self) -> usize {
        self.key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionPhase {
    Enter,
    Update,
    Leave,
}

/// Styles and timing shared by every keyed transition of one engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Style a freshly entering item starts from.
    pub from: AnimatedStyle,
    pub enter: StylePatch,
    /// Target for items kept across a diff; `None` reuses `enter`.
    #[serde(default)]
    pub update: Option<StylePatch>,
    pub leave: StylePatch,
    pub duration_ms: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            from: AnimatedStyle::new(0.0, 0.0),
            enter: StylePatch::opacity(1.0),
            update: None,
            leave: StylePatch::opacity(0.0),
            duration_ms: 500.0,
            ease: Ease::default(),
        }
    }
}

impl TransitionConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and > 0".to_owned(),
            ));
        }
        self.from.validate()?;
        self.enter.validate()?;
        self.leave.validate()?;
        if let Some(update) = self.update {
            update.validate()?;
        }
        Ok(self)
    }

    fn update_target(&self) -> StylePatch {
        self.update.unwrap_or(self.enter)
    }
}

/// Animation state of one key.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRecord<T> {
    pub item: T,
    pub phase: TransitionPhase,
    pub start_style: AnimatedStyle,
    pub end_style: AnimatedStyle,
    pub started_at_ms: f64,
    pub current_style: AnimatedStyle,
    settled: bool,
}

impl<T> TransitionRecord<T> {
    fn start(
        item: T,
        phase: TransitionPhase,
        start_style: AnimatedStyle,
        end_style: AnimatedStyle,
        now_ms: f64,
    ) -> Self {
        Self {
            item,
            phase,
            start_style,
            end_style,
            started_at_ms: now_ms,
            current_style: start_style,
            settled: false,
        }
    }

    fn restart(&mut self, phase: TransitionPhase, end_style: AnimatedStyle, now_ms: f64) {
        self.phase = phase;
        self.start_style = self.current_style;
        self.end_style = end_style;
        self.started_at_ms = now_ms;
        self.settled = false;
    }

    fn advance(&mut self, now_ms: f64, duration_ms: f64, ease: Ease) {
        if self.settled {
            return;
        }
        let progress = ((now_ms - self.started_at_ms) / duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.current_style = self.end_style;
            self.settled = true;
        } else {
            self.current_style = self.start_style.lerp(self.end_style, ease.apply(progress));
        }
    }

    /// `true` once the record has reached its end style.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    #[must_use]
    pub fn is_leaving(&self) -> bool {
        self.phase == TransitionPhase::Leave
    }
}

/// Keys grouped by the lifecycle change a diff applied to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionDiff<K> {
    pub entering: Vec<K>,
    pub updating: Vec<K>,
    pub leaving: Vec<K>,
}

impl<K> Default for TransitionDiff<K> {
    fn default() -> Self {
        Self {
            entering: Vec::new(),
            updating: Vec::new(),
            leaving: Vec::new(),
        }
    }
}

/// Keyed enter/update/leave animator driven by an external frame clock.
///
/// Each `sync` diffs the new collection against the active set:
/// `entering = new - old`, `updating = old ∩ new`, `leaving = old - new`.
/// Leaving items stay in the render set until their animation completes
/// on a later `tick`. All mutation happens through `&mut self`, so one
/// engine is driven from a single render loop.
#[derive(Debug, Clone)]
pub struct TransitionEngine<T: Keyed> {
    config: TransitionConfig,
    now_ms: f64,
    active: IndexMap<T::Key, TransitionRecord<T>>,
}

impl<T: Keyed> TransitionEngine<T> {
    pub fn new(config: TransitionConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            now_ms: 0.0,
            active: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    /// Replaces styles and timing. Running animations keep their start and
    /// end styles but progress under the new duration and easing.
    pub fn set_config(&mut self, config: TransitionConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Diffs `items` against the active set and starts the matching
    /// transitions.
    ///
    /// Fails only when `items` repeats a key; the active set is left untouched
    /// in that case.
    pub fn sync<I>(&mut self, items: I) -> ChartResult<TransitionDiff<T::Key>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut next = index_by_key(items)?;
        let order = merged_order(&self.active, &next);
        let mut previous = std::mem::take(&mut self.active);
        let mut diff = TransitionDiff::default();
        let mut active = IndexMap::with_capacity(order.len());

        for key in order {
            let record = match (previous.swap_remove(&key), next.swap_remove(&key)) {
                (None, Some(item)) => {
                    let end = self.config.enter.resolve_against(self.config.from);
                    diff.entering.push(key.clone());
                    TransitionRecord::start(
                        item,
                        TransitionPhase::Enter,
                        self.config.from,
                        end,
                        self.now_ms,
                    )
                }
                (Some(mut record), Some(item)) => {
                    record.item = item;
                    if record.is_leaving() {
                        // Re-entry picks up from wherever the exit left off.
                        let end = self.config.enter.resolve_against(record.current_style);
                        record.restart(TransitionPhase::Enter, end, self.now_ms);
                        diff.entering.push(key.clone());
                    } else {
                        let target = self
                            .config
                            .update_target()
                            .resolve_against(record.current_style);
                        if target == record.end_style {
                            record.phase = TransitionPhase::Update;
                        } else {
                            record.restart(TransitionPhase::Update, target, self.now_ms);
                        }
                        diff.updating.push(key.clone());
                    }
                    record
                }
                (Some(mut record), None) => {
                    if !record.is_leaving() {
                        let end = self.config.leave.resolve_against(record.current_style);
                        record.restart(TransitionPhase::Leave, end, self.now_ms);
                        diff.leaving.push(key.clone());
                    }
                    record
                }
                (None, None) => continue,
            };
            active.insert(key, record);
        }

        self.active = active;
        debug!(
            entering = diff.entering.len(),
            updating = diff.updating.len(),
            leaving = diff.leaving.len(),
            active = self.active.len(),
            "transition diff applied"
        );
        Ok(diff)
    }

    /// Replaces the whole dataset.
    ///
    /// Enter, update and exit animations still running for keys absent from
    /// `items` are cancelled and those keys dropped at once. Settled keys
    /// absent from `items` leave normally; everything else is diffed as in
    /// [`Self::sync`].
    pub fn replace_dataset<I>(&mut self, items: I) -> ChartResult<TransitionDiff<T::Key>>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let keys: HashSet<T::Key> = items.iter().map(|item| item.key()).collect();
        let before = self.active.len();
        self.active.retain(|key, record| {
            keys.contains(key) || (record.is_settled() && !record.is_leaving())
        });
        debug!(
            cancelled = before - self.active.len(),
            incoming = items.len(),
            "replacing transition dataset"
        );
        self.sync(items)
    }

    /// Advances the clock by `delta_ms`, interpolates every active key and
    /// drops keys whose exit completed.
    ///
    /// Returns `true` while any key is still animating.
    pub fn tick(&mut self, delta_ms: f64) -> ChartResult<bool> {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "tick delta must be finite and >= 0".to_owned(),
            ));
        }

        self.now_ms += delta_ms;
        let (now_ms, duration_ms, ease) = (self.now_ms, self.config.duration_ms, self.config.ease);
        for record in self.active.values_mut() {
            record.advance(now_ms, duration_ms, ease);
        }

        let before = self.active.len();
        self.active
            .retain(|_, record| !(record.is_leaving() && record.is_settled()));
        trace!(
            now_ms,
            removed = before - self.active.len(),
            active = self.active.len(),
            "transition tick"
        );
        Ok(self.is_animating())
    }

    /// Drops every key without animating.
    pub fn teardown(&mut self) {
        debug!(dropped = self.active.len(), "transition engine teardown");
        self.active.clear();
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.values().any(|record| !record.is_settled())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &T::Key) -> bool {
        self.active.contains_key(key)
    }

    #[must_use]
    pub fn record(&self, key: &T::Key) -> Option<&TransitionRecord<T>> {
        self.active.get(key)
    }

    #[must_use]
    pub fn phase(&self, key: &T::Key) -> Option<TransitionPhase> {
        self.active.get(key).map(|record| record.phase)
    }

    #[must_use]
    pub fn style(&self, key: &T::Key) -> Option<AnimatedStyle> {
        self.active.get(key).map(|record| record.current_style)
    }

    /// Every record still drawn this frame, in render order.
    pub fn rendered(&self) -> impl Iterator<Item = (&T::Key, &TransitionRecord<T>)> {
        self.active.iter()
    }

    /// Keys eligible for hit-testing; leaving keys are excluded.
    #[must_use]
    pub fn interactive_keys(&self) -> Vec<T::Key> {
        self.active
            .iter()
            .filter(|(_, record)| !record.is_leaving())
            .map(|(key, _)| key.clone())
            .collect()
    }
}

fn index_by_key<T, I>(items: I) -> ChartResult<IndexMap<T::Key, T>>
where
    T: Keyed,
    I: IntoIterator<Item = T>,
{
    let mut indexed = IndexMap::new();
    for item in items {
        let key = item.key();
        if indexed.contains_key(&key) {
            return Err(ChartError::InvalidData(format!(
                "duplicate transition key {key:?}"
            )));
        }
        indexed.insert(key, item);
    }
    Ok(indexed)
}

/// New collection order, with each leaving key placed right after the
/// nearest surviving key that preceded it previously.
fn merged_order<K, A, B>(previous: &IndexMap<K, A>, next: &IndexMap<K, B>) -> Vec<K>
where
    K: Clone + Eq + Hash,
{
    let mut trailing: HashMap<Option<K>, Vec<K>> = HashMap::new();
    let mut anchor: Option<K> = None;
    for key in previous.keys() {
        if next.contains_key(key) {
            anchor = Some(key.clone());
        } else {
            trailing.entry(anchor.clone()).or_default().push(key.clone());
        }
    }

    let mut order = Vec::with_capacity(previous.len() + next.len());
    order.extend(trailing.remove(&None).unwrap_or_default());
    for key in next.keys() {
        order.push(key.clone());
        if let Some(keys) = trailing.remove(&Some(key.clone())) {
            order.extend(keys);
        }
    }
    order
}
