//! Keyed enter/update/leave animation over stroke styles.

pub mod ease;
pub mod style;
pub mod transition;

pub use ease::Ease;
pub use style::{AnimatedStyle, StylePatch};
pub use transition::{
    Keyed, TransitionConfig, TransitionDiff, TransitionEngine, TransitionPhase, TransitionRecord,
};
