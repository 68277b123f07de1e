#![forbid(unsafe_code)]

pub mod anim;
pub mod anim_ease;
pub mod core;
pub mod dsl;
pub mod error;
pub mod eval;
pub mod model;
pub mod render_term;
pub mod sequencer;
pub mod showcase;

pub use anim::{Anim, InterpMode, Keyframe, Keyframes, LoopMode, SampleCtx};
pub use anim_ease::Ease;
pub use crate::core::{TimeMs, Vec2};
pub use dsl::{LayerBuilder, ReelBuilder, SceneBuilder};
pub use error::{ReelError, ReelResult};
pub use eval::{Evaluator, SceneFrame};
pub use model::{Caption, Layer, Reel, Scene, TransitionKind, TransitionSpec};
pub use sequencer::{PlaybackState, Sequencer, SequencerEvent};
pub use showcase::wellness_reel;
