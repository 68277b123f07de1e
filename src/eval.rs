use crate::{
    anim::SampleCtx,
    core::{TimeMs, Vec2},
    error::{ReelError, ReelResult},
    model::{Reel, Scene, TransitionKind},
};

/// Everything the presentation layer needs to draw one scene at one instant,
/// with all animation tracks already sampled.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneFrame {
    pub scene: usize,
    pub name: String,
    pub at: TimeMs,
    pub entrance: Option<ResolvedTransition>,
    pub caption: Option<ResolvedCaption>,
    pub layers: Vec<ResolvedLayer>,
}

/// Entrance transition while inside its window; `None` once fully entered.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ResolvedTransition {
    pub kind: TransitionKind,
    pub progress: f64, // 0..1, eased
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ResolvedCaption {
    pub text: String,
    pub opacity: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ResolvedLayer {
    pub name: String,
    pub opacity: f64,
    pub scale: f64,
    pub translate: Vec2,
    pub rotation_deg: f64,
}

pub struct Evaluator;

impl Evaluator {
    /// Resolves scene `scene` of `reel` at scene-local time `at`.
    /// Deterministic: same inputs, same output.
    #[tracing::instrument(skip(reel))]
    pub fn eval_scene(reel: &Reel, scene: usize, at: TimeMs) -> ReelResult<SceneFrame> {
        let Some(def) = reel.scenes.get(scene) else {
            return Err(ReelError::evaluation(format!(
                "scene index {scene} out of bounds (reel has {})",
                reel.scenes.len()
            )));
        };

        let ctx = SampleCtx { scene_local: at };

        let layers = def
            .layers
            .iter()
            .map(|layer| {
                Ok(ResolvedLayer {
                    name: layer.name.clone(),
                    opacity: layer.opacity.sample(ctx)?.clamp(0.0, 1.0),
                    scale: layer.scale.sample(ctx)?,
                    translate: layer.translate.sample(ctx)?,
                    rotation_deg: layer.rotation_deg.sample(ctx)?,
                })
            })
            .collect::<ReelResult<Vec<_>>>()?;

        Ok(SceneFrame {
            scene,
            name: def.name.clone(),
            at,
            entrance: resolve_entrance(def, at),
            caption: resolve_caption(def, at),
            layers,
        })
    }
}

fn resolve_entrance(scene: &Scene, at: TimeMs) -> Option<ResolvedTransition> {
    let spec = scene.entrance.as_ref()?;
    // window never outlasts the scene itself
    let dur = spec.duration_ms.min(scene.duration_ms);
    if dur == 0 || at.0 >= dur {
        return None;
    }
    let t = at.0 as f64 / dur as f64;
    Some(ResolvedTransition {
        kind: spec.kind,
        progress: spec.ease.apply(t).clamp(0.0, 1.0),
    })
}

fn resolve_caption(scene: &Scene, at: TimeMs) -> Option<ResolvedCaption> {
    let caption = scene.caption.as_ref()?;
    let opacity = if at.0 < caption.delay_ms {
        0.0
    } else if caption.fade_ms == 0 {
        1.0
    } else {
        ((at.0 - caption.delay_ms) as f64 / caption.fade_ms as f64).clamp(0.0, 1.0)
    };
    Some(ResolvedCaption {
        text: caption.text.clone(),
        opacity,
    })
}
