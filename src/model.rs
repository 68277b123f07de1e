use crate::{
    anim::Anim,
    anim_ease::Ease,
    core::Vec2,
    error::{ReelError, ReelResult},
};

/// A scripted promotional reel: the fixed, ordered scene list the sequencer
/// plays, plus the intro/outro card copy around it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Reel {
    pub title: String,
    pub tagline: String,
    pub outro: String,
    pub scenes: Vec<Scene>,
}

/// One named, fixed-duration segment of the reel.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub name: String,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance: Option<TransitionSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<Caption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<Layer>,
}

/// Overlay text that fades in `delay_ms` into the scene.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Caption {
    pub text: String,
    pub delay_ms: u64,
    pub fade_ms: u64,
}

/// How a scene enters the frame when the sequencer lands on it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TransitionSpec {
    pub kind: TransitionKind,
    pub duration_ms: u64,
    pub ease: Ease,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Fade,
    Slide { from_x: f64 },
    Zoom { from_scale: f64 },
}

/// A named decorative element with animated properties, sampled on the
/// scene-local clock.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    pub name: String,
    pub opacity: Anim<f64>, // 0..1 clamped in eval
    pub scale: Anim<f64>,
    pub translate: Anim<Vec2>,
    pub rotation_deg: Anim<f64>,
}

impl Reel {
    pub fn validate(&self) -> ReelResult<()> {
        if self.scenes.is_empty() {
            return Err(ReelError::validation("reel must have at least one scene"));
        }

        for (i, scene) in self.scenes.iter().enumerate() {
            if scene.name.trim().is_empty() {
                return Err(ReelError::validation(format!("scene {i} has an empty name")));
            }
            if scene.duration_ms == 0 {
                return Err(ReelError::validation(format!(
                    "scene '{}' must have duration_ms > 0",
                    scene.name
                )));
            }
            if let Some(tr) = &scene.entrance {
                tr.validate()
                    .map_err(|e| ReelError::validation(format!("scene '{}': {e}", scene.name)))?;
            }
            for layer in &scene.layers {
                if layer.name.trim().is_empty() {
                    return Err(ReelError::validation(format!(
                        "scene '{}' has a layer with an empty name",
                        scene.name
                    )));
                }
                layer.opacity.validate()?;
                layer.scale.validate()?;
                layer.translate.validate()?;
                layer.rotation_deg.validate()?;
            }
        }

        Ok(())
    }

    pub fn total_duration_ms(&self) -> u64 {
        self.scenes.iter().map(|s| s.duration_ms).sum()
    }

    /// Reel-local start time of scene `i` (cumulative durations before it).
    pub fn scene_start_ms(&self, i: usize) -> u64 {
        self.scenes[..i].iter().map(|s| s.duration_ms).sum()
    }
}

impl TransitionSpec {
    pub fn validate(&self) -> ReelResult<()> {
        if self.duration_ms == 0 {
            return Err(ReelError::validation("transition duration_ms must be > 0"));
        }
        Ok(())
    }
}

impl Layer {
    /// A layer that just sits there until given animated tracks.
    pub fn still(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opacity: Anim::constant(1.0),
            scale: Anim::constant(1.0),
            translate: Anim::constant(Vec2::ZERO),
            rotation_deg: Anim::constant(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_reel() -> Reel {
        Reel {
            title: "Test Reel".to_string(),
            tagline: "tag".to_string(),
            outro: "done".to_string(),
            scenes: vec![Scene {
                name: "opening".to_string(),
                duration_ms: 3000,
                entrance: Some(TransitionSpec {
                    kind: TransitionKind::Fade,
                    duration_ms: 500,
                    ease: Ease::Linear,
                }),
                caption: Some(Caption {
                    text: "hello".to_string(),
                    delay_ms: 500,
                    fade_ms: 300,
                }),
                layers: vec![Layer::still("backdrop")],
            }],
        }
    }

    #[test]
    fn json_roundtrip() {
        let reel = basic_reel();
        let s = serde_json::to_string_pretty(&reel).unwrap();
        let de: Reel = serde_json::from_str(&s).unwrap();
        assert_eq!(de.scenes.len(), 1);
        assert_eq!(de.scenes[0].duration_ms, 3000);
        de.validate().unwrap();
    }

    #[test]
    fn validate_rejects_empty_scene_list() {
        let mut reel = basic_reel();
        reel.scenes.clear();
        assert!(reel.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_duration() {
        let mut reel = basic_reel();
        reel.scenes[0].duration_ms = 0;
        assert!(reel.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_length_transition() {
        let mut reel = basic_reel();
        reel.scenes[0].entrance.as_mut().unwrap().duration_ms = 0;
        assert!(reel.validate().is_err());
    }

    #[test]
    fn validate_rejects_unnamed_layer() {
        let mut reel = basic_reel();
        reel.scenes[0].layers[0].name = "  ".to_string();
        assert!(reel.validate().is_err());
    }

    #[test]
    fn scene_start_is_cumulative() {
        let mut reel = basic_reel();
        let mut second = reel.scenes[0].clone();
        second.name = "next".to_string();
        second.duration_ms = 5000;
        reel.scenes.push(second);

        assert_eq!(reel.scene_start_ms(0), 0);
        assert_eq!(reel.scene_start_ms(1), 3000);
        assert_eq!(reel.total_duration_ms(), 8000);
    }
}
