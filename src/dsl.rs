use crate::{
    anim::Anim,
    anim_ease::Ease,
    core::Vec2,
    error::ReelResult,
    model::{Caption, Layer, Reel, Scene, TransitionKind, TransitionSpec},
};

/// Builds a [`Reel`] programmatically; `build()` validates the result.
pub struct ReelBuilder {
    title: String,
    tagline: String,
    outro: String,
    scenes: Vec<Scene>,
}

impl ReelBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tagline: String::new(),
            outro: String::new(),
            scenes: Vec::new(),
        }
    }

    pub fn tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    pub fn outro(mut self, outro: impl Into<String>) -> Self {
        self.outro = outro.into();
        self
    }

    pub fn scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }

    pub fn build(self) -> ReelResult<Reel> {
        let reel = Reel {
            title: self.title,
            tagline: self.tagline,
            outro: self.outro,
            scenes: self.scenes,
        };
        reel.validate()?;
        Ok(reel)
    }
}

pub struct SceneBuilder {
    name: String,
    duration_ms: u64,
    entrance: Option<TransitionSpec>,
    caption: Option<Caption>,
    layers: Vec<Layer>,
}

impl SceneBuilder {
    pub fn new(name: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            name: name.into(),
            duration_ms,
            entrance: None,
            caption: None,
            layers: Vec::new(),
        }
    }

    pub fn entrance(mut self, kind: TransitionKind, duration_ms: u64, ease: Ease) -> Self {
        self.entrance = Some(TransitionSpec {
            kind,
            duration_ms,
            ease,
        });
        self
    }

    /// Caption fading in over 400ms once `delay_ms` has passed.
    pub fn caption(mut self, text: impl Into<String>, delay_ms: u64) -> Self {
        self.caption = Some(Caption {
            text: text.into(),
            delay_ms,
            fade_ms: 400,
        });
        self
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn build(self) -> Scene {
        Scene {
            name: self.name,
            duration_ms: self.duration_ms,
            entrance: self.entrance,
            caption: self.caption,
            layers: self.layers,
        }
    }
}

pub struct LayerBuilder {
    layer: Layer,
}

impl LayerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            layer: Layer::still(name),
        }
    }

    pub fn opacity(mut self, anim: Anim<f64>) -> Self {
        self.layer.opacity = anim;
        self
    }

    pub fn scale(mut self, anim: Anim<f64>) -> Self {
        self.layer.scale = anim;
        self
    }

    pub fn translate(mut self, anim: Anim<Vec2>) -> Self {
        self.layer.translate = anim;
        self
    }

    pub fn rotation_deg(mut self, anim: Anim<f64>) -> Self {
        self.layer.rotation_deg = anim;
        self
    }

    pub fn build(self) -> Layer {
        self.layer
    }
}
