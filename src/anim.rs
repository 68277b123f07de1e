use crate::{
    anim_ease::Ease,
    core::{TimeMs, Vec2},
    error::{ReelError, ReelResult},
};

/// Sampling context: where we are on the scene-local clock.
#[derive(Clone, Copy, Debug)]
pub struct SampleCtx {
    pub scene_local: TimeMs,
}

impl SampleCtx {
    pub fn at(ms: u64) -> Self {
        Self {
            scene_local: TimeMs(ms),
        }
    }
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Anim<T> {
    Keyframes(Keyframes<T>),
    Expr(Expr<T>),
}

impl<T> Anim<T>
where
    T: Lerp + Clone,
{
    pub fn constant(value: T) -> Self {
        Self::Keyframes(Keyframes {
            keys: vec![Keyframe {
                at: TimeMs(0),
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
            default: None,
        })
    }

    pub fn sample(&self, ctx: SampleCtx) -> ReelResult<T> {
        match self {
            Self::Keyframes(kf) => kf.sample(ctx),
            Self::Expr(expr) => expr.sample(ctx),
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        match self {
            Self::Keyframes(kf) => kf.validate(),
            Self::Expr(expr) => expr.validate(),
        }
    }

    /// Wraps the track so it starts `by_ms` later, holding its first value until then.
    pub fn delayed(self, by_ms: u64) -> Self {
        Self::Expr(Expr::Delay {
            inner: Box::new(self),
            by_ms,
        })
    }

    /// Wraps the track so it repeats every `period_ms`.
    pub fn looped(self, period_ms: u64, mode: LoopMode) -> Self {
        Self::Expr(Expr::Loop {
            inner: Box::new(self),
            period_ms,
            mode,
        })
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>, // sorted by time
    pub mode: InterpMode,
    pub default: Option<T>, // value when no keys exist
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> ReelResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(ReelError::animation(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(ReelError::animation("Keyframes keys must be sorted by time"));
        }
        Ok(())
    }

    pub fn sample(&self, ctx: SampleCtx) -> ReelResult<T> {
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| ReelError::animation("Keyframes has no keys and no default"));
        }

        let t_ms = ctx.scene_local.0;
        let idx = self.keys.partition_point(|k| k.at.0 <= t_ms);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.at.0.saturating_sub(a.at.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((t_ms - a.at.0) as f64) / (denom as f64);
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub at: TimeMs,
    pub value: T,
    pub ease: Ease, // ease applied toward next key
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpMode {
    Hold,
    Linear,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Expr<T> {
    /// Hold the inner track's start until `by_ms`, then play it shifted.
    Delay { inner: Box<Anim<T>>, by_ms: u64 },
    /// Repeat the inner track every `period_ms`.
    Loop {
        inner: Box<Anim<T>>,
        period_ms: u64,
        mode: LoopMode,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    Repeat,
    PingPong,
}

impl<T> Expr<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> ReelResult<()> {
        match self {
            Self::Delay { inner, by_ms: _ } => inner.validate(),
            Self::Loop {
                inner,
                period_ms,
                mode: _,
            } => {
                if *period_ms == 0 {
                    return Err(ReelError::animation("Loop period_ms must be > 0"));
                }
                inner.validate()
            }
        }
    }

    pub fn sample(&self, ctx: SampleCtx) -> ReelResult<T> {
        match self {
            Self::Delay { inner, by_ms } => {
                let t = ctx.scene_local.0;
                let mapped = if t < *by_ms { 0 } else { t - by_ms };
                inner.sample(SampleCtx {
                    scene_local: TimeMs(mapped),
                })
            }
            Self::Loop {
                inner,
                period_ms,
                mode,
            } => {
                if *period_ms == 0 {
                    return Err(ReelError::animation("Loop period_ms must be > 0"));
                }
                let t = ctx.scene_local.0;
                let mapped = match mode {
                    LoopMode::Repeat => t % period_ms,
                    LoopMode::PingPong => {
                        let cycle = 2 * period_ms;
                        let pos = t % cycle;
                        if pos < *period_ms { pos } else { cycle - pos }
                    }
                };
                inner.sample(SampleCtx {
                    scene_local: TimeMs(mapped),
                })
            }
        }
    }
}
