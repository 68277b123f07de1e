use std::time::Duration;

/// Milliseconds on a scene-local (or reel-local) clock, 0-based.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimeMs(pub u64);

impl TimeMs {
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Truncates sub-millisecond precision.
    pub fn from_duration(d: Duration) -> Self {
        Self(d.as_millis() as u64)
    }

    pub fn saturating_sub(self, other: TimeMs) -> TimeMs {
        TimeMs(self.0.saturating_sub(other.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_ms_duration_roundtrip() {
        assert_eq!(TimeMs(3000).as_duration(), Duration::from_secs(3));
        assert_eq!(TimeMs::from_duration(Duration::from_millis(1500)), TimeMs(1500));
        // sub-millisecond truncates, never rounds up
        assert_eq!(TimeMs::from_duration(Duration::from_micros(2999)), TimeMs(2));
    }

    #[test]
    fn saturating_sub_stops_at_zero() {
        assert_eq!(TimeMs(5).saturating_sub(TimeMs(7)), TimeMs(0));
        assert_eq!(TimeMs(7).saturating_sub(TimeMs(5)), TimeMs(2));
    }
}
