#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// Overshoots past the target before settling (pop-in feel).
    OutBack,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::OutBack,
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert!((ease.apply(0.0) - 0.0).abs() < 1e-12, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-0.5), ease.apply(0.0));
            assert_eq!(ease.apply(1.5), ease.apply(1.0));
        }
    }

    #[test]
    fn out_back_overshoots() {
        // the whole point of the variant
        assert!(Ease::OutBack.apply(0.8) > 1.0);
    }

    #[test]
    fn serde_names_are_snake_case() {
        let s = serde_json::to_string(&Ease::InOutCubic).unwrap();
        assert_eq!(s, "\"in_out_cubic\"");
    }
}
