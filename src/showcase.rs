//! The built-in reel: a five-scene Ayurveda wellness spot, from stressed
//! face to relaxed face. Doubles as the reference configuration for tests
//! (durations 3000/3000/6000/5000/3000 ms) and as `dump` output for anyone
//! who wants a starting point to edit.

use crate::{
    anim::{Anim, InterpMode, Keyframe, Keyframes, LoopMode},
    anim_ease::Ease,
    core::{TimeMs, Vec2},
    dsl::{LayerBuilder, ReelBuilder, SceneBuilder},
    model::{Reel, TransitionKind},
};

fn track_f64(mode: InterpMode, keys: &[(u64, f64, Ease)]) -> Anim<f64> {
    Anim::Keyframes(Keyframes {
        keys: keys
            .iter()
            .map(|&(at, value, ease)| Keyframe {
                at: TimeMs(at),
                value,
                ease,
            })
            .collect(),
        mode,
        default: None,
    })
}

fn track_vec2(keys: &[(u64, Vec2, Ease)]) -> Anim<Vec2> {
    Anim::Keyframes(Keyframes {
        keys: keys
            .iter()
            .map(|&(at, value, ease)| Keyframe {
                at: TimeMs(at),
                value,
                ease,
            })
            .collect(),
        mode: InterpMode::Linear,
        default: None,
    })
}

/// Builds the wellness reel. Infallible by construction; the DSL still
/// validates, so a bad edit here fails loudly in every test.
pub fn wellness_reel() -> Reel {
    ReelBuilder::new("Bo Tree Ayurveda")
        .tagline("Experience the ancient healing art of Shirodhara")
        .outro("Experience Complete")
        .scene(stressed_face())
        .scene(therapy_room())
        .scene(shirodhara())
        .scene(head_massage())
        .scene(relaxed_face())
        .build()
        .expect("showcase reel must validate")
}

fn stressed_face() -> crate::model::Scene {
    SceneBuilder::new("Stressed Face", 3000)
        .entrance(TransitionKind::Zoom { from_scale: 1.2 }, 3000, Ease::InOutCubic)
        .caption("Daily stress weighs heavy", 500)
        .layer(
            LayerBuilder::new("stressed-face")
                .scale(track_f64(
                    InterpMode::Linear,
                    &[(0, 1.0, Ease::Linear), (1500, 1.1, Ease::Linear), (3000, 1.1, Ease::Linear)],
                ))
                .build(),
        )
        .layer(
            LayerBuilder::new("tension-lines")
                .opacity(
                    track_f64(
                        InterpMode::Linear,
                        &[(0, 0.3, Ease::Linear), (1000, 0.7, Ease::Linear), (2000, 0.3, Ease::Linear)],
                    )
                    .looped(2000, LoopMode::Repeat),
                )
                .build(),
        )
        .build()
}

fn therapy_room() -> crate::model::Scene {
    SceneBuilder::new("Therapy Room", 3000)
        .entrance(TransitionKind::Slide { from_x: 100.0 }, 800, Ease::OutQuad)
        .caption("Enter the healing sanctuary", 500)
        .layer(
            LayerBuilder::new("therapy-room")
                .scale(track_f64(
                    InterpMode::Linear,
                    &[(0, 1.0, Ease::Linear), (3000, 1.05, Ease::Linear)],
                ))
                .build(),
        )
        .layer(
            LayerBuilder::new("candle-glow")
                .opacity(
                    track_f64(
                        InterpMode::Linear,
                        &[(0, 0.6, Ease::InOutQuad), (600, 1.0, Ease::InOutQuad), (1200, 0.6, Ease::Linear)],
                    )
                    .looped(1200, LoopMode::Repeat),
                )
                .build(),
        )
        .build()
}

fn shirodhara() -> crate::model::Scene {
    let mut scene = SceneBuilder::new("Shirodhara Therapy", 6000)
        .entrance(TransitionKind::Fade, 1000, Ease::Linear)
        .caption("Sacred Shirodhara therapy", 1000)
        .layer(
            LayerBuilder::new("herbal-glow")
                .opacity(
                    track_f64(
                        InterpMode::Linear,
                        &[(0, 0.3, Ease::InOutQuad), (2000, 0.6, Ease::InOutQuad), (4000, 0.3, Ease::Linear)],
                    )
                    .looped(4000, LoopMode::Repeat),
                )
                .scale(
                    track_f64(
                        InterpMode::Linear,
                        &[(0, 1.0, Ease::InOutQuad), (2000, 1.2, Ease::InOutQuad), (4000, 1.0, Ease::Linear)],
                    )
                    .looped(4000, LoopMode::Repeat),
                )
                .build(),
        );

    // staggered oil drops, each a 3s fall repeating forever
    for i in 0..3u64 {
        scene = scene.layer(
            LayerBuilder::new(format!("oil-drop-{i}"))
                .translate(
                    track_vec2(&[
                        (0, Vec2::new(0.0, -50.0), Ease::Linear),
                        (3000, Vec2::new(0.0, 200.0), Ease::Linear),
                    ])
                    .looped(3000, LoopMode::Repeat)
                    .delayed(i * 300),
                )
                .opacity(
                    track_f64(
                        InterpMode::Linear,
                        &[
                            (0, 0.0, Ease::Linear),
                            (750, 1.0, Ease::Linear),
                            (2250, 0.5, Ease::Linear),
                            (3000, 0.0, Ease::Linear),
                        ],
                    )
                    .looped(3000, LoopMode::Repeat)
                    .delayed(i * 300),
                )
                .build(),
        );
    }

    scene.build()
}

fn head_massage() -> crate::model::Scene {
    SceneBuilder::new("Head Massage", 5000)
        .entrance(TransitionKind::Fade, 800, Ease::Linear)
        .caption("Gentle healing touch", 500)
        .layer(
            LayerBuilder::new("left-hand")
                .translate(
                    track_vec2(&[
                        (0, Vec2::new(-20.0, -10.0), Ease::InOutQuad),
                        (2000, Vec2::new(20.0, 10.0), Ease::InOutQuad),
                    ])
                    .looped(2000, LoopMode::PingPong),
                )
                .rotation_deg(
                    track_f64(
                        InterpMode::Linear,
                        &[(0, -5.0, Ease::InOutQuad), (2000, 5.0, Ease::InOutQuad)],
                    )
                    .looped(2000, LoopMode::PingPong),
                )
                .build(),
        )
        .layer(
            LayerBuilder::new("right-hand")
                .translate(
                    track_vec2(&[
                        (0, Vec2::new(20.0, -10.0), Ease::InOutQuad),
                        (2000, Vec2::new(-20.0, 10.0), Ease::InOutQuad),
                    ])
                    .looped(2000, LoopMode::PingPong)
                    .delayed(500),
                )
                .build(),
        )
        .layer(
            LayerBuilder::new("herbal-particles")
                .translate(
                    track_vec2(&[
                        (0, Vec2::new(0.0, 400.0), Ease::OutQuad),
                        (5000, Vec2::new(0.0, -100.0), Ease::Linear),
                    ])
                    .looped(5000, LoopMode::Repeat),
                )
                .opacity(
                    track_f64(
                        InterpMode::Linear,
                        &[(0, 0.0, Ease::Linear), (2500, 0.8, Ease::Linear), (5000, 0.0, Ease::Linear)],
                    )
                    .looped(5000, LoopMode::Repeat),
                )
                .rotation_deg(
                    track_f64(
                        InterpMode::Linear,
                        &[(0, 0.0, Ease::Linear), (5000, 360.0, Ease::Linear)],
                    )
                    .looped(5000, LoopMode::Repeat),
                )
                .build(),
        )
        .build()
}

fn relaxed_face() -> crate::model::Scene {
    SceneBuilder::new("Relaxed Face", 3000)
        .entrance(TransitionKind::Zoom { from_scale: 0.9 }, 1000, Ease::Linear)
        .caption("Transformed. Renewed. Balanced.", 1000)
        .layer(
            LayerBuilder::new("wellness-glow")
                .opacity(
                    track_f64(
                        InterpMode::Linear,
                        &[(0, 0.5, Ease::InOutQuad), (1500, 0.8, Ease::InOutQuad), (3000, 0.5, Ease::Linear)],
                    )
                    .looped(3000, LoopMode::Repeat),
                )
                .scale(
                    track_f64(
                        InterpMode::Linear,
                        &[(0, 1.0, Ease::InOutQuad), (1500, 1.5, Ease::InOutQuad), (3000, 1.0, Ease::Linear)],
                    )
                    .looped(3000, LoopMode::Repeat),
                )
                .build(),
        )
        .layer(
            LayerBuilder::new("smile")
                .scale(
                    track_f64(
                        InterpMode::Linear,
                        &[(0, 0.0, Ease::OutBack), (800, 1.0, Ease::Linear)],
                    )
                    .delayed(500),
                )
                .build(),
        )
        .layer(
            LayerBuilder::new("floating-particles")
                .translate(
                    track_vec2(&[
                        (0, Vec2::new(0.0, 500.0), Ease::OutQuad),
                        (4000, Vec2::new(0.0, -100.0), Ease::Linear),
                    ])
                    .looped(4000, LoopMode::Repeat),
                )
                .opacity(
                    track_f64(
                        InterpMode::Linear,
                        &[(0, 0.0, Ease::Linear), (2000, 1.0, Ease::Linear), (4000, 0.0, Ease::Linear)],
                    )
                    .looped(4000, LoopMode::Repeat),
                )
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Evaluator;

    #[test]
    fn reference_durations() {
        let reel = wellness_reel();
        let durations: Vec<u64> = reel.scenes.iter().map(|s| s.duration_ms).collect();
        assert_eq!(durations, vec![3000, 3000, 6000, 5000, 3000]);
        assert_eq!(reel.total_duration_ms(), 20_000);
    }

    #[test]
    fn validates() {
        wellness_reel().validate().unwrap();
    }

    #[test]
    fn every_scene_evaluates_across_its_duration() {
        let reel = wellness_reel();
        for (i, scene) in reel.scenes.iter().enumerate() {
            for at in [0, scene.duration_ms / 2, scene.duration_ms - 1] {
                let frame = Evaluator::eval_scene(&reel, i, TimeMs(at)).unwrap();
                assert_eq!(frame.scene, i);
                for layer in &frame.layers {
                    assert!((0.0..=1.0).contains(&layer.opacity), "{} at {at}", layer.name);
                }
            }
        }
    }

    #[test]
    fn oil_drops_are_staggered() {
        let reel = wellness_reel();
        let f = Evaluator::eval_scene(&reel, 2, TimeMs(600)).unwrap();
        let drop0 = f.layers.iter().find(|l| l.name == "oil-drop-0").unwrap();
        let drop2 = f.layers.iter().find(|l| l.name == "oil-drop-2").unwrap();
        // drop 2 starts 600ms later, so at t=600 it is still at the top
        assert!(drop0.translate.y > drop2.translate.y);
    }
}
