//! Text presentation of an evaluated scene. Pure string building — the CLI
//! owns the terminal and decides how to put these on screen.

use std::fmt::Write as _;

use crate::{
    eval::SceneFrame,
    model::{Reel, TransitionKind},
};

const BAR_WIDTH: usize = 40;

pub fn intro_card(reel: &Reel) -> String {
    format!("{}\n{}\n\n▶ playing reel…\n", reel.title, reel.tagline)
}

pub fn end_card(reel: &Reel) -> String {
    format!("{}\n\n↺ run `play` again to replay\n", reel.outro)
}

/// One full frame: header, caption, layer readout, progress bar.
pub fn scene_view(frame: &SceneFrame, scene_count: usize, progress: f64) -> String {
    let mut out = String::new();

    let _ = write!(out, "Scene {}/{} · {}", frame.scene + 1, scene_count, frame.name);
    if let Some(tr) = &frame.entrance {
        let pct = (tr.progress * 100.0).round() as u32;
        let _ = write!(out, "  [{} {pct}%]", transition_label(tr.kind));
    }
    out.push('\n');

    if let Some(caption) = &frame.caption
        && caption.opacity > 0.0
    {
        // render the fade as emphasis: quotes while dim, bare once settled
        if caption.opacity >= 0.95 {
            let _ = writeln!(out, "  {}", caption.text);
        } else {
            let _ = writeln!(out, "  “{}”", caption.text);
        }
    }

    for layer in &frame.layers {
        let _ = writeln!(
            out,
            "    {:<20} opacity {:>4.2}  scale {:>4.2}  pos ({:>+6.1},{:>+6.1})  rot {:>+6.1}°",
            layer.name, layer.opacity, layer.scale, layer.translate.x, layer.translate.y,
            layer.rotation_deg,
        );
    }

    let _ = writeln!(out, "\n{}", progress_bar(progress, BAR_WIDTH));
    out
}

pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * width as f64).round() as usize;
    let mut bar = String::with_capacity(width + 8);
    bar.push('[');
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    let _ = write!(bar, "] {:>3.0}%", fraction * 100.0);
    bar
}

fn transition_label(kind: TransitionKind) -> &'static str {
    match kind {
        TransitionKind::Fade => "fade",
        TransitionKind::Slide { .. } => "slide",
        TransitionKind::Zoom { .. } => "zoom",
    }
}
