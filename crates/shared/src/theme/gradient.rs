use serde::{Deserialize, Serialize};

use super::palette::{Rgb, resolve_color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientTone {
    /// Translucent overlay for cards sitting on the page background.
    Soft,
    /// Background-tinted card with a stronger fill.
    Solid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientStyle {
    pub background: String,
    pub border: String,
    pub box_shadow: Option<String>,
}

/// Builds the themed card style for a color token. Purely deterministic
/// string formatting over the resolved RGB; the blend ratios are fixed
/// per tone and theme.
pub fn gradient_style(token: &str, tone: GradientTone, light: bool) -> GradientStyle {
    let rgb = resolve_color(token);

    match (tone, light) {
        (GradientTone::Soft, true) => GradientStyle {
            background: linear(rgb, 0.12, 0.05),
            border: format!("1px solid {}", rgb.rgba(0.35)),
            box_shadow: None,
        },
        (GradientTone::Soft, false) => GradientStyle {
            background: linear(rgb, 0.25, 0.10),
            border: format!("1px solid {}", rgb.rgba(0.45)),
            box_shadow: Some(format!("0 4px 20px {}", rgb.rgba(0.25))),
        },
        (GradientTone::Solid, true) => GradientStyle {
            background: linear(rgb, 0.90, 0.75),
            border: format!("1px solid {}", rgb.rgba(0.60)),
            box_shadow: Some(format!("0 2px 12px {}", rgb.rgba(0.20))),
        },
        (GradientTone::Solid, false) => GradientStyle {
            background: linear(rgb, 0.80, 0.60),
            border: format!("1px solid {}", rgb.rgba(0.70)),
            box_shadow: Some(format!("0 4px 24px {}", rgb.rgba(0.35))),
        },
    }
}

fn linear(rgb: Rgb, from: f32, to: f32) -> String {
    format!(
        "linear-gradient(135deg, {} 0%, {} 100%)",
        rgb.rgba(from),
        rgb.rgba(to)
    )
}
