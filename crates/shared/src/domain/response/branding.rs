use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    model::branding::BrandingConfig,
    theme::{GradientStyle, GradientTone, gradient_style, resolve_color},
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GradientStyleResponse {
    pub background: String,
    pub border: String,
    pub box_shadow: Option<String>,
}

impl From<GradientStyle> for GradientStyleResponse {
    fn from(value: GradientStyle) -> Self {
        GradientStyleResponse {
            background: value.background,
            border: value.border,
            box_shadow: value.box_shadow,
        }
    }
}

/// Branding payload enriched with the resolved accent color and ready
/// card styles for both themes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BrandingResponse {
    pub service_name: String,
    pub logo_url: Option<String>,
    pub accent_color: String,
    pub accent_rgb: [u8; 3],
    pub animation_enabled: bool,
    pub card_style: GradientStyleResponse,
    pub card_style_light: GradientStyleResponse,
}

impl From<BrandingConfig> for BrandingResponse {
    fn from(value: BrandingConfig) -> Self {
        let rgb = resolve_color(&value.accent_color);

        BrandingResponse {
            card_style: gradient_style(&value.accent_color, GradientTone::Soft, false).into(),
            card_style_light: gradient_style(&value.accent_color, GradientTone::Soft, true).into(),
            accent_rgb: [rgb.r, rgb.g, rgb.b],
            service_name: value.service_name,
            logo_url: value.logo_url,
            accent_color: value.accent_color,
            animation_enabled: value.animation_enabled,
        }
    }
}
