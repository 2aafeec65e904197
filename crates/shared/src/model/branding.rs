use serde::{Deserialize, Serialize};

/// Upstream branding/animation settings. Served from cache; staleness
/// of a few minutes is acceptable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandingConfig {
    pub service_name: String,
    pub logo_url: Option<String>,
    /// Palette name or 6-digit hex; resolved through the theme palette
    /// with the usual cyan fallback.
    pub accent_color: String,
    pub animation_enabled: bool,
}
