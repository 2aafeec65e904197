use crate::model::withdrawal::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskPalette {
    pub text_class: &'static str,
    pub background_class: &'static str,
    pub bar_class: &'static str,
}

const RISK_SUCCESS: RiskPalette = RiskPalette {
    text_class: "text-green-400",
    background_class: "bg-green-500/10",
    bar_class: "bg-green-500",
};

const RISK_WARNING: RiskPalette = RiskPalette {
    text_class: "text-yellow-400",
    background_class: "bg-yellow-500/10",
    bar_class: "bg-yellow-500",
};

const RISK_ORANGE: RiskPalette = RiskPalette {
    text_class: "text-orange-400",
    background_class: "bg-orange-500/10",
    bar_class: "bg-orange-500",
};

const RISK_ERROR: RiskPalette = RiskPalette {
    text_class: "text-red-400",
    background_class: "bg-red-500/10",
    bar_class: "bg-red-500",
};

const RISK_NEUTRAL: RiskPalette = RiskPalette {
    text_class: "text-gray-400",
    background_class: "bg-gray-500/10",
    bar_class: "bg-gray-500",
};

/// Half-open score bands, total over every integer. Scores are nominally
/// 0-100 but the upstream does not promise that, so negatives land in
/// the success band and anything >= 70 in the error band.
pub fn risk_color(score: i64) -> RiskPalette {
    if score < 30 {
        RISK_SUCCESS
    } else if score < 50 {
        RISK_WARNING
    } else if score < 70 {
        RISK_ORANGE
    } else {
        RISK_ERROR
    }
}

/// Clamped fill percentage for the score bar. Only the bar clamps;
/// banding above stays unclamped.
pub fn risk_bar_width(score: i64) -> u8 {
    score.clamp(0, 100) as u8
}

/// Lookup for the server-supplied level. Deliberately not derived from
/// `risk_color`; the two axes can disagree and both are shown as given.
pub fn risk_level_color(level: RiskLevel) -> RiskPalette {
    match level {
        RiskLevel::Low => RISK_SUCCESS,
        RiskLevel::Medium => RISK_WARNING,
        RiskLevel::High => RISK_ORANGE,
        RiskLevel::Critical => RISK_ERROR,
        RiskLevel::Unknown => RISK_NEUTRAL,
    }
}
