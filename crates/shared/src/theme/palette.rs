use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

/// Fallback for unrecognized tokens.
pub const DEFAULT_COLOR: Rgb = Rgb::new(34, 211, 238);

const PALETTE: &[(&str, Rgb)] = &[
    ("cyan", Rgb::new(34, 211, 238)),
    ("blue", Rgb::new(59, 130, 246)),
    ("indigo", Rgb::new(99, 102, 241)),
    ("violet", Rgb::new(139, 92, 246)),
    ("purple", Rgb::new(168, 85, 247)),
    ("pink", Rgb::new(236, 72, 153)),
    ("red", Rgb::new(239, 68, 68)),
    ("orange", Rgb::new(249, 115, 22)),
    ("amber", Rgb::new(245, 158, 11)),
    ("yellow", Rgb::new(234, 179, 8)),
    ("lime", Rgb::new(132, 204, 22)),
    ("green", Rgb::new(34, 197, 94)),
    ("emerald", Rgb::new(16, 185, 129)),
    ("teal", Rgb::new(20, 184, 166)),
];

/// Resolves a palette name or a 6-digit hex token (`#RRGGBB` or
/// `RRGGBB`, case-insensitive). Anything else resolves to
/// [`DEFAULT_COLOR`]; there is deliberately no partial parse and no
/// 3-digit shorthand.
pub fn resolve_color(token: &str) -> Rgb {
    if let Some(&(_, rgb)) = PALETTE.iter().find(|(name, _)| *name == token) {
        return rgb;
    }

    parse_hex6(token).unwrap_or(DEFAULT_COLOR)
}

fn parse_hex6(token: &str) -> Option<Rgb> {
    let digits = token.strip_prefix('#').unwrap_or(token);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}
