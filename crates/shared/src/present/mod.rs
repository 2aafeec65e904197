pub mod risk;
pub mod status;

pub use self::risk::{RiskPalette, risk_bar_width, risk_color, risk_level_color};
pub use self::status::{StatusBadge, WithdrawalAction, available_actions, status_badge};
