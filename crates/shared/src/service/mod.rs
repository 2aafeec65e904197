pub mod branding;
pub mod referral;
pub mod withdrawal;

pub use self::branding::BrandingService;
pub use self::referral::ReferralService;
pub use self::withdrawal::WithdrawalService;
