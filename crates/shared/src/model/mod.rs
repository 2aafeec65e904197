pub mod balance;
pub mod branding;
pub mod referral;
pub mod withdrawal;
