mod referral;
mod withdrawal;

pub use self::referral::CaptureReferralRequest;
pub use self::withdrawal::{
    CreateWithdrawalRequest, FindAllWithdrawalsRequest, RejectWithdrawalRequest,
};
