pub mod branding;
pub mod clock;
pub mod jwt;
pub mod referral;
pub mod storage;
pub mod withdrawal;

pub use self::branding::{
    BrandingApiTrait, BrandingServiceTrait, DynBrandingApi, DynBrandingService,
};
pub use self::clock::{ClockTrait, DynClock};

pub use self::jwt::{DynJwtService, JwtServiceTrait};

pub use self::referral::{DynReferralService, ReferralServiceTrait};

pub use self::storage::{DynKeyValueStore, KeyValueStoreTrait};

pub use self::withdrawal::{
    DynWithdrawalApi, DynWithdrawalService, WithdrawalApiTrait, WithdrawalServiceTrait,
};
