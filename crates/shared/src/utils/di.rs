use std::sync::Arc;

use crate::{
    abstract_trait::{
        DynBrandingApi, DynBrandingService, DynClock, DynKeyValueStore, DynReferralService,
        DynWithdrawalApi, DynWithdrawalService,
    },
    api::{BrandingApi, WithdrawalApi},
    cache::CacheStore,
    config::{Config, SystemClock},
    service::{BrandingService, ReferralService, WithdrawalService},
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub withdrawal_service: DynWithdrawalService,
    pub referral_service: DynReferralService,
    pub branding_service: DynBrandingService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("withdrawal_service", &"DynWithdrawalService")
            .field("referral_service", &"DynReferralService")
            .field("branding_service", &"DynBrandingService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(config: &Config, store: DynKeyValueStore) -> Self {
        let http = reqwest::Client::new();
        let clock = Arc::new(SystemClock::new()) as DynClock;
        let cache = CacheStore::new(store.clone());

        let withdrawal_api =
            Arc::new(WithdrawalApi::new(http.clone(), &config.backend_api_url))
                as DynWithdrawalApi;
        let branding_api =
            Arc::new(BrandingApi::new(http, &config.backend_api_url)) as DynBrandingApi;

        let withdrawal_service = Arc::new(WithdrawalService::new(
            withdrawal_api,
            cache.clone(),
            &config.default_language,
        )) as DynWithdrawalService;

        let referral_service =
            Arc::new(ReferralService::new(store, clock)) as DynReferralService;

        let branding_service =
            Arc::new(BrandingService::new(branding_api, cache)) as DynBrandingService;

        Self {
            withdrawal_service,
            referral_service,
            branding_service,
        }
    }
}
