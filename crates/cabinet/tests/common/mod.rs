use async_trait::async_trait;
use axum::Router;
use chrono::{TimeZone, Utc};
use miniapp_cabinet::{handler::AppRouter, state::AppState};
use shared::{
    abstract_trait::{
        BrandingApiTrait, DynBrandingApi, DynBrandingService, DynClock, DynJwtService,
        DynReferralService, DynWithdrawalApi, DynWithdrawalService, JwtServiceTrait,
        WithdrawalApiTrait,
    },
    cache::{CacheStore, MemoryStore},
    config::{JwtConfig, SystemClock},
    domain::request::{CreateWithdrawalRequest, FindAllWithdrawalsRequest},
    model::{
        balance::Balance,
        branding::BrandingConfig,
        withdrawal::{RiskLevel, Withdrawal, WithdrawalStatus},
    },
    service::{BrandingService, ReferralService, WithdrawalService},
    utils::{AppError, DependenciesInject},
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

pub struct FakeWithdrawalApi {
    records: Mutex<HashMap<i64, Withdrawal>>,
    next_id: Mutex<i64>,
}

impl FakeWithdrawalApi {
    pub fn new(seed: Vec<Withdrawal>) -> Self {
        let next_id = seed.iter().map(|w| w.id).max().unwrap_or(0) + 1;
        FakeWithdrawalApi {
            records: Mutex::new(seed.into_iter().map(|w| (w.id, w)).collect()),
            next_id: Mutex::new(next_id),
        }
    }
}

#[async_trait]
impl WithdrawalApiTrait for FakeWithdrawalApi {
    async fn get_balance(&self, user_id: i64) -> Result<Balance, AppError> {
        Ok(Balance {
            user_id,
            balance_kopeks: 250_000,
        })
    }

    async fn create(
        &self,
        user_id: i64,
        input: &CreateWithdrawalRequest,
    ) -> Result<Withdrawal, AppError> {
        let mut next_id = self.next_id.lock().unwrap();
        let withdrawal = Withdrawal {
            id: *next_id,
            user_id,
            status: WithdrawalStatus::Pending,
            amount_kopeks: input.amount_kopeks,
            risk_score: 10,
            risk_level: RiskLevel::Low,
            payment_details: input.payment_details.clone(),
            admin_comment: None,
            created_at: Utc::now(),
            processed_at: None,
        };
        *next_id += 1;
        self.records
            .lock()
            .unwrap()
            .insert(withdrawal.id, withdrawal.clone());
        Ok(withdrawal)
    }

    async fn get_all(
        &self,
        filter: &FindAllWithdrawalsRequest,
    ) -> Result<(Vec<Withdrawal>, i64), AppError> {
        let records = self.records.lock().unwrap();
        let mut items: Vec<Withdrawal> = records
            .values()
            .filter(|w| match filter.status.as_deref() {
                Some(slug) => w.status.as_slug() == slug,
                None => true,
            })
            .cloned()
            .collect();
        items.sort_by_key(|w| w.id);
        let total = items.len() as i64;
        Ok((items, total))
    }

    async fn get_by_user(&self, user_id: i64) -> Result<Vec<Withdrawal>, AppError> {
        let records = self.records.lock().unwrap();
        let mut items: Vec<Withdrawal> = records
            .values()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by_key(|w| w.id);
        Ok(items)
    }

    async fn get_detail(&self, id: i64) -> Result<Withdrawal, AppError> {
        self.records
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Withdrawal {id} not found")))
    }

    async fn approve(&self, id: i64) -> Result<Withdrawal, AppError> {
        let mut records = self.records.lock().unwrap();
        let withdrawal = records
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Withdrawal {id} not found")))?;
        withdrawal.status = WithdrawalStatus::Approved;
        withdrawal.processed_at = Some(Utc::now());
        Ok(withdrawal.clone())
    }

    async fn reject(&self, id: i64, comment: Option<&str>) -> Result<Withdrawal, AppError> {
        let mut records = self.records.lock().unwrap();
        let withdrawal = records
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Withdrawal {id} not found")))?;
        withdrawal.status = WithdrawalStatus::Rejected;
        withdrawal.admin_comment = comment.map(str::to_owned);
        withdrawal.processed_at = Some(Utc::now());
        Ok(withdrawal.clone())
    }

    async fn complete(&self, id: i64) -> Result<Withdrawal, AppError> {
        let mut records = self.records.lock().unwrap();
        let withdrawal = records
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Withdrawal {id} not found")))?;
        withdrawal.status = WithdrawalStatus::Completed;
        Ok(withdrawal.clone())
    }
}

pub struct FakeBrandingApi;

#[async_trait]
impl BrandingApiTrait for FakeBrandingApi {
    async fn get_branding(&self) -> Result<BrandingConfig, AppError> {
        Ok(BrandingConfig {
            service_name: "Test VPN".to_string(),
            logo_url: None,
            accent_color: "cyan".to_string(),
            animation_enabled: true,
        })
    }
}

pub fn seeded_withdrawal() -> Withdrawal {
    Withdrawal {
        id: 7,
        user_id: 2,
        status: WithdrawalStatus::Pending,
        amount_kopeks: 150_000,
        risk_score: 72,
        risk_level: RiskLevel::Low,
        payment_details: "4276 1234 5678 9000".to_string(),
        admin_comment: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        processed_at: None,
    }
}

pub struct TestApp {
    pub router: Router,
    pub admin_token: String,
    pub user_token: String,
}

pub fn create_test_app(seed: Vec<Withdrawal>) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(SystemClock::new()) as DynClock;
    let cache = CacheStore::new(store.clone());

    let withdrawal_api = Arc::new(FakeWithdrawalApi::new(seed)) as DynWithdrawalApi;
    let branding_api = Arc::new(FakeBrandingApi) as DynBrandingApi;

    let di_container = DependenciesInject {
        withdrawal_service: Arc::new(WithdrawalService::new(withdrawal_api, cache.clone(), "ru"))
            as DynWithdrawalService,
        referral_service: Arc::new(ReferralService::new(store, clock)) as DynReferralService,
        branding_service: Arc::new(BrandingService::new(branding_api, cache))
            as DynBrandingService,
    };

    let jwt_config = Arc::new(JwtConfig::new("integration-test-secret")) as DynJwtService;
    let admin_token = jwt_config.generate_token(1, "admin").unwrap();
    let user_token = jwt_config.generate_token(2, "user").unwrap();

    let state = AppState {
        di_container,
        jwt_config,
    };

    TestApp {
        router: AppRouter::build(state),
        admin_token,
        user_token,
    }
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
