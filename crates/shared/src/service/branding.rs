use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::{
    abstract_trait::{BrandingServiceTrait, DynBrandingApi},
    cache::CacheStore,
    domain::response::{ApiResponse, ErrorResponse, branding::BrandingResponse},
    model::branding::BrandingConfig,
};

const BRANDING_CACHE_KEY: &str = "branding:config";
const BRANDING_CACHE_TTL: Duration = Duration::from_secs(60 * 10);

/// Read-through cache over the upstream branding endpoint: a warm cache
/// answers immediately and refreshes in the background, a cold one
/// fetches and fills. Branding must never block the UI on the upstream.
#[derive(Clone)]
pub struct BrandingService {
    api: DynBrandingApi,
    cache_store: CacheStore,
}

impl std::fmt::Debug for BrandingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrandingService").finish()
    }
}

impl BrandingService {
    pub fn new(api: DynBrandingApi, cache_store: CacheStore) -> Self {
        Self { api, cache_store }
    }

    fn respond(config: BrandingConfig, message: &str) -> ApiResponse<BrandingResponse> {
        ApiResponse {
            status: "success".to_string(),
            message: message.to_string(),
            data: BrandingResponse::from(config),
        }
    }
}

#[async_trait]
impl BrandingServiceTrait for BrandingService {
    async fn get_branding(&self) -> Result<ApiResponse<BrandingResponse>, ErrorResponse> {
        if let Some(cached) = self
            .cache_store
            .get_from_cache::<BrandingConfig>(BRANDING_CACHE_KEY)
        {
            let api = self.api.clone();
            let cache_store = self.cache_store.clone();

            tokio::spawn(async move {
                match api.get_branding().await {
                    Ok(fresh) => {
                        cache_store.set_to_cache(BRANDING_CACHE_KEY, &fresh, BRANDING_CACHE_TTL)
                    }
                    Err(err) => warn!("Background branding refresh failed: {err}"),
                }
            });

            return Ok(Self::respond(cached, "Branding retrieved from cache"));
        }

        match self.api.get_branding().await {
            Ok(config) => {
                info!("Branding fetched from upstream");
                self.cache_store
                    .set_to_cache(BRANDING_CACHE_KEY, &config, BRANDING_CACHE_TTL);
                Ok(Self::respond(config, "Branding retrieved successfully"))
            }
            Err(err) => {
                error!("Failed to fetch branding: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::BrandingApiTrait, cache::MemoryStore, utils::AppError};
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    struct FakeBrandingApi {
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakeBrandingApi {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl BrandingApiTrait for FakeBrandingApi {
        async fn get_branding(&self) -> Result<BrandingConfig, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AppError::Upstream("branding down".into()));
            }
            Ok(BrandingConfig {
                service_name: "Atlas VPN Cabinet".into(),
                logo_url: None,
                accent_color: "cyan".into(),
                animation_enabled: true,
            })
        }
    }

    #[tokio::test]
    async fn cold_cache_fetches_and_fills() {
        let api = FakeBrandingApi::new(false);
        let service = BrandingService::new(api.clone(), CacheStore::new(Arc::new(MemoryStore::new())));

        let response = service.get_branding().await.unwrap();
        assert_eq!(response.data.accent_rgb, [34, 211, 238]);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);

        // Second call answers from cache (plus a background refresh).
        let response = service.get_branding().await.unwrap();
        assert_eq!(response.data.service_name, "Atlas VPN Cabinet");
    }

    #[tokio::test]
    async fn upstream_failure_with_cold_cache_surfaces() {
        let service = BrandingService::new(
            FakeBrandingApi::new(true),
            CacheStore::new(Arc::new(MemoryStore::new())),
        );
        let err = service.get_branding().await.unwrap_err();
        assert_eq!(err.status, "upstream_error");
    }
}
