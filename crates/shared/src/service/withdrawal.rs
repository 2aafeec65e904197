use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

use crate::{
    abstract_trait::{DynWithdrawalApi, WithdrawalServiceTrait},
    cache::CacheStore,
    domain::{
        request::{CreateWithdrawalRequest, FindAllWithdrawalsRequest},
        response::{
            ApiResponse, ApiResponsePagination, ErrorResponse,
            balance::BalanceResponse,
            pagination::Pagination,
            withdrawal::{WithdrawalDetailResponse, WithdrawalResponse},
        },
    },
    model::withdrawal::{Withdrawal, WithdrawalStatus},
    utils::AppError,
};

const DETAIL_CACHE_TTL: Duration = Duration::from_secs(60 * 5);

#[derive(Clone)]
pub struct WithdrawalService {
    api: DynWithdrawalApi,
    cache_store: CacheStore,
    language: String,
}

impl std::fmt::Debug for WithdrawalService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WithdrawalService")
            .field("api", &"DynWithdrawalApi")
            .field("language", &self.language)
            .finish()
    }
}

fn detail_cache_key(id: i64) -> String {
    format!("withdrawal:id={id}")
}

impl WithdrawalService {
    pub fn new(api: DynWithdrawalApi, cache_store: CacheStore, language: &str) -> Self {
        Self {
            api,
            cache_store,
            language: language.to_string(),
        }
    }

    fn build_detail(&self, withdrawal: Withdrawal) -> WithdrawalDetailResponse {
        WithdrawalDetailResponse::build(withdrawal, &self.language)
    }

    /// Caches the post-transition record so the detail view reflects the
    /// new status immediately, without waiting out the old entry.
    fn cache_detail(&self, detail: &WithdrawalDetailResponse) {
        self.cache_store
            .set_to_cache(&detail_cache_key(detail.withdrawal.id), detail, DETAIL_CACHE_TTL);
    }

    async fn apply_transition<F>(
        &self,
        id: i64,
        action: &str,
        call: F,
    ) -> Result<ApiResponse<WithdrawalDetailResponse>, ErrorResponse>
    where
        F: std::future::Future<Output = Result<Withdrawal, AppError>> + Send,
    {
        match call.await {
            Ok(withdrawal) => {
                info!("Withdrawal {id} {action}: status is now {}", withdrawal.status);

                let detail = self.build_detail(withdrawal);
                self.cache_detail(&detail);

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: format!("Withdrawal {action} successfully"),
                    data: detail,
                })
            }
            Err(err) => {
                error!("Failed to {action} withdrawal {id}: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }
}

#[async_trait]
impl WithdrawalServiceTrait for WithdrawalService {
    async fn get_balance(
        &self,
        user_id: i64,
    ) -> Result<ApiResponse<BalanceResponse>, ErrorResponse> {
        match self.api.get_balance(user_id).await {
            Ok(balance) => Ok(ApiResponse {
                status: "success".to_string(),
                message: "Balance retrieved successfully".to_string(),
                data: BalanceResponse::from(balance),
            }),
            Err(err) => {
                error!("Failed to retrieve balance for user {user_id}: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn create_withdrawal(
        &self,
        user_id: i64,
        input: &CreateWithdrawalRequest,
    ) -> Result<ApiResponse<WithdrawalResponse>, ErrorResponse> {
        if let Err(errors) = input.validate() {
            return Err(ErrorResponse::from(AppError::ValidationError(errors)));
        }

        match self.api.create(user_id, input).await {
            Ok(withdrawal) => {
                info!(
                    "Withdrawal created for user {user_id}: id {}, {} kopeks",
                    withdrawal.id, withdrawal.amount_kopeks
                );

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Withdrawal created successfully".to_string(),
                    data: WithdrawalResponse::from(withdrawal),
                })
            }
            Err(err) => {
                error!("Failed to create withdrawal for user {user_id}: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn get_user_withdrawals(
        &self,
        user_id: i64,
    ) -> Result<ApiResponse<Vec<WithdrawalResponse>>, ErrorResponse> {
        match self.api.get_by_user(user_id).await {
            Ok(withdrawals) => {
                info!("Found {} withdrawals for user {user_id}", withdrawals.len());

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Withdrawals retrieved successfully".to_string(),
                    data: withdrawals.into_iter().map(WithdrawalResponse::from).collect(),
                })
            }
            Err(err) => {
                error!("Failed to retrieve withdrawals for user {user_id}: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn get_withdrawals(
        &self,
        req: &FindAllWithdrawalsRequest,
    ) -> Result<ApiResponsePagination<Vec<WithdrawalResponse>>, ErrorResponse> {
        if let Some(ref status) = req.status {
            if WithdrawalStatus::from_slug(status).is_none() {
                return Err(ErrorResponse {
                    status: "validation_error".to_string(),
                    message: format!("Unknown status filter: {status}"),
                });
            }
        }

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };
        let filter = FindAllWithdrawalsRequest {
            page,
            page_size,
            status: req.status.clone(),
        };

        let (withdrawals, total_items) = self
            .api
            .get_all(&filter)
            .await
            .map_err(ErrorResponse::from)?;

        info!("Found {} withdrawals", withdrawals.len());

        let total_pages = (total_items as f64 / page_size as f64).ceil() as i32;

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Withdrawals retrieved successfully".to_string(),
            data: withdrawals.into_iter().map(WithdrawalResponse::from).collect(),
            pagination: Pagination {
                page,
                page_size,
                total_items,
                total_pages,
            },
        })
    }

    async fn get_withdrawal(
        &self,
        id: i64,
    ) -> Result<ApiResponse<WithdrawalDetailResponse>, ErrorResponse> {
        let cache_key = detail_cache_key(id);

        if let Some(cached) = self
            .cache_store
            .get_from_cache::<WithdrawalDetailResponse>(&cache_key)
        {
            info!("Found withdrawal {id} in cache");

            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Withdrawal retrieved from cache".to_string(),
                data: cached,
            });
        }

        match self.api.get_detail(id).await {
            Ok(withdrawal) => {
                let detail = self.build_detail(withdrawal);
                self.cache_detail(&detail);

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Withdrawal retrieved successfully".to_string(),
                    data: detail,
                })
            }
            Err(err) => {
                error!("Failed to retrieve withdrawal {id}: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn approve_withdrawal(
        &self,
        id: i64,
    ) -> Result<ApiResponse<WithdrawalDetailResponse>, ErrorResponse> {
        self.apply_transition(id, "approved", self.api.approve(id)).await
    }

    async fn reject_withdrawal(
        &self,
        id: i64,
        comment: Option<&str>,
    ) -> Result<ApiResponse<WithdrawalDetailResponse>, ErrorResponse> {
        self.apply_transition(id, "rejected", self.api.reject(id, comment))
            .await
    }

    async fn complete_withdrawal(
        &self,
        id: i64,
    ) -> Result<ApiResponse<WithdrawalDetailResponse>, ErrorResponse> {
        self.apply_transition(id, "completed", self.api.complete(id)).await
    }
}
