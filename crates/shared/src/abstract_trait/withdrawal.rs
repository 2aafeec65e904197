use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        request::{CreateWithdrawalRequest, FindAllWithdrawalsRequest},
        response::{
            ApiResponse, ApiResponsePagination, ErrorResponse,
            balance::BalanceResponse,
            withdrawal::{WithdrawalDetailResponse, WithdrawalResponse},
        },
    },
    model::{balance::Balance, withdrawal::Withdrawal},
    utils::AppError,
};

pub type DynWithdrawalApi = Arc<dyn WithdrawalApiTrait + Send + Sync>;
pub type DynWithdrawalService = Arc<dyn WithdrawalServiceTrait + Send + Sync>;

/// The upstream billing API. It is the sole writer of withdrawal
/// records; the cabinet only reads them and requests transitions.
#[async_trait]
pub trait WithdrawalApiTrait {
    async fn get_balance(&self, user_id: i64) -> Result<Balance, AppError>;
    async fn create(
        &self,
        user_id: i64,
        input: &CreateWithdrawalRequest,
    ) -> Result<Withdrawal, AppError>;
    async fn get_all(
        &self,
        filter: &FindAllWithdrawalsRequest,
    ) -> Result<(Vec<Withdrawal>, i64), AppError>;
    async fn get_by_user(&self, user_id: i64) -> Result<Vec<Withdrawal>, AppError>;
    async fn get_detail(&self, id: i64) -> Result<Withdrawal, AppError>;
    async fn approve(&self, id: i64) -> Result<Withdrawal, AppError>;
    async fn reject(&self, id: i64, comment: Option<&str>) -> Result<Withdrawal, AppError>;
    async fn complete(&self, id: i64) -> Result<Withdrawal, AppError>;
}

#[async_trait]
pub trait WithdrawalServiceTrait {
    async fn get_balance(&self, user_id: i64)
    -> Result<ApiResponse<BalanceResponse>, ErrorResponse>;
    async fn create_withdrawal(
        &self,
        user_id: i64,
        input: &CreateWithdrawalRequest,
    ) -> Result<ApiResponse<WithdrawalResponse>, ErrorResponse>;
    async fn get_user_withdrawals(
        &self,
        user_id: i64,
    ) -> Result<ApiResponse<Vec<WithdrawalResponse>>, ErrorResponse>;
    async fn get_withdrawals(
        &self,
        req: &FindAllWithdrawalsRequest,
    ) -> Result<ApiResponsePagination<Vec<WithdrawalResponse>>, ErrorResponse>;
    async fn get_withdrawal(
        &self,
        id: i64,
    ) -> Result<ApiResponse<WithdrawalDetailResponse>, ErrorResponse>;
    async fn approve_withdrawal(
        &self,
        id: i64,
    ) -> Result<ApiResponse<WithdrawalDetailResponse>, ErrorResponse>;
    async fn reject_withdrawal(
        &self,
        id: i64,
        comment: Option<&str>,
    ) -> Result<ApiResponse<WithdrawalDetailResponse>, ErrorResponse>;
    async fn complete_withdrawal(
        &self,
        id: i64,
    ) -> Result<ApiResponse<WithdrawalDetailResponse>, ErrorResponse>;
}
