use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    abstract_trait::WithdrawalApiTrait,
    domain::request::{CreateWithdrawalRequest, FindAllWithdrawalsRequest},
    model::{balance::Balance, withdrawal::Withdrawal},
    utils::AppError,
};

use super::parse_response;

/// REST client for the upstream `/withdrawals` and `/admin/withdrawals`
/// resources. No retries: a failed mutation surfaces to the caller as-is.
#[derive(Debug, Clone)]
pub struct WithdrawalApi {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct CreatePayload<'a> {
    user_id: i64,
    amount_kopeks: i64,
    payment_details: &'a str,
}

#[derive(Serialize)]
struct RejectPayload<'a> {
    comment: Option<&'a str>,
}

#[derive(Deserialize)]
struct WithdrawalPage {
    items: Vec<Withdrawal>,
    total: i64,
}

impl WithdrawalApi {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl WithdrawalApiTrait for WithdrawalApi {
    async fn get_balance(&self, user_id: i64) -> Result<Balance, AppError> {
        let response = self
            .http
            .get(self.url(&format!("/users/{user_id}/balance")))
            .send()
            .await?;
        parse_response(response, "Balance").await
    }

    async fn create(
        &self,
        user_id: i64,
        input: &CreateWithdrawalRequest,
    ) -> Result<Withdrawal, AppError> {
        debug!("Creating withdrawal for user_id: {user_id}");

        let response = self
            .http
            .post(self.url("/withdrawals"))
            .json(&CreatePayload {
                user_id,
                amount_kopeks: input.amount_kopeks,
                payment_details: &input.payment_details,
            })
            .send()
            .await?;
        parse_response(response, "Withdrawal").await
    }

    async fn get_all(
        &self,
        filter: &FindAllWithdrawalsRequest,
    ) -> Result<(Vec<Withdrawal>, i64), AppError> {
        let mut request = self
            .http
            .get(self.url("/admin/withdrawals"))
            .query(&[("page", filter.page), ("page_size", filter.page_size)]);

        if let Some(ref status) = filter.status {
            request = request.query(&[("status", status.as_str())]);
        }

        let page: WithdrawalPage = parse_response(request.send().await?, "Withdrawals").await?;
        Ok((page.items, page.total))
    }

    async fn get_by_user(&self, user_id: i64) -> Result<Vec<Withdrawal>, AppError> {
        let response = self
            .http
            .get(self.url(&format!("/users/{user_id}/withdrawals")))
            .send()
            .await?;
        parse_response(response, "Withdrawals").await
    }

    async fn get_detail(&self, id: i64) -> Result<Withdrawal, AppError> {
        let response = self
            .http
            .get(self.url(&format!("/admin/withdrawals/{id}")))
            .send()
            .await?;
        parse_response(response, &format!("Withdrawal {id}")).await
    }

    async fn approve(&self, id: i64) -> Result<Withdrawal, AppError> {
        let response = self
            .http
            .post(self.url(&format!("/admin/withdrawals/{id}/approve")))
            .send()
            .await?;
        parse_response(response, &format!("Withdrawal {id}")).await
    }

    async fn reject(&self, id: i64, comment: Option<&str>) -> Result<Withdrawal, AppError> {
        let response = self
            .http
            .post(self.url(&format!("/admin/withdrawals/{id}/reject")))
            .json(&RejectPayload { comment })
            .send()
            .await?;
        parse_response(response, &format!("Withdrawal {id}")).await
    }

    async fn complete(&self, id: i64) -> Result<Withdrawal, AppError> {
        let response = self
            .http
            .post(self.url(&format!("/admin/withdrawals/{id}/complete")))
            .send()
            .await?;
        parse_response(response, &format!("Withdrawal {id}")).await
    }
}
