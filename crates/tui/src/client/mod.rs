//! HTTP client for the hosted backend: the auth endpoints and the
//! `transactions` / `categories` tables exposed through its REST table API.

use std::fmt;

use api_types::{
    auth::{PasswordGrant, Session, User},
    category::{CategoryInsert, CategoryRename, CategoryRow},
    error::ApiErrorBody,
    transaction::{TransactionInsert, TransactionRow},
};
use engine::{DateRange, format_date};
use reqwest::{Method, RequestBuilder, Response, Url};
use uuid::Uuid;

use crate::error::{AppError, Result};

const TRANSACTIONS: &str = "rest/v1/transactions";
const CATEGORIES: &str = "rest/v1/categories";

#[derive(Debug)]
pub enum ClientError {
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict(String),
    Validation(String),
    Server(String),
    Transport(reqwest::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => f.write_str("unauthorized"),
            Self::Forbidden => f.write_str("forbidden"),
            Self::NotFound => f.write_str("not found"),
            Self::Conflict(msg) => write!(f, "conflict: {msg}"),
            Self::Validation(msg) => write!(f, "validation: {msg}"),
            Self::Server(msg) => write!(f, "server: {msg}"),
            Self::Transport(err) => write!(f, "transport: {err}"),
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    api_key: String,
    access_token: Option<String>,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|err| {
            AppError::Config(::config::ConfigError::Message(format!(
                "invalid base_url: {err}"
            )))
        })?;
        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            access_token: None,
            http: reqwest::Client::new(),
        })
    }

    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))
    }

    /// Every request carries the public key; table requests are authorized
    /// with the user's token once signed in.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(bearer)
    }

    async fn send(request: RequestBuilder) -> ClientResult<Response> {
        let res = request.send().await.map_err(ClientError::Transport)?;
        if res.status().is_success() {
            return Ok(res);
        }

        let status = res.status();
        let body = res
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.text())
            .unwrap_or_else(|| "unknown error".to_string());
        tracing::warn!("request failed with {status}: {body}");

        let err = match status.as_u16() {
            401 => ClientError::Unauthorized,
            403 => ClientError::Forbidden,
            404 => ClientError::NotFound,
            409 => ClientError::Conflict(body),
            400 | 422 => ClientError::Validation(body),
            _ => ClientError::Server(body),
        };
        Err(err)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Session> {
        let mut endpoint = self.endpoint("auth/v1/token")?;
        endpoint.set_query(Some("grant_type=password"));
        let payload = PasswordGrant {
            email: email.to_string(),
            password: password.to_string(),
        };

        let res = Self::send(self.request(Method::POST, endpoint).json(&payload)).await?;
        res.json::<Session>().await.map_err(ClientError::Transport)
    }

    pub async fn current_user(&self) -> ClientResult<User> {
        let endpoint = self.endpoint("auth/v1/user")?;
        let res = Self::send(self.request(Method::GET, endpoint)).await?;
        res.json::<User>().await.map_err(ClientError::Transport)
    }

    pub async fn sign_out(&self) -> ClientResult<()> {
        let endpoint = self.endpoint("auth/v1/logout")?;
        Self::send(self.request(Method::POST, endpoint)).await?;
        Ok(())
    }

    /// Rows dated inside `range`, newest first.
    pub async fn transactions_in_range(&self, range: &DateRange) -> ClientResult<Vec<TransactionRow>> {
        let endpoint = self.endpoint(TRANSACTIONS)?;
        let query = [
            ("select", "*".to_string()),
            ("date", format!("gte.{}", format_date(range.start()))),
            ("date", format!("lte.{}", format_date(range.end()))),
            ("order", "date.desc".to_string()),
        ];

        let res = Self::send(self.request(Method::GET, endpoint).query(&query)).await?;
        res.json::<Vec<TransactionRow>>()
            .await
            .map_err(ClientError::Transport)
    }

    /// Inserts one row and returns it as stored.
    pub async fn transaction_insert(&self, row: &TransactionInsert) -> ClientResult<Vec<TransactionRow>> {
        let endpoint = self.endpoint(TRANSACTIONS)?;
        let request = self
            .request(Method::POST, endpoint)
            .header("Prefer", "return=representation")
            .json(&[row]);

        let res = Self::send(request).await?;
        res.json::<Vec<TransactionRow>>()
            .await
            .map_err(ClientError::Transport)
    }

    pub async fn transaction_delete(&self, id: Uuid) -> ClientResult<()> {
        let endpoint = self.endpoint(TRANSACTIONS)?;
        let request = self
            .request(Method::DELETE, endpoint)
            .query(&[("id", format!("eq.{id}"))]);
        Self::send(request).await?;
        Ok(())
    }

    pub async fn categories_list(&self) -> ClientResult<Vec<CategoryRow>> {
        let endpoint = self.endpoint(CATEGORIES)?;
        let request = self
            .request(Method::GET, endpoint)
            .query(&[("select", "*"), ("order", "name.asc")]);

        let res = Self::send(request).await?;
        res.json::<Vec<CategoryRow>>()
            .await
            .map_err(ClientError::Transport)
    }

    pub async fn categories_insert(&self, rows: &[CategoryInsert]) -> ClientResult<()> {
        let endpoint = self.endpoint(CATEGORIES)?;
        Self::send(self.request(Method::POST, endpoint).json(rows)).await?;
        Ok(())
    }

    pub async fn category_rename(&self, id: Uuid, name: &str) -> ClientResult<()> {
        let endpoint = self.endpoint(CATEGORIES)?;
        let request = self
            .request(Method::PATCH, endpoint)
            .query(&[("id", format!("eq.{id}"))])
            .json(&CategoryRename {
                name: name.to_string(),
            });
        Self::send(request).await?;
        Ok(())
    }

    pub async fn category_delete(&self, id: Uuid) -> ClientResult<()> {
        let endpoint = self.endpoint(CATEGORIES)?;
        let request = self
            .request(Method::DELETE, endpoint)
            .query(&[("id", format!("eq.{id}"))]);
        Self::send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
mod tests;
