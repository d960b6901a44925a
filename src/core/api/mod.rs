mod auth;
mod error;
mod task;
mod user;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

pub use auth::{AuthRepository, Credentials, LoginResponse, Registration};
pub use error::ApiError;
pub use task::{NewTask, Task, TaskRepository, TaskStatus, TaskUpdate, format_due_date};
pub use user::{Role, User, UserRepository};

/// HTTP client for the task service. Cheap to clone; the session token is
/// attached as a bearer credential once set.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: parsed.as_str().trim_end_matches('/').to_owned(),
            token: None,
        })
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{path}", self.base_url));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // Error bodies look like {"message": "..."} when the server has
    // something to say. Anything else falls back to the status code.
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("server returned {}", status.as_u16()));
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn execute<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = check(builder.send().await?).await?;
    Ok(response.json::<T>().await?)
}

/// Like `execute` but discards the response body. Some endpoints answer an
/// empty body or a free-form acknowledgement we do not model.
async fn execute_unit(builder: RequestBuilder) -> Result<(), ApiError> {
    check(builder.send().await?).await?;
    Ok(())
}

impl AuthRepository for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        execute(self.request(Method::POST, "/auth/login").json(credentials)).await
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        execute_unit(self.request(Method::POST, "/auth/register").json(registration)).await
    }
}

impl UserRepository for ApiClient {
    async fn list_members(&self) -> Result<Vec<User>, ApiError> {
        let envelope: user::UsersEnvelope = execute(self.request(Method::GET, "/auth/users")).await?;
        Ok(envelope
            .users
            .into_iter()
            .filter(|user| user.role == Role::Member)
            .collect())
    }
}

impl TaskRepository for ApiClient {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        execute(self.request(Method::GET, "/tasks")).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        execute(self.request(Method::POST, "/tasks").json(task)).await
    }

    async fn update_task(&self, id: &str, update: &TaskUpdate) -> Result<Task, ApiError> {
        execute(
            self.request(Method::PUT, &format!("/tasks/{id}"))
                .json(update),
        )
        .await
    }

    async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        execute_unit(self.request(Method::DELETE, &format!("/tasks/{id}"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn rejects_garbage_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::BaseUrl(_))
        ));
    }
}
