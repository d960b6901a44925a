use serde::{Deserialize, Serialize};

use crate::core::api::{error::ApiError, user::Role};

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

pub trait AuthRepository {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>>;
    fn register(&self, registration: &Registration) -> impl Future<Output = Result<(), ApiError>>;
}
