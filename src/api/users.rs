//! User API client methods

use crate::api::{ApiClient, DirectoryClient};
use crate::error::{CliError, CliResult};
use crate::models::{
    MfaState, Role, RoleListResponse, SearchRequest, Settings, User, UserListResponse,
};
use async_trait::async_trait;
use reqwest::Method;
use std::borrow::Cow;

impl ApiClient {
    async fn post_search(&self, path: &str, keywords: &str, source: &str) -> CliResult<Vec<User>> {
        let body = SearchRequest { keywords, source };
        let request = self.request(Method::POST, path)?.json(&body);

        let response = Self::check(self.send(request).await?, None).await?;
        let list: UserListResponse = response.json().await?;
        Ok(list.items)
    }
}

/// Percent-encode an identifier as a single path segment.
///
/// Dot segments are rejected because URL parsing collapses them even when encoded.
fn segment(value: &str) -> CliResult<Cow<'_, str>> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(CliError::Validation(format!(
            "Invalid identifier '{value}': not usable in a request path"
        )));
    }
    Ok(urlencoding::encode(value))
}

fn user_path(id: &str, rest: &str) -> CliResult<String> {
    Ok(format!("/users/{}{rest}", segment(id)?))
}

fn role_path(id: &str, role_id: &str) -> CliResult<String> {
    Ok(format!("/users/{}/roles/{}", segment(id)?, segment(role_id)?))
}

fn user_not_found(id: &str) -> Option<String> {
    Some(format!("User not found: {id}"))
}

#[async_trait]
impl DirectoryClient for ApiClient {
    async fn search_users(&self, keywords: &str, source: &str) -> CliResult<Vec<User>> {
        self.post_search("/users/search", keywords, source).await
    }

    async fn get_user(&self, id: &str) -> CliResult<User> {
        let request = self.request(Method::GET, &user_path(id, "")?)?;
        let response = Self::check(self.send(request).await?, user_not_found(id)).await?;
        Ok(response.json().await?)
    }

    async fn get_settings(&self, id: &str) -> CliResult<Settings> {
        let request = self.request(Method::GET, &user_path(id, "/settings")?)?;
        let response = Self::check(self.send(request).await?, user_not_found(id)).await?;
        Ok(response.json().await?)
    }

    async fn update_settings(&self, id: &str, patch: &Settings) -> CliResult<()> {
        let request = self
            .request(Method::PUT, &user_path(id, "/settings")?)?
            .json(patch);
        Self::check(self.send(request).await?, user_not_found(id)).await?;
        Ok(())
    }

    async fn list_roles(&self, id: &str) -> CliResult<Vec<Role>> {
        let request = self.request(Method::GET, &user_path(id, "/roles")?)?;
        let response = Self::check(self.send(request).await?, user_not_found(id)).await?;
        let list: RoleListResponse = response.json().await?;
        Ok(list.items)
    }

    async fn grant_role(&self, id: &str, role_id: &str) -> CliResult<()> {
        let request = self.request(Method::POST, &role_path(id, role_id)?)?;
        let not_found = Some(format!("User {id} or role {role_id} not found"));
        Self::check(self.send(request).await?, not_found).await?;
        Ok(())
    }

    async fn revoke_role(&self, id: &str, role_id: &str) -> CliResult<()> {
        let request = self.request(Method::DELETE, &role_path(id, role_id)?)?;
        let not_found = Some(format!("User {id} or role {role_id} not found"));
        Self::check(self.send(request).await?, not_found).await?;
        Ok(())
    }

    async fn set_mfa(&self, ids: &[String], state: MfaState) -> CliResult<()> {
        let request = self
            .request(Method::POST, &format!("/users/mfa/{}", state.as_path()))?
            .json(ids);
        Self::check(self.send(request).await?, None).await?;
        Ok(())
    }

    async fn search_external(&self, keywords: &str, sources: &str) -> CliResult<Vec<User>> {
        self.post_search("/users/search/external", keywords, sources)
            .await
    }
}
