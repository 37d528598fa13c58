//! HTTP API client.
//!
//! Thin wrapper over the server routes. Authenticated calls take the raw
//! token; pairing the client with a [`super::SessionCache`] is up to the
//! caller.

use reqwest::{Client, RequestBuilder, StatusCode};
use uuid::Uuid;

use crate::backend::content::models::{Comment, Post, PostDetail};
use crate::shared::types::{AuthRequest, ErrorBody, NewComment, NewPost, TokenResponse};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server rejected the request ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn expect<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(ClientError::Api { status, message });
        }
        Ok(response.json().await?)
    }

    fn bearer(request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
    }

    /// Create an account and receive a session token.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ClientError> {
        let body = AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.http.post(self.url("/register")).json(&body).send().await?;
        Self::expect(response).await
    }

    /// Exchange credentials for a session token.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ClientError> {
        let body = AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.http.post(self.url("/login")).json(&body).send().await?;
        Self::expect(response).await
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        let response = self.http.get(self.url("/posts")).send().await?;
        Self::expect(response).await
    }

    pub async fn get_post(&self, post: Uuid) -> Result<PostDetail, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/posts/{post}")))
            .send()
            .await?;
        Self::expect(response).await
    }

    pub async fn create_post(
        &self,
        token: &str,
        title: &str,
        link: Option<String>,
    ) -> Result<Post, ClientError> {
        let body = NewPost {
            title: title.to_string(),
            link,
        };
        let request = self.http.post(self.url("/posts")).json(&body);
        let response = Self::bearer(request, token).send().await?;
        Self::expect(response).await
    }

    pub async fn upvote_post(&self, token: &str, post: Uuid) -> Result<Post, ClientError> {
        let request = self.http.put(self.url(&format!("/posts/{post}/upvote")));
        let response = Self::bearer(request, token).send().await?;
        Self::expect(response).await
    }

    pub async fn add_comment(
        &self,
        token: &str,
        post: Uuid,
        body: &str,
    ) -> Result<Comment, ClientError> {
        let payload = NewComment {
            body: body.to_string(),
        };
        let request = self
            .http
            .post(self.url(&format!("/posts/{post}/comments")))
            .json(&payload);
        let response = Self::bearer(request, token).send().await?;
        Self::expect(response).await
    }

    pub async fn upvote_comment(
        &self,
        token: &str,
        post: Uuid,
        comment: Uuid,
    ) -> Result<Comment, ClientError> {
        let request = self
            .http
            .put(self.url(&format!("/posts/{post}/comments/{comment}/upvote")));
        let response = Self::bearer(request, token).send().await?;
        Self::expect(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.url("/posts"), "http://localhost:3000/posts");
    }
}
