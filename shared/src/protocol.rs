use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path, relative to the API base URL.
    fn path(&self) -> String;
}

/// Multipart upload endpoint; not JSON, so it has no `ApiRequest` impl.
pub const UPLOAD_PATH: &str = "/upload/";

// =========================================================
// Request Definitions
// =========================================================

/// List all published articles. The backend shape varies, so the response stays raw JSON.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListArticlesRequest;

impl ApiRequest for ListArticlesRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/dashboard/list".to_string()
    }
}

/// Fetch one article by its content id
#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleByIdRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for ArticleByIdRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/dashboard/article/{}", self.id)
    }
}

/// Generic `{ "message": ... }` body returned by the account endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Create an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl ApiRequest for SignupRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/signup/".to_string()
    }
}

/// Sign in and obtain a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/login".to_string()
    }
}

/// Ask the backend to send password reset instructions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

impl ApiRequest for ResetPasswordRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/reset-password/".to_string()
    }
}

/// Score a headline. The response fields are loosely typed and normalized client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub headline: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ApiRequest for VerifyRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/verify".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_path_embeds_id() {
        let req = ArticleByIdRequest {
            id: "QmHash".to_string(),
        };
        assert_eq!(req.path(), "/dashboard/article/QmHash");
    }

    #[test]
    fn verify_request_omits_missing_url() {
        let req = VerifyRequest {
            headline: "h".to_string(),
            description: String::new(),
            url: None,
        };
        let body = serde_json::to_value(&req).unwrap();
        assert!(body.get("url").is_none());
        assert_eq!(body["headline"], "h");
    }
}
