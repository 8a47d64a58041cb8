use crate::client::Client;
use crate::control_plane::ControlPlane;
use crate::utils::JSON_CONTENT_TYPE;
use async_trait::async_trait;
use reqwest::Method;
use utility::platform::model::{CreateFunctionRequest, EnvConfig, RemoteResponse};
use utility::{Error, Result};

impl<'s> Client<'s> {
    /// invokes the deployed function with a JSON payload.
    /// The control plane credential is not sent, functions do their own auth.
    pub async fn invoke_function(&self, slug: &str, payload: &str) -> Result<RemoteResponse> {
        serde_json::from_str::<serde_json::Value>(payload)
            .map_err(|e| Error::Custom(format!("the test payload must be valid JSON: {}", e)))?;

        let url = self.function_url(slug);
        let req = self
            .http_client
            .request(Method::POST, url.as_str())
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(payload.to_string())
            .build()?;
        self.do_request(req).await
    }
}

#[async_trait(?Send)]
impl<'s> ControlPlane for Client<'s> {
    async fn check_exists(&self, slug: &str) -> Result<RemoteResponse> {
        self.get_function(slug).await
    }

    async fn create_function(&self, request: &CreateFunctionRequest) -> Result<RemoteResponse> {
        self.post_function(request).await
    }

    async fn upload_source(&self, slug: &str, source: &[u8]) -> Result<RemoteResponse> {
        self.deploy_source(slug, source).await
    }

    async fn configure(&self, slug: &str, env: &EnvConfig) -> Result<RemoteResponse> {
        self.update_env(slug, env).await
    }

    async fn invoke(&self, slug: &str, payload: &str) -> Result<RemoteResponse> {
        self.invoke_function(slug, payload).await
    }

    fn function_url(&self, slug: &str) -> String {
        Client::function_url(self, slug)
    }
}
