use crate::client::Client;
use crate::utils::{config_path, JSON_CONTENT_TYPE};
use reqwest::Method;
use utility::platform::model::{EnvConfig, RemoteResponse};
use utility::Result;

impl<'s> Client<'s> {
    /// patches the environment of a function with `env`, the platform answers 200 or 204
    pub async fn update_env(&self, slug: &str, env: &EnvConfig) -> Result<RemoteResponse> {
        let body = serde_json::to_vec(env)?;
        let req = self
            .new_request(Method::PATCH, config_path(slug).as_str(), body, Some(JSON_CONTENT_TYPE))?
            .build()?;
        self.do_request(req).await
    }
}
