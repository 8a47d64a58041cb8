use async_trait::async_trait;
use utility::platform::model::{CreateFunctionRequest, EnvConfig, FunctionPresence, RemoteResponse};
use utility::Result;

/// ControlPlane is the set of remote calls a deployment is made of.
///
/// Every method resolves to the status and body of the response whatever the
/// status is; `Err` is reserved for requests that got no response at all.
#[async_trait(?Send)]
pub trait ControlPlane {
    /// GET the function resource
    async fn check_exists(&self, slug: &str) -> Result<RemoteResponse>;

    /// POST a new function to the functions collection
    async fn create_function(&self, request: &CreateFunctionRequest) -> Result<RemoteResponse>;

    /// POST the source bytes, unchanged, as a new deployment
    async fn upload_source(&self, slug: &str, source: &[u8]) -> Result<RemoteResponse>;

    /// PATCH the environment of the function
    async fn configure(&self, slug: &str, env: &EnvConfig) -> Result<RemoteResponse>;

    /// POST `payload` to the deployed function itself
    async fn invoke(&self, slug: &str, payload: &str) -> Result<RemoteResponse>;

    /// public url of the deployed function
    fn function_url(&self, slug: &str) -> String;

    /// classifies the existence check; a failed request is Unknown(None)
    async fn presence(&self, slug: &str) -> FunctionPresence {
        match self.check_exists(slug).await {
            Ok(resp) => FunctionPresence::from_status(resp.status),
            Err(_) => FunctionPresence::Unknown(None),
        }
    }
}
