use crate::client::Client;
use crate::utils::{function_path, FUNCTIONS_PATH, JSON_CONTENT_TYPE};
use reqwest::Method;
use utility::platform::model::{CreateFunctionRequest, RemoteResponse};
use utility::Result;

impl<'s> Client<'s> {
    ///looks a function up by slug, 200 means it exists
    pub async fn get_function(&self, slug: &str) -> Result<RemoteResponse> {
        let req = self
            .new_request(Method::GET, function_path(slug).as_str(), vec![], None)?
            .build()?;
        self.do_request(req).await
    }

    ///registers a new function, the platform answers 200 or 201 on success
    pub async fn post_function(&self, request: &CreateFunctionRequest) -> Result<RemoteResponse> {
        let body = serde_json::to_vec(request)?;
        let req = self
            .new_request(Method::POST, FUNCTIONS_PATH, body, Some(JSON_CONTENT_TYPE))?
            .build()?;
        self.do_request(req).await
    }
}
