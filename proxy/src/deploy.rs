use crate::client::Client;
use crate::utils::{deployments_path, OCTET_STREAM_CONTENT_TYPE};
use reqwest::Method;
use utility::platform::model::RemoteResponse;
use utility::Result;

impl<'s> Client<'s> {
    /// uploads the function source as a new deployment.
    /// The body is sent as is, no bundling or encoding happens here.
    pub async fn deploy_source(&self, slug: &str, source: &[u8]) -> Result<RemoteResponse> {
        let req = self
            .new_request(
                Method::POST,
                deployments_path(slug).as_str(),
                source.to_vec(),
                Some(OCTET_STREAM_CONTENT_TYPE),
            )?
            .build()?;
        self.do_request(req).await
    }
}
