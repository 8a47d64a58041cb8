use crate::utils::join_url;
use reqwest::Url;
use utility::platform::model::RemoteResponse;
use utility::{Error, Result};

///an API client for the function control plane of one project
pub struct Client<'s> {
    pub(crate) http_client: reqwest::Client,
    ///ClientAuth a type implementing ClientAuth interface for client authentication
    pub client_auth: Box<&'s dyn ClientAuth>,
    ///base url of the platform, e.g. https://<project>.supabase.co
    pub base_url: Url,
}

///ClientAuth an interface for client authentication.
// to add authentication to the client implement this interface
pub trait ClientAuth {
    fn set(&self, req: &mut reqwest::RequestBuilder) -> Result<()>;
}

impl<'s> Client<'s> {
    /// initializes a new API client
    pub fn new(auth: Box<&'s dyn ClientAuth>, base_url: &str) -> Result<Client<'s>> {
        let url = base_url.trim_end_matches('/');
        let url = Url::parse(url)
            .map_err(|e| Error::Custom(format!("invalid platform URL {}: {}", url, e)))?;

        Ok(Client {
            http_client: reqwest::Client::new(),
            client_auth: auth,
            base_url: url,
        })
    }

    ///replaces the underlying HTTP client, e.g. one built by make_http_client
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Client<'s> {
        self.http_client = http_client;
        self
    }

    ///create a new authenticated HTTP request to `path` under the base url.
    ///The body is attached, even when empty, only if a content type is given
    pub fn new_request(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<reqwest::RequestBuilder> {
        let endpoint = join_url(&self.base_url, path);

        let mut req = self.http_client.request(method, endpoint);
        if let Some(content_type) = content_type {
            req = req.header("Content-Type", content_type).body(body);
        }
        self.client_auth.set(&mut req)?;

        Ok(req)
    }

    ///perform an HTTP request and read the whole response
    pub(crate) async fn do_request(&self, req: reqwest::Request) -> Result<RemoteResponse> {
        let url = req.url().to_string();
        let resp = self.http_client.execute(req).await.map_err(|e| {
            Error::Custom(format!(
                "can't reach the control plane on URL {}\nand debug reason {}",
                url, e
            ))
        })?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| {
            Error::Custom(format!(
                "can't read response from URL {}\nand debug reason {}",
                url, e
            ))
        })?;
        Ok(RemoteResponse::new(status, body))
    }

    ///public url at which the deployed function answers
    pub fn function_url(&self, slug: &str) -> String {
        join_url(&self.base_url, crate::utils::invoke_path(slug).as_str()).to_string()
    }
}
