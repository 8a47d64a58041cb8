use crate::client::{Client, ClientAuth};
use reqwest::RequestBuilder;
use utility::{Error, Result};

///bearer token, the service role key of the project
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: &str) -> Result<BearerToken> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::Custom(
                "a service role key is required, pass --token or set FNDEPLOY_SERVICE_ROLE_KEY"
                    .to_string(),
            ));
        }
        Ok(BearerToken {
            token: token.to_string(),
        })
    }

    pub fn get_client(&self, base_url: &str) -> Result<Client> {
        Client::new(Box::new(self), base_url)
    }
}

impl ClientAuth for BearerToken {
    fn set(&self, req: &mut RequestBuilder) -> Result<()> {
        let req2 = req
            .try_clone()
            .ok_or(Error::Custom(format!("can't clone request :{:?}", req)))?;
        *req = req2.bearer_auth(self.token.as_str());
        Ok(())
    }
}

///no credential, used for calls that go to the deployed function rather than the control plane
pub struct Anonymous;

impl ClientAuth for Anonymous {
    fn set(&self, _req: &mut RequestBuilder) -> Result<()> {
        Ok(())
    }
}

impl Anonymous {
    pub fn get_client(&self, base_url: &str) -> Result<Client> {
        Client::new(Box::new(self), base_url)
    }
}
