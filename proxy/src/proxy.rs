use reqwest::Client;
use std::time::Duration;
use utility::Result;

///makes a HTTP client, no timeout is set unless one is given
pub fn make_http_client(timeout: Option<Duration>, tls_insecure: bool) -> Result<Client> {
    let mut client = reqwest::ClientBuilder::new();

    if let Some(time) = timeout {
        client = client.timeout(time);
    }
    if tls_insecure {
        client = client.danger_accept_invalid_certs(true);
    }

    Ok(client.build()?)
}
