use crate::client::ClientAuth;

pub mod auth;
pub mod client;
pub mod control_plane;
pub mod deploy;
pub mod functions;
pub mod invoke;
pub mod proxy;
pub mod secret;
pub mod utils;

pub use control_plane::ControlPlane;

#[derive(Clone)]
pub struct TestAuth;

impl ClientAuth for TestAuth {
    fn set(&self, _req: &mut reqwest::RequestBuilder) -> utility::Result<()> {
        Ok(())
    }
}
