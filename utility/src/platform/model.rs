use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CreateFunctionRequest is the body sent to the control plane to register a new function.
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct CreateFunctionRequest {
    // Name is the display name of the function
    pub name: String,
    // Slug is the identifier used in every function url
    pub slug: String,
    #[serde(default)]
    pub definition: FunctionDefinition,
    // VerifyJwt makes the platform reject invocations without a valid JWT
    #[serde(default)]
    pub verify_jwt: bool,
}

/// FunctionDefinition carries the optional bundling metadata of a function.
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct FunctionDefinition {
    // ImportMap is serialised as null when absent, the platform expects the key
    pub import_map: Option<String>,
}

impl CreateFunctionRequest {
    pub fn new(slug: &str, verify_jwt: bool) -> CreateFunctionRequest {
        CreateFunctionRequest {
            name: slug.to_string(),
            slug: slug.to_string(),
            definition: FunctionDefinition::default(),
            verify_jwt,
        }
    }
}

/// EnvConfig maps environment variable names to the values set on the function.
pub type EnvConfig = BTreeMap<String, String>;

/// RemoteResponse is the status and body text of a control plane or function call.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: String,
}

impl RemoteResponse {
    pub fn new(status: u16, body: impl Into<String>) -> RemoteResponse {
        RemoteResponse {
            status,
            body: body.into(),
        }
    }

    ///true when the status is one of `accepted`
    pub fn is_one_of(&self, accepted: &[u16]) -> bool {
        accepted.contains(&self.status)
    }
}

/// FunctionPresence is the outcome of an existence check.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FunctionPresence {
    /// the control plane answered 200
    Exists,
    /// the control plane answered 404
    Missing,
    /// any other status, or no status at all when the request failed.
    /// The function may exist, the lookup just could not tell.
    Unknown(Option<u16>),
}

impl FunctionPresence {
    pub fn from_status(status: u16) -> FunctionPresence {
        match status {
            200 => FunctionPresence::Exists,
            404 => FunctionPresence::Missing,
            other => FunctionPresence::Unknown(Some(other)),
        }
    }

    pub fn exists(&self) -> bool {
        *self == FunctionPresence::Exists
    }
}

/// default body posted to a deployed function to check it answers
pub const DEFAULT_SMOKE_TEST_PAYLOAD: &str = r#"{"update_id":123,"callback_query":null}"#;
