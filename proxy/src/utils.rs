///control plane collection of all functions of a project
pub const FUNCTIONS_PATH: &str = "/functions/v1/functions";
///public endpoint prefix under which deployed functions are served
pub const INVOKE_PATH: &str = "/functions/v1";
pub const DEPLOYMENTS_SEGMENT: &str = "deployments";
pub const CONFIG_SEGMENT: &str = "config";

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";

/// /functions/v1/functions/<slug>
pub fn function_path(slug: &str) -> String {
    format!("{}/{}", FUNCTIONS_PATH, slug)
}

/// /functions/v1/functions/<slug>/deployments
pub fn deployments_path(slug: &str) -> String {
    format!("{}/{}", function_path(slug), DEPLOYMENTS_SEGMENT)
}

/// /functions/v1/functions/<slug>/config
pub fn config_path(slug: &str) -> String {
    format!("{}/{}", function_path(slug), CONFIG_SEGMENT)
}

/// /functions/v1/<slug>
pub fn invoke_path(slug: &str) -> String {
    format!("{}/{}", INVOKE_PATH, slug)
}

/// joins `path` onto the path of `base`, keeping any prefix the base url already has
pub fn join_url(base: &reqwest::Url, path: &str) -> reqwest::Url {
    let mut endpoint = base.clone();
    let joined = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    endpoint.set_path(joined.as_str());
    endpoint
}
