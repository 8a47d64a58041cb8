pub(crate) const URL_ENVIRONMENT: &str = "FNDEPLOY_URL";
pub(crate) const PROJECT_ENVIRONMENT: &str = "FNDEPLOY_PROJECT";
pub(crate) const SERVICE_ROLE_KEY_ENVIRONMENT: &str = "FNDEPLOY_SERVICE_ROLE_KEY";

///platform host every project lives under, https://<project>.<PLATFORM_DOMAIN>
pub(crate) const PLATFORM_DOMAIN: &str = "supabase.co";

///first non empty value, in the order flag, deployment file, environment
pub(crate) fn first_set<'a>(argument: &'a str, yaml: &'a str, environment: &'a str) -> &'a str {
    vec![argument, yaml, environment]
        .into_iter()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or_default()
}

///resolves the platform base url.
///An explicit url wins, otherwise it is derived from the project id.
pub(crate) fn get_base_url(
    argument_url: &str,
    yaml_url: &str,
    environment_url: &str,
    project: &str,
) -> Option<String> {
    let url = first_set(argument_url, yaml_url, environment_url);
    let url = if !url.is_empty() {
        url.to_string()
    } else if !project.trim().is_empty() {
        format!("https://{}.{}", project.trim(), PLATFORM_DOMAIN)
    } else {
        return None;
    };

    let url = url.trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Some(url.to_string())
    } else {
        Some(format!("https://{}", url))
    }
}
