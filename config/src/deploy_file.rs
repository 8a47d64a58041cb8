use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use utility::envsubst::substitute;
use utility::{Error, Result};

///DEFAULT_FILE is picked up from the working directory when --yaml is not given
pub const DEFAULT_FILE: &str = "deploy.yml";
///FUNCTIONS_DIR holds one directory per function, named after its slug
pub const FUNCTIONS_DIR: &str = "supabase/functions";
pub const ENTRYPOINT_FILE: &str = "index.ts";

/// DeployFile describes where and what to deploy.
/// Every field is optional, command line flags and the environment fill the gaps.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct DeployFile {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub function: FunctionSpec,
    #[serde(default)]
    pub smoke_test: SmokeTest,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Provider {
    ///base url of the platform, e.g. https://<project>.supabase.co
    #[serde(default)]
    pub url: String,
    ///project id, used to derive the url when it is not set
    #[serde(default)]
    pub project: String,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct FunctionSpec {
    #[serde(default)]
    pub name: String,
    ///path of the source file, relative to the working directory
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub verify_jwt: bool,
    ///environment variables written to the function config
    #[serde(default)]
    pub secrets: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct SmokeTest {
    ///raw JSON posted to the deployed function
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub skip: bool,
}

/// parses a deployment file after expanding ${VAR} references with `vars`
pub fn parse_deploy_yaml(data: &str, vars: &HashMap<String, String>) -> Result<DeployFile> {
    let data = substitute(data, vars);
    if data.trim().is_empty() {
        return Ok(DeployFile::default());
    }
    let file: DeployFile = serde_yaml::from_str(data.as_str())?;
    Ok(file)
}

/// reads and parses the deployment file at `file_path`
pub fn parse_deploy_file(file_path: &str, vars: &HashMap<String, String>) -> Result<DeployFile> {
    let path = expand_path(file_path);
    let data = std::fs::read_to_string(&path).map_err(|e| {
        Error::Custom(format!(
            "can't read deployment file {}: {}",
            path.display(),
            e
        ))
    })?;
    parse_deploy_yaml(data.as_str(), vars)
}

/// returns DEFAULT_FILE if it exists in the working directory
pub fn default_deploy_file() -> Option<&'static str> {
    std::fs::metadata(DEFAULT_FILE).map(|_| DEFAULT_FILE).ok()
}

/// source path used when none is configured: supabase/functions/<slug>/index.ts
pub fn default_source_path(slug: &str) -> PathBuf {
    PathBuf::from(FUNCTIONS_DIR).join(slug).join(ENTRYPOINT_FILE)
}

/// expands a leading ~ and normalises `.`/`..` segments
pub fn expand_path(path: &str) -> PathBuf {
    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.into_owned()).clean()
}
