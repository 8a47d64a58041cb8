use crate::orchestrator::DeployPlan;
use crate::priority::{
    first_set, get_base_url, PROJECT_ENVIRONMENT, SERVICE_ROLE_KEY_ENVIRONMENT, URL_ENVIRONMENT,
};
use clap::ArgMatches;
use config::deploy_file::{
    default_deploy_file, default_source_path, expand_path, parse_deploy_file, DeployFile,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use utility::platform::model::{EnvConfig, DEFAULT_SMOKE_TEST_PAYLOAD};
use utility::{Error, Result, DEFAULT_FUNCTION_NAME, DEFAULT_SECRET_NAME};

lazy_static! {
    static ref SLUG: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap();
    static ref ENV_NAME: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Settings is what a command resolved from its flags, the deployment file and the environment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub base_url: String,
    pub token: String,
    pub slug: String,
    pub source: PathBuf,
    pub verify_jwt: bool,
    pub env: EnvConfig,
    pub smoke_test_payload: Option<String>,
    pub tls_insecure: bool,
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn plan(&self) -> DeployPlan {
        DeployPlan {
            platform: self.base_url.clone(),
            slug: self.slug.clone(),
            source: self.source.clone(),
            verify_jwt: self.verify_jwt,
            env: self.env.clone(),
            smoke_test_payload: self.smoke_test_payload.clone(),
        }
    }
}

/// SettingsBuilder resolves settings from explicit inputs so resolution is testable
/// without a command line or a real environment.
pub struct SettingsBuilder<'a> {
    pub args: &'a ArgMatches<'a>,
    pub file: DeployFile,
    pub vars: HashMap<String, String>,
}

impl<'a> SettingsBuilder<'a> {
    /// loads the deployment file from --yaml, or ./deploy.yml when present
    pub fn from_args(args: &'a ArgMatches<'a>) -> Result<SettingsBuilder<'a>> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        let yaml_file = args.value_of("yaml").or_else(|| default_deploy_file());
        let file = match yaml_file {
            Some(path) => parse_deploy_file(path, &vars)?,
            None => DeployFile::default(),
        };
        Ok(SettingsBuilder { args, file, vars })
    }

    fn var(&self, key: &str) -> &str {
        self.vars.get(key).map(String::as_str).unwrap_or_default()
    }

    fn arg(&self, key: &str) -> &str {
        self.args.value_of(key).unwrap_or_default()
    }

    pub fn base_url(&self) -> Result<String> {
        let project = first_set(
            self.arg("project"),
            self.file.provider.project.as_str(),
            self.var(PROJECT_ENVIRONMENT),
        );
        let url = get_base_url(
            self.arg("url"),
            self.file.provider.url.as_str(),
            self.var(URL_ENVIRONMENT),
            project,
        )
        .ok_or(Error::Custom(format!(
            "no platform URL, pass --url or --project, or set {} or {}",
            URL_ENVIRONMENT, PROJECT_ENVIRONMENT
        )))?;
        url::Url::parse(url.as_str())?;
        Ok(url)
    }

    pub fn token(&self) -> String {
        first_set(self.arg("token"), "", self.var(SERVICE_ROLE_KEY_ENVIRONMENT)).to_string()
    }

    pub fn slug(&self) -> Result<String> {
        let slug = first_set(self.arg("NAME"), self.file.function.name.as_str(), "");
        let slug = if slug.is_empty() {
            DEFAULT_FUNCTION_NAME
        } else {
            slug
        };
        validate_slug(slug)?;
        Ok(slug.to_string())
    }

    pub fn source(&self, slug: &str) -> PathBuf {
        let source = first_set(self.arg("source"), self.file.function.source.as_str(), "");
        if source.is_empty() {
            default_source_path(slug)
        } else {
            expand_path(source)
        }
    }

    /// deployment file secrets, overridden by --secret flags.
    /// When neither gives any, the default secret is taken from the environment.
    /// A deployment without any secret is rejected
    pub fn env(&self) -> Result<EnvConfig> {
        let mut env = EnvConfig::new();
        for (key, value) in &self.file.function.secrets {
            validate_env_name(key)?;
            env.insert(key.clone(), value.clone());
        }
        let flags: Vec<&str> = self.args.values_of("secret").unwrap_or_default().collect();
        env.extend(parse_secret_pairs(&flags)?);

        if env.is_empty() {
            if let Some(value) = self.vars.get(DEFAULT_SECRET_NAME) {
                if !value.is_empty() {
                    env.insert(DEFAULT_SECRET_NAME.to_string(), value.clone());
                }
            }
        }
        if env.is_empty() {
            return Err(Error::Custom(format!(
                "no secret to set on the function, pass --secret KEY=VALUE, \
                 list it under function.secrets or set {}",
                DEFAULT_SECRET_NAME
            )));
        }
        Ok(env)
    }

    pub fn smoke_test_payload(&self) -> Result<Option<String>> {
        if self.args.is_present("skip-test") || self.file.smoke_test.skip {
            return Ok(None);
        }
        let payload = first_set(self.arg("data"), self.file.smoke_test.payload.as_str(), "");
        let payload = if payload.is_empty() {
            DEFAULT_SMOKE_TEST_PAYLOAD
        } else {
            payload
        };
        serde_json::from_str::<serde_json::Value>(payload)
            .map_err(|e| Error::Custom(format!("the test payload must be valid JSON: {}", e)))?;
        Ok(Some(payload.to_string()))
    }

    pub fn timeout(&self) -> Result<Option<Duration>> {
        match self.args.value_of("timeout") {
            Some(value) => parse_duration::parse(value)
                .map(Some)
                .map_err(|e| Error::Custom(format!("invalid --timeout {}: {}", value, e))),
            None => Ok(None),
        }
    }

    /// resolves everything the deploy command needs
    pub fn build(&self) -> Result<Settings> {
        let slug = self.slug()?;
        Ok(Settings {
            base_url: self.base_url()?,
            token: self.token(),
            source: self.source(slug.as_str()),
            verify_jwt: self.args.is_present("verify-jwt") || self.file.function.verify_jwt,
            env: self.env()?,
            smoke_test_payload: self.smoke_test_payload()?,
            tls_insecure: self.args.is_present("tls-no-verify"),
            timeout: self.timeout()?,
            slug,
        })
    }
}

pub(crate) fn validate_slug(slug: &str) -> Result<()> {
    if SLUG.is_match(slug) {
        Ok(())
    } else {
        Err(Error::Custom(format!(
            "invalid function name {}, it must start with a letter or digit \
             and only contain letters, digits, '-' or '_'",
            slug
        )))
    }
}

pub(crate) fn validate_env_name(name: &str) -> Result<()> {
    if ENV_NAME.is_match(name) {
        Ok(())
    } else {
        Err(Error::Custom(format!(
            "invalid secret name {}, it must be a valid environment variable name",
            name
        )))
    }
}

/// parses KEY=VALUE pairs, the value may itself contain '='
pub(crate) fn parse_secret_pairs(pairs: &[&str]) -> Result<EnvConfig> {
    let mut env = EnvConfig::new();
    for pair in pairs {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or_default();
        let value = parts.next().ok_or(Error::Custom(format!(
            "the --secret flag must take the form of KEY=VALUE, got {}",
            pair
        )))?;
        validate_env_name(key)?;
        env.insert(key.to_string(), value.to_string());
    }
    Ok(env)
}
