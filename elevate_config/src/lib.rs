use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{builder::DefaultState, ConfigBuilder, Environment, File, FileFormat, Map};
use elevate_models::{email_address::EmailAddress, Sensitive};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Additional config files, separated like `PATH`.
pub const CONFIG_PATH_ENV: &str = "ELEVATE_CONFIG";
pub const SENDGRID_API_KEY_ENV: &str = "SENDGRID_API_KEY";

const ENV_PREFIX: &str = "ELEVATE";
const ENV_SEPARATOR: &str = "__";

/// Load the config from the default config file, any files listed in
/// `ELEVATE_CONFIG`, and `ELEVATE__*` environment variables.
///
/// The SendGrid API key is taken from `SENDGRID_API_KEY`. A missing key is
/// not an error here; sending mail will fail instead.
pub fn load() -> anyhow::Result<Config> {
    let env = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect();
    load_from_env(env)
}

/// Same as [`load`], but reads the environment from `env` instead of the
/// process.
pub fn load_from_env(env: Map<String, String>) -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Some(extra) = env.get(CONFIG_PATH_ENV) {
        paths.extend(std::env::split_paths(extra));
    }
    let sendgrid_api_key = env.get(SENDGRID_API_KEY_ENV).cloned();

    builder(&paths, &[])?
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .source(Some(env)),
        )
        .set_override_option("email.sendgrid_api_key", sendgrid_api_key)?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

/// Load the config from the given files, followed by inline toml overrides.
///
/// Environment variables are ignored.
pub fn load_with_overrides(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    builder(paths, overrides)?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn builder(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<ConfigBuilder<DefaultState>> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    Ok(overrides.iter().fold(builder, |builder, content| {
        builder.add_source(File::from_str(content, FileFormat::Toml))
    }))
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub form: FormConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub from: EmailAddress,
    pub sendgrid_api_key: Option<Sensitive<String>>,
    pub sendgrid_endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient: EmailAddress,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    pub relay_url: Url,
}
