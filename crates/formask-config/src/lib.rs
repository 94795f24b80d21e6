use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use formask_core::{CoreError, FieldSpec, MaskKind};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "formask";
const CONFIG_FILENAME: &str = "form.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fields: Vec<FieldSpec>,
}

impl Default for AppConfig {
    fn default() -> Self {
        // The three fields of the original tutorial form.
        Self {
            fields: vec![
                FieldSpec {
                    label: "Name".to_string(),
                    mask: MaskKind::Uppercase,
                },
                FieldSpec {
                    label: "Surname".to_string(),
                    mask: MaskKind::Capitalize,
                },
                FieldSpec {
                    label: "Phone".to_string(),
                    mask: MaskKind::PhoneUs,
                },
            ],
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config defines no fields")]
    NoFields,
    #[error("invalid field {index}: {source}")]
    InvalidField {
        index: usize,
        #[source]
        source: CoreError,
    },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    fields: Option<Vec<FieldFile>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldFile {
    label: String,
    mask: String,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let Some(raw_fields) = parsed.fields else {
        return Ok(AppConfig::default());
    };

    if raw_fields.is_empty() {
        return Err(ConfigError::NoFields);
    }

    let mut fields = Vec::with_capacity(raw_fields.len());
    for (index, raw) in raw_fields.into_iter().enumerate() {
        let mask = MaskKind::parse(&raw.mask)
            .map_err(|source| ConfigError::InvalidField { index, source })?;
        let spec = FieldSpec::new(raw.label, mask)
            .map_err(|source| ConfigError::InvalidField { index, source })?;
        fields.push(spec);
    }

    Ok(AppConfig { fields })
}
