use std::{path::PathBuf, str::FromStr};

use crate::server::{
    error::{config::ConfigError, AppError},
    model::record::RecordScope,
};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_NEIS_BASE_URL: &str = "https://open.neis.go.kr/hub";
const DEFAULT_SCHEDULE_YEAR: i32 = 2024;
const DEFAULT_TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";
const DEFAULT_UPLOAD_ROOT: &str = ".";

/// Connection URLs of the logical databases. Each falls back to `DATABASE_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseUrls {
    pub student: String,
    pub personal: String,
    pub diary: String,
    pub image: String,
    pub directory: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Files below `root/uploads` and `root/profileimg`, served by the router.
    Local { root: PathBuf },
    /// S3-compatible object store.
    Object {
        endpoint: String,
        bucket: String,
        token: Option<String>,
        public_url: Option<String>,
    },
}

pub struct Config {
    pub port: u16,
    pub database_urls: DatabaseUrls,

    pub neis_api_key: String,
    pub neis_base_url: String,
    /// Department name sent with timetable queries, for schools that need one.
    pub neis_department: Option<String>,
    /// Academic year used when the caller gives no calendar or timetable window.
    pub schedule_year: i32,

    pub identity_audience: String,
    pub identity_tokeninfo_url: String,

    pub storage: StorageConfig,
    pub record_scope: RecordScope,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let vars = Vars(lookup);

        let database_url = vars.required("DATABASE_URL")?;
        let database_urls = DatabaseUrls {
            student: vars
                .optional("STUDENT_DATABASE_URL")
                .unwrap_or_else(|| database_url.clone()),
            personal: vars
                .optional("PERSONAL_DATABASE_URL")
                .unwrap_or_else(|| database_url.clone()),
            diary: vars
                .optional("DIARY_DATABASE_URL")
                .unwrap_or_else(|| database_url.clone()),
            image: vars
                .optional("IMAGE_DATABASE_URL")
                .unwrap_or_else(|| database_url.clone()),
            directory: vars
                .optional("DIRECTORY_DATABASE_URL")
                .unwrap_or_else(|| database_url.clone()),
        };

        let storage = match vars.optional("STORAGE_BACKEND").as_deref() {
            None | Some("local") => StorageConfig::Local {
                root: PathBuf::from(
                    vars.optional("UPLOAD_ROOT")
                        .unwrap_or_else(|| DEFAULT_UPLOAD_ROOT.to_string()),
                ),
            },
            Some("object") => StorageConfig::Object {
                endpoint: vars.required("OBJECT_STORAGE_ENDPOINT")?,
                bucket: vars.required("OBJECT_STORAGE_BUCKET")?,
                token: vars.optional("OBJECT_STORAGE_TOKEN"),
                public_url: vars.optional("OBJECT_STORAGE_PUBLIC_URL"),
            },
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "STORAGE_BACKEND".to_string(),
                    value: other.to_string(),
                }
                .into())
            }
        };

        Ok(Self {
            port: vars.parsed("PORT", DEFAULT_PORT)?,
            database_urls,
            neis_api_key: vars.required("NEIS_API_KEY")?,
            neis_base_url: vars
                .optional("NEIS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_NEIS_BASE_URL.to_string()),
            neis_department: vars.optional("NEIS_DEPARTMENT"),
            schedule_year: vars.parsed("SCHEDULE_YEAR", DEFAULT_SCHEDULE_YEAR)?,
            identity_audience: vars.required("IDENTITY_AUDIENCE")?,
            identity_tokeninfo_url: vars
                .optional("IDENTITY_TOKENINFO_URL")
                .unwrap_or_else(|| DEFAULT_TOKENINFO_URL.to_string()),
            storage,
            record_scope: vars.parsed("RECORD_SCOPE", RecordScope::default())?,
        })
    }
}

struct Vars<F>(F);

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    fn optional(&self, name: &str) -> Option<String> {
        (self.0)(name).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn parsed<T: FromStr>(&self, name: &str, default: T) -> Result<T, ConfigError> {
        match self.optional(name) {
            None => Ok(default),
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value,
                }),
        }
    }
}
