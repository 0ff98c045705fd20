use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

/// Default password assigned to the bootstrap `admin` account.
pub const DEFAULT_ADMIN_PASSWORD: &str = "12345";

/// Process configuration, layered from defaults and `ROSTER_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    pub loglevel: String,
    /// JSON array of student records.
    pub data_file: PathBuf,
    /// JSON object of username -> password hash.
    pub users_file: PathBuf,
    pub admin_password: String,
    /// Seed for the session cookie key. A random key is used when unset,
    /// which logs everyone out on restart.
    pub session_secret: Option<String>,
    pub insecure_cookie: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            data_file: PathBuf::from("students.json"),
            users_file: PathBuf::from("users.json"),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            session_secret: None,
            insecure_cookie: false,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("ROSTER_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("FATAL: invalid ROSTER_* configuration"));
