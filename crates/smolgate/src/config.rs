use std::{env, fs};

use janusllm::generation::GenerationDefaults;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
pub const DEFAULT_MODEL_PATH: &str = "model/SmolLM2-135M-Instruct-Q4_K_M.gguf";
pub const DEFAULT_CONTEXT_SIZE: u32 = 2048;

const CONFIG_PATH_ENV: &str = "SMOLGATE_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "./smolgate.yaml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default = "default_context_size")]
    pub context_size: u32,
    #[serde(default)]
    pub generation: GenerationDefaults,
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_model_path() -> String {
    DEFAULT_MODEL_PATH.to_string()
}

fn default_context_size() -> u32 {
    DEFAULT_CONTEXT_SIZE
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: default_bind_address(),
            model_path: default_model_path(),
            context_size: default_context_size(),
            generation: GenerationDefaults::default(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the YAML file named by
    /// `SMOLGATE_CONFIG_PATH` (default `./smolgate.yaml`), falling back
    /// to built-in defaults when the file is absent, then applies
    /// environment overrides on top.
    pub fn load() -> Result<Self, serde_yaml::Error> {
        let config_path =
            env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = match fs::read_to_string(&config_path) {
            Ok(contents) => serde_yaml::from_str(&contents)?,
            Err(_) => ServerConfig::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Environment knobs kept for compatibility with earlier
    /// deployments: MODEL_PATH, CONTEXT_SIZE, MAX_TOKENS_DEFAULT,
    /// TEMPERATURE_DEFAULT, and PORT / BIND_ADDRESS.
    fn apply_env_overrides(&mut self) {
        if let Ok(addr) = env::var("BIND_ADDRESS") {
            self.bind_address = addr;
        } else if let Ok(port) = env::var("PORT") {
            if port.parse::<u16>().is_ok() {
                self.bind_address = format!("0.0.0.0:{port}");
            }
        }
        if let Ok(path) = env::var("MODEL_PATH") {
            self.model_path = path;
        }
        if let Some(size) = env::var("CONTEXT_SIZE").ok().and_then(|v| v.parse().ok()) {
            self.context_size = size;
        }
        if let Some(max_tokens) = env::var("MAX_TOKENS_DEFAULT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.generation.max_tokens = max_tokens;
        }
        if let Some(temperature) = env::var("TEMPERATURE_DEFAULT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.generation.temperature = temperature;
        }
    }
}
