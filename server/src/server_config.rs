use std::net::SocketAddr;

use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_server.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub move_log_path: String,
    /// Directory served under `/ui`, if any.
    pub static_files_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            move_log_path: "tictactoe.txt".to_string(),
            static_files_path: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.bind_address
            .parse()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.bind_address, e))
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.socket_addr()?;
        if self.move_log_path.trim().is_empty() {
            return Err("Move log path must not be empty".to_string());
        }
        if let Some(path) = &self.static_files_path
            && path.trim().is_empty()
        {
            return Err("Static files path must not be empty when set".to_string());
        }
        Ok(())
    }
}
