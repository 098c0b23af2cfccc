//! Notes Client
//!
//! An interactive client for a REST notes collection:
//! - Gateway trait over the `/notes` resource, with an HTTP implementation
//! - Lifecycle coordinator keeping the draft, edit target and cached
//!   collection consistent with the server
//! - Self-expiring success/error feedback
//! - Line-oriented shell front-end

pub mod feedback;
pub mod gateway;
pub mod notes;
pub mod shell;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub api: ApiYamlConfig,
    pub feedback: FeedbackYamlConfig,
}

/// Backend configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiYamlConfig {
    pub base_url: String,
}

impl Default for ApiYamlConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
        }
    }
}

/// Feedback configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedbackYamlConfig {
    /// How long success/error messages stay visible
    pub ttl_ms: u64,
}

impl Default for FeedbackYamlConfig {
    fn default() -> Self {
        Self {
            ttl_ms: feedback::DEFAULT_FEEDBACK_TTL.as_millis() as u64,
        }
    }
}

// ============================================================================
// Runtime config (what the application actually uses)
// ============================================================================

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL; the collection lives at `{api_url}/notes`
    pub api_url: String,
    pub feedback_ttl: Duration,
}

impl Config {
    /// Load configuration from an optional YAML file, then override with env vars.
    ///
    /// Priority: env var > YAML > default
    ///
    /// If `yaml_path` is None, tries "notes.yaml" in CWD. A missing file is
    /// not an error.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> Result<Self> {
        let yaml = Self::load_yaml(yaml_path);

        let feedback_ttl_ms = match std::env::var("NOTES_FEEDBACK_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("NOTES_FEEDBACK_MS is not a number: {}", raw))?,
            Err(_) => yaml.feedback.ttl_ms,
        };

        Ok(Self {
            api_url: std::env::var("NOTES_API_URL").unwrap_or(yaml.api.base_url),
            feedback_ttl: Duration::from_millis(feedback_ttl_ms),
        })
    }

    /// Try to load and parse a YAML config file. Returns defaults on any failure.
    fn load_yaml(yaml_path: Option<&Path>) -> YamlConfig {
        let default_path = Path::new("notes.yaml");
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    YamlConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {}, using env vars / defaults",
                    path.display()
                );
                YamlConfig::default()
            }
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<notes::NoteCoordinator>,
}

impl AppState {
    /// Build the HTTP gateway and coordinator, and run the initial fetch.
    ///
    /// A failed initial fetch is reported as feedback, not as an error.
    pub async fn new(config: Config) -> Result<Self> {
        let gateway = Arc::new(
            gateway::HttpNoteGateway::new(&config.api_url)
                .with_context(|| format!("Invalid API url {}", config.api_url))?,
        );
        let feedback = Arc::new(feedback::FeedbackChannel::new(config.feedback_ttl));
        let coordinator = notes::NoteCoordinator::start(gateway, feedback).await;

        Ok(Self {
            coordinator: Arc::new(coordinator),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
