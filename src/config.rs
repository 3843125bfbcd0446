use tracing::info;

/// Default backend endpoint. The base URL points at the persons collection;
/// every API path is resolved relative to it.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/Person_backend/api/persons";

/// Application configuration
/// In debug builds: loads from .env file, `PERSONNEL_API_BASE_URL` overrides
/// In release builds: uses the compiled-in default
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the persons REST API
    pub api_base_url: String,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            // Try to load .env file
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            }

            Self::from_env()
        }

        #[cfg(not(debug_assertions))]
        {
            info!("Config: API base URL {}", DEFAULT_API_BASE_URL);
            Self {
                api_base_url: DEFAULT_API_BASE_URL.to_string(),
            }
        }
    }

    /// Load configuration from environment variables (dev mode)
    #[cfg(debug_assertions)]
    fn from_env() -> Self {
        let api_base_url = std::env::var("PERSONNEL_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        info!("Config: API base URL {}", api_base_url);

        Self { api_base_url }
    }
}
