//! Server settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Address the server binds to when `CHAT_HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port the server binds to when `CHAT_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Listener configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CHAT")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl ServerSettings {
    /// Return the configured host, falling back to [`DEFAULT_HOST`].
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port; [`DEFAULT_PORT`] unless overridden.
    pub const fn port(&self) -> u16 {
        self.port
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("chat-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([("CHAT_HOST", None::<String>), ("CHAT_PORT", None::<String>)]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("CHAT_HOST", Some("127.0.0.1".to_owned())),
            ("CHAT_PORT", Some("9090".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 9090);
    }

    #[rstest]
    fn host_falls_back_when_only_the_port_is_set() {
        let _guard = lock_env([
            ("CHAT_HOST", None::<String>),
            ("CHAT_PORT", Some("7000".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), 7000);
    }
}
