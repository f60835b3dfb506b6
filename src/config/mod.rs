//! Configuration management

use serde::Deserialize;

use crate::auth::PublicAuthConfig;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub auth: AuthProviderConfig,
}

fn default_port() -> u16 {
    8080
}

/// External auth provider settings.
///
/// Everything here ends up in the browser, so only the public anon key
/// belongs in it, never a service-role key.
#[derive(Debug, Default, Deserialize)]
pub struct AuthProviderConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
    /// Magic-link landing URL; the browser falls back to the page origin
    pub email_redirect_to: Option<String>,
    /// Google Identity Services client id for the sign-in widget
    pub google_client_id: Option<String>,
}

impl AuthProviderConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }

    pub fn public(&self) -> PublicAuthConfig {
        PublicAuthConfig {
            auth_url: self.url.clone(),
            anon_key: self.anon_key.clone(),
            email_redirect_to: self.email_redirect_to.clone(),
            google_client_id: self.google_client_id.clone(),
        }
    }
}

/// Get config directory (LANDING_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("LANDING_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support/restaurant-landing");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("restaurant-landing");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/restaurant-landing");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("restaurant-landing");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config, ::config::ConfigError> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        // Optional config.{toml,json,yaml} in the config dir
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // LANDING_PORT, LANDING_AUTH__URL, LANDING_AUTH__ANON_KEY, ...
        .add_source(
            ::config::Environment::with_prefix("LANDING")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Precedence for the port: LANDING_PORT > PORT > config file > default
    if std::env::var("LANDING_PORT").is_err() {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        }
    }

    // Names used by the provider's own tooling, only when not set explicitly
    if std::env::var("LANDING_AUTH__URL").is_err() {
        if let Ok(url) = std::env::var("SUPABASE_URL") {
            builder = builder.set_override("auth.url", url)?;
        }
    }
    if std::env::var("LANDING_AUTH__ANON_KEY").is_err() {
        if let Ok(key) = std::env::var("SUPABASE_ANON_KEY") {
            builder = builder.set_override("auth.anon_key", key)?;
        }
    }

    let config: Config = builder.build()?.try_deserialize()?;
    if !config.auth.is_configured() {
        tracing::warn!("Auth provider not configured; sign-in will be unavailable");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: &[&str] = &[
        "LANDING_CONFIG_DIR",
        "LANDING_PORT",
        "PORT",
        "LANDING_AUTH__URL",
        "LANDING_AUTH__ANON_KEY",
        "LANDING_AUTH__GOOGLE_CLIENT_ID",
        "SUPABASE_URL",
        "SUPABASE_ANON_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_sources() {
        clear_env();
        env::set_var("LANDING_CONFIG_DIR", "/tmp/landing-test-nonexistent");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 8080);
        assert!(!config.auth.is_configured());
        assert_eq!(config.auth.public(), PublicAuthConfig::default());
    }

    #[test]
    #[serial]
    fn test_prefixed_env_overrides() {
        clear_env();
        env::set_var("LANDING_CONFIG_DIR", "/tmp/landing-test-nonexistent");
        env::set_var("LANDING_PORT", "9100");
        env::set_var("PORT", "9200");
        env::set_var("LANDING_AUTH__URL", "https://abcd.supabase.co");
        env::set_var("LANDING_AUTH__ANON_KEY", "anon");
        env::set_var("LANDING_AUTH__GOOGLE_CLIENT_ID", "client.apps.googleusercontent.com");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 9100);
        assert!(config.auth.is_configured());
        assert_eq!(
            config.auth.google_client_id.as_deref(),
            Some("client.apps.googleusercontent.com")
        );
    }

    #[test]
    #[serial]
    fn test_legacy_port_and_provider_env() {
        clear_env();
        env::set_var("LANDING_CONFIG_DIR", "/tmp/landing-test-nonexistent");
        env::set_var("PORT", "9300");
        env::set_var("SUPABASE_URL", "https://wxyz.supabase.co");
        env::set_var("SUPABASE_ANON_KEY", "legacy-anon");

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 9300);
        assert_eq!(config.auth.url, "https://wxyz.supabase.co");
        assert_eq!(config.auth.anon_key, "legacy-anon");
    }

    #[test]
    #[serial]
    fn test_config_file_in_config_dir() {
        clear_env();
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("config.toml"),
            "port = 7000\n\n[auth]\nurl = \"https://file.supabase.co\"\nanon_key = \"file-anon\"\nemail_redirect_to = \"https://shere.example/\"\n",
        )
        .expect("write config");
        env::set_var("LANDING_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");
        clear_env();

        assert_eq!(config.port, 7000);
        let public = config.auth.public();
        assert_eq!(public.auth_url, "https://file.supabase.co");
        assert_eq!(public.email_redirect_to.as_deref(), Some("https://shere.example/"));
    }
}
