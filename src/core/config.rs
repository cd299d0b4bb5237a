//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling
//! `dotenvy::dotenv()`. Everything is optional: the landing page serves fine
//! without any of these set, deployments that need them just export the
//! variables.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// External booking/demo-call URL used by the CTA buttons.
    /// Example: https://cal.com/ringline/demo
    pub booking_url: Option<String>,

    /// Contact address shown in the footer.
    pub contact_email: Option<String>,

    /// Analytics site id, when analytics are enabled for this deployment.
    pub analytics_id: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from a `.env` file.
    pub fn from_env() -> Self {
        Self {
            booking_url: std::env::var("RINGLINE_BOOKING_URL").ok(),
            contact_email: std::env::var("RINGLINE_CONTACT_EMAIL").ok(),
            analytics_id: std::env::var("RINGLINE_ANALYTICS_ID").ok(),
        }
    }

    pub fn has_booking_url(&self) -> bool {
        self.booking_url.is_some()
    }

    pub fn has_contact_email(&self) -> bool {
        self.contact_email.is_some()
    }

    pub fn has_analytics(&self) -> bool {
        self.analytics_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_nothing_set() {
        let config = Config::default();
        assert!(!config.has_booking_url());
        assert!(!config.has_contact_email());
        assert!(!config.has_analytics());
    }

    #[test]
    fn presence_checks_follow_fields() {
        let config = Config {
            booking_url: Some("https://cal.com/ringline/demo".into()),
            contact_email: None,
            analytics_id: Some("rl-0001".into()),
        };
        assert!(config.has_booking_url());
        assert!(!config.has_contact_email());
        assert!(config.has_analytics());
    }
}
