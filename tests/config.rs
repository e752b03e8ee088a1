#[cfg(test)]
mod tests {
    use response_times::libs::config::{parse_timezone, Config, ConfigError, ZENDESK_EMAIL, ZENDESK_SUBDOMAIN, ZENDESK_TOKEN};
    use chrono_tz::Tz;
    use test_context::{test_context, TestContext};

    const VARS: [&str; 3] = [ZENDESK_EMAIL, ZENDESK_TOKEN, ZENDESK_SUBDOMAIN];

    /// Saves the Zendesk variables and restores them afterwards.
    struct EnvTestContext {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl TestContext for EnvTestContext {
        fn setup() -> Self {
            let saved = VARS.iter().map(|name| (*name, std::env::var(name).ok())).collect();
            EnvTestContext { saved }
        }

        fn teardown(self) {
            for (name, value) in self.saved {
                match value {
                    Some(value) => std::env::set_var(name, value),
                    None => std::env::remove_var(name),
                }
            }
        }
    }

    // All environment checks live in one test so they never race each other.
    #[test_context(EnvTestContext)]
    #[test]
    fn test_read_config_from_env(_ctx: &mut EnvTestContext) {
        std::env::set_var(ZENDESK_EMAIL, "ops@acme.com");
        std::env::set_var(ZENDESK_TOKEN, "  secret-token ");
        std::env::set_var(ZENDESK_SUBDOMAIN, "acme");

        let config = Config::read().unwrap();
        assert_eq!(config.zendesk.email, "ops@acme.com");
        assert_eq!(config.zendesk.token, "secret-token");
        assert_eq!(config.zendesk.base_url(), "https://acme.zendesk.com");

        std::env::set_var(ZENDESK_TOKEN, "   ");
        assert_eq!(Config::read(), Err(ConfigError::EmptyVar(ZENDESK_TOKEN)));

        std::env::remove_var(ZENDESK_TOKEN);
        assert_eq!(Config::read(), Err(ConfigError::MissingVar(ZENDESK_TOKEN)));

        std::env::remove_var(ZENDESK_EMAIL);
        assert_eq!(Config::read(), Err(ConfigError::MissingVar(ZENDESK_EMAIL)));
    }

    #[test]
    fn test_timezones() {
        assert_eq!(parse_timezone("UTC").unwrap(), Tz::UTC);
        assert_eq!(parse_timezone("America/New_York").unwrap(), Tz::America__New_York);
        assert_eq!(parse_timezone("Asia/Kolkata").unwrap(), Tz::Asia__Kolkata);
        assert_eq!(parse_timezone(""), Err(ConfigError::InvalidTimezone(String::new())));
        assert!(parse_timezone("+02:00").is_err());
        assert!(parse_timezone("Mars/Olympus_Mons").is_err());
    }
}
