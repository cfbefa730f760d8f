//! Configuration integration tests
//!
//! Loading from disk, validation failures and serialization.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use talentree_portal::config::{BrandingConfig, LoggingConfig, PortalConfig, Validate};
    use talentree_portal::{Branding, Config, PortalError, Role};
    use tempfile::NamedTempFile;

    fn no_overrides(_: &str) -> Option<String> {
        None
    }

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_branding_from_file() {
        let file = write_config(
            r#"
branding:
  default_logo: "/assets/brand.png"
  evaluator_title: "Evaluación"
"#,
        );

        let config = Config::from_file_with(file.path(), no_overrides).await.unwrap();
        assert_eq!(config.branding().evaluator_title, "Evaluación");
        assert_eq!(config.branding().admin_title, "Administración Talentree");
        assert_eq!(config.logging(), &LoggingConfig::default());

        let branding = Branding::new(config.branding().clone());
        assert_eq!(branding.title_for_role(Role::Evaluator, None, None), "Evaluación");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = Config::from_file("/nonexistent/portal.yaml").await;
        assert!(matches!(result, Err(PortalError::Io(_))));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_yaml_with("{}", no_overrides).unwrap();
        assert_eq!(config.portal, PortalConfig::default());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let result = Config::from_yaml_with("logging:\n  level: loud\n", no_overrides);
        let err = result.unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
        assert!(err.to_string().contains("Logging"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let branding = BrandingConfig {
            admin_title: String::new(),
            ..BrandingConfig::default()
        };
        assert!(branding.validate().is_err());

        let result = Config::from_yaml_with("branding:\n  admin_title: \"\"\n", no_overrides);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let result = Config::from_yaml_with("logging: [unclosed", no_overrides);
        assert!(matches!(result, Err(PortalError::Yaml(_))));
    }

    #[test]
    fn test_yaml_output_reloads() {
        let mut config = Config::default();
        config.portal.logging.json = true;
        config.portal.branding.worker_fallback = "Perfil".to_string();

        let yaml = config.to_yaml().unwrap();
        let reloaded = Config::from_yaml_with(&yaml, no_overrides).unwrap();
        assert!(reloaded.logging().json);
        assert_eq!(reloaded.branding().worker_fallback, "Perfil");
    }

    #[tokio::test]
    async fn test_lookup_overrides_file_values() {
        let file = write_config("logging:\n  level: warn\n  json: false\n");
        let lookup = |key: &str| match key {
            "PORTAL_LOG_JSON" => Some("true".to_string()),
            _ => None,
        };

        let config = Config::from_file_with(file.path(), lookup).await.unwrap();
        assert_eq!(config.logging().level, "warn");
        assert!(config.logging().json);
        assert_eq!(config.branding(), &BrandingConfig::default());
    }
}
