/*
 * Unit tests for configuration loading
 *
 * Tests:
 * - test_config_defaults
 * - test_config_full_file
 * - test_config_partial_file
 * - test_config_bad_policy
 * - test_config_missing_file
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use crate::config::{load_config, parse_config, Config, OutputFormat};
    use crate::error::DispatchError;
    use crate::scheduler::Policy;
    use std::fs;

    #[test]
    fn test_config_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.scheduler.policy, Policy::Sweep);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_full_file() {
        // Arrange
        let config_str = r#"
            [scheduler]
            policy = "greedy"

            [logging]
            level = "debug"

            [output]
            format = "json"
        "#;

        // Act
        let config = parse_config(config_str).unwrap();

        // Assert
        assert_eq!(config.scheduler.policy, Policy::Greedy);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_partial_file() {
        let config = parse_config("[output]\nformat = \"json\"\n").unwrap();

        assert_eq!(config.scheduler.policy, Policy::Sweep);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_bad_policy() {
        assert!(parse_config("[scheduler]\npolicy = \"elevator\"\n").is_err());
    }

    #[test]
    fn test_config_missing_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[scheduler\n").unwrap();

        // Act
        let defaults = load_config(&missing).unwrap();
        let error = load_config(&broken).unwrap_err();

        // Assert
        assert_eq!(defaults, Config::default());
        assert!(matches!(error, DispatchError::Toml { .. }));
    }
}
