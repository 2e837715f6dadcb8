use proptest::prelude::*;
use readygo::config::{pluralize, ProjectConfig};
use readygo::error::Error;

proptest! {
    #[test]
    fn valid_names_pass_validation(name in "[A-Za-z0-9_-]{1,40}") {
        let mut config = ProjectConfig::new(name.as_str());
        config.process();
        prop_assert!(config.validate().is_ok());
    }

    #[test]
    fn names_with_separators_fail_validation(
        prefix in "[a-z]{0,10}",
        separator in "[ /.@]",
        suffix in "[a-z]{0,10}",
    ) {
        let mut config = ProjectConfig::new(format!("{prefix}{separator}{suffix}"));
        config.process();
        let is_validation_error = matches!(config.validate(), Err(Error::ValidationError(_)));
        prop_assert!(is_validation_error);
    }

    #[test]
    fn process_is_idempotent(sample in "[a-zA-Z]{1,12}") {
        let mut config = ProjectConfig::new("svc");
        config.sample_api_name = sample;
        config.process();
        let once = config.clone();
        config.process();
        prop_assert_eq!(&config, &once);
        prop_assert_eq!(config.sample_api_name_lower(), config.sample_api_name.to_lowercase());
        prop_assert_eq!(config.sample_table_name(), pluralize(config.sample_api_name_lower()));
    }
}

#[test]
fn test_pluralization_table() {
    for (singular, plural) in
        [("box", "boxes"), ("dish", "dishes"), ("bus", "buses"), ("city", "cities"), ("user", "users")]
    {
        assert_eq!(pluralize(singular), plural);
    }
}

#[test]
fn test_process_category() {
    let mut config = ProjectConfig::new("shop");
    config.sample_api_name = "category".into();
    config.process();
    config.process();

    assert_eq!(config.sample_api_name, "Category");
    assert_eq!(config.sample_api_name_lower(), "category");
    assert_eq!(config.sample_table_name(), "categories");
}

#[test]
fn test_validation_messages() {
    let config = ProjectConfig::new("my/shop");
    let err = config.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid configuration: project name 'my/shop' can only contain letters, numbers, \
         hyphens, and underscores."
    );
}
