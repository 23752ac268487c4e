//! Property tests for `deployer.toml` loading.

use proptest::prelude::*;

use deploy_recorder::Config;

fn unknown_key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("x_[a-z]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Loading arbitrary file content returns Ok or Err, never panics.
    #[test]
    fn property_load_never_panics(content in "(?s).{0,256}") {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployer.toml");
        std::fs::write(&path, content).unwrap();

        let _ = Config::load_with_warnings(&path);
    }

    /// PROPERTY: Unknown top-level keys are ignored with one warning each,
    /// and the built-in networks are still available.
    #[test]
    fn property_unknown_keys_warn(key in unknown_key()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployer.toml");
        std::fs::write(&path, format!("{key} = true\n")).unwrap();

        let (config, warnings) = Config::load_with_warnings(&path).unwrap();
        prop_assert_eq!(warnings.len(), 1);
        prop_assert_eq!(&warnings[0].key, &key);
        prop_assert_eq!(warnings[0].line, Some(1));
        prop_assert!(config.resolve_network(Some("localhost")).is_ok());
        prop_assert!(config.resolve_network(Some("hardhat")).is_ok());
    }

    /// PROPERTY: Network resolution either yields a configured, file-safe
    /// name or an error; arbitrary input never panics.
    #[test]
    fn property_resolve_network_never_panics(name in "(?s).{0,80}") {
        let config = Config::default();
        if let Ok(env) = config.resolve_network(Some(&name)) {
            prop_assert!(config.networks.contains_key(env.as_str()));
        }
    }
}
