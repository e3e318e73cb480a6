//! Property-based tests for configuration merging and validation.

use std::path::PathBuf;

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use crate::path::arrange;
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[a-z]{1,10}"),
        prop::option::of("[a-z]{1,10}"),
        prop::option::of("[a-z]{1,5}"),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(1usize..=64),
        prop::option::of(8usize..=64),
    )
        .prop_map(|(source, output, ext, minify, clean, depth, hash)| Config {
            source_root: source.map(PathBuf::from),
            output_dir: output.map(PathBuf::from),
            template_extension: ext,
            minify,
            clean,
            max_include_depth: depth,
            hash_length: hash,
            ..Default::default()
        })
}

proptest! {
    /// Merging a config into the default yields that config.
    #[test]
    fn merge_into_default_is_identity(config in config_strategy()) {
        let mut target = Config::default();
        ConfigMerger::merge_into(&mut target, &config);
        prop_assert_eq!(target, config);
    }

    /// Merging the default changes nothing.
    #[test]
    fn merge_default_is_noop(config in config_strategy()) {
        let mut target = config.clone();
        ConfigMerger::merge_into(&mut target, &Config::default());
        prop_assert_eq!(target, config);
    }

    /// Merging is idempotent.
    #[test]
    fn merge_idempotent(base in config_strategy(), layer in config_strategy()) {
        let mut once = base.clone();
        ConfigMerger::merge_into(&mut once, &layer);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &layer);
        prop_assert_eq!(once, twice);
    }

    /// Fields set in the higher layer always win.
    #[test]
    fn merge_higher_wins(base in config_strategy(), layer in config_strategy()) {
        let mut merged = base.clone();
        ConfigMerger::merge_into(&mut merged, &layer);
        if layer.minify.is_some() {
            prop_assert_eq!(merged.minify, layer.minify);
        } else {
            prop_assert_eq!(merged.minify, base.minify);
        }
        if layer.source_root.is_some() {
            prop_assert_eq!(merged.source_root, layer.source_root);
        }
    }

    /// Everything the strategy produces is valid, and stays valid merged.
    #[test]
    fn generated_configs_validate(a in config_strategy(), b in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&a).is_ok());
        let mut merged = a;
        ConfigMerger::merge_into(&mut merged, &b);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    /// Every extension the validator accepts yields arrangeable entries.
    #[test]
    fn accepted_extensions_arrange(ext in "[A-Za-z0-9]{1,6}") {
        let config = Config {
            template_extension: Some(ext.clone()),
            ..Default::default()
        };
        let accepted = ConfigValidator::validate(&config).is_ok();
        let arranged = arrange(&format!("./src/blog/post.{ext}"));
        prop_assert_eq!(accepted, arranged.is_ok());
    }
}
