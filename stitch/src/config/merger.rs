//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use stitch::config::{Config, ConfigMerger};
///
/// let low = Config { minify: Some(true), ..Default::default() };
/// let high = Config { minify: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.minify, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources, lowest precedence first.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.source_root.is_some() {
            target.source_root.clone_from(&source.source_root);
        }
        if source.output_dir.is_some() {
            target.output_dir.clone_from(&source.output_dir);
        }
        if source.public_dir.is_some() {
            target.public_dir.clone_from(&source.public_dir);
        }
        if source.template_extension.is_some() {
            target
                .template_extension
                .clone_from(&source.template_extension);
        }
        if source.minify.is_some() {
            target.minify = source.minify;
        }
        if source.clean.is_some() {
            target.clean = source.clean;
        }
        if source.collect_styles.is_some() {
            target.collect_styles = source.collect_styles;
        }
        if source.max_include_depth.is_some() {
            target.max_include_depth = source.max_include_depth;
        }
        if source.hash_length.is_some() {
            target.hash_length = source.hash_length;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/site/layer{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(vec![]), Config::default());
    }

    #[test]
    fn test_higher_precedence_wins() {
        let merged = ConfigMerger::merge(vec![
            source(
                1,
                Config {
                    source_root: Some(PathBuf::from("src")),
                    hash_length: Some(10),
                    ..Default::default()
                },
            ),
            source(
                2,
                Config {
                    source_root: Some(PathBuf::from("pages")),
                    ..Default::default()
                },
            ),
        ]);

        assert_eq!(merged.source_root, Some(PathBuf::from("pages")));
        assert_eq!(merged.hash_length, Some(10));
    }

    #[test]
    fn test_unset_fields_do_not_clear() {
        let mut target = Config {
            template_extension: Some("html".into()),
            clean: Some(false),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.template_extension.as_deref(), Some("html"));
        assert_eq!(target.clean, Some(false));
    }

    #[test]
    fn test_every_field_merges() {
        let full = Config {
            source_root: Some(PathBuf::from("a")),
            output_dir: Some(PathBuf::from("b")),
            public_dir: Some(PathBuf::from("c")),
            template_extension: Some("html".into()),
            minify: Some(false),
            clean: Some(false),
            collect_styles: Some(false),
            max_include_depth: Some(3),
            hash_length: Some(9),
        };
        let mut target = Config::default();
        ConfigMerger::merge_into(&mut target, &full);
        assert_eq!(target, full);
    }
}
