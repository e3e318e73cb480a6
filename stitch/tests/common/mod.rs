//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for laying out small sites on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use stitch::config::{Config, SiteSettings};

/// Builder for a throwaway site tree.
///
/// # Examples
///
/// ```no_run
/// # use common::SiteFixture;
/// let site = SiteFixture::new()
///     .with_file("src/index.ejs", "<%- include('./_nav.ejs') %>")
///     .with_file("src/_nav.ejs", "<nav></nav>");
/// let settings = site.settings();
/// ```
pub struct SiteFixture {
    temp: TempDir,
}

#[allow(dead_code)]
impl SiteFixture {
    /// Creates an empty site in a fresh temporary directory.
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("create temp dir"),
        }
    }

    /// Writes `contents` to `relative`, creating parent directories.
    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        self.write(relative, contents);
        self
    }

    /// Writes `contents` to `relative` in place.
    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().expect("fixture path has a parent"))
            .expect("create fixture dirs");
        fs::write(path, contents).expect("write fixture file");
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// `<root>/src`.
    pub fn source_root(&self) -> PathBuf {
        self.root().join("src")
    }

    /// `<root>/dist`.
    pub fn output_dir(&self) -> PathBuf {
        self.root().join("dist")
    }

    /// Settings with every default, rooted at the fixture.
    pub fn settings(&self) -> SiteSettings {
        self.settings_with(&Config::default())
    }

    /// Settings from `config`, rooted at the fixture.
    pub fn settings_with(&self, config: &Config) -> SiteSettings {
        SiteSettings::resolve(config, self.root()).expect("resolve fixture settings")
    }

    /// Reads a file under the output directory.
    pub fn read_output(&self, relative: &str) -> String {
        fs::read_to_string(self.output_dir().join(relative)).expect("read output file")
    }
}

impl Default for SiteFixture {
    fn default() -> Self {
        Self::new()
    }
}
