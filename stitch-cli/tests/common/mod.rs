//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary site directory
//! - Command builder helpers that isolate the process environment
//! - Site fixture writers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared so the host cannot leak in.
const STITCH_ENV_VARS: [&str; 12] = [
    "STITCH_CONFIG",
    "STITCH_SOURCE_ROOT",
    "STITCH_OUTPUT_DIR",
    "STITCH_PUBLIC_DIR",
    "STITCH_TEMPLATE_EXTENSION",
    "STITCH_MINIFY",
    "STITCH_CLEAN",
    "STITCH_COLLECT_STYLES",
    "STITCH_MAX_INCLUDE_DEPTH",
    "STITCH_HASH_LENGTH",
    "STITCH_LOG_MODE",
    "STITCH_OUTPUT_FORMAT",
];

/// Test environment with an isolated site directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as the project root
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// An empty `stitch.yaml` pins the project root to the temp directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let env = Self {
            temp_dir,
            temp_path,
        };
        env.write("stitch.yaml", "");
        env
    }

    /// Create an environment holding a small two-page site.
    ///
    /// - `src/index.ejs` including `_nav.ejs` and linking `/css/site.css`
    /// - `src/blog/post.ejs` including `/shared/_footer.ejs`
    /// - `src/public/robots.txt`
    pub fn with_site() -> Self {
        let env = Self::new();
        env.write(
            "src/index.ejs",
            "<html><head><link rel=\"stylesheet\" href=\"/css/site.css\"></head>\n<body>\n  <%- include('./_nav.ejs') %>\n</body></html>\n",
        );
        env.write("src/_nav.ejs", "<nav>home</nav>\n");
        env.write(
            "src/blog/post.ejs",
            "<article>post</article>\n<%- include('/shared/_footer.ejs') %>\n",
        );
        env.write("src/shared/_footer.ejs", "<footer>end</footer>\n");
        env.write("src/css/site.css", "body { margin: 0 }");
        env.write("src/public/robots.txt", "User-agent: *");
        env
    }

    /// Get a command builder running in the test directory with every
    /// `STITCH_*` variable cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("stitch").expect("Failed to find stitch binary");
        for var in STITCH_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        std::fs::create_dir_all(path.parent().expect("path has a parent"))
            .expect("Failed to create test directory");
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Read a file relative to the test directory.
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.temp_path.join(relative)).expect("Failed to read file")
    }

    /// Run `stitch build` and assert it succeeds.
    pub fn build(&self) {
        let output = self
            .command()
            .arg("--quiet")
            .arg("build")
            .output()
            .expect("Failed to run build command");

        assert!(
            output.status.success(),
            "Build failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
