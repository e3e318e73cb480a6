//! Build script for stitch-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("stitch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build a static site from templates")
        .long_about(
            "Command-line tool for compiling include-based page templates into a static site",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Use this configuration file instead of discovering stitch.yaml")
                .value_name("PATH")
                .global(true)
                .env("STITCH_CONFIG"),
        )
        .arg(
            Arg::new("source-root")
                .long("source-root")
                .help("Override the source root")
                .value_name("PATH")
                .global(true)
                .env("STITCH_SOURCE_ROOT"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Override the output directory")
                .value_name("PATH")
                .global(true)
                .env("STITCH_OUTPUT_DIR"),
        )
        .subcommands(vec![
            Command::new("build")
                .about("Build the site into the output directory")
                .long_about("Render every entry template, fingerprint assets and copy the public folder"),
            Command::new("entries")
                .about("List the entry templates and their output files")
                .long_about("Display discovered entries in table, JSON, CSV or TSV form"),
            Command::new("arrange")
                .about("Print the output path derived from a source path")
                .long_about("Strip the extension, suffix and source-root segment from a path"),
            Command::new("resolve")
                .about("Print the file an include directive resolves to")
                .long_about("Resolve an include path the way the build does and print the result"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a stitch configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("stitch.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
