//! Build script for trojan-cli.
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
    Command::new("trojan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect layered trojan configuration")
        .long_about(
            "Command-line tool for resolving and inspecting file-plus-environment configuration",
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
                .help("Extra config file tried before the default candidates")
                .value_name("PATH")
                .global(true)
                .env("TROJAN_CONFIG"),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help("Override the environment-variable prefix")
                .value_name("PREFIX")
                .global(true),
        )
        .subcommands(vec![
            Command::new("show")
                .about("Print the merged configuration tree")
                .long_about("Resolve the layered configuration and print the merged tree"),
            Command::new("get")
                .about("Print a single value by dotted path")
                .long_about("Resolve the layered configuration and print one value"),
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

    // Generate main trojan.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("trojan.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
