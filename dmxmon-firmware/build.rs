//! Build script for dmxmon-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates monitor.toml and generates the compiled-in configuration

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use dmxmon_core::config::{validate_fixture, MAX_FIXTURES};
use serde::Deserialize;

/// RP2040 SPI clock ceiling (clk_peri / 2)
const MAX_SPI_FREQUENCY_HZ: u32 = 62_500_000;

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MonitorToml {
    serial: SerialSection,
    display: DisplaySection,
    #[serde(rename = "fixture", default)]
    fixtures: Vec<FixtureEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SerialSection {
    baud: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplaySection {
    spi_frequency_hz: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureEntry {
    name: String,
    address: u16,
    channels: u16,
    #[serde(rename = "type")]
    kind: String,
}

/// Validate monitor.toml and write monitor_config.rs into OUT_DIR
fn generate_config() {
    // Re-run if monitor.toml changes
    println!("cargo:rerun-if-changed=monitor.toml");

    let config_path = Path::new("monitor.toml");

    if !config_path.exists() {
        fail(
            "monitor.toml not found!",
            &[
                "The firmware requires a monitor.toml configuration file.".to_string(),
                "Please create one in the dmxmon-firmware directory.".to_string(),
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read monitor.toml", &[e.to_string()]),
    };

    let config: MonitorToml = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail(
            "Invalid monitor.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let errors = validate(&config);
    if !errors.is_empty() {
        fail("Invalid settings in monitor.toml", &errors);
    }

    for fixture in &config.fixtures {
        if !is_printable_ascii(&fixture.name) || !is_printable_ascii(&fixture.kind) {
            println!(
                "cargo:warning=fixture '{}': characters outside printable ASCII draw as spaces",
                fixture.name
            );
        }
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("monitor_config.rs"), render(&config)).unwrap();

    println!(
        "cargo:warning=monitor.toml validated successfully ({} fixtures)",
        config.fixtures.len()
    );
}

fn validate(config: &MonitorToml) -> Vec<String> {
    let mut errors = Vec::new();

    if config.serial.baud == 0 {
        errors.push("[serial] baud must be greater than 0".to_string());
    }
    if config.display.spi_frequency_hz == 0
        || config.display.spi_frequency_hz > MAX_SPI_FREQUENCY_HZ
    {
        errors.push(format!(
            "[display] spi_frequency_hz must be 1-{}",
            MAX_SPI_FREQUENCY_HZ
        ));
    }

    if config.fixtures.is_empty() {
        errors.push("Missing [[fixture]] - at least one fixture is required".to_string());
    }
    if config.fixtures.len() > MAX_FIXTURES {
        errors.push(format!("At most {} fixtures fit on screen", MAX_FIXTURES));
    }

    for (i, fixture) in config.fixtures.iter().enumerate() {
        if let Err(e) =
            validate_fixture(&fixture.name, fixture.address, fixture.channels, &fixture.kind)
        {
            errors.push(format!("[[fixture]] #{} '{}': {}", i + 1, fixture.name, e));
        }
    }

    errors
}

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

/// Generated Rust source for the validated configuration
fn render(config: &MonitorToml) -> String {
    let mut out = String::new();
    out.push_str("// Generated by build.rs from monitor.toml. Do not edit.\n\n");
    writeln!(out, "pub const SERIAL_BAUD: u32 = {};", config.serial.baud).unwrap();
    writeln!(
        out,
        "pub const SPI_FREQUENCY_HZ: u32 = {};",
        config.display.spi_frequency_hz
    )
    .unwrap();
    writeln!(
        out,
        "\npub static FIXTURES: [Fixture; {}] = [",
        config.fixtures.len()
    )
    .unwrap();
    for fixture in &config.fixtures {
        writeln!(
            out,
            "    Fixture::new({:?}, {}, {}, {:?}),",
            fixture.name, fixture.address, fixture.channels, fixture.kind
        )
        .unwrap();
    }
    out.push_str("];\n");
    out
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<58} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
