use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use chrono::Local;
use clap::Parser;
use profile_core::core_api::Engine;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Desired mouse sensitivity as two hexadecimal digits (00-ff).
    /// Prompted for interactively when omitted or invalid.
    #[arg(value_name = "SENSITIVITY")]
    sensitivity: Option<String>,
    /// Path to the Borderlands profile file.
    #[arg(long, value_name = "PATH", default_value = "profile.bin")]
    profile: PathBuf,
    /// Print the updated profile summary as JSON instead of the
    /// standard messages.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if !cli.profile.is_file() {
        eprintln!("Could not find file {}.", cli.profile.display());
        eprintln!("Please make sure this tool runs in the Borderlands save directory. e.g:");
        eprintln!(r"D:\Users\somebody\Documents\my games\borderlands\savedata");
        process::exit(1);
    }

    // Unconditional backup before the original is read or touched.
    let backup_path = backup_profile(&cli.profile);
    println!(
        "Backed up {} to {}.",
        cli.profile.display(),
        backup_path.display()
    );

    let bytes = fs::read(&cli.profile).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.profile.display());
        process::exit(1);
    });

    let engine = Engine::new();
    let mut session = engine.open_bytes(&bytes).unwrap_or_else(|e| {
        eprintln!("Invalid profile data: {e}");
        eprintln!("If there has been an update to Borderlands, this tool may no longer work.");
        process::exit(1);
    });

    let desired = resolve_sensitivity(cli.sensitivity.as_deref(), session.sensitivity());
    session.set_sensitivity(desired);

    fs::write(&cli.profile, session.to_bytes()).unwrap_or_else(|e| {
        eprintln!("Error writing {}: {e}", cli.profile.display());
        process::exit(1);
    });

    if cli.json {
        let rendered = serde_json::to_string_pretty(session.snapshot()).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    println!();
    println!("Finished.");
    println!("Please restart Borderlands for the change to take effect.");
}

/// Copy the profile to `<name>.<YYYYMMDD-HHMMSS>.bak` next to it.
fn backup_profile(path: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let backup = PathBuf::from(format!("{}.{stamp}.bak", path.display()));
    fs::copy(path, &backup).unwrap_or_else(|e| {
        eprintln!("Error backing up {}: {e}", path.display());
        process::exit(1);
    });
    backup
}

/// Take the sensitivity from the argument when it parses, otherwise
/// prompt until a valid value arrives. A parse failure is never fatal;
/// running out of input is.
fn resolve_sensitivity(arg: Option<&str>, current: u8) -> u8 {
    if let Some(arg) = arg {
        match parse_sensitivity(arg) {
            Some(value) => return value,
            None => println!("Invalid sensitivity: {arg}"),
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!(
            "Please enter a desired mouse sensitivity in hexadecimal between 0 and ff (current: {current:x}): "
        );
        let _ = io::stdout().flush();

        let Some(line) = lines.next() else {
            eprintln!("No sensitivity supplied.");
            process::exit(1);
        };
        let line = line.unwrap_or_else(|e| {
            eprintln!("Error reading input: {e}");
            process::exit(1);
        });

        let value = line.trim();
        match parse_sensitivity(value) {
            Some(parsed) => return parsed,
            None => println!("Invalid sensitivity: {value}"),
        }
    }
}

fn parse_sensitivity(value: &str) -> Option<u8> {
    let value = value.trim();
    if value.is_empty() || value.len() > 2 {
        return None;
    }
    u8::from_str_radix(value, 16).ok()
}
