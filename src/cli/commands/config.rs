use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use crate::ui::messages::{success, warning};
use std::process::Command;

const EXPECTED_KEYS: [&str; 9] = [
    "database",
    "default_department",
    "remark_profile",
    "work_start",
    "afternoon_start",
    "work_end",
    "invalid_window",
    "duration_style",
    "separator_char",
];

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg).map_err(|_| AppError::ConfigLoad)?
            );
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults are in use). Run `acculog init`.",
                    path.display()
                ));
                return Ok(());
            }

            let content = std::fs::read_to_string(&path)?;
            let value: serde_yaml::Value =
                serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;

            let missing: Vec<&str> = EXPECTED_KEYS
                .iter()
                .filter(|k| value.get(**k).is_none())
                .copied()
                .collect();

            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Missing keys (serde defaults apply): {}",
                    missing.join(", ")
                ));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let requested_editor = editor.clone();

            // Platform default editor
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    println!(
                        "✅ Configuration file edited successfully using '{}'",
                        editor_to_use
                    );
                }
                Ok(_) | Err(_) => {
                    eprintln!(
                        "⚠️  Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    );

                    let fallback_status = Command::new(&default_editor).arg(&path).status();

                    match fallback_status {
                        Ok(s) if s.success() => {
                            println!(
                                "✅ Configuration file edited successfully using '{}'",
                                default_editor
                            );
                        }
                        _ => {
                            return Err(AppError::Config(format!(
                                "Could not launch any editor for {}",
                                path.display()
                            )));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
