// server/src/cli/cli.rs
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use lib::config::{load_app_config, AppConfig};
use lib::{Database, DatabaseInitializer};
use crate::cli::handlers_audit::{handle_audit, AuditFilter};
use crate::cli::handlers_user::handle_register;
use crate::cli::interactive::run_cli_interactive;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Secure Patient Records console", long_about = None)]
#[clap(propagate_version = true)]
pub struct CliArgs {
    /// Path to the YAML config file
    #[clap(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Overrides the configured data directory
    #[clap(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Commands {
    /// Log in and use the menu (default)
    Interactive,
    /// Create any missing data files with seed content
    Init,
    /// Create a user account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long, help = "One of the configured role names, matched exactly (e.g. Doctor).")]
        role: String,
    },
    /// Print audit entries, oldest first
    Audit {
        #[arg(long, help = "Only entries for this username (case-insensitive).")]
        user: Option<String>,
        #[arg(long)]
        failures_only: bool,
        #[arg(long, help = "Show only the last N matching entries.")]
        limit: Option<usize>,
    },
}

/// Config file first, then command-line overrides.
pub fn resolve_config(args: &CliArgs) -> Result<AppConfig> {
    let mut config = load_app_config(args.config.as_deref())?;
    if let Some(dir) = &args.data_dir {
        debug!("Data directory overridden to {}", dir.display());
        config.data_directory = dir.clone();
    }
    Ok(config)
}

pub fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    run_command(args)
}

pub fn run_command(args: CliArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let command = args.command.clone().unwrap_or(Commands::Interactive);
    info!("Running command {:?}", command);

    match command {
        Commands::Interactive => {
            let db = Database::open(config).context("Failed to open patient records database")?;
            run_cli_interactive(&db)
        }
        Commands::Init => {
            let created = DatabaseInitializer::new(config.clone())
                .ensure_created()
                .context("Failed to seed data directory")?;
            println!("Data directory {} ready ({} file(s) created).", config.data_directory.display(), created);
            Ok(())
        }
        Commands::Register { username, password, role } => {
            let db = Database::open(config).context("Failed to open patient records database")?;
            println!("{}", handle_register(&db.auth_service(), &username, &password, &role));
            Ok(())
        }
        Commands::Audit { user, failures_only, limit } => {
            let db = Database::open(config).context("Failed to open patient records database")?;
            let filter = AuditFilter { user, failures_only, limit };
            println!("{}", handle_audit(&db.audit_service(), &filter));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::storage_engine::JsonUserStorage;
    use lib::UserRepository;
    use tempfile::tempdir;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let args = parse(&["medrecords"]);
        assert!(args.command.is_none());
    }

    #[test]
    fn data_dir_overrides_config() {
        let dir = tempdir().unwrap();
        let args = parse(&[
            "medrecords",
            "--config",
            dir.path().join("missing.yaml").to_str().unwrap(),
            "init",
            "--data-dir",
            dir.path().join("records").to_str().unwrap(),
        ]);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.data_directory, dir.path().join("records"));
    }

    #[test]
    fn audit_flags_parse() {
        let args = parse(&["medrecords", "audit", "--user", "nurse1", "--failures-only", "--limit", "5"]);
        match args.command {
            Some(Commands::Audit { user, failures_only, limit }) => {
                assert_eq!(user.as_deref(), Some("nurse1"));
                assert!(failures_only);
                assert_eq!(limit, Some(5));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn init_then_register_through_commands() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("records");
        let config_path = dir.path().join("medrecords.yaml");
        std::fs::write(&config_path, "app:\n  bcrypt_cost: 4\n").unwrap();
        let base = |cmd: &[&str]| {
            let mut argv: Vec<String> = vec![
                "medrecords".to_string(),
                "--config".to_string(),
                config_path.display().to_string(),
                "--data-dir".to_string(),
                data.display().to_string(),
            ];
            argv.extend(cmd.iter().map(|s| s.to_string()));
            CliArgs::try_parse_from(argv).unwrap()
        };

        run_command(base(&["init"])).unwrap();
        assert!(data.join("users.json").exists());

        run_command(base(&["register", "--username", "doctor2", "--password", "Pass@2", "--role", "Doctor"])).unwrap();
        let users = JsonUserStorage::new(data.join("users.json"));
        assert!(users.get_by_username("DOCTOR2").unwrap().is_some());

        run_command(base(&["audit", "--limit", "1"])).unwrap();
    }
}
