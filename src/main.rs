//! coordhub-access - inspect permissions and guard decisions
//!
//! Works against a file-backed session so successive invocations share one
//! login, the way dashboard tabs share browser storage.

use anyhow::Context;
use clap::{Parser, Subcommand};
use coordhub_access::auth::rbac::{
    FeatureScope, PermissionSet, PermissionType, accessible_features, effective_permissions,
    explain_permission, features, has_permission_named,
};
use coordhub_access::auth::session::{FileStore, Session};
use coordhub_access::config::Config;
use coordhub_access::guards::{NavMenu, RouteOutcome, RouteTable};
use coordhub_access::utils::init_logging;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

const DEFAULT_SESSION_FILE: &str = "coordhub-session.json";

#[derive(Parser, Debug)]
#[command(
    name = "coordhub-access",
    version,
    about = "Permission and route guard inspector for the coordination hub dashboard"
)]
struct Cli {
    /// YAML configuration file
    #[arg(long, env = "COORDHUB_CONFIG")]
    config: Option<PathBuf>,

    /// Session file (overrides the configured store path)
    #[arg(long)]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the feature catalog.
    Features {
        #[arg(long, value_parser = parse_scope)]
        scope: Option<FeatureScope>,
    },

    /// Check one permission; exits 1 when denied.
    Check {
        #[arg(long)]
        feature: String,
        /// read, write, update or delete; anything else is denied
        #[arg(long, default_value = "read")]
        action: String,
        /// Permission set JSON file instead of the session's
        #[arg(long)]
        permissions: Option<PathBuf>,
        /// List granting roles or the denial reason
        #[arg(long)]
        explain: bool,
    },

    /// Store a login in the session file.
    Login {
        #[arg(long)]
        token: String,
        /// User record as JSON
        #[arg(long, default_value = "{}")]
        user_data: String,
        /// Permission set JSON file
        #[arg(long)]
        permissions: PathBuf,
    },

    /// Clear the session file.
    Logout,

    /// Show authentication state and effective permissions.
    Status,

    /// Print the sidebar entries visible to the current session.
    Nav {
        #[arg(long, value_parser = parse_scope)]
        scope: Option<FeatureScope>,
    },

    /// Resolve a navigation to PATH for the current session.
    Route { path: String },
}

fn parse_scope(s: &str) -> Result<FeatureScope, String> {
    match s {
        "department" => Ok(FeatureScope::Department),
        "developer" => Ok(FeatureScope::Developer),
        other => Err(format!("unknown scope '{other}' (expected department or developer)")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Warning: {e}");
    }

    let session_path = cli
        .session
        .clone()
        .or_else(|| config.session().store_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));
    let session = Session::restore(config.session().clone(), FileStore::new(session_path));

    match cli.command {
        Command::Features { scope } => {
            for feature in features::FEATURE_CATALOG {
                if scope.is_none_or(|s| s == feature.scope) {
                    println!("{:<28} {:<12} {}", feature.id, scope_name(feature.scope), feature.label);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            feature,
            action,
            permissions,
            explain,
        } => {
            let loaded = match permissions {
                Some(path) => Some(Arc::new(read_permission_file(&path)?)),
                None => session.current_permissions(),
            };
            let granted = has_permission_named(loaded.as_deref(), &feature, &action);

            println!("{}", if granted { "granted" } else { "denied" });
            if explain {
                print_explanation(loaded.as_deref(), &feature, &action);
            }
            Ok(if granted {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::Login {
            token,
            user_data,
            permissions,
        } => {
            let user_data: serde_json::Value =
                serde_json::from_str(&user_data).context("parsing --user-data")?;
            let permissions = read_permission_file(&permissions)?;
            session.login(&token, &user_data, permissions)?;
            println!("logged in");
            Ok(ExitCode::SUCCESS)
        }
        Command::Logout => {
            session.logout()?;
            println!("logged out");
            Ok(ExitCode::SUCCESS)
        }
        Command::Status => {
            let auth = session.auth_state();
            println!("authenticated: {}", auth.is_authenticated());
            println!("token present: {}", auth.has_token);
            println!("user data present: {}", auth.has_user_data);

            let current = session.current_permissions();
            for feature in accessible_features(current.as_deref()) {
                let granted = effective_permissions(current.as_deref(), &feature).granted();
                let names: Vec<&str> = granted.iter().map(PermissionType::as_str).collect();
                println!("  {:<28} {}", feature, names.join(","));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Nav { scope } => {
            let menu = NavMenu::from_config(config.navigation());
            let current = session.current_permissions();
            for item in menu.visible_items(current.as_deref(), scope) {
                println!("{:<16} {}", item.label, item.path);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Route { path } => {
            let table = RouteTable::new(config.routing().clone());
            let current = session.current_permissions();
            let outcome = table.resolve(&path, session.auth_state(), current.as_deref());
            let code = match outcome {
                RouteOutcome::Render(route) => {
                    println!("render {}", route.path);
                    ExitCode::SUCCESS
                }
                RouteOutcome::Redirect(target) => {
                    println!("redirect {}", target);
                    ExitCode::SUCCESS
                }
                RouteOutcome::Forbidden(route) => {
                    println!("forbidden {}", route.path);
                    ExitCode::from(1)
                }
                RouteOutcome::NotFound => {
                    println!("not found {}", path);
                    ExitCode::from(1)
                }
            };
            Ok(code)
        }
    }
}

fn read_permission_file(path: &Path) -> anyhow::Result<PermissionSet> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading permission file {}", path.display()))?;
    PermissionSet::from_json(&raw)
        .with_context(|| format!("parsing permission file {}", path.display()))
}

fn print_explanation(permissions: Option<&PermissionSet>, feature: &str, action: &str) {
    let Ok(permission) = action.parse::<PermissionType>() else {
        println!("  reason: unrecognized permission type '{}'", action);
        return;
    };

    let check = explain_permission(permissions, feature, permission);
    if check.granted {
        println!("  granted by: {}", check.granted_by_roles.join(", "));
    } else if let Some(reason) = check.denial_reason {
        println!("  reason: {}", reason);
    }
}

fn scope_name(scope: FeatureScope) -> &'static str {
    match scope {
        FeatureScope::Department => "department",
        FeatureScope::Developer => "developer",
    }
}
