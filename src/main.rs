//! portal-access - inspect the Talentree portal access model
//!
//! Prints the role table, answers permission questions and shows what the
//! sidebar looks like for a role.

#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use talentree_portal::navigation::{Branding, badge_sections, get_sections_for_role};
use talentree_portal::utils::logging::init_logging;
use talentree_portal::{Config, Permission, RbacSystem, Result, Role};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "portal-access", version, about = "Inspect portal roles, permissions and navigation")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(long, global = true, env = "PORTAL_CONFIG")]
    config: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Every permission with the roles that hold it
    Matrix,
    /// Every role with its permissions
    Roles,
    /// Check one permission for one role
    Check {
        #[arg(long)]
        role: String,
        #[arg(long)]
        permission: String,
    },
    /// Roles holding a permission
    WhoCan { permission: String },
    /// Sidebar entries visible to a role
    Nav {
        #[arg(long)]
        role: String,
    },
    /// Sidebar logo and title for a role
    Branding {
        #[arg(long)]
        role: String,
        #[arg(long)]
        company_name: Option<String>,
        #[arg(long)]
        user_name: Option<String>,
        #[arg(long)]
        logo: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    init_logging(config.logging())?;
    debug!("Running {:?}", cli.command);

    let rbac = RbacSystem::new();
    let output = match cli.command {
        Command::Matrix => matrix(&rbac, cli.json)?,
        Command::Roles => roles(&rbac, cli.json)?,
        Command::Check { role, permission } => {
            let check = rbac.check_permission_detailed(role.parse()?, permission.parse()?);
            if cli.json {
                serde_json::to_string_pretty(&check)?
            } else if check.granted {
                format!("granted: {} may {}", role, check.permission)
            } else {
                format!(
                    "denied: {}",
                    check.denial_reason.unwrap_or_else(|| "not granted".to_string())
                )
            }
        }
        Command::WhoCan { permission } => {
            let permission: Permission = permission.parse()?;
            let holders = rbac.roles_with_permission(permission);
            if cli.json {
                serde_json::to_string_pretty(&json!({
                    "permission": permission,
                    "roles": holders,
                }))?
            } else {
                join_roles(&holders)
            }
        }
        Command::Nav { role } => nav(role.parse()?, cli.json)?,
        Command::Branding {
            role,
            company_name,
            user_name,
            logo,
        } => {
            let branding = Branding::new(config.branding().clone());
            let role: Role = role.parse()?;
            let logo = branding.logo_for_role(role, logo.as_deref());
            let title = branding.title_for_role(role, company_name.as_deref(), user_name.as_deref());
            if cli.json {
                serde_json::to_string_pretty(&json!({
                    "role": role,
                    "logo": logo,
                    "title": title,
                }))?
            } else {
                format!("title: {}\nlogo:  {}", title, logo)
            }
        }
    };

    println!("{}", output);
    Ok(())
}

fn matrix(rbac: &RbacSystem, as_json: bool) -> Result<String> {
    let rows = rbac.access_matrix();
    if as_json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let width = rows
        .iter()
        .map(|row| row.permission.as_str().len())
        .max()
        .unwrap_or_default();
    Ok(rows
        .iter()
        .map(|row| {
            format!(
                "{:<width$}  {}",
                row.permission.as_str(),
                join_roles(&row.roles),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

fn roles(rbac: &RbacSystem, as_json: bool) -> Result<String> {
    let table: Vec<_> = rbac
        .list_roles()
        .into_iter()
        .map(|role| (role, rbac.sorted_role_permissions(role)))
        .collect();

    if as_json {
        let value: Vec<_> = table
            .iter()
            .map(|(role, permissions)| json!({ "role": role, "permissions": permissions }))
            .collect();
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = Vec::new();
    for (role, permissions) in table {
        out.push(format!("{} ({})", role, permissions.len()));
        out.extend(permissions.iter().map(|p| format!("  {}", p)));
    }
    Ok(out.join("\n"))
}

fn nav(role: Role, as_json: bool) -> Result<String> {
    let sections = get_sections_for_role(role);
    if as_json {
        return Ok(serde_json::to_string_pretty(&sections)?);
    }

    let badged = badge_sections(role);
    Ok(sections
        .iter()
        .map(|entry| {
            let marker = if badged.contains(entry) { " *" } else { "" };
            format!("{:<22} {}{}", entry.label, entry.path, marker)
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

fn join_roles(roles: &[Role]) -> String {
    if roles.is_empty() {
        return "-".to_string();
    }
    roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
