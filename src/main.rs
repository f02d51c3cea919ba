use anyhow::{anyhow, bail, Context};
use serde::Serialize;
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use console_api::api::{oauth, route, system, tenant};
use console_api::constants;
use console_api::entity::{CommonSearchParams, RoleMenu, RoleMenuMode};
use console_api::{ApiClient, Config};

const DEFAULT_CONFIG: &str = "./etc/console-api.toml";

fn print_usage() {
    println!("Usage: console-api [OPTIONS] <COMMAND> [ARGS]");
    println!("Options:");
    println!("  -config <path>  Path to configuration file (default: {})", DEFAULT_CONFIG);
    println!("  -help, --help   Print this help message");
    println!("Commands:");
    println!("  oauth-url <plat>          OAuth authorize URL for a platform");
    println!("  constant-routes           Routes available without login");
    println!("  user-routes               Routes of the configured user");
    println!("  route-exists <name>       Whether a route name is taken");
    println!("  roles | all-roles         Role page / all enabled roles");
    println!("  role-menu <roleId> <mode> Resources bound to a role (mode 1=menu, 2=button)");
    println!("  users | menus | tenants   First page of users / menus / tenants");
    println!("  pages | menu-tree | menu-buttons | tenant-roles");
    println!("  options                   Business constant select options");
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> anyhow::Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing argument <{}>", name))
}

async fn run(client: &ApiClient, command: &str, args: &[String]) -> anyhow::Result<()> {
    match command {
        "oauth-url" => print_json(&oauth::fetch_get_oauth_url(client, arg(args, 0, "plat")?).await?),
        "constant-routes" => print_json(&route::fetch_get_constant_routes(client).await?),
        "user-routes" => print_json(&route::fetch_get_user_routes(client).await?),
        "route-exists" => {
            print_json(&route::fetch_is_route_exist(client, arg(args, 0, "name")?).await?)
        }
        "roles" => print_json(&system::fetch_get_role_list(client, None).await?),
        "all-roles" => print_json(&system::fetch_get_all_roles(client).await?),
        "role-menu" => {
            let role_id: i64 = arg(args, 0, "roleId")?
                .parse()
                .context("roleId must be a number")?;
            let mode = match arg(args, 1, "mode")? {
                "1" => RoleMenuMode::Menu,
                "2" => RoleMenuMode::Button,
                other => bail!("unknown mode '{}', expected 1 or 2", other),
            };
            print_json(&system::fetch_get_role_menu(client, &RoleMenu::query(role_id, mode)).await?)
        }
        "users" => print_json(&system::fetch_get_user_list(client, None).await?),
        "menus" => {
            let params = CommonSearchParams::page(1, 1000);
            print_json(&system::fetch_get_menu_list(client, Some(&params)).await?)
        }
        "pages" => print_json(&system::fetch_get_all_pages(client).await?),
        "menu-tree" => print_json(&system::fetch_get_menu_tree(client).await?),
        "menu-buttons" => print_json(&system::fetch_get_menu_button(client).await?),
        "tenants" => print_json(&tenant::fetch_get_tenant_list(client, None).await?),
        "tenant-roles" => print_json(&tenant::fetch_get_tenant_roles(client).await?),
        "options" => print_json(&serde_json::json!({
            "enableStatus": constants::enable_status_options(),
            "menuType": constants::menu_type_options(),
            "menuIconType": constants::menu_icon_type_options(),
            "tenantStatus": constants::tenant_status_options(),
        })),
        other => bail!("unknown command '{}', see --help", other),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|arg| arg == "-help" || arg == "--help") {
        print_usage();
        return Ok(());
    }

    let mut config_path = DEFAULT_CONFIG.to_string();
    let mut rest = Vec::new();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "-config" {
            config_path = iter.next().context("-config requires a path")?;
        } else {
            rest.push(arg);
        }
    }

    // Load configuration first (before logging init)
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        eprintln!("Could not load config file: {}, using defaults", e);
        Config::default()
    });

    // Priority: RUST_LOG env var > config file > default "info"
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Using backend {}", config.base_url);

    let (command, command_args) = rest
        .split_first()
        .ok_or_else(|| anyhow!("missing command, see --help"))?;

    let client = ApiClient::from_config(config, None)?;
    run(&client, command, command_args).await
}
