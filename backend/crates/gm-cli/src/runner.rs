use crate::logger;
use crate::{Cli, CliError, CliResult, Commands, ConsolePrompt, Output, print_notices};

use gm_app::{AppController, ControllerOptions};
use gm_bridge::{
    FileBridge, NativeFileBridge, PermissionPrompt, StaticPermission, UnavailableFileBridge,
};
use gm_config::{BridgeRuntime, Config, PermissionMode};
use gm_core::{GuestAccount, download_file_name};
use gm_store::{AccountStore, FileKeyValueStore};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use serde_json::{Value, json};
use tokio::io::AsyncReadExt;

/// Load config, start logging, build the controller and run one command.
pub async fn run(cli: Cli) -> CliResult<Output> {
    let config = match &cli.config_dir {
        Some(dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path(),
        config.logging.colored,
    )?;
    config.log_summary();

    let slots = FileKeyValueStore::new(config.storage_dir());
    let store = AccountStore::new(Arc::new(slots), config.storage.key.clone());
    let bridge = build_bridge(&config, cli.browser, cli.yes)?;

    let mut controller =
        AppController::initialize(store, bridge, ControllerOptions::from(&config)).await;
    let result = execute(&mut controller, cli.command).await;

    print_notices(&controller.take_notices());
    result
}

/// Pick the bridge for this run from config and flags.
pub fn build_bridge(
    config: &Config,
    force_browser: bool,
    auto_grant: bool,
) -> CliResult<Arc<dyn FileBridge>> {
    if force_browser || config.bridge.runtime == BridgeRuntime::Unavailable {
        info!("Direct file access disabled");
        return Ok(Arc::new(UnavailableFileBridge));
    }

    let prompt: Arc<dyn PermissionPrompt> = match config.bridge.permission {
        _ if auto_grant => Arc::new(StaticPermission::granted()),
        PermissionMode::Granted => Arc::new(StaticPermission::granted()),
        PermissionMode::Denied => Arc::new(StaticPermission::denied()),
        PermissionMode::Prompt => Arc::new(ConsolePrompt),
    };

    Ok(Arc::new(NativeFileBridge::new(config.bridge_root()?, prompt)))
}

/// Run one command against an initialized controller.
pub async fn execute(controller: &mut AppController, command: Commands) -> CliResult<Output> {
    match command {
        Commands::List { search } => {
            controller.set_search(search.unwrap_or_default());
            Ok(Output::Json(list(controller)))
        }

        Commands::Add {
            uid,
            password,
            name,
            game_id,
        } => {
            let account = GuestAccount::new(uid, password, name, game_id);
            let value = serde_json::to_value(&account)?;
            controller.add(account).await?;
            Ok(Output::Json(value))
        }

        Commands::Import { file } => {
            let text = read_import_text(file.as_deref()).await?;
            let report = controller.import_text(&text).await?;
            Ok(Output::Json(json!({
                "imported": report.len(),
                "discarded_pairs": report.discarded_pairs,
                "headerless_pairs": report.headerless_pairs,
                "unnamed_pairs": report.unnamed_pairs,
                "unpaired_trailing_line": report.unpaired_trailing_line,
                "accounts": report.accounts,
            })))
        }

        Commands::Delete { id } => {
            let deleted = controller.delete(&id).await;
            Ok(Output::Json(json!({ "id": id, "deleted": deleted })))
        }

        Commands::Export { id, download } => {
            let document = controller.export(&id)?;
            match download {
                None => Ok(Output::Text(document)),
                Some(dir) => {
                    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
                    let path = save_download(controller, &id, &dir, &document).await?;
                    Ok(Output::Json(json!({ "path": path.display().to_string() })))
                }
            }
        }

        Commands::Inject { id, path } => {
            if let Some(path) = path {
                controller.set_guest_file_path(path);
            }
            let target = controller.guest_file_path();
            let label = controller
                .account(&id)
                .map(|account| account.display_label().to_string());
            if controller.inject(&id).await? {
                Ok(Output::Json(json!({ "id": id, "label": label, "path": target })))
            } else {
                Err(CliError::rejected(format!("Could not inject into {target}")))
            }
        }

        Commands::Read { path } => {
            if let Some(path) = path {
                controller.set_guest_file_path(path);
            }
            match controller.read_current_file().await? {
                Some(contents) => Ok(Output::Text(contents)),
                None if !controller.is_native() => Err(CliError::rejected(
                    gm_app::NATIVE_UNAVAILABLE_MESSAGE,
                )),
                None => Err(CliError::rejected(format!(
                    "Could not read {}",
                    controller.guest_file_path()
                ))),
            }
        }

        Commands::Files => {
            controller.refresh_guest_files().await?;
            Ok(Output::Json(json!({
                "guest_dir": controller.guest_dir(),
                "files": controller.guest_files(),
                "target": controller.guest_file_path(),
                "target_exists": controller.guest_file_exists().await,
            })))
        }

        Commands::Permission { request } => {
            if request {
                controller.request_storage_permission().await?;
            }
            Ok(Output::Json(json!({
                "is_native": controller.is_native(),
                "has_permission": controller.has_permission(),
            })))
        }

        Commands::Status => Ok(Output::Json(serde_json::to_value(controller.status())?)),
    }
}

fn list(controller: &AppController) -> Value {
    let visible = controller.filtered();
    let message = if controller.accounts().is_empty() {
        Some("No Accounts Yet".to_string())
    } else if visible.is_empty() {
        Some(format!("No accounts match \"{}\"", controller.search()))
    } else {
        None
    };

    json!({
        "total": controller.accounts().len(),
        "visible": visible.len(),
        "accounts": visible,
        "message": message,
    })
}

async fn read_import_text(file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CliError::input(path, e)),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .map_err(|e| CliError::input("<stdin>", e))?;
            Ok(text)
        }
    }
}

async fn save_download(
    controller: &AppController,
    id: &str,
    dir: &Path,
    document: &str,
) -> CliResult<PathBuf> {
    let file_name = controller
        .account(id)
        .map(download_file_name)
        .ok_or_else(|| CliError::from(gm_app::ControllerError::not_found(id)))?;
    let path = dir.join(file_name);

    tokio::fs::write(&path, document)
        .await
        .map_err(|e| CliError::output(&path, e))?;
    info!("Saved guest document to {}", path.display());

    Ok(path)
}
