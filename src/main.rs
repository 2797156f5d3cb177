use sshpick::args::{self, CliCommand};
use sshpick::commands::{self, Context};
use sshpick::config::{self, LaunchMode};
use sshpick::log::LOGGER;
use sshpick::ui::{self, Prompt};
use sshpick::workspace::resolve_workspace_folders;
use sshpick::{log_debug, log_error};

use std::process::ExitCode;

fn main() -> ExitCode {
    let args = args::main_args();

    let config = match config::init_config(args.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            ui::show_error(&format!("Failed to load settings: {}", err));
            return ExitCode::FAILURE;
        }
    };

    if args.debug || config.settings.debug_mode {
        LOGGER.enable_debug();
        if let Err(err) = LOGGER.log_debug("Debug mode enabled") {
            ui::show_error(&format!("Failed to initialize debug logging: {}", err));
            return ExitCode::FAILURE;
        }
    }
    if let Some(path) = &config.metadata.config_path {
        log_debug!("Loaded settings from {}", path.display());
    }

    let cwd = std::env::current_dir().ok();
    let folders = resolve_workspace_folders(&args.workspaces, &config.workspaces, cwd.as_deref());
    log_debug!("Workspace folders: {:?}", folders);

    let ctx = Context {
        home: dirs::home_dir(),
        folders,
        settings: config.settings.clone(),
        launch_mode: if args.shell { LaunchMode::Shell } else { config.settings.launch_mode },
    };

    let picker = Prompt::default();
    let result = match &args.command {
        CliCommand::Launch => commands::launch(&ctx, &picker),
        CliCommand::OpenUserConfig => commands::open_user_config(&ctx),
        CliCommand::OpenWorkspaceConfig => commands::open_workspace_config(&ctx, &picker),
        CliCommand::Complete(complete_args) => commands::complete(complete_args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(err) => {
            log_error!("{}", err);
            ui::show_error(&err.to_string());
            ExitCode::FAILURE
        }
    };

    if let Err(err) = LOGGER.flush() {
        eprintln!("❌ Failed to flush debug log: {}", err);
    }
    exit_code
}
