//! The user-facing commands.

use crate::args::{CompleteArgs, OutputFormat};
use crate::completion::{self, CompletionError, CompletionItem};
use crate::config::{LaunchMode, Settings};
use crate::hosts::{HostEntry, collect_hosts};
use crate::launcher::{self, SshInvocation};
use crate::opener::{self, ConfigTarget};
use crate::ssh_config::{locate_config_files, user_config_path, workspace_config_path};
use crate::ui::{self, PickItem, Picker};
use crate::workspace::WorkspaceFolder;
use crate::{Result, log_debug, log_info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const HOST_PICKER_TITLE: &str = "Select an SSH host";
const FOLDER_PICKER_TITLE: &str = "Select a workspace folder";

/// Environment the commands run against.
#[derive(Debug, Clone)]
pub struct Context {
    pub home: Option<PathBuf>,
    pub folders: Vec<WorkspaceFolder>,
    pub settings: Settings,
    pub launch_mode: LaunchMode,
}

/// What an open-config command resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenRequest {
    Target(ConfigTarget),
    /// No base directory to open a config in; carries the message for the user.
    Unavailable(String),
    Cancelled,
}

/// Gather hosts from every config file and let the user choose one.
pub fn pick_host(ctx: &Context, picker: &dyn Picker) -> Result<Option<HostEntry>> {
    let locations = locate_config_files(ctx.home.as_deref(), &ctx.folders);
    let mut hosts = collect_hosts(&locations, ctx.home.as_deref(), &ctx.folders)?;

    let items: Vec<PickItem> = hosts
        .iter()
        .map(|host| PickItem::new(host.label.clone(), Some(host.description.clone())))
        .collect();

    let Some(index) = picker.pick(HOST_PICKER_TITLE, &items)? else {
        return Ok(None);
    };
    if index >= hosts.len() {
        return Ok(None);
    }
    Ok(Some(hosts.swap_remove(index)))
}

/// Pick a host and connect to it.
pub fn launch(ctx: &Context, picker: &dyn Picker) -> Result<ExitCode> {
    let Some(host) = pick_host(ctx, picker)? else {
        log_debug!("Host selection cancelled");
        return Ok(ExitCode::SUCCESS);
    };

    log_info!("Selected host {} from {}", host.label, host.source.path.display());
    let invocation = SshInvocation::for_host(&host);
    launcher::launch(&invocation, ctx.launch_mode, &ctx.settings)
}

pub fn user_config_request(ctx: &Context) -> Result<OpenRequest> {
    let Some(home) = ctx.home.as_deref() else {
        return Ok(OpenRequest::Unavailable(
            "No home directory is known, so there is no user SSH config to open.".to_string(),
        ));
    };
    Ok(OpenRequest::Target(opener::prepare_config_target(&user_config_path(home))?))
}

pub fn workspace_config_request(ctx: &Context, picker: &dyn Picker) -> Result<OpenRequest> {
    let folder = match ctx.folders.as_slice() {
        [] => {
            return Ok(OpenRequest::Unavailable(
                "No workspace folder is open, so there is no workspace SSH config to open.".to_string(),
            ));
        }
        [only] => only,
        several => {
            let items: Vec<PickItem> = several
                .iter()
                .map(|folder| PickItem::new(folder.name.clone(), Some(folder.root.to_string_lossy().into_owned())))
                .collect();
            match picker.pick(FOLDER_PICKER_TITLE, &items)? {
                Some(index) if index < several.len() => &several[index],
                _ => return Ok(OpenRequest::Cancelled),
            }
        }
    };

    Ok(OpenRequest::Target(opener::prepare_config_target(&workspace_config_path(folder))?))
}

pub fn open_user_config(ctx: &Context) -> Result<ExitCode> {
    let request = user_config_request(ctx)?;
    finish_open(ctx, request)
}

pub fn open_workspace_config(ctx: &Context, picker: &dyn Picker) -> Result<ExitCode> {
    let request = workspace_config_request(ctx, picker)?;
    finish_open(ctx, request)
}

fn finish_open(ctx: &Context, request: OpenRequest) -> Result<ExitCode> {
    match request {
        OpenRequest::Target(target) => {
            let editor = opener::editor_from_env(ctx.settings.editor.as_deref());
            opener::open_in_editor(&target, &editor)
        }
        OpenRequest::Unavailable(message) => {
            ui::show_info(&message);
            Ok(ExitCode::SUCCESS)
        }
        OpenRequest::Cancelled => Ok(ExitCode::SUCCESS),
    }
}

/// Print completions for the line prefix given on the command line or stdin.
pub fn complete(args: &CompleteArgs) -> Result<ExitCode> {
    let line = match &args.line {
        Some(line) => line.clone(),
        None => read_line_prefix(&mut io::stdin().lock())?,
    };

    let items = completion::completions_for_request(&line, args.trigger)?;
    log_debug!("Returning {} completion item(s) for {:?}", items.len(), line);

    let stdout = io::stdout();
    write_completions(&mut stdout.lock(), &items, args.format)?;
    Ok(ExitCode::SUCCESS)
}

fn read_line_prefix(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

fn write_completions(out: &mut impl Write, items: &[CompletionItem], format: OutputFormat) -> std::result::Result<(), CompletionError> {
    let output_error = |err: &dyn std::fmt::Display| CompletionError::OutputError(err.to_string());
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, items).map_err(|err| output_error(&err))?;
            writeln!(out).map_err(|err| output_error(&err))?;
        }
        OutputFormat::Plain => {
            for item in items {
                writeln!(out, "{}", item.label).map_err(|err| output_error(&err))?;
            }
        }
    }
    out.flush().map_err(|err| output_error(&err))
}

#[cfg(test)]
#[path = "test/commands.rs"]
mod tests;
