use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// What the user asked sshpick to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Pick a host and connect to it.
    Launch,
    OpenUserConfig,
    OpenWorkspaceConfig,
    Complete(CompleteArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteArgs {
    /// Text before the cursor on the current line; read from stdin when absent.
    pub line: Option<String>,
    pub trigger: Option<char>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainArgs {
    pub debug: bool,
    pub config: Option<PathBuf>,
    pub workspaces: Vec<PathBuf>,
    /// Force the shell launch mode regardless of settings.
    pub shell: bool,
    pub command: CliCommand,
}

pub fn build_cli_command() -> Command {
    Command::new("sshpick")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pick an SSH host from your config files and connect to it.")
        .propagate_version(true)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging to ~/.sshpick/logs/sshpick.log")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Settings file to use instead of the standard locations")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("workspace")
                .short('w')
                .long("workspace")
                .value_name("DIR")
                .help("Workspace folder whose .vscode/ssh.config is searched (repeatable)")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .global(true),
        )
        .arg(
            Arg::new("shell")
                .long("shell")
                .help("Start your shell on a PTY and type the ssh command into it")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("launch").visible_alias("run").about("Pick a host and connect to it (default)"))
        .subcommand(Command::new("open-user-config").about("Open ~/.ssh/config in your editor"))
        .subcommand(Command::new("open-workspace-config").about("Open a workspace folder's .vscode/ssh.config in your editor"))
        .subcommand(
            Command::new("complete")
                .about("Print option completions for an SSH config line")
                .arg(
                    Arg::new("line")
                        .long("line")
                        .value_name("TEXT")
                        .allow_hyphen_values(true)
                        .help("Text before the cursor on the current line (read from stdin if omitted)"),
                )
                .arg(
                    Arg::new("trigger")
                        .long("trigger")
                        .value_name("CHAR")
                        .value_parser(value_parser!(char))
                        .help("Character that triggered the request"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["json", "plain"])
                        .default_value("json")
                        .help("Output format"),
                ),
        )
}

/// Parse `argv` against `cmd`, exiting with clap's message on invalid input.
pub fn parse_main_args_from<I, T>(cmd: &Command, argv: I) -> MainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd.clone().get_matches_from(argv);
    main_args_from_matches(&matches)
}

/// Parses the process command line.
pub fn main_args() -> MainArgs {
    parse_main_args_from(&build_cli_command(), std::env::args_os())
}

fn main_args_from_matches(matches: &ArgMatches) -> MainArgs {
    let command = match matches.subcommand() {
        Some(("open-user-config", _)) => CliCommand::OpenUserConfig,
        Some(("open-workspace-config", _)) => CliCommand::OpenWorkspaceConfig,
        Some(("complete", sub_matches)) => CliCommand::Complete(CompleteArgs {
            line: sub_matches.get_one::<String>("line").cloned(),
            trigger: sub_matches.get_one::<char>("trigger").copied(),
            format: match sub_matches.get_one::<String>("format").map(String::as_str) {
                Some("plain") => OutputFormat::Plain,
                _ => OutputFormat::Json,
            },
        }),
        _ => CliCommand::Launch,
    };

    MainArgs {
        debug: matches.get_flag("debug"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        workspaces: matches.get_many::<PathBuf>("workspace").map(|vals| vals.cloned().collect()).unwrap_or_default(),
        shell: matches.get_flag("shell"),
        command,
    }
}

#[cfg(test)]
#[path = "test/args.rs"]
mod tests;
