//! SSH config discovery and host extraction.

mod locator;
mod parser;

pub use locator::{ConfigLocation, USER_CONFIG_RELATIVE, WORKSPACE_CONFIG_RELATIVE, locate_config_files, user_config_path, workspace_config_path};
pub use parser::{parse_hosts, read_hosts};
