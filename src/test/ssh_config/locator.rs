use super::{ConfigLocation, locate_config_files, user_config_path, workspace_config_path};
use crate::workspace::WorkspaceFolder;
use std::path::{Path, PathBuf};

#[test]
fn user_config_comes_first_then_each_folder() {
    let folders = vec![WorkspaceFolder::from_root("/ws/a"), WorkspaceFolder::from_root("/ws/b")];
    let locations = locate_config_files(Some(Path::new("/home/u")), &folders);

    let paths: Vec<&Path> = locations.iter().map(|location| location.path.as_path()).collect();
    assert_eq!(
        paths,
        vec![
            Path::new("/home/u/.ssh/config"),
            Path::new("/ws/a/.vscode/ssh.config"),
            Path::new("/ws/b/.vscode/ssh.config"),
        ]
    );
    assert!(locations[0].is_user_config());
    assert_eq!(locations[2].workspace.as_ref().map(|folder| folder.name.as_str()), Some("b"));
}

#[test]
fn unknown_home_and_no_folders_yield_nothing() {
    assert!(locate_config_files(None, &[]).is_empty());

    let folders = vec![WorkspaceFolder::from_root("/ws/a")];
    let locations = locate_config_files(None, &folders);
    assert_eq!(locations, vec![ConfigLocation::workspace(&folders[0])]);
}

#[test]
fn path_helpers_join_fixed_relative_locations() {
    assert_eq!(user_config_path(Path::new("/root")), PathBuf::from("/root/.ssh/config"));
    assert_eq!(
        workspace_config_path(&WorkspaceFolder::from_root("/srv/site")),
        PathBuf::from("/srv/site/.vscode/ssh.config")
    );
}
