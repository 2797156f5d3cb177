use super::map_exit_code;
use std::process::ExitCode;

#[test]
fn returns_success_exit_code_for_success_status() {
    assert_eq!(map_exit_code(true, Some(0)), ExitCode::SUCCESS);
}

#[test]
fn preserves_non_zero_exit_status_in_u8_range() {
    assert_eq!(map_exit_code(false, Some(255)), ExitCode::from(255));
    assert_eq!(map_exit_code(false, Some(23)), ExitCode::from(23));
}

#[test]
fn clamps_out_of_range_status_and_defaults_missing_to_one() {
    assert_eq!(map_exit_code(false, Some(300)), ExitCode::from(255));
    assert_eq!(map_exit_code(false, Some(-1)), ExitCode::from(255));
    assert_eq!(map_exit_code(false, None), ExitCode::from(1));
}
