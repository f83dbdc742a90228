use assert_cmd::Command;

pub fn tripplan_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tripplan").unwrap();
    cmd.env_remove("TRIPPLAN_CONFIG");
    cmd.env_remove("TRIPPLAN_LOG");
    cmd
}
