use assert_cmd::Command;

pub fn coursenotes_cmd() -> Command {
    let mut cmd = Command::cargo_bin("coursenotes").unwrap();
    cmd.env_remove("COURSENOTES_ROOT");
    cmd.env_remove("COURSENOTES_LOG");
    cmd
}
