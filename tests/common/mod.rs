use assert_cmd::Command;

pub fn notes_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ocean-notes").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
