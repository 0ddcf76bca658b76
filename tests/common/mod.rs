use assert_cmd::Command;

pub fn ripen_cmd() -> Command {
    Command::cargo_bin("ripen").unwrap()
}
