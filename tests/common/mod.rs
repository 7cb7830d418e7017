// tests/common/mod.rs
// Shared helpers: the checker command and the .docx form builders.
use assert_cmd::Command;

#[allow(dead_code)]
#[path = "../../src/docx/fixture.rs"]
pub mod fixture;

pub fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("cr_form_checker").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}
