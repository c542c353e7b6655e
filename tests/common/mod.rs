use assert_cmd::Command;
use assert_cmd::cargo_bin;

/// The binary with logging switched off and locale settings pinned, so the
/// caller's environment cannot change the output.
pub fn incomecalc() -> Command {
    let mut cmd = Command::new(cargo_bin!("incomecalc"));
    cmd.env("INCOMECALC_LOG", "off")
        .env_remove("INCOMECALC_LOCALE")
        .env_remove("INCOMECALC_CURRENCY");
    cmd
}
