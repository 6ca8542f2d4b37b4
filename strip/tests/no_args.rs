use std::process::Command;

#[test]
fn no_argument_is_a_silent_no_op() {
    let output = Command::new(env!("CARGO_BIN_EXE_placegen-strip"))
        .output()
        .expect("failed to spawn placegen-strip");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}
