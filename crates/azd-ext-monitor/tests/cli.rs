use assert_cmd::Command;
use predicates::prelude::*;

fn ext2() -> Command {
    Command::cargo_bin("azd-ext2").expect("azd-ext2 binary is built")
}

#[test]
fn monitor_collects_metrics() {
    ext2()
        .args(["monitor", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting monitoring for application: web"))
        .stdout(predicate::str::contains("Monitoring active for web - collecting metrics..."))
        .stdout(predicate::str::contains("✓ Error logs analyzed"));
}

#[test]
fn analyze_prints_canned_report() {
    ext2()
        .args(["analyze", "vm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing vm resources..."))
        .stdout(predicate::str::contains("Monthly cost estimate: $245.30"))
        .stdout(predicate::str::contains("Analysis completed for vm resources"));
}

#[test]
fn analyze_with_two_types_fails() {
    ext2()
        .args(["analyze", "vm", "sql"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("received 2"));
}

#[test]
fn unknown_subcommand_prints_banner() {
    ext2()
        .arg("deploy")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Azure Dev Extension 2 - Use 'azd-ext2 --help' for more information.",
        ));
}

#[test]
fn arity_violations_produce_no_command_output() {
    for name in ["monitor", "analyze"] {
        for args in [vec![name], vec![name, "a", "b"]] {
            ext2()
                .args(&args)
                .assert()
                .code(1)
                .stdout(predicate::str::is_empty())
                .stderr(predicate::str::contains(format!(
                    "{name}: accepts 1 arg(s), received {}",
                    args.len() - 1
                )));
        }
    }
}
