use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn command_scc_mean_help() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("vshicrep")?;
    let output = cmd.arg("scc-mean").arg("--help").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Mean of the SCC scores in hicrep output"));
    Ok(())
}

#[test]
fn command_scc_mean_file() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("vshicrep")?;
    let output = cmd.arg("scc-mean").arg("tests/scc/S1_S2.txt").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    // no trailing newline
    assert_eq!(stdout, "0.97755");

    Ok(())
}

#[test]
fn command_scc_mean_gz() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("vshicrep")?;
    let output = cmd.arg("scc-mean").arg("tests/scc/S1_S2.txt.gz").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, "0.97755");

    Ok(())
}

#[test]
fn command_scc_mean_stdin() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("vshicrep")?;
    cmd.arg("scc-mean").write_stdin("0.5\n0.7\nheader\n0.9\n");
    cmd.assert().success().stdout("0.7");

    let mut cmd = Command::cargo_bin("vshicrep")?;
    cmd.arg("scc-mean").arg("stdin").write_stdin("1\n2\n3");
    cmd.assert().success().stdout("2.0");

    Ok(())
}

#[test]
fn command_scc_mean_huge_scores() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("vshicrep")?;
    cmd.arg("scc-mean").write_stdin("1e308\n1e308\n");
    cmd.assert().success().stdout("1e308");

    Ok(())
}

#[test]
fn command_scc_mean_crlf() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("vshicrep")?;
    cmd.arg("scc-mean").arg("tests/scc/mixed.txt");
    cmd.assert().success().stdout("0.5");

    Ok(())
}

#[test]
fn command_scc_mean_empty() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("vshicrep")?;
    cmd.arg("scc-mean").arg("tests/scc/empty.txt");
    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("no SCC scores"));

    let mut cmd = Command::cargo_bin("vshicrep")?;
    cmd.arg("scc-mean").write_stdin("");
    cmd.assert().failure();

    Ok(())
}

#[test]
fn command_scc_mean_outfile() -> anyhow::Result<()> {
    let tempdir = tempfile::TempDir::new()?;
    let outfile = tempdir.path().join("mean.txt");

    let mut cmd = Command::cargo_bin("vshicrep")?;
    let output = cmd
        .arg("scc-mean")
        .arg("tests/scc/S1_S2.txt")
        .arg("-o")
        .arg(outfile.to_str().unwrap())
        .output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&outfile)?, "0.97755");

    tempdir.close()?;
    Ok(())
}

#[test]
fn command_scc_mean_missing_file() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("vshicrep")?;
    cmd.arg("scc-mean").arg("tests/scc/no_such_file.txt");
    cmd.assert().failure();

    Ok(())
}

#[test]
fn command_scc_scores_file() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("vshicrep")?;
    let output = cmd.arg("scc-scores").arg("tests/scc/S1_S2.txt").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert_eq!(stdout, "[0.9812, 0.9734, 0.9901, 0.9655]");

    Ok(())
}

#[test]
fn command_scc_scores_stdin() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("vshicrep")?;
    cmd.arg("scc-scores").write_stdin("1.0\n2.0\nfoo\n3.0\n");
    cmd.assert().success().stdout("[1.0, 2.0, 3.0]");

    Ok(())
}

#[test]
fn command_scc_scores_empty() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("vshicrep")?;
    cmd.arg("scc-scores").arg("tests/scc/empty.txt");
    cmd.assert().success().stdout("[]");

    Ok(())
}
