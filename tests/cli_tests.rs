use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const HEADER: &str =
    "algo,jobs,machines,runs,time_mean_ms,time_std_ms,makespan_best,makespan_mean,makespan_std";

fn flowshop_plot(input: &Path, outdir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_flowshop-plot"))
        .arg("--in")
        .arg(input)
        .arg("--outdir")
        .arg(outdir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_success_prints_saved_paths() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("results.csv");
    std::fs::write(
        &input,
        format!("{HEADER}\nGA,10,5,30,30.0,3.0,790,795.4,3.1\nGA,20,5,30,60.0,6.0,1301,1310.2,5.5\n"),
    )
    .unwrap();
    let outdir = temp_dir.path().join("charts");

    let output = flowshop_plot(&input, &outdir);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "{stdout}");
    assert_eq!(lines[0], "Saved:");
    for (line, file) in lines[1..].iter().zip([
        "runtime_mean_ms.png",
        "makespan_best.png",
        "makespan_mean.png",
        "makespan_std.png",
    ]) {
        assert_eq!(*line, format!(" - {}", outdir.join(file).display()));
        assert!(outdir.join(file).is_file());
    }
}

#[test]
fn test_empty_input_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("results.csv");
    std::fs::write(&input, format!("{HEADER}\n")).unwrap();
    let outdir = temp_dir.path().join("charts");

    let output = flowshop_plot(&input, &outdir);

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    assert!(!outdir.exists());
}

#[test]
fn test_malformed_row_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("results.csv");
    std::fs::write(&input, format!("{HEADER}\nGA,10,5,30,1.0,0.1,abc,100.0,1.0\n")).unwrap();
    let outdir = temp_dir.path().join("charts");

    let output = flowshop_plot(&input, &outdir);

    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
    assert!(!outdir.exists());
}

#[test]
fn test_missing_input_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let output = flowshop_plot(
        &temp_dir.path().join("nope.csv"),
        &temp_dir.path().join("charts"),
    );
    assert!(!output.status.success());
}
