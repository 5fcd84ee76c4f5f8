use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary with an empty config home so user settings never leak in.
fn densityshade_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("densityshade").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path());
    cmd
}

#[test]
fn densityshade_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    densityshade_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Shade lower, upper, middle or two-tailed regions",
        ));
}

#[test]
fn middle_plan_lists_calls_in_order() {
    let temp = TempDir::new().unwrap();
    densityshade_cmd(&temp)
        .args(["-t", "middle", "-a", "0", "-b", "1", "--print-plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("region: [0, 1]"))
        .stdout(predicate::str::is_match(
            r"(?s)curve \[-3, 3\].*fill \[0, 1\].*restroke.*axis 1.*axis 2.*box o",
        )
        .unwrap());
}

#[test]
fn two_tailed_plan_erases_the_middle() {
    let temp = TempDir::new().unwrap();
    densityshade_cmd(&temp)
        .args(["--type", "two", "-a", "1", "-b", "0", "--print-plan"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)fill \[-3, 3\].*erase \[0, 1\]").unwrap());
}

#[test]
fn negative_cut_points_parse() {
    let temp = TempDir::new().unwrap();
    densityshade_cmd(&temp)
        .args(["-t", "upper", "-b", "-1.5", "--print-plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("region: [-1.5, 3]"));
}

#[test]
fn missing_cut_points_fail() {
    let temp = TempDir::new().unwrap();
    densityshade_cmd(&temp)
        .args(["-t", "lower", "--print-plan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one of `a` or `b`"));
}

#[test]
fn middle_with_one_cut_point_fails() {
    let temp = TempDir::new().unwrap();
    densityshade_cmd(&temp)
        .args(["-t", "middle", "-a", "0", "--print-plan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("two distinct boundaries"));
}

#[test]
fn unknown_density_and_region_fail() {
    let temp = TempDir::new().unwrap();
    densityshade_cmd(&temp)
        .args(["--dist", "cauchy", "-a", "0", "--print-plan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown density `cauchy`"));

    densityshade_cmd(&temp)
        .args(["-t", "left", "-a", "0", "--print-plan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown region type `left`"));
}

#[test]
fn inverted_interval_fails() {
    let temp = TempDir::new().unwrap();
    densityshade_cmd(&temp)
        .args(["--from", "2", "--to", "-2", "-a", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be finite and less than --to"));
}

#[test]
fn unknown_shade_color_fails() {
    let temp = TempDir::new().unwrap();
    densityshade_cmd(&temp)
        .args(["-a", "0", "--shade-color", "octarine", "--print-plan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown color 'octarine'"));
}

#[test]
fn config_file_sets_break_count() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[shading]\nbreak_count = 4\n").unwrap();

    densityshade_cmd(&temp)
        .args(["-a", "0", "--print-plan", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("fill [-3, 0] (7 vertices)"));
}

#[test]
fn flags_override_the_default_config_location() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("densityshade");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[shading]\nbreak_count = 4\n").unwrap();

    densityshade_cmd(&temp)
        .args(["-a", "0", "--breaks", "9", "--print-plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fill [-3, 0] (12 vertices)"));
}

#[test]
fn out_of_range_breaks_are_clamped() {
    let temp = TempDir::new().unwrap();
    densityshade_cmd(&temp)
        .args(["-a", "0", "--breaks", "0", "--print-plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fill [-3, 0] (4 vertices)"));

    densityshade_cmd(&temp)
        .args(["-a", "0", "--breaks", "18446744073709551615", "--print-plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fill [-3, 0] (100003 vertices)"));
}

#[test]
fn out_of_range_line_width_and_size_still_render() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("clamped.png");

    densityshade_cmd(&temp)
        .args(["-a", "0", "--line-width", "-4", "--width", "10", "--height", "20", "-o"])
        .arg(&target)
        .assert()
        .success();

    let mut file = std::fs::File::open(&target).unwrap();
    let decoded = cairo::ImageSurface::create_from_png(&mut file).unwrap();
    assert_eq!(decoded.width(), 100);
    assert_eq!(decoded.height(), 100);
}

#[test]
fn renders_png_to_explicit_path() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("out").join("figure.png");

    densityshade_cmd(&temp)
        .args([
            "--dist",
            "t(df=4)",
            "-t",
            "two",
            "-a",
            "-2",
            "-b",
            "2",
            "--width",
            "320",
            "--height",
            "240",
            "--main",
            "Two-tailed t",
            "-o",
        ])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("figure.png"));

    let bytes = std::fs::read(&target).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}
