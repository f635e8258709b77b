//! Integration tests for `cvtex render` and `cvtex check`

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use cvtex_testkit::{temp_dir_in_workspace, write_sample_project};
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn test_render_default_paths() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_sample_project(root);

    Command::new(cargo_bin!("cvtex"))
        .current_dir(root)
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered: output/cv.tex"));

    let tex = fs::read_to_string(root.join("output/cv.tex")).unwrap();
    assert!(tex.starts_with("\\documentclass[11pt]{article}\n"));
    assert!(tex.contains("\\name{Ada Lovelace}\n\\texttt{ada@example.com}\n"));
    assert!(tex.contains("cut error rates by 90\\%"));
    assert!(tex.contains("\\textbf{first}"));
    assert!(tex.contains("Rust {\\color{divider}|} C/\\allowbreak{}C++ {\\color{divider}|} LaTeX"));
    assert!(tex.contains("\\subsection*{Engineer at Analytical Engines}"));
    assert!(tex.contains("\\textbf{50\\%} \\textcolor{divider}{•} \\textbf{\\textbf{2x} throughput}"));
    assert!(tex.contains("\\subsection*{Lead at Difference Ltd}"));
    assert!(!tex.contains("<VAR>"));
    assert!(!tex.contains("<BLOCK>"));
    assert!(!tex.contains("header"));
}

#[test]
fn test_render_with_dir_flag() {
    let temp = temp_dir_in_workspace();
    write_sample_project(temp.path());

    Command::new(cargo_bin!("cvtex"))
        .arg("-C")
        .arg(temp.path())
        .args(["render", "--output", "build/resume.tex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered: build/resume.tex"));

    assert!(temp.path().join("build/resume.tex").is_file());
    assert!(!temp.path().join("output").exists());
}

#[test]
fn test_render_to_stdout_writes_nothing() {
    let temp = temp_dir_in_workspace();
    write_sample_project(temp.path());

    Command::new(cargo_bin!("cvtex"))
        .current_dir(temp.path())
        .args(["render", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\\documentclass"))
        .stdout(predicate::str::contains("\\end{document}"));

    assert!(!temp.path().join("output").exists());
}

#[test]
fn test_render_uses_config_file() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    fs::create_dir_all(root.join("tpl")).unwrap();
    fs::write(
        root.join("resume.toml"),
        "[profile]\nskills = [\"A/B\", \"C\"]\n",
    )
    .unwrap();
    fs::write(
        root.join("tpl/cv.tex"),
        "{{# braces preset #}}\nSkills: {{ profile.skills | pipes }}\n",
    )
    .unwrap();
    fs::write(
        root.join("cvtex.toml"),
        r#"
[paths]
data = "resume.toml"
templates = "tpl"
template = "cv.tex"
output = "out.tex"

[syntax]
preset = "braces"
trim_blocks = true
"#,
    )
    .unwrap();

    Command::new(cargo_bin!("cvtex"))
        .current_dir(root)
        .arg("render")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(root.join("out.tex")).unwrap(),
        "Skills: A/\\allowbreak{}B {\\color{divider}|} C\n"
    );
}

#[test]
fn test_render_missing_data_fails() {
    let temp = temp_dir_in_workspace();
    write_sample_project(temp.path());

    Command::new(cargo_bin!("cvtex"))
        .current_dir(temp.path())
        .args(["render", "--data", "missing.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: DATA_NOT_FOUND"));

    assert!(!temp.path().join("output/cv.tex").exists());
}

#[test]
fn test_render_invalid_data_fails() {
    let temp = temp_dir_in_workspace();
    write_sample_project(temp.path());
    fs::write(temp.path().join("cv.toml"), "[profile\n").unwrap();

    Command::new(cargo_bin!("cvtex"))
        .current_dir(temp.path())
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATA_INVALID"));
}

#[test]
fn test_render_keeps_previous_output_on_error() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_sample_project(root);
    fs::create_dir_all(root.join("output")).unwrap();
    fs::write(root.join("output/cv.tex"), "previous").unwrap();
    fs::write(
        root.join("templates/base.tex.j2"),
        "<VAR>profile.name | shout</VAR>\n",
    )
    .unwrap();

    Command::new(cargo_bin!("cvtex"))
        .current_dir(root)
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown filter 'shout'"));

    assert_eq!(
        fs::read_to_string(root.join("output/cv.tex")).unwrap(),
        "previous"
    );
}

#[test]
fn test_check_reports_size() {
    let temp = temp_dir_in_workspace();
    write_sample_project(temp.path());

    Command::new(cargo_bin!("cvtex"))
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("base.tex.j2 renders cleanly ("));

    assert!(!temp.path().join("output").exists());
}

#[test]
fn test_check_reports_template_errors() {
    let temp = temp_dir_in_workspace();
    write_sample_project(temp.path());
    fs::write(
        temp.path().join("templates/base.tex.j2"),
        "<BLOCK>each jobs |job|</BLOCK>\n<VAR>job.company</VAR>\n",
    )
    .unwrap();

    Command::new(cargo_bin!("cvtex"))
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TEMPLATE_ERROR"))
        .stderr(predicate::str::contains("Unclosed each block"));
}

#[test]
fn test_check_rejects_template_escape() {
    let temp = temp_dir_in_workspace();
    write_sample_project(temp.path());

    Command::new(cargo_bin!("cvtex"))
        .current_dir(temp.path())
        .args(["check", "--template", "../cv.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TEMPLATE_ERROR"));
}

#[test]
fn test_render_verbose_status_goes_to_stderr() {
    let temp = temp_dir_in_workspace();
    write_sample_project(temp.path());

    Command::new(cargo_bin!("cvtex"))
        .current_dir(temp.path())
        .args(["-v", "render", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\\documentclass"))
        .stderr(predicate::str::contains("Rendering 'base.tex.j2'"));

    Command::new(cargo_bin!("cvtex"))
        .current_dir(temp.path())
        .args(["-v", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking").not())
        .stderr(predicate::str::contains("Checking 'base.tex.j2'"));
}

#[test]
fn test_render_tolerates_missing_optional_fields() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_sample_project(root);
    fs::write(root.join("cv.toml"), "[profile]\nname = \"Ada Lovelace\"\n").unwrap();

    Command::new(cargo_bin!("cvtex"))
        .current_dir(root)
        .arg("render")
        .assert()
        .success();

    let tex = fs::read_to_string(root.join("output/cv.tex")).unwrap();
    assert!(tex.contains("\\name{Ada Lovelace}\n\n"));
    assert!(!tex.contains("\\texttt"));
    assert!(!tex.contains("\\subsection*"));
}

#[test]
fn test_render_strict_undefined_from_config() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_sample_project(root);
    fs::write(root.join("cv.toml"), "[profile]\nname = \"Ada Lovelace\"\n").unwrap();
    fs::write(root.join("cvtex.toml"), "[syntax]\nstrict_undefined = true\n").unwrap();

    Command::new(cargo_bin!("cvtex"))
        .current_dir(root)
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Undefined key"));
}
