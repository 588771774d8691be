#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PROFILES: &str = r#"[
  {
    "id": "c-100",
    "name": "Asha Rao",
    "headline": "Data Engineer | Streaming, Lakehouse",
    "linkedin": {
      "skills": ["Python", "Spark", "SQL"],
      "experience": [
        {"title": "Senior Data Engineer", "company": "Northwind", "start": "2021-01", "end": null},
        {"title": "Data Engineer", "company": "Contoso", "start": "2019-01", "end": "2021-01"}
      ]
    },
    "github": {
      "repos": [
        {"name": "beta", "stars": 5, "topics": ["spark"]},
        {"name": "alpha", "stars": 5, "topics": ["python"]},
        {"name": "gamma", "stars": 2, "topics": []},
        {"name": "delta", "stars": 1, "topics": []}
      ],
      "contrib_last12mo": 312,
      "languages": ["Python", "Scala"]
    }
  },
  {
    "id": "c-200",
    "name": "Blank Slate",
    "headline": "Student"
  },
  {
    "id": "c-300",
    "name": "Broken Dates",
    "linkedin": {
      "skills": ["Go"],
      "experience": [{"title": "Dev", "company": "X", "start": "Jan 2020", "end": null}]
    }
  }
]"#;

fn write_profiles(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("profiles.json");
    fs::write(&path, PROFILES).expect("profiles should write");
    path
}

fn talent(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("talent-intel").expect("binary should compile");
    cmd.current_dir(dir).env("HOME", dir);
    cmd
}

#[test]
fn report_outputs_json_with_summary_skills_and_repos() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles = write_profiles(dir.path());

    talent(dir.path())
        .arg("report")
        .arg("c-100")
        .arg("--profiles")
        .arg(&profiles)
        .arg("--as-of")
        .arg("2023-01")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Asha Rao has ~4.0 years across 2 roles. Currently at Northwind as Senior Data Engineer (~2y 0m). Focus areas inferred from headline: Streaming, Lakehouse.",
        ))
        .stdout(predicate::str::contains("\"skill\": \"python\""))
        .stdout(predicate::str::contains("\"contrib_last12mo\": 312"))
        .stdout(predicate::str::is_match(r#"(?s)"alpha".*"beta".*"gamma""#).expect("regex"))
        .stdout(predicate::str::contains("delta").not());
}

#[test]
fn report_markdown_format() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles = write_profiles(dir.path());

    talent(dir.path())
        .args(["report", "c-200", "--format", "md", "--as-of", "2023-01"])
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Talent Report: Blank Slate"))
        .stdout(predicate::str::contains("No work history available."));
}

#[test]
fn report_writes_file_when_outdir_given() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles = write_profiles(dir.path());
    let outdir = dir.path().join("outputs");

    talent(dir.path())
        .args(["report", "c-100", "--as-of", "2023-01"])
        .arg("--profiles")
        .arg(&profiles)
        .arg("--outdir")
        .arg(&outdir)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("report file:"));

    let written = fs::read_to_string(outdir.join("c-100_report.json"))
        .expect("report file should exist");
    assert!(written.contains("\"id\": \"c-100\""));
}

#[test]
fn report_unknown_candidate_fails() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles = write_profiles(dir.path());

    talent(dir.path())
        .args(["report", "c-999"])
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("candidate not found: c-999"));
}

#[test]
fn report_surfaces_malformed_dates() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles = write_profiles(dir.path());

    talent(dir.path())
        .args(["report", "c-300", "--as-of", "2023-01"])
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("malformed date token"))
        .stderr(predicate::str::contains("Jan 2020"));
}

#[test]
fn invalid_as_of_is_rejected() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles = write_profiles(dir.path());

    talent(dir.path())
        .args(["report", "c-100", "--as-of", "next month"])
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'next month' for '--as-of"))
        .stderr(predicate::str::contains("malformed date token"));
}

#[test]
fn batch_continues_past_failed_profiles() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles = write_profiles(dir.path());

    talent(dir.path())
        .args(["batch", "--as-of", "2023-01"])
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"id\": \"c-100\""))
        .stdout(predicate::str::contains("\"id\": \"c-200\""))
        .stderr(predicate::str::contains("failed: c-300"))
        .stderr(predicate::str::contains("batch: 2 assembled, 1 failed"));
}

const PROFILES_WITH_UNDECODABLE_ROLE: &str = r#"[
  {"id": "ok", "name": "Fine", "linkedin": {"skills": ["Go"]}},
  {"id": "bad", "linkedin": {"experience": [{"title": "x", "company": "y", "end": null}]}}
]"#;

#[test]
fn batch_keeps_siblings_of_an_undecodable_profile() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles = dir.path().join("mixed.json");
    fs::write(&profiles, PROFILES_WITH_UNDECODABLE_ROLE).expect("profiles should write");

    talent(dir.path())
        .args(["batch", "--as-of", "2023-01"])
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"id\": \"ok\""))
        .stderr(predicate::str::contains("failed: bad: missing field `start`"))
        .stderr(predicate::str::contains("mixed.json"))
        .stderr(predicate::str::contains("batch: 1 assembled, 1 failed"));
}

#[test]
fn report_on_undecodable_profile_names_it() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles = dir.path().join("mixed.json");
    fs::write(&profiles, PROFILES_WITH_UNDECODABLE_ROLE).expect("profiles should write");

    talent(dir.path())
        .args(["report", "ok", "--as-of", "2023-01"])
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"skill\": \"go\""));

    talent(dir.path())
        .args(["report", "bad", "--as-of", "2023-01"])
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid profile bad"));
}

#[test]
fn batch_writes_one_file_per_profile() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles_dir = dir.path().join("profiles");
    fs::create_dir_all(&profiles_dir).expect("profiles dir should create");
    fs::write(
        profiles_dir.join("one.json"),
        r#"{"id": "p-1", "name": "One", "linkedin": {"skills": ["rust"]}}"#,
    )
    .expect("profile should write");
    fs::write(profiles_dir.join("two.json"), r#"[{"id": "p-2", "name": "Two"}]"#)
        .expect("profile should write");
    let outdir = dir.path().join("outputs");

    talent(dir.path())
        .args(["batch", "--as-of", "2023-01"])
        .arg("--profiles")
        .arg(&profiles_dir)
        .arg("--outdir")
        .arg(&outdir)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("batch: 2 assembled, 0 failed"));

    assert!(outdir.join("p-1_report.json").exists());
    assert!(outdir.join("p-2_report.json").exists());
}

#[test]
fn facts_reports_level_and_role_hint() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles = write_profiles(dir.path());

    talent(dir.path())
        .args(["facts", "c-100", "--as-of", "2023-01"])
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"level\": \"Mid\""))
        .stdout(predicate::str::contains("\"role_hint\": \"Data Engineer\""))
        .stdout(predicate::str::contains("\"total_months\": 48"));
}

#[test]
fn project_config_limits_top_skills() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles = write_profiles(dir.path());
    fs::write(dir.path().join("talent.toml"), "[report]\ntop_skills = 1\n")
        .expect("config should write");

    talent(dir.path())
        .args(["report", "c-100", "--as-of", "2023-01"])
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"skill\": \"python\""))
        .stdout(predicate::str::contains("\"skill\": \"spark\"").not());
}

#[test]
fn invalid_config_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profiles = write_profiles(dir.path());
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[scoring]\nfloor = 0.9\nceiling = 0.5\n").expect("config should write");

    talent(dir.path())
        .args(["report", "c-100"])
        .arg("--profiles")
        .arg(&profiles)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config parse error"));
}
