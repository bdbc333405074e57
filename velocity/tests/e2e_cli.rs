//! End-to-end CLI tests for velocity

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn velocity() -> Command {
    cargo_bin_cmd!("velocity")
}

/// Write `.velocity/config.toml` under a fresh project root.
fn project_with_config(body: &str) -> TempDir {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path().join(".velocity");
    std::fs::create_dir_all(&dir).expect("create .velocity");
    std::fs::write(dir.join("config.toml"), body).expect("write config");
    temp
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        velocity()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("resolve"))
            .stdout(predicate::str::contains("registry"));
    }

    #[test]
    fn shows_version() {
        velocity()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Identifier Resolution
// ============================================

mod resolve {
    use super::*;

    #[test]
    fn resolves_position_in_range() {
        velocity()
            .args(["resolve", "stat-card", "2"])
            .assert()
            .success()
            .stdout("stat-card-2\n");
    }

    #[test]
    fn bike_badge_table_is_separate_from_tiles() {
        velocity()
            .args(["resolve", "bike-badge", "5"])
            .assert()
            .success()
            .stdout("bike-badge-5\n");
    }

    #[test]
    fn out_of_range_resolves_to_sentinel() {
        velocity()
            .args(["resolve", "testimonial-card", "3"])
            .assert()
            .success()
            .stdout("noID\n");
    }

    #[test]
    fn unknown_family_is_rejected() {
        velocity()
            .args(["resolve", "pricing-card", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("pricing-card"));
    }
}

// ============================================
// Manifest
// ============================================

mod registry {
    use super::*;

    #[test]
    fn prints_manifest_json() {
        let output = velocity().arg("registry").output().expect("run velocity");
        assert!(output.status.success());

        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("manifest is JSON");
        assert_eq!(json["sentinel"], "noID");
        assert_eq!(json["families"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["families"][2]["family"], "bike-type");
        assert_eq!(json["families"][2]["ids"][0], "bike-type-0");
    }
}

// ============================================
// Rendering
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_to_stdout() {
        velocity()
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains(r#"data-dev-id="stat-card-3""#))
            .stdout(predicate::str::contains("velocity-dev-registry"));
    }

    #[test]
    fn writes_to_file() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("index.html");

        velocity()
            .args(["render", "--root"])
            .arg(temp.path())
            .arg("--out")
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let html = std::fs::read_to_string(&out).expect("read output");
        assert!(html.contains(r#"data-dev-id="testimonial-card-2""#));
        assert!(html.contains("Start Shopping"));
    }

    #[test]
    fn viewer_flag_greets_by_first_name() {
        velocity()
            .args(["render", "--viewer", "Emily Davis", "--no-manifest"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Welcome, Emily!"))
            .stdout(predicate::str::contains("velocity-dev-registry").not());
    }

    #[test]
    fn initial_flag_renders_hidden_hero() {
        velocity()
            .args(["render", "--initial"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"class="reveal reveal-initial""#));
    }

    #[test]
    fn uses_project_config() {
        let project = project_with_config(
            r#"
[render]
title = "Spring Sale"

[viewer]
display_name = "Mike Chen"
"#,
        );

        velocity()
            .args(["render", "--root"])
            .arg(project.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("<title>Spring Sale</title>"))
            .stdout(predicate::str::contains("Welcome, Mike!"));
    }

    #[test]
    fn malformed_config_is_not_replaced_by_defaults() {
        let project = project_with_config("[render\ntitle = ");

        velocity()
            .args(["render", "--root"])
            .arg(project.path())
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("failed to parse config"));
    }

    #[test]
    fn overfull_content_fails_before_rendering() {
        let project = project_with_config(
            r#"
[[content.testimonials]]
name = "A"
text = "a"
rating = 5

[[content.testimonials]]
name = "B"
text = "b"
rating = 5

[[content.testimonials]]
name = "C"
text = "c"
rating = 5

[[content.testimonials]]
name = "D"
text = "d"
rating = 5
"#,
        );

        velocity()
            .args(["render", "--root"])
            .arg(project.path())
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("exceed the 3 registered identifiers"));
    }
}

// ============================================
// Content Check
// ============================================

mod check {
    use super::*;

    #[test]
    fn builtin_content_passes() {
        let temp = TempDir::new().expect("temp dir");
        velocity()
            .args(["check", "--root"])
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("stat-card: 4/4"))
            .stdout(predicate::str::contains("ok"));
    }

    #[test]
    fn explicit_config_path() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("shop.toml");
        std::fs::write(
            &path,
            "[[content.stats]]\nlabel = \"Rides\"\nvalue = \"9k\"\n",
        )
        .expect("write config");

        velocity()
            .args(["check", "--config"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("stat-card: 1/4"));
    }

    #[test]
    fn malformed_config_fails() {
        let project = project_with_config("[[content.stats]\nlabel = ");

        velocity()
            .args(["check", "--root"])
            .arg(project.path())
            .assert()
            .failure()
            .stdout(predicate::str::contains("ok").not())
            .stderr(predicate::str::contains("failed to parse config"));
    }

    #[test]
    fn unknown_field_value_fails() {
        let project = project_with_config(
            r#"
[[content.bike_types]]
name = "Gravel"
color = "teal"
"#,
        );

        velocity()
            .args(["check", "--root"])
            .arg(project.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse config"));
    }

    #[test]
    fn overfull_stats_fail_even_with_unrated_testimonial() {
        let mut body = String::new();
        for n in 0..5 {
            body.push_str(&format!("[[content.stats]]\nlabel = \"Stat {n}\"\nvalue = \"{n}\"\n\n"));
        }
        body.push_str("[[content.testimonials]]\nname = \"Sarah Johnson\"\ntext = \"Great\"\n");
        let project = project_with_config(&body);

        velocity()
            .args(["check", "--root"])
            .arg(project.path())
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("exceed the 4 registered identifiers"));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("shop.toml");

        velocity()
            .args(["check", "--config"])
            .arg(&path)
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("failed to read config"));
    }

    #[test]
    fn rating_above_five_fails() {
        let project = project_with_config(
            r#"
[[content.testimonials]]
name = "Sarah Johnson"
text = "Great"
rating = 7
"#,
        );

        velocity()
            .args(["check", "--root"])
            .arg(project.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("rating 7"));
    }
}
