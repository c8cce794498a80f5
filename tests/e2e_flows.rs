mod common;

use common::{TestEnv, CSS_FILES, JS_FILES, PROFILE_DIRS};
use predicates::str::contains;
use std::fs;

#[test]
fn no_flags_builds_every_profile() {
    let env = TestEnv::new();
    let out = env.run_json(&[]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["cleaned"], true);
    assert_eq!(
        out["data"]["profiles"].as_array().expect("profiles").len(),
        PROFILE_DIRS.len()
    );
    for dir in PROFILE_DIRS {
        assert!(env.release(dir).join("README.md").is_file(), "{dir}");
    }
}

#[test]
fn no_flags_empties_stale_releases_first() {
    let env = TestEnv::new();
    fs::create_dir_all(env.releases().join("legacy")).expect("create stale dir");
    fs::write(env.releases().join("legacy/old.html"), "old").expect("write stale file");
    env.cmd().assert().success();
    assert!(!env.releases().join("legacy").exists());
}

#[test]
fn complete_release_substitutes_variables_and_slots() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--complete", "--var", "SITE_NAME=Acme Tools"])
        .assert()
        .success();

    let html = env.read("complete", "index.html");
    assert!(html.contains("<h1>Acme Tools</h1>"));
    assert!(html.contains("<title>My Web Project</title>"));
    assert!(html.contains("<aside>contact@example.com</aside>"));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"css/variables.css\">"));
    assert!(html.contains("<script src=\"js/utils.js\"></script>"));
    assert!(!html.contains("{{"), "unresolved placeholder left: {html}");

    let out = env.release("complete");
    for f in CSS_FILES {
        assert!(out.join("css").join(f).is_file(), "{f}");
    }
    for f in JS_FILES {
        assert!(out.join("js").join(f).is_file(), "{f}");
    }
    assert_eq!(
        fs::read_to_string(out.join("img/favicon.svg")).expect("favicon svg"),
        "<svg id=\"fixture\"/>"
    );
    assert!(out.join("img/favicon.ico").is_file());
    assert!(out.join("img/og-image.svg").is_file());
    assert!(out.join("manifest.json").is_file());
}

#[test]
fn config_variables_apply_and_flags_win() {
    let env = TestEnv::new();
    env.write_config(
        "[variables]\nCOMPANY_NAME = \"Configured Co\"\nSITE_NAME = \"Configured Site\"\n",
    );
    env.cmd()
        .args(["--complete", "--var", "SITE_NAME=Flag Site"])
        .assert()
        .success();
    let html = env.read("complete", "index.html");
    assert!(html.contains("Configured Co"));
    assert!(html.contains("<h1>Flag Site</h1>"));
}

#[test]
fn configured_releases_dir_is_used() {
    let env = TestEnv::new();
    env.write_config("releases_dir = \"dist\"\n");
    env.cmd().arg("--css-only").assert().success();
    assert!(env.root.join("dist/css-only/css/reset.css").is_file());
    assert!(!env.releases().exists());
}

#[test]
fn out_flag_redirects_releases() {
    let env = TestEnv::new();
    let out = env.scratch().join("elsewhere");
    env.cmd()
        .arg("--js-only")
        .arg("--out")
        .arg(&out)
        .assert()
        .success();
    assert!(out.join("js-only/js/main.js").is_file());
}

#[test]
fn newer_required_version_exits_with_code_one() {
    let env = TestEnv::new();
    env.write_config("requires = \"999.0\"\n");
    env.cmd()
        .arg("--complete")
        .assert()
        .code(1)
        .stderr(contains("999.0"));
    assert!(!env.release("complete").exists());
}

#[test]
fn broken_config_exits_with_code_one() {
    let env = TestEnv::new();
    env.write_config("[variables\n");
    env.cmd().assert().code(1).stderr(contains("invalid config"));
}

fn assert_sources_intact(env: &TestEnv) {
    assert!(env.root.join("components/header.html").is_file());
    assert!(env.root.join("styles/variables.css").is_file());
    assert!(env.root.join("scripts/main.js").is_file());
    assert!(env.root.join("img/favicon.svg").is_file());
    assert!(env.root.join("manifest.json").is_file());
}

#[test]
fn empty_configured_releases_dir_exits_with_code_one() {
    let env = TestEnv::new();
    env.write_config("releases_dir = \"\"\n");
    env.cmd()
        .assert()
        .code(1)
        .stderr(contains("releases_dir must not be empty"));
    assert_sources_intact(&env);
    assert!(env.root.join("boilerkit.toml").is_file());
}

#[test]
fn releases_dir_at_source_root_is_refused() {
    let env = TestEnv::new();
    env.write_config("releases_dir = \".\"\n");
    env.cmd()
        .assert()
        .code(1)
        .stderr(contains("refusing to use releases dir"));
    assert_sources_intact(&env);
    assert!(env.root.join("boilerkit.toml").is_file());
}

#[test]
fn out_pointing_at_or_above_source_root_is_refused() {
    let env = TestEnv::new();
    for out in [env.root.clone(), env.scratch().to_path_buf()] {
        env.cmd()
            .arg("--out")
            .arg(&out)
            .assert()
            .code(1)
            .stderr(contains("refusing to use releases dir"));
        assert_sources_intact(&env);
    }
}

#[test]
fn out_inside_a_source_dir_is_refused() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--css-only")
        .arg("--out")
        .arg(env.root.join("styles/dist"))
        .assert()
        .code(1);
    assert!(!env.root.join("styles/dist").exists());
}

#[test]
fn missing_inputs_are_skipped_and_reported() {
    let env = TestEnv::empty();
    let out = env.run_json(&["--complete"]);
    assert_eq!(out["ok"], true);
    let skipped = out["data"]["profiles"][0]["skipped"]
        .as_array()
        .expect("skipped list");
    assert!(skipped.len() >= 5, "got {skipped:?}");
    assert!(env.release("complete").join("index.html").is_file());
    assert!(env.release("complete").join("img/favicon.ico").is_file());
}

#[test]
fn individual_release_is_flat_and_prefixed() {
    let env = TestEnv::new();
    env.cmd().arg("--individual").assert().success();
    let out = env.release("individual");
    for f in CSS_FILES.iter().chain(JS_FILES.iter()) {
        assert!(out.join(format!("boilerplate-{f}")).is_file(), "{f}");
    }
    for c in ["header.html", "main-content.html", "aside.html", "footer.html"] {
        assert!(out.join(c).is_file(), "{c}");
    }
    let script = env.read("individual", "smart-install.sh");
    assert!(script.starts_with("#!/usr/bin/env bash"));
    assert!(script.contains("My Web Project installer"));
    assert!(!out.join("css").exists());
}

#[test]
fn html_only_release_copies_components_verbatim() {
    let env = TestEnv::new();
    env.cmd().arg("--html-only").assert().success();
    let header = env.read("html-only", "components/header.html");
    assert!(header.contains("{{SITE_NAME}}"));
    let index = env.read("html-only", "index.html");
    assert!(index.contains("<!-- Include components/footer.html -->"));
    assert!(index.contains("<title>My Web Project</title>"));
}

#[test]
fn analyze_reports_framework_project() {
    let env = TestEnv::new();
    let project = env.scratch().join("app");
    fs::create_dir_all(project.join("css")).expect("create css");
    fs::write(
        project.join("package.json"),
        r#"{"dependencies":{"vue":"^3.4.0"}}"#,
    )
    .expect("write package.json");

    let out = env.run_json(&["--analyze", project.to_str().expect("utf8 path")]);
    assert_eq!(out["data"]["framework"], "vue");
    assert_eq!(out["data"]["has_css"], true);
    assert_eq!(out["data"]["has_js"], false);
    assert_eq!(out["data"]["suggested_profiles"][0], "individual");
    assert!(!env.releases().exists(), "analyze must not build");
}

#[test]
fn assets_flag_generates_source_images() {
    let env = TestEnv::empty();
    let out = env.run_json(&["--assets"]);
    assert_eq!(out["data"]["files"].as_array().expect("files").len(), 4);
    for f in ["favicon.svg", "og-image.svg", "apple-touch-icon.svg", "icon-512.svg"] {
        assert!(env.root.join("img").join(f).is_file(), "{f}");
    }
    assert!(!env.releases().exists());
}
