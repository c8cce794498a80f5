#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CSS_FILES: [&str; 5] = [
    "variables.css",
    "reset.css",
    "layout.css",
    "components.css",
    "responsive.css",
];
pub const JS_FILES: [&str; 2] = ["utils.js", "main.js"];
pub const PROFILE_DIRS: [&str; 6] = [
    "complete",
    "minimal",
    "html-only",
    "css-only",
    "js-only",
    "individual",
];

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = make_fixture_source(tmp.path());
        Self { _tmp: tmp, root }
    }

    /// A source root with nothing in it.
    pub fn empty() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("site");
        fs::create_dir_all(&root).expect("create empty root");
        Self { _tmp: tmp, root }
    }

    pub fn scratch(&self) -> &Path {
        self._tmp.path()
    }

    pub fn releases(&self) -> PathBuf {
        self.root.join("releases")
    }

    pub fn release(&self, profile: &str) -> PathBuf {
        self.releases().join(profile)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("boilerkit");
        cmd.arg("--root").arg(&self.root);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_config(&self, body: &str) {
        fs::write(self.root.join("boilerkit.toml"), body).expect("write config");
    }

    pub fn read(&self, profile: &str, rel: &str) -> String {
        fs::read_to_string(self.release(profile).join(rel))
            .unwrap_or_else(|e| panic!("read {profile}/{rel}: {e}"))
    }
}

fn make_fixture_source(base: &Path) -> PathBuf {
    let root = base.join("site");
    let components = root.join("components");
    let styles = root.join("styles");
    let scripts = root.join("scripts");
    fs::create_dir_all(&components).expect("create components");
    fs::create_dir_all(&styles).expect("create styles");
    fs::create_dir_all(&scripts).expect("create scripts");
    fs::create_dir_all(root.join("img")).expect("create img");

    fs::write(
        components.join("base-structure.html"),
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <title>{{PROJECT_NAME}}</title>\n    <meta name=\"description\" content=\"{{PROJECT_DESCRIPTION}}\">\n{{CSS_IMPORTS}}\n</head>\n<body>\n{{HEADER_COMPONENT}}\n{{MAIN_COMPONENT}}\n{{ASIDE_COMPONENT}}\n{{FOOTER_COMPONENT}}\n{{JS_IMPORTS}}\n</body>\n</html>\n",
    )
    .expect("write base structure");
    fs::write(
        components.join("header.html"),
        "    <header class=\"main-header\"><h1>{{SITE_NAME}}</h1></header>",
    )
    .expect("write header");
    fs::write(
        components.join("main-content.html"),
        "    <main><h2>{{HERO_TITLE}}</h2><a href=\"#\">{{CTA_TEXT}}</a></main>",
    )
    .expect("write main");
    fs::write(components.join("aside.html"), "    <aside>{{CONTACT_EMAIL}}</aside>")
        .expect("write aside");
    fs::write(
        components.join("footer.html"),
        "    <footer>&copy; {{CURRENT_YEAR}} {{COMPANY_NAME}}</footer>",
    )
    .expect("write footer");

    for f in CSS_FILES {
        fs::write(styles.join(f), format!("/* {f} */\n:root {{}}\n")).expect("write css");
    }
    for f in JS_FILES {
        fs::write(scripts.join(f), format!("// {f}\n")).expect("write js");
    }
    fs::write(root.join("img/favicon.svg"), "<svg id=\"fixture\"/>").expect("write svg");
    fs::write(
        root.join("manifest.json"),
        serde_json::json!({"name": "Fixture", "short_name": "fx"}).to_string(),
    )
    .expect("write manifest");

    root
}
