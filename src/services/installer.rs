use crate::domain::constants::{CSS_FILES, HTML_COMPONENTS, INDIVIDUAL_PREFIX, JS_FILES};
use crate::domain::models::TemplateVars;
use crate::services::template::render;

/// Shell installer shipped with the individual release. It copies the prefixed
/// files from its own directory into the project it is run from.
const INSTALLER_TEMPLATE: &str = r#"#!/usr/bin/env bash
# {{PROJECT_NAME}} installer
# Detects the layout of the current project and installs boilerplate files
# without overwriting local ones.
set -euo pipefail

SRC_DIR="$(cd "$(dirname "${BASH_SOURCE[0]}")" && pwd)"
CSS_FILES=({{CSS_LIST}})
JS_FILES=({{JS_LIST}})
HTML_FILES=({{HTML_LIST}})

info() { printf '\033[0;34m%s\033[0m\n' "$1"; }
ok() { printf '\033[0;32m%s\033[0m\n' "$1"; }
warn() { printf '\033[1;33m%s\033[0m\n' "$1"; }
fail() { printf '\033[0;31m%s\033[0m\n' "$1" >&2; exit 1; }

HAS_CSS=false; HAS_JS=false; HAS_HTML=false; FRAMEWORK=none
[ -d css ] && HAS_CSS=true
[ -d js ] && HAS_JS=true
[ -f index.html ] && HAS_HTML=true
if [ -f package.json ]; then
    for fw in react vue angular svelte; do
        if grep -q "$fw" package.json 2>/dev/null; then FRAMEWORK=$fw; break; fi
    done
fi

install_file() {
    local src="$SRC_DIR/$1" dst="$2"
    [ -f "$src" ] || { warn "missing $1, skipped"; return; }
    if [ -e "$dst" ]; then warn "$dst exists, kept"; return; fi
    mkdir -p "$(dirname "$dst")"
    cp "$src" "$dst"
    ok "installed $dst"
}

install_css() { for f in "${CSS_FILES[@]}"; do install_file "{{PREFIX}}$f" "css/{{PREFIX}}$f"; done; }
install_js() { for f in "${JS_FILES[@]}"; do install_file "{{PREFIX}}$f" "js/{{PREFIX}}$f"; done; }
install_html() { for f in "${HTML_FILES[@]}"; do install_file "$f" "components/$f"; done; }
install_variables() { install_file "{{PREFIX}}variables.css" "css/{{PREFIX}}variables.css"; }
install_component() {
    read -r -p "component (${HTML_FILES[*]}): " name
    install_file "$name" "components/$name"
}
install_auto() {
    case "$FRAMEWORK" in
        react|vue|angular) install_variables; install_js ;;
        *)
            if $HAS_CSS && $HAS_JS; then install_html
            elif $HAS_HTML && ! $HAS_CSS; then install_css
            else install_css; install_js; install_html
            fi ;;
    esac
}

info "css: $HAS_CSS  js: $HAS_JS  index.html: $HAS_HTML  framework: $FRAMEWORK"
choice="${1:-}"
if [ -z "$choice" ]; then
    echo "1) complete  2) css  3) js  4) html  5) variables  6) component  7) auto  8) cancel"
    read -r -p "option: " choice
fi
case "$choice" in
    1|complete) install_css; install_js; install_html ;;
    2|css) install_css ;;
    3|js) install_js ;;
    4|html) install_html ;;
    5|variables) install_variables ;;
    6|component) install_component ;;
    7|auto) install_auto ;;
    8|cancel) fail "cancelled" ;;
    *) fail "unknown option: $choice" ;;
esac
"#;

pub fn installer_script(vars: &TemplateVars) -> String {
    let mut vars = vars.clone();
    vars.insert("CSS_LIST".to_string(), CSS_FILES.join(" "));
    vars.insert("JS_LIST".to_string(), JS_FILES.join(" "));
    vars.insert("HTML_LIST".to_string(), HTML_COMPONENTS.join(" "));
    vars.insert("PREFIX".to_string(), INDIVIDUAL_PREFIX.to_string());
    render(INSTALLER_TEMPLATE, &vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::template::unresolved;

    #[test]
    fn script_lists_every_shipped_file() {
        let script = installer_script(&TemplateVars::new());
        assert!(script.starts_with("#!/usr/bin/env bash"));
        assert!(script.contains("CSS_FILES=(variables.css reset.css layout.css components.css responsive.css)"));
        assert!(script.contains("JS_FILES=(utils.js main.js)"));
        assert!(script.contains("\"boilerplate-$f\""));
    }

    #[test]
    fn only_project_name_can_stay_unresolved() {
        let script = installer_script(&TemplateVars::new());
        assert_eq!(unresolved(&script), vec!["PROJECT_NAME".to_string()]);
    }
}
