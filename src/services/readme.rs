use crate::domain::constants::{CSS_FILES, HTML_COMPONENTS, INDIVIDUAL_PREFIX, INSTALLER_NAME, JS_FILES};
use crate::domain::models::{Profile, TemplateVars};
use crate::services::template::render;

const HEADER: &str = "# {{PROJECT_NAME}}: modular HTML5 boilerplate";

pub fn readme_for(profile: Profile, vars: &TemplateVars) -> String {
    let body = match profile {
        Profile::Complete => "\
## Complete version

Semantic HTML5 structure, the full modular CSS system, JavaScript utilities,
basic assets (favicon, social image) and a PWA `manifest.json`.

## Usage
1. Customize the content in `index.html`
2. Adjust the styles in `css/`
3. Add your JavaScript in `js/`
4. Replace the images in `img/`
"
        .to_string(),
        Profile::Minimal => "\
## Minimal version

A lightweight page: header, hero, one content section and footer.
Only `variables.css` and `reset.css` are shipped next to `css/minimal.css`,
and `js/minimal.js` only adds smooth scrolling.
"
        .to_string(),
        Profile::HtmlOnly => format!(
            "\
## HTML components

`index.html` marks where each component goes. The components live in
`components/`:

{}
",
            bullet_list(HTML_COMPONENTS.iter().map(|c| format!("components/{c}")))
        ),
        Profile::CssOnly => format!(
            "\
## CSS system

Import the stylesheets in this order:

{}

Every design token is a custom property in `variables.css`, e.g.
`var(--primary-color)`.
",
            bullet_list(CSS_FILES.iter().map(|f| format!("css/{f}")))
        ),
        Profile::JsOnly => format!(
            "\
## JavaScript utilities

Load the scripts in this order:

{}

`utils.js` exposes the DOM, validation, storage and HTTP helpers;
`main.js` wires up navigation and forms.
",
            bullet_list(JS_FILES.iter().map(|f| format!("js/{f}")))
        ),
        Profile::Individual => format!(
            "\
## Individual files

Every file carries the `{INDIVIDUAL_PREFIX}` prefix so it can be dropped into an
existing project without clashing with local names.

{}

Run `./{INSTALLER_NAME}` from the root of your project. It inspects what is
already there and offers the matching install option.
",
            bullet_list(
                CSS_FILES
                    .iter()
                    .chain(JS_FILES.iter())
                    .map(|f| format!("{INDIVIDUAL_PREFIX}{f}"))
                    .chain(HTML_COMPONENTS.iter().map(|c| c.to_string()))
            )
        ),
    };
    render(&format!("{HEADER}\n\n{body}"), vars)
}

fn bullet_list(items: impl Iterator<Item = String>) -> String {
    items
        .map(|i| format!("- `{i}`"))
        .collect::<Vec<_>>()
        .join("\n")
}
