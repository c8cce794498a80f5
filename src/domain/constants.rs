pub const BASE_STRUCTURE: &str = "base-structure.html";

pub const CSS_FILES: [&str; 5] = [
    "variables.css",
    "reset.css",
    "layout.css",
    "components.css",
    "responsive.css",
];
pub const MINIMAL_CSS_FILES: [&str; 2] = ["variables.css", "reset.css"];
pub const JS_FILES: [&str; 2] = ["utils.js", "main.js"];
pub const HTML_COMPONENTS: [&str; 4] = [
    "header.html",
    "main-content.html",
    "aside.html",
    "footer.html",
];
pub const SVG_ASSETS: [&str; 4] = [
    "favicon.svg",
    "og-image.svg",
    "apple-touch-icon.svg",
    "icon-512.svg",
];

pub const INDIVIDUAL_PREFIX: &str = "boilerplate-";
pub const INSTALLER_NAME: &str = "smart-install.sh";

pub const SLOT_HEADER: &str = "HEADER_COMPONENT";
pub const SLOT_MAIN: &str = "MAIN_COMPONENT";
pub const SLOT_ASIDE: &str = "ASIDE_COMPONENT";
pub const SLOT_FOOTER: &str = "FOOTER_COMPONENT";
pub const SLOT_CSS: &str = "CSS_IMPORTS";
pub const SLOT_JS: &str = "JS_IMPORTS";

pub const DEFAULT_VARS: [(&str, &str); 18] = [
    ("PROJECT_NAME", "My Web Project"),
    ("PROJECT_DESCRIPTION", "A modern web project"),
    ("PROJECT_KEYWORDS", "html5, responsive, semantic, modular"),
    ("PROJECT_AUTHOR", "Your Name"),
    ("PROJECT_URL", "https://example.com"),
    ("SITE_NAME", "My Site"),
    ("HERO_TITLE", "Welcome to My Site"),
    ("HERO_SUBTITLE", "A modern, professional website"),
    ("CTA_TEXT", "Get started"),
    ("COMPANY_NAME", "My Company"),
    ("CONTACT_EMAIL", "contact@example.com"),
    ("CONTACT_PHONE", "+1 234 567 8900"),
    ("COMPANY_ADDRESS", "123 Main Street, City, Country"),
    ("AUTHOR_NAME", "Your Name"),
    ("SOCIAL_FACEBOOK", "https://facebook.com/yourcompany"),
    ("SOCIAL_TWITTER", "https://twitter.com/yourcompany"),
    ("SOCIAL_INSTAGRAM", "https://instagram.com/yourcompany"),
    ("SOCIAL_LINKEDIN", "https://linkedin.com/company/yourcompany"),
];

/// 1x1 transparent ICO.
pub const FAVICON_ICO: [u8; 70] = [
    0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x18, 0x00, 0x30,
    0x00, 0x00, 0x00, 0x16, 0x00, 0x00, 0x00, 0x28, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
    0x02, 0x00, 0x00, 0x00, 0x01, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub const HTML_ONLY_SLOTS: [(&str, &str); 6] = [
    (SLOT_CSS, "    <!-- Add your CSS files here -->"),
    (SLOT_JS, "    <!-- Add your JavaScript files here -->"),
    (SLOT_HEADER, "    <!-- Include components/header.html -->"),
    (SLOT_MAIN, "    <!-- Include components/main-content.html -->"),
    (SLOT_ASIDE, "    <!-- Include components/aside.html -->"),
    (SLOT_FOOTER, "    <!-- Include components/footer.html -->"),
];

pub const MINIMAL_MAIN: &str = r#"    <main id="main-content" role="main" class="main-content">
        <section class="hero" aria-labelledby="hero-title">
            <div class="container">
                <h2 id="hero-title">{{HERO_TITLE}}</h2>
                <p class="hero-subtitle">{{HERO_SUBTITLE}}</p>
                <button class="cta-button">{{CTA_TEXT}}</button>
            </div>
        </section>

        <section class="content-section">
            <div class="container">
                <h2>Main content</h2>
                <p>Your site content goes here.</p>
            </div>
        </section>
    </main>"#;

pub const MINIMAL_FOOTER: &str = r#"    <footer role="contentinfo" class="main-footer">
        <div class="container">
            <p>&copy; {{CURRENT_YEAR}} {{COMPANY_NAME}}. All rights reserved.</p>
        </div>
    </footer>"#;

pub const MINIMAL_CSS: &str = r#"/* Modular HTML5 boilerplate: minimal build */

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1rem;
}

.main-header {
    background: var(--dark-color);
    color: white;
    padding: 1rem 0;
}

.main-header .container {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.nav-list {
    display: flex;
    list-style: none;
    gap: 1rem;
    margin: 0;
    padding: 0;
}

.nav-link {
    color: white;
    text-decoration: none;
    padding: 0.5rem 1rem;
    border-radius: 4px;
}

.nav-link:hover {
    background-color: var(--primary-color);
}

.hero {
    background: linear-gradient(135deg, var(--primary-color), var(--info-color));
    color: white;
    text-align: center;
    padding: 3rem 0;
}

.cta-button {
    border: none;
    padding: 1rem 2rem;
    border-radius: 4px;
    cursor: pointer;
}

.content-section {
    padding: 3rem 0;
}

.main-footer {
    background: var(--dark-color);
    color: white;
    text-align: center;
    padding: 2rem 0;
}

@media (max-width: 768px) {
    .main-header .container {
        flex-direction: column;
        gap: 1rem;
    }

    .nav-list {
        justify-content: center;
    }
}
"#;

pub const MINIMAL_JS: &str = r##"(function () {
    'use strict';

    function initSmoothScroll() {
        document.querySelectorAll('a[href^="#"]').forEach(function (link) {
            link.addEventListener('click', function (e) {
                var target = document.getElementById(this.getAttribute('href').substring(1));
                if (target) {
                    e.preventDefault();
                    target.scrollIntoView({ behavior: 'smooth', block: 'start' });
                }
            });
        });
    }

    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', initSmoothScroll);
    } else {
        initSmoothScroll();
    }
})();
"##;

pub const PLACEHOLDER_OG_IMAGE: &str = r##"<svg width="1200" height="630" xmlns="http://www.w3.org/2000/svg">
  <rect width="1200" height="630" fill="#007bff"/>
  <text x="600" y="315" font-family="Arial, sans-serif" font-size="48" fill="white" text-anchor="middle" dominant-baseline="middle">{{PROJECT_NAME}}</text>
</svg>
"##;

pub const PLACEHOLDER_APPLE_TOUCH_ICON: &str = r##"<svg width="180" height="180" xmlns="http://www.w3.org/2000/svg">
  <rect width="180" height="180" fill="#007bff" rx="20"/>
  <text x="90" y="95" font-family="Arial, sans-serif" font-size="24" fill="white" text-anchor="middle" dominant-baseline="middle">HTML5</text>
</svg>
"##;

pub const SOURCE_FAVICON: &str = r##"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg">
  <rect width="32" height="32" rx="6" fill="#007bff"/>
  <text x="16" y="20" font-family="Arial" font-size="10" font-weight="bold" fill="white" text-anchor="middle">H5</text>
</svg>
"##;

pub const SOURCE_ICON_512: &str = r##"<svg width="512" height="512" viewBox="0 0 512 512" xmlns="http://www.w3.org/2000/svg">
  <rect width="512" height="512" rx="96" fill="#007bff"/>
  <text x="256" y="300" font-family="Arial" font-size="160" font-weight="bold" fill="white" text-anchor="middle">H5</text>
</svg>
"##;
