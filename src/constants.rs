//! Element ids, selectors, class names and markup the page effects bind to.
//!
//! These must match the page's HTML and CSS. Numeric tuning lives in
//! `core::constants`.

// Cursor
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
pub const CURSOR_RING_SELECTOR: &str = ".cursor-ring";
pub const HOVER_TARGETS_SELECTOR: &str =
    "a, button, .cert-card, .skill-category-card, .project-card, .contact-method";
pub const HOVER_CLASS: &str = "hover";

// Background
pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const SECTIONS_SELECTOR: &str = ".section, .hero";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";
pub const ANCHOR_LINK_SELECTOR: &str = r##"a[href^="#"]"##;

// Mobile menu
pub const HAMBURGER_ID: &str = "hamburger";
pub const MOBILE_MENU_ID: &str = "mobileMenu";
pub const MOBILE_LINK_SELECTOR: &str = ".mobile-nav-link";

// Text effects
pub const TYPED_TEXT_ID: &str = "typedText";
pub const TERMINAL_BODY_ID: &str = "terminalBody";
pub const TERMINAL_COMMAND_SELECTOR: &str = ".terminal-line:last-child .command";
pub const TERMINAL_OUTPUT_CLASS: &str = "output";
pub const TERMINAL_LINE_CLASS: &str = "terminal-line";
pub const TERMINAL_PROMPT_HTML: &str =
    r#"<span class="prompt">$</span><span class="command"></span>"#;
pub const TERMINAL_RESET_HTML: &str = r#"<div class="terminal-line"><span class="prompt">$</span><span class="command" id="terminalCmd"></span></div>"#;

// Intersection-driven effects
pub const REVEAL_SELECTOR: &str = ".cert-category, .skill-category-card, .project-card, .timeline-item, .contact-method, .about-text, .about-visual, .cert-summary-card";
pub const REVEAL_CLASS: &str = "reveal";
pub const SKILL_FILL_SELECTOR: &str = ".skill-fill";
pub const SKILL_WIDTH_ATTR: &str = "data-width";
pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const COUNTER_ATTR: &str = "data-count";

// Contact form
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;

// Parallax
pub const PARALLAX_TARGET_SELECTOR: &str = ".terminal-window";
