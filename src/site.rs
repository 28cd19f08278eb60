//! Home page document definition and static page content

use crate::dom::{Document, Element, Section};

/// Loading-screen marquee messages with their icon classes
pub const LOADING_MESSAGES: [(&str, &str); 9] = [
    ("🛗 Preparing a smooth ride for you…", "fas fa-elevator"),
    ("🔼 Elevating your experience…", "fas fa-arrow-up"),
    ("⚡ Loading smart elevator solutions…", "fas fa-bolt"),
    ("🏢 Taking you to the next level…", "fas fa-building"),
    ("🛠️ Engineering comfort & safety…", "fas fa-tools"),
    ("🚀 Almost there… hold tight!", "fas fa-rocket"),
    ("🔐 Safety checks in progress…", "fas fa-shield-alt"),
    ("📊 Optimizing performance…", "fas fa-chart-line"),
    ("✨ Designing seamless vertical travel…", "fas fa-magic"),
];

/// Client names shown in the logo marquee
pub const CLIENT_LOGOS: [&str; 30] = [
    "Prestige Group",
    "Brigade Group",
    "Sobha Limited",
    "Godrej Properties",
    "DLF Limited",
    "Mantri Developers",
    "Salarpuria Sattva",
    "Total Environment",
    "Puravankara",
    "Shriram Properties",
    "RMZ Corp",
    "Embassy Group",
    "Manyata Tech Park",
    "Bagmane Tech Park",
    "K Raheja Corp",
    "Phoenix Marketcity",
    "L&T Realty",
    "Tata Housing",
    "Ashiana Housing",
    "Vaishnavi Group",
    "Confident Group",
    "Purvankara",
    "SNN Raj Corp",
    "Hiranandani",
    "Kolkata",
    "Bangalore",
    "Mysore",
    "Hubli",
    "Belagavi",
    "Mangalore",
];

/// Build the home page: chrome, navigation, product grid, both forms and
/// the quote popup, with section geometry for scroll tracking.
pub fn home_page() -> Document {
    let mut doc = Document::new();

    // Chrome
    doc.insert(Element::new("body", "body"));
    doc.insert(Element::new("div", "loadingScreen").with_class("loading-screen"));
    doc.insert(Element::new("div", "loadingProgressFill").with_class("progress-fill-loading"));
    doc.insert(Element::new("div", "loadingMessagesTrack"));
    doc.insert(Element::new("header", "mainHeader"));
    doc.insert(
        Element::new("button", "mobileToggle").with_attr("aria-expanded", "false"),
    );
    doc.insert(Element::new("nav", "mainNav"));

    // Navigation links
    for (id, href, label) in [
        ("navHome", "#home", "Home"),
        ("navProducts", "#products", "Products"),
        ("navServices", "#services", "Services"),
        ("navAbout", "#about", "About"),
        ("navContact", "#contact", "Contact"),
    ] {
        doc.insert(
            Element::new("a", id)
                .with_class("nav-link")
                .with_attr("href", href)
                .with_text(label),
        );
    }

    // Nav dropdowns: a toggle wired to its container via data-dropdown
    for (toggle_id, container_id) in [
        ("productsDropdownToggle", "productsDropdown"),
        ("servicesDropdownToggle", "servicesDropdown"),
    ] {
        doc.insert(
            Element::new("a", toggle_id)
                .with_class("dropdown-toggle")
                .with_attr("data-dropdown", container_id),
        );
        doc.insert(Element::new("div", container_id).with_class("dropdown"));
    }

    doc.insert(
        Element::new("a", "quoteCalculatorBtn")
            .with_class("nav-cta")
            .with_text("Quote Calculator"),
    );

    // Hero
    doc.insert(Element::new("div", "heroContent").with_class("hero-content"));
    doc.insert(
        Element::new("a", "heroCta")
            .with_class("btn-primary")
            .with_class("btn-large")
            .with_class("pulse-animation")
            .with_text("Get Free Quote"),
    );
    doc.insert(Element::new("i", "heroCtaIcon").with_class("fa-quote-left"));
    doc.insert(
        Element::new("button", "quoteTriggerHero")
            .with_class("quote-popup-trigger")
            .with_text("Instant Quote"),
    );
    doc.insert(
        Element::new("button", "quoteTriggerFloating")
            .with_class("quote-popup-trigger")
            .with_text("Get Quote"),
    );

    // Product category filter
    for (id, category) in [
        ("filterAll", "all"),
        ("filterPassenger", "passenger"),
        ("filterHome", "home"),
        ("filterFreight", "freight"),
    ] {
        let mut btn = Element::new("button", id)
            .with_class("category-filter-btn")
            .with_attr("data-category", category);
        if category == "all" {
            btn.add_class("active");
        }
        doc.insert(btn);
    }

    // Product cards with their enquire buttons
    for (card_id, category, enquire_id) in [
        ("productCardPassenger", "passenger", "enquirePassenger"),
        ("productCardHome", "home", "enquireHome"),
        ("productCardFreight", "freight", "enquireFreight"),
        ("productCardHospital", "passenger", "enquireHospital"),
    ] {
        doc.insert(
            Element::new("div", card_id)
                .with_class("product-card")
                .with_attr("data-category", category),
        );
        doc.insert(
            Element::new("a", enquire_id)
                .with_class("btn-outline")
                .with_class("hover-grow")
                .with_text("Enquire Now"),
        );
    }

    // Accordion toggles in the product detail area
    for (toggle_id, toggle_class, content_id) in [
        ("specTogglePassenger", "spec-toggle", "specContentPassenger"),
        ("specToggleHome", "spec-toggle", "specContentHome"),
        ("featuresTogglePassenger", "features-toggle", "featuresContentPassenger"),
    ] {
        doc.insert(
            Element::new("button", toggle_id)
                .with_class(toggle_class)
                .with_attr("data-content", content_id),
        );
        doc.insert(
            Element::new("div", content_id).with_attr("data-scroll-height", "240"),
        );
    }

    // Feature/service/trust cards picked up by the scroll animations
    for (id, class) in [
        ("featureCardSafety", "feature-card"),
        ("featureCardComfort", "feature-card"),
        ("serviceCardInstall", "service-card"),
        ("serviceCardAmc", "service-card"),
        ("trustCardIso", "trust-card"),
    ] {
        doc.insert(Element::new("div", id).with_class(class));
    }

    // Skill progress bars in the about section
    doc.insert(
        Element::new("div", "progressInstallations")
            .with_class("progress-fill")
            .with_attr("data-width", "95"),
    );
    doc.insert(
        Element::new("div", "progressService")
            .with_class("progress-fill")
            .with_attr("data-width", "90"),
    );

    // Contact form
    doc.insert(Element::new("form", "contactForm"));
    for id in ["name", "email", "phone", "location", "interest", "message"] {
        doc.insert(Element::new("input", id));
    }
    doc.insert(Element::new("button", "contactSubmit").with_text("Send Message"));
    doc.insert(Element::new("div", "formMessage").with_class("form-message"));

    // Quote popup
    doc.insert(Element::new("div", "quotePopup").with_class("quote-popup"));
    doc.insert(Element::new("div", "quotePopupOverlay"));
    doc.insert(Element::new("button", "quotePopupClose"));
    doc.insert(Element::new("form", "quoteForm"));
    for id in [
        "quoteName",
        "quoteEmail",
        "quotePhone",
        "quoteLocation",
        "quoteConsent",
    ] {
        doc.insert(Element::new("input", id));
    }
    doc.insert(Element::new("button", "quoteSubmit").with_text("Get My Quote"));
    doc.insert(Element::new("div", "quoteFormMessage").with_class("form-message"));

    // Footer
    doc.insert(Element::new("div", "clientLogosTrack"));
    doc.insert(Element::new("span", "currentYear"));

    // Section geometry in document order
    doc.add_section(Section::new("home", 0, 600));
    doc.add_section(Section::new("products", 600, 900));
    doc.add_section(Section::new("services", 1500, 700));
    doc.add_section(Section::new("about", 2200, 600));
    doc.add_section(Section::new("contact", 2800, 800));

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_has_core_chrome() {
        let doc = home_page();
        for id in [
            "body",
            "loadingScreen",
            "mainHeader",
            "mobileToggle",
            "mainNav",
            "contactForm",
            "formMessage",
            "quotePopup",
            "quoteFormMessage",
            "currentYear",
        ] {
            assert!(doc.contains(id), "missing element {id}");
        }
    }

    #[test]
    fn test_nav_links_cover_all_sections() {
        let doc = home_page();
        let links = doc.ids_with_class("nav-link");
        assert_eq!(links.len(), 5);
        let section_ids: Vec<&str> = doc.sections().iter().map(|s| s.id.as_str()).collect();
        for link in &links {
            let href = doc.attr(link, "href").unwrap();
            assert!(section_ids.contains(&&href[1..]), "dangling link {href}");
        }
    }

    #[test]
    fn test_sections_are_in_document_order() {
        let doc = home_page();
        let tops: Vec<u32> = doc.sections().iter().map(|s| s.top).collect();
        let mut sorted = tops.clone();
        sorted.sort_unstable();
        assert_eq!(tops, sorted);
    }

    #[test]
    fn test_popup_has_multiple_triggers() {
        let doc = home_page();
        assert!(doc.ids_with_class("quote-popup-trigger").len() >= 2);
    }

    #[test]
    fn test_all_filter_starts_active() {
        let doc = home_page();
        assert!(doc.has_class("filterAll", "active"));
        assert!(!doc.has_class("filterPassenger", "active"));
    }

    #[test]
    fn test_ticker_content_is_nonempty() {
        assert!(!LOADING_MESSAGES.is_empty());
        assert!(!CLIENT_LOGOS.is_empty());
    }
}
