//! Page wiring and core behavior logic

use crate::config::SiteConfig;
use crate::dom::{Document, Key, PageEvent, PageProbe};
use crate::site::{CLIENT_LOGOS, LOADING_MESSAGES};
use crate::state::{
    normalize_phone, validate, FieldKind, FormKind, LoadingState, PageState, PopupState,
};
use crate::timers::{DeferredAction, TimerQueue};
use anyhow::Result;
use chrono::Datelike;
use std::time::{Duration, Instant};

/// Classes whose elements participate in the scroll-in card animations
const ANIMATED_CARD_CLASSES: [&str; 6] = [
    "product-card",
    "feature-card",
    "service-card",
    "industry-card",
    "tech-item",
    "trust-card",
];

/// Visual level of a form message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageLevel {
    Error,
    Info,
}

/// Decision returned synchronously from a submit attempt, before any
/// deferred work is scheduled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the browser's native POST to the relay endpoint
    /// proceeds and lands on the given redirect page
    Proceed { redirect: String },
    /// Validation failed, or the form is already submitting
    Blocked,
}

/// Main application struct: the page document, per-view state and the
/// one-shot timer queue, driven entirely by [`PageEvent`]s.
pub struct App {
    pub state: PageState,
    pub dom: Document,
    pub timers: TimerQueue,
    pub loading: Option<LoadingState>,
    config: SiteConfig,
}

impl App {
    /// Error highlight lifetime on offending fields
    const FIELD_ERROR_TTL: Duration = Duration::from_secs(2);
    /// Error message lifetime in the form message area
    const MESSAGE_TTL: Duration = Duration::from_secs(5);
    /// Delay before focusing the popup's first field, covering the open
    /// transition
    const POPUP_FOCUS_DELAY: Duration = Duration::from_millis(300);
    /// Delay before re-arming a filtered card's appear animation
    const CARD_RESTART_DELAY: Duration = Duration::from_millis(10);
    /// Scroll offset past which the header gets its scrolled treatment
    const STICKY_SCROLL_THRESHOLD: u32 = 100;

    /// Create the app and run the page init wiring
    pub fn new(dom: Document, config: SiteConfig, now: Instant) -> Self {
        let state = PageState::new(config.initial_viewport_width(), config.mobile_breakpoint());
        let mut app = Self {
            state,
            dom,
            timers: TimerQueue::default(),
            loading: Some(LoadingState::new(now)),
            config,
        };
        app.init_page();
        app
    }

    /// One-time page setup: footer year, CTA retargeting, animation
    /// staggering, ticker population and the loading-screen scroll lock
    fn init_page(&mut self) {
        let year = chrono::Utc::now().year().to_string();
        self.dom.set_text("currentYear", &year);

        self.retarget_quote_buttons();
        self.stagger_card_animations();
        self.populate_ticker("loadingMessagesTrack", "loadingMessage", "loading-message");
        self.populate_ticker("clientLogosTrack", "clientLogo", "client-logo-item");

        // Page scroll stays locked until the loading overlay goes away
        self.dom.set_style("body", "overflow", "hidden");
    }

    /// Point every quote CTA at the calculator page and swap the hero
    /// icon to the calculator glyph
    fn retarget_quote_buttons(&mut self) {
        let calculator = self.config.calculator_page().to_string();

        for id in self.dom.ids_with_class("pulse-animation") {
            let Some(el) = self.dom.get(&id) else { continue };
            if !(el.text.contains("Get Free Quote") || el.text.contains("Get Quote")) {
                continue;
            }
            self.dom.set_attr(&id, "href", &calculator);

            let icon_id = format!("{id}Icon");
            if self.dom.has_class(&icon_id, "fa-quote-left") {
                self.dom.remove_class(&icon_id, "fa-quote-left");
                self.dom.add_class(&icon_id, "fa-calculator");
            }
        }

        for id in self.dom.ids_with_class("hover-grow") {
            let Some(el) = self.dom.get(&id) else { continue };
            if el.has_class("btn-outline")
                && (el.text.contains("Enquire Now") || el.text.contains("Get Quote"))
            {
                self.dom.set_attr(&id, "href", &calculator);
            }
        }
    }

    /// Give every animated card a staggered delay and park its animation
    /// until it scrolls into view
    fn stagger_card_animations(&mut self) {
        let mut index = 0usize;
        for class in ANIMATED_CARD_CLASSES {
            for id in self.dom.ids_with_class(class) {
                let delay = format!("{:.1}s", index as f32 * 0.1);
                self.dom.set_style(&id, "animation-delay", &delay);
                self.dom.set_style(&id, "animation-play-state", "paused");
                index += 1;
            }
        }
    }

    /// Append the duplicated marquee items into a ticker track. Skipped
    /// entirely when the track element is absent from the page.
    fn populate_ticker(&mut self, track_id: &str, item_prefix: &str, item_class: &str) {
        if !self.dom.contains(track_id) {
            return;
        }

        let items: Vec<(String, Option<&str>)> = match item_prefix {
            "loadingMessage" => LOADING_MESSAGES
                .iter()
                .map(|(text, icon)| (text.to_string(), Some(*icon)))
                .collect(),
            _ => CLIENT_LOGOS.iter().map(|name| (name.to_string(), None)).collect(),
        };

        // Duplicate once for a seamless loop
        for (i, (text, icon)) in items.iter().chain(items.iter()).enumerate() {
            let mut el = crate::dom::Element::new("div", &format!("{item_prefix}{i}"))
                .with_class(item_class)
                .with_text(text);
            if let Some(icon) = icon {
                el.set_attr("data-icon", icon);
            }
            self.dom.insert(el);
        }
    }

    /// Dispatch one page event
    pub fn handle_event(&mut self, event: PageEvent, now: Instant) -> Result<()> {
        match event {
            PageEvent::Tick => self.tick(now),
            PageEvent::KeyDown { key } => self.handle_key(key),
            PageEvent::Click { target } => self.handle_click(&target, now),
            PageEvent::OutsideClick => {
                if self.state.nav.menu_open {
                    self.close_menus();
                }
            }
            PageEvent::Input { target, value } => self.handle_input(&target, value),
            PageEvent::Blur { target } => self.handle_blur(&target),
            PageEvent::Submit { form } => {
                if let Some(kind) = Self::form_element(&form) {
                    self.handle_submit(kind, now);
                }
            }
            PageEvent::Scroll { y } => self.handle_scroll(y),
            PageEvent::Resize { width } => self.handle_resize(width),
            PageEvent::Intersect { target } => self.handle_intersection(&target),
        }
        Ok(())
    }

    fn handle_key(&mut self, key: Key) {
        // Escape only acts while the popup is up; everything else falls
        // through to the browser
        if key == Key::Escape && self.state.popup == PopupState::Open {
            self.close_popup();
        }
    }

    fn handle_click(&mut self, target: &str, now: Instant) {
        if self.dom.has_class(target, "quote-popup-trigger") {
            self.open_popup(now);
            return;
        }

        match target {
            "quotePopupClose" | "quotePopupOverlay" => {
                self.close_popup();
                return;
            }
            "mobileToggle" => {
                let open = self.state.nav.toggle_menu();
                self.dom.toggle_class("mobileToggle", "active");
                self.dom.toggle_class("mainNav", "active");
                self.dom
                    .set_attr("mobileToggle", "aria-expanded", if open { "true" } else { "false" });
                return;
            }
            "quoteCalculatorBtn" => {
                self.state.pending_navigation = Some(self.config.calculator_page().to_string());
                if self.state.nav.is_mobile() {
                    self.close_menus();
                }
                return;
            }
            _ => {}
        }

        if self.dom.has_class(target, "dropdown-toggle") {
            // Desktop dropdowns are hover-driven; only mobile toggles here
            if self.state.nav.is_mobile() {
                if let Some(container) = self.dom.attr(target, "data-dropdown").map(str::to_string)
                {
                    self.state.nav.toggle_dropdown(&container);
                    self.dom.toggle_class(&container, "active");
                }
            }
            return;
        }

        if self.dom.has_class(target, "nav-link") {
            if self.state.nav.is_mobile() {
                self.close_menus();
            }
            if let Some(href) = self.dom.attr(target, "href").map(str::to_string) {
                if let Some(section) = href.strip_prefix('#') {
                    if !section.is_empty() && !href.contains(".html") {
                        self.scroll_to_section(section);
                    }
                }
            }
            return;
        }

        if self.dom.has_class(target, "category-filter-btn") {
            if let Some(category) = self.dom.attr(target, "data-category").map(str::to_string) {
                self.apply_category_filter(&category, now);
            }
            return;
        }

        if self.dom.has_class(target, "spec-toggle") || self.dom.has_class(target, "features-toggle")
        {
            self.toggle_accordion(target);
            return;
        }

        if let Some(kind) = self.state.form_of_field(target) {
            let form = self.state.form_mut(kind);
            if form.fields.get(target).map(|f| f.kind) == Some(FieldKind::Consent) {
                let checked = form.fields.toggle_checked(target);
                self.dom
                    .set_attr(target, "checked", if checked { "true" } else { "false" });
            }
        }
    }

    fn toggle_accordion(&mut self, toggle_id: &str) {
        let opened = self.dom.toggle_class(toggle_id, "active");
        let Some(content) = self.dom.attr(toggle_id, "data-content").map(str::to_string) else {
            return;
        };
        if opened {
            let height = self
                .dom
                .attr(&content, "data-scroll-height")
                .unwrap_or("0")
                .to_string();
            self.dom.add_class(&content, "active");
            self.dom.set_style(&content, "max-height", &format!("{height}px"));
        } else if let Some(el) = self.dom.get_mut(&content) {
            el.remove_class("active");
            el.clear_style("max-height");
        }
    }

    fn handle_input(&mut self, target: &str, value: String) {
        let Some(kind) = self.state.form_of_field(target) else {
            return;
        };
        let form = self.state.form_mut(kind);

        match form.fields.get(target).map(|f| f.kind) {
            Some(FieldKind::Phone) => {
                let normalized = normalize_phone(&value);
                form.fields.set_text(target, normalized.clone());
                self.dom.set_value(target, &normalized);
            }
            Some(FieldKind::Consent) => {
                // Checkbox change events arrive as "true"/"on"
                let checked = value == "true" || value == "on";
                if let Some(field) = form.fields.get_mut(target) {
                    field.set_checked(checked);
                }
                self.dom
                    .set_attr(target, "checked", if checked { "true" } else { "false" });
            }
            Some(_) => {
                form.fields.set_text(target, value.clone());
                self.dom.set_value(target, &value);
            }
            None => {}
        }
    }

    fn handle_blur(&mut self, target: &str) {
        let Some(kind) = self.state.form_of_field(target) else {
            return;
        };
        let form = self.state.form_mut(kind);
        let Some(field) = form.fields.get(target) else {
            return;
        };
        if field.kind != FieldKind::Phone {
            return;
        }
        let normalized = normalize_phone(field.as_text());
        form.fields.set_text(target, normalized.clone());
        self.dom.set_value(target, &normalized);
    }

    fn handle_scroll(&mut self, y: u32) {
        self.state.scroll_y = y;

        let pinned = y > Self::STICKY_SCROLL_THRESHOLD;
        if pinned != self.state.header_pinned {
            self.state.header_pinned = pinned;
            if pinned {
                self.dom.add_class("mainHeader", "scrolled");
            } else {
                self.dom.remove_class("mainHeader", "scrolled");
            }
        }

        self.update_active_nav_link();
    }

    /// Recompute the in-view section and move the active marker to its
    /// nav link
    fn update_active_nav_link(&mut self) {
        let current = PageState::current_section(
            self.dom.sections(),
            self.state.scroll_y,
            self.config.header_height(),
        )
        .map(str::to_string);

        for link in self.dom.ids_with_class("nav-link") {
            let href = self.dom.attr(&link, "href").map(str::to_string);
            let is_current = match (&href, &current) {
                (Some(href), Some(section)) => href == &format!("#{section}"),
                _ => false,
            };
            if is_current {
                self.dom.add_class(&link, "active");
            } else {
                self.dom.remove_class(&link, "active");
            }
        }

        self.state.active_section = current;
    }

    fn scroll_to_section(&mut self, section_id: &str) {
        let Some(section) = self
            .dom
            .sections()
            .iter()
            .find(|s| s.id == section_id)
        else {
            return;
        };
        let target = section.top.saturating_sub(self.config.header_height());
        self.handle_scroll(target);
    }

    fn handle_resize(&mut self, width: u16) {
        if self.state.nav.resize(width) {
            self.close_menus();
        }
    }

    /// Reset the mobile menu and every dropdown to closed
    fn close_menus(&mut self) {
        self.state.nav.close_all();
        self.dom.remove_class("mobileToggle", "active");
        self.dom.remove_class("mainNav", "active");
        self.dom.set_attr("mobileToggle", "aria-expanded", "false");
        for dropdown in self.dom.ids_with_class("dropdown") {
            self.dom.remove_class(&dropdown, "active");
        }
    }

    fn apply_category_filter(&mut self, category: &str, now: Instant) {
        self.state.active_category = category.to_string();

        for btn in self.dom.ids_with_class("category-filter-btn") {
            if self.dom.attr(&btn, "data-category") == Some(category) {
                self.dom.add_class(&btn, "active");
            } else {
                self.dom.remove_class(&btn, "active");
            }
        }

        for card in self.dom.ids_with_class("product-card") {
            let matches = category == "all"
                || self.dom.attr(&card, "data-category") == Some(category);
            if matches {
                self.dom.set_style(&card, "display", "flex");
                // Re-arm the appear animation once the style change settled
                self.dom.set_style(&card, "animation", "none");
                self.timers.schedule(
                    now,
                    Self::CARD_RESTART_DELAY,
                    DeferredAction::RestartCardAnimation(card),
                );
            } else {
                self.dom.set_style(&card, "display", "none");
            }
        }
    }

    fn handle_intersection(&mut self, target: &str) {
        if self.dom.has_class(target, "progress-fill") {
            if let Some(width) = self.dom.attr(target, "data-width").map(str::to_string) {
                self.dom.set_style(target, "width", &format!("{width}%"));
            }
            return;
        }

        let animated = ANIMATED_CARD_CLASSES
            .iter()
            .any(|class| self.dom.has_class(target, class));
        if animated {
            self.dom.set_style(target, "animation-play-state", "running");
        }
    }

    /// Gate a submit attempt. The allow/deny decision is made and returned
    /// before any deferred work is scheduled, so the caller can cancel the
    /// native submission synchronously.
    pub fn handle_submit(&mut self, kind: FormKind, now: Instant) -> SubmitOutcome {
        if !self.state.form(kind).can_submit() {
            return SubmitOutcome::Blocked;
        }

        match validate(&self.state.form(kind).fields) {
            Err(invalid) => {
                self.state.form_mut(kind).block();
                for field in &invalid.fields {
                    self.dom.add_class(field, "error");
                }
                self.timers.schedule(
                    now,
                    Self::FIELD_ERROR_TTL,
                    DeferredAction::ClearFieldErrors(kind),
                );

                let text = invalid.error.to_string();
                self.show_form_message(kind, &text, MessageLevel::Error);
                self.timers
                    .schedule(now, Self::MESSAGE_TTL, DeferredAction::HideFormMessage(kind));

                tracing::debug!(form = kind.label(), reason = %invalid.error, "submission blocked");
                SubmitOutcome::Blocked
            }
            Ok(()) => {
                self.state.form_mut(kind).begin_submit();

                let control = Self::submit_control(kind);
                self.dom.set_attr(control, "disabled", "true");
                self.dom.set_text(control, "Submitting…");
                self.show_form_message(kind, "Submitting your request…", MessageLevel::Info);

                let redirect = self.config.thank_you_page().to_string();
                self.state.pending_navigation = Some(redirect.clone());

                tracing::info!(form = kind.label(), "submission handed to relay endpoint");
                SubmitOutcome::Proceed { redirect }
            }
        }
    }

    fn show_form_message(&mut self, kind: FormKind, text: &str, level: MessageLevel) {
        let message = Self::message_element(kind);
        self.dom.set_text(message, text);
        self.dom.remove_class(message, "error");
        self.dom.remove_class(message, "info");
        self.dom.add_class(
            message,
            match level {
                MessageLevel::Error => "error",
                MessageLevel::Info => "info",
            },
        );
        self.dom.set_style(message, "display", "block");
        self.dom.set_style(message, "opacity", "1");
        self.dom.scroll_into_view(message);
    }

    /// Open the quote popup; a click while already open changes nothing
    fn open_popup(&mut self, now: Instant) {
        if self.state.popup == PopupState::Open {
            return;
        }
        self.state.popup = PopupState::Open;
        self.dom.add_class("quotePopup", "active");
        self.dom.set_style("body", "overflow", "hidden");
        self.timers
            .schedule(now, Self::POPUP_FOCUS_DELAY, DeferredAction::FocusPopupField);
    }

    /// Close the quote popup, restoring background scroll and clearing any
    /// visible validation message. Field contents are left alone.
    fn close_popup(&mut self) {
        if self.state.popup == PopupState::Closed {
            return;
        }
        self.state.popup = PopupState::Closed;
        self.dom.remove_class("quotePopup", "active");
        if self.loading.is_none() {
            self.dom.set_style("body", "overflow", "auto");
        }
        let message = Self::message_element(FormKind::Quote);
        self.dom.set_style(message, "display", "none");
        self.dom.set_text(message, "");
    }

    /// Advance animations and fire due one-shot timers
    fn tick(&mut self, now: Instant) {
        if let Some(loading) = self.loading.as_mut() {
            let just_full = loading.update(now);
            let width = format!("{:.0}%", loading.progress);
            self.dom.set_style("loadingProgressFill", "width", &width);
            if just_full {
                self.timers.schedule(
                    now,
                    LoadingState::SETTLE_DELAY,
                    DeferredAction::HideLoadingOverlay,
                );
            }
        }

        self.process_timers(now);
    }

    fn process_timers(&mut self, now: Instant) {
        for action in self.timers.fire_due(now) {
            self.apply_deferred(action);
        }
    }

    /// Run one deferred effect. Every arm re-derives from current state so
    /// a stale action is harmless.
    fn apply_deferred(&mut self, action: DeferredAction) {
        match action {
            DeferredAction::HideFormMessage(kind) => {
                let message = Self::message_element(kind);
                // Only transient error messages auto-hide; the submitting
                // notice stays up for the rest of the page view
                if self.dom.has_class(message, "error") {
                    self.dom.set_style(message, "display", "none");
                    self.dom.set_text(message, "");
                    self.dom.remove_class(message, "error");
                    self.state.form_mut(kind).unblock();
                }
            }
            DeferredAction::ClearFieldErrors(kind) => {
                let names: Vec<String> = self
                    .state
                    .form(kind)
                    .fields
                    .fields()
                    .iter()
                    .map(|f| f.name.clone())
                    .collect();
                for name in names {
                    self.dom.remove_class(&name, "error");
                }
            }
            DeferredAction::FocusPopupField => {
                if self.state.popup == PopupState::Open {
                    if let Some(first) = self
                        .state
                        .quote
                        .fields
                        .first_field()
                        .map(|f| f.name.clone())
                    {
                        self.dom.set_focus(&first);
                    }
                }
            }
            DeferredAction::HideLoadingOverlay => self.finish_loading(),
            DeferredAction::RestartCardAnimation(card) => {
                let visible = self.dom.get(&card).map(|el| !el.is_hidden()).unwrap_or(false);
                if visible {
                    self.dom
                        .set_style(&card, "animation", "cardAppear 0.6s ease forwards");
                }
            }
        }
    }

    /// Hide the loading overlay, release the scroll lock and start the
    /// deferred page animations
    fn finish_loading(&mut self) {
        if self.loading.take().is_none() {
            return;
        }

        self.dom.set_style("loadingScreen", "opacity", "0");
        self.dom.set_style("loadingScreen", "visibility", "hidden");
        if self.state.popup == PopupState::Closed {
            self.dom.set_style("body", "overflow", "auto");
        }

        self.dom
            .set_style("heroContent", "animation", "fadeInUp 1s ease");
        self.dom.set_style(
            "loadingMessagesTrack",
            "animation",
            "slideMessages 30s linear infinite",
        );
        self.dom.set_style(
            "clientLogosTrack",
            "animation",
            "slideLogos 40s linear infinite",
        );

        // Re-derive scroll-dependent state for elements already in view
        self.handle_scroll(self.state.scroll_y);
    }

    /// Advisory check that the companion pages the forms lead to exist.
    /// Logs and moves on; never blocks anything.
    pub async fn verify_companion_pages(&self, probe: &dyn PageProbe) {
        for page in [self.config.calculator_page(), self.config.thank_you_page()] {
            if !probe.page_exists(page).await {
                tracing::warn!(page, "companion page missing; form redirects will dead-end");
            }
        }
    }

    fn message_element(kind: FormKind) -> &'static str {
        match kind {
            FormKind::Contact => "formMessage",
            FormKind::Quote => "quoteFormMessage",
        }
    }

    fn submit_control(kind: FormKind) -> &'static str {
        match kind {
            FormKind::Contact => "contactSubmit",
            FormKind::Quote => "quoteSubmit",
        }
    }

    fn form_element(id: &str) -> Option<FormKind> {
        match id {
            "contactForm" => Some(FormKind::Contact),
            "quoteForm" => Some(FormKind::Quote),
            _ => None,
        }
    }
}
