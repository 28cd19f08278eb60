//! Page state definitions

use super::forms::{FormKind, GatedForm};
use crate::dom::Section;
use std::collections::BTreeSet;

/// Independent navigation toggles: the mobile menu and the per-dropdown
/// open flags. Opening one dropdown never closes a sibling.
#[derive(Debug, Clone)]
pub struct NavState {
    pub menu_open: bool,
    pub open_dropdowns: BTreeSet<String>,
    pub viewport_width: u16,
    pub breakpoint: u16,
}

impl NavState {
    /// Viewport width at or below which the mobile layout applies
    pub const MOBILE_BREAKPOINT: u16 = 768;

    pub fn new(viewport_width: u16, breakpoint: u16) -> Self {
        Self {
            menu_open: false,
            open_dropdowns: BTreeSet::new(),
            viewport_width,
            breakpoint,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= self.breakpoint
    }

    /// Toggle the mobile menu, returning the new open state
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Toggle one dropdown, returning true if it is now open
    pub fn toggle_dropdown(&mut self, id: &str) -> bool {
        if self.open_dropdowns.remove(id) {
            false
        } else {
            self.open_dropdowns.insert(id.to_string());
            true
        }
    }

    /// Close the menu and every dropdown
    pub fn close_all(&mut self) {
        self.menu_open = false;
        self.open_dropdowns.clear();
    }

    /// Record a viewport resize, returning true if the new width crosses
    /// out of the mobile layout and the toggles must reset
    pub fn resize(&mut self, width: u16) -> bool {
        self.viewport_width = width;
        width > self.breakpoint
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(1280, Self::MOBILE_BREAKPOINT)
    }
}

/// Quote popup lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    Closed,
    Open,
}

/// State for one page view
#[derive(Debug)]
pub struct PageState {
    pub nav: NavState,
    pub popup: PopupState,
    pub scroll_y: u32,
    pub header_pinned: bool,
    pub active_section: Option<String>,
    pub active_category: String,
    pub contact: GatedForm,
    pub quote: GatedForm,
    /// Page the browser is being sent to (CTA redirect or relay hand-off)
    pub pending_navigation: Option<String>,
}

impl PageState {
    /// Extra scroll slack applied on top of the header height when deciding
    /// which section is in view
    pub const SECTION_SCROLL_SLACK: u32 = 100;

    pub fn new(viewport_width: u16, breakpoint: u16) -> Self {
        Self {
            nav: NavState::new(viewport_width, breakpoint),
            popup: PopupState::default(),
            scroll_y: 0,
            header_pinned: false,
            active_section: None,
            active_category: "all".to_string(),
            contact: GatedForm::contact(),
            quote: GatedForm::quote(),
            pending_navigation: None,
        }
    }

    pub fn form(&self, kind: FormKind) -> &GatedForm {
        match kind {
            FormKind::Contact => &self.contact,
            FormKind::Quote => &self.quote,
        }
    }

    pub fn form_mut(&mut self, kind: FormKind) -> &mut GatedForm {
        match kind {
            FormKind::Contact => &mut self.contact,
            FormKind::Quote => &mut self.quote,
        }
    }

    /// The form a field element belongs to, if any
    pub fn form_of_field(&self, field_id: &str) -> Option<FormKind> {
        if self.contact.fields.contains(field_id) {
            Some(FormKind::Contact)
        } else if self.quote.fields.contains(field_id) {
            Some(FormKind::Quote)
        } else {
            None
        }
    }

    /// Id of the last section in document order whose vertical extent
    /// contains the scroll position offset by the header margin
    pub fn current_section<'a>(
        sections: &'a [Section],
        scroll_y: u32,
        header_height: u32,
    ) -> Option<&'a str> {
        let offset = i64::from(header_height) + i64::from(Self::SECTION_SCROLL_SLACK);
        let scroll = i64::from(scroll_y);

        let mut current = None;
        for section in sections {
            let top = i64::from(section.top) - offset;
            let bottom = top + i64::from(section.height);
            if scroll >= top && scroll < bottom {
                current = Some(section.id.as_str());
            }
        }
        current
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(1280, NavState::MOBILE_BREAKPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod nav_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_closed_desktop() {
            let nav = NavState::default();
            assert!(!nav.menu_open);
            assert!(nav.open_dropdowns.is_empty());
            assert!(!nav.is_mobile());
        }

        #[test]
        fn test_toggle_menu_round_trip() {
            let mut nav = NavState::default();
            assert!(nav.toggle_menu());
            assert!(nav.menu_open);
            assert!(!nav.toggle_menu());
            assert!(!nav.menu_open);
        }

        #[test]
        fn test_dropdowns_toggle_independently() {
            let mut nav = NavState::default();
            assert!(nav.toggle_dropdown("products"));
            assert!(nav.toggle_dropdown("services"));
            // Opening the second did not close the first
            assert!(nav.open_dropdowns.contains("products"));
            assert!(nav.open_dropdowns.contains("services"));
            assert!(!nav.toggle_dropdown("products"));
            assert!(nav.open_dropdowns.contains("services"));
        }

        #[test]
        fn test_close_all_resets_everything() {
            let mut nav = NavState::default();
            nav.toggle_menu();
            nav.toggle_dropdown("products");
            nav.close_all();
            assert!(!nav.menu_open);
            assert!(nav.open_dropdowns.is_empty());
        }

        #[test]
        fn test_is_mobile_at_breakpoint_boundary() {
            let mut nav = NavState::new(768, NavState::MOBILE_BREAKPOINT);
            assert!(nav.is_mobile());
            nav.viewport_width = 769;
            assert!(!nav.is_mobile());
        }

        #[test]
        fn test_resize_signals_reset_only_past_breakpoint() {
            let mut nav = NavState::new(375, NavState::MOBILE_BREAKPOINT);
            assert!(!nav.resize(500));
            assert_eq!(nav.viewport_width, 500);
            assert!(nav.resize(1024));
            assert_eq!(nav.viewport_width, 1024);
        }
    }

    mod page_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_state() {
            let state = PageState::default();
            assert_eq!(state.popup, PopupState::Closed);
            assert_eq!(state.scroll_y, 0);
            assert_eq!(state.active_category, "all");
            assert!(state.active_section.is_none());
            assert!(state.pending_navigation.is_none());
        }

        #[test]
        fn test_form_of_field_maps_both_forms() {
            let state = PageState::default();
            assert_eq!(state.form_of_field("email"), Some(FormKind::Contact));
            assert_eq!(state.form_of_field("quotePhone"), Some(FormKind::Quote));
            assert_eq!(state.form_of_field("mainNav"), None);
        }
    }

    mod current_section {
        use super::*;
        use pretty_assertions::assert_eq;

        fn two_sections() -> Vec<Section> {
            vec![
                Section::new("s1", 0, 500),
                Section::new("s2", 500, 700),
            ]
        }

        #[test]
        fn test_scroll_600_with_header_80_marks_s2() {
            let sections = two_sections();
            assert_eq!(
                PageState::current_section(&sections, 600, 80),
                Some("s2")
            );
        }

        #[test]
        fn test_top_of_page_marks_first_section() {
            let sections = two_sections();
            assert_eq!(PageState::current_section(&sections, 0, 80), Some("s1"));
        }

        #[test]
        fn test_past_last_section_marks_nothing() {
            let sections = two_sections();
            assert_eq!(PageState::current_section(&sections, 5000, 80), None);
        }

        #[test]
        fn test_overlap_resolves_to_last_in_document_order() {
            let sections = vec![
                Section::new("a", 0, 1000),
                Section::new("b", 400, 600),
            ];
            // 500 falls inside both; the later section wins
            assert_eq!(PageState::current_section(&sections, 500, 80), Some("b"));
        }

        #[test]
        fn test_empty_section_list() {
            assert_eq!(PageState::current_section(&[], 100, 80), None);
        }
    }
}
