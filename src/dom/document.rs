//! In-memory page document

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A single page element: tag, classes, inline styles, attributes, text
/// content and input value
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub id: String,
    pub tag: String,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    attrs: BTreeMap<String, String>,
    pub text: String,
    pub value: String,
}

impl Element {
    /// Create a new element with the given tag and id
    pub fn new(tag: &str, id: &str) -> Self {
        Self {
            id: id.to_string(),
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    /// Builder-style helper to attach a class at construction
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    /// Builder-style helper to attach an attribute at construction
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Builder-style helper to set the text content at construction
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Toggle a class, returning true if the class is now present
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    /// Get an inline style value
    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    pub fn set_style(&mut self, name: &str, value: &str) {
        self.styles.insert(name.to_string(), value.to_string());
    }

    pub fn clear_style(&mut self, name: &str) {
        self.styles.remove(name);
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    /// Whether the element is hidden via `display: none`
    pub fn is_hidden(&self) -> bool {
        self.style("display") == Some("none")
    }
}

/// Vertical extent of a page section, used for scroll-position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub top: u32,
    pub height: u32,
}

impl Section {
    pub fn new(id: &str, top: u32, height: u32) -> Self {
        Self {
            id: id.to_string(),
            top,
            height,
        }
    }
}

/// Flat element registry standing in for the browser document.
///
/// Elements are keyed by id and kept in insertion (document) order. Mutation
/// helpers silently no-op when the target element is absent, matching the
/// page script's `if (el)` optional-collaborator pattern.
#[derive(Debug, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
    order: Vec<String>,
    sections: Vec<Section>,
    focused: Option<String>,
    last_scroll_target: Option<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element. Re-inserting an id replaces the element but keeps
    /// its original document position.
    pub fn insert(&mut self, element: Element) {
        let id = element.id.clone();
        if self.elements.insert(id.clone(), element).is_none() {
            self.order.push(id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Ids of all elements carrying the given class, in document order
    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.order
            .iter()
            .filter(|id| {
                self.elements
                    .get(*id)
                    .is_some_and(|el| el.has_class(class))
            })
            .cloned()
            .collect()
    }

    /// Register a section's vertical extent, in document order
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Move focus to an element; no-op if it does not exist
    pub fn set_focus(&mut self, id: &str) {
        if self.contains(id) {
            self.focused = Some(id.to_string());
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Record a scroll-into-view request for the element
    pub fn scroll_into_view(&mut self, id: &str) {
        if self.contains(id) {
            self.last_scroll_target = Some(id.to_string());
        }
    }

    pub fn last_scroll_target(&self) -> Option<&str> {
        self.last_scroll_target.as_deref()
    }

    // Convenience mutators used by the event wiring. All of them quietly
    // no-op when the element is missing.

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).map(|el| el.text.as_str())
    }

    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(el) = self.get_mut(id) {
            el.text = text.to_string();
        }
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.get(id).map(|el| el.value.as_str())
    }

    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(el) = self.get_mut(id) {
            el.value = value.to_string();
        }
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: &str, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.add_class(class);
        }
    }

    pub fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.remove_class(class);
        }
    }

    /// Toggle a class, returning true if the class is now present
    pub fn toggle_class(&mut self, id: &str, class: &str) -> bool {
        self.get_mut(id)
            .map(|el| el.toggle_class(class))
            .unwrap_or(false)
    }

    pub fn style(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.style(name))
    }

    pub fn set_style(&mut self, id: &str, name: &str, value: &str) {
        if let Some(el) = self.get_mut(id) {
            el.set_style(name, value);
        }
    }

    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.attr(name))
    }

    pub fn set_attr(&mut self, id: &str, name: &str, value: &str) {
        if let Some(el) = self.get_mut(id) {
            el.set_attr(name, value);
        }
    }
}
