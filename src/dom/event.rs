//! Browser-shaped input events

/// Key identity for keyboard events. Only the keys the page reacts to are
/// distinguished; everything else folds into `Other`.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other,
}

/// Events delivered to the behavior layer by the embedding page shell.
///
/// `OutsideClick` is a pointer press that landed outside the menu region;
/// containment is resolved by the event source, which owns the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Pointer activation of the element with the given id
    Click { target: String },
    /// Pointer press outside the navigation region
    OutsideClick,
    /// Text input into a field
    Input { target: String, value: String },
    /// Focus left a field
    Blur { target: String },
    /// Native submit fired on the form element with the given id
    Submit { form: String },
    KeyDown { key: Key },
    /// Window scrolled to the given vertical offset
    Scroll { y: u32 },
    /// Viewport resized to the given width
    Resize { width: u16 },
    /// Element entered the viewport (intersection callback)
    Intersect { target: String },
    /// Fixed-interval animation tick
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_compare_by_payload() {
        assert_eq!(
            PageEvent::Click {
                target: "mobileToggle".into()
            },
            PageEvent::Click {
                target: "mobileToggle".into()
            }
        );
        assert_ne!(PageEvent::Scroll { y: 0 }, PageEvent::Scroll { y: 100 });
    }

    #[test]
    fn test_key_variants_are_distinct() {
        assert_ne!(Key::Escape, Key::Enter);
        assert_ne!(Key::Escape, Key::Other);
    }
}
