//! # Display Fields
//!
//! The outbound side of a binding: something that accepts text and renders
//! it. Views push formatted values into a [`DisplayField`] by direct
//! assignment.

use std::cell::RefCell;
use std::fmt::{self, Display, Write};
use std::rc::Rc;

/// A rendering surface that shows a single line of text.
pub trait DisplayField {
    fn set_text(&self, text: &str);
}

/// Cloneable handle to an in-memory text field.
///
/// All clones point at the same text, the way a UI toolkit hands out
/// references to one widget.
#[derive(Clone, Default)]
pub struct TextView {
    text: Rc<RefCell<String>>,
}

impl TextView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the field.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl DisplayField for TextView {
    fn set_text(&self, text: &str) {
        let mut current = self.text.borrow_mut();
        current.clear();
        current.push_str(text);
    }
}

impl fmt::Debug for TextView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextView").field(&*self.text.borrow()).finish()
    }
}

/// Formats `value` through its `Display` impl.
///
/// Returns `None` if the impl reports an error, so the caller can show a
/// placeholder instead.
pub fn format_display<T: Display + ?Sized>(value: &T) -> Option<String> {
    let mut out = String::new();
    write!(out, "{value}").ok()?;
    Some(out)
}

/// Formats an optional value. `None` has no text.
pub fn format_optional<T: Display>(value: &Option<T>) -> Option<String> {
    value.as_ref().and_then(format_display::<T>)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Display for Broken {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn text_view_clones_share_text() {
        let view = TextView::new();
        let alias = view.clone();
        alias.set_text("175");
        assert_eq!(view.text(), "175");

        view.set_text("");
        assert_eq!(alias.text(), "");
    }

    #[test]
    fn format_display_uses_display() {
        assert_eq!(format_display(&175).as_deref(), Some("175"));
        assert_eq!(format_display("cm").as_deref(), Some("cm"));
    }

    #[test]
    fn format_failures_yield_none() {
        assert_eq!(format_display(&Broken), None);
        assert_eq!(format_optional::<i32>(&None), None);
        assert_eq!(format_optional(&Some(3)).as_deref(), Some("3"));
    }
}
