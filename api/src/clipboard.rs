//! The write-only clipboard capability.

use std::rc::Rc;

/// Something that accepts text for the system clipboard.
///
/// Writes are fire-and-forget: the browser clipboard API is asynchronous and
/// its outcome is never shown to the user, so implementations report failure
/// through logging only.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str);
}

impl<C: ClipboardWriter + ?Sized> ClipboardWriter for Rc<C> {
    fn write_text(&self, text: &str) {
        (**self).write_text(text)
    }
}
