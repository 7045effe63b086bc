//! Window size and root font size

use folio_core::{RootFontSize, ViewportWidth, WindowWidthTracker};
use leptos::ev;
use leptos::prelude::*;

/// Current `window.innerWidth`, or zero if it cannot be read
pub fn current_width() -> ViewportWidth {
    let px = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or_default();
    ViewportWidth::new(px)
}

/// Computed font size of `<html>`, or `fallback` if unavailable
pub fn root_font_size(fallback: RootFontSize) -> RootFontSize {
    document()
        .document_element()
        .and_then(|root| window().get_computed_style(&root).ok().flatten())
        .and_then(|style| style.get_property_value("font-size").ok())
        .and_then(|value| RootFontSize::from_css(&value))
        .unwrap_or(fallback)
}

/// Reactive viewport width.
///
/// Registers one `resize` listener for the lifetime of the calling
/// component and removes it when the component is disposed.
pub fn use_window_width() -> ReadSignal<ViewportWidth> {
    let tracker = StoredValue::new(WindowWidthTracker::new(current_width()));
    let (width, set_width) = signal(tracker.with_value(|t| t.width()));

    if tracker.try_update_value(|t| t.attach()).unwrap_or(false) {
        let handle = window_event_listener(ev::resize, move |_| {
            if let Some(changed) = tracker
                .try_update_value(|t| t.on_resize(current_width()))
                .flatten()
            {
                set_width.set(changed);
            }
        });

        on_cleanup(move || {
            tracker.update_value(|t| {
                t.detach();
            });
            handle.remove();
        });
    }

    width
}
