use log::warn;
use web_sys::{
    window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};
use wasm_bindgen::JsCast;

use crate::config::{
    BACK_TO_TOP_THRESHOLD, REVEAL_MIN_VIEWPORT_WIDTH, REVEAL_OFFSET_PX, REVEAL_STAGGER_SECS,
    REVEAL_TRANSITION_SECS,
};

/// Page scroll progress in percent.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Reveal animations are skipped on narrow viewports.
pub fn reveal_enabled(viewport_width: f64) -> bool {
    viewport_width > REVEAL_MIN_VIEWPORT_WIDTH
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    /// Animations disabled, shown as-is.
    Static,
    Hidden,
    Shown,
}

pub fn reveal_style(index: usize, state: RevealState) -> String {
    let delay = index as f64 * REVEAL_STAGGER_SECS;
    let transition = format!(
        "transition: opacity {t}s ease {d:.1}s, transform {t}s ease {d:.1}s;",
        t = REVEAL_TRANSITION_SECS,
        d = delay
    );
    match state {
        RevealState::Static => "opacity: 1; transform: translateY(0);".to_string(),
        RevealState::Hidden => format!(
            "opacity: 0; transform: translateY({}px); {}",
            REVEAL_OFFSET_PX, transition
        ),
        RevealState::Shown => format!("opacity: 1; transform: translateY(0); {}", transition),
    }
}

pub fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Current progress of the whole document.
pub fn document_progress() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| f64::from(e.scroll_height()))
        .unwrap_or(0.0);
    scroll_progress(window.scroll_y().unwrap_or(0.0), document_height, viewport)
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn element_by_id(id: &str) -> Option<HtmlElement> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

fn smooth_scroll_into_view(element: &HtmlElement, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scroll an in-page anchor target to the top of the viewport.
pub fn scroll_to_anchor(id: &str) {
    match element_by_id(id) {
        Some(element) => smooth_scroll_into_view(&element, ScrollLogicalPosition::Start),
        None => warn!("Anchor target #{} not found", id),
    }
}

/// Bring a form control to the middle of the screen and focus it.
pub fn reveal_and_focus(id: &str) {
    let Some(element) = element_by_id(id) else {
        warn!("Cannot focus #{}: not in the document", id);
        return;
    };
    smooth_scroll_into_view(&element, ScrollLogicalPosition::Center);
    if let Err(e) = element.focus() {
        warn!("Focusing #{} failed: {:?}", id, e);
    }
}

/// Freeze page scrolling behind the open mobile menu.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let props = [("overflow", "hidden"), ("position", "fixed"), ("width", "100%")];
    for (name, value) in props {
        let result = if locked {
            style.set_property(name, value)
        } else {
            style.remove_property(name).map(|_| ())
        };
        if let Err(e) = result {
            warn!("Updating body {} failed: {:?}", name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_a_percentage_of_scrollable_height() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn progress_handles_short_pages_and_overscroll() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn back_to_top_threshold() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }

    #[test]
    fn reveal_disabled_on_small_screens() {
        assert!(!reveal_enabled(375.0));
        assert!(!reveal_enabled(768.0));
        assert!(reveal_enabled(1024.0));
    }

    #[test]
    fn reveal_style_staggers_by_index() {
        assert_eq!(
            reveal_style(3, RevealState::Hidden),
            "opacity: 0; transform: translateY(30px); \
             transition: opacity 0.6s ease 0.3s, transform 0.6s ease 0.3s;"
        );
        assert!(reveal_style(0, RevealState::Shown).starts_with("opacity: 1;"));
        assert!(!reveal_style(5, RevealState::Static).contains("transition"));
    }
}
