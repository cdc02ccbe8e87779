use gloo_timers::callback::Timeout;
use web_sys::{window, ScrollBehavior, ScrollToOptions};

/// Anchor of the product grid on the home screen.
pub const PRODUCTS_SECTION_ID: &str = "products-section";

pub fn scroll_to_top() {
    if let Some(w) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scroll the product grid into view once the home screen has rendered.
pub fn scroll_to_products() {
    Timeout::new(150, || {
        let section = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(PRODUCTS_SECTION_ID));
        if let Some(section) = section {
            section.scroll_into_view();
        }
    })
    .forget();
}

pub fn print_page() {
    if let Some(w) = window() {
        let _ = w.print();
    }
}
