//! Browser-backed [`Navigator`].

use crate::gate::Navigator;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            tracing::warn!("Navigation to {} failed: {:?}", url, e);
        }
    }

    fn scroll_to(&self, anchor: &str) {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor));
        if let Some(element) = element {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// SSR stub - there is no page to move
#[cfg(not(target_arch = "wasm32"))]
impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        tracing::debug!("Ignoring navigation to {} outside the browser", url);
    }

    fn scroll_to(&self, anchor: &str) {
        tracing::debug!("Ignoring scroll to #{} outside the browser", anchor);
    }
}
