//! Google Identity Services sign-in button.
//!
//! The GSI script is injected on first use and renders its own button into
//! a container div. Its callback runs outside the Dioxus runtime, so it only
//! records the result in a signal; an effect forwards that to the handlers.

use dioxus::prelude::*;

const CONTAINER_ID: &str = "google-signin-button";

#[derive(Clone, Debug, PartialEq)]
enum WidgetResult {
    Success,
    Failure(Option<String>),
}

/// Record a widget result. JS callbacks outlive this component, so a result
/// arriving after unmount is dropped. Returns whether it was recorded.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn report(result: Signal<Option<WidgetResult>>, value: WidgetResult) -> bool {
    let mut result = result;
    let recorded = match result.try_write() {
        Ok(mut slot) => {
            *slot = Some(value);
            true
        }
        Err(_) => {
            tracing::debug!("Ignoring Google sign-in result after the dialog closed");
            false
        }
    };
    recorded
}

#[component]
pub fn GoogleSignIn(
    client_id: String,
    on_success: EventHandler<()>,
    on_error: EventHandler<Option<String>>,
) -> Element {
    let mut result = use_signal(|| None::<WidgetResult>);

    use_effect(move || {
        let Some(outcome) = result() else {
            return;
        };
        result.set(None);
        match outcome {
            WidgetResult::Success => on_success.call(()),
            WidgetResult::Failure(reason) => on_error.call(reason),
        }
    });

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            if let Err(e) = gsi::mount(&client_id, result) {
                tracing::warn!("Google sign-in unavailable: {:?}", e);
                result.set(Some(WidgetResult::Failure(None)));
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = &client_id;

    rsx! {
        div { id: CONTAINER_ID, class: "flex justify-center min-h-[44px]" }
    }
}

#[cfg(target_arch = "wasm32")]
mod gsi {
    use super::{report, WidgetResult, CONTAINER_ID};
    use dioxus::prelude::*;
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    const SCRIPT_SRC: &str = "https://accounts.google.com/gsi/client";

    /// Render the button, loading the GSI script first if needed
    pub(super) fn mount(client_id: &str, result: Signal<Option<WidgetResult>>) -> Result<(), JsValue> {
        if accounts_id().is_some() {
            return render(client_id, result);
        }

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let script: web_sys::HtmlScriptElement = document.create_element("script")?.dyn_into()?;
        script.set_src(SCRIPT_SRC);
        script.set_async(true);

        let id = client_id.to_string();
        let onload = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = render(&id, result) {
                tracing::warn!("Google sign-in render failed: {:?}", e);
            }
        });
        let onerror = Closure::<dyn FnMut()>::new(move || {
            report(result, WidgetResult::Failure(Some("script failed to load".into())));
        });
        script.set_onload(Some(onload.as_ref().unchecked_ref()));
        script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        // Fire once for the page lifetime
        onload.forget();
        onerror.forget();

        document
            .head()
            .ok_or_else(|| JsValue::from_str("no head"))?
            .append_child(&script)?;
        Ok(())
    }

    /// `window.google.accounts.id`, once the script has loaded
    fn accounts_id() -> Option<JsValue> {
        let google = Reflect::get(&js_sys::global(), &"google".into()).ok()?;
        let accounts = Reflect::get(&google, &"accounts".into()).ok()?;
        let id = Reflect::get(&accounts, &"id".into()).ok()?;
        (!id.is_undefined()).then_some(id)
    }

    fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
        Reflect::get(target, &name.into())?.dyn_into()
    }

    fn render(client_id: &str, result: Signal<Option<WidgetResult>>) -> Result<(), JsValue> {
        let id = accounts_id().ok_or_else(|| JsValue::from_str("google.accounts.id missing"))?;

        let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let credential = Reflect::get(&response, &"credential".into())
                .ok()
                .and_then(|c| c.as_string());
            let value = match credential {
                Some(_) => WidgetResult::Success,
                None => WidgetResult::Failure(None),
            };
            report(result, value);
        });

        let config = Object::new();
        Reflect::set(&config, &"client_id".into(), &client_id.into())?;
        Reflect::set(&config, &"callback".into(), callback.as_ref())?;
        method(&id, "initialize")?.call1(&id, &config)?;
        // GSI keeps calling this until the page unloads
        callback.forget();

        let container = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONTAINER_ID))
            .ok_or_else(|| JsValue::from_str("button container missing"))?;
        let options = Object::new();
        Reflect::set(&options, &"theme".into(), &"outline".into())?;
        Reflect::set(&options, &"size".into(), &"large".into())?;
        method(&id, "renderButton")?.call2(&id, &container, &options)?;
        Ok(())
    }
}
