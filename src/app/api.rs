//! Client-side helpers for talking to our own server.

use serde::Deserialize;

/// Fetch JSON from a URL (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(url: &str) -> anyhow::Result<T> {
    use anyhow::anyhow;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or_else(|| anyhow!("No window"))?;
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| anyhow!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow!("{:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| anyhow!("Not a Response"))?;
    if !resp.ok() {
        anyhow::bail!("{} returned {}", url, resp.status());
    }

    let json = JsFuture::from(resp.json().map_err(|e| anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow!("{:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| anyhow!("{}", e))
}

/// SSR stub - returns error (should not be called during SSR)
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(_url: &str) -> anyhow::Result<T> {
    anyhow::bail!("fetch_json is only available in browser")
}

/// `window.location.origin`, e.g. `https://shere.example`
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::auth::PublicAuthConfig;

    #[test]
    fn test_fetch_json_refused_during_ssr() {
        let err = tokio_test::block_on(fetch_json::<PublicAuthConfig>("/api/auth/config"))
            .unwrap_err();
        assert!(err.to_string().contains("only available in browser"));
        assert_eq!(page_origin(), None);
    }
}
