//! HTTP transport used by the provider client.
//!
//! In the browser this is `fetch`; during SSR the calls are refused, since
//! sign-in only ever happens client-side.

use async_trait::async_trait;

use super::error::AuthError;

/// Raw response: status plus body text
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<HttpResponse, AuthError>;
}

/// Browser `fetch` transport
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<HttpResponse, AuthError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Headers, Request, RequestInit, Response};

        let js_err = |e: wasm_bindgen::JsValue| {
            AuthError::Network(
                e.as_string()
                    .or_else(|| {
                        e.dyn_ref::<js_sys::Error>()
                            .map(|err| String::from(err.message()))
                    })
                    .unwrap_or_else(|| format!("{:?}", e)),
            )
        };

        let window = web_sys::window()
            .ok_or_else(|| AuthError::Unavailable("No window".to_string()))?;

        let request_headers = Headers::new().map_err(js_err)?;
        for (name, value) in headers {
            request_headers.set(name, value).map_err(js_err)?;
        }

        let body_str = serde_json::to_string(body).map_err(|e| AuthError::Decode(e.to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_headers(&request_headers);
        opts.set_body(&wasm_bindgen::JsValue::from_str(&body_str));

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| AuthError::Decode("Not a Response".to_string()))?;

        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;

        Ok(HttpResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

/// SSR stub - sign-in requests are browser-only
#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn post_json(
        &self,
        _url: &str,
        _headers: &[(&str, &str)],
        _body: &serde_json::Value,
    ) -> Result<HttpResponse, AuthError> {
        Err(AuthError::Unavailable(
            "Sign-in is only available in the browser".to_string(),
        ))
    }
}
