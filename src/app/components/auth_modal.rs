//! Sign-in dialog component.
//!
//! Thin view over [`AuthDialog`]: every transition goes through the state
//! machine, and network calls run through [`crate::auth::flow`] on tasks
//! scoped to this component, so unmounting cancels them.

use dioxus::prelude::*;

use super::banner::{Banner, BannerKind};
use super::google_signin::GoogleSignIn;
use crate::app::auth_context::use_auth;
use crate::auth::flow::{self, DialogState};
use crate::auth::{AuthDialog, AuthError, DialogOutcome, DialogStep, Method};

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-orange-500 focus:ring focus:ring-orange-200 p-2 border";
const SUBMIT_CLASS: &str =
    "w-full bg-orange-500 text-white rounded-md py-2 hover:bg-orange-600 transition-colors disabled:opacity-50";
const BACK_CLASS: &str = "w-full text-gray-600 hover:text-gray-800 disabled:opacity-50";
const METHOD_CLASS: &str = "w-full flex items-center justify-between bg-white border-2 border-gray-300 text-gray-700 rounded-md py-2 px-4 hover:bg-gray-50 transition-colors disabled:opacity-50";

impl DialogState for Signal<AuthDialog> {
    fn update<R>(&mut self, f: impl FnOnce(&mut AuthDialog) -> R) -> R {
        f(&mut self.write())
    }
}

/// Modal sign-in dialog. Mount it when opening; it starts on method selection.
#[component]
pub fn AuthModal(on_close: EventHandler<()>, on_success: EventHandler<DialogOutcome>) -> Element {
    let auth = use_auth();
    let mut dialog = use_signal(|| {
        let mut state = AuthDialog::new();
        state.open();
        state
    });

    let request_code = move |_: ()| {
        let Some(client) = auth.client() else {
            dialog.write().show_error(&AuthError::NotConfigured);
            return;
        };
        let options = auth.code_options();
        spawn(async move {
            let mut state = dialog;
            flow::submit_identifier(&mut state, &*client, &options).await;
        });
    };

    let verify_code = move |_: ()| {
        let Some(client) = auth.client() else {
            dialog.write().show_error(&AuthError::NotConfigured);
            return;
        };
        spawn(async move {
            let mut state = dialog;
            if let Some(outcome) = flow::submit_code(&mut state, &*client).await {
                tracing::info!("Sign-in code verified");
                on_success.call(outcome);
            }
        });
    };

    let widget_signed_in = move |_: ()| {
        let outcome = dialog.read().widget_succeeded();
        if let Some(outcome) = outcome {
            tracing::info!("Signed in through the Google widget");
            on_success.call(outcome);
        }
    };

    let back = move |_: ()| dialog.write().back();

    let state = dialog.read().clone();
    let busy = state.is_busy();
    let google_client_id = auth.google_client_id();

    rsx! {
        div { class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4 z-50",
            div {
                class: "bg-white rounded-lg p-6 w-full max-w-md relative",
                role: "dialog",
                "aria-modal": "true",
                button {
                    class: "absolute right-4 top-4 text-gray-500 hover:text-gray-700",
                    aria_label: "Close",
                    title: "Close dialog",
                    onclick: move |_| {
                        dialog.write().close();
                        on_close.call(());
                    },
                    "✕"
                }

                h2 { class: "text-2xl font-bold mb-4", "Sign In" }

                if let Some(error) = state.error() {
                    Banner { kind: BannerKind::Error, message: error.to_string() }
                }
                if let Some(message) = state.message() {
                    Banner { kind: BannerKind::Info, message: message.to_string() }
                }

                div { class: "space-y-4",
                    {match state.step() {
                        DialogStep::SelectMethod => rsx! {
                            MethodButton {
                                caption: "Continue with Email",
                                glyph: "✉",
                                disabled: busy,
                                on_choose: move |_| dialog.write().choose(Method::Email),
                            }
                            MethodButton {
                                caption: "Continue with Phone",
                                glyph: "☎",
                                disabled: busy,
                                on_choose: move |_| dialog.write().choose(Method::Phone),
                            }
                            if let Some(client_id) = google_client_id {
                                GoogleSignIn {
                                    client_id,
                                    on_success: widget_signed_in,
                                    on_error: move |reason: Option<String>| {
                                        dialog.write().widget_failed(reason.as_deref());
                                    },
                                }
                            }
                        },
                        DialogStep::EmailEntry => rsx! {
                            EntryForm {
                                field_id: "email",
                                caption: "Email Address",
                                input_type: "email",
                                placeholder: "your@email.com",
                                value: state.email().to_string(),
                                busy,
                                idle_label: "Send Magic Link",
                                busy_label: "Sending...",
                                on_input: move |value: String| dialog.write().set_email(value),
                                on_submit: request_code,
                                on_back: back,
                            }
                        },
                        DialogStep::PhoneEntry => rsx! {
                            EntryForm {
                                field_id: "phone",
                                caption: "Phone Number",
                                input_type: "tel",
                                placeholder: "+1234567890",
                                value: state.phone().to_string(),
                                busy,
                                idle_label: "Send OTP",
                                busy_label: "Sending...",
                                on_input: move |value: String| dialog.write().set_phone(value),
                                on_submit: request_code,
                                on_back: back,
                            }
                        },
                        DialogStep::OtpEntry => rsx! {
                            EntryForm {
                                field_id: "otp",
                                caption: "Enter OTP",
                                input_type: "text",
                                placeholder: "Enter your verification code",
                                value: state.code().to_string(),
                                busy,
                                idle_label: "Verify OTP",
                                busy_label: "Verifying...",
                                on_input: move |value: String| dialog.write().set_code(value),
                                on_submit: verify_code,
                                on_back: back,
                            }
                        },
                    }}
                }
            }
        }
    }
}

#[component]
fn MethodButton(
    caption: &'static str,
    glyph: &'static str,
    disabled: bool,
    on_choose: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: METHOD_CLASS,
            r#type: "button",
            disabled,
            onclick: move |_| on_choose.call(()),
            div { class: "flex items-center",
                span { class: "w-5 h-5 mr-2", "{glyph}" }
                span { "{caption}" }
            }
            span { class: "w-5 h-5", "→" }
        }
    }
}

/// One labelled field with submit and back buttons
#[component]
fn EntryForm(
    field_id: &'static str,
    caption: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    busy: bool,
    idle_label: &'static str,
    busy_label: &'static str,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    let submit_label = if busy { busy_label } else { idle_label };

    rsx! {
        form {
            class: "space-y-4",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            div {
                label { r#for: field_id, class: "block text-sm font-medium text-gray-700", "{caption}" }
                input {
                    id: field_id,
                    class: INPUT_CLASS,
                    r#type: input_type,
                    placeholder,
                    required: true,
                    value: "{value}",
                    oninput: move |e| on_input.call(e.value()),
                }
            }
            button { class: SUBMIT_CLASS, r#type: "submit", disabled: busy, "{submit_label}" }
            button {
                class: BACK_CLASS,
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_back.call(()),
                "Back to options"
            }
        }
    }
}
