//! The one dialog every call-to-action opens.
//!
//! Renders whatever `ModalKind` the controller holds: header, generated
//! form fields, submit button, then the success panel. Always mounted at
//! the app root, so an in-flight submission survives page navigation.

use dioxus::prelude::*;
use medhavy_core::{FieldKind, FormField, FormSubmitter, Icon, SimulatedSubmitter};
use medhavy_ui::{Button, ButtonSize, Glyph};

use crate::context::{settings, ModalHandle};

#[component]
pub fn ModalHost(modal: ModalHandle) -> Element {
    let mut controller = modal.controller();
    let mut validation: Signal<Option<String>> = use_signal(|| None);
    let delay = settings().modal_submit_delay();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let started = controller.write().begin_submit();
        let submission = match started {
            Ok(submission) => submission,
            Err(e) => {
                tracing::warn!("Modal submission not started: {}", e);
                validation.set(Some(e.to_string()));
                return;
            }
        };
        validation.set(None);
        spawn(async move {
            let result = SimulatedSubmitter::new(delay).submit(&submission).await;
            controller.write().finish(submission.ticket, result);
        });
    };

    let mut close = move || {
        validation.set(None);
        modal.close();
    };

    let state = controller.read();
    let Some(config) = state.config() else {
        return rsx! {};
    };
    let submitting = state.is_submitting();
    let success = state.is_success();
    let failure = state.error_message().map(str::to_string);
    let values = state.values().clone();
    drop(state);

    let notice = failure.or_else(|| validation());

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| close(),

            div {
                class: "modal-content",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Escape {
                        close();
                    }
                },

                button {
                    class: "modal-close-btn",
                    "aria-label": "Close",
                    onclick: move |_| close(),
                    "\u{00D7}"
                }

                if success {
                    div { class: "modal-success",
                        div { class: "success-badge",
                            Glyph { icon: Icon::Check }
                        }
                        h2 { "Success!" }
                        p { "{config.success_message}" }
                        Button { onclick: move |_| close(), "Close" }
                    }
                } else {
                    header { class: "modal-header",
                        div { class: "modal-title",
                            div { class: "modal-icon",
                                Glyph { icon: config.icon }
                            }
                            h2 { "{config.title}" }
                        }
                        p { class: "modal-description", "{config.description}" }
                    }

                    form { class: "modal-body", onsubmit: on_submit,
                        if let Some(message) = notice {
                            div { class: "form-error", "{message}" }
                        }

                        for field in config.fields.iter().copied() {
                            FieldInput {
                                key: "{field.name}",
                                field,
                                value: values.get(field.name).unwrap_or_default().to_string(),
                                disabled: submitting,
                                oninput: move |value: String| {
                                    controller.write().set_value(field.name, value);
                                },
                            }
                        }

                        Button {
                            button_type: "submit",
                            size: ButtonSize::Large,
                            class: "btn-block".to_string(),
                            disabled: submitting,
                            arrow: !submitting,
                            if submitting {
                                span { class: "spinner" }
                                "Submitting..."
                            } else {
                                "{config.submit_text}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(
    field: FormField,
    value: String,
    disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{field.name}",
                "{field.label}"
                if field.required {
                    span { class: "required-mark", "*" }
                }
            }
            {match field.kind {
                FieldKind::TextArea => rsx! {
                    textarea {
                        id: "{field.name}",
                        name: "{field.name}",
                        class: "input-field",
                        placeholder: "{field.placeholder}",
                        required: field.required,
                        disabled,
                        rows: "4",
                        value: "{value}",
                        oninput: move |evt| oninput.call(evt.value()),
                    }
                },
                FieldKind::Text | FieldKind::Email => rsx! {
                    input {
                        id: "{field.name}",
                        name: "{field.name}",
                        class: "input-field",
                        r#type: field.kind.input_type(),
                        placeholder: "{field.placeholder}",
                        required: field.required,
                        disabled,
                        value: "{value}",
                        oninput: move |evt| oninput.call(evt.value()),
                    }
                },
            }}
        }
    }
}
