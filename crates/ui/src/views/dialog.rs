use dioxus::prelude::*;

/// Blocking acknowledgement of an error or notice. Renders nothing while
/// `message` is empty.
#[component]
pub fn AlertDialog(message: Signal<Option<String>>) -> Element {
    let Some(text) = message.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div { class: "modal", role: "alertdialog",
            div { class: "modal-content",
                div { class: "modal-body",
                    p { class: "alert-message", "{text}" }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-primary",
                        id: "alert-ok",
                        onclick: move |_| message.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}

/// Yes/no prompt.
#[component]
pub fn ConfirmDialog(
    prompt: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal", role: "dialog",
            div { class: "modal-content",
                div { class: "modal-body",
                    p { "{prompt}" }
                }
                div { class: "modal-footer",
                    button { class: "btn", onclick: move |_| on_cancel.call(()), "Cancelar" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_confirm.call(()),
                        "Confirmar"
                    }
                }
            }
        }
    }
}

/// Shared alert slot rendered once by the layout, so a notice raised just
/// before a route change stays visible.
#[derive(Clone, Copy)]
pub struct AlertSlot(pub Signal<Option<String>>);

pub fn use_alert() -> Signal<Option<String>> {
    use_context::<AlertSlot>().0
}
