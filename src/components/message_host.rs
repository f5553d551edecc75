//! Fixed-position stack of message toasts.

use leptos::prelude::*;

use crate::state::messages::use_messages;

/// Renders every visible toast; clicking one dismisses it early.
#[component]
pub fn MessageHost() -> impl IntoView {
    let messages = use_messages();

    view! {
        <div class="message-host" role="status" aria-live="polite">
            <For
                each=move || messages.items()
                key=|m| m.id
                children=move |m| {
                    let id = m.id;
                    view! {
                        <div class=m.kind.class() on:click=move |_| messages.dismiss(id)>
                            {m.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
