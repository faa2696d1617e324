//! Blocking registration prompt shown until an identity is stored.

use billsight_domain::identity::Identity;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::wiring;

/// Modal asking for a user id; calls `on_registered` once the service accepts it.
///
/// Validation, server and network failures are alerted by the gate itself,
/// so the modal only has to stay open.
#[component]
pub fn RegistrationModal(on_registered: Callback<Identity>) -> impl IntoView {
    let gate = StoredValue::new_local(wiring::registration_gate(&wiring::use_config()));
    let user_id = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        let gate = gate.get_value();
        let raw = user_id.get_untracked();
        spawn_local(async move {
            let result = gate.register(&raw).await;
            pending.set(false);
            if let Ok(identity) = result {
                on_registered.run(identity);
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal" on:submit=on_submit>
                <h2>"Register"</h2>
                <label>
                    "User ID"
                    <input
                        type="text"
                        prop:value=move || user_id.get()
                        on:input=move |ev| user_id.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || pending.get()>"Register"</button>
            </form>
        </div>
    }
}
