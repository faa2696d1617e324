//! Bill form page: registration gate, then the form collector.

use billsight_domain::identity::Identity;
use billsight_domain::submission::BillForm;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::{ApplianceRowInputs, Loading, RegistrationModal};
use crate::wiring;

#[component]
pub fn Home() -> impl IntoView {
    let gate = wiring::registration_gate(&wiring::use_config());
    let identity = RwSignal::new(gate.current_identity());
    let on_registered = Callback::new(move |registered: Identity| identity.set(Some(registered)));

    view! {
        {move || match identity.get() {
            None => view! { <RegistrationModal on_registered/> }.into_any(),
            Some(registered) => view! {
                <p class="welcome">{registered.welcome_message()}</p>
                <BillFormPanel/>
            }
            .into_any(),
        }}
    }
}

/// The energy form with its append-only appliance list.
#[component]
fn BillFormPanel() -> impl IntoView {
    let submitter = StoredValue::new_local(wiring::submission_service(&wiring::use_config()));
    let form = RwSignal::new(BillForm::default());
    let pending = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let service = submitter.get_value();
        if service.state().is_in_flight() {
            return;
        }
        let snapshot = form.get_untracked();
        let navigate = navigate.clone();
        pending.set(true);
        spawn_local(async move {
            let result = service.submit(&snapshot).await;
            pending.set(service.state().is_in_flight());
            if result.is_ok() {
                navigate("/result", NavigateOptions::default());
            }
        });
    };

    let add_appliance = move |_| {
        form.update(|f| {
            f.appliances.add();
        });
    };

    let row_ids = move || {
        form.with(|f| f.appliances.rows().iter().map(|row| row.id).collect::<Vec<_>>())
    };

    let text_field = move |label: &'static str,
                           kind: &'static str,
                           get: fn(&BillForm) -> &String,
                           set: fn(&mut BillForm) -> &mut String| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    step="any"
                    required
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| form.update(|f| *set(f) = event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <form on:submit=on_submit>
            <h1>"Energy Bill"</h1>
            {text_field("Month", "month", |f| &f.month, |f| &mut f.month)}
            {text_field("Total Units (kWh)", "number", |f| &f.total_units, |f| &mut f.total_units)}
            {text_field("Bill Amount (₹)", "number", |f| &f.bill_amount, |f| &mut f.bill_amount)}

            <h2>"Appliances"</h2>
            <For
                each=row_ids
                key=|id| *id
                children=move |id| view! { <ApplianceRowInputs form id/> }
            />
            <button type="button" on:click=add_appliance>"Add Appliance"</button>
            <button type="submit" disabled=move || pending.get()>"Submit"</button>
            <Show when=move || pending.get()>
                <Loading message="Submitting\u{2026}"/>
            </Show>
        </form>
    }
}
