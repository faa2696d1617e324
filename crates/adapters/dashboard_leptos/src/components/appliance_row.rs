use billsight_domain::appliance::{ApplianceField, ApplianceRowId};
use billsight_domain::submission::BillForm;
use leptos::prelude::*;

/// The three inputs of one appliance row, bound to `form` by row id.
#[component]
pub fn ApplianceRowInputs(form: RwSignal<BillForm>, id: ApplianceRowId) -> impl IntoView {
    let input = move |label: &'static str,
                      kind: &'static str,
                      hint: &'static str,
                      field: ApplianceField| {
        let value = move || {
            form.with(|f| {
                f.appliances
                    .get(id)
                    .map(|row| row.field(field).to_string())
                    .unwrap_or_default()
            })
        };
        view! {
            <label>
                {label}
                <input
                    type=kind
                    step="any"
                    placeholder=hint
                    required
                    prop:value=value
                    on:input=move |ev| {
                        form.update(|f| {
                            f.appliances.set_field(id, field, event_target_value(&ev));
                        });
                    }
                />
            </label>
        }
    };

    view! {
        <div class="appliance">
            {input("Appliance Name", "text", "Enter appliance name", ApplianceField::Name)}
            {input("Power Rating (W)", "number", "Enter power rating", ApplianceField::PowerRating)}
            {input("Usage Hours (per day)", "number", "Enter usage hours", ApplianceField::UsageHours)}
        </div>
    }
}
