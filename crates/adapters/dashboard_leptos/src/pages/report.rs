use billsight_app::report_view::{NO_RESULT_MESSAGE, ReportView};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::ReportSectionView;
use crate::wiring;

/// Report page rendering the last successful submission.
#[component]
pub fn Report() -> impl IntoView {
    let report = wiring::report_service(&wiring::use_config()).load();
    let navigate = use_navigate();

    match report {
        ReportView::Missing => view! { <p>{NO_RESULT_MESSAGE}</p> }.into_any(),
        ReportView::Ready(sections) => view! {
            <div>
                <h1>"Energy Report"</h1>
                {sections
                    .into_iter()
                    .map(|section| view! { <ReportSectionView section/> })
                    .collect_view()}
                <button on:click=move |_| navigate("/", NavigateOptions::default())>"Back"</button>
            </div>
        }
        .into_any(),
    }
}
