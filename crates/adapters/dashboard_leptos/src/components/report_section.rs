use billsight_app::report_view::{ReportSection, SectionBody};
use leptos::prelude::*;

/// One titled block of the report.
#[component]
pub fn ReportSectionView(section: ReportSection) -> impl IntoView {
    let body = match section.body {
        SectionBody::Fields(fields) => fields
            .into_iter()
            .map(|field| {
                view! {
                    <p>
                        <strong>{field.label}": "</strong>
                        {field.value}
                    </p>
                }
            })
            .collect_view()
            .into_any(),
        SectionBody::Items(items) => view! {
            <ul>
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li>
                                <strong>{item.name}": "</strong>
                                {item.text}
                                {item.note.map(|note| view! { " " <em>{note}</em> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <section class="report-section">
            <h2>{section.title}</h2>
            {body}
        </section>
    }
}
