use billsight_app::error::HistoryError;
use leptos::prelude::*;

use crate::components::Loading;
use crate::wiring;

fn describe(err: &HistoryError) -> String {
    match err {
        HistoryError::NotRegistered => "Please register before viewing your history.".to_string(),
        other => format!("Failed to load history: {other}"),
    }
}

/// Bills previously submitted by the registered user.
#[component]
pub fn History() -> impl IntoView {
    let config = wiring::use_config();
    let history = LocalResource::new(move || {
        let service = wiring::history_service(&config);
        async move {
            service.load().await.map_err(|err| {
                tracing::warn!(error = ?err, "cannot load bill history");
                describe(&err)
            })
        }
    });

    view! {
        <div>
            <h1>"Bill History"</h1>
            <Suspense fallback=move || view! { <Loading message="Loading history\u{2026}"/> }>
                {move || {
                    history.get().map(|result| match result {
                        Ok(entries) => {
                            if entries.is_empty() {
                                view! { <p>"No bills submitted yet."</p> }.into_any()
                            } else {
                                view! {
                                    <table>
                                        <thead>
                                            <tr>
                                                <th>"Month"</th>
                                                <th>"Total Units (kWh)"</th>
                                                <th>"Bill Amount (₹)"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {entries.into_iter().map(|entry| {
                                                view! {
                                                    <tr>
                                                        <td>{entry.month}</td>
                                                        <td>{entry.total_units}</td>
                                                        <td>{entry.bill_amount}</td>
                                                    </tr>
                                                }
                                            }).collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }.into_any()
                            }
                        }
                        Err(err) => view! {
                            <p class="error">{err}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
