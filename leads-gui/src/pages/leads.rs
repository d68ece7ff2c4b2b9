use crate::error_template::ErrorTemplate;
use crate::server::*;
use crate::widget::RoleCard;
use leads_data::{CardInput, Lead};
use leptos::*;

#[component]
pub fn leads() -> impl IntoView {
    let roster = create_resource(|| (), |_| async { load_roster().await });
    let delivery = create_resource(|| (), |_| async { load_image_delivery().await });

    let cards = move || {
        let delivery = delivery.get()?;
        let leads = roster.get()?;
        Some(delivery.and_then(|delivery| {
            provide_context(delivery);
            leads.map(|leads| view! { <LeadGrid leads/> })
        }))
    };

    view! {
        <Suspense fallback=move || view! { <p>"Loading..."</p> }>
            <ErrorBoundary fallback=|errors| view! { <ErrorTemplate errors/> }>
                <h2>"Leads"</h2>
                {cards}
            </ErrorBoundary>
        </Suspense>
    }
}

#[component]
fn lead_grid(leads: Vec<Lead>) -> impl IntoView {
    if leads.is_empty() {
        return view! { <p>"No leads yet"</p> }.into_view();
    }
    let cards = leads
        .into_iter()
        .map(|lead| {
            let (role, CardInput { name, image_src }) = lead.into_card();
            view! { <RoleCard role name image_src/> }
        })
        .collect_view();
    view! { <div class="lead-grid">{cards}</div> }.into_view()
}
