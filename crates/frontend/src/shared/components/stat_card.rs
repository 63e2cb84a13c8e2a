use leptos::prelude::*;

/// One summary figure on the dashboard.
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<i64>,
    /// Highlights the figure in red (pending invoices past the threshold).
    #[prop(into, optional)]
    alert: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="col-md-4 mt-3">
            <div class="card text-center shadow-sm border-0 rounded">
                <div class="card-body">
                    <h5 class="card-title">{title}</h5>
                    <p class="card-text" class:text-danger=move || alert.get()>
                        {move || value.get()}
                    </p>
                </div>
            </div>
        </div>
    }
}
