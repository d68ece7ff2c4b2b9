use leptos::*;

/// Server-renders a view in a fresh reactive runtime. Hydration keys restart
/// at zero so two renders of the same view compare equal.
pub fn render_html<N: IntoView>(view: impl FnOnce() -> N) -> String {
    let runtime = create_runtime();
    leptos::leptos_dom::HydrationCtx::reset_id();
    let html = view().into_view().render_to_string().to_string();
    runtime.dispose();
    html
}
