use leads_data::ImageDelivery;
use leptos::*;

/// An `<img>` whose URL goes through the [`ImageDelivery`] in context.
///
/// When the browser fails to load the picture the element is dropped, so
/// whatever sits behind it shows through instead of a broken image icon.
#[component]
pub fn optimized_image(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    width: u32,
    height: u32,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
) -> impl IntoView {
    let delivery = use_context::<ImageDelivery>().unwrap_or_default();
    let url = delivery.url(&src, width);
    let failed = create_rw_signal(false);

    view! { <LoadingImage url alt width height class style failed/> }
}

#[component]
fn loading_image(
    #[prop(into)] url: String,
    #[prop(into)] alt: String,
    width: u32,
    height: u32,
    class: Option<String>,
    style: Option<String>,
    failed: RwSignal<bool>,
) -> impl IntoView {
    let node_ref = create_node_ref::<html::Img>();

    // A server rendered image can fail before hydration attaches `on:error`.
    #[cfg(feature = "hydrate")]
    {
        let url = url.clone();
        create_effect(move |_| {
            if let Some(img) = node_ref.get() {
                if load_failed(img.complete(), img.natural_width()) {
                    log::warn!("Could not load image {}", url);
                    failed.set(true);
                }
            }
        });
    }

    // Built by hand so absent `class`/`style` props leave no empty attribute.
    move || {
        (!failed.get()).then(|| {
            let failed_url = url.clone();
            html::img()
                .attr("src", url.clone())
                .attr("alt", alt.clone())
                .attr("width", width)
                .attr("height", height)
                .attr("class", class.clone())
                .attr("style", style.clone())
                .attr("loading", "lazy")
                .attr("decoding", "async")
                .node_ref(node_ref)
                .on(ev::error, move |_| {
                    log::warn!("Could not load image {}", failed_url);
                    failed.set(true);
                })
        })
    }
}

/// A finished load with no pixels is a failed load.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn load_failed(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}
