use crate::widget::OptimizedImage;
use leads_data::{
    geometry::{self, CARD_HEIGHT, CARD_WIDTH, IMAGE_HEIGHT, IMAGE_WIDTH},
    Role,
};
use leptos::*;

/// A role tile: the role's background artwork with the holder's name and
/// an optional picture laid over it at fixed positions.
#[component]
pub fn role_card(
    #[prop(into)] name: String,
    #[prop(optional_no_strip)] image_src: Option<String>,
    #[prop(optional)] role: Role,
) -> impl IntoView {
    let picture = image_src.map(|src| {
        view! {
            <OptimizedImage
                src
                alt=role.profile_alt()
                width=IMAGE_WIDTH
                height=IMAGE_HEIGHT
                class="role-card__image"
                style=geometry::image_style()
            />
        }
    });

    view! {
        <div class="role-card" style=geometry::card_style()>
            <img
                class="role-card__background"
                src=role.background()
                alt=role.background_alt()
                width=CARD_WIDTH
                height=CARD_HEIGHT
                style=geometry::background_style()
                draggable="false"
                aria-hidden="true"
            />
            <div class="role-card__name font-press-start" style=geometry::name_style()>
                {name}
            </div>
            <div class="role-card__slot" style=geometry::slot_style()>
                {picture}
            </div>
        </div>
    }
}
