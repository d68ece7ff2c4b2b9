use http::status::StatusCode;
use leptos::*;

#[derive(Clone, Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Lists every error caught by an `ErrorBoundary` or handed over by the
/// router. On the server it also sets the response status.
#[component]
pub fn error_template(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(outside_errors), _) => outside_errors,
        (None, Some(errors)) => errors.get_untracked(),
        (None, None) => return view! { <p>"No errors"</p> }.into_view(),
    };
    let messages: Vec<String> = errors.iter().map(|(_, error)| error.to_string()).collect();

    #[cfg(feature = "ssr")]
    {
        let status = errors
            .iter()
            .find_map(|(_, error)| error.downcast_ref::<AppError>())
            .map(AppError::status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(status);
        }
    }

    let heading = if messages.len() > 1 { "Errors" } else { "Error" };
    let items = messages
        .into_iter()
        .map(|message| view! { <li>{message}</li> })
        .collect_view();
    view! {
        <h1>{heading}</h1>
        <ul>{items}</ul>
    }
    .into_view()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::testing::render_html;

    #[test]
    fn not_found_status() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn lists_outside_errors() {
        let html = render_html(|| {
            let mut outside_errors = Errors::default();
            outside_errors.insert_with_default_key(AppError::NotFound);
            view! { <ErrorTemplate outside_errors/> }
        });
        assert!(html.contains("Error"));
        assert!(html.contains("<li"));
        assert!(html.contains("Not Found"));
    }

    #[test]
    fn nothing_to_report() {
        let html = render_html(|| view! { <ErrorTemplate/> });
        assert!(html.contains("No errors"));
    }
}
