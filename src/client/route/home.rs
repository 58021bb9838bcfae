use dioxus::prelude::*;

use crate::client::{component::LoadingPage, model::auth::UserState, router::Route};

/// Sends the user to their role's landing page.
#[component]
pub fn Home() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    use_effect(move || {
        if let Some(role) = user_state().role() {
            let target = role
                .landing_path()
                .parse::<Route>()
                .unwrap_or(Route::Containers {});
            nav.replace(target);
        }
    });

    rsx! {
        LoadingPage {}
    }
}
