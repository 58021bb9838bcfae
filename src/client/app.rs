use dioxus::prelude::*;

use crate::client::{
    component::ToastContainer,
    constant::SITE_NAME,
    model::{auth::UserState, toast::ToastContext},
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::get_user;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
const DAISY_UI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));
    use_context_provider(ToastContext::new);

    // Fetch user on first load
    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                let state = match result {
                    Ok(Some(user)) => UserState::signed_in(user.clone()),
                    Ok(None) => UserState::signed_out(),
                    Err(err) => {
                        tracing::error!("Failed to fetch signed-in user: {}", err);
                        UserState::signed_out()
                    }
                };
                user_state.set(state);
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Checklists e inspeções de containers, veículos e embarcações",
        }
        document::Link { rel: "stylesheet", href: DAISY_UI_CSS }
        document::Script { src: TAILWIND_BROWSER }
        Router::<Route> {}
        ToastContainer {}
    }
}
