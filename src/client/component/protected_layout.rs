use dioxus::prelude::*;

use crate::{
    client::{
        component::page::{ErrorPage, LoadingPage},
        model::auth::UserState,
        router::Route,
    },
    model::role::Role,
};

#[component]
pub fn RequiresSignedIn() -> Element {
    rsx! {
        ProtectedLayout { roles: Role::ALL.to_vec() }
    }
}

#[component]
pub fn RequiresManager() -> Element {
    rsx! {
        ProtectedLayout { roles: vec![Role::Gerente] }
    }
}

/// Inspection forms are filled by managers and technicians.
#[component]
pub fn RequiresInspector() -> Element {
    rsx! {
        ProtectedLayout { roles: vec![Role::Gerente, Role::Tecnico] }
    }
}

/// Renders the nested route only for signed-in users holding one of `roles`.
///
/// Signed-out visitors are sent to the login page with the current path as `redirect`.
#[component]
pub fn ProtectedLayout(roles: Vec<Role>) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let nav = navigator();
    let route = use_route::<Route>();

    let state = user_state();
    let fetch_completed = state.fetched;
    let user_logged_in = state.user.is_some();
    let has_required_role = state.has_any_role(&roles);
    let redirect = route.to_string();

    use_effect(use_reactive!(|(user_logged_in, fetch_completed, redirect)| {
        if fetch_completed && !user_logged_in {
            nav.replace(Route::Login {
                redirect: redirect.clone(),
            });
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {}
        } else if user_logged_in && !has_required_role {
            ErrorPage {
                status: 403,
                message: "Você não tem permissão para acessar esta página.",
            }
        } else if user_logged_in {
            Outlet::<Route> {}
        }
        // Signed out: nothing while the effect redirects
    }
}
