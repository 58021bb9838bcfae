use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaBars, FaBox, FaChartLine, FaClipboardCheck, FaRightFromBracket, FaUsers,
    },
    Icon,
};

use crate::{
    client::{constant::SITE_NAME, model::auth::UserState, router::Route},
    model::role::Role,
};

const DRAWER_ID: &str = "main-drawer";

/// Shell of every page. Signed-in users get a navigation drawer, which stays open beside the
/// content on large screens and slides in from the hamburger button on small ones.
#[component]
pub fn Layout() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state();

    let Some(user) = state.user.clone() else {
        return rsx!(Outlet::<Route> {});
    };

    rsx!(
        div {
            class: "drawer lg:drawer-open",
            input {
                id: DRAWER_ID,
                r#type: "checkbox",
                class: "drawer-toggle",
            }
            div {
                class: "drawer-content flex flex-col",
                div {
                    class: "navbar bg-base-200 lg:hidden",
                    label {
                        r#for: DRAWER_ID,
                        class: "btn btn-square btn-ghost",
                        aria_label: "Abrir menu",
                        Icon { width: 20, height: 20, icon: FaBars }
                    }
                    span { class: "text-lg font-semibold ml-2", {SITE_NAME} }
                }
                Outlet::<Route> {}
            }
            div {
                class: "drawer-side z-30",
                label {
                    r#for: DRAWER_ID,
                    class: "drawer-overlay",
                    aria_label: "Fechar menu",
                }
                aside {
                    class: "bg-base-200 min-h-full w-64 flex flex-col",
                    div {
                        class: "p-4 border-b border-base-300",
                        p { class: "text-xl font-bold", {SITE_NAME} }
                        p { class: "text-sm opacity-80 truncate", "{user.name}" }
                        span { class: "badge badge-outline badge-sm mt-1", {user.role.label()} }
                    }
                    ul {
                        class: "menu w-full grow",
                        if user.role.can_manage_responses() {
                            NavItem { to: Route::Dashboard {}, label: "Dashboard",
                                Icon { width: 16, height: 16, icon: FaChartLine }
                            }
                        }
                        NavItem { to: Route::Containers {}, label: "Containers",
                            Icon { width: 16, height: 16, icon: FaBox }
                        }
                        if user.role.can_manage_responses() {
                            NavItem { to: Route::Responses {}, label: "Respostas",
                                Icon { width: 16, height: 16, icon: FaClipboardCheck }
                            }
                        }
                        if user.role == Role::Gerente {
                            NavItem { to: Route::Users {}, label: "Usuários",
                                Icon { width: 16, height: 16, icon: FaUsers }
                            }
                        }
                    }
                    ul {
                        class: "menu w-full border-t border-base-300",
                        li {
                            a {
                                href: "/api/auth/logout",
                                Icon { width: 16, height: 16, icon: FaRightFromBracket }
                                "Sair"
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn NavItem(to: Route, label: &'static str, children: Element) -> Element {
    let current = use_route::<Route>();
    let active = if current == to { "menu-active" } else { "" };

    rsx!(
        li {
            Link {
                to: to.clone(),
                class: "{active}",
                onclick: move |_| {
                    #[cfg(feature = "web")]
                    document::eval(&format!(
                        "document.getElementById('{DRAWER_ID}').checked = false"
                    ));
                },
                {children}
                "{label}"
            }
        }
    )
}
