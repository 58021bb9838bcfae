use dioxus::prelude::*;

use crate::client::{
    component::Page,
    constant::SITE_NAME,
    router::Route,
};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Title { "Página não encontrada | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-4 items-center justify-center text-center",
            p { class: "text-5xl font-bold", "404" }
            p { class: "opacity-80", "A página {path} não existe." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Voltar ao início" }
        }
    }
}
