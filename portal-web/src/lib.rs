pub mod audio;
pub mod auth_service;
pub mod bridge;
pub mod config;
pub mod pages;
pub mod player_service;
pub mod timer;

use dioxus::prelude::*;
use pages::PortalPage;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        // Built by the Tailwind CLI from tailwind.css
        document::Link { rel: "stylesheet", href: "/assets/tailwind.css" }
        div { class: "min-h-screen portal-backdrop", PortalPage {} }
    }
}
