use dioxus::prelude::*;

mod components;
mod controller;
mod db;
mod error;
mod models;
mod signup;
mod utils;

use components::AppShell;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#15131a" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Title { "The Devil's Baby - Audiobook" }

        document::Stylesheet { href: PLAYER_CSS }

        AppShell {}
    }
}
