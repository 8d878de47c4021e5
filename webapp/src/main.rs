#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, error, info};

mod common;

mod components;

mod profile;
use profile::ProfilePage;

use folio::config::read_config;

// page content, see assets/site.toml
const SITE_DOCUMENT: &str = include_str!("../assets/site.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let site = use_hook(|| match read_config(SITE_DOCUMENT) {
        Ok(site) => {
            info!("loaded site document for {}", site.title);
            Ok(site)
        }
        Err(err) => {
            error!("failed to load site document: {err:#}");
            Err(format!("{err:#}"))
        }
    });

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        match site {
            Ok(site) => rsx! {
                ProfilePage { site: site }
            },
            Err(err) => rsx! {
                div { class: "site-error", "Failed to load page content: {err}" }
            },
        }
    }
}
