use dioxus::prelude::*;
use tracing::info;

use folio::{
    SectionId, SectionList, ThemeController,
    nav::{NavLink, nav_links},
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    link: NavLink,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let link = props.link;

    rsx! {
        a { class: link.class(), href: "{link.href}", "{link.label}" }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeController>>();
    let style = theme.read().style();

    rsx! {
        button {
            class: "theme-toggle",
            title: style.toggle_label,
            aria_label: style.toggle_label,
            onclick: move |_| {
                let next = theme.write().toggle();
                info!("switched to {next} theme");
            },
            "{style.toggle_icon}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    title: String,
    sections: SectionList,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let theme = use_context::<Signal<ThemeController>>();
    let active = use_context::<Signal<SectionId>>();

    let style = theme.read().style();
    let links = nav_links(&props.sections, &active.read());
    let home = props.sections.first().id.anchor();

    rsx! {
        header { class: style.header,
            div { class: "nav-container",
                a { class: "site-title", href: "{home}", "{props.title}" }

                nav { class: "nav-links",
                    for link in links {
                        NavBarButton { key: "{link.id}", link: link.clone() }
                    }
                    ThemeToggle {}
                }
            }
        }
    }
}
