use dioxus::prelude::*;

use folio::{
    SectionDescriptor, StyleVariant, ThemeController,
    content::{ContactLink, Role, SectionContent, TechGroup},
};

#[derive(Clone, PartialEq, Props)]
pub struct SectionViewProps {
    section: SectionDescriptor,
}

// SectionView
//
// one anchorable region of the page.  the element id must match the section id,
// the browser observer finds sections by it
#[component]
pub fn SectionView(props: SectionViewProps) -> Element {
    let theme = use_context::<Signal<ThemeController>>();
    let style = theme.read().style();

    let section = props.section;
    let label = section.label();

    rsx! {
        section { id: "{section.id}", class: "page-section",
            match section.content {
                SectionContent::Profile { name, headline, paragraphs } => rsx! {
                    div { class: style.card,
                        h1 { class: "profile-name", "{name}" }
                        h2 { class: "profile-headline", "{headline}" }
                        for paragraph in paragraphs {
                            p { "{paragraph}" }
                        }
                    }
                },
                SectionContent::Strengths { items } => rsx! {
                    h3 { class: "section-title", "{label}" }
                    div { class: "{style.card} strength-list",
                        for item in items {
                            p { "{item}" }
                        }
                    }
                },
                SectionContent::Technologies { groups } => rsx! {
                    h3 { class: "section-title", "{label}" }
                    div { class: "tech-grid",
                        for group in groups {
                            TechCard { key: "{group.title}", group: group.clone(), style: style.clone() }
                        }
                    }
                },
                SectionContent::Experience { roles } => rsx! {
                    h3 { class: "section-title", "{label}" }
                    div { class: style.card,
                        for role in roles {
                            RoleEntry { key: "{role.title}", role: role.clone() }
                        }
                    }
                },
                SectionContent::Contact { links } => rsx! {
                    h3 { class: "section-title", "{label}" }
                    div { class: "contact-links",
                        for link in links {
                            ContactButton { key: "{link.url}", link: link.clone(), style: style.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn TechCard(group: TechGroup, style: StyleVariant) -> Element {
    rsx! {
        div { class: "{style.card} tech-card",
            h4 { "{group.title}" }
            p { "{group.summary()}" }
        }
    }
}

#[component]
fn RoleEntry(role: Role) -> Element {
    rsx! {
        div { class: "role",
            h4 { "{role.title}" }
            p { class: "role-period", "{role.period}" }
            ul {
                for duty in role.duties.iter() {
                    li { "{duty}" }
                }
            }
        }
    }
}

#[component]
fn ContactButton(link: ContactLink, style: StyleVariant) -> Element {
    let class = if link.primary {
        String::from("btn btn-primary")
    } else {
        format!("btn {}", style.card)
    };

    rsx! {
        a {
            class: "{class}",
            href: "{link.url}",
            target: "_blank",
            rel: "noopener noreferrer",
            "{link.label}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FloatingContactProps {
    link: ContactLink,
}

#[component]
pub fn FloatingContact(props: FloatingContactProps) -> Element {
    let link = props.link;

    rsx! {
        a {
            class: "floating-contact",
            href: "{link.url}",
            target: "_blank",
            rel: "noopener noreferrer",
            "{link.label}"
        }
    }
}
