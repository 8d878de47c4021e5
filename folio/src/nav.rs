use crate::section::{SectionId, SectionList};

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub id: SectionId,
    pub label: String,
    pub href: String,
    pub emphasized: bool,
}

impl NavLink {
    pub fn class(&self) -> &'static str {
        if self.emphasized {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

// one link per section in list order, with exactly the active one emphasized
pub fn nav_links(sections: &SectionList, active: &SectionId) -> Vec<NavLink> {
    sections
        .iter()
        .map(|section| NavLink {
            id: section.id.clone(),
            label: section.label(),
            href: section.id.anchor(),
            emphasized: &section.id == active,
        })
        .collect()
}
