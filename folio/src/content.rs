use serde::{Deserialize, Serialize};

// section payloads
//
// these are inert as far as the tracker and theme logic are concerned; the
// webapp matches on the kind to pick a renderer
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum SectionContent {
    Profile {
        name: String,
        headline: String,
        #[serde(default)]
        paragraphs: Vec<String>,
    },
    Strengths {
        items: Vec<String>,
    },
    Technologies {
        groups: Vec<TechGroup>,
    },
    Experience {
        roles: Vec<Role>,
    },
    Contact {
        links: Vec<ContactLink>,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TechGroup {
    pub title: String,
    pub items: Vec<String>,
}

impl TechGroup {
    pub fn summary(&self) -> String {
        self.items.join(" · ")
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Role {
    pub title: String,
    pub period: String,
    #[serde(default)]
    pub duties: Vec<String>,
}

// external link, opened in a new tab
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,

    // primary links get the accent button rather than the themed card
    #[serde(default)]
    pub primary: bool,
}
