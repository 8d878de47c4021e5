use std::{collections::HashSet, fmt};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::content::SectionContent;

// SectionId
//
// stable identifier of an anchorable region of the page.  it doubles as the
// element id in the rendered markup and as the hash fragment in navigation links
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        SectionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        SectionId(value.to_owned())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SectionDescriptor {
    pub id: SectionId,

    // falls back to the capitalized id when missing
    #[serde(default)]
    pub title: Option<String>,

    pub content: SectionContent,
}

impl SectionDescriptor {
    pub fn label(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => capitalize(self.id.as_str()),
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// SectionList
//
// the ordered, load-time-fixed set of sections.  construction guarantees that
// there is at least one section and that ids are unique, so that the tracker
// always has a valid default and never has to choose between duplicates
#[derive(Clone, Debug, PartialEq)]
pub struct SectionList {
    sections: Vec<SectionDescriptor>,
}

impl SectionList {
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self> {
        if sections.is_empty() {
            return Err(anyhow::Error::msg("section list must not be empty"));
        }

        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.clone()) {
                return Err(anyhow::Error::msg(format!(
                    "duplicate section id: {}",
                    section.id
                )));
            }
        }

        Ok(SectionList { sections })
    }

    pub fn first(&self) -> &SectionDescriptor {
        // non-empty by construction
        &self.sections[0]
    }

    pub fn ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    #[cfg(test)]
    pub fn contains(&self, id: &SectionId) -> bool {
        self.sections.iter().any(|s| &s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.sections.iter()
    }
}
