use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    content::ContactLink,
    section::{SectionDescriptor, SectionList},
    visibility::BatchPolicy,
};

// site configuration
//
// everything the page renders is supplied through this document: the ordered
// sections with their content, plus a handful of page-level options
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,

    // tie-break for sections entering the viewport in the same batch
    #[serde(default)]
    pub batch_policy: BatchPolicy,

    // pinned to the bottom corner of the page, outside of any section
    #[serde(default)]
    pub floating_contact: Option<ContactLink>,

    pub sections: Vec<SectionDescriptor>,
}

// validated form of the document, ready to hand to the page
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub title: String,
    pub batch_policy: BatchPolicy,
    pub floating_contact: Option<ContactLink>,
    pub sections: SectionList,
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> Result<Site> {
    debug!("parsing site document");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site document")?;
    let config = data.config;

    let sections = SectionList::new(config.sections).context("invalid section list")?;

    debug!("successfully parsed site document with {} sections", sections.ids().len());
    Ok(Site {
        title: config.title,
        batch_policy: config.batch_policy,
        floating_contact: config.floating_contact,
        sections,
    })
}
