use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::section::SectionId;

// fraction of a section's height that has to intersect the viewport before the
// section counts as in view.  not user adjustable
pub const VISIBILITY_THRESHOLD: f64 = 0.6;

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityEvent {
    pub section_id: SectionId,
    pub is_visible: bool,
    pub visible_ratio: f64,
}

#[cfg(test)]
impl VisibilityEvent {
    pub fn visible(id: impl Into<String>, visible_ratio: f64) -> Self {
        VisibilityEvent {
            section_id: SectionId::new(id),
            is_visible: true,
            visible_ratio,
        }
    }

    pub fn hidden(id: impl Into<String>, visible_ratio: f64) -> Self {
        VisibilityEvent {
            section_id: SectionId::new(id),
            is_visible: false,
            visible_ratio,
        }
    }
}

// how a batch with several visible sections is resolved
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub enum BatchPolicy {
    // the last visible event in delivery order wins
    #[default]
    LastVisible,
    // the visible event with the highest ratio wins, later events win ties
    LargestRatio,
}

// callback receiving one notification batch from the platform
pub type VisibilitySink = Box<dyn FnMut(Vec<VisibilityEvent>)>;

// VisibilitySource
//
// the platform's visibility reporting primitive, injected into the tracker.
// the browser implementation lives in the webapp; tests script their own.
//
// returning Ok(None) means there was nothing to observe (e.g. no rendered
// regions matched), which the tracker treats as a no-op.  implementations
// must release anything they acquired before returning an error
pub trait VisibilitySource {
    type Subscription: Subscription;

    fn observe(
        &mut self,
        regions: &[SectionId],
        threshold: f64,
        sink: VisibilitySink,
    ) -> Result<Option<Self::Subscription>>;
}

pub trait Subscription {
    fn disconnect(&mut self);
}
