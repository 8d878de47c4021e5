pub mod config;
pub mod content;
pub mod nav;
pub mod section;
pub mod theme;
pub mod tracker;
pub mod visibility;

pub use section::{SectionDescriptor, SectionId, SectionList};
pub use theme::{StyleVariant, Theme, ThemeController, derive_style};
pub use tracker::{SectionTracker, ViewportSectionTracker};
pub use visibility::{
    BatchPolicy, Subscription, VISIBILITY_THRESHOLD, VisibilityEvent, VisibilitySink,
    VisibilitySource,
};
