use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use folio::{
    BatchPolicy, SectionId, SectionList, ThemeController, ViewportSectionTracker, config::Site,
};

use crate::{
    common::observer::BrowserVisibility,
    components::{
        navigation::NavBar,
        sections::{FloatingContact, SectionView},
    },
};

// use_section_tracker
//
// observation starts once the sections are in the document, i.e. after the first
// render, and is torn down when the page unmounts.  the returned signal is only
// written from the observer callback
fn use_section_tracker(sections: &SectionList, policy: BatchPolicy) -> Signal<SectionId> {
    let mut active = use_signal(|| sections.first().id.clone());

    let tracker = use_hook(|| {
        Rc::new(RefCell::new(ViewportSectionTracker::<BrowserVisibility>::new(
            sections, policy,
        )))
    });

    let setup = tracker.clone();
    use_effect(move || {
        setup
            .borrow_mut()
            .initialize(&mut BrowserVisibility, move |id| active.set(id.clone()));
    });

    use_drop(move || tracker.borrow_mut().teardown());

    active
}

#[derive(Clone, PartialEq, Props)]
pub struct ProfilePageProps {
    site: Site,
}

// ProfilePage
//
// owns the two pieces of mutable state, the theme and the active section, and
// hands them to the navigation bar and the sections through context
#[component]
pub fn ProfilePage(props: ProfilePageProps) -> Element {
    let site = props.site;

    let theme = use_context_provider(|| Signal::new(ThemeController::new()));
    let active = use_section_tracker(&site.sections, site.batch_policy);
    use_context_provider(|| active);

    let style = theme.read().style();

    rsx! {
        main { class: style.page,
            NavBar { title: site.title.clone(), sections: site.sections.clone() }

            for section in site.sections.iter() {
                SectionView { key: "{section.id}", section: section.clone() }
            }

            if let Some(link) = site.floating_contact.clone() {
                FloatingContact { link: link }
            }
        }
    }
}
