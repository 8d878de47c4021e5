use anyhow::Result;
use js_sys::Array;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use folio::{SectionId, Subscription, VisibilityEvent, VisibilitySink, VisibilitySource};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

// BrowserVisibility
//
// feeds IntersectionObserver notifications into the section tracker.  sections
// are looked up by element id, so this has to run after the page is rendered
pub struct BrowserVisibility;

// the callback has to stay alive for as long as the observer can call it, so
// the two are dropped together
pub struct BrowserSubscription {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Subscription for BrowserSubscription {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

impl VisibilitySource for BrowserVisibility {
    type Subscription = BrowserSubscription;

    fn observe(
        &mut self,
        regions: &[SectionId],
        threshold: f64,
        mut sink: VisibilitySink,
    ) -> Result<Option<BrowserSubscription>> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| anyhow::Error::msg("no document to observe"))?;

        let elements: Vec<Element> = regions
            .iter()
            .filter_map(|id| document.get_element_by_id(id.as_str()))
            .collect();

        if elements.is_empty() {
            return Ok(None);
        }

        debug!("found {} of {} sections in the document", elements.len(), regions.len());

        // isIntersecting alone is also true for the initial report of a section
        // that barely touches the viewport, hence the ratio check
        let callback = ObserverCallback::new(move |entries: Array, _: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| {
                    let visible_ratio = entry.intersection_ratio();
                    VisibilityEvent {
                        section_id: SectionId::new(entry.target().id()),
                        is_visible: entry.is_intersecting() && visible_ratio >= threshold,
                        visible_ratio,
                    }
                })
                .collect();

            sink(batch);
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        // on failure the callback is dropped here along with everything else
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| {
                    anyhow::Error::msg(format!("failed to create IntersectionObserver: {err:?}"))
                })?;

        for element in &elements {
            observer.observe(element);
        }

        Ok(Some(BrowserSubscription {
            observer,
            _callback: callback,
        }))
    }
}
