use std::{cell::RefCell, rc::Rc};

use tracing::{Level, debug, info, instrument, warn};

use crate::{
    section::{SectionId, SectionList},
    visibility::{
        BatchPolicy, Subscription, VISIBILITY_THRESHOLD, VisibilityEvent, VisibilitySink,
        VisibilitySource,
    },
};

// SectionTracker
//
// the state machine behind the navigation highlight.  it knows the fixed set of
// section ids and the currently active one, and folds visibility batches into it.
// the active id starts at the first section and can only ever be replaced by
// another member of the set
#[derive(Clone, Debug)]
pub struct SectionTracker {
    ids: Vec<SectionId>,
    active: SectionId,
    policy: BatchPolicy,
}

impl SectionTracker {
    pub fn new(sections: &SectionList, policy: BatchPolicy) -> Self {
        SectionTracker {
            ids: sections.ids(),
            active: sections.first().id.clone(),
            policy,
        }
    }

    pub fn active(&self) -> &SectionId {
        &self.active
    }

    // returns the new active id if the batch changed it
    pub fn on_visibility_change(&mut self, batch: &[VisibilityEvent]) -> Option<SectionId> {
        let visible = batch.iter().filter(|event| {
            if !event.is_visible {
                return false;
            }

            if !self.ids.contains(&event.section_id) {
                debug!("ignoring visibility event for unknown section {}", event.section_id);
                return false;
            }

            true
        });

        let winner = match self.policy {
            BatchPolicy::LastVisible => visible.last(),
            // max_by keeps the last of equal maxima
            BatchPolicy::LargestRatio => {
                visible.max_by(|a, b| a.visible_ratio.total_cmp(&b.visible_ratio))
            }
        }?;

        if winner.section_id == self.active {
            return None;
        }

        self.active = winner.section_id.clone();
        Some(self.active.clone())
    }
}

type ChangeListener = Box<dyn FnMut(&SectionId)>;

// state shared between the tracker and the sink handed to the platform
//
// the generation lets sinks from a previous initialize() recognize that they
// are stale, and observing is cleared on teardown so that late batches are
// dropped instead of moving the highlight
struct Shared {
    tracker: SectionTracker,
    generation: u64,
    observing: bool,
    on_change: Option<ChangeListener>,
}

// every batch goes through here, whether it comes from the platform sink or a
// direct call, so the listener sees each change exactly once.  the listener is
// taken out while it runs so that it can read the tracker back
fn deliver(shared: &RefCell<Shared>, generation: u64, batch: &[VisibilityEvent]) -> Option<SectionId> {
    let (changed, mut listener) = {
        let mut shared = shared.borrow_mut();

        if !shared.observing || shared.generation != generation {
            debug!("dropping visibility batch delivered after teardown");
            return None;
        }

        let changed = shared.tracker.on_visibility_change(batch)?;
        (changed, shared.on_change.take())
    };

    debug!("active section is now {changed}");
    if let Some(listener) = listener.as_mut() {
        listener(&changed);
    }

    let mut shared = shared.borrow_mut();
    if shared.observing && shared.generation == generation && shared.on_change.is_none() {
        shared.on_change = listener;
    }

    Some(changed)
}

// ViewportSectionTracker
//
// owns the platform subscription for the lifetime of a mount.  teardown() is
// called on unmount, and again from Drop so that every exit path releases the
// observer
pub struct ViewportSectionTracker<S: VisibilitySource> {
    shared: Rc<RefCell<Shared>>,
    ids: Vec<SectionId>,
    subscription: Option<S::Subscription>,
}

impl<S: VisibilitySource> ViewportSectionTracker<S> {
    pub fn new(sections: &SectionList, policy: BatchPolicy) -> Self {
        ViewportSectionTracker {
            shared: Rc::new(RefCell::new(Shared {
                tracker: SectionTracker::new(sections, policy),
                generation: 0,
                observing: false,
                on_change: None,
            })),
            ids: sections.ids(),
            subscription: None,
        }
    }

    pub fn active(&self) -> SectionId {
        self.shared.borrow().tracker.active().clone()
    }

    #[cfg(test)]
    fn is_observing(&self) -> bool {
        self.shared.borrow().observing
    }

    // register every section with the source.  on_change is invoked after each
    // batch that moves the active section, outside of any internal borrow
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn initialize<F>(&mut self, source: &mut S, on_change: F)
    where
        F: FnMut(&SectionId) + 'static,
    {
        self.teardown();

        let generation = {
            let mut shared = self.shared.borrow_mut();
            shared.generation += 1;
            shared.observing = true;
            shared.on_change = Some(Box::new(on_change));
            shared.generation
        };

        let shared = self.shared.clone();
        let sink: VisibilitySink = Box::new(move |batch| {
            deliver(&shared, generation, &batch);
        });

        match source.observe(&self.ids, VISIBILITY_THRESHOLD, sink) {
            Ok(Some(subscription)) => {
                info!("observing {} sections", self.ids.len());
                self.subscription = Some(subscription);
            }
            Ok(None) => {
                debug!("no rendered sections to observe");
                self.stop_observing();
            }
            Err(err) => {
                warn!("failed to observe sections, navigation highlight stays at default: {err}");
                self.stop_observing();
            }
        }
    }

    // direct event entry point, same lifecycle and notification as the sink
    pub fn on_visibility_change(&self, batch: &[VisibilityEvent]) -> Option<SectionId> {
        let generation = self.shared.borrow().generation;
        deliver(&self.shared, generation, batch)
    }

    fn stop_observing(&self) {
        let mut shared = self.shared.borrow_mut();
        shared.observing = false;
        shared.on_change = None;
    }

    pub fn teardown(&mut self) {
        self.stop_observing();

        if let Some(mut subscription) = self.subscription.take() {
            subscription.disconnect();
            info!("disconnected section observer");
        }
    }
}

impl<S: VisibilitySource> Drop for ViewportSectionTracker<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use proptest::prelude::*;

    use super::*;
    use crate::section::tests::profile_sections;

    // ScriptedSource
    //
    // stands in for the browser: keeps the sink it was handed and lets the test
    // push batches through it, even after disconnect, the way a late platform
    // notification would
    #[derive(Default)]
    struct ScriptedSource {
        sink: Rc<RefCell<Option<VisibilitySink>>>,
        disconnects: Rc<Cell<u32>>,
        observed: Vec<SectionId>,
        nothing_rendered: bool,
        fail: bool,
    }

    struct ScriptedSubscription {
        disconnects: Rc<Cell<u32>>,
    }

    impl Subscription for ScriptedSubscription {
        fn disconnect(&mut self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    impl VisibilitySource for ScriptedSource {
        type Subscription = ScriptedSubscription;

        fn observe(
            &mut self,
            regions: &[SectionId],
            threshold: f64,
            sink: VisibilitySink,
        ) -> anyhow::Result<Option<ScriptedSubscription>> {
            if self.fail {
                return Err(anyhow::Error::msg("observer unavailable"));
            }

            if self.nothing_rendered {
                return Ok(None);
            }

            assert_eq!(threshold, VISIBILITY_THRESHOLD);
            self.observed = regions.to_vec();
            *self.sink.borrow_mut() = Some(sink);

            Ok(Some(ScriptedSubscription {
                disconnects: self.disconnects.clone(),
            }))
        }
    }

    impl ScriptedSource {
        fn emit(&self, batch: Vec<VisibilityEvent>) {
            if let Some(sink) = self.sink.borrow_mut().as_mut() {
                sink(batch);
            }
        }
    }

    fn mounted(
        policy: BatchPolicy,
    ) -> (
        ViewportSectionTracker<ScriptedSource>,
        ScriptedSource,
        Rc<RefCell<Vec<SectionId>>>,
    ) {
        let mut source = ScriptedSource::default();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let mut tracker = ViewportSectionTracker::new(&profile_sections(), policy);

        let log = changes.clone();
        tracker.initialize(&mut source, move |id| log.borrow_mut().push(id.clone()));

        (tracker, source, changes)
    }

    #[test]
    fn defaults_to_first_section() {
        let (tracker, source, changes) = mounted(BatchPolicy::LastVisible);

        assert_eq!(tracker.active(), SectionId::from("profile"));
        assert!(tracker.is_observing());
        assert_eq!(source.observed, profile_sections().ids());
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn visible_event_activates_section() {
        let (tracker, source, changes) = mounted(BatchPolicy::LastVisible);

        source.emit(vec![VisibilityEvent::visible("tech", 0.7)]);

        assert_eq!(tracker.active(), SectionId::from("tech"));
        assert_eq!(*changes.borrow(), vec![SectionId::from("tech")]);
    }

    #[test]
    fn last_visible_in_batch_wins() {
        let (tracker, source, _) = mounted(BatchPolicy::LastVisible);

        source.emit(vec![
            VisibilityEvent::visible("tech", 0.9),
            VisibilityEvent::visible("experience", 0.61),
        ]);

        assert_eq!(tracker.active(), SectionId::from("experience"));
    }

    #[test]
    fn largest_ratio_policy_picks_most_visible() {
        let (tracker, source, _) = mounted(BatchPolicy::LargestRatio);

        source.emit(vec![
            VisibilityEvent::visible("tech", 0.9),
            VisibilityEvent::visible("experience", 0.61),
        ]);
        assert_eq!(tracker.active(), SectionId::from("tech"));

        source.emit(vec![
            VisibilityEvent::visible("strengths", 0.8),
            VisibilityEvent::visible("contact", 0.8),
        ]);
        assert_eq!(tracker.active(), SectionId::from("contact"));
    }

    #[test]
    fn direct_batches_notify_listener() {
        let (tracker, source, changes) = mounted(BatchPolicy::LastVisible);

        let changed = tracker.on_visibility_change(&[VisibilityEvent::visible("tech", 0.9)]);
        assert_eq!(changed, Some(SectionId::from("tech")));
        assert_eq!(*changes.borrow(), vec![SectionId::from("tech")]);

        // the listener survives a direct call and still hears the platform
        source.emit(vec![VisibilityEvent::visible("contact", 0.7)]);
        assert_eq!(
            *changes.borrow(),
            vec![SectionId::from("tech"), SectionId::from("contact")]
        );
    }

    #[test]
    fn listener_may_read_tracker_state() {
        let mut source = ScriptedSource::default();
        let tracker = Rc::new(RefCell::new(ViewportSectionTracker::<ScriptedSource>::new(
            &profile_sections(),
            BatchPolicy::LastVisible,
        )));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let (reader, log) = (Rc::downgrade(&tracker), seen.clone());
        tracker.borrow_mut().initialize(&mut source, move |_| {
            if let Some(tracker) = reader.upgrade() {
                log.borrow_mut().push(tracker.borrow().active());
            }
        });

        source.emit(vec![VisibilityEvent::visible("experience", 0.8)]);
        assert_eq!(*seen.borrow(), vec![SectionId::from("experience")]);
    }

    #[test]
    fn hidden_and_unknown_events_are_ignored() {
        let (tracker, source, changes) = mounted(BatchPolicy::LastVisible);

        source.emit(vec![
            VisibilityEvent::hidden("tech", 0.2),
            VisibilityEvent::visible("footer", 1.0),
        ]);

        assert_eq!(tracker.active(), SectionId::from("profile"));
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn unchanged_section_does_not_notify() {
        let (_tracker, source, changes) = mounted(BatchPolicy::LastVisible);

        source.emit(vec![VisibilityEvent::visible("tech", 0.7)]);
        source.emit(vec![VisibilityEvent::visible("tech", 0.9)]);

        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn teardown_stops_tracking() {
        let (mut tracker, source, changes) = mounted(BatchPolicy::LastVisible);

        source.emit(vec![VisibilityEvent::visible("strengths", 0.7)]);
        tracker.teardown();
        source.emit(vec![VisibilityEvent::visible("contact", 0.7)]);

        assert_eq!(tracker.active(), SectionId::from("strengths"));
        assert_eq!(tracker.on_visibility_change(&[VisibilityEvent::visible("tech", 1.0)]), None);
        assert_eq!(source.disconnects.get(), 1);
        assert!(!tracker.is_observing());
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn drop_disconnects_observer() {
        let (tracker, source, _) = mounted(BatchPolicy::LastVisible);
        drop(tracker);

        assert_eq!(source.disconnects.get(), 1);
    }

    #[test]
    fn reinitialize_replaces_subscription() {
        let (mut tracker, mut source, _) = mounted(BatchPolicy::LastVisible);
        let stale = source.sink.borrow_mut().take();

        tracker.initialize(&mut source, |_| {});
        assert_eq!(source.disconnects.get(), 1);

        // the sink from the first mount must not move the highlight anymore
        if let Some(mut stale) = stale {
            stale(vec![VisibilityEvent::visible("contact", 1.0)]);
        }
        assert_eq!(tracker.active(), SectionId::from("profile"));

        source.emit(vec![VisibilityEvent::visible("experience", 0.8)]);
        assert_eq!(tracker.active(), SectionId::from("experience"));
    }

    #[test]
    fn nothing_rendered_is_a_noop() {
        let mut source = ScriptedSource {
            nothing_rendered: true,
            ..Default::default()
        };
        let mut tracker = ViewportSectionTracker::new(&profile_sections(), BatchPolicy::default());
        tracker.initialize(&mut source, |_| {});

        assert!(!tracker.is_observing());
        assert_eq!(tracker.active(), SectionId::from("profile"));
    }

    #[test]
    fn setup_failure_keeps_default() {
        let mut source = ScriptedSource {
            fail: true,
            ..Default::default()
        };
        let mut tracker = ViewportSectionTracker::new(&profile_sections(), BatchPolicy::default());
        tracker.initialize(&mut source, |_| {});

        assert!(!tracker.is_observing());
        assert_eq!(tracker.active(), SectionId::from("profile"));
        assert_eq!(source.disconnects.get(), 0);
    }

    const IDS: [&str; 5] = ["profile", "strengths", "tech", "experience", "contact"];

    fn batches() -> impl Strategy<Value = Vec<Vec<(usize, bool, f64)>>> {
        prop::collection::vec(
            prop::collection::vec((0usize..IDS.len(), prop::bool::ANY, 0.0f64..=1.0), 0..4),
            0..8,
        )
    }

    proptest! {
        #[test]
        fn active_is_last_visible_event(batches in batches()) {
            let (tracker, source, _) = mounted(BatchPolicy::LastVisible);

            let mut expected = "profile";
            for batch in &batches {
                let events = batch
                    .iter()
                    .map(|&(idx, is_visible, visible_ratio)| VisibilityEvent {
                        section_id: SectionId::from(IDS[idx]),
                        is_visible,
                        visible_ratio,
                    })
                    .collect();

                if let Some(&(idx, _, _)) = batch.iter().filter(|e| e.1).last() {
                    expected = IDS[idx];
                }

                source.emit(events);
            }

            prop_assert_eq!(tracker.active(), SectionId::from(expected));
        }

        #[test]
        fn active_stays_in_section_set(
            batches in batches(),
            stray in "[a-z]{1,8}",
            largest in prop::bool::ANY,
        ) {
            let policy = if largest { BatchPolicy::LargestRatio } else { BatchPolicy::LastVisible };
            let (tracker, source, _) = mounted(policy);
            let sections = profile_sections();

            for batch in &batches {
                let mut events: Vec<VisibilityEvent> = batch
                    .iter()
                    .map(|&(idx, _, ratio)| VisibilityEvent::visible(IDS[idx], ratio))
                    .collect();
                events.push(VisibilityEvent::visible(stray.clone(), 1.0));

                source.emit(events);
                prop_assert!(sections.contains(&tracker.active()));
            }
        }
    }
}
