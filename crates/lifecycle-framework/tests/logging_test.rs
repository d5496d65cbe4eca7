//! Log-event contract: stop failures surface as exactly one error event per
//! failing component, start/stop progress is visible at debug level, and the
//! absence of a subscriber never changes behavior (every other test in this
//! suite runs without one).

use std::fmt;
use std::sync::{Arc, Mutex};

use lifecycle_framework::mock::{EventLog, MockComponent};
use lifecycle_framework::{ComponentGraph, Lifecycle};
use tokio_util::sync::CancellationToken;
use tracing::field::{Field, Visit};
use tracing::{span, Event, Level, Metadata, Subscriber};

/// Minimal subscriber collecting (level, rendered fields) per event.
#[derive(Clone, Default)]
struct Capture {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl Capture {
    fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().unwrap().clone()
    }

    fn errors_mentioning(&self, needle: &str) -> usize {
        self.events()
            .iter()
            .filter(|(level, text)| *level == Level::ERROR && text.contains(needle))
            .count()
    }
}

impl Subscriber for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _attrs: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut fields = FieldRenderer::default();
        event.record(&mut fields);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), fields.rendered));
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

#[derive(Default)]
struct FieldRenderer {
    rendered: String,
}

impl Visit for FieldRenderer {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if !self.rendered.is_empty() {
            self.rendered.push(' ');
        }
        self.rendered.push_str(&format!("{}={:?}", field.name(), value));
    }
}

#[tokio::test]
async fn stop_failure_emits_exactly_one_error_event() {
    let capture = Capture::default();
    let _guard = tracing::subscriber::set_default(capture.clone());

    let log = EventLog::new();
    let mut graph = ComponentGraph::new();
    graph.add_component(
        "flaky",
        Lifecycle::starter_stopper(MockComponent::new("flaky", &log).failing_stop()),
    );
    graph.add_component("solid", Lifecycle::starter_stopper(MockComponent::new("solid", &log)));

    let shutdown = CancellationToken::new();
    graph.start(&shutdown).await.unwrap();
    graph.stop(&shutdown).await.unwrap();

    // The failure was absorbed, the other component still stopped, and the
    // sink saw one error event naming the failing component.
    assert_eq!(log.stopped().len(), 2);
    assert_eq!(capture.errors_mentioning("flaky"), 1);
    assert_eq!(capture.errors_mentioning("solid"), 0);
}

#[tokio::test]
async fn progress_is_reported_at_debug_level() {
    let capture = Capture::default();
    let _guard = tracing::subscriber::set_default(capture.clone());

    let log = EventLog::new();
    let mut graph = ComponentGraph::new();
    let db = graph.add_component("db", Lifecycle::starter_stopper(MockComponent::new("db", &log)));
    let api = graph.add_component("api", Lifecycle::starter_stopper(MockComponent::new("api", &log)));
    graph.add_dependency(api, "db", db);

    let shutdown = CancellationToken::new();
    graph.start(&shutdown).await.unwrap();
    graph.stop(&shutdown).await.unwrap();

    let debugs: Vec<String> = capture
        .events()
        .into_iter()
        .filter(|(level, _)| *level == Level::DEBUG)
        .map(|(_, text)| text)
        .collect();

    // One debug event per hook invocation, four hooks in total.
    assert_eq!(debugs.len(), 4);
    assert!(debugs[0].contains("starting") && debugs[0].contains("db"));
    assert!(debugs[1].contains("starting") && debugs[1].contains("api"));
    assert!(debugs[2].contains("stopping") && debugs[2].contains("api"));
    assert!(debugs[3].contains("stopping") && debugs[3].contains("db"));
}
