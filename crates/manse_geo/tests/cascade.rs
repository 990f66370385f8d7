use std::cell::{Cell, RefCell};
use std::rc::Rc;

use manse_geo::{GeoError, GeoPlace, GeocodeProvider, Geocoder, ProviderOutcome};

/// Replays canned outcomes and counts calls.
struct Scripted {
    name: &'static str,
    outcomes: RefCell<Vec<ProviderOutcome>>,
    calls: Rc<Cell<u32>>,
}

impl Scripted {
    fn new(
        name: &'static str,
        outcomes: Vec<ProviderOutcome>,
    ) -> (Box<dyn GeocodeProvider>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let provider: Box<dyn GeocodeProvider> = Box::new(Self {
            name,
            outcomes: RefCell::new(outcomes.into_iter().rev().collect()),
            calls: Rc::clone(&calls),
        });
        (provider, calls)
    }
}

impl GeocodeProvider for Scripted {
    fn name(&self) -> &'static str {
        self.name
    }

    fn search(&self, _place: &str, _limit: usize) -> ProviderOutcome {
        self.calls.set(self.calls.get() + 1);
        self.outcomes
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| ProviderOutcome::Permanent("script exhausted".into()))
    }
}

fn place(label: &str) -> GeoPlace {
    GeoPlace {
        label: label.into(),
        latitude: 37.5,
        longitude: 127.0,
        country: None,
        city: None,
        source: "scripted".into(),
    }
}

fn retry(msg: &str) -> ProviderOutcome {
    ProviderOutcome::Retryable(msg.into())
}

#[test]
fn first_success_wins() {
    let (a, a_calls) = Scripted::new("a", vec![ProviderOutcome::Success(vec![place("A")])]);
    let (b, b_calls) = Scripted::new("b", vec![ProviderOutcome::Success(vec![place("B")])]);
    let geocoder = Geocoder::new(vec![a, b]);
    let found = geocoder.resolve("Seoul", 5).unwrap();
    assert_eq!(found[0].label, "A");
    assert_eq!(a_calls.get(), 1);
    assert_eq!(b_calls.get(), 0);
}

#[test]
fn retryable_failures_are_retried_then_succeed() {
    let (a, calls) = Scripted::new(
        "a",
        vec![retry("timeout"), retry("timeout"), ProviderOutcome::Success(vec![place("A")])],
    );
    let found = Geocoder::new(vec![a]).resolve("Seoul", 5).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(calls.get(), 3);
}

#[test]
fn attempts_are_bounded_then_next_provider() {
    let (a, a_calls) = Scripted::new("a", vec![retry("503"); 10]);
    let (b, _) = Scripted::new("b", vec![ProviderOutcome::Success(vec![place("B")])]);
    let found = Geocoder::new(vec![a, b]).resolve("Seoul", 5).unwrap();
    assert_eq!(a_calls.get(), 3);
    assert_eq!(found[0].label, "B");
}

#[test]
fn permanent_failure_is_not_retried() {
    let (a, a_calls) = Scripted::new("a", vec![ProviderOutcome::Permanent("HTTP 401".into())]);
    let (b, _) = Scripted::new("b", vec![ProviderOutcome::Success(vec![place("B")])]);
    Geocoder::new(vec![a, b]).resolve("Seoul", 5).unwrap();
    assert_eq!(a_calls.get(), 1);
}

#[test]
fn empty_result_falls_through() {
    let (a, _) = Scripted::new("a", vec![ProviderOutcome::Success(vec![])]);
    let (b, _) = Scripted::new("b", vec![ProviderOutcome::Success(vec![place("B")])]);
    let found = Geocoder::new(vec![a, b]).resolve("Seoul", 5).unwrap();
    assert_eq!(found[0].label, "B");
}

#[test]
fn answered_but_nothing_found_is_empty_not_error() {
    let (a, _) = Scripted::new("a", vec![ProviderOutcome::Success(vec![])]);
    let (b, _) = Scripted::new("b", vec![ProviderOutcome::Permanent("HTTP 403".into())]);
    assert!(Geocoder::new(vec![a, b]).resolve("Atlantis", 5).unwrap().is_empty());
}

#[test]
fn all_failing_reports_every_provider() {
    let (a, _) = Scripted::new("a", vec![retry("timeout"); 5]);
    let (b, _) = Scripted::new("b", vec![ProviderOutcome::Permanent("HTTP 403".into())]);
    let err = Geocoder::new(vec![a, b])
        .with_max_attempts(2)
        .resolve("Seoul", 5)
        .unwrap_err();
    let GeoError::CollaboratorUnavailable { place, failures } = err else {
        panic!("unexpected error");
    };
    assert_eq!(place, "Seoul");
    assert_eq!(failures.len(), 2);
    assert_eq!((failures[0].provider, failures[0].attempts), ("a", 2));
    assert_eq!((failures[1].provider, failures[1].attempts), ("b", 1));
}

#[test]
fn blank_input_calls_nobody() {
    let (a, calls) = Scripted::new("a", vec![]);
    assert!(Geocoder::new(vec![a]).resolve("   ", 5).unwrap().is_empty());
    assert_eq!(calls.get(), 0);
}

#[test]
fn results_truncated_to_limit() {
    let many = (0..8).map(|i| place(&format!("P{i}"))).collect();
    let (a, _) = Scripted::new("a", vec![ProviderOutcome::Success(many)]);
    assert_eq!(Geocoder::new(vec![a]).resolve("x", 3).unwrap().len(), 3);
}
