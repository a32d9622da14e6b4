use std::rc::Rc;

use yew::prelude::*;

use crate::api::{FetchError, RecommendationResult};

/// Non-empty user text, sent as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct Query(String);

impl Query {
    pub fn new(text: &str) -> Option<Self> {
        if text.is_empty() {
            None
        } else {
            Some(Self(text.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// `previous` stays on screen until the new answer lands.
    Loading {
        previous: Option<RecommendationResult>,
    },
    Done(RecommendationResult),
}

pub enum FinderAction {
    Begin,
    Finish(Result<RecommendationResult, FetchError>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FinderState {
    pub phase: Phase,
}

impl FinderState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Gate for a submission: `None` means no request goes out.
    pub fn accept(&self, input: &str) -> Option<Query> {
        if self.is_loading() {
            return None;
        }
        Query::new(input)
    }

    pub fn displayed(&self) -> Option<&RecommendationResult> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Loading { previous } => previous.as_ref(),
            Phase::Done(result) => Some(result),
        }
    }
}

impl Reducible for FinderState {
    type Action = FinderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let phase = match action {
            FinderAction::Begin => match &self.phase {
                Phase::Loading { .. } => return self,
                Phase::Idle => Phase::Loading { previous: None },
                Phase::Done(result) => Phase::Loading {
                    previous: Some(result.clone()),
                },
            },
            FinderAction::Finish(outcome) => {
                Phase::Done(outcome.unwrap_or_else(|_| RecommendationResult::fetch_failed()))
            }
        };
        Rc::new(Self { phase })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode_response;

    /// Drives the state the way the submit handler does and counts requests.
    struct Harness {
        state: Rc<FinderState>,
        requests: Vec<Query>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: Rc::new(FinderState::default()),
                requests: Vec::new(),
            }
        }

        fn submit(&mut self, input: &str) {
            if let Some(query) = self.state.accept(input) {
                self.state = self.state.clone().reduce(FinderAction::Begin);
                self.requests.push(query);
            }
        }

        fn finish(&mut self, outcome: Result<RecommendationResult, FetchError>) {
            self.state = self.state.clone().reduce(FinderAction::Finish(outcome));
        }
    }

    fn espresso() -> RecommendationResult {
        decode_response(r#"{"recommendations":[{"Beverage":"Espresso"}]}"#).unwrap()
    }

    #[test]
    fn empty_query_is_rejected() {
        assert_eq!(Query::new(""), None);
        assert_eq!(Query::new("  ").map(|q| q.0), Some("  ".to_string()));
    }

    #[test]
    fn empty_submission_changes_nothing() {
        let mut h = Harness::new();
        let before = h.state.clone();
        h.submit("");
        assert!(h.requests.is_empty());
        assert_eq!(h.state, before);

        h.submit("cold");
        h.finish(Ok(espresso()));
        let before = h.state.clone();
        h.submit("");
        assert_eq!(h.requests.len(), 1);
        assert_eq!(h.state, before);
    }

    #[test]
    fn one_request_per_submission_and_loading_brackets_it() {
        let mut h = Harness::new();
        assert!(!h.state.is_loading());

        h.submit("something sweet");
        assert_eq!(h.requests.len(), 1);
        assert_eq!(h.requests[0].as_str(), "something sweet");
        assert!(h.state.is_loading());

        h.finish(Ok(espresso()));
        assert!(!h.state.is_loading());
        assert_eq!(h.state.displayed(), Some(&espresso()));
    }

    #[test]
    fn submit_while_loading_is_blocked() {
        let mut h = Harness::new();
        h.submit("first");
        h.submit("second");
        assert_eq!(h.requests.len(), 1);

        let again = h.state.clone().reduce(FinderAction::Begin);
        assert!(Rc::ptr_eq(&again, &h.state));
    }

    #[test]
    fn network_failure_shows_generic_message() {
        let mut h = Harness::new();
        h.submit("latte");
        let err = FetchError::Request(gloo_net::Error::GlooError("connection refused".into()));
        h.finish(Err(err));
        assert!(!h.state.is_loading());
        assert_eq!(
            h.state.displayed(),
            Some(&RecommendationResult::Error("Failed to fetch from API".into()))
        );
    }

    #[test]
    fn decode_failure_shows_generic_message() {
        let mut h = Harness::new();
        h.submit("latte");
        h.finish(decode_response("<html>502</html>"));
        assert_eq!(h.state.displayed(), Some(&RecommendationResult::fetch_failed()));
    }

    #[test]
    fn previous_result_is_kept_while_loading_then_replaced() {
        let mut h = Harness::new();
        h.submit("strong");
        h.finish(Ok(espresso()));

        h.submit("again");
        assert!(h.state.is_loading());
        assert_eq!(h.state.displayed(), Some(&espresso()));

        let fresh = RecommendationResult::Error("no tags matched".into());
        h.finish(Ok(fresh.clone()));
        assert_eq!(h.state.displayed(), Some(&fresh));
    }

    #[test]
    fn idle_has_nothing_to_show() {
        assert_eq!(FinderState::default().displayed(), None);
    }
}
