use super::entities::Stall;
use super::ranking::SearchOutcome;

/// App-wide UI state shared through a Dioxus context signal.
///
/// `stalls` is loaded once at startup and never mutated; `results` and
/// `searched` are the only pieces of state a search submission may touch.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// The bundled stall catalog, in source order.
    pub stalls: Vec<Stall>,
    /// Stalls currently shown in the results grid, popularity-sorted.
    pub results: Vec<Stall>,
    /// True once a non-empty search has been submitted this session.
    /// There is no transition back.
    pub searched: bool,
}

impl AppState {
    pub fn with_catalog(stalls: Vec<Stall>) -> Self {
        Self {
            stalls,
            results: Vec::new(),
            searched: false,
        }
    }

    /// Applies a search submission. A blank submission leaves the state
    /// untouched, including `searched`.
    pub fn apply_search(&mut self, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Ignored => {}
            SearchOutcome::Results(results) => {
                self.results = results;
                self.searched = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::search;
    use crate::domain::test_support::stall;

    #[test]
    fn blank_search_leaves_state_idle() {
        let mut state = AppState::with_catalog(vec![stall(1, 2)]);
        let ranked = state.stalls.clone();

        state.apply_search(search("   ", &ranked));

        assert!(!state.searched);
        assert!(state.results.is_empty());
    }

    #[test]
    fn non_empty_search_populates_results_and_sticks() {
        let mut state = AppState::with_catalog(vec![stall(1, 2), stall(2, 5)]);
        let ranked = state.stalls.clone();

        state.apply_search(search("Paris", &ranked));
        assert!(state.searched);
        assert_eq!(state.results, ranked);

        // A later blank submission must not reset the searched flag.
        state.apply_search(search("", &ranked));
        assert!(state.searched);
        assert_eq!(state.results, ranked);
    }
}
