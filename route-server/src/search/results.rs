//! Results state: category filter and highlighted offer.
//!
//! The search screen shows the current batch through a category filter and
//! keeps one offer highlighted for the map. Recomputing the filtered view
//! always resets the highlight to the view's first offer, so the map never
//! points at an offer that just disappeared from the list.

use crate::domain::{ModeFilter, Offer};

/// A state transition for [`ResultsState`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsEvent {
    /// Replace the full offer batch (a fresh search).
    SetBatch(Vec<Offer>),

    /// Change the active category filter.
    SetFilter(ModeFilter),

    /// Explicit user pick of an offer to highlight.
    Select(Offer),
}

/// Filter and highlight state for one search screen.
///
/// Holds the full batch, the active filter, the derived filtered view, and
/// the highlighted offer. The machine has no terminal state; it lives for
/// the duration of the search screen and is dropped with it.
///
/// # Examples
///
/// ```
/// use route_server::domain::ModeFilter;
/// use route_server::search::ResultsState;
///
/// let state = ResultsState::new();
/// assert_eq!(state.filter(), ModeFilter::All);
/// assert!(state.all().is_empty());
/// assert!(state.highlighted().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResultsState {
    batch: Vec<Offer>,
    filter: ModeFilter,
    filtered: Vec<Offer>,
    highlighted: Option<Offer>,
}

impl ResultsState {
    /// Create the initial state: filter `All`, empty batch, no highlight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a transition event.
    ///
    /// Equivalent to calling the corresponding method; this form exists so
    /// the whole machine is drivable as `(state, event) -> state`.
    pub fn apply(&mut self, event: ResultsEvent) {
        match event {
            ResultsEvent::SetBatch(offers) => self.set_batch(offers),
            ResultsEvent::SetFilter(filter) => self.set_filter(filter),
            ResultsEvent::Select(offer) => self.select(offer),
        }
    }

    /// Replace the full offer batch.
    ///
    /// The previous batch is discarded entirely (no merging); the filtered
    /// view is recomputed under the current filter and the highlight resets
    /// to the view's first offer, or clears when the view is empty.
    pub fn set_batch(&mut self, offers: Vec<Offer>) {
        self.batch = offers;
        self.refilter();
    }

    /// Change the active category filter.
    ///
    /// The filtered view is recomputed from the current batch and the
    /// highlight resets by the same rule as [`ResultsState::set_batch`].
    pub fn set_filter(&mut self, filter: ModeFilter) {
        self.filter = filter;
        self.refilter();
    }

    /// Highlight a specific offer without touching the filter or batch.
    ///
    /// Membership in the current filtered view is not validated; callers
    /// are trusted to pick from what they display.
    pub fn select(&mut self, offer: Offer) {
        self.highlighted = Some(offer);
    }

    /// The full unfiltered batch.
    pub fn all(&self) -> &[Offer] {
        &self.batch
    }

    /// The filtered view under the active filter.
    pub fn filtered(&self) -> &[Offer] {
        &self.filtered
    }

    /// The currently highlighted offer, if any.
    pub fn highlighted(&self) -> Option<&Offer> {
        self.highlighted.as_ref()
    }

    /// The active category filter.
    pub fn filter(&self) -> ModeFilter {
        self.filter
    }

    /// Number of offers in the batch matching a filter.
    ///
    /// The filter tabs display these counts alongside their labels.
    pub fn count_for(&self, filter: ModeFilter) -> usize {
        self.batch.iter().filter(|o| filter.matches(o.mode)).count()
    }

    /// Recompute the filtered view and reset the highlight.
    fn refilter(&mut self) {
        self.filtered = self
            .batch
            .iter()
            .filter(|o| self.filter.matches(o.mode))
            .cloned()
            .collect();
        self.highlighted = self.filtered.first().cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::CityIndex;
    use crate::domain::TransportMode;
    use crate::search::OfferGenerator;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sample_batch(seed: u64) -> Vec<Offer> {
        let cities = CityIndex::european();
        OfferGenerator::new(&cities).generate("Paris", "Berlin", &mut SmallRng::seed_from_u64(seed))
    }

    #[test]
    fn initial_state() {
        let state = ResultsState::new();
        assert_eq!(state.filter(), ModeFilter::All);
        assert!(state.all().is_empty());
        assert!(state.filtered().is_empty());
        assert!(state.highlighted().is_none());
    }

    #[test]
    fn set_batch_shows_everything_under_all() {
        let mut state = ResultsState::new();
        state.set_batch(sample_batch(1));

        assert_eq!(state.all().len(), 8);
        assert_eq!(state.filtered().len(), 8);
        assert_eq!(state.highlighted(), state.all().first());
    }

    #[test]
    fn bus_filter_narrows_view_and_resets_highlight() {
        let mut state = ResultsState::new();
        state.set_batch(sample_batch(2));
        state.set_filter(ModeFilter::Only(TransportMode::Bus));

        assert_eq!(state.filtered().len(), 5);
        assert!(state.filtered().iter().all(|o| o.mode == TransportMode::Bus));
        // Highlight is the first bus offer in original slot order
        let first_bus = state
            .all()
            .iter()
            .find(|o| o.mode == TransportMode::Bus)
            .unwrap();
        assert_eq!(state.highlighted(), Some(first_bus));
    }

    #[test]
    fn carpool_filter_narrows_view() {
        let mut state = ResultsState::new();
        state.set_batch(sample_batch(3));
        state.set_filter(ModeFilter::Only(TransportMode::Carpool));

        assert_eq!(state.filtered().len(), 3);
        assert_eq!(
            state.highlighted().map(|o| o.id.to_string()),
            Some("carpool-0".to_string())
        );
    }

    #[test]
    fn returning_to_all_restores_the_full_view() {
        let mut state = ResultsState::new();
        state.set_batch(sample_batch(4));
        state.set_filter(ModeFilter::Only(TransportMode::Carpool));
        state.set_filter(ModeFilter::All);

        assert_eq!(state.filtered().len(), state.all().len());
        assert_eq!(state.highlighted(), state.all().first());
    }

    #[test]
    fn empty_view_clears_the_highlight() {
        let mut state = ResultsState::new();
        state.set_batch(sample_batch(5));
        assert!(state.highlighted().is_some());

        // An empty batch empties every view
        state.set_batch(Vec::new());
        assert!(state.filtered().is_empty());
        assert!(state.highlighted().is_none());

        // Filtering an empty batch keeps the highlight clear
        state.set_filter(ModeFilter::Only(TransportMode::Bus));
        assert!(state.highlighted().is_none());
    }

    #[test]
    fn set_batch_discards_the_previous_batch() {
        let mut state = ResultsState::new();
        state.set_batch(sample_batch(6));
        let replacement = sample_batch(7);
        state.set_batch(replacement.clone());

        assert_eq!(state.all(), replacement.as_slice());
        assert_eq!(state.highlighted(), replacement.first());
    }

    #[test]
    fn set_batch_respects_the_active_filter() {
        let mut state = ResultsState::new();
        state.set_filter(ModeFilter::Only(TransportMode::Carpool));
        state.set_batch(sample_batch(8));

        assert_eq!(state.filtered().len(), 3);
        assert!(
            state
                .filtered()
                .iter()
                .all(|o| o.mode == TransportMode::Carpool)
        );
    }

    #[test]
    fn select_overrides_highlight_without_refiltering() {
        let mut state = ResultsState::new();
        state.set_batch(sample_batch(9));
        let pick = state.all()[3].clone();

        state.select(pick.clone());
        assert_eq!(state.highlighted(), Some(&pick));
        // Filter and views are untouched
        assert_eq!(state.filter(), ModeFilter::All);
        assert_eq!(state.filtered().len(), 8);
    }

    #[test]
    fn selection_resets_on_filter_change() {
        let mut state = ResultsState::new();
        state.set_batch(sample_batch(10));
        let pick = state.all()[4].clone();
        state.select(pick);

        state.set_filter(ModeFilter::Only(TransportMode::Bus));
        assert_eq!(state.highlighted(), state.filtered().first());
    }

    #[test]
    fn counts_per_filter() {
        let mut state = ResultsState::new();
        state.set_batch(sample_batch(11));

        assert_eq!(state.count_for(ModeFilter::All), 8);
        assert_eq!(state.count_for(ModeFilter::Only(TransportMode::Bus)), 5);
        assert_eq!(state.count_for(ModeFilter::Only(TransportMode::Carpool)), 3);
    }

    #[test]
    fn events_drive_the_same_transitions() {
        let batch = sample_batch(12);

        let mut by_event = ResultsState::new();
        by_event.apply(ResultsEvent::SetBatch(batch.clone()));
        by_event.apply(ResultsEvent::SetFilter(ModeFilter::Only(TransportMode::Bus)));

        let mut by_method = ResultsState::new();
        by_method.set_batch(batch);
        by_method.set_filter(ModeFilter::Only(TransportMode::Bus));

        assert_eq!(by_event.filtered(), by_method.filtered());
        assert_eq!(by_event.highlighted(), by_method.highlighted());

        let pick = by_method.all()[2].clone();
        by_event.apply(ResultsEvent::Select(pick.clone()));
        assert_eq!(by_event.highlighted(), Some(&pick));
    }
}
