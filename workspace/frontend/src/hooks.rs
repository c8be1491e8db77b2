use std::rc::Rc;

use common::{ResultsAction, ResultsState, ResultsView};
use yew::prelude::*;

/// Yew-side owner of the results area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsStore {
    pub state: ResultsState,
}

impl Reducible for ResultsStore {
    type Action = ResultsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::trace!("Applying results action: {:?}", action);
        let mut next = (*self).clone();
        next.state.apply(action);
        Rc::new(next)
    }
}

/// [`ResultsView`] that forwards every action to the results reducer.
#[derive(Clone)]
pub struct ReducerView {
    dispatch: Callback<ResultsAction>,
}

impl ReducerView {
    pub fn new(dispatcher: UseReducerDispatcher<ResultsStore>) -> Self {
        Self::from_callback(Callback::from(move |action| dispatcher.dispatch(action)))
    }

    pub fn from_callback(dispatch: Callback<ResultsAction>) -> Self {
        Self { dispatch }
    }
}

impl ResultsView for ReducerView {
    fn apply(&self, action: ResultsAction) {
        self.dispatch.emit(action);
    }
}

#[hook]
pub fn use_results() -> UseReducerHandle<ResultsStore> {
    use_reducer(ResultsStore::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use common::{ChartSlot, CropResult, HistoricalYieldSeries};

    #[test]
    fn test_reduce_does_not_mutate_previous_state() {
        let before = Rc::new(ResultsStore::default());
        let after = before.clone().reduce(ResultsAction::Reset);
        let after = after.reduce(ResultsAction::AppendCrop {
            crop: "rice".to_string(),
            result: CropResult {
                yield_difference: 0.25,
                nutrient_recommendations: vec![],
            },
        });

        assert!(before.state.blocks.is_empty());
        assert!(before.state.heading.is_none());
        assert_eq!(after.state.blocks.len(), 1);
        assert_eq!(after.state.blocks[0].title, "Rice");
    }

    #[test]
    fn test_reducer_view_forwards_actions_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let view = ReducerView::from_callback(Callback::from(move |action| {
            sink.borrow_mut().push(action)
        }));

        let wheat = CropResult {
            yield_difference: 0.125,
            nutrient_recommendations: vec!["N: Low".to_string()],
        };
        let series = HistoricalYieldSeries::new(vec![2020, 2021], vec![2.0, 2.5]).unwrap();

        view.reset();
        view.append_crop("wheat", &wheat);
        view.append_crop("rice", &wheat);
        view.render_chart("wheat", series.clone());
        view.chart_failed("rice", "HTTP error! status: 404".to_string());

        let actions = seen.borrow().clone();
        assert_eq!(actions.len(), 5);
        assert_eq!(actions[0], ResultsAction::Reset);

        let store = actions
            .into_iter()
            .fold(Rc::new(ResultsStore::default()), |store, action| store.reduce(action));
        let state = &store.state;
        assert_eq!(state.blocks[0].yield_text, "Predicted Yield Difference: 0.13 Tonnes/Hectare");
        assert_eq!(state.block("wheat").unwrap().chart, ChartSlot::Ready(series));
        assert_eq!(
            state.block("rice").unwrap().chart,
            ChartSlot::Failed("Error loading historical data: HTTP error! status: 404".to_string())
        );
    }

    #[test]
    fn test_reducer_view_error_replaces_results() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let view = ReducerView::from_callback(Callback::from(move |action| {
            sink.borrow_mut().push(action)
        }));

        view.reset();
        view.show_error("HTTP error! status: 500".to_string());

        let store = seen
            .borrow()
            .iter()
            .cloned()
            .fold(Rc::new(ResultsStore::default()), |store, action| store.reduce(action));
        assert!(store.state.heading.is_none());
        assert_eq!(store.state.error.as_deref(), Some("Error: HTTP error! status: 500"));
    }
}
