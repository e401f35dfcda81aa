use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::app::download_csv;
use crate::components::{FilterRow, ResultTable, Status, StatusBar};
use crate::error::SearchError;
use crate::export::{table_to_csv, EXPORT_FILENAME};
use crate::state::{QuerySlots, RequestSequencer, ScoreAction, ScoreResults, SlotAction};
use crate::structs::{Bound, FilterCatalog};
use crate::table::{table_cells, NumberStyle};

const STATUS_CLEAR_MS: u32 = 3000;

impl Reducible for QuerySlots {
    type Action = SlotAction;

    fn reduce(self: Rc<Self>, action: SlotAction) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

impl Reducible for ScoreResults {
    type Action = ScoreAction;

    fn reduce(self: Rc<Self>, action: ScoreAction) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Status setter that clears success messages after a delay, unless a newer
/// status replaced them in the meantime.
#[derive(Clone)]
struct StatusHandle {
    status: UseStateHandle<Status>,
    generation: Rc<RefCell<u64>>,
}

impl StatusHandle {
    fn set(&self, status: Status) {
        let generation = {
            let mut current = self.generation.borrow_mut();
            *current += 1;
            *current
        };
        let transient = status.is_transient();
        self.status.set(status);
        if transient {
            let this = self.clone();
            Timeout::new(STATUS_CLEAR_MS, move || {
                if *this.generation.borrow() == generation {
                    this.status.set(Status::Idle);
                }
            })
            .forget();
        }
    }

    fn error(&self, err: impl std::fmt::Display) {
        log::error!("{}", err);
        self.set(Status::Error(err.to_string()));
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchPageProps {
    pub client: ApiClient,
}

#[function_component(SearchPage)]
pub fn search_page(props: &SearchPageProps) -> Html {
    let catalog = use_state(FilterCatalog::default);
    let slots = use_reducer(|| QuerySlots::new(&FilterCatalog::default()));
    let results = use_reducer(ScoreResults::default);
    let number_style = use_state(NumberStyle::default);
    let sequencer = use_mut_ref(RequestSequencer::new);
    let status = StatusHandle {
        status: use_state(Status::default),
        generation: use_mut_ref(|| 0u64),
    };

    // Runs once on mount. The two fetches touch disjoint state and may
    // complete in either order.
    {
        let client = props.client.clone();
        let catalog = catalog.clone();
        let slots = slots.dispatcher();
        let results = results.dispatcher();
        let sequencer = sequencer.clone();
        let status = status.clone();
        use_effect_with((), move |_| {
            {
                let client = client.clone();
                let status = status.clone();
                spawn_local(async move {
                    match client.fetch_filters().await {
                        Ok(loaded) => {
                            log::info!("loaded {} filters", loaded.len());
                            slots.dispatch(SlotAction::SeedNames(loaded.clone()));
                            catalog.set(loaded);
                        }
                        Err(err) => status.error(format!("Could not load filters: {}", err)),
                    }
                });
            }

            let ticket = sequencer.borrow_mut().issue();
            results.dispatch(ScoreAction::Issued(ticket));
            spawn_local(async move {
                let result = client.fetch_scores().await;
                if !sequencer.borrow().is_current(ticket) {
                    log::debug!("discarding default scores, a search superseded them");
                    return;
                }
                match result {
                    Ok(found) => {
                        log::info!("loaded {} default scores", found.len());
                        results.dispatch(ScoreAction::Loaded { ticket, rows: found });
                    }
                    Err(err) => status.error(format!("Could not load scores: {}", err)),
                }
            });
            || ()
        });
    }

    let on_name = {
        let slots = slots.dispatcher();
        Callback::from(move |(index, name): (usize, String)| {
            slots.dispatch(SlotAction::SetName { index, name });
        })
    };
    let on_min = {
        let slots = slots.dispatcher();
        Callback::from(move |(index, value): (usize, Option<f64>)| {
            slots.dispatch(match value {
                Some(value) => SlotAction::SetMin { index, value },
                None => SlotAction::Invalidate {
                    index,
                    bound: Bound::Min,
                },
            });
        })
    };
    let on_max = {
        let slots = slots.dispatcher();
        Callback::from(move |(index, value): (usize, Option<f64>)| {
            slots.dispatch(match value {
                Some(value) => SlotAction::SetMax { index, value },
                None => SlotAction::Invalidate {
                    index,
                    bound: Bound::Max,
                },
            });
        })
    };

    let on_add = {
        let slots = slots.dispatcher();
        let catalog = catalog.clone();
        Callback::from(move |_: MouseEvent| {
            slots.dispatch(SlotAction::AddRow((*catalog).clone()));
        })
    };

    let on_search = {
        let client = props.client.clone();
        let slots = slots.clone();
        let results = results.dispatcher();
        let sequencer = sequencer.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            // a newer search, even one refused below, makes any response
            // still in flight stale
            let ticket = sequencer.borrow_mut().issue();
            results.dispatch(ScoreAction::Issued(ticket));
            let request = match slots.to_request() {
                Ok(request) => request,
                Err(err) => {
                    log::warn!("search not sent: {}", err);
                    status.set(Status::Error(err.to_string()));
                    return;
                }
            };
            status.set(Status::Loading("Searching...".to_string()));

            let client = client.clone();
            let results = results.clone();
            let sequencer = sequencer.clone();
            let status = status.clone();
            spawn_local(async move {
                let result = client
                    .search_scores(&request)
                    .await
                    .map_err(SearchError::from);
                if !sequencer.borrow().is_current(ticket) {
                    log::debug!("discarding response to superseded search {}", ticket);
                    return;
                }
                match result {
                    Ok(found) => {
                        status.set(Status::Success(format!("{} tickers matched", found.len())));
                        results.dispatch(ScoreAction::Loaded { ticket, rows: found });
                    }
                    Err(err) => status.error(format!("Search failed: {}", err)),
                }
            });
        })
    };

    let on_export = {
        let catalog = catalog.clone();
        let results = results.clone();
        let number_style = number_style.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let cells = table_cells(&catalog, &results.rows(), *number_style);
            let exported = table_to_csv(&cells)
                .map_err(|e| e.to_string())
                .and_then(|csv| {
                    download_csv(csv, EXPORT_FILENAME)
                        .map_err(|e| format!("{:?}", e))
                });
            match exported {
                Ok(()) => status.set(Status::Success("File saved successfully".to_string())),
                Err(err) => status.error(format!("Export failed: {}", err)),
            }
        })
    };

    let on_compact = {
        let number_style = number_style.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            number_style.set(if input.checked() {
                NumberStyle::Compact
            } else {
                NumberStyle::Plain
            });
        })
    };

    html! {
        <div style="display: flex; flex-direction: column; align-items: center;">
            <div>
                { for slots.iter().enumerate().map(|(index, slot)| html! {
                    <FilterRow
                        key={index}
                        index={index}
                        slot={slot.clone()}
                        catalog={(*catalog).clone()}
                        on_name={on_name.clone()}
                        on_min={on_min.clone()}
                        on_max={on_max.clone()}
                    />
                }) }
            </div>
            <div style="display: flex; gap: 10px; margin: 8px 0;">
                <button onclick={on_search}>{ "Search" }</button>
                <button aria-label="add" onclick={on_add}>{ "+" }</button>
                <button onclick={on_export}>{ "Download CSV" }</button>
                <label>
                    <input
                        type="checkbox"
                        checked={*number_style == NumberStyle::Compact}
                        onchange={on_compact}
                    />
                    { " Compact numbers" }
                </label>
            </div>
            <StatusBar status={(*status.status).clone()} />
            <ResultTable
                catalog={(*catalog).clone()}
                rows={results.rows()}
                number_style={*number_style}
            />
        </div>
    }
}
