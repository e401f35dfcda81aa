//! # Search page state
//!
//! Index-addressed filter rows and the bookkeeping for in-flight score
//! requests. Every update on [`QuerySlots`] builds a new sequence so the
//! component holding it re-renders; the previous value is left untouched.
use crate::error::SearchError;
use crate::structs::{Bound, FilterCatalog, FilterRequest, QuerySlot, ScoreRow};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySlots {
    slots: Rc<Vec<QuerySlot>>,
}

impl QuerySlots {
    /// Starts with one default row named after the first catalog entry.
    pub fn new(catalog: &FilterCatalog) -> Self {
        Self {
            slots: Rc::new(vec![QuerySlot::with_default_bounds(catalog.default_name())]),
        }
    }

    pub fn from_slots(slots: Vec<QuerySlot>) -> Self {
        Self {
            slots: Rc::new(slots),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuerySlot> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuerySlot> {
        self.slots.iter()
    }

    /// True when both values share the same backing storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slots, &other.slots)
    }

    fn update(&self, index: usize, edit: impl FnOnce(&mut QuerySlot)) -> Self {
        if index >= self.slots.len() {
            log::warn!("ignoring edit of missing filter row {}", index);
            return self.clone();
        }
        let mut slots = (*self.slots).clone();
        edit(&mut slots[index]);
        Self::from_slots(slots)
    }

    pub fn set_name(&self, index: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        self.update(index, |slot| slot.name = name)
    }

    pub fn set_min(&self, index: usize, min: f64) -> Self {
        self.update(index, |slot| {
            slot.min = min;
            slot.min_invalid = false;
        })
    }

    pub fn set_max(&self, index: usize, max: f64) -> Self {
        self.update(index, |slot| {
            slot.max = max;
            slot.max_invalid = false;
        })
    }

    /// Marks a bound whose input no longer holds a number. The last valid
    /// value is kept but the row is refused by [`QuerySlots::to_request`]
    /// until a number is entered again.
    pub fn invalidate(&self, index: usize, bound: Bound) -> Self {
        self.update(index, |slot| match bound {
            Bound::Min => slot.min_invalid = true,
            Bound::Max => slot.max_invalid = true,
        })
    }

    /// Appends `{catalog[0], 0, 100}`.
    pub fn add_row(&self, catalog: &FilterCatalog) -> Self {
        let mut slots = (*self.slots).clone();
        slots.push(QuerySlot::with_default_bounds(catalog.default_name()));
        Self::from_slots(slots)
    }

    /// Gives every still-unnamed row the first catalog entry.
    pub fn seed_names(&self, catalog: &FilterCatalog) -> Self {
        let name = catalog.default_name();
        if name.is_empty() || self.slots.iter().all(|slot| !slot.name.is_empty()) {
            return self.clone();
        }
        let slots = self
            .slots
            .iter()
            .map(|slot| {
                if slot.name.is_empty() {
                    QuerySlot {
                        name: name.clone(),
                        ..slot.clone()
                    }
                } else {
                    slot.clone()
                }
            })
            .collect();
        Self::from_slots(slots)
    }

    /// Serializes every row, in order, into the POST body.
    pub fn to_request(&self) -> Result<FilterRequest, SearchError> {
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(bound) = slot.invalid_bound() {
                return Err(SearchError::InvalidBound {
                    row: index + 1,
                    bound,
                });
            }
            if slot.is_inverted() {
                return Err(SearchError::InvalidRange {
                    row: index + 1,
                    min: slot.min,
                    max: slot.max,
                });
            }
        }
        Ok(FilterRequest {
            filters: self.slots.to_vec(),
        })
    }
}

/// Edits the search page applies to its rows.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotAction {
    SetName { index: usize, name: String },
    SetMin { index: usize, value: f64 },
    SetMax { index: usize, value: f64 },
    Invalidate { index: usize, bound: Bound },
    AddRow(FilterCatalog),
    SeedNames(FilterCatalog),
}

impl QuerySlots {
    pub fn apply(&self, action: SlotAction) -> Self {
        match action {
            SlotAction::SetName { index, name } => self.set_name(index, name),
            SlotAction::SetMin { index, value } => self.set_min(index, value),
            SlotAction::SetMax { index, value } => self.set_max(index, value),
            SlotAction::Invalidate { index, bound } => self.invalidate(index, bound),
            SlotAction::AddRow(catalog) => self.add_row(&catalog),
            SlotAction::SeedNames(catalog) => self.seed_names(&catalog),
        }
    }
}

/// Parses the text of a min/max input. Empty, non-numeric and non-finite
/// input is rejected so NaN never reaches the row state.
pub fn parse_bound(text: &str) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok()?;
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// Orders score requests so only the most recently issued one may replace
/// the table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Rows shown in the result table.
///
/// Each score request announces its ticket with [`ScoreAction::Issued`]
/// before it is sent. A response replaces the rows wholesale, and only if
/// no newer request has been issued since.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreResults {
    latest: u64,
    rows: Rc<Vec<ScoreRow>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScoreAction {
    Issued(u64),
    Loaded { ticket: u64, rows: Vec<ScoreRow> },
}

impl ScoreResults {
    pub fn rows(&self) -> Rc<Vec<ScoreRow>> {
        self.rows.clone()
    }

    pub fn apply(&self, action: ScoreAction) -> Self {
        match action {
            ScoreAction::Issued(ticket) => Self {
                latest: self.latest.max(ticket),
                rows: self.rows.clone(),
            },
            ScoreAction::Loaded { ticket, rows } if ticket == self.latest => Self {
                latest: self.latest,
                rows: Rc::new(rows),
            },
            ScoreAction::Loaded { ticket, .. } => {
                log::debug!("discarding scores for superseded request {}", ticket);
                self.clone()
            }
        }
    }
}
