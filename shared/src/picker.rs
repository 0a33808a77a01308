//! Open/closed state machine behind the date picker component.
//!
//! The component owns one [`DatePickerState`] per instance and feeds it
//! [`PickerEvent`]s. [`DatePickerState::apply`] returns the committed date, if
//! any, so the caller can notify its listener exactly once.

use chrono::NaiveDate;

use crate::calendar::{build_day_cells, DayCell, NavigationFlags, SelectionRange, ViewMonth};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPhase {
    Closed,
    Open,
}

/// User intent reported by the picker's controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// The display button was activated
    Toggle,
    /// A day cell was activated
    SelectDay(NaiveDate),
    /// A pointer went down outside the picker
    OutsideActivation,
    PreviousMonth,
    NextMonth,
}

/// Caller-supplied limits, re-read on every event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerConstraints {
    pub range: SelectionRange,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerState {
    phase: PickerPhase,
    view_month: ViewMonth,
    /// Where the view returns to when the dropdown is dismissed
    home_month: ViewMonth,
    selected: Option<NaiveDate>,
}

impl DatePickerState {
    /// Start closed, showing the selected month or else `today`'s
    pub fn new(selected: Option<NaiveDate>, today: NaiveDate) -> Self {
        let home_month = ViewMonth::containing(selected.unwrap_or(today));
        Self {
            phase: PickerPhase::Closed,
            view_month: home_month,
            home_month,
            selected,
        }
    }

    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == PickerPhase::Open
    }

    pub fn view_month(&self) -> ViewMonth {
        self.view_month
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Apply a new `selected_date` property from the embedding page.
    ///
    /// A new date moves the view to its month whatever the phase; clearing the
    /// selection leaves the view where it is. Returns whether anything changed.
    pub fn sync_selected(&mut self, selected: Option<NaiveDate>) -> bool {
        if selected == self.selected {
            return false;
        }

        self.selected = selected;
        if let Some(date) = selected {
            self.home_month = ViewMonth::containing(date);
            self.view_month = self.home_month;
        }
        true
    }

    /// Apply a new `disabled` property. Disabling an open picker dismisses it.
    pub fn sync_disabled(&mut self, disabled: bool) -> bool {
        if disabled && self.is_open() {
            self.dismiss();
            return true;
        }
        false
    }

    pub fn navigation(&self, constraints: &PickerConstraints) -> NavigationFlags {
        constraints.range.navigation(self.view_month)
    }

    pub fn day_cells(&self, today: NaiveDate, constraints: &PickerConstraints) -> Vec<DayCell> {
        build_day_cells(self.view_month, self.selected, today, &constraints.range)
    }

    /// Advance the machine. Returns `Some(date)` only when a selection is
    /// committed.
    pub fn apply(&mut self, event: PickerEvent, constraints: &PickerConstraints) -> Option<NaiveDate> {
        match (self.phase, event) {
            (PickerPhase::Closed, PickerEvent::Toggle) => {
                if !constraints.disabled {
                    self.phase = PickerPhase::Open;
                }
                None
            }
            (PickerPhase::Closed, _) => None,
            (PickerPhase::Open, PickerEvent::Toggle | PickerEvent::OutsideActivation) => {
                self.dismiss();
                None
            }
            (PickerPhase::Open, PickerEvent::SelectDay(date)) => {
                // Padding days from neighbouring months are never selectable
                if constraints.disabled
                    || !constraints.range.contains(date)
                    || !self.view_month.contains(date)
                {
                    return None;
                }
                self.selected = Some(date);
                self.home_month = ViewMonth::containing(date);
                self.view_month = self.home_month;
                self.phase = PickerPhase::Closed;
                Some(date)
            }
            (PickerPhase::Open, PickerEvent::PreviousMonth) => {
                if !self.navigation(constraints).is_prev_disabled {
                    if let Some(previous) = self.view_month.previous() {
                        self.view_month = previous;
                    }
                }
                None
            }
            (PickerPhase::Open, PickerEvent::NextMonth) => {
                if !self.navigation(constraints).is_next_disabled {
                    if let Some(next) = self.view_month.next() {
                        self.view_month = next;
                    }
                }
                None
            }
        }
    }

    /// Close without committing; browsing is discarded
    fn dismiss(&mut self) {
        self.phase = PickerPhase::Closed;
        self.view_month = self.home_month;
    }
}
