use chrono::NaiveDate;
use portal_shared::{build_day_cells, SelectionRange, ViewMonth, WEEKDAY_LABELS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarGridProps {
    pub current_month: ViewMonth,
    pub selected_date: Option<NaiveDate>,
    pub range: SelectionRange,
    pub today: NaiveDate,
    pub on_select: Callback<NaiveDate>,
}

/// Six-week day grid for one month. Cells outside the month or outside the
/// range render disabled and never report a click.
#[function_component(CalendarGrid)]
pub fn calendar_grid(props: &CalendarGridProps) -> Html {
    let cells = build_day_cells(
        props.current_month,
        props.selected_date,
        props.today,
        &props.range,
    );

    html! {
        <div class="calendar-grid" role="grid">
            <div class="weekday-header" role="row">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <span role="columnheader">{*label}</span>
                })}
            </div>

            <div class="calendar-days">
                {for cells.iter().map(|cell| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let selectable = cell.selectable_date();
                        Callback::from(move |_: MouseEvent| {
                            if let Some(date) = selectable {
                                on_select.emit(date);
                            }
                        })
                    };

                    html! {
                        <button
                            type="button"
                            key={cell.date.to_string()}
                            role="gridcell"
                            class={classes!(
                                "calendar-day",
                                cell.is_current_month.then_some("current-month"),
                                (!cell.is_current_month).then_some("other-month"),
                                (!cell.is_in_range).then_some("out-of-range"),
                                cell.is_selected.then_some("selected"),
                                cell.is_today.then_some("today")
                            )}
                            disabled={cell.is_disabled}
                            aria-selected={cell.is_selected.to_string()}
                            {onclick}
                        >
                            {cell.day()}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
