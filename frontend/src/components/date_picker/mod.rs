use chrono::NaiveDate;
use portal_shared::{DatePickerState, PickerConstraints, PickerEvent, SelectionRange};
use uuid::Uuid;
use yew::prelude::*;

use crate::hooks::use_outside_click::use_outside_click;
use crate::services::date_utils::{display_text, today};
use crate::services::logging::Logger;

pub mod calendar_grid;
pub mod calendar_header;

use calendar_grid::CalendarGrid;
use calendar_header::CalendarHeader;

const COMPONENT: &str = "date-picker";

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    /// Currently committed date, or None when nothing is chosen yet
    pub selected_date: Option<NaiveDate>,
    /// Called once for every committed in-range selection
    pub on_change: Callback<NaiveDate>,
    /// Earliest selectable day, inclusive
    #[prop_or_default]
    pub min_date: Option<NaiveDate>,
    /// Latest selectable day, inclusive
    #[prop_or_default]
    pub max_date: Option<NaiveDate>,
    /// Button text while no date is selected
    #[prop_or_default]
    pub placeholder: Option<String>,
    /// Optional label for the date picker
    #[prop_or_default]
    pub label: Option<String>,
    /// Whether the date picker is disabled
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let today = today();
    let initial_selection = props.selected_date;
    let picker = use_mut_ref(move || DatePickerState::new(initial_selection, today));
    let force_update = use_force_update();
    let container_ref = use_node_ref();
    let instance_id = use_memo((), |_| Uuid::new_v4());

    // An inverted range disables the picker instead of misbehaving
    let range = SelectionRange::new(props.min_date, props.max_date);
    let range_error = range.as_ref().err().cloned();
    let constraints = PickerConstraints {
        range: range.unwrap_or_default(),
        disabled: props.disabled || range_error.is_some(),
    };

    use_effect_with(range_error.clone(), |error| {
        if let Some(error) = error {
            Logger::error_with_component(COMPONENT, &error.to_string());
        }
        || ()
    });

    // Property changes are pushed into the state machine explicitly
    {
        let picker = picker.clone();
        let force_update = force_update.clone();
        use_effect_with(props.selected_date, move |selected| {
            if picker.borrow_mut().sync_selected(*selected) {
                force_update.force_update();
            }
            || ()
        });
    }

    {
        let picker = picker.clone();
        let force_update = force_update.clone();
        use_effect_with(constraints.disabled, move |disabled| {
            if picker.borrow_mut().sync_disabled(*disabled) {
                force_update.force_update();
            }
            || ()
        });
    }

    let dispatch = {
        let picker = picker.clone();
        let force_update = force_update.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: PickerEvent| {
            let (was_open, is_open, committed) = {
                let mut state = picker.borrow_mut();
                let was_open = state.is_open();
                let committed = state.apply(event, &constraints);
                (was_open, state.is_open(), committed)
            };

            if was_open != is_open {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("Calendar {:?}: {} -> {}", event, was_open, is_open),
                );
            }
            force_update.force_update();

            match (event, committed) {
                (_, Some(date)) => {
                    Logger::info_with_component(COMPONENT, &format!("Committed {}", date));
                    on_change.emit(date);
                }
                (PickerEvent::SelectDay(date), None) => {
                    Logger::debug_with_component(COMPONENT, &format!("Ignored selection of {}", date));
                }
                _ => {}
            }
        })
    };

    let state = picker.borrow().clone();

    use_outside_click(
        container_ref.clone(),
        state.is_open(),
        dispatch.reform(|_: ()| PickerEvent::OutsideActivation),
    );

    let button_id = format!("date-picker-{}", instance_id);
    let dropdown_id = format!("{}-calendar", button_id);
    let navigation = state.navigation(&constraints);

    html! {
        <div class="date-picker" ref={container_ref}>
            {if let Some(label) = &props.label {
                html! { <label class="date-picker-label" for={button_id.clone()}>{label}</label> }
            } else { html! {} }}

            <div class="date-picker-input">
                <button
                    type="button"
                    id={button_id}
                    class={classes!(
                        "date-display-button",
                        state.selected().is_none().then_some("placeholder")
                    )}
                    onclick={dispatch.reform(|_: MouseEvent| PickerEvent::Toggle)}
                    disabled={constraints.disabled}
                    aria-haspopup="dialog"
                    aria-expanded={state.is_open().to_string()}
                    aria-controls={dropdown_id.clone()}
                >
                    <span class="date-text">
                        {display_text(state.selected(), props.placeholder.as_deref())}
                    </span>
                    <span class="calendar-icon">{"📅"}</span>
                </button>

                {if state.is_open() {
                    html! {
                        <div class="calendar-dropdown" id={dropdown_id} role="dialog">
                            <CalendarHeader
                                current_month={state.view_month()}
                                on_previous={dispatch.reform(|_: ()| PickerEvent::PreviousMonth)}
                                on_next={dispatch.reform(|_: ()| PickerEvent::NextMonth)}
                                is_prev_disabled={navigation.is_prev_disabled}
                                is_next_disabled={navigation.is_next_disabled}
                            />
                            <CalendarGrid
                                current_month={state.view_month()}
                                selected_date={state.selected()}
                                range={constraints.range}
                                {today}
                                on_select={dispatch.reform(PickerEvent::SelectDay)}
                            />
                        </div>
                    }
                } else { html! {} }}
            </div>

            {if let Some(error) = &range_error {
                html! { <div class="date-picker-error" role="alert">{error.to_string()}</div> }
            } else { html! {} }}
        </div>
    }
}
