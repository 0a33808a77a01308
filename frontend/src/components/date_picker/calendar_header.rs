use portal_shared::{get_month_year_string, ViewMonth};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarHeaderProps {
    pub current_month: ViewMonth,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub is_prev_disabled: bool,
    pub is_next_disabled: bool,
}

/// Month label flanked by previous/next arrows. Does no date math of its own;
/// the disabled flags come from the picker.
#[function_component(CalendarHeader)]
pub fn calendar_header(props: &CalendarHeaderProps) -> Html {
    let nav_button = |label: &'static str, aria_label: &'static str, disabled: bool, callback: &Callback<()>| {
        let callback = callback.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            if disabled {
                return;
            }
            callback.emit(());
        });

        html! {
            <button
                type="button"
                class="nav-button"
                aria-label={aria_label}
                {disabled}
                {onclick}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="calendar-header">
            {nav_button("‹", "Previous month", props.is_prev_disabled, &props.on_previous)}
            <span class="month-year" aria-live="polite">
                {get_month_year_string(props.current_month)}
            </span>
            {nav_button("›", "Next month", props.is_next_disabled, &props.on_next)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{recorder, settle, TestRoot};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PREVIOUS: &str = "[aria-label='Previous month']";
    const NEXT: &str = "[aria-label='Next month']";

    #[wasm_bindgen_test]
    async fn test_disabled_arrow_never_calls_back() {
        let root = TestRoot::new();
        let (previous_calls, on_previous) = recorder::<()>();
        let (next_calls, on_next) = recorder::<()>();

        let _app = yew::Renderer::<CalendarHeader>::with_root_and_props(
            root.element(),
            CalendarHeaderProps {
                current_month: ViewMonth::new(2024, 3).unwrap(),
                on_previous,
                on_next,
                is_prev_disabled: true,
                is_next_disabled: false,
            },
        )
        .render();
        settle().await;

        assert_eq!(root.text(".month-year"), "March 2024");
        assert!(root.find(PREVIOUS).unwrap().has_attribute("disabled"));
        assert!(!root.find(NEXT).unwrap().has_attribute("disabled"));

        for _ in 0..3 {
            root.click(PREVIOUS);
            root.click(NEXT);
        }
        settle().await;

        assert_eq!(previous_calls.borrow().len(), 0);
        assert_eq!(next_calls.borrow().len(), 3);
    }

    #[wasm_bindgen_test]
    async fn test_single_month_range_locks_both_arrows() {
        let root = TestRoot::new();
        let (previous_calls, on_previous) = recorder::<()>();
        let (next_calls, on_next) = recorder::<()>();

        let _app = yew::Renderer::<CalendarHeader>::with_root_and_props(
            root.element(),
            CalendarHeaderProps {
                current_month: ViewMonth::new(2024, 12).unwrap(),
                on_previous,
                on_next,
                is_prev_disabled: true,
                is_next_disabled: true,
            },
        )
        .render();
        settle().await;

        assert_eq!(root.click_all(".nav-button"), 2);
        settle().await;

        assert_eq!(root.count(".nav-button[disabled]"), 2);
        assert!(previous_calls.borrow().is_empty());
        assert!(next_calls.borrow().is_empty());
    }
}
