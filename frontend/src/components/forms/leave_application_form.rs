use chrono::NaiveDate;
use gloo::timers::future::TimeoutFuture;
use portal_shared::{format_date, LeaveApplicationRequest, LeaveType};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::date_picker::DatePicker;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "leave-application-form";

#[derive(Properties, PartialEq)]
pub struct LeaveApplicationFormProps {
    pub api_client: ApiClient,
}

#[function_component(LeaveApplicationForm)]
pub fn leave_application_form(props: &LeaveApplicationFormProps) -> Html {
    let start_date = use_state(|| Option::<NaiveDate>::None);
    let end_date = use_state(|| Option::<NaiveDate>::None);
    let leave_type = use_state(LeaveType::default);
    let reason = use_state(String::new);
    let submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    let form_success = use_state(|| Option::<String>::None);

    let on_start_change = {
        let start_date = start_date.clone();
        Callback::from(move |date: NaiveDate| start_date.set(Some(date)))
    };

    let on_end_change = {
        let end_date = end_date.clone();
        Callback::from(move |date: NaiveDate| end_date.set(Some(date)))
    };

    let on_leave_type_change = {
        let leave_type = leave_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(value) = LeaveType::from_str_opt(&select.value()) {
                leave_type.set(value);
            }
        })
    };

    let on_reason_change = {
        let reason = reason.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            reason.set(textarea.value());
        })
    };

    // Both dates are needed before there is anything to summarise or submit
    let draft = match (*start_date, *end_date) {
        (Some(start), Some(end)) => Some(LeaveApplicationRequest {
            start_date: start,
            end_date: end,
            leave_type: *leave_type,
            reason: reason.trim().to_string(),
        }),
        _ => None,
    };

    let on_submit = {
        let draft = draft.clone();
        let api_client = props.api_client.clone();
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let reason = reason.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form_error.set(None);
            form_success.set(None);

            let Some(request) = draft.clone() else {
                form_error.set(Some("Please choose both a start and an end date".to_string()));
                return;
            };

            if let Err(error) = request.validate() {
                form_error.set(Some(error.to_string()));
                return;
            }

            let api_client = api_client.clone();
            let start_date = start_date.clone();
            let end_date = end_date.clone();
            let reason = reason.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();

            spawn_local(async move {
                submitting.set(true);

                match api_client.submit_leave_application(&request).await {
                    Ok(response) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Leave application {} submitted", response.id),
                        );
                        start_date.set(None);
                        end_date.set(None);
                        reason.set(String::new());
                        form_success.set(Some(response.success_message));

                        // Clear success message after 3 seconds
                        let form_success_clear = form_success.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(3000).await;
                            form_success_clear.set(None);
                        });
                    }
                    Err(error) => {
                        Logger::warn_with_component(
                            COMPONENT,
                            &format!("Leave application failed: {}", error),
                        );
                        form_error.set(Some(error.to_string()));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let summary = draft
        .as_ref()
        .filter(|request| request.start_date <= request.end_date)
        .map(|request| {
            let days = request.total_days();
            format!(
                "{} to {} ({} day{})",
                format_date(request.start_date),
                format_date(request.end_date),
                days,
                if days == 1 { "" } else { "s" }
            )
        });

    html! {
        <section class="leave-application-section">
            <h2>{"Apply for Leave"}</h2>

            {if let Some(error) = form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            {if let Some(message) = form_success.as_ref() {
                html! {
                    <div class="form-message success">
                        {message}
                    </div>
                }
            } else { html! {} }}

            <form class="leave-application-form" onsubmit={on_submit}>
                <div class="form-row">
                    <DatePicker
                        label={"Start date".to_string()}
                        placeholder={"First day of leave".to_string()}
                        selected_date={*start_date}
                        max_date={*end_date}
                        on_change={on_start_change}
                        disabled={*submitting}
                    />
                    <DatePicker
                        label={"End date".to_string()}
                        placeholder={"Last day of leave".to_string()}
                        selected_date={*end_date}
                        min_date={*start_date}
                        on_change={on_end_change}
                        disabled={*submitting}
                    />
                </div>

                {if let Some(summary) = summary {
                    html! { <p class="leave-summary">{summary}</p> }
                } else { html! {} }}

                <div class="form-group">
                    <label for="leave-type">{"Leave type"}</label>
                    <select
                        id="leave-type"
                        onchange={on_leave_type_change}
                        disabled={*submitting}
                    >
                        {for LeaveType::ALL.iter().map(|option| html! {
                            <option
                                value={option.as_str()}
                                selected={*option == *leave_type}
                            >
                                {option.to_string()}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="leave-reason">{"Reason"}</label>
                    <textarea
                        id="leave-reason"
                        placeholder="Briefly describe the reason for your leave"
                        maxlength={LeaveApplicationRequest::MAX_REASON_LENGTH.to_string()}
                        value={(*reason).clone()}
                        oninput={on_reason_change}
                        disabled={*submitting}
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={*submitting}
                >
                    {if *submitting {
                        "Submitting..."
                    } else {
                        "Submit Application"
                    }}
                </button>
            </form>
        </section>
    }
}
