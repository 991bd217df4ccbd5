use leptos::*;

use crate::domain::dca::DateLimits;
use crate::domain::form::{
    FormInputs, PanelState, SubmissionOutcome, classify_submission, outcome::MSG_TRANSPORT_FAILURE,
};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::http::DcaApiClient;

/// Delay before the page-load reveal class lands on `<body>`.
pub const PAGE_REVEAL_DELAY_MS: u32 = 2_000;

/// One-tick gap between panel content mutation and the CSS transition class,
/// so the rendering engine registers the starting state first.
pub const PANEL_SHOW_DELAY_MS: u32 = 10;

const DEFAULT_CADENCE: &str = "daily";

/// 🦀 The DCA calculator form: four fields, a calculate action, a clear
/// action, and a result panel rebuilt wholesale on every submission.
#[component]
pub fn App() -> impl IntoView {
    let (investment_value, set_investment_value) = create_signal(String::new());
    let (repeat_purchase, set_repeat_purchase) = create_signal(DEFAULT_CADENCE.to_string());
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());

    let (panel, set_panel) = create_signal(PanelState::Hidden);
    // The deferred `show` class, applied one tick after the content lands.
    let (revealed, set_revealed) = create_signal(false);
    // Snapshot of the fields as submitted; the chart link is built from
    // these, not from whatever the user typed afterwards.
    let submitted = create_rw_signal(FormInputs::default());

    // Page reveal: `loaded` on <body> after a fixed delay, cosmetic only.
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(PAGE_REVEAL_DELAY_MS).await;
        if let Some(body) = document().body() {
            let _ = body.class_list().add_1("loaded");
        }
    });

    // Date inputs are bounded by the backend's price coverage; until the
    // fetch lands (or if it fails) they stay unconstrained.
    let (limits, set_limits) = create_signal(DateLimits::default());
    spawn_local(async move {
        match DcaApiClient::new().date_limits().await {
            Ok(limits) => set_limits.set(limits),
            Err(error) => {
                get_logger().warn(LogComponent::Form("Limits"), &format!("{error}"));
            }
        }
    });
    let min_date = move || {
        limits
            .get()
            .min_date
            .map(|date| date.to_string())
            .unwrap_or_default()
    };
    let max_date = move || {
        limits
            .get()
            .max_date
            .map(|date| date.to_string())
            .unwrap_or_default()
    };

    let run_calculate = move || {
        let inputs = FormInputs {
            investment_value: investment_value.get_untracked(),
            repeat_purchase: repeat_purchase.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
        };
        submitted.set(inputs.clone());

        // Reveal the container with cleared content; the outcome replaces it
        // when the response settles. Overlapping submissions are not guarded
        // against - whichever response lands last wins.
        set_panel.update(|panel| panel.submit());
        set_revealed.set(false);

        spawn_local(async move {
            let response = DcaApiClient::new().calculate(&inputs).await;
            if let Err(error) = &response {
                get_logger().error(LogComponent::Form("Calculate"), &format!("❌ {error}"));
            }

            let outcome = classify_submission(&inputs, response);
            set_panel.update(|panel| panel.settle(outcome));

            gloo_timers::future::TimeoutFuture::new(PANEL_SHOW_DELAY_MS).await;
            set_revealed.set(true);
        });
    };

    // Enter anywhere in the form triggers the calculate action instead of
    // the browser's native submission.
    let on_form_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            run_calculate();
        }
    };

    // Safe to invoke any number of times, with or without a prior submission.
    let run_clear = move || {
        set_investment_value.set(String::new());
        set_repeat_purchase.set(DEFAULT_CADENCE.to_string());
        set_start_date.set(String::new());
        set_end_date.set(String::new());
        set_panel.update(|panel| panel.clear());
        set_revealed.set(false);
    };

    view! {
        <div class="dca-app">
            <h1>"Bitcoin DCA Calculator"</h1>

            <form id="dca-form" on:keydown=on_form_keydown on:submit=|ev| ev.prevent_default()>
                <label>"Purchase amount ($)"</label>
                <input
                    type="number"
                    id="investment_value"
                    name="investment_value"
                    prop:value=investment_value
                    on:input=move |ev| set_investment_value.set(event_target_value(&ev))
                />

                <label>"Repeat purchase"</label>
                <select
                    id="repeat_purchase"
                    name="repeat_purchase"
                    prop:value=repeat_purchase
                    on:change=move |ev| set_repeat_purchase.set(event_target_value(&ev))
                >
                    <option value="daily">"Daily"</option>
                    <option value="weekly">"Weekly"</option>
                    <option value="every_two_weeks">"Every two weeks"</option>
                    <option value="monthly">"Monthly"</option>
                </select>

                <label>"Start date"</label>
                <input
                    type="date"
                    id="start_date"
                    name="start_date"
                    min=min_date
                    max=max_date
                    prop:value=start_date
                    on:input=move |ev| set_start_date.set(event_target_value(&ev))
                />

                <label>"End date"</label>
                <input
                    type="date"
                    id="end_date"
                    name="end_date"
                    min=min_date
                    max=max_date
                    prop:value=end_date
                    on:input=move |ev| set_end_date.set(event_target_value(&ev))
                />

                <button type="button" id="calculate-dca" on:click=move |_| run_calculate()>
                    "Calculate"
                </button>
                <button type="button" id="clear-button" on:click=move |_| run_clear()>
                    "Clear"
                </button>
            </form>

            <ResultsPanel panel=panel revealed=revealed submitted=submitted/>
        </div>
    }
}

/// The result panel: content is a pure function of the panel state, the
/// `show` class arrives one tick later to drive the fade transition.
#[component]
fn ResultsPanel(
    panel: ReadSignal<PanelState>,
    revealed: ReadSignal<bool>,
    submitted: RwSignal<FormInputs>,
) -> impl IntoView {
    let classes = move || {
        let mut classes = panel.get().base_classes().to_string();
        if revealed.get() && matches!(panel.get(), PanelState::Shown(_)) {
            classes.push_str(" show");
        }
        classes
    };

    view! {
        <div
            id="dca-results"
            class=classes
            style:display=move || panel.get().display_style()
        >
            {move || match panel.get() {
                PanelState::Hidden | PanelState::Rendering => ().into_view(),
                PanelState::Shown(SubmissionOutcome::Success(result)) => view! {
                    <h2>"DCA Strategy Results:"</h2>
                    <p>"Total investment: " <br/> {result.total_investment.clone().unwrap_or_default()}</p>
                    <p>"Total Bitcoin amount: " <br/> {result.total_bitcoin.clone().unwrap_or_default()}</p>
                    <p>"Average cost per Bitcoin: " <br/> {result.avg_cost.clone().unwrap_or_default()}</p>
                    <p>"Current Value: " <br/> {result.current_value.clone().unwrap_or_default()}</p>
                    <p>"Current profit: " <br/> {format!("{}$", result.profit.clone().unwrap_or_default())}</p>
                    <p>"Value on end date: " <br/> {format!("{}$", result.value_on_end_date.clone().unwrap_or_default())}</p>
                    <p>"Profit on end date: " <br/> {format!("{}$", result.end_date_profit.clone().unwrap_or_default())}</p>
                    <p>"Current BTC price: " <br/> {result.current_price.clone().unwrap_or_default()}</p>
                    <br/>
                    <a href=submitted.get().chart_link()>"View Chart"</a>
                }.into_view(),
                PanelState::Shown(outcome) => view! {
                    <h2>"Error:"</h2>
                    <p>{outcome.error_message().unwrap_or(MSG_TRANSPORT_FAILURE)}</p>
                }.into_view(),
            }}
        </div>
    }
}
