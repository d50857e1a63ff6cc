//! Yew view components for the pace calculator and interval timers.
//!
//! Everything here renders from props or from a training report. The only
//! thing a component owns is a timer group's tick interval.

use crate::hooks::use_interval;
use crate::TimerAction;
use track_pace::clock::now_ms;
use track_pace::config::{PLACEHOLDER, TICK_INTERVAL_MS};
use track_pace::duration::format_stopwatch;
use track_pace::laps::LapSummary;
use track_pace::report::{FieldReport, SplitRow};
use track_pace::timer::{GroupId, Phase, TimerGroup, TimerSegment};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Renders one calculator field's resolved value.
pub fn render_field_value(label: &str, report: &FieldReport) -> Html {
    let text = report.display.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
    html! {
        <div class={classes!("field-value", report.highlighted.then_some("calculated"))}>
            <span class="field-label">{ label }</span>
            <span class="field-text">{ text }</span>
            { if report.highlighted {
                html!{ <span class="badge">{ "calculated" }</span> }
            } else if report.supplied {
                html!{ <span class="badge supplied">{ "supplied" }</span> }
            } else { html!{} } }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LapProgressProps {
    pub summary: Option<LapSummary>,
}

/// Lap counts and a progress bar for the lap currently being run.
#[function_component(LapProgress)]
pub fn lap_progress(props: &LapProgressProps) -> Html {
    let Some(summary) = props.summary else {
        return html! {
            <div class="lap-progress">
                <p class="no-results-message">{ "Enter a distance to see laps" }</p>
            </div>
        };
    };

    html! {
        <div class="lap-progress">
            <div class="lap-count">
                { format!("{:.2} laps of {} m", summary.lap_count, summary.lap_length_m) }
            </div>
            <div class="lap-breakdown">
                { format!("{} full laps + {} m", summary.full_laps, summary.remainder_m) }
            </div>
            <progress max="1" value={summary.progress.to_string()} />
        </div>
    }
}

/// Renders the cumulative split table.
pub fn render_splits(splits: &[SplitRow]) -> Html {
    if splits.is_empty() {
        return html! {};
    }

    html! {
        <table class="split-table">
            <thead>
                <tr>
                    <th>{ "Lap" }</th>
                    <th>{ "Split" }</th>
                </tr>
            </thead>
            <tbody>
                { splits.iter().map(|row| html! {
                    <tr class={classes!(row.split.is_final.then_some("final"))}>
                        <td>{ row.label.clone() }</td>
                        <td>{ row.elapsed.clone().unwrap_or_else(|| PLACEHOLDER.to_string()) }</td>
                    </tr>
                }).collect::<Html>() }
            </tbody>
        </table>
    }
}

fn segment_cell(segment: Option<&TimerSegment>) -> Html {
    match segment {
        Some(s) => html! { <td>{ format_stopwatch(s.duration_ms) }</td> },
        None => html! { <td class="empty"></td> },
    }
}

/// Run/rest history, one row per run with the rest that followed it.
fn render_history(group: &TimerGroup) -> Html {
    if group.history().is_empty() {
        return html! { <p class="no-results-message">{ "No intervals yet" }</p> };
    }

    html! {
        <table class="history-table">
            <thead>
                <tr>
                    <th>{ "#" }</th>
                    <th>{ Phase::Run.label() }</th>
                    <th>{ Phase::Rest.label() }</th>
                </tr>
            </thead>
            <tbody>
                { group.history_rows().iter().enumerate().map(|(idx, row)| html! {
                    <tr>
                        <td>{ idx + 1 }</td>
                        { segment_cell(row.run) }
                        { segment_cell(row.rest) }
                    </tr>
                }).collect::<Html>() }
            </tbody>
            <tfoot>
                <tr>
                    <td>{ "Total" }</td>
                    <td>{ format_stopwatch(group.total_ms(Phase::Run)) }</td>
                    <td>{ format_stopwatch(group.total_ms(Phase::Rest)) }</td>
                </tr>
            </tfoot>
        </table>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerGroupCardProps {
    pub group: TimerGroup,
    pub on_action: Callback<TimerAction>,
}

/// One run/rest stopwatch. Owns its sampling interval while active.
#[function_component(TimerGroupCard)]
pub fn timer_group_card(props: &TimerGroupCardProps) -> Html {
    let group = &props.group;
    let id = group.id();

    {
        let on_action = props.on_action.clone();
        use_interval(
            group.is_active(),
            TICK_INTERVAL_MS,
            Callback::from(move |_| on_action.emit(TimerAction::Tick(id, now_ms()))),
        );
    }

    let timed = |make: fn(GroupId, u64) -> TimerAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(make(id, now_ms())))
    };
    let untimed = |action: TimerAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(action.clone()))
    };

    let on_rename = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_action.emit(TimerAction::Rename(id, input.value()));
        })
    };

    let active = group.is_active();

    html! {
        <div class={classes!("timer-group", group.mode().phase().map(|p| p.label().to_lowercase()))}>
            <div class="timer-header">
                <input type="text" class="group-name" value={group.name().to_string()} onchange={on_rename} />
                <button class="remove" onclick={untimed(TimerAction::Remove(id))}>{ "✕" }</button>
            </div>
            <div class="timer-mode">{ group.mode().label() }</div>
            <div class="timer-elapsed">{ format_stopwatch(group.elapsed_ms()) }</div>
            <div class="timer-controls">
                <button onclick={timed(TimerAction::Start)} disabled={active}>{ "Start" }</button>
                <button onclick={timed(TimerAction::Lap)} disabled={!active}>{ "Lap" }</button>
                <button onclick={timed(TimerAction::Stop)} disabled={!active}>{ "Stop" }</button>
                <button onclick={untimed(TimerAction::Reset(id))} disabled={!group.can_reset()}>{ "Reset" }</button>
                <button onclick={untimed(TimerAction::ToggleHistory(id))}>
                    { if group.history_visible() { "Hide history" } else { "Show history" } }
                </button>
            </div>
            { if group.history_visible() { render_history(group) } else { html!{} } }
        </div>
    }
}
