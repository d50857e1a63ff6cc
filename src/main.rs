//! Main module for the track pace calculator using Yew.
//! Wires input state, the training report, and the timer board reducer.

use std::rc::Rc;
use track_pace::clock::now_ms;
use track_pace::config::{DEFAULT_LAP_LENGTH_M, INITIAL_GROUP_COUNT};
use track_pace::report::TrainingReport;
use track_pace::timer::GroupId;
use track_pace::utils::validate_lap_length;
use track_pace::TimerGroupCollection;
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod hooks;

use components::{render_field_value, render_splits, LapProgress, TimerGroupCard};
use hooks::use_validated_input;

// ──────────────────────────────────────────────────────────────────────────────
// Timer board state

/// Every timer interaction. Timestamps are taken when the event fires so the
/// reducer itself stays deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerAction {
    Add,
    Remove(GroupId),
    Start(GroupId, u64),
    Lap(GroupId, u64),
    Stop(GroupId, u64),
    Reset(GroupId),
    Tick(GroupId, u64),
    Rename(GroupId, String),
    ToggleHistory(GroupId),
    StartAll(u64),
}

#[derive(Debug, Clone, PartialEq)]
struct TimerBoard {
    groups: TimerGroupCollection,
}

impl TimerBoard {
    fn apply(&mut self, action: TimerAction) {
        use TimerAction::*;
        match action {
            Add => {
                self.groups.add_group(None);
            }
            Remove(id) => {
                self.groups.remove_group(id);
            }
            StartAll(now) => {
                self.groups.start_all_idle(now);
            }
            Start(id, now) => self.with_group(id, |g| {
                g.start(now);
            }),
            Lap(id, now) => self.with_group(id, |g| {
                g.lap(now);
            }),
            Stop(id, now) => self.with_group(id, |g| {
                g.stop(now);
            }),
            Reset(id) => self.with_group(id, |g| {
                g.reset();
            }),
            Tick(id, now) => self.with_group(id, |g| g.tick(now)),
            Rename(id, name) => self.with_group(id, |g| {
                g.rename(&name);
            }),
            ToggleHistory(id) => self.with_group(id, |g| g.toggle_history()),
        }
    }

    fn with_group(&mut self, id: GroupId, f: impl FnOnce(&mut track_pace::TimerGroup)) {
        match self.groups.get_mut(id) {
            Some(group) => f(group),
            // A tick can race the removal of its group
            None => log::debug!("Action for unknown group {:?} dropped", id),
        }
    }
}

impl Reducible for TimerBoard {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Callback that mirrors an input element's text into a state handle.
fn text_input_callback(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state and UI elements.
#[function_component(App)]
fn app() -> Html {
    let distance_text = use_state(String::new);
    let time_text = use_state(String::new);
    let pace_text = use_state(String::new);

    let lap_length_parser: Rc<dyn Fn(&str) -> Result<f64, String>> = Rc::new(validate_lap_length);
    let lap_length = use_validated_input(DEFAULT_LAP_LENGTH_M, lap_length_parser);

    let board = use_reducer(|| TimerBoard {
        groups: TimerGroupCollection::with_groups(INITIAL_GROUP_COUNT),
    });

    // Recomputed from the current inputs on every render
    let report = TrainingReport::from_text(&distance_text, &time_text, &pace_text, lap_length.value);

    let on_timer_action = {
        let board = board.clone();
        Callback::from(move |action: TimerAction| board.dispatch(action))
    };

    let on_add_group = {
        let board = board.clone();
        Callback::from(move |_: MouseEvent| board.dispatch(TimerAction::Add))
    };

    let on_start_all = {
        let board = board.clone();
        Callback::from(move |_: MouseEvent| board.dispatch(TimerAction::StartAll(now_ms())))
    };

    let on_lap_length_change = {
        let on_commit = lap_length.on_commit.clone();
        Callback::from(move |_: Event| on_commit.emit(()))
    };

    let on_lap_length_keypress = {
        let on_commit = lap_length.on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_commit.emit(());
            }
        })
    };

    let on_lap_length_reset = {
        let on_reset = lap_length.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <div class="container">
            <h1>{ "Track Pace" }</h1>

            <section class="calculator">
                <h2>{ "Pace Calculator" }</h2>
                <p class="hint">{ "Fill in any two fields. Bare numbers in time and pace are minutes." }</p>
                <div class="form-group">
                    <label for="distance">{ "Distance (m):" }</label>
                    <input id="distance" type="text" placeholder="10000"
                        value={(*distance_text).clone()}
                        oninput={text_input_callback(&distance_text)} />
                </div>
                <div class="form-group">
                    <label for="time">{ "Time:" }</label>
                    <input id="time" type="text" placeholder="45:00"
                        value={(*time_text).clone()}
                        oninput={text_input_callback(&time_text)} />
                </div>
                <div class="form-group">
                    <label for="pace">{ "Pace (per km):" }</label>
                    <input id="pace" type="text" placeholder="4:30"
                        value={(*pace_text).clone()}
                        oninput={text_input_callback(&pace_text)} />
                </div>

                <div class="results">
                    { render_field_value("Distance", &report.distance) }
                    { render_field_value("Time", &report.time) }
                    { render_field_value("Pace", &report.pace) }
                </div>
            </section>

            <section class="laps">
                <h2>{ "Laps" }</h2>
                <div class="form-group">
                    <label for="lap_length">{ "Lap length (m):" }</label>
                    <input id="lap_length" type="text"
                        value={lap_length.text.clone()}
                        oninput={lap_length.on_text_input.clone()}
                        onchange={on_lap_length_change}
                        onkeypress={on_lap_length_keypress} />
                    <button onclick={on_lap_length_reset}>{ "Reset" }</button>
                    { if let Some(err) = &lap_length.error {
                        html!{ <div class="error-message">{ err.clone() }</div> }
                    } else { html!{} } }
                </div>
                <LapProgress summary={report.lap_summary} />
                { render_splits(&report.splits) }
            </section>

            <section class="timers">
                <h2>{ "Interval Timers" }</h2>
                <div class="timer-toolbar">
                    <button onclick={on_add_group}>{ "Add group" }</button>
                    <button onclick={on_start_all} disabled={!board.groups.has_idle()}>
                        { "Start all" }
                    </button>
                </div>
                <div class="timer-groups">
                    { board.groups.iter().map(|group| html! {
                        <TimerGroupCard
                            key={group.id().0}
                            group={group.clone()}
                            on_action={on_timer_action.clone()} />
                    }).collect::<Html>() }
                </div>
            </section>
        </div>
    }
}

/// Entry point: installs the panic hook and renders the app.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
