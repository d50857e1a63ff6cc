use gloo_timers::callback::Interval;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for a validated input field.
#[derive(Clone)]
pub struct ValidatedInput<T: Clone + PartialEq + 'static> {
    /// The current text content of the input field.
    pub text: String,
    /// The last value that passed validation.
    pub value: T,
    /// An optional error message if the last commit failed.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event.
    pub on_text_input: Callback<InputEvent>,
    /// Validate the current text. On failure the previous value is kept.
    pub on_commit: Callback<()>,
    /// Restore the initial value and clear any error.
    pub on_reset: Callback<()>,
}

/// Custom hook to manage state for a validated input field.
#[hook]
pub fn use_validated_input<T>(
    initial_value: T,
    parse_and_validate: Rc<dyn Fn(&str) -> Result<T, String>>,
) -> ValidatedInput<T>
where
    T: Clone + PartialEq + std::fmt::Display + 'static,
{
    let value = use_state(|| initial_value.clone());
    let text = use_state(|| initial_value.to_string());
    let error = use_state(|| None::<String>);

    let on_text_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };

    let on_commit = {
        let value = value.clone();
        let text = text.clone();
        let error = error.clone();
        Callback::from(move |_| match parse_and_validate(&text) {
            Ok(parsed) => {
                text.set(parsed.to_string()); // canonical form
                value.set(parsed);
                error.set(None);
            }
            Err(msg) => error.set(Some(msg)),
        })
    };

    let on_reset = {
        let value = value.clone();
        let text = text.clone();
        let error = error.clone();
        Callback::from(move |_| {
            value.set(initial_value.clone());
            text.set(initial_value.to_string());
            error.set(None);
        })
    };

    ValidatedInput {
        text: (*text).clone(),
        value: (*value).clone(),
        error: (*error).clone(),
        on_text_input,
        on_commit,
        on_reset,
    }
}

/// Fire `on_tick` every `period_ms` while `active`. The interval is dropped
/// as soon as `active` turns false or the component unmounts.
#[hook]
pub fn use_interval(active: bool, period_ms: u32, on_tick: Callback<()>) {
    use_effect_with((active, period_ms), move |&(active, period_ms)| {
        let interval = active.then(|| Interval::new(period_ms, move || on_tick.emit(())));
        move || drop(interval)
    });
}
