//! Chat-style prompt on the home page.
//!
//! While the input is empty its placeholder types out example questions from
//! [`QuestionGenerator`]. Submitting seeds the contact form draft with the
//! question and navigates to `/contact`.

#[cfg(test)]
#[path = "chat_prompt_test.rs"]
mod chat_prompt_test;

use leptos::prelude::*;

use crate::util::i18n::t;
use crate::util::language::Language;
use crate::util::question_gen::{QuestionGenerator, cycle_duration_ms, typed_prefix};

const CHARS_PER_SEC: u32 = 28;
const HOLD_MS: u64 = 1_800;
#[cfg(feature = "hydrate")]
const TICK_MS: u32 = 50;

/// Typewriter state: which question is showing and when it started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceholderCycle {
    generator: QuestionGenerator,
    index: usize,
    started_ms: u64,
}

impl PlaceholderCycle {
    #[must_use]
    pub fn new(generator: QuestionGenerator, now_ms: u64) -> Self {
        Self { generator, index: 0, started_ms: now_ms }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance to `now_ms` and return the placeholder text to show.
    pub fn tick(&mut self, now_ms: u64) -> String {
        let mut question = self.generator.question(self.index);
        if now_ms.saturating_sub(self.started_ms) >= cycle_duration_ms(&question, CHARS_PER_SEC, HOLD_MS) {
            self.index = self.index.wrapping_add(1);
            self.started_ms = now_ms;
            question = self.generator.question(self.index);
        }
        typed_prefix(&question, now_ms.saturating_sub(self.started_ms), CHARS_PER_SEC).to_owned()
    }

    /// The full question currently being typed.
    #[must_use]
    pub fn current_question(&self) -> String {
        self.generator.question(self.index)
    }
}

#[component]
pub fn ChatPrompt() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let input = RwSignal::new(String::new());
    let placeholder = RwSignal::new(String::new());

    let cycle = StoredValue::new(PlaceholderCycle::new(QuestionGenerator::default(), crate::util::viewport::now_ms()));

    #[cfg(feature = "hydrate")]
    {
        let ticker = StoredValue::new_local(None::<gloo_timers::callback::Interval>);
        Effect::new(move || {
            if ticker.with_value(Option::is_some) {
                return;
            }
            let interval = gloo_timers::callback::Interval::new(TICK_MS, move || {
                if !input.get_untracked().is_empty() {
                    return;
                }
                let now = crate::util::viewport::now_ms();
                let text = cycle.try_update_value(|c| c.tick(now)).unwrap_or_default();
                placeholder.set(text);
            });
            ticker.set_value(Some(interval));
        });
        on_cleanup(move || ticker.set_value(None));
    }

    let navigate = leptos_router::hooks::use_navigate();
    let scroll = use_context::<crate::components::scroll_memory::ScrollMemoryHandle>();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let typed = input.get_untracked();
        let question = if typed.trim().is_empty() { cycle.with_value(PlaceholderCycle::current_question) } else { typed };
        crate::pages::contact::seed_draft(&question);
        if let Some(scroll) = scroll {
            scroll.before_navigate();
        }
        navigate("/contact", leptos_router::NavigateOptions::default());
    };

    view! {
        <form class="chat-prompt" on:submit=on_submit>
            <label class="chat-prompt__label" for="chat-prompt-input">
                {move || t(lang.get(), "home.ask")}
            </label>
            <div class="chat-prompt__row">
                <input
                    id="chat-prompt-input"
                    class="chat-prompt__input"
                    type="text"
                    autocomplete="off"
                    placeholder=move || placeholder.get()
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="chat-prompt__submit" type="submit">
                    {move || t(lang.get(), "chat.submit")}
                </button>
            </div>
        </form>
    }
}
