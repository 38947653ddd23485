//! Contact page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts to `/api/contact` through `net::api`. The server validates; this
//! page only renders its per-field messages. The form doubles as a draft in
//! `sessionStorage` so a reload, or a question handed over from the home
//! page chat prompt, survives navigation.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::net::types::{ContactForm, SubmitError};
use crate::util::i18n::t;
use crate::util::language::Language;
use crate::util::storage::{Area, load_json, save_json};

pub const DRAFT_KEY: &str = "meridian_contact_draft";

/// One input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// JSON field name, as used in server error details.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Self::Name => "contact.name",
            Self::Email => "contact.email",
            Self::Subject => "contact.subject",
            Self::Message => "contact.message",
        }
    }

    fn input_type(self) -> &'static str {
        if self == Self::Email { "email" } else { "text" }
    }

    #[must_use]
    pub fn value(self, form: &ContactForm) -> &str {
        match self {
            Self::Name => &form.name,
            Self::Email => &form.email,
            Self::Subject => &form.subject,
            Self::Message => &form.message,
        }
    }

    pub fn set(self, form: &mut ContactForm, value: String) {
        match self {
            Self::Name => form.name = value,
            Self::Email => form.email = value,
            Self::Subject => form.subject = value,
            Self::Message => form.message = value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(SubmitError),
}

impl SubmitState {
    /// Server message for `field`, if the last attempt rejected it.
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<String> {
        match self {
            Self::Failed(err) => err.field_message(field.key()).map(str::to_owned),
            _ => None,
        }
    }

    /// Submit is allowed once every field has input and no request is in
    /// flight.
    #[must_use]
    pub fn can_submit(&self, form: &ContactForm) -> bool {
        *self != Self::Sending && form.is_filled()
    }

    /// Error text not tied to a field.
    #[must_use]
    pub fn general_error(&self) -> Option<String> {
        match self {
            Self::Failed(SubmitError::Failed(msg)) => Some(msg.clone()),
            _ => None,
        }
    }
}

/// Put `question` into the message of `existing`, keeping the other fields.
#[must_use]
pub fn draft_with_question(existing: Option<ContactForm>, question: &str) -> ContactForm {
    let mut draft = existing.unwrap_or_default();
    draft.message = question.trim().to_owned();
    draft
}

/// Hand a question over to the contact form via the session draft.
pub fn seed_draft(question: &str) {
    let draft = draft_with_question(load_json(Area::Session, DRAFT_KEY), question);
    save_json(Area::Session, DRAFT_KEY, &draft);
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(SubmitState::Idle);

    // Runs once after hydration so server markup stays empty.
    Effect::new(move || {
        if let Some(draft) = load_json::<ContactForm>(Area::Session, DRAFT_KEY) {
            form.set(draft);
        }
    });

    let edit = move |field: Field, value: String| {
        form.update(|f| field.set(f, value));
        form.with_untracked(|f| save_json(Area::Session, DRAFT_KEY, f));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.with_untracked(|f| status.with_untracked(|s| s.can_submit(f))) {
            return;
        }
        status.set(SubmitState::Sending);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let payload = form.get_untracked();
            match crate::net::api::submit_contact(&payload).await {
                Ok(()) => {
                    form.set(ContactForm::default());
                    if let Err(e) = crate::util::storage::remove_raw(Area::Session, DRAFT_KEY) {
                        log::debug!("contact draft not cleared: {e}");
                    }
                    status.set(SubmitState::Sent);
                }
                Err(e) => {
                    log::warn!("contact submission failed: {e:?}");
                    status.set(SubmitState::Failed(e));
                }
            }
        });
    };

    let fields = Field::ALL
        .into_iter()
        .map(move |field| {
            let id = format!("contact-{}", field.key());
            let control = if field == Field::Message {
                view! {
                    <textarea
                        id=id.clone()
                        name=field.key()
                        rows="8"
                        prop:value=move || form.with(|f| field.value(f).to_owned())
                        on:input=move |ev| edit(field, event_target_value(&ev))
                    ></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input
                        id=id.clone()
                        name=field.key()
                        type=field.input_type()
                        prop:value=move || form.with(|f| field.value(f).to_owned())
                        on:input=move |ev| edit(field, event_target_value(&ev))
                    />
                }
                .into_any()
            };
            view! {
                <div class="contact-form__field">
                    <label for=id>{move || t(lang.get(), field.label_key())}</label>
                    {control}
                    {move || {
                        status.with(|s| s.field_error(field)).map(|msg| view! { <p class="contact-form__error">{msg}</p> })
                    }}
                </div>
            }
        })
        .collect_view();

    view! {
        <main class="page page--contact">
            <h1>{move || t(lang.get(), "contact.title")}</h1>
            <p>{move || t(lang.get(), "contact.intro")}</p>
            <form class="contact-form" on:submit=on_submit novalidate=true>
                {fields}
                {move || {
                    status.with(SubmitState::general_error).map(|msg| {
                        view! {
                            <p class="contact-form__error">
                                {t(lang.get_untracked(), "contact.failed")} " " {msg}
                            </p>
                        }
                    })
                }}
                <Show when=move || status.with(|s| *s == SubmitState::Sent)>
                    <p class="contact-form__success">{move || t(lang.get(), "contact.success")}</p>
                </Show>
                <button type="submit" disabled=move || !form.with(|f| status.with(|s| s.can_submit(f)))>
                    {move || {
                        if status.with(|s| *s == SubmitState::Sending) {
                            t(lang.get(), "contact.sending")
                        } else {
                            t(lang.get(), "contact.send")
                        }
                    }}
                </button>
            </form>
        </main>
    }
}
