//! Contact section: info block plus the dual-write message form.
//!
//! Submission fans out to the first-party intake endpoint and the
//! third-party relay concurrently; delivery counts as long as either write
//! lands. The draft is cleared on every attempt and the status banner
//! self-clears after a few seconds.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

use crate::api::{log_error, ApiClient};
use crate::config::STATUS_BANNER_MS;
use crate::fetch::use_fetch;
use crate::models::{ContactInfo, MessageDraft};
use crate::observe::{reveal_class, use_reveal};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    Delivered,
    Failed,
}

/// Best-effort duplication: either channel reaching its destination is a
/// delivery.
pub(crate) fn submit_outcome(intake_ok: bool, relay_ok: bool) -> SubmitOutcome {
    if intake_ok || relay_ok {
        SubmitOutcome::Delivered
    } else {
        SubmitOutcome::Failed
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    // Held behind a Copy handle so the submit closure can live inside the
    // re-runnable section body.
    let api = StoredValue::new_local(expect_context::<ApiClient>());
    let state = use_fetch::<ContactInfo>("/contact");
    let (reveal_ref, revealed) = use_reveal();

    let draft = RwSignal::new(MessageDraft::default());
    let (status, set_status) = signal(None::<(SubmitOutcome, &'static str)>);

    let info = move || state.data.get().unwrap_or_default();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.get_value();
        let payload = draft.get_untracked();
        spawn_local(async move {
            let (intake, relay) = futures::future::join(
                api.post_message(&payload),
                api.relay_message(&payload),
            )
            .await;
            if let Err(err) = &intake {
                log_error("message intake failed", err);
            }
            if let Err(err) = &relay {
                log_error("message relay failed", err);
            }

            let outcome = submit_outcome(intake.is_ok(), relay.is_ok());
            draft.try_set(MessageDraft::default());
            let banner = match outcome {
                SubmitOutcome::Delivered => (outcome, "Message sent successfully!"),
                SubmitOutcome::Failed => (outcome, "Failed to send message. Please try again."),
            };
            set_status.try_set(Some(banner));
            set_timeout(
                move || {
                    set_status.try_set(None);
                },
                Duration::from_millis(STATUS_BANNER_MS),
            );
        });
    };

    view! {
        <Show when=move || !state.loading.get() && state.data.get().is_some()>
            <section id="contact" class="contact">
                <div class="container">
                    <h2>"Get In Touch"</h2>
                    <p class="section-subtitle">
                        "Let's discuss opportunities or collaborate on projects"
                    </p>
                    <div
                        node_ref=reveal_ref
                        class=move || reveal_class("contact-content", revealed.get())
                    >
                        <div class="contact-info">
                            <h3>"Contact Information"</h3>
                            <div class="contact-items">
                                <div class="contact-item">
                                    <h4>"Email"</h4>
                                    <a
                                        href=move || info().mail_link()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {move || info().email}
                                    </a>
                                </div>
                                <Show when=move || info().phone.is_some()>
                                    <div class="contact-item">
                                        <h4>"Phone"</h4>
                                        <a href=move || {
                                            format!("tel:{}", info().phone.unwrap_or_default())
                                        }>{move || info().phone.unwrap_or_default()}</a>
                                    </div>
                                </Show>
                                <Show when=move || info().location.is_some()>
                                    <div class="contact-item">
                                        <h4>"Location"</h4>
                                        <span>{move || info().location.unwrap_or_default()}</span>
                                    </div>
                                </Show>
                            </div>
                        </div>

                        <div class="contact-form-container">
                            <h3>"Send a Message"</h3>
                            <form class="contact-form" on:submit=handle_submit>
                                <div class="form-group">
                                    <label for="name">"Name"</label>
                                    <input
                                        type="text"
                                        id="name"
                                        required=true
                                        placeholder="Your name"
                                        prop:value=move || draft.get().name
                                        on:input=move |ev| {
                                            draft.update(|d| d.name = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="email">"Email"</label>
                                    <input
                                        type="email"
                                        id="email"
                                        required=true
                                        placeholder="your.email@example.com"
                                        prop:value=move || draft.get().email
                                        on:input=move |ev| {
                                            draft.update(|d| d.email = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="message">"Message"</label>
                                    <textarea
                                        id="message"
                                        rows="5"
                                        required=true
                                        placeholder="Your message here..."
                                        prop:value=move || draft.get().message
                                        on:input=move |ev| {
                                            draft.update(|d| d.message = event_target_value(&ev))
                                        }
                                    ></textarea>
                                </div>
                                <button type="submit" class="btn btn-primary">
                                    "Send Message"
                                </button>
                                {move || {
                                    status
                                        .get()
                                        .map(|(outcome, text)| {
                                            let class = match outcome {
                                                SubmitOutcome::Delivered => "form-status success",
                                                SubmitOutcome::Failed => "form-status error",
                                            };
                                            view! { <div class=class>{text}</div> }
                                        })
                                }}
                            </form>
                        </div>
                    </div>
                </div>
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn either_channel_counts_as_delivery() {
        // Intake rejected, relay landed: still a success for the user.
        assert_eq!(submit_outcome(false, true), SubmitOutcome::Delivered);
        assert_eq!(submit_outcome(true, false), SubmitOutcome::Delivered);
        assert_eq!(submit_outcome(true, true), SubmitOutcome::Delivered);
    }

    #[test]
    fn both_channels_down_is_a_failure() {
        assert_eq!(submit_outcome(false, false), SubmitOutcome::Failed);
    }
}
