use crate::ai;
use crate::state::Conversation;
use crate::types::{ChatMessage, Role};
use crate::views::shared::markdown_to_html;
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

#[component]
pub fn CoachView() -> Element {
    let conversation = use_signal(Conversation::new);
    let mut input = use_signal(String::new);
    let sending = use_signal(|| false);

    let mut send_message = {
        let mut conversation = conversation;
        let mut sending_signal = sending;
        let mut input_signal = input;
        move |text: String| {
            if sending_signal() {
                return;
            }
            let opened = conversation.with_mut(|c| c.begin_turn(&text));
            let Some((context, user_message)) = opened else { return };
            input_signal.set(String::new());
            sending_signal.set(true);
            spawn(async move {
                match ai::gateway().wellness_advice(&context, &user_message.text).await {
                    Ok(reply) => {
                        conversation.with_mut(|c| {
                            c.append_model(&reply);
                        });
                    }
                    Err(err) => {
                        // No error turn is appended; the coach stays quiet
                        // and the user can resend.
                        tracing::warn!("wellness advice request failed: {err}");
                    }
                }
                sending_signal.set(false);
            });
        }
    };

    let messages_snapshot = conversation.read().messages().to_vec();

    rsx! {
        div { class: "main-container",
            div { class: "card chat-wrap",
                div { class: "chat-header",
                    div { class: "avatar coach", "LA" }
                    div {
                        h2 { "Wellness Coach" }
                        p { class: "text-muted", "Always here to support you" }
                    }
                }
                div { id: "chat-list", class: "chat-list",
                    for msg in messages_snapshot.iter() {
                        MessageRow { message: msg.clone() }
                    }
                    if sending() {
                        div { class: "message-row model",
                            div { class: "bubble model typing",
                                span { class: "shimmer-text", "Thinking..." }
                            }
                        }
                    }
                }
                form { class: "composer",
                    div { class: "hstack",
                        input {
                            r#type: "text",
                            placeholder: "Ask about nutrition, mindfulness, or share your thoughts...",
                            value: "{input}",
                            oninput: move |ev| input.set(ev.value()),
                            onkeydown: move |ev| {
                                if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                    ev.prevent_default();
                                    send_message(input());
                                }
                            },
                            disabled: sending(),
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: sending() || input().trim().is_empty(),
                            onclick: move |_| send_message(input()),
                            "Send"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let role_class = match message.role {
        Role::User => "user",
        Role::Model => "model",
    };
    rsx! {
        div { class: format_args!("message-row {}", role_class),
            if matches!(message.role, Role::Model) {
                div { class: "avatar coach", "LA" }
            }
            div { class: "message-stack",
                div { class: format_args!("bubble {}", role_class),
                    if matches!(message.role, Role::Model) {
                        CoachBubble { text: message.text.clone() }
                    } else {
                        "{message.text}"
                    }
                }
                if let Some(ts) = format_message_timestamp(message.timestamp) {
                    div { class: "message-meta",
                        span { class: "message-timestamp", "{ts}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CoachBubble(text: String) -> Element {
    let content_html = markdown_to_html(&text);
    let copy_payload = text.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut clipboard) = arboard::Clipboard::new() {
                    let _ = clipboard.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    rsx! {
        div { class: "md", dangerous_inner_html: "{content_html}" }
        div { class: "bubble-controls",
            button { class: "action-btn", title: "Copy", onclick: on_copy, "Copy" }
        }
    }
}
