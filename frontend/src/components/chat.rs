use justice_ai::{Message, QUICK_PROMPTS, Sender};
use leptos::ev;
use leptos::prelude::*;

use crate::state::AppState;

/// Main chat area with message history, quick prompts, and input.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <main class="chat-area">
            // Notice banner
            {move || {
                state.notice.get().map(|notice| {
                    view! {
                        <div class="notice-banner">
                            <span>{notice}</span>
                            <button class="dismiss-btn" on:click=move |_| state.dismiss_notice()>
                                "×"
                            </button>
                        </div>
                    }
                })
            }}

            <div class="messages-container">
                <For
                    each=move || state.messages.get()
                    key=|m| m.id
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>

                {move || {
                    state.awaiting_response.get().then(|| {
                        view! {
                            <div class="message bot thinking">"Analyzing Legal Context..."</div>
                        }
                    })
                }}

                {move || state.quick_prompts_visible().then(|| view! { <QuickPrompts /> })}
            </div>

            <ChatInput />
        </main>
    }
}

/// A single chat message bubble.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let mut css_class = match message.sender {
        Sender::User => "message user".to_string(),
        Sender::Bot => "message bot".to_string(),
    };
    if message.is_error {
        css_class.push_str(" error");
    }

    view! {
        <div class=css_class>
            <div class="role-label">{message.sender.label()}</div>
            <div class="message-text">{message.text}</div>
        </div>
    }
}

/// Canned questions shown before the first exchange.
#[component]
fn QuickPrompts() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="suggestions">
            {QUICK_PROMPTS
                .iter()
                .map(|p| {
                    let prompt = p.prompt;
                    view! {
                        <button class="suggestion" on:click=move |_| state.send(prompt.to_string())>
                            <h4>{p.title}</h4>
                            <p>{p.subtitle}</p>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Input row with text box, mic and send buttons.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();

    let is_sending = move || state.awaiting_response.get();

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            state.send_input();
        }
    };

    view! {
        <div class="input-area">
            <div class="input-row">
                <input
                    type="text"
                    placeholder="Ask about your rights..."
                    prop:value=move || state.input.get()
                    on:input=move |ev| state.set_input(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=is_sending
                />
                <button
                    class="mic-btn"
                    title="Speak"
                    on:click=move |_| state.start_listening()
                    disabled=is_sending
                >
                    "🎤"
                </button>
                <button
                    class="send-btn"
                    on:click=move |_| state.send_input()
                    disabled=move || is_sending() || state.input.get().trim().is_empty()
                >
                    {move || if is_sending() { "Sending…" } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
