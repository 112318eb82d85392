//! Floating FAQ chat widget.
//!
//! The conversation lives in an `RwSignal<Chatbot>`. A send records the
//! visitor turn synchronously with [`Chatbot::begin_turn`], waits out the
//! typing delay on a browser timer, then appends the reply with
//! [`Chatbot::finish_turn`].

use crate::timer::BrowserSleeper;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use magmist_conversation::{
    Chatbot, ChatbotParts, ConversationTurn, DelayPolicy, PendingReply, QuickReplyIcon, TypingDelay,
};

fn icon_class(icon: QuickReplyIcon) -> &'static str {
    match icon {
        QuickReplyIcon::Zap => "icon icon-zap",
        QuickReplyIcon::ShoppingCart => "icon icon-shopping-cart",
        QuickReplyIcon::Users => "icon icon-users",
        QuickReplyIcon::HelpCircle => "icon icon-help-circle",
        QuickReplyIcon::Shield => "icon icon-shield",
    }
}

/// Chat launcher and window.
#[component]
pub fn ChatbotWidget(parts: ChatbotParts) -> impl IntoView {
    let chatbot = RwSignal::new(parts.chatbot());
    let (input, set_input) = signal(String::new());
    let typing_policy: DelayPolicy = parts.typing;
    let handoff_url = parts.handoff.url();
    let assistant_name = parts.assistant_name.clone();
    let quick_replies: Vec<_> = parts.quick_replies.iter().cloned().collect();

    let is_open = move || chatbot.with(Chatbot::is_open);
    let is_typing = move || chatbot.with(Chatbot::is_typing);

    let reply_later = move |pending: PendingReply| {
        spawn_local(async move {
            let delay = TypingDelay::new(typing_policy, BrowserSleeper);
            let waited = delay.wait().await;
            chatbot.update(|bot| {
                if let Some(turn) = bot.finish_turn(pending) {
                    tracing::debug!(turn_id = %turn.id, waited_ms = waited.as_millis() as u64, "Bot replied");
                }
            });
        });
    };

    let send = move |text: String| {
        let Some(pending) = chatbot.try_update(|bot| bot.begin_turn(&text)).flatten() else {
            return;
        };
        set_input.set(String::new());
        reply_later(pending);
    };

    let quick_reply = move |key: String| {
        if let Some(pending) = chatbot.try_update(|bot| bot.begin_quick_reply(&key)).flatten() {
            reply_later(pending);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        send(input.get_untracked());
    };

    let messages_end = NodeRef::<leptos::html::Div>::new();
    Effect::new(move |_| {
        chatbot.with(|bot| (bot.log().len(), bot.is_typing()));
        if let Some(end) = messages_end.get() {
            end.scroll_into_view();
        }
    });

    view! {
        <button
            class="chatbot-toggle"
            aria-label=move || if is_open() { "Close chat" } else { "Open chat" }
            on:click=move |_| {
                chatbot.update(|bot| {
                    bot.toggle();
                });
            }
        >
            {move || if is_open() { "\u{2715}" } else { "\u{1f4ac}" }}
        </button>

        <Show when=is_open>
            <div class="chatbot-window">
                <div class="chatbot-header">
                    <div class="chatbot-avatar">"\u{1f916}"</div>
                    <div>
                        <h3>{assistant_name.clone()}</h3>
                        <p class="chatbot-status">
                            {move || if is_typing() { "typing..." } else { "Online" }}
                        </p>
                    </div>
                </div>

                <div class="chatbot-messages">
                    <For
                        each=move || chatbot.with(|bot| bot.log().turns().to_vec())
                        key=|turn| turn.id
                        children=move |turn: ConversationTurn| {
                            let class = if turn.sender.is_user() {
                                "chat-bubble user"
                            } else {
                                "chat-bubble bot"
                            };
                            view! { <div class=class>{turn.text}</div> }
                        }
                    />
                    <Show when=is_typing>
                        <div class="chat-bubble bot typing-indicator">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </Show>
                    <div node_ref=messages_end></div>
                </div>

                <div class="chatbot-quick-replies">
                    {quick_replies.iter().map(|reply| {
                        let key = reply.key.clone();
                        view! {
                            <button
                                class="quick-reply"
                                disabled=is_typing
                                on:click=move |_| quick_reply(key.clone())
                            >
                                <span class=icon_class(reply.icon)></span>
                                {reply.label.clone()}
                            </button>
                        }
                    }).collect_view()}
                    <a
                        class="quick-reply whatsapp"
                        href=handoff_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "WhatsApp"
                    </a>
                </div>

                <form class="chatbot-input" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Type a message..."
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        aria-label="Send"
                        disabled=move || is_typing() || input.with(|text| text.trim().is_empty())
                    >
                        "\u{27a4}"
                    </button>
                </form>
            </div>
        </Show>
    }
}
