//! Message composer.

use leptos::prelude::*;

/// Text entry with a send button. Enter sends, Shift+Enter adds a newline.
/// Both controls are disabled while `disabled` is true.
#[component]
pub fn ChatInput(
    #[prop(into)] on_send: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
    placeholder: String,
) -> impl IntoView {
    let input = RwSignal::new(String::new());

    let do_send = move || {
        if disabled.get_untracked() {
            return;
        }
        let text = input.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        on_send.run(text);
        input.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !disabled.get() && !input.get().trim().is_empty();

    view! {
        <div class="chat-input">
            <textarea
                class="chat-input__field"
                rows="1"
                placeholder=placeholder
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
                disabled=move || disabled.get()
            ></textarea>
            <button class="btn btn--primary chat-input__send" on:click=move |_| do_send() disabled=move || !can_send()>
                "Send"
            </button>
        </div>
    }
}
