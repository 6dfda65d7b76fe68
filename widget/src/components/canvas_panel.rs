//! Side panel rendering the current HTML fragment.

use leptos::prelude::*;

use crate::state::canvas::CanvasState;
use crate::util::sanitize::sanitize_html;

/// Canvas panel with a title bar and close button. Renders nothing while
/// closed. The fragment is sanitized before it is injected as markup.
#[component]
pub fn CanvasPanel(
    #[prop(into)] canvas: Signal<CanvasState>,
    #[prop(into)] on_close: Callback<()>,
    width_style: String,
) -> impl IntoView {
    let is_open = move || canvas.with(|c| c.open);
    let title = move || canvas.with(|c| c.title.clone());
    let safe_html = Memo::new(move |_| canvas.with(|c| sanitize_html(&c.html)));

    view! {
        <Show when=is_open>
            <aside class="canvas-panel" style=width_style.clone()>
                <header class="canvas-panel__header">
                    <h2 class="canvas-panel__title">{title}</h2>
                    <button class="canvas-panel__close" title="Close canvas" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                <div class="canvas-panel__body">
                    {move || {
                        let html = safe_html.get();
                        if html.trim().is_empty() {
                            view! {
                                <div class="canvas-panel__empty">
                                    <p>"No content to display"</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! { <div class="canvas-panel__content" inner_html=html></div> }.into_any()
                        }
                    }}
                </div>
            </aside>
        </Show>
    }
}
