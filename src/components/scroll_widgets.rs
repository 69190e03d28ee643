use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::effects::scroll::{back_to_top_visible, current_scroll_y, document_progress, scroll_to_top};

/// Thin bar across the top showing how far the page has been scrolled.
#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    let progress = use_state_eq(document_progress);

    {
        let progress = progress.clone();
        use_event_with_window("scroll", move |_: Event| {
            progress.set(document_progress());
        });
    }

    html! {
        <div id="progressBar" class="progress-bar" style={format!("width: {}%;", *progress)}>
            <style>
                {r#"
                .progress-bar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    height: 3px;
                    z-index: 200;
                    background: linear-gradient(90deg, #4f8cff, #7ee0ff);
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| back_to_top_visible(current_scroll_y()));

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            visible.set(back_to_top_visible(current_scroll_y()));
        });
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button
            id="backToTop"
            class={classes!("back-to-top", (*visible).then_some("visible"))}
            aria-label="Наверх"
            onclick={onclick}
        >
            {"↑"}
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    right: 2rem;
                    bottom: 2rem;
                    width: 48px;
                    height: 48px;
                    border: none;
                    border-radius: 50%;
                    background: #4f8cff;
                    color: #fff;
                    font-size: 1.25rem;
                    cursor: pointer;
                    opacity: 0;
                    visibility: hidden;
                    transition: opacity 0.3s ease, visibility 0.3s ease;
                }
                .back-to-top.visible {
                    opacity: 1;
                    visibility: visible;
                }
                "#}
            </style>
        </button>
    }
}
