use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::effects::observer::OnceVisible;
use crate::effects::scroll::{reveal_enabled, reveal_style, viewport_width, RevealState};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Position within its group; sets the stagger delay.
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Card wrapper that fades and slides in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let animate = use_state(|| reveal_enabled(viewport_width()));
    let shown = use_state(|| false);

    {
        let node = node.clone();
        let shown = shown.clone();
        use_effect_with_deps(
            move |animate| {
                let mut observer = None;
                if *animate {
                    let on_visible = shown.clone();
                    match OnceVisible::new(REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, move |_| {
                        on_visible.set(true)
                    }) {
                        Ok(o) => {
                            if let Some(element) = node.cast::<Element>() {
                                o.observe(&element);
                            }
                            observer = Some(o);
                        }
                        Err(e) => {
                            warn!("IntersectionObserver unavailable, showing card: {:?}", e);
                            shown.set(true);
                        }
                    }
                }
                move || drop(observer)
            },
            *animate,
        );
    }

    let state = match (*animate, *shown) {
        (false, _) => RevealState::Static,
        (true, false) => RevealState::Hidden,
        (true, true) => RevealState::Shown,
    };

    html! {
        <div ref={node} class={props.class.clone()} style={reveal_style(props.index, state)}>
            { for props.children.iter() }
        </div>
    }
}
