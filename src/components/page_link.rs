use log::warn;
use yew::prelude::*;

use crate::effects::scroll::{scroll_to_anchor, scroll_to_top};
use crate::navigation::{LinkTarget, NavAction, NavHandle};

/// Route an in-page link click. Returns `true` when the click was handled
/// here and the browser default should be suppressed.
pub fn follow_link(nav: &NavHandle, href: &str) -> bool {
    match LinkTarget::parse(href) {
        LinkTarget::Section(section) => {
            nav.dispatch(NavAction::Activate(section.id().to_string()));
            scroll_to_top();
            true
        }
        LinkTarget::Anchor(id) => {
            scroll_to_anchor(&id);
            true
        }
        LinkTarget::Inert | LinkTarget::External => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct PageLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that delegates `#section` targets to the navigation controller,
/// so CTA buttons, footer links and the menu share one activation path.
#[function_component(PageLink)]
pub fn page_link(props: &PageLinkProps) -> Html {
    let nav = use_context::<NavHandle>();

    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| match nav.as_ref() {
            Some(nav) => {
                if follow_link(nav, &href) {
                    e.prevent_default();
                }
            }
            None => warn!("PageLink {} rendered outside the navigation provider", href),
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
