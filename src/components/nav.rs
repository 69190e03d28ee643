use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::page_link::PageLink;
use crate::navigation::{NavAction, NavHandle, Section};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub nav: NavHandle,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let nav = props.nav.clone();
    let controls = use_node_ref();

    // Clicking anywhere outside the toggle and the link list closes the menu.
    {
        let nav = nav.clone();
        use_click_away(controls.clone(), move |_: Event| {
            if nav.menu_open {
                nav.dispatch(NavAction::CloseMenu);
            }
        });
    }

    {
        let nav = nav.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && nav.menu_open {
                nav.dispatch(NavAction::CloseMenu);
            }
        });
    }

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    let open = nav.menu_open;

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <PageLink href={Section::Home.href()} class={classes!("logo")}>
                    {"Nex"}<span>{"Forge"}</span>
                </PageLink>
                <div class="nav-controls" ref={controls}>
                    <button
                        class={classes!("mobile-toggle", open.then_some("active"))}
                        onclick={toggle_menu}
                        aria-label="Меню"
                        aria-expanded={open.to_string()}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <ul class={classes!("nav-links", open.then_some("active"))}>
                        { for Section::ALL.iter().map(|section| html! {
                            <li key={section.id()}>
                                <PageLink
                                    href={section.href()}
                                    class={classes!("nav-link", nav.is_highlighted(*section).then_some("active"))}
                                >
                                    {section.label()}
                                </PageLink>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: rgba(10, 14, 26, 0.92);
                    backdrop-filter: blur(10px);
                }
                .nav-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }
                .logo span {
                    color: #4f8cff;
                }
                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.75);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #4f8cff;
                }
                .mobile-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .mobile-toggle span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .mobile-toggle.active span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }
                .mobile-toggle.active span:nth-child(2) {
                    opacity: 0;
                }
                .mobile-toggle.active span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }
                @media (max-width: 768px) {
                    .mobile-toggle {
                        display: flex;
                    }
                    .nav-links {
                        position: fixed;
                        top: 64px;
                        right: -100%;
                        width: 75%;
                        height: calc(100vh - 64px);
                        flex-direction: column;
                        padding: 2rem;
                        background: #0a0e1a;
                        transition: right 0.3s ease;
                    }
                    .nav-links.active {
                        right: 0;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
