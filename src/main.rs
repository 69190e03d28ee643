use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{Event, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod navigation;
mod contact {
    pub mod form;
    pub mod validation;
}
mod effects {
    pub mod accordion;
    pub mod counter;
    pub mod frame;
    pub mod observer;
    pub mod scroll;
}
mod components {
    pub mod contact_form;
    pub mod faq;
    pub mod footer;
    pub mod nav;
    pub mod page_link;
    pub mod reveal;
    pub mod scroll_widgets;
    pub mod stats;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod portfolio;
    pub mod services;
}

use components::{
    footer::Footer,
    nav::Nav,
    scroll_widgets::{BackToTop, ProgressBar},
};
use config::{SCROLL_DEBOUNCE_MS, SCROLL_HIGHLIGHT_OFFSET};
use effects::scroll::{current_scroll_y, set_body_scroll_locked};
use navigation::{section_at, NavAction, NavHandle, NavState, Section, SectionExtent};
use pages::{
    about::About, contact::Contact, faq::Faq, home::Home, portfolio::Portfolio,
    services::Services,
};

fn switch(section: Section) -> Html {
    match section {
        Section::Home => html! { <Home /> },
        Section::Services => html! { <Services /> },
        Section::Portfolio => html! { <Portfolio /> },
        Section::About => html! { <About /> },
        Section::Faq => html! { <Faq /> },
        Section::Contact => html! { <Contact /> },
    }
}

fn measure(sections: &[(Section, NodeRef)]) -> Vec<SectionExtent> {
    sections
        .iter()
        .filter_map(|(section, node)| {
            let element = node.cast::<HtmlElement>()?;
            Some(SectionExtent {
                section: *section,
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect()
}

#[function_component]
fn App() -> Html {
    let nav = use_reducer(NavState::default);
    let sections = use_state(|| Section::ALL.map(|section| (section, NodeRef::default())));
    let highlight_timer = use_mut_ref(|| None::<Timeout>);

    use_effect_with_deps(
        move |open| {
            set_body_scroll_locked(*open);
            || ()
        },
        nav.menu_open,
    );

    // Restarting the timer on every scroll event means the highlight is only
    // recomputed once scrolling pauses.
    {
        let nav = nav.clone();
        let sections = sections.clone();
        use_event_with_window("scroll", move |_: Event| {
            let nav = nav.clone();
            let sections = sections.clone();
            *highlight_timer.borrow_mut() = Some(Timeout::new(SCROLL_DEBOUNCE_MS, move || {
                let extents = measure(&*sections);
                if let Some(section) = section_at(current_scroll_y(), SCROLL_HIGHLIGHT_OFFSET, &extents) {
                    nav.dispatch(NavAction::Highlight(section));
                }
            }));
        });
    }

    html! {
        <ContextProvider<NavHandle> context={nav.clone()}>
            <ProgressBar />
            <Nav nav={nav.clone()} />
            <main class="main-content">
                { for sections.iter().map(|(section, node)| html! {
                    <section
                        key={section.id()}
                        id={section.id()}
                        class={classes!("page", nav.is_visible(*section).then_some("active"))}
                        ref={node.clone()}
                    >
                        { switch(*section) }
                    </section>
                }) }
            </main>
            <Footer />
            <BackToTop />
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    background: #0a0e1a;
                    color: #fff;
                }
                .main-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 96px 1.5rem 4rem;
                }
                .page {
                    display: none;
                }
                .page.active {
                    display: block;
                }
                .section-title {
                    font-size: 2.25rem;
                    margin-bottom: 2rem;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .service-card,
                .portfolio-item,
                .feature-card {
                    padding: 2rem;
                    border: 1px solid rgba(79, 140, 255, 0.15);
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.03);
                }
                .card-icon {
                    font-size: 2rem;
                }
                .portfolio-tag {
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    color: #4f8cff;
                }
                .btn-primary,
                .btn-secondary {
                    display: inline-block;
                    padding: 0.9rem 1.8rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                }
                .btn-primary {
                    border: none;
                    background: #4f8cff;
                    color: #fff;
                }
                .btn-primary:disabled {
                    opacity: 0.6;
                    cursor: progress;
                }
                .btn-secondary {
                    border: 1px solid #4f8cff;
                    color: #4f8cff;
                }
                "#}
            </style>
        </ContextProvider<NavHandle>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting NexForge site");
    yew::Renderer::<App>::new().render();
}
