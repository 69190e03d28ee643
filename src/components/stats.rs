use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::config::COUNTER_GROUP_THRESHOLD;
use crate::effects::counter::StatCounter;
use crate::effects::frame::AnimationLoop;
use crate::effects::observer::OnceVisible;

struct Stat {
    target: u32,
    suffix: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { target: 250, suffix: "+", label: "Завершённых проектов" },
    Stat { target: 120, suffix: "+", label: "Довольных клиентов" },
    Stat { target: 8, suffix: "", label: "Лет на рынке" },
    Stat { target: 35, suffix: "", label: "Специалистов в команде" },
];

#[derive(Properties, PartialEq)]
pub struct StatNumberProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
    /// Set once the surrounding grid has scrolled into view.
    pub run: bool,
}

#[function_component(StatNumber)]
pub fn stat_number(props: &StatNumberProps) -> Html {
    let shown = use_state(|| 0u32);
    let counter = use_mut_ref(|| StatCounter::new(props.target));
    let ramp = use_mut_ref(|| None::<AnimationLoop>);

    {
        let shown = shown.clone();
        let counter = counter.clone();
        let ramp = ramp.clone();
        let target = props.target;
        use_effect_with_deps(
            move |run| {
                if *run {
                    if let Some(mut steps) = counter.borrow_mut().start() {
                        debug!("Counting up to {}", target);
                        *ramp.borrow_mut() = Some(AnimationLoop::start(move || {
                            let frame = steps.tick();
                            shown.set(frame.value());
                            !frame.is_done()
                        }));
                    }
                }
                || ()
            },
            props.run,
        );
    }

    let animated = counter.borrow().has_animated();

    html! {
        <div class="stat-item">
            <span
                class={classes!("stat-number", animated.then_some("animated"))}
                data-target={props.target.to_string()}
            >
                {*shown}{props.suffix.clone()}
            </span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

#[function_component(StatsGrid)]
pub fn stats_grid() -> Html {
    let grid = use_node_ref();
    let run = use_state(|| false);

    {
        let grid = grid.clone();
        let run = run.clone();
        use_effect_with_deps(
            move |_| {
                let on_visible = run.clone();
                let observer = match OnceVisible::new(COUNTER_GROUP_THRESHOLD, "0px", move |_| {
                    on_visible.set(true)
                }) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        warn!("IntersectionObserver unavailable, starting counters: {:?}", e);
                        run.set(true);
                        None
                    }
                };
                if let (Some(observer), Some(element)) = (observer.as_ref(), grid.cast::<Element>()) {
                    observer.observe(&element);
                }
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div class="stats-grid" ref={grid}>
            { for STATS.iter().map(|stat| html! {
                <StatNumber
                    target={stat.target}
                    suffix={stat.suffix}
                    label={stat.label}
                    run={*run}
                />
            }) }
            <style>
                {r#"
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 2rem;
                    margin: 4rem 0;
                    text-align: center;
                }
                .stat-number {
                    display: block;
                    font-size: 3rem;
                    font-weight: 700;
                    color: #4f8cff;
                }
                .stat-label {
                    color: rgba(255, 255, 255, 0.7);
                }
                "#}
            </style>
        </div>
    }
}
