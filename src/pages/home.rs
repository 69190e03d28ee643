use yew::prelude::*;

use crate::components::page_link::PageLink;
use crate::components::stats::StatsGrid;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <div class="hero">
                <h1>{"Создаём цифровые продукты, которые приносят результат"}</h1>
                <p class="hero-subtitle">
                    {"NexForge Software проектирует и разрабатывает сайты, веб-сервисы и мобильные приложения под задачи вашего бизнеса."}
                </p>
                <div class="cta-buttons">
                    <PageLink href="#contact" class={classes!("btn-primary")}>{"Обсудить проект"}</PageLink>
                    <PageLink href="#portfolio" class={classes!("btn-secondary")}>{"Наши работы"}</PageLink>
                </div>
            </div>
            <StatsGrid />
            <style>
                {r#"
                .hero {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .hero h1 {
                    font-size: clamp(2rem, 5vw, 3.5rem);
                    line-height: 1.15;
                    margin: 0;
                }
                .hero-subtitle {
                    max-width: 640px;
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.75);
                }
                .cta-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
