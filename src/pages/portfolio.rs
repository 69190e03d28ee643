use yew::prelude::*;

use crate::components::reveal::Reveal;

const PROJECTS: [(&str, &str, &str); 4] = [
    ("Финтех", "Личный кабинет для инвесторов", "Веб-приложение с аналитикой портфеля и отчётами в реальном времени."),
    ("Ритейл", "Сеть магазинов «Гранат»", "Интернет-магазин с синхронизацией остатков по 40 точкам."),
    ("Логистика", "Трекинг грузов", "Мобильное приложение для водителей и панель диспетчера."),
    ("Образование", "Онлайн-школа", "Платформа курсов с вебинарами, тестами и оплатой."),
];

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <div class="portfolio-page">
            <h2 class="section-title">{"Портфолио"}</h2>
            <div class="card-grid">
                { for PROJECTS.iter().enumerate().map(|(index, (tag, title, text))| html! {
                    <Reveal index={index} class={classes!("portfolio-item")}>
                        <span class="portfolio-tag">{*tag}</span>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </Reveal>
                }) }
            </div>
        </div>
    }
}
