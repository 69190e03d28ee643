use yew::prelude::*;

use crate::components::page_link::PageLink;
use crate::components::reveal::Reveal;

const FEATURES: [(&str, &str); 4] = [
    ("Прозрачные сроки", "Фиксируем этапы и показываем результат каждые две недели."),
    ("Своя команда", "Дизайнеры, разработчики и тестировщики работают в одном месте."),
    ("Качество кода", "Код-ревью, автотесты и документация в каждом проекте."),
    ("Поддержка после запуска", "Остаёмся на связи и развиваем продукт вместе с вами."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <h2 class="section-title">{"О нас"}</h2>
            <p class="about-lead">
                {"Мы небольшая студия разработки. С 2018 года помогаем компаниям запускать цифровые продукты и доводить их до результата."}
            </p>
            <div class="card-grid">
                { for FEATURES.iter().enumerate().map(|(index, (title, text))| html! {
                    <Reveal index={index} class={classes!("feature-card")}>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </Reveal>
                }) }
            </div>
            <PageLink href="#contact" class={classes!("btn-secondary")}>{"Связаться с нами"}</PageLink>
        </div>
    }
}
