use yew::prelude::*;

use crate::components::reveal::Reveal;

const SERVICES: [(&str, &str, &str); 6] = [
    ("🌐", "Веб-разработка", "Корпоративные сайты, лендинги и веб-сервисы на современном стеке."),
    ("📱", "Мобильные приложения", "Нативные и кроссплатформенные приложения для iOS и Android."),
    ("🎨", "UI/UX дизайн", "Исследования, прототипы и интерфейсы, которыми удобно пользоваться."),
    ("🛒", "Интернет-магазины", "Каталоги, корзина, оплата и интеграция с учётными системами."),
    ("💡", "IT-консалтинг", "Аудит, выбор технологий и план развития продукта."),
    ("🛠", "Поддержка", "Мониторинг, обновления и доработки после запуска."),
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <h2 class="section-title">{"Услуги"}</h2>
            <div class="card-grid">
                { for SERVICES.iter().enumerate().map(|(index, (icon, title, text))| html! {
                    <Reveal index={index} class={classes!("service-card")}>
                        <div class="card-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </Reveal>
                }) }
            </div>
        </div>
    }
}
