use yew::prelude::*;

use crate::components::contact_form::ContactFormView;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <h2 class="section-title">{"Контакты"}</h2>
            <div class="contact-layout">
                <div class="contact-info">
                    <p>{"Опишите задачу, и мы вернёмся с вопросами и предварительной оценкой в течение рабочего дня."}</p>
                    <p><strong>{"Email: "}</strong>{"hello@nexforge.dev"}</p>
                    <p><strong>{"Телефон: "}</strong>{"+7 (495) 123-45-67"}</p>
                    <p><strong>{"Адрес: "}</strong>{"Москва, ул. Ленинская Слобода, 26"}</p>
                </div>
                <ContactFormView />
            </div>
            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr 1.4fr;
                    gap: 3rem;
                }
                @media (max-width: 768px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
