use yew::prelude::*;

use crate::effects::accordion::Accordion;

const QUESTIONS: [(&str, &str); 5] = [
    (
        "Сколько стоит разработка сайта?",
        "Стоимость зависит от объёма работ. После короткого брифа мы готовим смету с фиксированной ценой и сроками.",
    ),
    (
        "Какие сроки у типового проекта?",
        "Лендинг занимает от двух недель, корпоративный сайт от шести, мобильное приложение от трёх месяцев.",
    ),
    (
        "Вы работаете по договору?",
        "Да, со всеми клиентами мы заключаем договор с поэтапной оплатой и актами приёмки.",
    ),
    (
        "Что происходит после запуска?",
        "Мы предлагаем техническую поддержку, мониторинг и доработки по отдельному тарифу.",
    ),
    (
        "Можно ли доработать существующий проект?",
        "Да. Сначала мы проводим аудит кода и инфраструктуры, затем предлагаем план изменений.",
    ),
];

#[function_component(FaqList)]
pub fn faq_list() -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <div class="faq-list">
            { for QUESTIONS.iter().enumerate().map(|(index, (question, answer))| {
                let open = accordion.is_expanded(index);
                let onclick = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = *accordion;
                        next.toggle(index);
                        accordion.set(next);
                    })
                };
                html! {
                    <div class={classes!("faq-item", open.then_some("active"))}>
                        <button class="faq-question" onclick={onclick} aria-expanded={open.to_string()}>
                            <span>{*question}</span>
                            <span class="faq-icon">{if open { "−" } else { "+" }}</span>
                        </button>
                        <div class="faq-answer">
                            <p>{*answer}</p>
                        </div>
                    </div>
                }
            }) }
            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    color: rgba(255, 255, 255, 0.75);
                }
                .faq-item.active .faq-answer {
                    max-height: 400px;
                }
                "#}
            </style>
        </div>
    }
}
