use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::page_link::PageLink;
use crate::config::COMPANY_NAME;
use crate::navigation::Section;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. Все права защищены.", year, COMPANY_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_state(|| Local::now().year());

    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <h3>{"NexForge"}</h3>
                    <p>{"Разрабатываем сайты и приложения, которые работают на ваш бизнес."}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Разделы"}</h4>
                    <ul>
                        { for Section::ALL.iter().map(|section| html! {
                            <li key={section.id()}>
                                <PageLink href={section.href()}>{section.label()}</PageLink>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="footer-contacts">
                    <h4>{"Контакты"}</h4>
                    <p>{"hello@nexforge.dev"}</p>
                    <p>{"+7 (495) 123-45-67"}</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{copyright_line(*year)}</p>
            </div>
            <style>
                {r#"
                .footer {
                    padding: 3rem 1.5rem 1.5rem;
                    background: #070a13;
                    color: rgba(255, 255, 255, 0.7);
                }
                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .footer-links ul {
                    list-style: none;
                    padding: 0;
                }
                .footer a {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                }
                .footer-bottom {
                    margin-top: 2rem;
                    text-align: center;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 NexForge Software. Все права защищены."
        );
    }
}
