use yew::prelude::*;

use crate::components::faq::FaqList;

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <h2 class="section-title">{"Частые вопросы"}</h2>
            <FaqList />
        </div>
    }
}
