use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::SUBMIT_DELAY_MS;
use crate::contact::form::{ContactForm, FieldStatus, SubmitOutcome};
use crate::contact::validation::Field;
use crate::effects::scroll::reveal_and_focus;

const CONFIRMATION: &str = "Спасибо за обращение! Мы свяжемся с вами в ближайшее время.";
const SUBMIT_LABEL: &str = "Отправить заявку";
const SENDING_LABEL: &str = "Отправка...";

const SERVICES: [(&str, &str); 5] = [
    ("web", "Веб-разработка"),
    ("mobile", "Мобильные приложения"),
    ("design", "UI/UX дизайн"),
    ("consulting", "IT-консалтинг"),
    ("support", "Поддержка и сопровождение"),
];

fn control_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn show_confirmation() {
    if let Some(window) = window() {
        if let Err(e) = window.alert_with_message(CONFIRMATION) {
            warn!("Could not show confirmation: {:?}", e);
        }
    }
}

#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let form = use_state(ContactForm::default);
    // Pending simulated send. Dropping it (unmount) cancels the send.
    let send_timer = use_mut_ref(|| None::<Timeout>);

    let on_change = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.input(field, control_value(&e));
            form.set(next);
        })
    };

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.input(field, control_value(&e));
            form.set(next);
        })
    };

    let on_blur = |field: Field| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.blur(field);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let send_timer = send_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                SubmitOutcome::Sending => {
                    info!("Contact form valid, sending");
                    match serde_json::to_string(&next.request()) {
                        Ok(body) => debug!("Contact request: {}", body),
                        Err(e) => warn!("Could not serialize contact request: {}", e),
                    }
                    let done = form.clone();
                    let mut sent = next.clone();
                    *send_timer.borrow_mut() = Some(Timeout::new(SUBMIT_DELAY_MS, move || {
                        show_confirmation();
                        sent.finish_sending();
                        done.set(sent);
                        info!("Contact request sent");
                    }));
                    form.set(next);
                }
                SubmitOutcome::Rejected { first_invalid } => {
                    info!("Contact form rejected, invalid fields: {:?}", next.invalid_fields());
                    form.set(next);
                    reveal_and_focus(&first_invalid.input_id());
                }
                SubmitOutcome::Busy => debug!("Submit ignored, already sending"),
            }
        })
    };

    let status_class = |field: Field| match form.status(field) {
        FieldStatus::Valid => Some("valid"),
        FieldStatus::Invalid(_) => Some("invalid"),
        FieldStatus::Unchecked => None,
    };

    let error_span = |field: Field| {
        html! { <span class="error-message">{form.error_text(field)}</span> }
    };

    let text_input = |field: Field, kind: &'static str, label: &'static str, placeholder: &'static str| {
        html! {
            <div class="form-group">
                <label for={field.input_id()}>{label}</label>
                <input
                    id={field.input_id()}
                    type={kind}
                    name={field.name()}
                    class={classes!(status_class(field))}
                    placeholder={placeholder}
                    required={field.is_required()}
                    value={form.value(field).to_string()}
                    oninput={on_input(field)}
                    onblur={on_blur(field)}
                />
                {error_span(field)}
            </div>
        }
    };

    let sending = form.is_sending();

    html! {
        <form id="contactForm" class="contact-form" novalidate=true onsubmit={onsubmit}>
            {text_input(Field::Name, "text", "Имя *", "Как к вам обращаться")}
            {text_input(Field::Email, "email", "Email *", "you@example.com")}
            {text_input(Field::Phone, "tel", "Телефон", "+7 (999) 123-45-67")}

            <div class="form-group">
                <label for={Field::Service.input_id()}>{"Услуга *"}</label>
                <select
                    id={Field::Service.input_id()}
                    name={Field::Service.name()}
                    class={classes!(status_class(Field::Service))}
                    required=true
                    onchange={on_change(Field::Service)}
                    onblur={on_blur(Field::Service)}
                >
                    <option value="" selected={form.value(Field::Service).is_empty()}>
                        {"Выберите услугу"}
                    </option>
                    { for SERVICES.iter().map(|(value, label)| html! {
                        <option value={*value} selected={form.value(Field::Service) == *value}>
                            {*label}
                        </option>
                    }) }
                </select>
                {error_span(Field::Service)}
            </div>

            <div class="form-group">
                <label for={Field::Message.input_id()}>{"Сообщение *"}</label>
                <textarea
                    id={Field::Message.input_id()}
                    name={Field::Message.name()}
                    class={classes!(status_class(Field::Message))}
                    rows="5"
                    placeholder="Расскажите о вашем проекте"
                    required=true
                    value={form.value(Field::Message).to_string()}
                    oninput={on_input(Field::Message)}
                    onblur={on_blur(Field::Message)}
                />
                {error_span(Field::Message)}
            </div>

            <button type="submit" class="btn-primary" disabled={sending}>
                {if sending { SENDING_LABEL } else { SUBMIT_LABEL }}
            </button>

            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }
                .form-group input,
                .form-group select,
                .form-group textarea {
                    padding: 0.8rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 8px;
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                    font: inherit;
                }
                .form-group .valid {
                    border-color: #3ecf8e;
                }
                .form-group .invalid {
                    border-color: #ff5c5c;
                }
                .error-message {
                    min-height: 1.1em;
                    font-size: 0.85rem;
                    color: #ff5c5c;
                }
                "#}
            </style>
        </form>
    }
}
