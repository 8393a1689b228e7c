use crate::i18n::{use_locale, Localized};
use api::{
    BlockReason, ContactDraft, ContactField, ContactGate, ContactRequest, GateConfig, GateState,
    SubmissionContext, MESSAGE_MAX_CHARS,
};
use chrono::Utc;
use dioxus::prelude::*;

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

struct FormText {
    heading: &'static str,
    first_name_label: &'static str,
    first_name_ph: &'static str,
    last_name_label: &'static str,
    last_name_ph: &'static str,
    email_label: &'static str,
    email_hint: &'static str,
    email_ph: &'static str,
    message_label: &'static str,
    message_ph: &'static str,
    submit: &'static str,
    submitting: &'static str,
    subject: &'static str,
    success_title: &'static str,
    success_subtitle: &'static str,
    blocked_generic: &'static str,
    blocked_too_fast: &'static str,
    blocked_links: &'static str,
    blocked_content: &'static str,
    delivery_failed: &'static str,
}

static TEXT: Localized<FormText> = Localized {
    tr: FormText {
        heading: "Bizimle iletişime geçin",
        first_name_label: "Ad",
        first_name_ph: "Adınız",
        last_name_label: "Soyad",
        last_name_ph: "Soyadınız",
        email_label: "E‑posta adresi",
        email_hint: "Gizli tutulur",
        email_ph: "ornek@sirketiniz.com",
        message_label: "Mesaj",
        message_ph: "Kısaca ihtiyacınızı anlatın…",
        submit: "Gönder",
        submitting: "Gönderiliyor…",
        subject: "Origami İletişim Formu",
        success_title: "Mesajınız gönderildi!",
        success_subtitle: "En kısa sürede dönüş yapacağız.",
        blocked_generic: "İşlem başarısız.",
        blocked_too_fast: "Gönderim çok hızlı yapıldı. Lütfen tekrar deneyin.",
        blocked_links: "Çok fazla link tespit edildi.",
        blocked_content: "Mesaj içeriği uygun değil.",
        delivery_failed: "Mesajınız gönderilemedi:",
    },
    en: FormText {
        heading: "Get in touch",
        first_name_label: "First name",
        first_name_ph: "Your first name",
        last_name_label: "Last name",
        last_name_ph: "Your last name",
        email_label: "Email address",
        email_hint: "Kept private",
        email_ph: "you@company.com",
        message_label: "Message",
        message_ph: "Briefly describe what you need…",
        submit: "Send",
        submitting: "Sending…",
        subject: "Origami Contact Form",
        success_title: "Your message has been sent!",
        success_subtitle: "We will get back to you shortly.",
        blocked_generic: "Submission failed.",
        blocked_too_fast: "The form was sent too quickly. Please try again.",
        blocked_links: "Too many links detected.",
        blocked_content: "The message content is not acceptable.",
        delivery_failed: "Your message could not be sent:",
    },
    ru: FormText {
        heading: "Свяжитесь с нами",
        first_name_label: "Имя",
        first_name_ph: "Ваше имя",
        last_name_label: "Фамилия",
        last_name_ph: "Ваша фамилия",
        email_label: "Эл. почта",
        email_hint: "Не публикуется",
        email_ph: "you@company.com",
        message_label: "Сообщение",
        message_ph: "Кратко опишите вашу задачу…",
        submit: "Отправить",
        submitting: "Отправляется…",
        subject: "Форма контактов Origami",
        success_title: "Ваше сообщение отправлено!",
        success_subtitle: "Мы свяжемся с вами в ближайшее время.",
        blocked_generic: "Не удалось отправить.",
        blocked_too_fast: "Форма отправлена слишком быстро. Попробуйте ещё раз.",
        blocked_links: "Обнаружено слишком много ссылок.",
        blocked_content: "Содержимое сообщения недопустимо.",
        delivery_failed: "Не удалось отправить сообщение:",
    },
};

fn block_message(text: &FormText, reason: BlockReason) -> &'static str {
    match reason {
        // Bots get nothing specific.
        BlockReason::Honeypot => text.blocked_generic,
        BlockReason::TooFast => text.blocked_too_fast,
        BlockReason::TooManyLinks => text.blocked_links,
        BlockReason::SpamContent => text.blocked_content,
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Delivery {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

fn apply_edit(
    mut draft: Signal<ContactDraft>,
    mut gate_state: Signal<GateState>,
    field: ContactField,
    value: String,
) {
    draft.with_mut(|d| d.set_field(field, value));
    let next = gate_state().on_edit();
    gate_state.set(next);
}

fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(path) = web_sys::window().and_then(|w| w.location().pathname().ok()) {
            return path;
        }
    }
    "/".to_string()
}

/// Contact form guarded by the honeypot / time-trap / content gate, checked
/// here and again on the server.
#[component]
pub fn ContactForm() -> Element {
    let locale = use_locale();
    let text = TEXT.get(locale());

    let mut draft = use_signal(|| ContactDraft::new(Utc::now()));
    let mut gate_state = use_signal(GateState::default);
    let mut delivery = use_signal(|| Delivery::Idle);

    // Server thresholds when reachable, built-in defaults otherwise.
    let settings = use_resource(|| async move { api::contact_settings().await });

    // The server times the form from this token, so the local clock starts
    // over once it arrives.
    let mut form_token = use_resource(|| async move { api::contact_form_token().await });
    use_effect(move || {
        if let Some(Ok(_)) = &*form_token.read() {
            draft.with_mut(|d| d.restart_clock(Utc::now()));
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if delivery() == Delivery::Sending {
            return;
        }

        let config = match &*settings.read() {
            Some(Ok(cfg)) => cfg.clone(),
            _ => GateConfig::default(),
        };
        let locale = locale();
        let context = SubmissionContext {
            subject: TEXT.get(locale).subject.to_string(),
            from_path: current_path(),
            locale,
        };

        let outcome = ContactGate::new(config).evaluate(&draft.read(), Utc::now(), context.clone());
        gate_state.set(GateState::from_outcome(&outcome));
        if outcome.is_err() {
            return;
        }

        let token = match &*form_token.read() {
            Some(Ok(token)) => token.clone(),
            _ => String::new(),
        };
        let request = ContactRequest::new(&draft.read(), token, context);

        delivery.set(Delivery::Sending);
        spawn(async move {
            match api::submit_contact(request).await {
                Ok(()) => {
                    draft.with_mut(|d| d.reset(Utc::now()));
                    form_token.restart();
                    delivery.set(Delivery::Sent);
                }
                Err(e) => {
                    delivery.set(Delivery::Failed(e.to_string()));
                    gate_state.set(GateState::Editing);
                }
            }
        });
    };

    if delivery() == Delivery::Sent {
        return rsx! {
            document::Link { rel: "stylesheet", href: CONTACT_CSS }
            section { class: "contact_section",
                div { class: "contact_success",
                    div { class: "contact_success_mark", "✓" }
                    p { class: "contact_success_title", {text.success_title} }
                    p { class: "hint", {text.success_subtitle} }
                }
            }
        };
    }

    let sending = delivery() == Delivery::Sending;
    let current = draft.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_CSS }

        section { class: "contact_section",
            h2 { class: "contact_heading", {text.heading} }

            form { class: "contact_form", novalidate: true, autocomplete: "off", onsubmit: onsubmit,
                div { class: "field",
                    label { r#for: "firstName", {text.first_name_label} }
                    input {
                        id: "firstName",
                        name: "firstName",
                        r#type: "text",
                        required: true,
                        placeholder: text.first_name_ph,
                        value: "{current.first_name}",
                        oninput: move |e| apply_edit(draft, gate_state, ContactField::FirstName, e.value()),
                    }
                }

                div { class: "field",
                    label { r#for: "lastName", {text.last_name_label} }
                    input {
                        id: "lastName",
                        name: "lastName",
                        r#type: "text",
                        required: true,
                        placeholder: text.last_name_ph,
                        value: "{current.last_name}",
                        oninput: move |e| apply_edit(draft, gate_state, ContactField::LastName, e.value()),
                    }
                }

                div { class: "field",
                    div { class: "field_header",
                        label { r#for: "email", {text.email_label} }
                        span { class: "hint", {text.email_hint} }
                    }
                    input {
                        id: "email",
                        name: "email",
                        r#type: "email",
                        required: true,
                        placeholder: text.email_ph,
                        value: "{current.email}",
                        oninput: move |e| apply_edit(draft, gate_state, ContactField::Email, e.value()),
                    }
                }

                div { class: "field",
                    div { class: "field_header",
                        label { r#for: "message", {text.message_label} }
                        span { class: "hint counter", "{current.message_len()}/{MESSAGE_MAX_CHARS}" }
                    }
                    textarea {
                        id: "message",
                        name: "message",
                        rows: 4,
                        required: true,
                        maxlength: "{MESSAGE_MAX_CHARS}",
                        placeholder: text.message_ph,
                        value: "{current.message}",
                        oninput: move |e| apply_edit(draft, gate_state, ContactField::Message, e.value()),
                    }
                }

                // Trap field: off-screen, out of tab order, ignored by humans.
                div { class: "trap_field", "aria-hidden": "true",
                    label { r#for: "company", "Company" }
                    input {
                        id: "company",
                        name: "company",
                        r#type: "text",
                        tabindex: "-1",
                        autocomplete: "off",
                        value: "{current.honeypot}",
                        oninput: move |e| apply_edit(draft, gate_state, ContactField::Honeypot, e.value()),
                    }
                }

                if let GateState::Blocked(reason) = gate_state() {
                    p { class: "error", role: "alert", {block_message(text, reason)} }
                }
                if let Delivery::Failed(err) = delivery() {
                    p { class: "error", role: "alert", {format!("{} {err}", text.delivery_failed)} }
                }

                div { class: "contact_actions",
                    button { class: "btn primary", r#type: "submit", disabled: sending,
                        if sending { {text.submitting} } else { {text.submit} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Locale;

    #[test]
    fn honeypot_reason_is_generic_in_every_locale() {
        for locale in Locale::ALL {
            let text = TEXT.get(locale);
            let msg = block_message(text, BlockReason::Honeypot);
            assert_eq!(msg, text.blocked_generic);
            assert_ne!(msg, block_message(text, BlockReason::SpamContent));
        }
    }

    #[test]
    fn subjects_are_localized() {
        assert_eq!(TEXT.get(Locale::Tr).subject, "Origami İletişim Formu");
        assert_eq!(TEXT.get(Locale::En).subject, "Origami Contact Form");
        assert_eq!(TEXT.get(Locale::Ru).subject, "Форма контактов Origami");
    }

    #[test]
    fn path_defaults_to_root_off_the_browser() {
        assert_eq!(current_path(), "/");
    }
}
