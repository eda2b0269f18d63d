use crate::config;
use crate::i18n::context::use_translation;
use crate::utils::reveal::{reveal_classes, use_reveal};
use yew::prelude::*;

struct ContactLink {
    name: &'static str,
    icon: &'static str,
    href: String,
    accent: &'static str,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let t = use_translation();
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), config::reveal::CONTACT);
    let reveal = reveal_classes(revealed);
    let mailto = format!("mailto:{}", config::CONTACT_EMAIL);

    let links = [
        ContactLink {
            name: "Line",
            icon: "fab fa-line",
            href: config::LINE_URL.to_string(),
            accent: "accent-line-green",
        },
        ContactLink {
            name: "Facebook",
            icon: "fab fa-facebook",
            href: config::FACEBOOK_URL.to_string(),
            accent: "accent-facebook",
        },
        ContactLink {
            name: t.contact.phone,
            icon: "fas fa-phone",
            href: format!("tel:{}", config::CONTACT_PHONE),
            accent: "accent-coral",
        },
        ContactLink {
            name: t.contact.email,
            icon: "fas fa-envelope",
            href: mailto.clone(),
            accent: "accent-coral",
        },
    ];

    html! {
        <section id="contact" ref={section_ref} class="section">
            <div class="glow glow-center"></div>
            <div class="container narrow">
                <div class={classes!(reveal, "section-title")}>
                    <h2>{t.contact.title_1}{" "}<span class="gradient-text">{t.contact.title_highlight}</span></h2>
                    <p>{t.contact.subtitle}</p>
                </div>

                <div class={classes!(reveal, "delay-200", "contact-card", "glass")}>
                    <div class="contact-info">
                        <h3>{t.contact.get_in_touch}</h3>
                        <p>{t.contact.desc}</p>
                        <div class="contact-links">
                            { for links.iter().map(|link| html! {
                                <a key={link.icon} href={link.href.clone()} class={classes!("contact-link", link.accent)}>
                                    <i class={link.icon}></i>
                                    <span>{link.name}</span>
                                    <i class="fas fa-chevron-right push-right"></i>
                                </a>
                            }) }
                        </div>
                    </div>

                    <div class="contact-cta">
                        <div class="contact-bubble"><i class="fas fa-comments"></i></div>
                        <h4>{t.contact.start_convo}</h4>
                        <p>{t.contact.response_time}</p>
                        <a href={mailto} class="button button-primary">
                            {t.contact.send_message}
                            <i class="fas fa-arrow-right"></i>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
