use crate::config;
use crate::i18n::context::use_translation;
use crate::i18n::translations::ServiceCopy;
use crate::utils::reveal::{reveal_classes, use_reveal};
use yew::prelude::*;

#[function_component(Services)]
pub fn services() -> Html {
    let t = use_translation();
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), config::reveal::SERVICES);

    let items = &t.services.items;
    let services: [(&'static str, &'static str, &'static ServiceCopy); 4] = [
        ("ar", "fas fa-vr-cardboard", &items.ar),
        ("music", "fas fa-music", &items.music),
        ("events", "fas fa-calendar-days", &items.events),
        ("web", "fas fa-code", &items.web),
    ];

    html! {
        <section id="services" ref={section_ref} class="section">
            <div class="glow glow-bottom-right"></div>
            <div class="container">
                <div class={classes!(reveal_classes(revealed), "section-title")}>
                    <h2>{t.services.title_1}{" "}<span class="gradient-text">{t.services.title_highlight}</span></h2>
                    <p>{t.services.subtitle}</p>
                </div>

                <div class="services-grid">
                    { for services.iter().enumerate().map(|(index, (id, icon, copy))| html! {
                        <div
                            key={*id}
                            class={classes!(reveal_classes(revealed), "service-card")}
                            style={format!("transition-delay: {}ms;", index * 100 + 200)}
                        >
                            <div class="service-line"></div>
                            <div class="service-icon"><i class={*icon}></i></div>
                            <h3>{copy.title}</h3>
                            <p>{copy.description}</p>
                            <div class="service-more">
                                <span>{t.services.learn_more}</span>
                                <i class="fas fa-arrow-right"></i>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
