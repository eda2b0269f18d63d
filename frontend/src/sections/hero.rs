use crate::i18n::context::use_translation;
use crate::utils::reveal::{reveal_classes, use_reveal_on_mount};
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    let t = use_translation();
    let revealed = use_reveal_on_mount();

    html! {
        <section class="hero">
            <div class="hero-background">
                <div class="glow glow-left pulse"></div>
                <div class="glow glow-right pulse"></div>
                <div class="hero-grid"></div>
            </div>

            <div class="container hero-content">
                <div class={classes!(reveal_classes(revealed), "slow")}>
                    <h1 class="hero-title">
                        {t.hero.headline_lead}{" "}
                        <span class="gradient-text">{t.hero.headline_highlight}</span>
                        <br/>
                        {t.hero.headline_tail}
                    </h1>
                    <p class="hero-subtitle">{t.hero.subtitle}</p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="button button-primary button-large">
                            {t.hero.cta_contact}
                            <i class="fas fa-arrow-right"></i>
                        </a>
                        <a href="#portfolio" class="button button-ghost button-large">
                            {t.hero.cta_portfolio}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
