use crate::config;
use crate::i18n::context::use_translation;
use crate::utils::reveal::{reveal_classes, use_reveal};
use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    let t = use_translation();
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), config::reveal::ABOUT);
    let reveal = reveal_classes(revealed);

    let stats = [
        ("50+", t.about.stat_projects),
        ("30+", t.about.stat_clients),
        ("3+", t.about.stat_years),
    ];

    html! {
        <section id="about" ref={section_ref} class="section">
            <div class="glow glow-left"></div>
            <div class="container">
                <div class={classes!(reveal, "section-title")}>
                    <h2>{t.about.title_1}{" "}<span class="gradient-text">{t.about.title_highlight}</span></h2>
                    <p>{t.about.subtitle}</p>
                </div>

                <div class="about-grid">
                    <div class={classes!(reveal, "from-left", "delay-200")}>
                        <div class="founder-card glass">
                            <img src={config::asset_url("/Founder/dul.jpg")} alt={t.about.founder_alt} loading="lazy" />
                            <div class="founder-badge glass">
                                <h3>{t.about.team_name}</h3>
                                <p>{t.about.team_role}</p>
                            </div>
                        </div>
                    </div>

                    <div class={classes!(reveal, "from-right", "delay-300")}>
                        <div class="story-card glass">
                            <div class="story-label">
                                <span class="accent-line"></span>
                                <span>{t.about.story_label}</span>
                            </div>
                            <h3>{t.about.company_name}</h3>
                            <p>{t.about.paragraph_1}</p>
                            <p>{t.about.paragraph_2}</p>
                            <p>{t.about.paragraph_3}</p>

                            <div class="stats">
                                { for stats.iter().map(|(value, label)| html! {
                                    <div key={*label} class="stat">
                                        <div class="stat-value gradient-text">{*value}</div>
                                        <div class="stat-label">{*label}</div>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
