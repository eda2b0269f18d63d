use crate::config;
use crate::i18n::context::use_translation;
use web_sys::js_sys::Date;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let t = use_translation();
    let year = Date::new_0().get_full_year();

    let solutions = [
        t.services.items.ar.title,
        t.services.items.music.title,
        t.services.items.events.title,
        t.services.items.web.title,
    ];
    let company = [
        (t.footer.about_us, "#about"),
        (t.nav.portfolio, "#portfolio"),
        (t.nav.contact, "#contact"),
    ];
    let socials = [
        ("Facebook", "fab fa-facebook-f", config::FACEBOOK_URL),
        ("Line", "fab fa-line", config::LINE_URL),
    ];

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <a href="/" class="brand">
                            <img src={config::asset_url("/images/logo.png")} alt="VMI Media" width="40" height="40" />
                            <span class="brand-name">{"VMI "}<span class="gradient-text">{"Media"}</span></span>
                        </a>
                        <p>{t.footer.tagline}</p>
                        <div class="socials">
                            { for socials.iter().map(|(name, icon, href)| html! {
                                <a key={*name} href={*href} aria-label={*name}><i class={*icon}></i></a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h4>{t.footer.solutions_heading}</h4>
                        <ul>
                            { for solutions.iter().map(|label| html! {
                                <li key={*label}><a href="#services">{*label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{t.footer.company_heading}</h4>
                        <ul>
                            { for company.iter().map(|(label, href)| html! {
                                <li key={*href}><a href={*href}>{*label}</a></li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} VMI Media. {}", year, t.footer.rights)}</p>
                    <p>{t.about.company_name}</p>
                </div>
            </div>
        </footer>
    }
}
