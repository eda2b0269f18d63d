use crate::config;
use crate::i18n::context::{use_language, use_translation};
use crate::i18n::locale::Locale;
use crate::utils::scroll::{use_body_scroll_lock, use_scrolled_past};
use yew::prelude::*;

struct NavItem {
    label: &'static str,
    href: &'static str,
}

#[derive(Properties, PartialEq)]
struct LanguageSwitchProps {
    current: Locale,
    on_select: Callback<Locale>,
    /// Full language names instead of tags (mobile drawer).
    #[prop_or_default]
    long_labels: bool,
}

#[function_component(LanguageSwitch)]
fn language_switch(props: &LanguageSwitchProps) -> Html {
    let button = |locale: Locale| {
        let label = match (locale, props.long_labels) {
            (Locale::Thai, false) => "TH",
            (Locale::English, false) => "EN",
            (Locale::Thai, true) => "ไทย",
            (Locale::English, true) => "English",
        };
        let active = props.current == locale;
        let onclick = {
            let on_select = props.on_select.clone();
            Callback::from(move |_: MouseEvent| {
                if !active {
                    on_select.emit(locale);
                }
            })
        };
        html! {
            <button class={classes!("lang-button", active.then_some("active"))} {onclick}>
                {label}
            </button>
        }
    };

    html! {
        <div class="lang-switch">
            { button(Locale::Thai) }
            { button(Locale::English) }
        </div>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let language = use_language();
    let t = use_translation();
    let scrolled = use_scrolled_past(config::HEADER_SCROLL_OFFSET);
    let menu_open = use_state_eq(|| false);
    use_body_scroll_lock(*menu_open);

    let nav_items = [
        NavItem { label: t.nav.solutions, href: "#services" },
        NavItem { label: t.nav.portfolio, href: "#portfolio" },
        NavItem { label: t.nav.about, href: "#about" },
        NavItem { label: t.nav.contact, href: "#contact" },
    ];

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <>
            <header class={classes!("site-header", scrolled.then_some("scrolled"))}>
                <nav class="container nav-bar">
                    <a href="/" class="brand">
                        <img src={config::asset_url("/images/logo.png")} alt="VMI Media" width="44" height="44" />
                        <span class="brand-name">{"VMI "}<span class="gradient-text">{"Media"}</span></span>
                    </a>

                    <ul class="nav-links desktop-only">
                        { for nav_items.iter().map(|item| html! {
                            <li key={item.href}><a href={item.href}>{item.label}</a></li>
                        }) }
                    </ul>

                    <div class="nav-actions desktop-only">
                        <LanguageSwitch current={language.locale} on_select={language.set_locale.clone()} />
                        <a href="#contact" class="button button-primary">{t.nav.touch}</a>
                    </div>

                    <button class="menu-button mobile-only" onclick={toggle_menu} aria-label={t.nav.open_menu}>
                        <i class={if *menu_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                    </button>
                </nav>
            </header>

            <div
                class={classes!("menu-overlay", menu_open.then_some("open"))}
                onclick={close_menu.clone()}
            />

            <aside class={classes!("menu-drawer", menu_open.then_some("open"))}>
                <div class="drawer-header">
                    <a href="/" class="brand" onclick={close_menu.clone()}>
                        <img src={config::asset_url("/images/logo.png")} alt="VMI Media" width="36" height="36" />
                        <span class="brand-name">{"VMI "}<span class="gradient-text">{"Media"}</span></span>
                    </a>
                    <button class="menu-button" onclick={close_menu.clone()} aria-label={t.nav.close_menu}>
                        <i class="fas fa-xmark"></i>
                    </button>
                </div>

                <ul class="drawer-links">
                    { for nav_items.iter().enumerate().map(|(index, item)| html! {
                        <li
                            key={item.href}
                            style={format!("transition-delay: {}ms;", if *menu_open { index * 75 + 100 } else { 0 })}
                        >
                            <a href={item.href} onclick={close_menu.clone()}>
                                <span>{item.label}</span>
                                <i class="fas fa-chevron-right"></i>
                            </a>
                        </li>
                    }) }
                </ul>

                <div class="drawer-footer">
                    <LanguageSwitch current={language.locale} on_select={language.set_locale.clone()} long_labels=true />
                    <a href="#contact" class="button button-primary button-block" onclick={close_menu}>
                        {t.nav.touch}
                    </a>
                </div>
            </aside>
        </>
    }
}
