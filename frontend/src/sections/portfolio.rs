use crate::config;
use crate::i18n::context::use_translation;
use crate::portfolio::catalog::{filter, CategoryFilter, MediaKind, PortfolioItem, CATALOG};
use crate::portfolio::media::{play_preview, stop_preview};
use crate::utils::reveal::{reveal_classes, use_reveal};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct PortfolioCardProps {
    item: &'static PortfolioItem,
    index: usize,
    revealed: bool,
}

#[function_component(PortfolioCard)]
fn portfolio_card(props: &PortfolioCardProps) -> Html {
    let t = use_translation();
    let video_ref = use_node_ref();
    let item = props.item;
    let is_video = item.kind == MediaKind::Video;

    let onmouseenter = {
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                play_preview(&video);
            }
        })
    };
    let onmouseleave = {
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                stop_preview(&video);
            }
        })
    };

    let media = match item.kind {
        MediaKind::Video => html! {
            <video ref={video_ref} src={config::asset_url(item.src)} muted=true loop=true playsinline=true preload="metadata"></video>
        },
        MediaKind::Image => html! {
            <img src={config::asset_url(item.src)} alt={item.title} loading="lazy" />
        },
    };

    html! {
        <div
            class={classes!(reveal_classes(props.revealed), "portfolio-card")}
            style={format!("transition-delay: {}ms;", props.index * 50)}
            onmouseenter={is_video.then_some(onmouseenter)}
            onmouseleave={is_video.then_some(onmouseleave)}
        >
            <div class="portfolio-media">{media}</div>
            <div class="portfolio-shade"></div>
            <div class="portfolio-info">
                <span class="portfolio-category">{item.category.label(&t.portfolio.categories)}</span>
                <h3>{item.title}</h3>
                <p>{item.description}</p>
                <button class="portfolio-view">
                    <span>{t.portfolio.view_project}</span>
                    <i class="fas fa-arrow-right"></i>
                </button>
            </div>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let t = use_translation();
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), config::reveal::PORTFOLIO);
    let reveal = reveal_classes(revealed);
    let active = use_state_eq(CategoryFilter::default);

    let shown = filter(&CATALOG, *active);

    html! {
        <section id="portfolio" ref={section_ref} class="section section-dark">
            <div class="glow glow-left"></div>
            <div class="glow glow-bottom-right"></div>
            <div class="container">
                <div class={classes!(reveal, "section-title")}>
                    <h2>{t.portfolio.title_1}{" "}<span class="gradient-text">{t.portfolio.title_highlight}</span></h2>
                    <p>{t.portfolio.subtitle}</p>
                </div>

                <div class={classes!(reveal, "delay-200", "filter-bar")}>
                    { for CategoryFilter::options().map(|option| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(option))
                        };
                        html! {
                            <button
                                key={option.label(&t.portfolio.categories)}
                                class={classes!("filter-button", (*active == option).then_some("active"))}
                                {onclick}
                            >
                                {option.label(&t.portfolio.categories)}
                            </button>
                        }
                    }) }
                </div>

                if shown.is_empty() {
                    <p class={classes!(reveal, "portfolio-empty")}>{t.portfolio.empty}</p>
                } else {
                    <div class="portfolio-grid">
                        { for shown.into_iter().enumerate().map(|(index, item)| html! {
                            <PortfolioCard key={item.id} {item} {index} {revealed} />
                        }) }
                    </div>
                }

                <div class={classes!(reveal, "delay-500", "portfolio-more")}>
                    <button class="button button-ghost button-large">
                        {t.portfolio.view_all}
                        <i class="fas fa-arrow-right"></i>
                    </button>
                </div>
            </div>
        </section>
    }
}
