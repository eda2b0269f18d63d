use yew::prelude::*;

pub mod config;
pub mod i18n {
    pub mod context;
    pub mod locale;
    pub mod storage;
    pub mod store;
    pub mod translations;
}
pub mod portfolio {
    pub mod catalog;
    pub mod media;
}
pub mod utils {
    pub mod reveal;
    pub mod scroll;
}
pub mod sections {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod portfolio;
    pub mod services;
}
pub mod pages {
    pub mod landing;
}

use i18n::context::LanguageProvider;
use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <LanguageProvider>
            <Landing />
        </LanguageProvider>
    }
}
