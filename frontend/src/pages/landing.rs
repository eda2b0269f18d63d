use crate::sections::about::About;
use crate::sections::contact::Contact;
use crate::sections::footer::Footer;
use crate::sections::header::Header;
use crate::sections::hero::Hero;
use crate::sections::portfolio::Portfolio;
use crate::sections::services::Services;
use yew::prelude::*;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing-page">
            <Header />
            <Hero />
            <About />
            <Services />
            <Portfolio />
            <Contact />
            <Footer />
        </main>
    }
}
