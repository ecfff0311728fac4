use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::contact::Contact;
use super::footer::Footer;
use super::hero::Hero;
use super::navigation::Navigation;
use super::projects::Projects;
use super::skills::Skills;
use crate::content::{site_content, SiteContent};

/// The whole site: every section in scroll order.
#[component]
pub fn HomePage() -> impl IntoView {
    match site_content() {
        Ok(content) => {
            provide_context::<&'static SiteContent>(content);
            Either::Left(view! {
                <Title text="Portfolio" />
                <Navigation />
                <main class="overflow-x-hidden">
                    <Hero />
                    <Projects />
                    <Skills />
                    <Contact />
                </main>
                <Footer />
            })
        }
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <main class="min-h-screen flex items-center justify-center">
                    <pre class="text-electric-pink whitespace-pre-wrap">{e.to_string()}</pre>
                </main>
            })
        }
    }
}
