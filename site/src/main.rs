// Portfolio site - Leptos 0.8 CSR edition

mod api;
mod config;
mod fetch;
mod models;
mod observe;
mod sections;
mod theme;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    provide_context(api::ApiClient::new());

    // The nav only tracks sections that are actually available. Today that is
    // a fixed list; it still flows through a signal so the observer lifecycle
    // in Navbar handles a changing set.
    let (sections, set_sections) = signal(Vec::<SectionLink>::new());
    Effect::new(move || {
        set_sections.try_set(NAV_SECTIONS.to_vec());
    });

    view! {
        <div class="app">
            <Navbar sections=sections />
            <main>
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Experience />
                <Education />
                <Contact />
                <SocialLinks />
            </main>
            <Footer />
        </div>
    }
}
