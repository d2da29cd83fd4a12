//! Page footer.

use leptos::prelude::*;

use crate::config::SITE_OWNER;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer">
            <div class="container">
                <p>{format!("\u{a9} {year} {SITE_OWNER}. All rights reserved.")}</p>
                <p>"Built with Rust, Leptos & modern CSS"</p>
            </div>
        </footer>
    }
}
