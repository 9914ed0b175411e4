use leptos::prelude::*;
use leptos_router::components::{Outlet, A};

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "About"),
    ("/portfolio", "Portfolio"),
    ("/testimonials", "Testimonials"),
];

/// Каркас публичного сайта: навигация, контент, подвал
#[component]
pub fn PublicShell() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <div class="site">
            <header class="site-header">
                <A href="/" attr:class="site-header__brand">"Northbeam Consulting"</A>
                <nav class="site-header__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <A href=*href attr:class="site-header__link">{*label}</A>
                        })
                        .collect_view()}
                </nav>
            </header>

            <main class="site-main">
                <Outlet />
            </main>

            <footer class="site-footer">
                <span>{format!("© {} Northbeam Consulting", year)}</span>
                <A href="/privacy-policy" attr:class="site-footer__link">"Privacy Policy"</A>
            </footer>
        </div>
    }
}
