use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::{Outlet, A};

/// Пункты бокового меню: (путь, иконка, подпись)
const MENU: &[(&str, &str, &str)] = &[
    ("/admin", "dashboard", "Dashboard"),
    ("/admin/team", "team", "Team"),
    ("/admin/timeline", "timeline", "Timeline"),
    ("/admin/projects", "projects", "Projects"),
    ("/admin/testimonials", "testimonials", "Testimonials"),
    ("/admin/clients", "clients", "Clients"),
];

/// Каркас админки: боковое меню слева, страница справа
#[component]
pub fn AdminShell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <aside class="app-sidebar">
                <div class="app-sidebar__title">"Admin"</div>
                <nav>
                    {MENU
                        .iter()
                        .map(|(href, icon_name, label)| view! {
                            <A href=*href attr:class="app-sidebar__item">
                                {icon(icon_name)}
                                <span>{*label}</span>
                            </A>
                        })
                        .collect_view()}
                </nav>
                <A href="/" attr:class="app-sidebar__item app-sidebar__item--site">"← View site"</A>
            </aside>
            <div class="app-main">
                <Outlet />
            </div>
        </div>
    }
}
