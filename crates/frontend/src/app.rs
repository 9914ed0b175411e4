use crate::domain::a001_team_member::ui::list::TeamMemberList;
use crate::domain::a002_timeline_entry::ui::list::TimelineEntryList;
use crate::domain::a003_project::ui::list::ProjectList;
use crate::domain::a004_testimonial::ui::list::TestimonialList;
use crate::domain::a005_client::ui::list::ClientList;
use crate::layout::admin_shell::AdminShell;
use crate::layout::public_shell::PublicShell;
use crate::layout::ModalService;
use crate::pages::about::AboutPage;
use crate::pages::admin_dashboard::AdminDashboard;
use crate::pages::not_found::NotFound;
use crate::pages::portfolio::PortfolioPage;
use crate::pages::privacy_policy::PrivacyPolicyPage;
use crate::pages::project_details::ProjectDetailsPage;
use crate::pages::testimonials::TestimonialsPage;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ToastService::new());
    provide_context(ModalService::new());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <ParentRoute path=path!("admin") view=AdminShell>
                    <Route path=path!("") view=AdminDashboard />
                    <Route path=path!("team") view=TeamMemberList />
                    <Route path=path!("timeline") view=TimelineEntryList />
                    <Route path=path!("projects") view=ProjectList />
                    <Route path=path!("testimonials") view=TestimonialList />
                    <Route path=path!("clients") view=ClientList />
                </ParentRoute>
                <ParentRoute path=path!("") view=PublicShell>
                    <Route path=path!("") view=AboutPage />
                    <Route path=path!("portfolio") view=PortfolioPage />
                    <Route path=path!("portfolio/:slug") view=ProjectDetailsPage />
                    <Route path=path!("testimonials") view=TestimonialsPage />
                    <Route path=path!("privacy-policy") view=PrivacyPolicyPage />
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost />
    }
}
