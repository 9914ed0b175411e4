use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/">"Back to the home page"</A>
        </section>
    }
}
