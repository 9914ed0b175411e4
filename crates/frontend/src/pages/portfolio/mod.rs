mod state;

use state::PortfolioSelection;

use crate::domain::a003_project::api;
use crate::shared::api_utils::asset_url;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::query_state::{current_params, replace_query};
use contracts::domain::a003_project::aggregate::Project;
use contracts::shared::api::ProjectQuery;
use contracts::shared::project_counts::ProjectCounts;
use contracts::shared::taxonomy::taxonomy;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let selection = RwSignal::new(PortfolioSelection::from_params(&current_params()));

    // все опубликованные проекты загружаются один раз, фильтр работает локально
    leptos::task::spawn_local(async move {
        match api::fetch_published(&ProjectQuery::default()).await {
            Ok(list) => items.set(list),
            Err(e) => error.set(Some(e)),
        }
        loading.set(false);
    });

    Effect::new(move |_| {
        let params = selection.with(|s| s.to_params());
        replace_query(&serde_qs::to_string(&params).unwrap_or_default());
    });

    let counts = Memo::new(move |_| items.with(|list| ProjectCounts::compute(list, taxonomy())));
    let page = Memo::new(move |_| {
        let sel = selection.get();
        items.with(|list| sel.view(list, taxonomy()))
    });

    let sub_services = move || {
        selection
            .with(|s| s.category.clone())
            .and_then(|slug| taxonomy().find_by_slug(&slug).cloned())
            .map(|c| c.sub_services)
            .unwrap_or_default()
    };

    view! {
        <section class="portfolio">
            <header class="section-header">
                <h1>"Our work"</h1>
                <p>"Selected engagements across technology, consulting and design."</p>
            </header>

            <div class="chip-row">
                <button
                    class="chip"
                    class:chip--active=move || selection.with(|s| s.is_selected(None))
                    on:click=move |_| selection.update(|s| s.select_category(None))
                >
                    {move || format!("All ({})", counts.with(|c| c.all()))}
                </button>
                {taxonomy()
                    .categories()
                    .iter()
                    .map(|category| {
                        let slug = category.slug.clone();
                        let slug_for_check = slug.clone();
                        let slug_for_count = slug.clone();
                        let name = category.category.clone();
                        view! {
                            <button
                                class="chip"
                                class:chip--active=move || selection.with(|s| s.is_selected(Some(&slug_for_check)))
                                on:click=move |_| selection.update(|s| s.select_category(Some(slug.clone())))
                            >
                                {move || format!("{} ({})", name, counts.with(|c| c.get(&slug_for_count)))}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || !sub_services().is_empty()>
                <div class="chip-row chip-row--secondary">
                    {move || {
                        sub_services()
                            .into_iter()
                            .map(|sub| {
                                let slug = sub.slug.clone();
                                let slug_for_check = sub.slug.clone();
                                view! {
                                    <button
                                        class="chip chip--small"
                                        class:chip--active=move || {
                                            selection.with(|s| s.sub.as_deref() == Some(slug_for_check.as_str()))
                                        }
                                        on:click=move |_| selection.update(|s| s.toggle_sub(slug.clone()))
                                    >
                                        {sub.name}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <div class="project-grid">
                    {move || page.get().items.into_iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
                </div>
                <Show when=move || page.with(|p| p.total_count == 0)>
                    <div class="table__empty">"No projects in this category yet"</div>
                </Show>
                <PaginationControls
                    current_page=Signal::derive(move || page.with(|p| p.current_page))
                    total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                    total_count=Signal::derive(move || page.with(|p| p.total_count))
                    on_page_change=Callback::new(move |p| selection.update(|s| s.set_page(p)))
                />
            </Show>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/portfolio/{}", project.slug);
    let services = project
        .categories
        .iter()
        .map(|a| a.sub_category.clone())
        .collect::<Vec<_>>();

    view! {
        <article class="project-card" class:project-card--featured=project.featured>
            {project.image_url.as_deref().map(|url| view! {
                <img class="project-card__image" src=asset_url(url) alt=project.title.clone() />
            })}
            <div class="project-card__body">
                <h3 class="project-card__title">
                    <A href=href>{project.title.clone()}</A>
                </h3>
                {project.client_name.clone().map(|c| view! { <div class="project-card__client">{c}</div> })}
                <p class="project-card__summary">{project.summary.clone()}</p>
                <div class="project-card__tags">
                    {services
                        .into_iter()
                        .map(|s| view! { <Badge appearance=BadgeAppearance::Tint>{s}</Badge> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
