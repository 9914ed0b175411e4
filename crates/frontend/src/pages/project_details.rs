use crate::domain::a003_project::api;
use crate::shared::api_utils::asset_url;
use contracts::domain::a003_project::aggregate::Project;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// Страница кейса по slug: `/portfolio/:slug`
#[component]
pub fn ProjectDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let project = RwSignal::new(None::<Project>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    Effect::new(move |_| {
        let Some(slug) = params.with(|p| p.get("slug")) else {
            return;
        };
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::fetch_published_by_slug(&slug).await {
                Ok(p) => project.set(Some(p)),
                Err(e) => {
                    log::warn!("project '{}' not loaded: {}", slug, e);
                    project.set(None);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <section class="project-details">
            <A href="/portfolio" attr:class="back-link">"← All projects"</A>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                {move || error.get().map(|e| view! {
                    <div class="warning-box">"Project not found. "{e}</div>
                })}
                {move || project.get().map(|p| view! { <ProjectBody project=p /> })}
            </Show>
        </section>
    }
}

#[component]
fn ProjectBody(project: Project) -> impl IntoView {
    let pairs = project
        .categories
        .iter()
        .map(|a| format!("{} / {}", a.category, a.sub_category))
        .collect::<Vec<_>>();

    view! {
        <article>
            <h1>{project.title.clone()}</h1>
            {project.client_name.clone().map(|c| view! { <div class="project-details__client">"Client: "{c}</div> })}
            <p class="project-details__summary">{project.summary.clone()}</p>
            {project.image_url.as_deref().map(|url| view! {
                <img class="project-details__image" src=asset_url(url) alt=project.title.clone() />
            })}
            // контент уже санитизирован на сервере
            <div class="project-details__content" inner_html=project.content.clone()></div>
            <Flex gap=FlexGap::Small>
                {pairs.into_iter().map(|p| view! { <Badge appearance=BadgeAppearance::Tint>{p}</Badge> }).collect_view()}
            </Flex>
            {(!project.technologies.is_empty()).then(|| view! {
                <h3>"Technologies"</h3>
                <ul class="project-details__tech">
                    {project.technologies.iter().map(|t| view! { <li>{t.clone()}</li> }).collect_view()}
                </ul>
            })}
            {project.project_url.clone().map(|url| view! {
                <a class="project-details__link" href=url target="_blank" rel="noopener">"Visit project"</a>
            })}
        </article>
    }
}
