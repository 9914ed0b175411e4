use crate::domain::{a001_team_member, a002_timeline_entry, a005_client};
use crate::shared::api_utils::asset_url;
use crate::shared::icons::icon;
use contracts::domain::a001_team_member::aggregate::TeamMember;
use contracts::domain::a002_timeline_entry::aggregate::TimelineEntry;
use contracts::domain::a005_client::aggregate::Client;
use leptos::prelude::*;
use thaw::*;

/// Загрузить опубликованный список в сигнал; ошибка только логируется,
/// секция страницы в этом случае просто пустая
fn load_into<T, F>(target: RwSignal<Vec<T>>, label: &'static str, fut: F)
where
    T: Send + Sync + 'static,
    F: std::future::Future<Output = Result<Vec<T>, String>> + 'static,
{
    leptos::task::spawn_local(async move {
        match fut.await {
            Ok(list) => target.set(list),
            Err(e) => log::warn!("{} not loaded: {}", label, e),
        }
    });
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let team = RwSignal::new(Vec::<TeamMember>::new());
    let timeline = RwSignal::new(Vec::<TimelineEntry>::new());
    let clients = RwSignal::new(Vec::<Client>::new());

    load_into(team, "team", a001_team_member::api::fetch_published());
    load_into(timeline, "timeline", a002_timeline_entry::api::fetch_published());
    load_into(clients, "clients", a005_client::api::fetch_published());

    view! {
        <section class="hero">
            <h1>"Engineering that moves the business"</h1>
            <p>"We design, build and run software for companies that cannot afford to stand still."</p>
        </section>

        <section class="about-team">
            <h2>"Team"</h2>
            <div class="team-grid">
                <For each=move || team.get() key=|m| m.base.id let:member>
                    <div class="team-card">
                        {member.image_url.as_deref().map(|url| view! {
                            <img class="team-card__photo" src=asset_url(url) alt=member.name.clone() />
                        })}
                        <h3>{member.name.clone()}</h3>
                        <div class="team-card__role">{member.role.clone()}</div>
                        <p>{member.bio.clone()}</p>
                        {member.linkedin_url.clone().map(|url| view! {
                            <a href=url target="_blank" rel="noopener">{icon("linkedin")}</a>
                        })}
                    </div>
                </For>
            </div>
        </section>

        <section class="about-timeline">
            <h2>"Our story"</h2>
            <ol class="timeline">
                <For each=move || timeline.get() key=|e| e.base.id let:entry>
                    <li class="timeline__entry">
                        <span class="timeline__year">{entry.year.clone()}</span>
                        <div>
                            <h3>{entry.title.clone()}</h3>
                            <p>{entry.description.clone()}</p>
                        </div>
                    </li>
                </For>
            </ol>
        </section>

        <Show when=move || clients.with(|c| !c.is_empty())>
            <section class="about-clients">
                <h2>"Trusted by"</h2>
                <Flex gap=FlexGap::Large align=FlexAlign::Center>
                    <For each=move || clients.get() key=|c| c.base.id let:client>
                        <ClientLogo client=client />
                    </For>
                </Flex>
            </section>
        </Show>
    }
}

#[component]
fn ClientLogo(client: Client) -> impl IntoView {
    let inner = match client.logo_url.as_deref() {
        Some(url) => view! { <img class="client-logo" src=asset_url(url) alt=client.name.clone() /> }.into_any(),
        None => view! { <span class="client-logo client-logo--text">{client.name.clone()}</span> }.into_any(),
    };
    match client.website_url {
        Some(url) => view! { <a href=url target="_blank" rel="noopener">{inner}</a> }.into_any(),
        None => inner,
    }
}
