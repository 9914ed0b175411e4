//! Сводка по разделам админки: всего / опубликовано / черновики

use crate::domain::{a001_team_member, a002_timeline_entry, a003_project, a004_testimonial, a005_client};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::shared::list_query::ListItem;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionStats {
    pub total: usize,
    pub published: usize,
}

impl SectionStats {
    pub fn of<T: ListItem>(items: &[T]) -> Self {
        Self {
            total: items.len(),
            published: items.iter().filter(|i| i.is_published()).count(),
        }
    }

    pub fn drafts(&self) -> usize {
        self.total - self.published
    }
}

struct Section {
    path: &'static str,
    icon: &'static str,
    label: &'static str,
    stats: RwSignal<Option<SectionStats>>,
}

fn load_stats<T, F>(target: RwSignal<Option<SectionStats>>, fut: F)
where
    T: ListItem + 'static,
    F: std::future::Future<Output = Result<Vec<T>, String>> + 'static,
{
    leptos::task::spawn_local(async move {
        match fut.await {
            Ok(items) => target.set(Some(SectionStats::of(&items))),
            Err(e) => log::warn!("dashboard stats not loaded: {}", e),
        }
    });
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let section = |path, icon, label| Section {
        path,
        icon,
        label,
        stats: RwSignal::new(None),
    };
    let sections = vec![
        section("/admin/team", "team", "Team members"),
        section("/admin/timeline", "timeline", "Timeline entries"),
        section("/admin/projects", "projects", "Projects"),
        section("/admin/testimonials", "testimonials", "Testimonials"),
        section("/admin/clients", "clients", "Clients"),
    ];

    load_stats(sections[0].stats, a001_team_member::api::fetch_all());
    load_stats(sections[1].stats, a002_timeline_entry::api::fetch_all());
    load_stats(sections[2].stats, a003_project::api::fetch_all());
    load_stats(sections[3].stats, a004_testimonial::api::fetch_all());
    load_stats(sections[4].stats, a005_client::api::fetch_all());

    view! {
        <div class="page">
            <PageHeader title="Dashboard" />
            <div class="dashboard-grid">
                {sections
                    .into_iter()
                    .map(|s| {
                        let stats = s.stats;
                        view! {
                            <A href=s.path attr:class="dashboard-card">
                                <div class="dashboard-card__icon">{icon(s.icon)}</div>
                                <div class="dashboard-card__label">{s.label}</div>
                                <div class="dashboard-card__value">
                                    {move || stats.get().map(|st| st.total.to_string()).unwrap_or_else(|| "…".into())}
                                </div>
                                <div class="dashboard-card__meta">
                                    {move || stats.get().map(|st| {
                                        format!("{} published · {} drafts", st.published, st.drafts())
                                    })}
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_client::aggregate::{Client, ClientDto};

    #[test]
    fn test_section_stats() {
        let client = |name: &str, published: bool| {
            Client::new_for_insert(&ClientDto {
                name: name.into(),
                published,
                ..ClientDto::default()
            })
        };
        let stats = SectionStats::of(&[client("A", true), client("B", false), client("C", true)]);
        assert_eq!(stats, SectionStats { total: 3, published: 2 });
        assert_eq!(stats.drafts(), 1);
        assert_eq!(SectionStats::of::<Client>(&[]), SectionStats::default());
    }
}
