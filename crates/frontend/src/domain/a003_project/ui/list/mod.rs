use crate::domain::a003_project::api;
use crate::domain::a003_project::ui::details::ProjectDetails;
use crate::layout::modal_service::{use_modal, Modal};
use crate::shared::admin_list::{AdminList, ListFuture};
use crate::shared::components::list_filters::{FlagFilterSelect, StatusFilterSelect};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::row_actions::{DeleteButton, PublishToggle};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::toast::use_toast;
use contracts::domain::a003_project::aggregate::Project;
use contracts::shared::list_query::SortBy;
use leptos::prelude::*;
use thaw::*;

fn fetch_all() -> ListFuture<Project> {
    Box::pin(api::fetch_all())
}

fn categories_label(project: &Project) -> String {
    project
        .categories
        .iter()
        .map(|a| a.sub_category.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let list = AdminList::new(fetch_all, Some(SortBy::Position));
    let modal = use_modal();
    let toast = use_toast();
    let editing_id = RwSignal::new(None::<String>);
    let seeding = RwSignal::new(false);
    let page = list.page();
    let state = list.state;

    let open_form = move |id: Option<String>| {
        editing_id.set(id);
        modal.show();
    };

    let load_demo_data = move |_| {
        seeding.set(true);
        leptos::task::spawn_local(async move {
            match api::insert_test_data().await {
                Ok(0) => toast.success("Demo projects already present"),
                Ok(n) => {
                    toast.success(format!("Inserted {} demo projects", n));
                    list.reload();
                }
                Err(e) => toast.error(format!("Demo data failed: {}", e)),
            }
            seeding.set(false);
        });
    };

    list.reload();

    view! {
        <div class="page">
            <PageHeader title="Projects" subtitle=list.summary() loading=list.loading>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                    {icon("plus")}
                    " New project"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || seeding.get())
                    on_click=load_demo_data
                >
                    "Load demo data"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search_term.clone()))
                    on_change=Callback::new(move |term: String| state.update(|s| s.set_search_term(term)))
                    placeholder="Search title, slug, client or summary"
                />
                <StatusFilterSelect state=state />
                <FlagFilterSelect
                    state=state
                    label="Featured"
                    only_label="Featured"
                    without_label="Regular"
                />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Title"</TableHeaderCell>
                        <TableHeaderCell>"Client"</TableHeaderCell>
                        <TableHeaderCell>"Services"</TableHeaderCell>
                        <TableHeaderCell>"Position"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Created"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let term = state.with(|s| s.search_term.clone());
                        page.get().items.into_iter().map(|p| {
                            let term_1 = term.clone();
                            let term_2 = term.clone();
                            let id = p.to_string_id();
                            let id_for_edit = id.clone();
                            let id_for_publish = id.clone();
                            let id_for_delete = id.clone();
                            let published = p.base.published;
                            let services = categories_label(&p);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                open_form(Some(id_for_edit.clone()));
                                            }>
                                                {highlight_matches(&p.title, &term_1)}
                                            </a>
                                            {p.featured.then(|| view! {
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                                                    {icon("star")}
                                                </Badge>
                                            })}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {highlight_matches(p.client_name.as_deref().unwrap_or(""), &term_2)}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{services}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {p.base.position.map(|v| v.to_string()).unwrap_or_default()}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <PublishToggle
                                                published=published
                                                on_toggle=Callback::new(move |_| {
                                                    let id = id_for_publish.clone();
                                                    list.toggle_published(async move {
                                                        api::set_published(&id, !published).await
                                                    });
                                                })
                                            />
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_datetime(&p.base.metadata.created_at)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <DeleteButton
                                                busy=Signal::derive({
                                                    let id = id.clone();
                                                    move || list.is_deleting(&id)
                                                })
                                                on_click=Callback::new(move |_| {
                                                    list.remove(id_for_delete.clone(), "Delete this project?", api::remove)
                                                })
                                            />
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()
                    }}
                </TableBody>
            </Table>

            <Show when=move || page.with(|p| p.total_count == 0) && !list.loading.get()>
                <div class="table__empty">"No projects match the filters"</div>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || page.with(|p| p.current_page))
                total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                total_count=Signal::derive(move || page.with(|p| p.total_count))
                on_page_change=Callback::new(move |p| state.update(|s| s.set_page(p)))
            />

            <Modal title=Signal::derive(move || {
                if editing_id.get().is_some() { "Edit project".to_string() } else { "New project".to_string() }
            })>
                {move || {
                    let id = editing_id.get();
                    view! {
                        <ProjectDetails
                            id=id
                            on_saved=Callback::new(move |(item, created): (Project, bool)| {
                                list.apply_saved(item, created);
                                modal.hide();
                            })
                            on_cancel=Callback::new(move |_| modal.hide())
                        />
                    }
                }}
            </Modal>
        </div>
    }
}
