use crate::domain::a001_team_member::api;
use crate::domain::a001_team_member::ui::details::TeamMemberDetails;
use crate::layout::modal_service::{use_modal, Modal};
use crate::shared::admin_list::{AdminList, ListFuture};
use crate::shared::components::list_filters::StatusFilterSelect;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::row_actions::{DeleteButton, PublishToggle};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a001_team_member::aggregate::TeamMember;
use leptos::prelude::*;
use thaw::*;

fn fetch_all() -> ListFuture<TeamMember> {
    Box::pin(api::fetch_all())
}

#[component]
#[allow(non_snake_case)]
pub fn TeamMemberList() -> impl IntoView {
    let list = AdminList::new(fetch_all, None);
    let modal = use_modal();
    let editing_id = RwSignal::new(None::<String>);
    let page = list.page();
    let state = list.state;

    let open_form = move |id: Option<String>| {
        editing_id.set(id);
        modal.show();
    };

    list.reload();

    view! {
        <div class="page">
            <PageHeader title="Team" subtitle=list.summary() loading=list.loading>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                    {icon("plus")}
                    " New member"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search_term.clone()))
                    on_change=Callback::new(move |term: String| state.update(|s| s.set_search_term(term)))
                    placeholder="Search name, slug or role"
                />
                <StatusFilterSelect state=state />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Role"</TableHeaderCell>
                        <TableHeaderCell>"Position"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Created"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let term = state.with(|s| s.search_term.clone());
                        page.get().items.into_iter().map(|member| {
                            let term_1 = term.clone();
                            let term_2 = term.clone();
                            let id = member.to_string_id();
                            let id_for_edit = id.clone();
                            let id_for_publish = id.clone();
                            let id_for_delete = id.clone();
                            let published = member.base.published;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                open_form(Some(id_for_edit.clone()));
                                            }>
                                                {highlight_matches(&member.name, &term_1)}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{highlight_matches(&member.role, &term_2)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {member.base.position.map(|p| p.to_string()).unwrap_or_default()}
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
                                        <TableCellLayout>
                                            {format_datetime(&member.base.metadata.created_at)}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <DeleteButton
                                                busy=Signal::derive({
                                                    let id = id.clone();
                                                    move || list.is_deleting(&id)
                                                })
                                                on_click=Callback::new(move |_| {
                                                    list.remove(
                                                        id_for_delete.clone(),
                                                        "Delete this team member?",
                                                        api::remove,
                                                    )
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
                <div class="table__empty">"No team members match the filters"</div>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || page.with(|p| p.current_page))
                total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                total_count=Signal::derive(move || page.with(|p| p.total_count))
                on_page_change=Callback::new(move |p| state.update(|s| s.set_page(p)))
            />

            <Modal title=Signal::derive(move || {
                if editing_id.get().is_some() { "Edit team member".to_string() } else { "New team member".to_string() }
            })>
                {move || {
                    let id = editing_id.get();
                    view! {
                        <TeamMemberDetails
                            id=id
                            on_saved=Callback::new(move |(item, created): (TeamMember, bool)| {
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
