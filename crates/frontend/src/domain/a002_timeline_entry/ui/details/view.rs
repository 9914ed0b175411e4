use super::view_model::TimelineEntryDetailsViewModel;
use crate::shared::components::form_fields::{
    CheckboxField, PositionField, TextAreaField, TextField,
};
use contracts::domain::a002_timeline_entry::aggregate::TimelineEntry;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TimelineEntryDetails(
    id: Option<String>,
    on_saved: Callback<(TimelineEntry, bool)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = TimelineEntryDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <Show when=move || !vm.loading.get() fallback=|| view! { <Spinner /> }>
                <Flex gap=FlexGap::Large>
                    <TextField
                        label="Year"
                        required=true
                        placeholder="2019 or 2019–2021"
                        value=Signal::derive(move || form.with(|f| f.year.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.year = v))
                    />
                    <TextField
                        label="Title"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.title.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.title = v))
                    />
                </Flex>
                <TextAreaField
                    label="Description"
                    value=Signal::derive(move || form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                />
                <Flex gap=FlexGap::Large align=FlexAlign::End>
                    <PositionField
                        value=Signal::derive(move || form.with(|f| f.position))
                        on_input=Callback::new(move |v| form.update(|f| f.position = v))
                    />
                    <CheckboxField
                        label="Published"
                        value=Signal::derive(move || form.with(|f| f.published))
                        on_change=Callback::new(move |v| form.update(|f| f.published = v))
                    />
                </Flex>
            </Show>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                    on_click=move |_| vm.save_command(on_saved)
                >
                    {move || match (vm.saving.get(), vm.is_edit_mode()) {
                        (true, _) => "Saving...",
                        (false, true) => "Save",
                        (false, false) => "Create",
                    }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
