use super::view_model::TeamMemberDetailsViewModel;
use crate::shared::components::form_fields::{
    CheckboxField, OptionalTextField, PositionField, TextAreaField, TextField,
};
use crate::shared::components::image_upload::ImageUpload;
use contracts::domain::a001_team_member::aggregate::TeamMember;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TeamMemberDetails(
    id: Option<String>,
    on_saved: Callback<(TeamMember, bool)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = TeamMemberDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <Show when=move || !vm.loading.get() fallback=|| view! { <Spinner /> }>
                <TextField
                    label="Name"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                />
                <TextField
                    label="Slug"
                    placeholder="generated from the name when empty"
                    value=Signal::derive(move || form.with(|f| f.slug.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.slug = v))
                />
                <TextField
                    label="Role"
                    required=true
                    placeholder="e.g. Principal Architect"
                    value=Signal::derive(move || form.with(|f| f.role.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.role = v))
                />
                <TextAreaField
                    label="Bio"
                    rows=5
                    value=Signal::derive(move || form.with(|f| f.bio.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.bio = v))
                />
                <ImageUpload
                    label="Photo"
                    folder="team"
                    value=Signal::derive(move || form.with(|f| f.image_url.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.image_url = v))
                />
                <OptionalTextField
                    label="LinkedIn URL"
                    placeholder="https://www.linkedin.com/in/..."
                    value=Signal::derive(move || form.with(|f| f.linkedin_url.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.linkedin_url = v))
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
