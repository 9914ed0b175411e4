use super::assignments::CategoryAssignmentEditor;
use super::view_model::ProjectDetailsViewModel;
use crate::shared::components::form_fields::{
    CheckboxField, OptionalTextField, PositionField, TextAreaField, TextField,
};
use crate::shared::components::image_upload::ImageUpload;
use contracts::domain::a003_project::aggregate::Project;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProjectDetails(
    id: Option<String>,
    on_saved: Callback<(Project, bool)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProjectDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <div class="details-form details-form--wide">
            {move || vm.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <Show when=move || !vm.loading.get() fallback=|| view! { <Spinner /> }>
                <Flex gap=FlexGap::Large>
                    <TextField
                        label="Title"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.title.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.title = v))
                    />
                    <TextField
                        label="Slug"
                        placeholder="generated from the title when empty"
                        value=Signal::derive(move || form.with(|f| f.slug.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.slug = v))
                    />
                </Flex>
                <TextAreaField
                    label="Summary"
                    rows=2
                    value=Signal::derive(move || form.with(|f| f.summary.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.summary = v))
                />
                <TextAreaField
                    label="Content (HTML)"
                    rows=10
                    placeholder="<h2>Challenge</h2><p>...</p>"
                    value=Signal::derive(move || form.with(|f| f.content.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.content = v))
                />
                <ImageUpload
                    label="Cover image"
                    folder="projects"
                    value=Signal::derive(move || form.with(|f| f.image_url.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.image_url = v))
                />
                <Flex gap=FlexGap::Large>
                    <OptionalTextField
                        label="Client"
                        value=Signal::derive(move || form.with(|f| f.client_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.client_name = v))
                    />
                    <OptionalTextField
                        label="Project URL"
                        placeholder="https://"
                        value=Signal::derive(move || form.with(|f| f.project_url.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.project_url = v))
                    />
                </Flex>
                <TextField
                    label="Technologies"
                    placeholder="Rust, PostgreSQL, Kubernetes"
                    value=vm.technologies_input
                    on_input=Callback::new(move |v| vm.technologies_input.set(v))
                />
                <CategoryAssignmentEditor
                    value=Signal::derive(move || form.with(|f| f.categories.clone()))
                    on_change=Callback::new(move |list| form.update(|f| f.categories = list))
                />
                <Flex gap=FlexGap::Large align=FlexAlign::End>
                    <PositionField
                        value=Signal::derive(move || form.with(|f| f.position))
                        on_input=Callback::new(move |v| form.update(|f| f.position = v))
                    />
                    <CheckboxField
                        label="Featured"
                        value=Signal::derive(move || form.with(|f| f.featured))
                        on_change=Callback::new(move |v| form.update(|f| f.featured = v))
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
