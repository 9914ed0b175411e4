use super::view_model::ClientDetailsViewModel;
use crate::shared::components::form_fields::{
    CheckboxField, OptionalTextField, PositionField, TextField,
};
use crate::shared::components::image_upload::ImageUpload;
use contracts::domain::a005_client::aggregate::Client;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ClientDetails(
    id: Option<String>,
    on_saved: Callback<(Client, bool)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ClientDetailsViewModel::new();
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
                <ImageUpload
                    label="Logo"
                    folder="clients"
                    value=Signal::derive(move || form.with(|f| f.logo_url.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.logo_url = v))
                />
                <OptionalTextField
                    label="Website"
                    placeholder="https://"
                    value=Signal::derive(move || form.with(|f| f.website_url.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.website_url = v))
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
