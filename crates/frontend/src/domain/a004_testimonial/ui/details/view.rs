use super::view_model::TestimonialDetailsViewModel;
use crate::shared::components::form_fields::{
    CheckboxField, PositionField, TextAreaField, TextField,
};
use crate::shared::components::image_upload::ImageUpload;
use contracts::domain::a004_testimonial::aggregate::{Testimonial, MAX_RATING, MIN_RATING};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TestimonialDetails(
    id: Option<String>,
    on_saved: Callback<(Testimonial, bool)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = TestimonialDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <Show when=move || !vm.loading.get() fallback=|| view! { <Spinner /> }>
                <Flex gap=FlexGap::Large>
                    <TextField
                        label="Author"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.author_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.author_name = v))
                    />
                    <TextField
                        label="Role"
                        placeholder="CTO"
                        value=Signal::derive(move || form.with(|f| f.author_role.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.author_role = v))
                    />
                    <TextField
                        label="Company"
                        value=Signal::derive(move || form.with(|f| f.company.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.company = v))
                    />
                </Flex>
                <TextAreaField
                    label="Message"
                    rows=5
                    value=Signal::derive(move || form.with(|f| f.message.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.message = v))
                />
                <ImageUpload
                    label="Avatar"
                    folder="testimonials"
                    value=Signal::derive(move || form.with(|f| f.avatar_url.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.avatar_url = v))
                />
                <Flex gap=FlexGap::Large align=FlexAlign::End>
                    <div class="form__group form__group--narrow">
                        <label class="form__label">"Rating"</label>
                        <select
                            class="form__input"
                            prop:value=move || form.with(|f| f.rating.to_string())
                            on:change=move |ev| {
                                if let Ok(rating) = event_target_value(&ev).parse::<u8>() {
                                    form.update(|f| f.rating = rating);
                                }
                            }
                        >
                            {(MIN_RATING..=MAX_RATING)
                                .rev()
                                .map(|r| view! { <option value=r.to_string()>{"★".repeat(r as usize)}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <PositionField
                        value=Signal::derive(move || form.with(|f| f.position))
                        on_input=Callback::new(move |v| form.update(|f| f.position = v))
                    />
                    <CheckboxField
                        label="Verified"
                        value=Signal::derive(move || form.with(|f| f.verified))
                        on_change=Callback::new(move |v| form.update(|f| f.verified = v))
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
