use crate::shared::api_utils::{asset_url, post_form};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::shared::api::UploadResponse;
use leptos::prelude::*;
use thaw::*;
use web_sys::{File, FormData, HtmlInputElement};

/// Отправить файл на /api/upload; возвращает публичный URL
pub async fn upload_image(file: File, folder: &str) -> Result<String, String> {
    let form = FormData::new().map_err(|_| "Failed to create form data".to_string())?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|_| "Failed to attach file".to_string())?;
    form.append_with_str("folder", folder)
        .map_err(|_| "Failed to attach folder".to_string())?;

    let response: UploadResponse = post_form("/api/upload", form).await?;
    Ok(response.url)
}

/// Поле изображения: ручной URL или загрузка файла с превью
#[component]
pub fn ImageUpload(
    #[prop(into)] label: String,
    /// Папка на сервере ("team", "projects", ...)
    folder: &'static str,
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
) -> impl IntoView {
    let toast = use_toast();
    let uploading = RwSignal::new(false);

    let handle_file = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // тот же файл можно выбрать повторно
        input.set_value("");

        uploading.set(true);
        leptos::task::spawn_local(async move {
            match upload_image(file, folder).await {
                Ok(url) => {
                    on_change.run(Some(url));
                    toast.success("Image uploaded");
                }
                Err(e) => toast.error(format!("Upload failed: {}", e)),
            }
            uploading.set(false);
        });
    };

    view! {
        <div class="form__group image-upload">
            <label>{label}</label>
            <div class="image-upload__row">
                <input
                    type="text"
                    placeholder="https://... or upload a file"
                    prop:value=move || value.get().unwrap_or_default()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        on_change.run(if text.trim().is_empty() { None } else { Some(text) });
                    }
                />
                <label class="button button--secondary image-upload__picker">
                    {icon("upload")}
                    {move || if uploading.get() { " Uploading..." } else { " Upload" }}
                    <input
                        type="file"
                        accept="image/*"
                        style="display: none;"
                        prop:disabled=move || uploading.get()
                        on:change=handle_file
                    />
                </label>
                <Show when=move || uploading.get()>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </div>
            {move || value.get().map(|url| view! {
                <img class="image-upload__preview" src=asset_url(&url) alt="" />
            })}
        </div>
    }
}
