use crate::domain::a004_testimonial::api;
use crate::shared::api_utils::asset_url;
use crate::shared::date_utils::format_date;
use contracts::domain::a004_testimonial::aggregate::{Testimonial, MAX_RATING};
use leptos::prelude::*;
use thaw::*;

/// "★★★★☆" для рейтинга 4
fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}

/// Подпись автора: "Jane Doe, CTO at Acme"
fn attribution(t: &Testimonial) -> String {
    match (t.author_role.is_empty(), t.company.is_empty()) {
        (true, true) => t.author_name.clone(),
        (false, true) => format!("{}, {}", t.author_name, t.author_role),
        (true, false) => format!("{}, {}", t.author_name, t.company),
        (false, false) => format!("{}, {} at {}", t.author_name, t.author_role, t.company),
    }
}

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<Testimonial>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {
        match api::fetch_published().await {
            Ok(list) => items.set(list),
            Err(e) => error.set(Some(e)),
        }
        loading.set(false);
    });

    view! {
        <section class="testimonials">
            <header class="section-header">
                <h1>"What clients say"</h1>
            </header>
            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}
            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <div class="testimonial-grid">
                    <For each=move || items.get() key=|t| t.base.id let:t>
                        <blockquote class="testimonial-card">
                            <div class="testimonial-card__rating">{stars(t.rating)}</div>
                            <p>{t.message.clone()}</p>
                            <footer>
                                {t.avatar_url.as_deref().map(|url| view! {
                                    <img class="testimonial-card__avatar" src=asset_url(url) alt=t.author_name.clone() />
                                })}
                                <cite>{attribution(&t)}</cite>
                                <time class="testimonial-card__date">{format_date(&t.base.metadata.created_at)}</time>
                                {t.verified.then(|| view! {
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Verified"</Badge>
                                })}
                            </footer>
                        </blockquote>
                    </For>
                </div>
                <Show when=move || items.with(|i| i.is_empty())>
                    <div class="table__empty">"No testimonials yet"</div>
                </Show>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_testimonial::aggregate::TestimonialDto;

    #[test]
    fn test_stars() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_attribution() {
        let mut dto = TestimonialDto {
            author_name: "Jane Doe".into(),
            ..TestimonialDto::default()
        };
        assert_eq!(attribution(&Testimonial::new_for_insert(&dto)), "Jane Doe");
        dto.author_role = "CTO".into();
        dto.company = "Acme".into();
        assert_eq!(
            attribution(&Testimonial::new_for_insert(&dto)),
            "Jane Doe, CTO at Acme"
        );
    }
}
