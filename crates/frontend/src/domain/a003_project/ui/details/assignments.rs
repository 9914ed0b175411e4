//! Редактор пар (категория, подуслуга) проекта

use contracts::shared::category_matcher::{validate_assignments, ProjectCategoryAssignment};
use contracts::shared::taxonomy::{taxonomy, Taxonomy};
use leptos::prelude::*;
use thaw::*;

/// Добавить пару, если она есть в таксономии и еще не назначена
pub fn add_assignment(
    current: &[ProjectCategoryAssignment],
    candidate: ProjectCategoryAssignment,
    taxonomy: &Taxonomy,
) -> Result<Vec<ProjectCategoryAssignment>, String> {
    let mut next = current.to_vec();
    next.push(candidate);
    validate_assignments(&next, taxonomy)?;
    Ok(next)
}

pub fn remove_assignment(
    current: &[ProjectCategoryAssignment],
    index: usize,
) -> Vec<ProjectCategoryAssignment> {
    current
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, a)| a.clone())
        .collect()
}

#[component]
pub fn CategoryAssignmentEditor(
    #[prop(into)] value: Signal<Vec<ProjectCategoryAssignment>>,
    on_change: Callback<Vec<ProjectCategoryAssignment>>,
) -> impl IntoView {
    let categories = taxonomy().categories();
    let first_category = categories
        .first()
        .map(|c| c.category.clone())
        .unwrap_or_default();

    let selected_category = RwSignal::new(first_category);
    let selected_sub = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let sub_services = move || {
        selected_category.with(|name| {
            taxonomy()
                .find_by_name(name)
                .map(|c| c.sub_services.clone())
                .unwrap_or_default()
        })
    };

    // при смене категории выбираем ее первую подуслугу
    Effect::new(move |_| {
        let first = sub_services().first().map(|s| s.name.clone()).unwrap_or_default();
        selected_sub.set(first);
    });

    let is_duplicate = move || {
        let candidate = ProjectCategoryAssignment::new(selected_category.get(), selected_sub.get());
        value.with(|list| list.contains(&candidate))
    };

    let handle_add = move |_| {
        let candidate = ProjectCategoryAssignment::new(
            selected_category.get_untracked(),
            selected_sub.get_untracked(),
        );
        match add_assignment(&value.get_untracked(), candidate, taxonomy()) {
            Ok(next) => {
                error.set(None);
                on_change.run(next);
            }
            Err(e) => error.set(Some(e)),
        }
    };

    view! {
        <div class="form__group assignment-editor">
            <label class="form__label">"Categories"</label>
            <div class="assignment-editor__chips">
                {move || {
                    value.get().into_iter().enumerate().map(|(index, a)| view! {
                        <span class="chip">
                            {format!("{} / {}", a.category, a.sub_category)}
                            <button
                                class="chip__remove"
                                title="Remove"
                                on:click=move |_| on_change.run(remove_assignment(&value.get_untracked(), index))
                            >
                                {crate::shared::icons::icon("x")}
                            </button>
                        </span>
                    }).collect_view()
                }}
            </div>
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <select
                    class="form__input"
                    prop:value=move || selected_category.get()
                    on:change=move |ev| selected_category.set(event_target_value(&ev))
                >
                    {categories
                        .iter()
                        .map(|c| view! { <option value=c.category.clone()>{c.category.clone()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="form__input"
                    prop:value=move || selected_sub.get()
                    on:change=move |ev| selected_sub.set(event_target_value(&ev))
                >
                    {move || sub_services()
                        .into_iter()
                        .map(|s| view! { <option value=s.name.clone()>{s.name.clone()}</option> })
                        .collect_view()}
                </select>
                <Button
                    size=ButtonSize::Small
                    disabled=Signal::derive(is_duplicate)
                    on_click=handle_add
                >
                    "Add"
                </Button>
            </Flex>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assignment_rejects_duplicates() {
        let tax = Taxonomy::standard();
        let first = ProjectCategoryAssignment::new("Technology", "Web Development");
        let list = add_assignment(&[], first.clone(), &tax).unwrap();
        assert_eq!(list, vec![first.clone()]);

        let err = add_assignment(&list, first, &tax).unwrap_err();
        assert!(err.contains("Duplicate"));

        let other = ProjectCategoryAssignment::new("Technology", "Cloud Solutions");
        assert_eq!(add_assignment(&list, other, &tax).unwrap().len(), 2);
    }

    #[test]
    fn test_add_assignment_rejects_unknown_pairs() {
        let tax = Taxonomy::standard();
        let unknown = ProjectCategoryAssignment::new("Technology", "Branding");
        assert!(add_assignment(&[], unknown, &tax).is_err());
    }

    #[test]
    fn test_remove_assignment_by_index() {
        let list = vec![
            ProjectCategoryAssignment::new("Design", "Branding"),
            ProjectCategoryAssignment::new("Design", "UI/UX Design"),
        ];
        assert_eq!(
            remove_assignment(&list, 0),
            vec![ProjectCategoryAssignment::new("Design", "UI/UX Design")]
        );
        assert_eq!(remove_assignment(&list, 5), list);
    }
}
