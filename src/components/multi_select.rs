//! Multi Select Component
//!
//! Searchable multi-value picker. Typing narrows the options through a
//! collection view search; picked values render as removable chips.

use collection_view::{CollectionView, CriteriaPatch};
use leptos::prelude::*;

use crate::models::TopicOption;

const MAX_SUGGESTIONS: usize = 6;

/// Options matching `query` that are not already picked
pub fn suggestions_for(options: &CollectionView<TopicOption>, query: &str, selected: &[String]) -> Vec<TopicOption> {
    let mut view = options.clone();
    view.set_criteria(CriteriaPatch::new().search(query));
    view.derive()
        .into_iter()
        .filter(|option| !selected.contains(&option.value))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Multi-select input with suggestions
///
/// Props:
/// - options: every selectable option, searched by label
/// - selected: currently picked values
/// - on_change: called with the full new selection
#[component]
pub fn MultiSelect(
    options: StoredValue<CollectionView<TopicOption>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_change: Callback<Vec<String>>,
    #[prop(into, default = "Search topics...".to_string())] placeholder: String,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let (open, set_open) = signal(false);
    let (selected_idx, set_selected_idx) = signal(0usize);

    let suggestions = move || {
        if !open.get() {
            return vec![];
        }
        let query = input_value.get();
        let picked = selected.get();
        options.with_value(|options| suggestions_for(options, &query, &picked))
    };

    let label_of = move |value: &str| {
        options.with_value(|options| {
            options
                .find(&value.to_string())
                .map(|o| o.label.clone())
                .unwrap_or_else(|| value.to_string())
        })
    };

    let pick = move |value: String| {
        let mut next = selected.get_untracked();
        if !next.contains(&value) {
            next.push(value);
            on_change.run(next);
        }
        set_input_value.set(String::new());
        set_selected_idx.set(0);
    };

    let remove = move |value: String| {
        let mut next = selected.get_untracked();
        next.retain(|v| *v != value);
        on_change.run(next);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();
        match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                if let Some(option) = sugg.get(selected_idx.get()) {
                    pick(option.value.clone());
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                set_open.set(true);
                let sel = selected_idx.get();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Escape" => set_open.set(false),
            "Backspace" if input_value.get().is_empty() => {
                if let Some(last) = selected.get_untracked().last().cloned() {
                    remove(last);
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="multi-select">
            <div class="multi-select-control" on:click=move |_| set_open.set(true)>
                <For
                    each=move || selected.get()
                    key=|value| value.clone()
                    children=move |value| {
                        let value_for_remove = value.clone();
                        view! {
                            <span class="chip">
                                {label_of(&value)}
                                <button
                                    type="button"
                                    class="chip-remove"
                                    aria-label="Remove"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        remove(value_for_remove.clone());
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
                <input
                    type="text"
                    class="multi-select-input"
                    placeholder=placeholder
                    autocomplete="off"
                    prop:value=move || input_value.get()
                    on:input=move |ev| {
                        set_input_value.set(event_target_value(&ev));
                        set_selected_idx.set(0);
                        set_open.set(true);
                    }
                    on:focus=move |_| set_open.set(true)
                    on:blur=move |_| set_open.set(false)
                    on:keydown=on_keydown
                />
            </div>

            {move || {
                let sugg = suggestions();
                if sugg.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    let highlighted = selected_idx.get();
                    view! {
                        <div class="autocomplete-list" role="listbox">
                            {sugg.into_iter().enumerate().map(|(i, option)| {
                                let value = option.value.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=if i == highlighted { "autocomplete-item selected" } else { "autocomplete-item" }
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            pick(value.clone());
                                        }
                                    >
                                        {option.label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use chrono::NaiveDate;

    fn options() -> CollectionView<TopicOption> {
        CollectionView::new(mock::topic_options(), NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
    }

    fn values(options: &[TopicOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_suggestions_match_label_case_insensitively() {
        let found = suggestions_for(&options(), "DESIGN", &[]);
        assert_eq!(values(&found), vec!["graphic-design", "ui-ux-design"]);
    }

    #[test]
    fn test_suggestions_skip_picked_values() {
        let found = suggestions_for(&options(), "design", &["graphic-design".to_string()]);
        assert_eq!(values(&found), vec!["ui-ux-design"]);
    }

    #[test]
    fn test_empty_query_is_capped() {
        assert_eq!(suggestions_for(&options(), "", &[]).len(), MAX_SUGGESTIONS);
    }
}
