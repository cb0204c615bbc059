use serde::Serialize;

use crate::models::category::{Category, FilterSelection};
use crate::models::post::PostSummary;

/// Newest-first view of `catalog`, narrowed to `selection`.
///
/// Sorting always runs over the whole catalog before filtering, and is stable,
/// so posts sharing a date keep their catalog order.
pub fn apply<'a>(catalog: &'a [PostSummary], selection: FilterSelection) -> Vec<&'a PostSummary> {
    let mut sorted: Vec<&PostSummary> = catalog.iter().collect();
    sorted.sort_by(|a, b| b.published.cmp(&a.published));
    sorted.retain(|p| selection.matches(p.category));
    sorted
}

/// One button in the blog filter bar.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FilterOption {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Filter bar contents: `All` followed by every category.
pub fn options(active: FilterSelection) -> Vec<FilterOption> {
    std::iter::once(FilterSelection::All)
        .chain(Category::ALL.into_iter().map(FilterSelection::Only))
        .map(|sel| FilterOption {
            slug: sel.slug(),
            label: sel.label(),
            active: sel == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::post::{PostKey, CATALOG};

    fn all_selections() -> Vec<FilterSelection> {
        std::iter::once(FilterSelection::All)
            .chain(Category::ALL.into_iter().map(FilterSelection::Only))
            .collect()
    }

    fn keys(posts: &[&PostSummary]) -> Vec<PostKey> {
        posts.iter().map(|p| p.key).collect()
    }

    #[test]
    fn healthcare_returns_zipline_then_narayana() {
        let out = apply(&CATALOG, FilterSelection::Only(Category::Healthcare));
        assert_eq!(keys(&out), vec![PostKey::Zipline, PostKey::Narayana]);
    }

    #[test]
    fn all_returns_every_post_newest_first() {
        let out = apply(&CATALOG, FilterSelection::All);
        assert_eq!(
            keys(&out),
            vec![
                PostKey::Zipline,
                PostKey::Narayana,
                PostKey::Taobao,
                PostKey::Mpesa,
                PostKey::Grameen,
            ]
        );
    }

    #[test]
    fn output_only_contains_selected_category() {
        for sel in all_selections() {
            for post in apply(&CATALOG, sel) {
                assert!(sel.matches(post.category));
            }
        }
    }

    #[test]
    fn output_dates_never_increase() {
        for sel in all_selections() {
            let out = apply(&CATALOG, sel);
            for pair in out.windows(2) {
                assert!(pair[0].published >= pair[1].published);
            }
        }
    }

    #[test]
    fn reapplying_a_selection_is_a_no_op() {
        for sel in all_selections() {
            let once: Vec<PostSummary> = apply(&CATALOG, sel).into_iter().cloned().collect();
            let twice = apply(&once, sel);
            assert_eq!(keys(&twice), once.iter().map(|p| p.key).collect::<Vec<_>>());
        }
    }

    #[test]
    fn unmatched_category_is_empty_not_an_error() {
        assert!(apply(&CATALOG, FilterSelection::Only(Category::Energy)).is_empty());
        assert!(apply(&[], FilterSelection::All).is_empty());
    }

    #[test]
    fn options_mark_exactly_one_active() {
        let opts = options(FilterSelection::Only(Category::Finance));
        assert_eq!(opts.len(), 7);
        assert_eq!(opts[0].label, "All");
        let active: Vec<&str> = opts.iter().filter(|o| o.active).map(|o| o.slug).collect();
        assert_eq!(active, vec!["finance"]);
    }
}
