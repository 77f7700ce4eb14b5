//! Free-text filtering of the module catalog
//!
//! Matches against endpoint name and description (case-insensitive) and
//! regroups the survivors under their original categories.

use std::borrow::Cow;

use crate::catalog::{fold_case, OsintModule};

/// Pure search over a module index
pub struct FilterEngine;

impl FilterEngine {
    /// Filter `modules` by `search_text`
    ///
    /// An empty search borrows the input unchanged. Otherwise each group keeps
    /// only matching endpoints, groups left empty are dropped, and group and
    /// endpoint order are preserved. The input is never modified.
    pub fn filter<'a>(modules: &'a [OsintModule], search_text: &str) -> Cow<'a, [OsintModule]> {
        if search_text.is_empty() {
            return Cow::Borrowed(modules);
        }

        let needle = fold_case(search_text);

        let filtered: Vec<OsintModule> = modules
            .iter()
            .filter_map(|module| {
                let endpoints: Vec<_> = module
                    .endpoints
                    .iter()
                    .filter(|endpoint| endpoint.matches(&needle))
                    .cloned()
                    .collect();

                if endpoints.is_empty() {
                    None
                } else {
                    Some(OsintModule {
                        category: module.category.clone(),
                        endpoints,
                    })
                }
            })
            .collect();

        tracing::trace!(
            search = search_text,
            groups = filtered.len(),
            "Filtered module catalog"
        );

        Cow::Owned(filtered)
    }

    /// Total number of endpoints across all groups
    pub fn endpoint_count(modules: &[OsintModule]) -> usize {
        modules.iter().map(|m| m.endpoints.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Endpoint;
    use pretty_assertions::assert_eq;

    fn endpoint(name: &str, description: &str) -> Endpoint {
        Endpoint {
            name: name.to_string(),
            description: description.to_string(),
            route: format!("/{}", name.to_lowercase()),
            kind: "username".to_string(),
        }
    }

    fn sample() -> Vec<OsintModule> {
        vec![
            OsintModule {
                category: "Username".to_string(),
                endpoints: vec![
                    endpoint("Sherlock", "Hunt usernames across social networks"),
                    endpoint("Maigret", "Collect a dossier by username"),
                ],
            },
            OsintModule {
                category: "Email".to_string(),
                endpoints: vec![
                    endpoint("Holehe", "Check which sites an email is registered on"),
                    endpoint("GHunt", "Investigate Google accounts"),
                ],
            },
            OsintModule {
                category: "Empty".to_string(),
                endpoints: vec![],
            },
        ]
    }

    #[test]
    fn test_empty_search_borrows_input() {
        let modules = sample();
        let result = FilterEngine::filter(&modules, "");

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.as_ref(), modules.as_slice());
    }

    #[test]
    fn test_matches_name_or_description_case_insensitively() {
        let modules = sample();

        let result = FilterEngine::filter(&modules, "SHERLOCK");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].endpoints[0].name, "Sherlock");

        let result = FilterEngine::filter(&modules, "google");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "Email");
        assert_eq!(result[0].endpoints[0].name, "GHunt");
    }

    #[test]
    fn test_drops_groups_without_matches() {
        let modules = sample();
        let result = FilterEngine::filter(&modules, "username");

        let categories: Vec<_> = result.iter().map(|m| m.category.as_str()).collect();
        assert_eq!(categories, vec!["Username"]);
        assert_eq!(result[0].endpoints.len(), 2);
    }

    #[test]
    fn test_preserves_group_and_endpoint_order() {
        let modules = sample();
        let result = FilterEngine::filter(&modules, "e");

        let categories: Vec<_> = result.iter().map(|m| m.category.as_str()).collect();
        assert_eq!(categories, vec!["Username", "Email"]);
        let names: Vec<_> = result[1].endpoints.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Holehe", "GHunt"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let modules = sample();
        assert!(FilterEngine::filter(&modules, "zzz-nothing").is_empty());
    }

    #[test]
    fn test_input_untouched() {
        let modules = sample();
        let before = modules.clone();
        let _ = FilterEngine::filter(&modules, "holehe");
        assert_eq!(modules, before);
    }

    #[test]
    fn test_idempotent() {
        let modules = sample();
        for search in ["e", "user", "GH", "nothing"] {
            let once = FilterEngine::filter(&modules, search).into_owned();
            let twice = FilterEngine::filter(&once, search).into_owned();
            assert_eq!(once, twice, "search {search:?}");
        }
    }

    #[test]
    fn test_longer_search_never_grows_result() {
        let modules = sample();
        let prefixes = ["", "s", "sh", "she", "sher", "sherlock", "sherlockx"];

        let counts: Vec<usize> = prefixes
            .iter()
            .map(|p| FilterEngine::endpoint_count(&FilterEngine::filter(&modules, p)))
            .collect();

        for pair in counts.windows(2) {
            assert!(pair[1] <= pair[0], "counts not monotonic: {counts:?}");
        }
    }

    #[test]
    fn test_final_sigma_prefix_stays_monotonic() {
        let modules = vec![OsintModule {
            category: "Greek".to_string(),
            endpoints: vec![endpoint("ΑΣΑ", "")],
        }];
        let prefixes = ["Α", "ΑΣ", "ΑΣΑ"];

        let counts: Vec<usize> = prefixes
            .iter()
            .map(|p| FilterEngine::endpoint_count(&FilterEngine::filter(&modules, p)))
            .collect();

        assert_eq!(counts, vec![1, 1, 1]);
        assert_eq!(FilterEngine::endpoint_count(&FilterEngine::filter(&modules, "ας")), 1);
    }

    #[test]
    fn test_non_ascii_mixed_case_haystack() {
        let modules = vec![OsintModule {
            category: "Places".to_string(),
            endpoints: vec![
                endpoint("ΟδυσσΕΥΣ", "Greek name lookup"),
                endpoint("İzmir", "Turkish city registry"),
            ],
        }];

        for search in ["οδυσσευς", "ΟΔΥΣΣΕΥΣ", "ΟΔΥΣ"] {
            let result = FilterEngine::filter(&modules, search);
            assert_eq!(FilterEngine::endpoint_count(&result), 1, "search {search:?}");
            assert_eq!(result[0].endpoints[0].name, "ΟδυσσΕΥΣ");
        }

        let result = FilterEngine::filter(&modules, "İZ");
        assert_eq!(FilterEngine::endpoint_count(&result), 1);
        assert_eq!(result[0].endpoints[0].name, "İzmir");
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let modules = vec![OsintModule {
            category: "Dup".to_string(),
            endpoints: vec![endpoint("Same", "first"), endpoint("Same", "second")],
        }];

        let result = FilterEngine::filter(&modules, "same");
        assert_eq!(result[0].endpoints.len(), 2);
    }
}
