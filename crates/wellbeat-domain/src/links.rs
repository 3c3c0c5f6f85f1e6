//! Navigation link construction for paged listings.
//!
//! Links let clients walk pages without assembling URLs themselves. Each
//! link reproduces every filter parameter of the original request plus the
//! target page coordinates.

use serde::Serialize;

use crate::pagination::PageQuery;

/// A single navigation descriptor embedded in a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub href: String,
    pub rel: String,
    pub method: String,
}

impl PageLink {
    fn get(href: String, rel: &str) -> Self {
        Self {
            href,
            rel: rel.to_owned(),
            method: "GET".to_owned(),
        }
    }
}

/// Build `self`/`next`/`previous` links for one resolved page.
///
/// `filter` carries every non-page query parameter of the request; it is
/// re-encoded onto each link so the target page reproduces the same
/// filtered set. `next` appears only when `has_next`, `previous` only when
/// `has_previous`. If the filter cannot be encoded as a query string the
/// links are omitted — navigation is advisory and must never fail the
/// request.
pub fn page_links<F: Serialize>(
    path: &str,
    filter: &F,
    page: PageQuery,
    has_previous: bool,
    has_next: bool,
) -> Vec<PageLink> {
    let filter_qs = match serde_qs::to_string(filter) {
        Ok(qs) => qs,
        Err(_) => return Vec::new(),
    };

    let href = |page_number: i64| {
        let page_qs = format!("pageNumber={page_number}&pageSize={}", page.page_size);
        if filter_qs.is_empty() {
            format!("{path}?{page_qs}")
        } else {
            format!("{path}?{filter_qs}&{page_qs}")
        }
    };

    let mut links = vec![PageLink::get(href(page.page_number), "self")];
    if has_next {
        links.push(PageLink::get(href(page.page_number + 1), "next"));
    }
    if has_previous {
        links.push(PageLink::get(href(page.page_number - 1), "previous"));
    }
    links
}

/// Filter placeholder for listings that take no parameters beyond the page.
#[derive(Debug, Default, Serialize)]
pub struct NoFilter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct EventFilter {
        #[serde(skip_serializing_if = "Option::is_none")]
        source: Option<String>,
        #[serde(rename = "eventType", skip_serializing_if = "Option::is_none")]
        event_type: Option<String>,
    }

    fn page(n: i64) -> PageQuery {
        PageQuery {
            page_number: n,
            page_size: 10,
        }
    }

    #[test]
    fn should_always_include_a_self_link() {
        let links = page_links("/api/v1/selfassessments/my", &NoFilter {}, page(1), false, false);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].rel, "self");
        assert_eq!(links[0].method, "GET");
        assert_eq!(
            links[0].href,
            "/api/v1/selfassessments/my?pageNumber=1&pageSize=10"
        );
    }

    #[test]
    fn should_add_next_link_only_when_more_pages_exist() {
        let links = page_links("/api/v1/users", &NoFilter {}, page(1), false, true);
        let next = links.iter().find(|l| l.rel == "next").unwrap();
        assert_eq!(next.href, "/api/v1/users?pageNumber=2&pageSize=10");
        assert!(!links.iter().any(|l| l.rel == "previous"));
    }

    #[test]
    fn should_add_previous_link_only_past_the_first_page() {
        let links = page_links("/api/v1/users", &NoFilter {}, page(3), true, true);
        let previous = links.iter().find(|l| l.rel == "previous").unwrap();
        assert_eq!(previous.href, "/api/v1/users?pageNumber=2&pageSize=10");
    }

    #[test]
    fn should_reproduce_filter_parameters_on_every_link() {
        let filter = EventFilter {
            source: Some("hr-portal".to_owned()),
            event_type: Some("workshop".to_owned()),
        };
        let links = page_links("/api/v1/wellnessevents", &filter, page(2), true, true);
        for link in &links {
            assert!(link.href.contains("source=hr-portal"), "{}", link.href);
            assert!(link.href.contains("eventType=workshop"), "{}", link.href);
        }
    }

    #[test]
    fn should_skip_absent_optional_filters() {
        let filter = EventFilter {
            source: None,
            event_type: None,
        };
        let links = page_links("/api/v1/wellnessevents", &filter, page(1), false, false);
        assert_eq!(
            links[0].href,
            "/api/v1/wellnessevents?pageNumber=1&pageSize=10"
        );
    }
}
