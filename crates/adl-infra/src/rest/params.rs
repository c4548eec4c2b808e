//! Renders a [`PageQuery`] as PostgREST query parameters.

use adl_core::query::{Join, PageQuery, Predicate, Relation};

pub const PAGES_RESOURCE: &str = "pages";

/// Inner embed for a relation, with the columns the normalizer reads.
fn embed(join: &Join) -> String {
    match join.relation {
        Relation::TopCreative => {
            "page_top_creatives!inner(media_url,media_type,ads(ad_snapshot_url))".to_string()
        }
        Relation::Ads => "ads!inner(beneficiary)".to_string(),
    }
}

pub fn select_clause(joins: &[Join]) -> String {
    std::iter::once("*".to_string())
        .chain(joins.iter().map(embed))
        .collect::<Vec<_>>()
        .join(",")
}

/// Escapes LIKE metacharacters so the needle matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn filter_param(predicate: &Predicate) -> (String, String) {
    let column = predicate.column().as_str().to_string();
    match predicate {
        Predicate::CountryEquals(code) => (column, format!("eq.{code}")),
        Predicate::NameContains(needle) => (column, format!("ilike.*{}*", escape_like(needle))),
    }
}

pub fn to_params(query: &PageQuery) -> Vec<(String, String)> {
    let direction = if query.order.descending { "desc" } else { "asc" };

    let mut params = vec![
        ("select".to_string(), select_clause(&query.joins)),
        (
            "order".to_string(),
            format!("{}.{}", query.order.column.as_str(), direction),
        ),
    ];
    params.extend(query.predicates.iter().map(filter_param));
    params.push(("offset".to_string(), query.range.offset().to_string()));
    params.push(("limit".to_string(), query.range.limit().to_string()));
    params
}
