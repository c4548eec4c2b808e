use crate::filter::PageFilter;
use crate::ids::CountryCode;

use super::WindowRange;

/// Relations traversed from `pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// page → its top creative → the ad that produced it (snapshot URL).
    TopCreative,
    /// page → ads → beneficiary.
    Ads,
}

/// Inner join: pages without a matching related row are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Join {
    pub relation: Relation,
}

impl Join {
    pub fn inner(relation: Relation) -> Self {
        Self { relation }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageColumn {
    Country,
    Name,
    TotalEuReach,
}

impl PageColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Name => "name",
            Self::TotalEuReach => "total_eu_reach",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `country = code`
    CountryEquals(CountryCode),
    /// Case-insensitive literal substring match on `name`.
    NameContains(String),
}

impl Predicate {
    pub fn column(&self) -> PageColumn {
        match self {
            Self::CountryEquals(_) => PageColumn::Country,
            Self::NameContains(_) => PageColumn::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: PageColumn,
    pub descending: bool,
}

/// A single fetch request for one window of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub joins: Vec<Join>,
    pub predicates: Vec<Predicate>,
    /// Ties keep the store's natural order.
    pub order: SortOrder,
    pub range: WindowRange,
}

impl PageQuery {
    /// Builds the request for window `cursor` of `page_size` rows under `filter`.
    ///
    /// Predicates are only emitted for constrained dimensions and are ANDed.
    pub fn build(filter: &PageFilter, cursor: u32, page_size: u32) -> Self {
        let mut predicates = Vec::with_capacity(2);
        if let Some(code) = filter.country().code() {
            predicates.push(Predicate::CountryEquals(code.clone()));
        }
        if let Some(needle) = filter.name_needle() {
            predicates.push(Predicate::NameContains(needle.to_string()));
        }

        Self {
            joins: vec![Join::inner(Relation::TopCreative), Join::inner(Relation::Ads)],
            predicates,
            order: SortOrder {
                column: PageColumn::TotalEuReach,
                descending: true,
            },
            range: WindowRange::for_cursor(cursor, page_size),
        }
    }

    pub fn window_len(&self) -> u64 {
        self.range.limit()
    }
}
