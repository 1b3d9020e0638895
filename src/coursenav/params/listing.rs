//! Paginated admin listings (users, admins, testimonials, orders).
//!
//! `?query=ada&page=3&limit=20&period=weekly`. Changing the page size, the
//! search text or the period filter always goes back to the first page.
//! Pages and page sizes start at 1; anything lower reads as the default.

use crate::codec::{BoundedIntCodec, EnumCodec, Nullable, QueryEnum, StringCodec};
use crate::query::QueryMap;
use crate::state::{Param, QuerySchema};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl QueryEnum for Period {
    const VARIANTS: &'static [Self] = &[
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Yearly,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingParams {
    pub query: String,
    pub page: i64,
    pub limit: i64,
    pub period: Option<Period>,
}

impl Default for ListingParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            period: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingAction {
    SetPage(i64),
    SetLimit(i64),
    SetQuery(String),
    SetPeriod(Option<Period>),
    Reset,
}

impl ListingParams {
    /// Applies an action, returning the next params. Pages and limits below
    /// 1 are raised to 1.
    pub fn reduce(&self, action: ListingAction) -> ListingParams {
        match action {
            ListingAction::SetPage(page) => ListingParams {
                page: page.max(1),
                ..self.clone()
            },
            ListingAction::SetLimit(limit) => ListingParams {
                page: DEFAULT_PAGE,
                limit: limit.max(1),
                ..self.clone()
            },
            ListingAction::SetQuery(query) => ListingParams {
                page: DEFAULT_PAGE,
                query,
                ..self.clone()
            },
            ListingAction::SetPeriod(period) => ListingParams {
                page: DEFAULT_PAGE,
                period,
                ..self.clone()
            },
            ListingAction::Reset => ListingParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub query: Param<StringCodec>,
    pub page: Param<BoundedIntCodec>,
    pub limit: Param<BoundedIntCodec>,
    pub period: Param<Nullable<EnumCodec<Period>>>,
}

impl ListingQuery {
    pub fn new() -> Self {
        let defaults = ListingParams::default();
        Self {
            query: Param::new("query", StringCodec, defaults.query),
            page: Param::new("page", BoundedIntCodec::positive(), defaults.page),
            limit: Param::new("limit", BoundedIntCodec::positive(), defaults.limit),
            period: Param::new("period", Nullable(EnumCodec::new()), defaults.period),
        }
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl QuerySchema for ListingQuery {
    type State = ListingParams;

    fn keys(&self) -> Vec<&str> {
        vec![
            self.query.key(),
            self.page.key(),
            self.limit.key(),
            self.period.key(),
        ]
    }

    fn read(&self, query: &QueryMap) -> ListingParams {
        ListingParams {
            query: self.query.read(query),
            page: self.page.read(query),
            limit: self.limit.read(query),
            period: self.period.read(query),
        }
    }

    fn write(&self, prev: &ListingParams, next: &ListingParams, query: &mut QueryMap) {
        self.query.write_changed(query, &prev.query, &next.query);
        self.page.write_changed(query, &prev.page, &next.page);
        self.limit.write_changed(query, &prev.limit, &next.limit);
        self.period.write_changed(query, &prev.period, &next.period);
    }
}
