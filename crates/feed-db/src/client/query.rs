//! PostgREST query-string building

/// Sort direction for `order=`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query parameters for a PostgREST table request.
///
/// Filters use the `column=op.value` form, e.g. `id=eq.42`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestQuery {
    params: Vec<(String, String)>,
}

impl RestQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns (and embedded resources) to return
    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    /// Equality filter
    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    #[must_use]
    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.params
            .push(("order".to_string(), format!("{column}.{}", order.as_str())));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.params.push(("limit".to_string(), limit.to_string()));
        self
    }

    /// Parameters in insertion order, ready for `RequestBuilder::query`
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

/// Total row count from a `Content-Range` header.
///
/// PostgREST answers `Prefer: count=exact` with `0-24/3573`, or `*/0` when
/// the range is empty. An unknown total (`0-24/*`) yields `None`.
pub fn parse_content_range_total(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.parse().ok()
}
