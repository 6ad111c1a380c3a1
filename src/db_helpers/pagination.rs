pub const DEFAULT_LIMIT: i64 = 10;

/// Resolved `LIMIT`/`OFFSET` pair for a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// `page` is 1-based. A missing or non-positive limit falls back to
    /// [`DEFAULT_LIMIT`]; a missing or non-positive page means no offset.
    /// A page past the end is clamped to the start of the last page, so only
    /// an empty result set (`total_count == 0`) yields an empty page.
    pub fn new(limit: Option<i64>, page: Option<i64>, total_count: i64) -> Self {
        let limit = limit.filter(|limit| *limit > 0).unwrap_or(DEFAULT_LIMIT);
        let offset = match page.filter(|page| *page > 0) {
            Some(page) => {
                let offset = limit.saturating_mul(page - 1);
                if offset >= total_count {
                    last_page_offset(limit, total_count)
                } else {
                    offset
                }
            }
            None => 0,
        };
        Page { limit, offset }
    }
}

fn last_page_offset(limit: i64, total_count: i64) -> i64 {
    if total_count <= 0 {
        0
    } else {
        (total_count - 1) / limit * limit
    }
}

/// Columns `GET /api/articles` may be sorted by. Anything else falls back to
/// `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    Body,
    #[default]
    CreatedAt,
    Votes,
}

impl SortColumn {
    pub const ALL: [SortColumn; 7] = [
        SortColumn::ArticleId,
        SortColumn::Title,
        SortColumn::Topic,
        SortColumn::Author,
        SortColumn::Body,
        SortColumn::CreatedAt,
        SortColumn::Votes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortColumn::ArticleId => "article_id",
            SortColumn::Title => "title",
            SortColumn::Topic => "topic",
            SortColumn::Author => "author",
            SortColumn::Body => "body",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
        }
    }

    pub fn from_param(param: Option<&str>) -> Self {
        param
            .and_then(|param| Self::ALL.into_iter().find(|column| column.name() == param))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Expects an already upper-cased value; anything but `ASC`/`DESC` is
    /// treated as `DESC`.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("ASC") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}
