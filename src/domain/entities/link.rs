//! Link entity representing a slug to URL mapping.

/// Value of the `status` column for every link this service writes.
pub const STATUS_ACTIVE: i32 = 1;

/// A stored short link.
///
/// `ip`, `ua` and `create_time` describe the request that created the link.
/// `create_time` is stored pre-formatted by [`crate::utils::time_format::TimeFormatter`].
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub slug: String,
    pub url: String,
    pub ip: Option<String>,
    pub status: i32,
    pub ua: Option<String>,
    pub create_time: String,
}

/// Input data for inserting a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub slug: String,
    pub url: String,
    pub ip: Option<String>,
    pub status: i32,
    pub ua: Option<String>,
    pub create_time: String,
}

impl NewLink {
    /// Creates an active link.
    pub fn active(
        slug: String,
        url: String,
        ip: Option<String>,
        ua: Option<String>,
        create_time: String,
    ) -> Self {
        Self {
            slug,
            url,
            ip,
            status: STATUS_ACTIVE,
            ua,
            create_time,
        }
    }

    /// Converts the insert payload into the row it produces.
    pub fn into_link(self) -> Link {
        Link {
            slug: self.slug,
            url: self.url,
            ip: self.ip,
            status: self.status,
            ua: self.ua,
            create_time: self.create_time,
        }
    }
}
