//! Access log entry written on every successful slug resolution.

/// One row of the `logs` table.
///
/// `url` and `slug` are copied from the resolved link so the log stays
/// readable even if the link row changes later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccessLog {
    pub url: String,
    pub slug: String,
    pub ip: Option<String>,
    pub referer: Option<String>,
    pub ua: Option<String>,
    pub create_time: String,
}
