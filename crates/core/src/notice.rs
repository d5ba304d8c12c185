//! Transient user-facing notifications shown after an action.

/// Outcome notice displayed once and then discarded.
///
/// Each notice has a short stable code so it can travel in a redirect
/// query string (`?notice=added`) between a mutation and the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
    FetchFailed,
    SaveFailed,
    DeleteFailed,
}

impl Notice {
    pub fn code(self) -> &'static str {
        match self {
            Notice::Added => "added",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
            Notice::FetchFailed => "fetch_failed",
            Notice::SaveFailed => "save_failed",
            Notice::DeleteFailed => "delete_failed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "added" => Some(Notice::Added),
            "updated" => Some(Notice::Updated),
            "deleted" => Some(Notice::Deleted),
            "fetch_failed" => Some(Notice::FetchFailed),
            "save_failed" => Some(Notice::SaveFailed),
            "delete_failed" => Some(Notice::DeleteFailed),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::Added => "Product added successfully!",
            Notice::Updated => "Product updated successfully!",
            Notice::Deleted => "Product deleted successfully!",
            Notice::FetchFailed => "Failed to fetch products",
            Notice::SaveFailed => "Operation failed!",
            Notice::DeleteFailed => "Failed to delete product",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(
            self,
            Notice::FetchFailed | Notice::SaveFailed | Notice::DeleteFailed
        )
    }
}
