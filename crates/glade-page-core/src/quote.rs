//! Reply-mention text rule.

/// Append an `@user ` mention to reply text.
///
/// A newline separates the mention from existing content; an empty textarea
/// gets the mention with no leading newline.
pub fn append_mention(existing: &str, user: &str) -> String {
    if existing.is_empty() {
        format!("@{user} ")
    } else {
        format!("{existing}\n@{user} ")
    }
}
