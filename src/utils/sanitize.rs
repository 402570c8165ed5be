/// Clean user-supplied text using the ammonia library.
///
/// Messages, bios and cover letters are stored as entered and rendered by
/// arbitrary clients, so strip script tags and event-handler attributes
/// before they ever reach the database. Safe formatting tags survive.
pub fn clean_text(input: &str) -> String {
    ammonia::clean(input)
}
