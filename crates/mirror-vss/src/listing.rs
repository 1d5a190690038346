//! Parser for `ss dir -F` output

use mirror_tree::Entry;

/// Parse one project level out of `ss dir -F` output.
///
/// A populated project lists its children under a header line repeating
/// the project path, with subprojects prefixed by `$`, and closes with
/// an item count:
///
/// ```text
/// $/Project/sub:
/// $img
/// readme.txt
///
/// 2 item(s)
/// ```
///
/// An empty project replaces the body with a
/// `No items found under $/Project/sub` notice.
pub fn parse_dir_listing(output: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    // The first line repeats the project path.
    for line in output.lines().skip(1) {
        let line = line.trim();
        if line.is_empty()
            || line.ends_with("item(s)")
            || line.starts_with("No items found under")
        {
            continue;
        }
        match line.strip_prefix('$') {
            Some(name) => entries.push(Entry::dir(name)),
            None => entries.push(Entry::file(line)),
        }
    }
    entries
}
