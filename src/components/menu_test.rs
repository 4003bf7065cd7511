use super::*;

#[test]
fn entries_are_unique_absolute_paths() {
    let mut paths: Vec<_> = MENU_ENTRIES.iter().map(|(path, _)| *path).collect();
    assert!(paths.iter().all(|path| path.starts_with('/')));
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), MENU_ENTRIES.len());
}
