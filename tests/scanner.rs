use modmap::core::FileScanner;
use std::fs;
use std::path::Path;

#[test]
fn scanner_filters_by_extension_and_visits_in_sorted_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("pkg")).unwrap();

    fs::write(root.join("zeta.py"), "x = 1\n").unwrap();
    fs::write(root.join("alpha.py"), "y = 2\n").unwrap();
    fs::write(root.join("pkg/util.py"), "z = 3\n").unwrap();
    fs::write(root.join("notes.txt"), "ignored\n").unwrap();

    let scanner = FileScanner::new();
    let files = scanner.scan_directory(root, "py").unwrap();

    let names: Vec<_> = files.iter().map(|f| f.module_name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "pkg.util", "zeta"]);
}

#[test]
fn module_name_derives_from_root_relative_path() {
    let name = FileScanner::module_name(Path::new("pkg"), Path::new("pkg/sub/mod.py"));
    assert_eq!(name, "sub.mod");

    let flat = FileScanner::module_name(Path::new("pkg"), Path::new("pkg/top.py"));
    assert_eq!(flat, "top");
}

#[test]
fn repeat_scans_see_the_same_sequence() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("b/one.py"), "").unwrap();
    fs::write(root.join("a.py"), "").unwrap();
    fs::write(root.join("c.py"), "").unwrap();

    let scanner = FileScanner::new();
    let first: Vec<_> = scanner
        .scan_directory(root, "py")
        .unwrap()
        .into_iter()
        .map(|f| f.path)
        .collect();
    let second: Vec<_> = scanner
        .scan_directory(root, "py")
        .unwrap()
        .into_iter()
        .map(|f| f.path)
        .collect();
    assert_eq!(first, second);
}
