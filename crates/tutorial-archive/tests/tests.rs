use std::fs::File;
use std::io::Write;
use std::path::Path;

use tutorial_archive::{Error, extract_zip};

fn write_fixture(path: &Path, members: &[(&str, &str)]) {
    let file = File::create(path).expect("Failed to create fixture");
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, body) in members {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap();
}

#[test]
fn extract_two_entry_zip() {
    let temp_dir = tempfile::Builder::new()
        .prefix("tutorial-test-zip-")
        .tempdir()
        .expect("Failed to create temp dir");
    let archive = temp_dir.path().join("test.zip");
    write_fixture(&archive, &[("a.txt", "alpha"), ("b.txt", "beta")]);
    let dest = temp_dir.path().join("dest");

    let entries = extract_zip(&archive, &dest).expect("Extraction of test.zip failed");

    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["a.txt", "b.txt"]);

    let mut on_disk: Vec<_> = std::fs::read_dir(&dest)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    on_disk.sort();
    assert_eq!(on_disk, ["a.txt", "b.txt"]);
    assert_eq!(std::fs::read_to_string(dest.join("a.txt")).unwrap(), "alpha");
    assert_eq!(std::fs::read_to_string(dest.join("b.txt")).unwrap(), "beta");
}

#[test]
fn extract_zip_with_root_directory_entry() {
    let temp_dir = tempfile::Builder::new()
        .prefix("tutorial-test-zip-")
        .tempdir()
        .expect("Failed to create temp dir");
    let archive = temp_dir.path().join("folder.zip");
    write_fixture(&archive, &[("/", ""), ("a.txt", "alpha")]);
    let dest = temp_dir.path().join("dest");

    let entries = extract_zip(&archive, &dest).expect("Extraction of folder.zip failed");

    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["/", "a.txt"]);
    assert!(entries[0].is_directory);
    assert_eq!(entries[0].target_path, dest);

    let on_disk: Vec<_> = std::fs::read_dir(&dest)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(on_disk, ["a.txt"]);
    assert_eq!(std::fs::read_to_string(dest.join("a.txt")).unwrap(), "alpha");
}

#[test]
fn extract_into_existing_directory_overwrites() {
    let temp_dir = tempfile::tempdir().unwrap();
    let archive = temp_dir.path().join("test.zip");
    write_fixture(&archive, &[("a.txt", "new")]);
    let dest = temp_dir.path().join("dest");
    std::fs::create_dir(&dest).unwrap();
    std::fs::write(dest.join("a.txt"), "old").unwrap();

    extract_zip(&archive, &dest).unwrap();

    assert_eq!(std::fs::read_to_string(dest.join("a.txt")).unwrap(), "new");
}

#[test]
fn extract_corrupt_zip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let archive = temp_dir.path().join("corrupt.zip");
    std::fs::write(&archive, "<html>not found</html>").unwrap();

    let result = extract_zip(&archive, temp_dir.path().join("dest"));

    assert!(matches!(result, Err(Error::Zip(_))));
}
