use std::fs;

use blossy::{
    error::ToolError,
    tools::{
        count::{CharCountOptions, count_chars, count_lines},
        percentage::{Percentage, solve_percentage},
        random::random_numbers,
        standardize::standardize,
    },
};
use rand::{SeedableRng, rngs::StdRng};
use tempfile::tempdir;

fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir).unwrap()
                                             .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                                             .collect();
    names.sort();
    names
}

#[test]
fn counts_characters() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("text.txt");
    fs::write(&path, " hello   world \n").unwrap();

    assert_eq!(count_chars(&path, CharCountOptions::default()).unwrap(), 16);
    assert_eq!(count_chars(&path,
                           CharCountOptions { ignore_unnecessary: true,
                                              ..CharCountOptions::default() }).unwrap(),
               11);
    assert_eq!(count_chars(&path,
                           CharCountOptions { ignore_unnecessary: true,
                                              ignore_whitespace:  true, }).unwrap(),
               10);
}

#[test]
fn counts_multibyte_characters_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("text.txt");
    fs::write(&path, "ção").unwrap();

    assert_eq!(count_chars(&path, CharCountOptions::default()).unwrap(), 3);
}

#[test]
fn counts_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("main.rs");
    fs::write(&path, "fn main() {\n\n    println!();\n   \n}\n").unwrap();

    assert_eq!(count_lines(&path, true).unwrap(), 3);
    assert_eq!(count_lines(&path, false).unwrap(), 5);
}

#[test]
fn counting_reports_bad_paths() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.txt");
    let error = count_lines(&missing, true).unwrap_err();
    assert!(matches!(error, ToolError::FileNotFound { .. }));
    assert_eq!(error.to_string(), format!("'{}' does not exist.", missing.display()));

    let error = count_chars(dir.path(), CharCountOptions::default()).unwrap_err();
    assert!(matches!(error, ToolError::NotAFile { .. }));
}

#[test]
fn solves_percentages() {
    assert_eq!(solve_percentage(Some(100.0), Some(25.0), None).unwrap(),
               Percentage::Ratio(0.25));
    assert_eq!(solve_percentage(Some(200.0), None, Some(0.1)).unwrap(),
               Percentage::Part(20.0));
    assert_eq!(solve_percentage(None, Some(30.0), Some(0.5)).unwrap(),
               Percentage::Whole(60.0));
    assert_eq!(solve_percentage(Some(100.0), Some(25.0), None).unwrap().to_string(),
               "Ratio: 0.25");
}

#[test]
fn percentage_errors() {
    assert_eq!(solve_percentage(Some(0.0), Some(1.0), None).unwrap_err().to_string(),
               "Result does not exist.");
    assert_eq!(solve_percentage(None, Some(1.0), Some(0.0)).unwrap_err().to_string(),
               "Result does not exist.");
    assert_eq!(solve_percentage(Some(1.0), None, None).unwrap_err().to_string(),
               "Less than two parameters passed.");
    assert!(solve_percentage(None, None, None).is_err());
}

#[test]
fn random_numbers_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let numbers = random_numbers(-3, 3, 200, &mut rng).unwrap();

    assert_eq!(numbers.len(), 200);
    assert!(numbers.iter().all(|n| (-3..=3).contains(n)));
    assert!(numbers.contains(&-3) && numbers.contains(&3));

    assert_eq!(random_numbers(5, 5, 3, &mut rng).unwrap(), [5, 5, 5]);
    assert!(random_numbers(1, 1, 0, &mut rng).unwrap().is_empty());
}

#[test]
fn random_numbers_reject_inverted_ranges() {
    let mut rng = StdRng::seed_from_u64(0);
    let error = random_numbers(10, 1, 1, &mut rng).unwrap_err();
    assert_eq!(error.to_string(), "Invalid range.");
}

#[test]
fn standardize_renames_in_name_order() {
    let dir = tempdir().unwrap();
    for name in ["b.txt", "a.png", "c", ".hidden"] {
        fs::write(dir.path().join(name), name).unwrap();
    }
    fs::create_dir(dir.path().join("nested")).unwrap();

    let mut rng = StdRng::seed_from_u64(1);
    let outcome = standardize(dir.path(), "img", 1, 3, &mut rng).unwrap();

    assert_eq!(outcome.renamed, 4);
    assert_eq!(outcome.digits, 3);
    assert!(!outcome.readjusted);
    assert_eq!(file_names(dir.path()),
               ["img-001", "img-002.png", "img-003.txt", "img-004", "nested"]);
    assert_eq!(fs::read_to_string(dir.path().join("img-001")).unwrap(), ".hidden");
    assert_eq!(fs::read_to_string(dir.path().join("img-004")).unwrap(), "c");
}

#[test]
fn standardize_never_overwrites_existing_targets() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("x-1.txt"), "first").unwrap();
    fs::write(dir.path().join("x-0.txt"), "second").unwrap();

    let mut rng = StdRng::seed_from_u64(2);
    standardize(dir.path(), "x", 0, 1, &mut rng).unwrap();

    assert_eq!(file_names(dir.path()), ["x-0.txt", "x-1.txt"]);
    assert_eq!(fs::read_to_string(dir.path().join("x-0.txt")).unwrap(), "second");
    assert_eq!(fs::read_to_string(dir.path().join("x-1.txt")).unwrap(), "first");
}

#[test]
fn standardize_widens_digits_when_needed() {
    let dir = tempdir().unwrap();
    for i in 0..3 {
        fs::write(dir.path().join(format!("file{i}.md")), "").unwrap();
    }

    let mut rng = StdRng::seed_from_u64(3);
    let outcome = standardize(dir.path(), "doc", 98, 1, &mut rng).unwrap();

    assert!(outcome.readjusted);
    assert_eq!(outcome.digits, 3);
    assert_eq!(file_names(dir.path()), ["doc-098.md", "doc-099.md", "doc-100.md"]);
}

#[test]
fn standardize_validates_its_arguments() {
    let dir = tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(4);

    let error = standardize(dir.path(), "x", -1, 3, &mut rng).unwrap_err();
    assert_eq!(error.to_string(), "Negative starting number.");

    let file = dir.path().join("file.txt");
    fs::write(&file, "").unwrap();
    let error = standardize(&file, "x", 0, 3, &mut rng).unwrap_err();
    assert!(matches!(error, ToolError::NotADirectory { .. }));

    let error = standardize(&dir.path().join("missing"), "x", 0, 3, &mut rng).unwrap_err();
    assert!(matches!(error, ToolError::FileNotFound { .. }));
}
