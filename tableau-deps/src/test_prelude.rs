use crate::document::Document;
use std::fs;

pub fn read_document_from_file(filename: &str) -> Document {
    fs::read_to_string(filename).unwrap().parse().unwrap()
}

pub fn demo_files() -> Vec<String> {
    let mut files = fs::read_dir("../demos")
        .unwrap()
        .map(|item| item.unwrap().path().display().to_string())
        .filter(|path| path.ends_with(".json"))
        .collect::<Vec<_>>();
    files.sort();
    files
}
