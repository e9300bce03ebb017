//! End-to-end pipeline tests against an in-memory document store.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use indoc::indoc;
use tempfile::TempDir;

use locship::{
    Config, Document, Error, Platform,
    export::run_export,
    store::DocumentStore,
};

/// Ordered in-memory stand-in for the document database.
struct MemoryStore {
    collections: Vec<(String, Vec<Document>)>,
}

impl MemoryStore {
    fn new(collections: Vec<(&str, Vec<Document>)>) -> Self {
        MemoryStore {
            collections: collections
                .into_iter()
                .map(|(name, docs)| (name.to_string(), docs))
                .collect(),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn collection_names(&self) -> Result<Vec<String>, Error> {
        Ok(self.collections.iter().map(|(name, _)| name.clone()).collect())
    }

    async fn documents(&self, collection: &str) -> Result<Vec<Document>, Error> {
        Ok(self
            .collections
            .iter()
            .find(|(name, _)| name == collection)
            .map(|(_, docs)| docs.clone())
            .unwrap_or_default())
    }
}

fn lang_doc(lang: &str, pairs: &[(&str, &str)]) -> Document {
    let mut doc: Document = [("_id", format!("id-{}", lang)), ("lang", lang.to_string())]
        .into_iter()
        .collect();
    for &(key, value) in pairs {
        doc.push(key, value);
    }
    doc
}

fn config(platform: Platform, out_dir: PathBuf) -> Config {
    Config {
        platform,
        db_password: "secret".to_string(),
        out_dir,
    }
}

fn greeting_store() -> MemoryStore {
    MemoryStore::new(vec![(
        "greeting",
        vec![
            lang_doc("en", &[("hello", "Hi")]),
            lang_doc("ua", &[("hello", "Привіт")]),
        ],
    )])
}

#[tokio::test]
async fn web_export_writes_one_json_artifact_per_language() {
    let dir = TempDir::new().unwrap();
    let store = greeting_store();

    let written = run_export(&store, &config(Platform::Web, dir.path().to_path_buf()), "ts")
        .await
        .unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("localization-en.json"),
            dir.path().join("localization-uk.json"),
        ]
    );

    let en = fs::read_to_string(dir.path().join("localization-en.json")).unwrap();
    assert_eq!(
        en,
        indoc! {r#"
            {
              "greeting_hello": "Hi"
            }"#}
    );

    let uk = fs::read_to_string(dir.path().join("localization-uk.json")).unwrap();
    assert!(uk.contains("\"greeting_hello\": \"Привіт\""));
}

#[tokio::test]
async fn entries_accumulate_in_collection_listing_order() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(vec![
        (
            "menu",
            vec![
                lang_doc("en", &[("open", "Open")]),
                lang_doc("ua", &[("open", "Відкрити")]),
            ],
        ),
        (
            "greeting",
            vec![
                lang_doc("en", &[("hello", "Hi")]),
                lang_doc("ua", &[("hello", "Привіт")]),
            ],
        ),
    ]);

    run_export(&store, &config(Platform::Web, dir.path().to_path_buf()), "ts")
        .await
        .unwrap();

    let en = fs::read_to_string(dir.path().join("localization-en.json")).unwrap();
    assert!(en.find("menu_open").unwrap() < en.find("greeting_hello").unwrap());
}

#[tokio::test]
async fn android_export_writes_fixed_xml_wrapper() {
    let dir = TempDir::new().unwrap();
    let store = greeting_store();

    run_export(
        &store,
        &config(Platform::Android, dir.path().to_path_buf()),
        "ts",
    )
    .await
    .unwrap();

    let en = fs::read_to_string(dir.path().join("localization-en.xml")).unwrap();
    assert_eq!(
        en,
        indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <resources>
            <string name="greeting_hello">Hi</string>
            </resources>
        "#}
    );
    assert!(dir.path().join("localization-uk.xml").exists());
}

#[tokio::test]
async fn ios_export_writes_uppercase_labels_and_timestamp_header() {
    let dir = TempDir::new().unwrap();
    let store = greeting_store();

    let written = run_export(
        &store,
        &config(Platform::Ios, dir.path().to_path_buf()),
        "2024-01-02T03:04:05.000Z",
    )
    .await
    .unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("Localizable_EN.strings"),
            dir.path().join("Localizable_UK.strings"),
        ]
    );

    let en = fs::read_to_string(dir.path().join("Localizable_EN.strings")).unwrap();
    assert!(en.contains("on 2024-01-02T03:04:05.000Z"));
    assert!(en.contains("\"greeting_hello\" = Hi\n"));
}

#[tokio::test]
async fn missing_lang_field_aborts_before_any_write() {
    let dir = TempDir::new().unwrap();
    let mut no_lang: Document = [("_id", "id-x")].into_iter().collect();
    no_lang.push("hello", "Hi");
    let store = MemoryStore::new(vec![(
        "greeting",
        vec![no_lang, lang_doc("ua", &[("hello", "Привіт")])],
    )]);

    let err = run_export(&store, &config(Platform::Web, dir.path().to_path_buf()), "ts")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::MissingLanguageField { ref collection } if collection == "greeting"
    ));
    assert!(!dir.path().join("localization-en.json").exists());
    assert!(!dir.path().join("localization-uk.json").exists());
}

#[tokio::test]
async fn missing_target_language_aborts_run() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(vec![(
        "greeting",
        vec![lang_doc("en", &[("hello", "Hi")])],
    )]);

    let err = run_export(&store, &config(Platform::Web, dir.path().to_path_buf()), "ts")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::NoMatchingDocument { ref language, .. } if language == "ua"
    ));
}

#[tokio::test]
async fn shape_mismatch_aborts_run() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(vec![(
        "greeting",
        vec![
            lang_doc("en", &[("hello", "Hi"), ("bye", "Bye")]),
            lang_doc("ua", &[("hello", "Привіт")]),
        ],
    )]);

    let err = run_export(&store, &config(Platform::Web, dir.path().to_path_buf()), "ts")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ShapeMismatch { left: 3, right: 2, .. }));
}

#[tokio::test]
async fn empty_collections_are_skipped() {
    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(vec![
        ("drafts", Vec::new()),
        (
            "greeting",
            vec![
                lang_doc("en", &[("hello", "Hi")]),
                lang_doc("ua", &[("hello", "Привіт")]),
            ],
        ),
    ]);

    run_export(&store, &config(Platform::Web, dir.path().to_path_buf()), "ts")
        .await
        .unwrap();

    let en = fs::read_to_string(dir.path().join("localization-en.json")).unwrap();
    assert!(en.contains("greeting_hello"));
    assert!(!en.contains("drafts"));
}
