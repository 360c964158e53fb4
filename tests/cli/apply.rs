use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

const MODEL: &str = r#"{
  "id": 0,
  "name": "shapes",
  "kind": 0,
  "children": [
    {
      "id": 1,
      "name": "Foo",
      "kind": 128,
      "comment": { "shortText": "A foo.", "text": "Longer foo." },
      "sources": [{ "fileName": "src/a/foo.ts", "line": 1 }],
      "children": [
        {
          "id": 2,
          "name": "bar",
          "kind": 1024,
          "comment": { "shortText": "The bar." }
        },
        {
          "id": 3,
          "name": "qux",
          "kind": 262144,
          "getSignature": [
            { "id": 4, "name": "__get", "kind": 524288, "comment": { "shortText": "Gets qux." } }
          ],
          "setSignature": [
            { "id": 5, "name": "__set", "kind": 1048576, "comment": { "shortText": "Sets qux." } }
          ]
        }
      ]
    },
    {
      "id": 6,
      "name": "baz",
      "kind": 64,
      "sources": [{ "fileName": "src/baz.ts", "line": 1 }],
      "signatures": [
        { "id": 7, "name": "baz", "kind": 4096, "comment": { "shortText": "Does baz.", "text": "Really." } }
      ]
    }
  ]
}
"#;

const FOO: &str = r#"{
  "Foo": {
    "comment": { "shortText": ["Un foo."], "text": ["Ligne 1", "Ligne 2"] },
    "property": {
      "bar": { "comment": { "shortText": ["La barre."] } },
      "qux": { "get": { "comment": { "shortText": ["Lit qux."] } } }
    }
  }
}"#;

const GLOBAL_FUNCTIONS: &str = r#"{
  "baz": { "comment": { "shortText": ["Fait baz."], "text": ["Vraiment."] } }
}"#;

fn localized_project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("model.json", MODEL)?;
    test.write_file("l10n/fr/a/Foo.json", FOO)?;
    test.write_file("l10n/fr/globalFunctions.json", GLOBAL_FUNCTIONS)?;
    Ok(test)
}

#[test]
fn test_apply_localizes_model() -> Result<()> {
    let test = localized_project()?;

    assert_cmd_snapshot!(
        test.apply_command()
            .args(["model.json", "--localize", "l10n/fr", "-o", "out/model.fr.json"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Localized 6 comment fields on 4 reflections (2 of 2 localization files found)
      --> out/model.fr.json

    ----- stderr -----
    "
    );

    let model = test.read_json("out/model.fr.json")?;
    assert_eq!(
        model.pointer("/children/0/comment"),
        Some(&json!({ "shortText": "Un foo.", "text": "Ligne 1\nLigne 2" }))
    );
    assert_eq!(
        model.pointer("/children/0/children/0/comment"),
        Some(&json!({ "shortText": "La barre." }))
    );
    assert_eq!(
        model.pointer("/children/0/children/1/getSignature/0/comment"),
        Some(&json!({ "shortText": "Lit qux." }))
    );
    assert_eq!(
        model.pointer("/children/0/children/1/setSignature/0/comment"),
        Some(&json!({ "shortText": "Sets qux." }))
    );
    assert_eq!(
        model.pointer("/children/1/signatures/0/comment"),
        Some(&json!({ "shortText": "Fait baz.", "text": "Vraiment." }))
    );

    // The input model is left alone when an output is given.
    assert_eq!(test.read_file("model.json")?, MODEL);

    Ok(())
}

#[test]
fn test_apply_in_place_with_config() -> Result<()> {
    let test = localized_project()?;
    test.write_file(".doclocrc.json", r#"{ "localizeRoot": "l10n/fr" }"#)?;

    assert_cmd_snapshot!(test.apply_command().arg("model.json"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Localized 6 comment fields on 4 reflections (2 of 2 localization files found)
      --> model.json

    ----- stderr -----
    ");

    let model = test.read_json("model.json")?;
    assert_eq!(
        model.pointer("/children/0/comment/shortText"),
        Some(&json!("Un foo."))
    );

    Ok(())
}

#[test]
fn test_apply_twice_is_idempotent() -> Result<()> {
    let test = localized_project()?;

    for _ in 0..2 {
        let output = test
            .apply_command()
            .args(["model.json", "--localize", "l10n/fr"])
            .output()?;
        assert!(output.status.success());
    }
    let twice = test.read_file("model.json")?;

    test.apply_command()
        .args(["model.json", "--localize", "l10n/fr"])
        .output()?;

    assert_eq!(test.read_file("model.json")?, twice);

    Ok(())
}

#[test]
fn test_apply_prepass_gives_same_result() -> Result<()> {
    let test = localized_project()?;

    test.apply_command()
        .args(["model.json", "--localize", "l10n/fr", "-o", "sequential.json"])
        .output()?;

    assert_cmd_snapshot!(
        test.apply_command().args([
            "model.json",
            "--localize",
            "l10n/fr",
            "--prepass",
            "-o",
            "prepass.json",
        ]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Localized 6 comment fields on 4 reflections (2 of 2 localization files found)
      --> prepass.json

    ----- stderr -----
    "
    );
    assert_eq!(test.read_file("prepass.json")?, test.read_file("sequential.json")?);

    Ok(())
}

#[test]
fn test_apply_without_localize_root_leaves_model_alone() -> Result<()> {
    let test = localized_project()?;

    assert_cmd_snapshot!(test.apply_command().arg("model.json"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    note: no localization root configured (use --localize or "localizeRoot" in .doclocrc.json)
    "#);
    assert_eq!(test.read_file("model.json")?, MODEL);

    Ok(())
}

#[test]
fn test_apply_without_global_functions_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("model.json", MODEL)?;
    test.write_file("l10n/fr/a/Foo.json", FOO)?;
    // Unparsable: treated as absent.
    test.write_file("l10n/fr/globalFunctions.json", "{ \"baz\": ")?;

    assert_cmd_snapshot!(
        test.apply_command()
            .args(["model.json", "--localize", "l10n/fr", "-o", "out.json"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Localized 4 comment fields on 3 reflections (1 of 2 localization files found)
      --> out.json

    ----- stderr -----
    warning: 1 localization file(s) could not be read (use -v for details)
    "
    );

    let model = test.read_json("out.json")?;
    assert_eq!(
        model.pointer("/children/1/signatures/0/comment"),
        Some(&json!({ "shortText": "Does baz.", "text": "Really." }))
    );

    Ok(())
}

#[test]
fn test_apply_verbose() -> Result<()> {
    let test = localized_project()?;

    assert_cmd_snapshot!(
        test.apply_command()
            .args(["model.json", "--localize", "l10n/fr", "-o", "out.json", "-v"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
      localized: Class Foo: shortText, text
      localized: Property bar: shortText
      localized: GetSignature __get: shortText
      localized: CallSignature baz: shortText, text
    ✓ Localized 6 comment fields on 4 reflections (2 of 2 localization files found)
      --> out.json

    ----- stderr -----
    Note: No .doclocrc.json found, using default configuration
    "
    );

    Ok(())
}

#[test]
fn test_apply_verbose_lists_missing_documents() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("model.json", MODEL)?;
    test.write_file(".doclocrc.json", r#"{ "localizeRoot": "l10n/fr" }"#)?;

    assert_cmd_snapshot!(
        test.apply_command().args(["model.json", "-o", "out.json", "-v"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
      missing: l10n/fr/globalFunctions.json
      missing: l10n/fr/a/Foo.json
    ✓ Localized 0 comment fields on 0 reflections (0 of 2 localization files found)
      --> out.json

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_apply_custom_source_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("model.json", &MODEL.replace("src/a/foo.ts", "lib/a/foo.ts"))?;
    test.write_file("l10n/fr/a/Foo.json", FOO)?;

    assert_cmd_snapshot!(
        test.apply_command().args([
            "model.json",
            "--localize",
            "l10n/fr",
            "--source-root",
            "lib",
            "-o",
            "out.json",
        ]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Localized 4 comment fields on 3 reflections (1 of 2 localization files found)
      --> out.json

    ----- stderr -----
    "
    );

    let model = test.read_json("out.json")?;
    assert_eq!(
        model.pointer("/children/0/comment/shortText"),
        Some(&json!("Un foo."))
    );

    Ok(())
}

#[test]
fn test_apply_invalid_model_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("model.json", "{ broken")?;

    let mut settings = test.settings();
    settings.add_filter(r"at line \d+ column \d+", "at [POSITION]");
    settings.bind(|| {
        assert_cmd_snapshot!(
            test.apply_command().args(["model.json", "--localize", "l10n"]),
            @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to load model file: "model.json": Invalid JSON: key must be a string at [POSITION]
        "#
        );
    });

    Ok(())
}

#[test]
fn test_apply_missing_model_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    let missing = test.root().join("missing.json");

    test.settings().bind(|| {
        assert_cmd_snapshot!(
            test.apply_command().arg(&missing).args(["--localize", "l10n"]),
            @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to read model file: "[TEMP]/missing.json": No such file or directory (os error 2)
        "#
        );
    });
    assert!(!missing.exists());

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: docloc"));

    Ok(())
}
