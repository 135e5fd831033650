use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const DATA: &str = r#"[
    {
        "id": 1,
        "name": "Tarte aux pommes",
        "ingredients": [{"ingredient": "pomme", "quantity": 4}],
        "appliance": "four",
        "ustensils": ["rouleau", "moule à tarte"],
        "time": 50
    },
    {
        "id": 2,
        "name": "Poisson grillé",
        "ingredients": [{"ingredient": "poisson"}, {"ingredient": "citron"}],
        "appliance": "four",
        "ustensils": ["grill"],
        "time": 25
    }
]"#;

fn data_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(DATA.as_bytes()).expect("write fixture");
    file
}

fn recipes() -> Command {
    Command::cargo_bin("recipes").expect("binary built")
}

#[test]
fn search_without_criteria_lists_everything() {
    let data = data_file();
    recipes()
        .args(["search", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Tarte aux pommes"))
        .stdout(predicate::str::contains("Poisson grillé"))
        .stdout(predicate::str::contains("2 recipe(s)"));
}

#[test]
fn query_filters_by_substring() {
    let data = data_file();
    recipes()
        .args(["search", "--query", "pomme", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Tarte aux pommes"))
        .stdout(predicate::str::contains("Poisson grillé").not());
}

#[test]
fn query_under_three_chars_filters_nothing() {
    let data = data_file();
    recipes()
        .args(["search", "--query", "po", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 recipe(s)"));
}

#[test]
fn disjoint_tags_print_the_no_results_message() {
    let data = data_file();
    recipes()
        .args([
            "search",
            "--ingredient",
            "pomme",
            "--ustensil",
            "grill",
            "--data",
        ])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipe matches your search."));
}

#[test]
fn invalid_regex_degrades_to_no_results() {
    let data = data_file();
    recipes()
        .args(["search", "--regex", "--query", "(pomme", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("not a valid pattern"));
}

#[test]
fn json_output_carries_matches_facets_and_selection() {
    let data = data_file();
    let assert = recipes()
        .args(["search", "--json", "--appliance", "four", "--data"])
        .arg(data.path())
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(doc["total"], 2);
    assert_eq!(doc["matches"][0]["name"], "Tarte aux pommes");
    assert_eq!(doc["selected"]["appliances"][0], "four");
    // Both recipes survive the appliance filter, so both ingredients stay
    // on offer.
    assert_eq!(doc["facets"]["ingredients"][0], "pomme");
    assert_eq!(doc["facets"]["ingredients"][1], "poisson");
    assert_eq!(doc["invalid_query"], false);
}

#[test]
fn limit_truncates_the_card_list() {
    let data = data_file();
    recipes()
        .args(["search", "--limit", "1", "--data"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("... and 1 more"))
        .stdout(predicate::str::contains("2 recipe(s)"));
}

#[test]
fn missing_data_file_is_an_error() {
    recipes()
        .args(["search", "--data", "/nonexistent/recipes.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading recipes"));
}
