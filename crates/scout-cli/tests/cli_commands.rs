//! Integration tests for the scout CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a catalog with a few cards of every rarity.
fn test_catalog(dir: &Path) -> String {
    let idols = [
        ("Kousaka Honoka", "Second", "µ's", "Printemps"),
        ("Sonoda Umi", "Second", "µ's", "Lily White"),
        ("Takami Chika", "Second", "Aqours", "CYaRon!"),
    ];
    let mut cards = Vec::new();
    let mut id = 1;
    for rarity in ["N", "R", "SR", "SSR", "UR"] {
        for (name, year, unit, sub_unit) in idols {
            cards.push(serde_json::json!({
                "id": id,
                "rarity": rarity,
                "attribute": "Smile",
                "release_date": "2015-01-01",
                "is_promo": false,
                "is_special": false,
                "card_image": format!("//i.schoolido.lu/c/{id}.png"),
                "card_idolized_image": format!("//i.schoolido.lu/c/{id}idolized.png"),
                "round_card_image": format!("//i.schoolido.lu/r/{id}.png"),
                "round_card_idolized_image": null,
                "skill": "Score Up",
                "idol": {"name": name, "year": year, "main_unit": unit, "sub_unit": sub_unit}
            }));
            id += 1;
        }
    }
    let path = dir.join("cards.json");
    fs::write(&path, serde_json::to_string(&cards).unwrap()).unwrap();
    path.to_str().unwrap().to_string()
}

fn scout() -> Command {
    Command::cargo_bin("scout").unwrap()
}

// ---------------------------------------------------------------------------
// rates
// ---------------------------------------------------------------------------

#[test]
fn rates_lists_every_box() {
    scout()
        .arg("rates")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("regular")
                .and(predicate::str::contains("honour"))
                .and(predicate::str::contains("coupon"))
                .and(predicate::str::contains("95.00%")),
        );
}

#[test]
fn rates_single_box() {
    scout()
        .args(["rates", "--box", "coupon"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("80.00%")
                .and(predicate::str::contains("20.00%"))
                .and(predicate::str::contains("honour").not()),
        );
}

#[test]
fn rates_unknown_box() {
    scout()
        .args(["rates", "--box", "gold"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown box"));
}

// ---------------------------------------------------------------------------
// plan
// ---------------------------------------------------------------------------

#[test]
fn plan_guaranteed_honour() {
    scout()
        .args(["plan", "--box", "honour", "-n", "11", "--guaranteed", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("11 cards")
                .and(predicate::str::contains("ordering=random")),
        );
}

#[test]
fn plan_named_regular_is_all_n() {
    scout()
        .args(["plan", "--box", "regular", "-n", "5", "muse", "honoka"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("rarity=N")
                .and(predicate::str::contains("page_size=5"))
                .and(predicate::str::contains("idol_main_unit=µ's"))
                .and(predicate::str::contains("name=Honoka"))
                .and(predicate::str::contains("rarity=R&").not()),
        );
}

#[test]
fn plan_lists_parsed_filters() {
    scout()
        .args(["plan", "-n", "3", "aqours", "second", "you"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Filters: main_unit=Aqours name=You year=Second",
        ));
}

#[test]
fn plan_rejects_zero_count() {
    scout()
        .args(["plan", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid scout count"));
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_multi_writes_sheet() {
    let dir = TempDir::new().unwrap();
    let catalog = test_catalog(dir.path());
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    scout()
        .args(["draw", "-c", &catalog, "--box", "honour", "-n", "11", "--guaranteed"])
        .args(["--seed", "3", "--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Scouted")
                .and(predicate::str::contains("11 cards"))
                .and(predicate::str::contains("Image saved")),
        );

    let written: Vec<_> = fs::read_dir(&out).unwrap().collect();
    assert_eq!(written.len(), 1);
    let path = written[0].as_ref().unwrap().path();
    assert_eq!(path.extension().unwrap(), "png");
    let sheet: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
    assert_eq!(sheet["cards"], 11);
}

#[test]
fn draw_layout_sets_sheet_rows() {
    let dir = TempDir::new().unwrap();
    let catalog = test_catalog(dir.path());
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    scout()
        .args(["draw", "-c", &catalog, "-n", "11", "--layout", "3", "--seed", "5"])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success();

    let path = fs::read_dir(&out).unwrap().next().unwrap().unwrap().path();
    let sheet: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
    let rows = sheet["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    let lens: Vec<usize> = rows.iter().map(|r| r.as_array().unwrap().len()).collect();
    assert_eq!(lens, vec![4, 4, 3]);
}

#[test]
fn draw_solo_uses_image_scheme() {
    let dir = TempDir::new().unwrap();
    let catalog = test_catalog(dir.path());
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    scout()
        .args(["draw", "-c", &catalog, "--box", "coupon", "--seed", "4"])
        .args(["--scheme", "https", "--out", out.to_str().unwrap()])
        .assert()
        .success();

    let path = fs::read_dir(&out).unwrap().next().unwrap().unwrap().path();
    let pointer: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
    assert!(
        pointer["url"]
            .as_str()
            .unwrap()
            .starts_with("https://i.schoolido.lu/c/")
    );
}

#[test]
fn draw_solo_reads_local_image() {
    let dir = TempDir::new().unwrap();
    let catalog = test_catalog(dir.path());
    let images = dir.path().join("images");
    let out = dir.path().join("out");
    fs::create_dir(&images).unwrap();
    fs::create_dir(&out).unwrap();
    for id in 1..=15 {
        fs::write(images.join(format!("{id}.png")), format!("image {id}")).unwrap();
    }

    scout()
        .args(["draw", "-c", &catalog, "--box", "coupon", "--seed", "1"])
        .args(["--images", images.to_str().unwrap()])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cards"));

    let written: Vec<_> = fs::read_dir(&out).unwrap().collect();
    assert_eq!(written.len(), 1);
    let path = written[0].as_ref().unwrap().path();
    let name = path.file_stem().unwrap().to_str().unwrap().to_string();
    assert_eq!(fs::read_to_string(&path).unwrap(), format!("image {name}"));
}

#[test]
fn draw_json_is_trimmed() {
    let dir = TempDir::new().unwrap();
    let catalog = test_catalog(dir.path());

    let output = scout()
        .args(["draw", "-c", &catalog, "-n", "3", "--seed", "9", "--json"])
        .args(["--out", dir.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let cards: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(cards.len(), 3);
    for card in cards {
        let obj = card.as_object().unwrap();
        assert_eq!(obj.len(), 10);
        assert!(obj.get("skill").is_none());
        assert!(obj.get("idol").is_none());
        assert_eq!(obj["round_card_idolized_image"], "");
        assert!(obj["name"].as_str().unwrap().contains(' '));
    }
}

#[test]
fn draw_with_no_matches_reports_nothing() {
    let dir = TempDir::new().unwrap();
    let catalog = test_catalog(dir.path());
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    scout()
        .args(["draw", "-c", &catalog, "-n", "5", "--seed", "2", "name=Nobody"])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cards found"));

    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn draw_missing_catalog_fails() {
    let dir = TempDir::new().unwrap();
    scout()
        .args(["draw", "-c", dir.path().join("nope.json").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load catalog"));
}
