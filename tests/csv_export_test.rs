//! CSV and summary export through the public API.

mod common;

use common::{minimal_free_profile, reference_profile};
use roicalc::{compute_outcome, compute_with_defaults, generate_csv, generate_summary, RoiAssumptions};

/// Minimal RFC 4180 reader: splits records on `\n` and fields on unquoted commas.
fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    for line in text.lines() {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut quoted = false;
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match (c, quoted) {
                ('"', true) if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                ('"', _) => quoted = !quoted,
                (',', false) => fields.push(std::mem::take(&mut field)),
                (c, _) => field.push(c),
            }
        }
        fields.push(field);
        records.push(fields);
    }
    records
}

#[test]
fn test_csv_parses_back_with_exact_header() {
    for (profile, assumptions) in [
        (reference_profile(), RoiAssumptions::default()),
        (reference_profile(), RoiAssumptions::simple()),
        (minimal_free_profile(), RoiAssumptions::default()),
    ] {
        let outcome = compute_outcome(&profile, &assumptions).unwrap();
        let csv = generate_csv(&profile, &outcome);
        let records = parse_csv(&csv);

        assert_eq!(csv.lines().next(), Some("Metric,Value,Unit"));
        assert_eq!(records.len(), csv.lines().count());
        assert!(csv.ends_with('\n'));
        for record in records.iter().filter(|r| !(r.len() == 1 && r[0].is_empty())) {
            assert_eq!(record.len(), 3, "{record:?}");
        }
    }
}

#[test]
fn test_csv_values_match_outcome() {
    let profile = reference_profile();
    let outcome = compute_with_defaults(&profile).unwrap();
    let records = parse_csv(&generate_csv(&profile, &outcome));
    let value_of = |metric: &str| {
        records
            .iter()
            .find(|r| r[0] == metric)
            .map(|r| r[1].clone())
            .unwrap()
    };
    assert_eq!(value_of("Net monthly benefit"), outcome.net_monthly_benefit.to_string());
    assert_eq!(value_of("ROI"), outcome.roi_percent.to_string());
    assert_eq!(value_of("Minutes saved per job"), "15");
}

#[test]
fn test_summary_uses_indian_grouping() {
    let profile = reference_profile();
    let outcome = compute_with_defaults(&profile).unwrap();
    let summary = generate_summary(&profile, &outcome);
    assert!(summary.contains("₹3,60,000"));
    assert!(summary.contains("₹5,00,292"));
    assert!(!summary.contains("360,000"));
}
