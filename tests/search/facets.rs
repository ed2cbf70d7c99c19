//! Facet histograms over the full matched set.

use crate::common::{catalog, fields};
use sift::{FacetBucket, FacetConfig, FieldValue, SearchEngine, SearchOptions};

fn bucket(value: &str, count: usize) -> FacetBucket {
    FacetBucket {
        value: value.to_string(),
        count,
    }
}

#[test]
fn test_counts_sorted_descending() {
    let engine = catalog();
    let options = SearchOptions::new().facet(FacetConfig::new("color"));
    let result = engine.search_with("cotton", &options);
    // red: p1 p5, blue: p2, green: p4
    assert_eq!(
        result.facets["color"],
        vec![bucket("red", 2), bucket("blue", 1), bucket("green", 1)]
    );
}

#[test]
fn test_facets_ignore_pagination() {
    let engine = catalog();
    let options = SearchOptions::new()
        .limit(1)
        .facet(FacetConfig::new("size"));
    let result = engine.search_with("cotton", &options);
    assert_eq!(result.hits.len(), 1);
    let total: usize = result.facets["size"].iter().map(|b| b.count).sum();
    assert_eq!(total, 4);
}

#[test]
fn test_min_count_and_size() {
    let engine = catalog();
    let options = SearchOptions::new()
        .facet(FacetConfig::new("color").with_min_count(2))
        .facet(FacetConfig::new("size").with_size(1));
    let result = engine.search_with("cotton", &options);
    assert_eq!(result.facets["color"], vec![bucket("red", 2)]);
    // size: S x2 (p4, p5), M x1, L x1
    assert_eq!(result.facets["size"], vec![bucket("S", 2)]);
}

#[test]
fn test_numeric_bucket_keys() {
    let engine = catalog();
    let options = SearchOptions::new().facet(FacetConfig::new("price"));
    let result = engine.search_with("cap", &options);
    assert_eq!(
        result.facets["price"],
        vec![bucket("10", 1), bucket("12", 1)]
    );
}

#[test]
fn test_facets_respect_filters() {
    let engine = catalog();
    let options = SearchOptions::new()
        .filter("color", "red")
        .facet(FacetConfig::new("size"));
    let result = engine.search_with("cotton", &options);
    assert_eq!(result.facets["size"], vec![bucket("M", 1), bucket("S", 1)]);
}

#[test]
fn test_missing_field_yields_empty_histogram() {
    let engine = catalog();
    let options = SearchOptions::new().facet(FacetConfig::new("brand"));
    let result = engine.search_with("cotton", &options);
    assert!(result.facets["brand"].is_empty());
}

#[test]
fn test_float_and_integer_values_bucket_separately() {
    let mut engine = SearchEngine::new();
    for (id, price) in [("a", FieldValue::Integer(2)), ("b", FieldValue::Float(2.0)), ("c", FieldValue::Float(2.0))] {
        engine.index(id, "lamp".to_string(), "lamp", fields(&[("price", price)]));
    }

    let result = engine.search_with("lamp", &SearchOptions::new().facet(FacetConfig::new("price")));
    assert_eq!(result.facets["price"], vec![bucket("2.0", 2), bucket("2", 1)]);
}

#[test]
fn test_facet_counts_as_value_map() {
    let engine = catalog();
    let options = SearchOptions::new()
        .facet(FacetConfig::new("color"))
        .facet(FacetConfig::new("missing"));
    let counts = engine.search_with("cotton", &options).facet_counts();

    assert_eq!(counts["color"]["red"], 2);
    assert_eq!(counts["color"]["blue"], 1);
    assert_eq!(counts["color"].len(), 3);
    assert!(counts["missing"].is_empty());
}
