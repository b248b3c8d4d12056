//! End-to-end tests for the selection pipeline.

mod common;

use std::path::Path;

use common::{origin, qualifying_server, stats};
use vpnselect::catalog::server::{Category, CATEGORY_P2P, CATEGORY_STANDARD};
use vpnselect::catalog::Coordinates;
use vpnselect::source::local;
use vpnselect::{output, SelectionCriteria, Selector};

fn criteria(max_distance_miles: u32, max_load_percent: u16, count: usize) -> SelectionCriteria {
    SelectionCriteria {
        location: origin(),
        country: "US".to_string(),
        max_distance_miles,
        max_load_percent,
        count,
    }
}

#[test]
fn test_three_server_ranking_scenario() {
    // Loads [10, 5, 20], distances [50, 80, 10]; the lowest load wins even
    // though it is the farthest, and the count cap drops the third.
    let servers = vec![
        qualifying_server("a.example.com", "US", 50.0),
        qualifying_server("b.example.com", "US", 80.0),
        qualifying_server("c.example.com", "US", 10.0),
    ];
    let stats = stats(&[("a.example.com", 10), ("b.example.com", 5), ("c.example.com", 20)]);

    let selected = Selector::new(criteria(100, 50, 2)).select(servers, &stats);

    let domains: Vec<_> = selected.iter().map(|s| s.server.domain.as_str()).collect();
    assert_eq!(domains, ["b.example.com", "a.example.com"]);
    assert_eq!(selected[0].load_percent, 5);
    assert!((selected[0].distance_miles - 80.0).abs() < 0.1);
    assert_eq!(selected[1].load_percent, 10);
    assert!((selected[1].distance_miles - 50.0).abs() < 0.1);
}

#[test]
fn test_missing_stats_entry_gets_sentinel_and_is_dropped() {
    let servers = vec![qualifying_server("ghost.example.com", "US", 10.0)];
    let selected = Selector::new(criteria(100, 50, 5)).select(servers, &stats(&[]));
    assert!(selected.is_empty());
}

#[test]
fn test_empty_input_yields_empty_output() {
    let selected = Selector::new(criteria(100, 50, 5)).select(Vec::new(), &stats(&[]));
    assert!(selected.is_empty());
}

#[test]
fn test_count_exceeding_qualifiers_returns_all() {
    let servers = vec![
        qualifying_server("a.example.com", "US", 10.0),
        qualifying_server("b.example.com", "US", 20.0),
    ];
    let stats = stats(&[("a.example.com", 5), ("b.example.com", 10)]);

    let selected = Selector::new(criteria(100, 50, 99)).select(servers, &stats);
    assert_eq!(selected.len(), 2);
}

#[test]
fn test_output_honors_every_criterion() {
    let far = qualifying_server("far.example.com", "US", 150.0);
    let wrong_country = qualifying_server("de.example.com", "DE", 10.0);
    let mut no_p2p = qualifying_server("nop2p.example.com", "US", 10.0);
    no_p2p.categories = vec![Category { name: CATEGORY_STANDARD.to_string() }];
    let mut no_udp = qualifying_server("noudp.example.com", "US", 10.0);
    no_udp.features.insert("openvpn_udp".to_string(), false);

    let servers = vec![
        qualifying_server("ok1.example.com", "US", 30.0),
        qualifying_server("ok2.example.com", "US", 60.0),
        qualifying_server("loaded.example.com", "US", 5.0),
        qualifying_server("nostats.example.com", "US", 5.0),
        far,
        wrong_country,
        no_p2p,
        no_udp,
    ];
    let stats = stats(&[
        ("ok1.example.com", 20),
        ("ok2.example.com", 12),
        ("loaded.example.com", 30), // at the ceiling, must be rejected
        ("far.example.com", 1),
        ("de.example.com", 1),
        ("nop2p.example.com", 1),
        ("noudp.example.com", 1),
    ]);

    let criteria = criteria(100, 30, 5);
    let selected = Selector::new(criteria.clone()).select(servers, &stats);

    assert!(selected.len() <= criteria.count);
    for entry in &selected {
        assert_eq!(entry.server.flag, criteria.country);
        assert!(entry.server.has_category(CATEGORY_STANDARD));
        assert!(entry.server.has_category(CATEGORY_P2P));
        assert!(entry.server.supports("openvpn_udp", true));
        assert!(entry.distance_miles < f64::from(criteria.max_distance_miles));
        assert!(entry.load_percent < criteria.max_load_percent);
    }
    for pair in selected.windows(2) {
        assert!(
            (pair[0].load_percent, pair[0].distance_miles)
                <= (pair[1].load_percent, pair[1].distance_miles),
            "output not sorted by (load, distance)"
        );
    }

    let domains: Vec<_> = selected.iter().map(|s| s.server.domain.as_str()).collect();
    assert_eq!(domains, ["ok2.example.com", "ok1.example.com"]);
}

#[test]
fn test_selection_is_idempotent() {
    let servers = vec![
        qualifying_server("a.example.com", "US", 50.0),
        qualifying_server("b.example.com", "US", 80.0),
        qualifying_server("c.example.com", "US", 10.0),
    ];
    let stats = stats(&[("a.example.com", 10), ("b.example.com", 5), ("c.example.com", 20)]);
    let selector = Selector::new(criteria(100, 50, 3));

    let first = selector.select(servers.clone(), &stats);
    let second = selector.select(servers, &stats);

    assert_eq!(output::render(&first).unwrap(), output::render(&second).unwrap());
}

#[test]
fn test_fixture_files_round_trip_through_pipeline() {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let servers = local::load_servers(&fixtures.join("servers.json")).unwrap();
    let stats = local::load_stats(&fixtures.join("stats.json")).unwrap();
    assert_eq!(servers.len(), 5);

    let criteria = SelectionCriteria {
        location: Coordinates { lat: 40.7128, long: -74.006 }, // NYC
        country: "US".to_string(),
        max_distance_miles: 1000,
        max_load_percent: 60,
        count: 2,
    };
    let selected = Selector::new(criteria).select(servers, &stats);

    // us2 has the lowest load; us1 is next. us3 has no stats entry, de1 is
    // the wrong country, us4 lacks the P2P tier.
    let domains: Vec<_> = selected.iter().map(|s| s.server.domain.as_str()).collect();
    assert_eq!(domains, ["us2.example.com", "us1.example.com"]);
}
