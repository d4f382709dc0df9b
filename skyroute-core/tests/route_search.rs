use skyroute_core::{plan_route, HexMap, RouteResult, VisitState};

fn plan(rows: &str) -> (HexMap, RouteResult) {
    let mut map: HexMap = rows.parse().expect("map parses");
    let result = plan_route(&mut map).expect("search completes");
    (map, result)
}

fn are_neighbors(map: &HexMap, a: usize, b: usize) -> bool {
    map.cell(a).neighbors.contains(&Some(b))
}

#[test]
fn finds_shortest_route_around_a_no_fly_cell() {
    // Six cells, one blocked; the shortest route is three hops.
    let (map, result) = plan(r#"{"rows": ["O.N", "..D"]}"#);
    assert!(result.reached);

    let path = &result.path;
    assert_eq!(path.first().copied(), Some(map.origin()));
    assert_eq!(path.last().copied(), Some(map.destination()));
    assert_eq!(path.len(), 4, "three hops");
    for w in path.windows(2) {
        assert!(are_neighbors(&map, w[0], w[1]), "{} -> {} must be adjacent", w[0], w[1]);
        assert!(!map.cell(w[1]).no_fly);
    }
    assert_eq!(map.cell(map.destination()).distance, 3);
}

#[test]
fn predecessor_chain_matches_recorded_distances() {
    let (map, result) = plan(r#"{"rows": ["O....", ".N.N.", "....D"]}"#);
    assert!(result.reached);
    for (hops, &cell) in result.path.iter().enumerate() {
        assert_eq!(map.cell(cell).distance, hops as u32);
    }
}

#[test]
fn cells_are_finalized_at_most_once() {
    let (map, result) = plan(r#"{"rows": ["O....", ".....", "....D"]}"#);
    assert!(result.reached);
    // Every extraction finalizes a distinct cell, so the expansion count can
    // never exceed the cell count.
    assert!(result.expanded <= map.num_cells() as u64);
    assert!(result.expanded >= result.path.len() as u64);
}

#[test]
fn reports_unreached_when_walled_off() {
    let (map, result) = plan(r#"{"rows": ["O.N.D"]}"#);
    assert!(!result.reached);
    assert_eq!(result.reported_length, None);
    assert!(result.path.is_empty());
    assert_eq!(map.cell(map.destination()).state, VisitState::Unvisited);
}

#[test]
fn interference_forecloses_only_route() {
    // Both cells reachable from the origin sit next to the tower, so they
    // finalize without relaxing anything and the destination stays
    // undiscovered even though an unblocked route exists.
    let (map, result) = plan(r#"{"rows": ["O...", ".T..", "...D"]}"#);
    assert!(!result.reached);
    assert_eq!(map.cell(map.destination()).distance, u32::MAX);
    assert_eq!(map.cell(map.destination()).predecessor, None);
}

#[test]
fn no_fly_cells_stay_undiscovered() {
    let (map, result) = plan(r#"{"rows": ["ON", ".D"]}"#);
    assert!(result.reached);
    let blocked = (0..map.num_cells()).find(|&id| map.cell(id).no_fly).unwrap();
    assert_eq!(map.cell(blocked).state, VisitState::Unvisited);
    assert_eq!(map.cell(blocked).distance, u32::MAX);
    assert!(!result.path.contains(&blocked));
}

#[test]
fn reported_length_counts_leftover_frontier_not_hops() {
    // The destination comes out of the frontier while two other cells are
    // still queued: the reported length is queued-plus-one, which differs
    // from the hop count of the discovered path.
    let (_, result) = plan(r#"{"rows": ["O.D.", "...."]}"#);
    assert!(result.reached);
    assert_eq!(result.path.len(), 3, "two hops");
    assert_eq!(result.reported_length, Some(3));
}

#[test]
fn maps_can_be_searched_again_after_reset() {
    let mut map: HexMap = r#"{"rows": ["O..D"]}"#.parse().unwrap();
    let first = plan_route(&mut map).unwrap();
    map.reset_search_state();
    let second = plan_route(&mut map).unwrap();
    assert_eq!(first, second);
}
