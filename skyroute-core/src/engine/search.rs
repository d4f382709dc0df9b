use thiserror::Error;
use tracing::debug;

use crate::engine::frontier::{FrontierError, FrontierQueue};
use crate::map::{CellId, HexMap, VisitState, NEIGHBOR_SLOTS};

/// Frontier errors cannot occur while the per-cell state machine is intact,
/// so one surfacing here means the search state is corrupt. Callers should
/// treat this as fatal rather than retry.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("frontier invariant violated: {0}")]
    Frontier(#[from] FrontierError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteResult {
    pub reached: bool,
    /// Reported route length: the entries still queued at termination, plus
    /// one. This is the planner's historical success metric and is not in
    /// general the hop count of `path`.
    pub reported_length: Option<usize>,
    /// Predecessor chain from origin to destination; empty when unreached.
    pub path: Vec<CellId>,
    /// Cells finalized during the run.
    pub expanded: u64,
}

/// Best-first search from the map's origin toward its destination.
///
/// Each cell moves `Unvisited -> Enqueued -> Finalized`, entering the
/// frontier at most once and leaving it exactly once. A finalized cell with
/// any interference-source neighbor relaxes nothing, permanently: no route
/// is ever extended through a tower-adjacent cell, even when that cell is
/// the only way forward.
pub fn plan_route(map: &mut HexMap) -> Result<RouteResult, SearchError> {
    let mut frontier = FrontierQueue::new();
    let origin = map.origin();
    map.cell_mut(origin).distance = 0;
    frontier.enqueue(origin, 0.0);
    map.cell_mut(origin).state = VisitState::Enqueued;

    let mut expanded: u64 = 0;
    let mut reached = false;

    while !frontier.is_empty() {
        let current = frontier.extract_min()?;
        map.cell_mut(current).state = VisitState::Finalized;
        expanded += 1;

        if map.cell(current).is_destination {
            reached = true;
            break;
        }
        if near_interference(map, current) {
            debug!(cell = current, "interference nearby, cell relaxes nothing");
            continue;
        }

        for slot in 0..NEIGHBOR_SLOTS {
            let Some(neighbor) = map.neighbor(current, slot) else {
                continue;
            };
            if map.cell(neighbor).no_fly || map.cell(neighbor).state == VisitState::Finalized {
                continue;
            }
            let tentative = 1 + map.cell(current).distance;
            if tentative < map.cell(neighbor).distance {
                let priority = f64::from(tentative) + map.heuristic(neighbor);
                let cell = map.cell_mut(neighbor);
                cell.distance = tentative;
                cell.predecessor = Some(current);
                if cell.state == VisitState::Enqueued {
                    // Decrease-key only; a larger estimate never overwrites
                    // a better queued one.
                    if priority < frontier.priority_of(&neighbor)? {
                        frontier.set_priority(&neighbor, priority)?;
                    }
                } else {
                    frontier.enqueue(neighbor, priority);
                    map.cell_mut(neighbor).state = VisitState::Enqueued;
                }
            }
        }
    }

    let reported_length = reached.then(|| frontier.len() + 1);
    let path = if reached { predecessor_chain(map, map.destination()) } else { Vec::new() };
    if reached {
        debug!(
            hops = path.len().saturating_sub(1),
            reported = frontier.len() + 1,
            expanded,
            "destination finalized"
        );
    } else {
        debug!(expanded, "frontier drained without reaching the destination");
    }
    Ok(RouteResult { reached, reported_length, path, expanded })
}

/// True when any existing neighbor of `cell` is an interference source.
fn near_interference(map: &HexMap, cell: CellId) -> bool {
    (0..NEIGHBOR_SLOTS)
        .any(|slot| map.neighbor(cell, slot).is_some_and(|n| map.cell(n).interference))
}

fn predecessor_chain(map: &HexMap, destination: CellId) -> Vec<CellId> {
    let mut path = vec![destination];
    let mut current = destination;
    while let Some(prev) = map.cell(current).predecessor {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
