pub mod engine;
pub mod map;

pub use engine::{plan_route, FrontierError, FrontierQueue, RouteResult, SearchError};
pub use map::{Cell, CellId, HexMap, MapError, VisitState, NEIGHBOR_SLOTS};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
