// Career insight heuristics behind the /ai/* endpoints.
// Everything here is a pure function over request data; the only shared state
// is the latest CV analysis, owned by AppState.

pub mod blind_spots;
pub mod cv;
pub mod growth;
pub mod handlers;
pub mod interview;
pub mod matching;
pub mod profile;
