pub mod handouts;

pub use handouts::{find_handout, HANDOUTS, TOTAL_WEEKS};
