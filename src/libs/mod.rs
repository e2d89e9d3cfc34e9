pub mod compose;
pub mod error;
pub mod external;
pub mod io;
pub mod scc;
pub mod versus;
