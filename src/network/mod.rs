pub mod network;
pub mod spec;

pub use network::{FeedforwardNetwork, ForwardTrace};
pub use spec::Topology;
