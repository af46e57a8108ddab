pub mod topology;
pub mod network;
pub mod forward;
pub mod backward;

pub use network::Mlp;
pub use topology::Topology;
