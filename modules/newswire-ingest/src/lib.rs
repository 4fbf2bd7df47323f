pub mod connector;
pub mod coordinator;
pub mod window;
pub mod x;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use connector::Connector;
pub use coordinator::IngestionCoordinator;
pub use window::RecencyWindow;
pub use x::XConnector;
