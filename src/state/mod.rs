pub mod pan;
pub mod plot;
pub mod viewport;

pub use pan::PanSession;
pub use plot::PlotState;
pub use viewport::Viewport;
