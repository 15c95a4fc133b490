pub mod affordance;
pub mod config;
pub mod controller;
pub mod edge;
pub mod event;
pub mod observer;
pub mod region;
pub mod sentinel;
pub mod style;
pub mod synchronizer;
pub mod transitions;

pub use affordance::{Gradient, NavButton};
pub use config::{ConfigError, ScrollableConfig};
pub use controller::{EdgeListener, ScrollEdgeController};
pub use edge::{Edge, EdgeChange, EdgeState, EdgeStatus};
pub use event::EventResult;
pub use observer::{VisibilityEntry, VisibilityObserver, FULL_VISIBILITY};
pub use region::{ScrollBehavior, ScrollRegion};
pub use sentinel::{EdgeSentinel, Sentinels, SENTINEL_INSET};
pub use style::{Color, GradientSpec, GradientStop, ScrollableStyle};
pub use synchronizer::AffordanceSynchronizer;
pub use transitions::{Easing, TransitionConfig, Tween};
