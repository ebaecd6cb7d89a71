pub mod error;
pub mod highlight;
pub mod lifecycle;
pub mod motion;
pub mod particles;
pub mod scroll;
pub mod spring;
pub mod typewriter;

pub use highlight::PanelHighlight;
pub use lifecycle::{DisposeBag, Flow, Liveness, Subscription};
pub use motion::Reveal;
pub use particles::{FieldConfig, ParticleField};
pub use scroll::{scroll_progress, ScrollIndicator};
pub use spring::SpringConfig;
pub use typewriter::Typewriter;
