//! Client-side core of the brief/article workflow: session state machine,
//! generation service client, workflow controller and brief rendering.

pub mod controller;
pub mod render;
pub mod service;
pub mod session;
pub mod settings;

pub use controller::WorkflowController;
pub use render::{render_brief, Badge, BadgeKind, BriefField, BriefView, FieldBody};
pub use service::{GenerationService, HttpGenerationService};
pub use session::{Phase, RequestKind, RequestTicket, Session, SessionError, StartedRequest};
pub use settings::{load_settings, ClientSettings};
