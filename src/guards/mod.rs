//! Guard primitives for routing and rendering
//!
//! Guards turn an authentication or permission answer into a decision the
//! view layer acts on: render, fall back, redirect, disable or hide.

mod control;
mod navigation;
mod render;
mod route;
mod router;

pub use control::{PermissionAwareControl, RenderedControl};
pub use navigation::NavMenu;
pub use render::ConditionalRenderGuard;
pub use route::{RouteDecision, RouteGuard};
pub use router::{RouteOutcome, RouteTable};
