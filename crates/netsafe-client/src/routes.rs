//! Application routes.

use yew_router::prelude::*;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// The explorer page with the 3D scene.
    #[at("/")]
    Home,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}
