use std::fmt;

use log::debug;

/// Places the home page can send the user to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Detail view for one recipe, by id
    RecipeDetail(String),
    /// Recipe creation flow
    AddRecipe,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::RecipeDetail(id) => format!("/recipe/{}", id),
            Route::AddRecipe => "/add-recipe".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Router collaborator that carries out navigation intents.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// In-memory navigator that records every route it is sent to.
#[derive(Debug, Clone, Default)]
pub struct History {
    routes: Vec<Route>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Route> {
        self.routes.last()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Navigator for History {
    fn navigate(&mut self, route: Route) {
        debug!("Navigating to {}", route);
        self.routes.push(route);
    }
}
