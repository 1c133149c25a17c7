//! What the home page shows, as plain data.
//!
//! [`Screen`] is computed from a [`HomePage`] and a [`Translator`] every time
//! it is needed. Card widgets and styling live elsewhere; this module only
//! decides which pieces appear, with which text, and where clicks lead.

use std::fmt;

use crate::i18n::{messages, Translator};
use crate::model::Recipe;
use crate::navigation::Route;
use crate::page::{HomePage, Phase};
use crate::view::SortOrder;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Only a status message while recipes are loading
    Loading { message: String },
    Ready(HomeView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub title: String,
    pub subtitle: String,
    pub featured: Option<Card>,
    pub tip: Option<String>,
    pub actions: Vec<Button>,
    pub search: SearchBox,
    pub sort_options: Vec<SortOption>,
    pub section_title: String,
    pub content: Content,
}

/// A recipe tile, for both the featured panel and the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub tip: Option<String>,
    pub on_click: Route,
}

impl Card {
    fn from_recipe(recipe: &Recipe) -> Self {
        Card {
            id: recipe.id.clone(),
            name: recipe.recipe_name.clone(),
            tip: recipe.tip_text().map(str::to_string),
            on_click: Route::RecipeDetail(recipe.id.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pick another featured recipe
    Randomize,
    Navigate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
    pub action: Action,
    /// Set when `action` is [`Action::Navigate`]
    pub route: Option<Route>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchBox {
    pub placeholder: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortOption {
    pub value: SortOrder,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Grid(Vec<Card>),
    /// Nothing to show, with the reason
    Empty(String),
}

impl Screen {
    pub fn from_page(page: &HomePage, translator: &dyn Translator) -> Self {
        if page.phase() == Phase::Loading {
            return Screen::Loading {
                message: translator.translate(messages::LOADING),
            };
        }

        let visible = page.visible();
        let content = if !visible.is_empty() {
            Content::Grid(visible.into_iter().map(Card::from_recipe).collect())
        } else if !page.search_term().is_empty() {
            Content::Empty(format!(
                "\"{}\" {}",
                page.search_term(),
                translator.translate(messages::NO_SEARCH_RESULTS)
            ))
        } else {
            Content::Empty(translator.translate(messages::NO_RECIPES))
        };

        Screen::Ready(HomeView {
            title: translator.translate(messages::TITLE),
            subtitle: translator.translate(messages::SUBTITLE),
            featured: page.featured().map(Card::from_recipe),
            tip: page.tip().map(|tip| translator.translate(tip.text())),
            actions: vec![
                Button {
                    label: translator.translate(messages::RECOMMEND_ANOTHER),
                    action: Action::Randomize,
                    route: None,
                },
                Button {
                    label: translator.translate(messages::ADD_RECIPE),
                    action: Action::Navigate,
                    route: Some(Route::AddRecipe),
                },
            ],
            search: SearchBox {
                placeholder: translator.translate(messages::SEARCH_PLACEHOLDER),
                value: page.search_term().to_string(),
            },
            sort_options: SortOrder::ALL
                .into_iter()
                .map(|order| SortOption {
                    value: order,
                    label: translator.translate(order.label()),
                    selected: order == page.sort_order(),
                })
                .collect(),
            section_title: translator.translate(messages::ALL_RECIPES),
            content,
        })
    }
}

impl HomePage {
    pub fn render(&self, translator: &dyn Translator) -> Screen {
        Screen::from_page(self, translator)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.name)?;
        if let Some(tip) = &self.tip {
            write!(f, " ({})", tip)?;
        }
        write!(f, " -> {}", self.on_click)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Loading { message } => writeln!(f, "{}", message),
            Screen::Ready(view) => write!(f, "{}", view),
        }
    }
}

impl fmt::Display for HomeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f)?;

        if let Some(featured) = &self.featured {
            writeln!(f, "* {}", featured)?;
        }
        if let Some(tip) = &self.tip {
            writeln!(f, "> {}", tip)?;
        }

        let actions: Vec<String> = self
            .actions
            .iter()
            .map(|button| format!("[{}]", button.label))
            .collect();
        writeln!(f, "{}", actions.join(" "))?;
        writeln!(f)?;

        writeln!(f, "## {}", self.section_title)?;
        let sort: Vec<String> = self
            .sort_options
            .iter()
            .map(|option| {
                if option.selected {
                    format!("({})", option.label)
                } else {
                    option.label.clone()
                }
            })
            .collect();
        if self.search.value.is_empty() {
            writeln!(f, "{} | {}", self.search.placeholder, sort.join(" / "))?;
        } else {
            writeln!(f, "\"{}\" | {}", self.search.value, sort.join(" / "))?;
        }

        match &self.content {
            Content::Grid(cards) => {
                for card in cards {
                    writeln!(f, "- {}", card)?;
                }
            }
            Content::Empty(message) => writeln!(f, "{}", message)?,
        }
        Ok(())
    }
}
