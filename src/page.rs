//! Home page state and its transitions.
//!
//! [`HomePage`] owns everything the page shows: the loaded recipes, the
//! featured pick, the tip of the day, the search term and the sort order.
//! Nothing outside the page mutates these. User actions go through the
//! transition methods, and what to render is derived on demand.

use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::error::HomeError;
use crate::fetchers::RecipeSource;
use crate::i18n::{messages, Identity, Translator};
use crate::model::Recipe;
use crate::navigation::{Navigator, Route};
use crate::random::{choose, RandomSource, SeededRandom};
use crate::view::{derive_view, sort_newest_first, SortOrder};

/// Whether the page is still waiting for its recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// Tip of the day shown under the featured recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tip {
    /// Tip text taken from a recipe
    Recipe(String),
    /// The drawn recipe had no tip; show the generic prompt
    Default,
}

impl Tip {
    /// Default-language text. [`Tip::Default`] resolves to a translation key.
    pub fn text(&self) -> &str {
        match self {
            Tip::Recipe(text) => text,
            Tip::Default => messages::DEFAULT_TIP,
        }
    }
}

pub struct HomePage {
    recipes: Vec<Recipe>,
    /// Index into `recipes`; only set together with `recipes`
    featured: Option<usize>,
    tip: Option<Tip>,
    search_term: String,
    sort_order: SortOrder,
    loading: bool,
    settled: bool,
    random: Box<dyn RandomSource>,
    translator: Arc<dyn Translator>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new(Box::new(SeededRandom::from_entropy()))
    }
}

impl HomePage {
    /// Create a page in the loading phase with no recipes yet.
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self {
            recipes: Vec::new(),
            featured: None,
            tip: None,
            search_term: String::new(),
            sort_order: SortOrder::default(),
            loading: true,
            settled: false,
            random,
            translator: Arc::new(Identity),
        }
    }

    /// Use `translator` for the page's diagnostics and as its display language.
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// Fetch the recipes from `source` and settle the page.
    ///
    /// Fetch errors are logged and swallowed: the page becomes ready with an
    /// empty collection. Calling this on a page that already loaded does nothing.
    pub async fn load(&mut self, source: &dyn RecipeSource) {
        if !self.begin_load() {
            return;
        }
        let result = source.fetch_all().await;
        self.finish_load(result);
    }

    /// Enter the loading phase. Returns `false` if the page already settled.
    pub fn begin_load(&mut self) -> bool {
        if self.settled {
            warn!("Home page already loaded, ignoring another load");
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply the outcome of the recipe fetch and leave the loading phase.
    ///
    /// On success the collection is stored newest first, then a featured
    /// recipe and a tip are drawn from it, in that order. Only the first call
    /// has any effect.
    pub fn finish_load(&mut self, result: Result<Vec<Recipe>, HomeError>) {
        if self.settled {
            warn!("Home page already loaded, discarding late result");
            return;
        }

        match result {
            Ok(mut recipes) => {
                sort_newest_first(&mut recipes);
                self.featured = if recipes.is_empty() {
                    None
                } else {
                    Some(self.random.pick(recipes.len()))
                };
                self.tip = choose(self.random.as_mut(), &recipes).map(|recipe| {
                    recipe
                        .tip_text()
                        .map_or(Tip::Default, |tip| Tip::Recipe(tip.to_string()))
                });
                info!("Loaded {} recipes", recipes.len());
                self.recipes = recipes;
            }
            Err(e) => {
                error!("{} {}", self.translator.translate(messages::LOAD_FAILED), e);
            }
        }

        self.loading = false;
        self.settled = true;
    }

    /// Draw a new featured recipe from the loaded collection.
    ///
    /// The previous pick may come up again. Does nothing while the collection
    /// is empty.
    pub fn randomize(&mut self) {
        if self.recipes.is_empty() {
            debug!("No recipes to recommend");
            return;
        }
        let index = self.random.pick(self.recipes.len());
        debug!("Featuring recipe {}", self.recipes[index].id);
        self.featured = Some(index);
    }

    pub fn set_search(&mut self, search_term: impl Into<String>) {
        self.search_term = search_term.into();
    }

    pub fn set_sort(&mut self, sort_order: SortOrder) {
        self.sort_order = sort_order;
    }

    /// Go to the detail view of a recipe.
    pub fn open_recipe(&self, id: &str, navigator: &mut dyn Navigator) {
        navigator.navigate(Route::RecipeDetail(id.to_string()));
    }

    /// Go to the detail view of the featured recipe, if there is one.
    pub fn open_featured(&self, navigator: &mut dyn Navigator) {
        if let Some(recipe) = self.featured() {
            self.open_recipe(&recipe.id, navigator);
        }
    }

    /// Go to the recipe creation flow.
    pub fn add_recipe(&self, navigator: &mut dyn Navigator) {
        navigator.navigate(Route::AddRecipe);
    }

    /// Recipes to show for the current search term and sort order.
    pub fn visible(&self) -> Vec<&Recipe> {
        derive_view(&self.recipes, &self.search_term, self.sort_order)
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else {
            Phase::Ready
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn featured(&self) -> Option<&Recipe> {
        self.featured.and_then(|index| self.recipes.get(index))
    }

    pub fn tip(&self) -> Option<&Tip> {
        self.tip.as_ref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::History;
    use crate::random::Sequence;
    use std::sync::Mutex;

    /// Records every key it is asked to translate.
    #[derive(Default)]
    struct RecordingTranslator {
        keys: Mutex<Vec<String>>,
    }

    impl Translator for RecordingTranslator {
        fn translate(&self, key: &str) -> String {
            self.keys.lock().unwrap().push(key.to_string());
            key.to_string()
        }
    }

    fn page_with(picks: Vec<usize>) -> HomePage {
        HomePage::new(Box::new(Sequence::new(picks)))
    }

    fn sample() -> Vec<Recipe> {
        vec![
            Recipe::new("1", "Soup").with_tip("Simmer gently"),
            Recipe::new("3", "Pasta"),
            Recipe::new("2", "Salad").with_tip(""),
        ]
    }

    #[test]
    fn test_new_page_is_loading() {
        let page = page_with(vec![0]);
        assert_eq!(page.phase(), Phase::Loading);
        assert!(page.recipes().is_empty());
        assert!(page.featured().is_none());
        assert!(page.tip().is_none());
        assert_eq!(page.sort_order(), SortOrder::Latest);
        assert_eq!(page.search_term(), "");
    }

    #[test]
    fn test_finish_load_sorts_and_picks() {
        // featured index 1, tip index 2
        let mut page = page_with(vec![1, 2]);
        page.finish_load(Ok(sample()));

        assert_eq!(page.phase(), Phase::Ready);
        let ids: Vec<&str> = page.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
        assert_eq!(page.featured().map(|r| r.id.as_str()), Some("2"));
        assert_eq!(page.tip(), Some(&Tip::Recipe("Simmer gently".to_string())));
    }

    #[test]
    fn test_missing_or_empty_tip_falls_back() {
        let mut page = page_with(vec![0, 0]);
        page.finish_load(Ok(sample()));
        // "Pasta" has no tip
        assert_eq!(page.tip(), Some(&Tip::Default));

        let mut page = page_with(vec![0, 1]);
        page.finish_load(Ok(sample()));
        // "Salad" has an empty tip
        assert_eq!(page.tip(), Some(&Tip::Default));
        assert_eq!(Tip::Default.text(), messages::DEFAULT_TIP);
    }

    #[test]
    fn test_failed_load_leaves_page_empty() {
        let mut page = page_with(vec![0]);
        page.finish_load(Err(HomeError::HttpStatus(500, "boom".to_string())));

        assert_eq!(page.phase(), Phase::Ready);
        assert!(page.recipes().is_empty());
        assert!(page.featured().is_none());
        assert!(page.tip().is_none());
    }

    #[test]
    fn test_failed_load_message_goes_through_translator() {
        let translator = Arc::new(RecordingTranslator::default());
        let mut page = page_with(vec![0]).with_translator(translator.clone());
        page.finish_load(Err(HomeError::Cancelled));

        let keys = translator.keys.lock().unwrap();
        assert_eq!(keys.as_slice(), &[messages::LOAD_FAILED.to_string()]);
    }

    #[test]
    fn test_successful_load_translates_nothing() {
        let translator = Arc::new(RecordingTranslator::default());
        let mut page = page_with(vec![0, 0]).with_translator(translator.clone());
        page.finish_load(Ok(sample()));

        assert!(translator.keys.lock().unwrap().is_empty());
    }

    #[test]
    fn test_default_page_starts_loading_in_default_language() {
        let mut page = HomePage::default();
        assert_eq!(page.phase(), Phase::Loading);
        assert_eq!(page.translator().translate(messages::TITLE), messages::TITLE);

        page.finish_load(Ok(sample()));
        assert!(page.recipes().contains(page.featured().unwrap()));
    }

    #[test]
    fn test_empty_load_has_no_featured_or_tip() {
        let mut page = page_with(vec![0]);
        page.finish_load(Ok(Vec::new()));
        assert_eq!(page.phase(), Phase::Ready);
        assert!(page.featured().is_none());
        assert!(page.tip().is_none());
    }

    #[test]
    fn test_ready_is_terminal() {
        let mut page = page_with(vec![0, 0]);
        page.finish_load(Ok(sample()));
        assert!(!page.begin_load());
        assert_eq!(page.phase(), Phase::Ready);

        page.finish_load(Ok(vec![Recipe::new("99", "Late")]));
        assert_eq!(page.recipes().len(), 3);
    }

    #[test]
    fn test_randomize_on_empty_is_noop() {
        let mut page = page_with(vec![0]);
        page.finish_load(Ok(Vec::new()));
        page.randomize();
        assert!(page.featured().is_none());
    }

    #[test]
    fn test_randomize_replaces_featured() {
        let mut page = page_with(vec![0, 0, 2]);
        page.finish_load(Ok(sample()));
        assert_eq!(page.featured().map(|r| r.id.as_str()), Some("3"));

        page.randomize();
        assert_eq!(page.featured().map(|r| r.id.as_str()), Some("1"));
    }

    #[test]
    fn test_featured_is_always_in_collection() {
        let mut page = HomePage::new(Box::new(SeededRandom::new(11)));
        page.finish_load(Ok(sample()));
        for _ in 0..50 {
            page.randomize();
            let featured = page.featured().unwrap();
            assert!(page.recipes().contains(featured));
        }
    }

    #[test]
    fn test_visible_follows_search_and_sort() {
        let mut page = page_with(vec![0, 0]);
        page.finish_load(Ok(sample()));

        page.set_sort(SortOrder::Rating);
        let ids: Vec<&str> = page.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        page.set_search("SA");
        let ids: Vec<&str> = page.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
        // Filtering never touches the collection
        assert_eq!(page.recipes().len(), 3);
    }

    #[test]
    fn test_navigation_intents() {
        let mut page = page_with(vec![1, 0]);
        page.finish_load(Ok(sample()));
        let mut history = History::new();

        page.open_featured(&mut history);
        page.open_recipe("1", &mut history);
        page.add_recipe(&mut history);

        assert_eq!(
            history.routes(),
            &[
                Route::RecipeDetail("2".to_string()),
                Route::RecipeDetail("1".to_string()),
                Route::AddRecipe,
            ]
        );
    }
}
