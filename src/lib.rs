pub mod config;
pub mod error;
pub mod fetchers;
pub mod i18n;
pub mod model;
pub mod mount;
pub mod navigation;
pub mod page;
pub mod random;
pub mod render;
pub mod view;

pub use config::HomeConfig;
pub use error::HomeError;
pub use fetchers::{RecipeSource, RequestFetcher};
pub use i18n::{Catalog, Identity, Translator};
pub use model::{NumericId, Recipe};
pub use mount::MountedPage;
pub use navigation::{History, Navigator, Route};
pub use page::{HomePage, Phase, Tip};
pub use random::{RandomSource, SeededRandom, Sequence};
pub use render::Screen;
pub use view::{derive_view, SortOrder};

use std::sync::Arc;

use log::info;

/// Load a home page from the endpoint in `config`.
///
/// The page uses the translation catalog from `config`, if any. Only client
/// setup and catalog errors are returned. A failed fetch still yields a ready
/// page with no recipes.
///
/// # Example
/// ```no_run
/// # use recipe_home::{load_home_page, HomeConfig, SeededRandom};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HomeConfig::for_url("http://localhost:8080/api/recipes");
/// let page = load_home_page(&config, Box::new(SeededRandom::from_entropy())).await?;
/// println!("{}", page.render(page.translator()));
/// # Ok(())
/// # }
/// ```
pub async fn load_home_page(
    config: &HomeConfig,
    random: Box<dyn RandomSource>,
) -> Result<HomePage, HomeError> {
    let fetcher = RequestFetcher::from_config(config)?;
    let mut page = HomePage::new(random).with_translator(load_translator(config)?);
    page.load(&fetcher).await;
    Ok(page)
}

/// Translator for `config`: its catalog if one is set, the default language otherwise.
pub fn load_translator(config: &HomeConfig) -> Result<Arc<dyn Translator>, HomeError> {
    match &config.catalog {
        Some(path) => {
            let catalog = Catalog::load(path)?;
            info!("Using translation catalog {}", path.display());
            Ok(Arc::new(catalog))
        }
        None => Ok(Arc::new(Identity)),
    }
}
