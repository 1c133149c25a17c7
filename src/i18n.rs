//! Translation of user-facing strings.
//!
//! Every string the page shows is looked up by its default-language text, so
//! an untranslated key still reads correctly.

use std::collections::HashMap;
use std::path::Path;

use config::{Config, File, FileFormat};
use log::debug;
use serde::Deserialize;

use crate::error::HomeError;

/// Default-language (Korean) strings, also used as translation keys.
///
/// Catalogs for other languages map these literals to their own text.
pub mod messages {
    pub const LOADING: &str = "맛있는 레시피를 불러오는 중...";
    pub const TITLE: &str = "오늘 뭐 먹지?";
    pub const SUBTITLE: &str = "버튼을 눌러 오늘의 특별한 레시피를 추천받아보세요!";
    pub const RECOMMEND_ANOTHER: &str = "다른 레시피 추천!";
    pub const ADD_RECIPE: &str = "레시피 추가하기";
    pub const ALL_RECIPES: &str = "모든 레시피";
    pub const SEARCH_PLACEHOLDER: &str = "레시피 이름으로 검색...";
    pub const SORT_LATEST: &str = "최신순";
    pub const SORT_POPULARITY: &str = "인기순";
    pub const SORT_RATING: &str = "평점순";
    pub const SORT_REVIEWS: &str = "리뷰 많은 순";
    /// Follows the quoted search term
    pub const NO_SEARCH_RESULTS: &str = "에 대한 검색 결과가 없습니다.";
    pub const NO_RECIPES: &str = "표시할 레시피가 없습니다.";
    pub const DEFAULT_TIP: &str = "오늘의 요리 팁을 확인해보세요!";
    pub const LOAD_FAILED: &str = "레시피 데이터를 불러오는 데 실패했습니다.";
}

/// Resolves a default-language string to the display language.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Shows every string in the default language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translator for Identity {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    key: String,
    text: String,
}

/// Translation table keyed by default-language text.
///
/// Catalog files are TOML with one `[[entries]]` table per string:
///
/// ```toml
/// [[entries]]
/// key = "모든 레시피"
/// text = "All recipes"
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self, HomeError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;
        let file: CatalogFile = settings.try_deserialize()?;
        debug!("Loaded {} translations from {}", file.entries.len(), path.display());

        Ok(Self {
            entries: file
                .entries
                .into_iter()
                .map(|entry| (entry.key, entry.text))
                .collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
