use std::sync::Arc;

use recipe_home::i18n::messages;
use recipe_home::render::Content;
use recipe_home::{
    load_home_page, HomeConfig, HomePage, Identity, MountedPage, Phase, RequestFetcher, Route,
    Screen, Sequence, SortOrder, Tip,
};

const PASTA_AND_SOUP: &str = r#"[
    {"id": "1", "recipeName": "Soup", "tip": "Season at the end"},
    {"id": "3", "recipeName": "Pasta"}
]"#;

async fn serve(server: &mut mockito::Server, status: usize, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/api/recipes")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

fn config_for(server: &mockito::Server) -> HomeConfig {
    HomeConfig::for_url(format!("{}/api/recipes", server.url()))
}

fn visible_ids(page: &HomePage) -> Vec<String> {
    page.visible().iter().map(|r| r.id.clone()).collect()
}

#[tokio::test]
async fn test_latest_order_after_load() {
    let mut server = mockito::Server::new_async().await;
    let mock = serve(&mut server, 200, PASTA_AND_SOUP).await;

    let page = load_home_page(&config_for(&server), Box::new(Sequence::new(vec![0, 0])))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.phase(), Phase::Ready);
    assert_eq!(visible_ids(&page), vec!["3", "1"]);
}

#[tokio::test]
async fn test_rating_order() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, 200, PASTA_AND_SOUP).await;

    let mut page = load_home_page(&config_for(&server), Box::new(Sequence::new(vec![0, 0])))
        .await
        .unwrap();
    page.set_sort(SortOrder::Rating);

    assert_eq!(visible_ids(&page), vec!["1", "3"]);
}

#[tokio::test]
async fn test_search_narrows_grid() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, 200, PASTA_AND_SOUP).await;

    let mut page = load_home_page(&config_for(&server), Box::new(Sequence::new(vec![0, 0])))
        .await
        .unwrap();
    page.set_search("pas");

    assert_eq!(visible_ids(&page), vec!["3"]);
}

#[tokio::test]
async fn test_featured_and_tip_come_from_loaded_recipes() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, 200, PASTA_AND_SOUP).await;

    // Sorted collection is [3, 1]: feature "1", draw the tip from "1" as well
    let page = load_home_page(&config_for(&server), Box::new(Sequence::new(vec![1, 1])))
        .await
        .unwrap();

    let featured = page.featured().unwrap();
    assert_eq!(featured.id, "1");
    assert!(page.recipes().contains(featured));
    assert_eq!(page.tip(), Some(&Tip::Recipe("Season at the end".to_string())));
}

#[tokio::test]
async fn test_failed_fetch_shows_no_recipes() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, 500, "internal error").await;

    let page = load_home_page(&config_for(&server), Box::new(Sequence::new(vec![0])))
        .await
        .unwrap();

    assert_eq!(page.phase(), Phase::Ready);
    assert!(page.recipes().is_empty());
    assert!(page.featured().is_none());

    match page.render(&Identity) {
        Screen::Ready(view) => {
            assert_eq!(view.content, Content::Empty(messages::NO_RECIPES.to_string()));
        }
        Screen::Loading { .. } => panic!("Expected ready screen"),
    }
}

#[tokio::test]
async fn test_failed_fetch_with_configured_catalog() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, 500, "internal error").await;

    let mut config = config_for(&server);
    config.catalog = Some(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/en.toml").into());
    let page = load_home_page(&config, Box::new(Sequence::new(vec![0])))
        .await
        .unwrap();

    assert_eq!(
        page.translator().translate(messages::LOAD_FAILED),
        "Failed to load recipe data."
    );
    match page.render(page.translator()) {
        Screen::Ready(view) => {
            assert_eq!(view.content, Content::Empty("No recipes to show.".to_string()));
        }
        Screen::Loading { .. } => panic!("Expected ready screen"),
    }
}

#[tokio::test]
async fn test_malformed_and_empty_responses_render_alike() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, 200, "<html>not json</html>").await;
    let malformed = load_home_page(&config_for(&server), Box::new(Sequence::new(vec![0])))
        .await
        .unwrap();

    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, 200, "[]").await;
    let empty = load_home_page(&config_for(&server), Box::new(Sequence::new(vec![0])))
        .await
        .unwrap();

    assert_eq!(malformed.render(&Identity), empty.render(&Identity));
}

#[tokio::test]
async fn test_unreachable_endpoint_settles_page() {
    let config = HomeConfig::for_url("http://127.0.0.1:9/api/recipes");
    let page = load_home_page(&config, Box::new(Sequence::new(vec![0])))
        .await
        .unwrap();

    assert!(!page.is_loading());
    assert!(page.recipes().is_empty());
}

#[tokio::test]
async fn test_randomize_with_no_recipes() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, 200, "[]").await;

    let mut page = load_home_page(&config_for(&server), Box::new(Sequence::new(vec![0])))
        .await
        .unwrap();
    page.randomize();

    assert!(page.featured().is_none());
}

#[tokio::test]
async fn test_mounted_page_loads_through_fetcher() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, 200, PASTA_AND_SOUP).await;

    let fetcher = RequestFetcher::from_config(&config_for(&server)).unwrap();
    let mut mounted = MountedPage::mount(
        HomePage::new(Box::new(Sequence::new(vec![0, 0]))),
        Arc::new(fetcher),
    );
    assert!(matches!(mounted.page().render(&Identity), Screen::Loading { .. }));

    let page = mounted.settle().await;
    page.randomize();
    assert_eq!(page.featured().map(|r| r.id.as_str()), Some("3"));

    let mut history = recipe_home::History::new();
    page.open_featured(&mut history);
    assert_eq!(history.current(), Some(&Route::RecipeDetail("3".to_string())));
}
