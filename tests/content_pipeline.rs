//! End-to-end exercises of the ingestion pipeline and query engine

use penmark::config::BlogConfig;
use penmark::query::PostFilter;
use penmark::similarity::RelatedMode;
use penmark::store::ContentStore;

fn doc(title: &str, category: &str, tags: &[&str], date: &str) -> String {
    format!(
        "---\ntitle: {}\ndate: {}\ncategory: {}\ntags: [{}]\n---\nAn article about {}.\n",
        title,
        date,
        category,
        tags.join(", "),
        title
    )
}

/// The reference scenario: A and C share the "signals" tag, B shares A's
/// category, and searching/ranking must reflect exactly that.
fn scenario_store() -> ContentStore {
    let store = ContentStore::new(BlogConfig::default());
    store.ingest(&doc("Post A", "angular", &["signals", "rxjs"], "2024-01-10"));
    store.ingest(&doc("Post B", "angular", &["testing"], "2024-02-01"));
    store.ingest(&doc("Post C", "leadership", &["signals"], "2024-03-01"));
    store
}

#[test]
fn search_finds_tagged_posts_only() {
    let store = scenario_store();

    let hits = store.search("signals");
    let mut titles: Vec<String> = hits.iter().map(|h| h.post.title.clone()).collect();
    titles.sort();

    assert_eq!(titles, vec!["Post A", "Post C"]);
}

#[test]
fn related_ranks_category_above_single_tag() {
    let store = scenario_store();
    let a = store.get_by_slug("post-a").expect("post A ingested");

    let related = store.related(a.id.as_str(), 2, RelatedMode::Public);
    let titles: Vec<&str> = related.iter().map(|r| r.title.as_str()).collect();

    // B scores 10 (same category), C scores 2 (one shared tag)
    assert_eq!(titles, vec!["Post B", "Post C"]);
}

#[test]
fn ingest_without_frontmatter_still_lands_in_store() {
    let store = ContentStore::new(BlogConfig::default());
    let post = store.ingest("No metadata here, just prose.\n");

    assert_eq!(post.title, "Untitled Post");
    assert_eq!(store.len(), 1);
    assert!(store.get_by_slug("untitled-post").is_some());
}

#[test]
fn rendered_content_is_served_from_queries() {
    let store = ContentStore::new(BlogConfig::default());
    store.ingest("---\ntitle: Rendered\ndate: 2024-01-01\n---\n# Heading\n\nSome **bold** text.\n");

    let post = store.get_by_slug("rendered").unwrap();
    assert!(post.content.contains("<h1>Heading</h1>"));
    assert!(post.content.contains("<strong>bold</strong>"));
    // The excerpt is plain text, not markup
    assert_eq!(post.excerpt, "Heading Some bold text.");
}

#[test]
fn drafts_are_invisible_everywhere_except_slug_lookup() {
    let store = scenario_store();
    store.ingest(
        "---\ntitle: Draft Piece\ndate: 2024-06-01\ncategory: angular\ntags: [signals]\ndraft: true\nfeatured: true\n---\nUnpublished thoughts on signals.\n",
    );

    assert!(store
        .list(1, 10, &PostFilter::new())
        .posts
        .iter()
        .all(|p| p.title != "Draft Piece"));
    assert!(store.search("signals").iter().all(|h| h.post.title != "Draft Piece"));
    assert!(store.featured(10).iter().all(|p| p.title != "Draft Piece"));
    assert!(store.recent(10).iter().all(|p| p.title != "Draft Piece"));
    assert_eq!(store.statistics().total_posts, 3);

    let a = store.get_by_slug("post-a").unwrap();
    assert!(store
        .related(a.id.as_str(), 10, RelatedMode::Public)
        .iter()
        .all(|r| r.title != "Draft Piece"));

    // Direct lookup is the authoring preview path
    let draft = store.get_by_slug("draft-piece").expect("draft reachable by slug");
    assert!(draft.draft);

    // Author preview admits the draft as a candidate
    assert!(store
        .related(a.id.as_str(), 10, RelatedMode::AuthorPreview)
        .iter()
        .any(|r| r.title == "Draft Piece"));
}

#[test]
fn filters_compose_with_pagination() {
    let store = ContentStore::new(BlogConfig::default());
    for i in 1..=5 {
        store.ingest(&doc(
            &format!("Angular {}", i),
            "angular",
            &["angular"],
            &format!("2024-01-{:02}", i),
        ));
    }
    store.ingest(&doc("Unrelated", "leadership", &["teams"], "2024-02-01"));

    let filter = PostFilter::new().with_category("angular");
    let page_one = store.list(1, 2, &filter);
    assert_eq!(page_one.pagination.total, 5);
    assert_eq!(page_one.pagination.total_pages, 3);
    assert_eq!(page_one.posts.len(), 2);
    assert_eq!(page_one.posts[0].title, "Angular 5");
}

#[test]
fn date_range_filter_is_inclusive() {
    let store = scenario_store();
    let filter = PostFilter::new().with_date_range(
        Some("2024-02-01T00:00:00Z".parse().unwrap()),
        Some("2024-03-01T00:00:00Z".parse().unwrap()),
    );

    let response = store.list(1, 10, &filter);
    let titles: Vec<&str> = response.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Post C", "Post B"]);
}

#[test]
fn view_counters_survive_queries() {
    let store = scenario_store();
    let a = store.get_by_slug("post-a").unwrap();

    assert!(store.record_view(a.id.as_str()));
    assert!(store.toggle_like(a.id.as_str()));

    let listed = store.list(1, 10, &PostFilter::new());
    let seen = listed.posts.iter().find(|p| p.slug == "post-a").unwrap();
    assert_eq!(seen.views, 1);
    assert_eq!(seen.likes, 1);
}

#[test]
fn jsonl_records_cover_the_corpus() {
    let store = scenario_store();
    let posts = store.recent(10);
    let jsonl = penmark::records::to_jsonl(&posts).unwrap();
    assert_eq!(jsonl.lines().count(), 3);
}
