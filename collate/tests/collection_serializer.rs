//! Behavior of the collection serializer over fixture resources

use collate::{
    BasicSerializerClass, CollateError, Collection, CollectionSerializer, NamedCollection, Options,
    Page, Resource, ResourceList, SerializerClass, SerializerRegistry,
};
use collate_test_utils::{
    comments, init_test_tracing, posts, CollectionBuilder, Comment, CountingSerializerClass,
    FixedKeySerializerClass, Post, Tag,
};
use serde_json::json;
use std::sync::Arc;

fn registry() -> Arc<SerializerRegistry> {
    let registry = SerializerRegistry::new();
    registry
        .register::<Post>(Arc::new(BasicSerializerClass::new("PostSerializer")))
        .expect("register post");
    registry
        .register_model("Comment", Arc::new(BasicSerializerClass::new("CommentSerializer")))
        .expect("register comment");
    Arc::new(registry)
}

fn with_registry() -> Options {
    Options::new().with_serializer_context(registry())
}

fn list(resources: Vec<Arc<dyn Resource>>) -> Arc<dyn Collection> {
    Arc::new(ResourceList::from(resources))
}

fn post_ids(serializer: &CollectionSerializer) -> Vec<u64> {
    serializer
        .iter()
        .filter_map(|item| item.object().downcast_ref::<Post>().map(|post| post.id))
        .collect()
}

#[test]
fn builds_one_serializer_per_resource_in_order() {
    init_test_tracing();
    let serializer = CollectionSerializer::new(list(posts(5)), with_registry()).unwrap();

    assert_eq!(serializer.len(), 5);
    assert_eq!(post_ids(&serializer), vec![1, 2, 3, 4, 5]);
}

#[test]
fn iteration_is_restartable() {
    let serializer = CollectionSerializer::new(list(posts(3)), with_registry()).unwrap();

    let first: Vec<u64> = post_ids(&serializer);
    let second: Vec<u64> = post_ids(&serializer);
    assert_eq!(first, second);

    let mut count = 0;
    for item in &serializer {
        assert_eq!(item.json_key().as_deref(), Some("post"));
        count += 1;
    }
    assert_eq!(count, 3);
    assert_eq!(serializer.iter().rev().count(), 3);
}

#[test]
fn missing_serializer_fails_whole_construction() {
    init_test_tracing();
    let counting = Arc::new(CountingSerializerClass::new(BasicSerializerClass::new(
        "PostSerializer",
    )));
    let registry = SerializerRegistry::new();
    registry.register::<Post>(counting.clone()).unwrap();

    let resources: Vec<Arc<dyn Resource>> = vec![
        Arc::new(Post::new(1, "first")),
        Arc::new(Tag("rust".to_string())),
        Arc::new(Post::new(2, "second")),
    ];
    let result = CollectionSerializer::new(
        list(resources),
        Options::new().with_serializer_context(Arc::new(registry)),
    );

    match result {
        Err(CollateError::NoSerializerFound { resource }) => {
            assert!(resource.contains("Tag"), "description: {}", resource);
            assert!(resource.contains("rust"));
        }
        other => panic!("expected NoSerializerFound, got {:?}", other),
    }
    // The resource after the failing one is never built.
    assert_eq!(counting.built(), 1);
}

#[test]
fn missing_serializer_error_message() {
    let err = CollectionSerializer::new(
        list(vec![Arc::new(Tag("orphan".to_string()))]),
        with_registry(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "No serializer found for resource: Tag(\"orphan\")"
    );
}

#[test]
fn explicit_serializer_is_used_for_every_item() {
    let explicit = Arc::new(CountingSerializerClass::new(BasicSerializerClass::new(
        "AnythingSerializer",
    )));
    let mut resources = posts(2);
    resources.push(Arc::new(Tag("no binding".to_string())));

    let serializer = CollectionSerializer::new(
        list(resources),
        Options::new().with_serializer(explicit.clone()),
    )
    .unwrap();

    assert_eq!(serializer.len(), 3);
    assert_eq!(explicit.built(), 3);
}

#[test]
fn resolution_may_differ_per_item() {
    let mut resources = posts(1);
    resources.extend(comments(1));
    let serializer = CollectionSerializer::new(list(resources), with_registry()).unwrap();

    let keys: Vec<Option<String>> = serializer.iter().map(|item| item.json_key()).collect();
    assert_eq!(
        keys,
        vec![Some("post".to_string()), Some("comment".to_string())]
    );
    assert!(serializer.iter().nth(1).unwrap().object().is::<Comment>());
}

#[test]
fn items_receive_options_without_serializer() {
    let explicit: Arc<dyn SerializerClass> = Arc::new(BasicSerializerClass::new("PostSerializer"));
    let options = Options::new()
        .with_root("entries")
        .with_serializer(explicit)
        .with_option("scope", json!({"user": 7}));

    let serializer = CollectionSerializer::new(list(posts(2)), options).unwrap();

    for item in &serializer {
        assert!(item.options().serializer.is_none());
        assert_eq!(item.options().root.as_deref(), Some("entries"));
        assert_eq!(item.options().get("scope"), Some(&json!({"user": 7})));
    }
    assert!(serializer.options().serializer.is_some());
}

#[test]
fn success_is_always_true() {
    let empty = CollectionSerializer::new(list(Vec::new()), Options::new()).unwrap();
    let full = CollectionSerializer::new(list(posts(2)), with_registry()).unwrap();
    assert!(empty.is_success());
    assert!(full.is_success());
    assert!(empty.is_empty());
}

#[test]
fn explicit_root_wins_verbatim() {
    let empty =
        CollectionSerializer::new(list(Vec::new()), Options::new().with_root("widget")).unwrap();
    assert_eq!(empty.root(), Some("widget"));
    assert_eq!(empty.json_key().as_deref(), Some("widget"));

    let named = CollectionSerializer::new(
        Arc::new(NamedCollection::new("Comment", comments(2))),
        with_registry().with_root("widget"),
    )
    .unwrap();
    assert_eq!(named.json_key().as_deref(), Some("widget"));
}

#[test]
fn empty_collection_uses_explicit_serializer_type() {
    let foo = Arc::new(BasicSerializerClass::new("FooSerializer").with_type("foo"));
    let serializer =
        CollectionSerializer::new(list(Vec::new()), Options::new().with_serializer(foo)).unwrap();
    assert_eq!(serializer.json_key().as_deref(), Some("foos"));
}

#[test]
fn non_empty_collection_uses_first_item_key() {
    let serializer = CollectionSerializer::new(list(posts(3)), with_registry()).unwrap();
    assert_eq!(serializer.json_key().as_deref(), Some("posts"));
}

#[test]
fn non_empty_collection_ignores_explicit_serializer_type() {
    let explicit = Arc::new(FixedKeySerializerClass::new(Some("entry")).with_type(Some("foo")));
    let serializer =
        CollectionSerializer::new(list(posts(1)), Options::new().with_serializer(explicit))
            .unwrap();
    assert_eq!(serializer.json_key().as_deref(), Some("entries"));
}

#[test]
fn empty_named_collection_uses_name() {
    let serializer = CollectionSerializer::new(
        Arc::new(NamedCollection::new("Comment", Vec::new())),
        Options::new(),
    )
    .unwrap();
    assert_eq!(serializer.json_key().as_deref(), Some("comments"));

    let camel = CollectionSerializer::new(
        Arc::new(NamedCollection::new("BlogPost", Vec::new())),
        Options::new(),
    )
    .unwrap();
    assert_eq!(camel.json_key().as_deref(), Some("blog_posts"));
}

#[test]
fn empty_unnamed_collection_has_no_key() {
    let plain = CollectionSerializer::new(list(Vec::new()), Options::new()).unwrap();
    assert_eq!(plain.json_key(), None);

    let unset = CollectionSerializer::new(
        Arc::new(NamedCollection::unnamed(Vec::new())),
        Options::new(),
    )
    .unwrap();
    assert_eq!(unset.json_key(), None);
}

#[test]
fn explicit_serializer_without_type_falls_through_to_name() {
    let untyped = Arc::new(BasicSerializerClass::new("UntypedSerializer"));
    let serializer = CollectionSerializer::new(
        Arc::new(NamedCollection::new("Comment", Vec::new())),
        Options::new().with_serializer(untyped),
    )
    .unwrap();
    assert_eq!(serializer.json_key().as_deref(), Some("comments"));
}

#[test]
fn empty_item_key_does_not_fall_through() {
    let blank = Arc::new(FixedKeySerializerClass::new(Some("")));
    let serializer = CollectionSerializer::new(
        Arc::new(NamedCollection::new("Comment", comments(1))),
        Options::new().with_serializer(blank),
    )
    .unwrap();
    assert_eq!(serializer.json_key().as_deref(), Some(""));
}

#[test]
fn empty_type_key_does_not_fall_through() {
    let blank = Arc::new(FixedKeySerializerClass::new(None).with_type(Some("")));
    let serializer = CollectionSerializer::new(
        Arc::new(NamedCollection::new("Comment", Vec::new())),
        Options::new().with_serializer(blank),
    )
    .unwrap();
    assert_eq!(serializer.json_key().as_deref(), Some(""));
}

#[test]
fn absent_item_key_falls_through_to_name() {
    let keyless = Arc::new(FixedKeySerializerClass::new(None));
    let serializer = CollectionSerializer::new(
        Arc::new(NamedCollection::new("Comment", comments(2))),
        Options::new().with_serializer(keyless),
    )
    .unwrap();
    assert_eq!(serializer.json_key().as_deref(), Some("comments"));
}

#[test]
fn paginated_requires_all_three_capabilities() {
    let page = CollectionSerializer::new(
        Arc::new(Page::new(posts(2), 1, 4)),
        with_registry(),
    )
    .unwrap();
    assert!(page.is_paginated());

    let stub = |builder: CollectionBuilder| {
        CollectionSerializer::new(builder.build(), with_registry())
            .unwrap()
            .is_paginated()
    };
    assert!(stub(CollectionBuilder::new(posts(2)).paged(1, 1)));
    assert!(!stub(CollectionBuilder::new(posts(2)).total_pages(3).sized()));
    assert!(!stub(CollectionBuilder::new(posts(2)).current_page(1).sized()));
    assert!(!stub(CollectionBuilder::new(posts(2)).current_page(1).total_pages(3)));
    assert!(!stub(CollectionBuilder::new(posts(2))));

    let plain = CollectionSerializer::new(list(posts(2)), with_registry()).unwrap();
    assert!(!plain.is_paginated());
}

#[test]
fn pagination_metadata_of_a_page() {
    let serializer = CollectionSerializer::new(
        Arc::new(Page::new(posts(3), 2, 5).with_name("Post")),
        with_registry(),
    )
    .unwrap();

    let meta = serializer.pagination().expect("paginated");
    assert_eq!(meta.current_page, 2);
    assert_eq!(meta.total_pages, 5);
    assert_eq!(meta.size, 3);
    assert_eq!(meta.prev_page(), Some(1));
    assert_eq!(meta.next_page(), Some(3));

    let plain = CollectionSerializer::new(list(posts(1)), with_registry()).unwrap();
    assert!(plain.pagination().is_none());
}

#[test]
fn empty_page_keyed_by_scope_name() {
    let serializer = CollectionSerializer::new(
        Arc::new(Page::new(Vec::new(), 1, 0).with_name("Comment")),
        Options::new(),
    )
    .unwrap();
    assert_eq!(serializer.json_key().as_deref(), Some("comments"));
    assert!(serializer.is_paginated());
}
