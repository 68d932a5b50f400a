use record_store::stats::{Accumulator, Tally};
use record_store::{text_matches, Bounds, Page, Predicate, Query, StoreActor, StoreEntity, StoreError};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Part {
    id: u64,
    kind: String,
    weight: u32,
    created_at: String,
}

#[derive(Debug)]
struct PartCreate {
    kind: String,
    weight: u32,
}

#[derive(Debug, Default)]
struct PartUpdate {
    kind: Option<String>,
    weight: Option<u32>,
}

#[derive(Debug, Default)]
struct PartFilter {
    kind: Option<String>,
    weight: Bounds<u32>,
}

impl Predicate<Part> for PartFilter {
    fn matches(&self, part: &Part) -> bool {
        text_matches(self.kind.as_deref(), &part.kind) && self.weight.contains(part.weight)
    }
}

#[derive(Debug, PartialEq)]
struct PartStats {
    total: u64,
    total_weight: u64,
    kinds: Tally,
}

#[derive(Default)]
struct PartSummary {
    total: u64,
    total_weight: u64,
    kinds: Tally,
}

impl Accumulator<Part> for PartSummary {
    type Output = PartStats;

    fn observe(&mut self, part: &Part) {
        self.total += 1;
        self.total_weight += u64::from(part.weight);
        self.kinds.record(&part.kind);
    }

    fn finish(self) -> PartStats {
        PartStats {
            total: self.total,
            total_weight: self.total_weight,
            kinds: self.kinds,
        }
    }
}

impl StoreEntity for Part {
    type Id = u64;
    type Create = PartCreate;
    type Update = PartUpdate;
    type Filter = PartFilter;
    type Stats = PartStats;
    type Summary = PartSummary;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_create_params(id: u64, created_at: String, params: PartCreate) -> Self {
        Self {
            id,
            kind: params.kind,
            weight: params.weight,
            created_at,
        }
    }

    fn merge(&self, update: PartUpdate) -> Self {
        let mut next = self.clone();
        if let Some(kind) = update.kind {
            next.kind = kind;
        }
        if let Some(weight) = update.weight {
            next.weight = weight;
        }
        next
    }
}

fn part(kind: &str, weight: u32) -> PartCreate {
    PartCreate {
        kind: kind.into(),
        weight,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = StoreActor::<Part>::new(10);
    let handle = tokio::spawn(actor.run());

    // 1. Create
    let bolt = client.create(part("Bolt", 5)).await.unwrap();
    assert_eq!(bolt.id, 1);
    assert!(!bolt.created_at.is_empty());

    // 2. Update a single field
    let heavier = client
        .update(
            bolt.id,
            PartUpdate {
                weight: Some(8),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(heavier.kind, "Bolt");
    assert_eq!(heavier.weight, 8);
    assert_eq!(heavier.created_at, bolt.created_at);

    // 3. Get
    assert_eq!(client.get(bolt.id).await.unwrap(), heavier);

    // 4. Delete returns the removed record
    let removed = client.delete(bolt.id).await.unwrap();
    assert_eq!(removed, heavier);
    assert_eq!(
        client.get(bolt.id).await,
        Err(StoreError::NotFound("1".into()))
    );

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_ids_are_never_reused() {
    let (actor, client) = StoreActor::<Part>::new(10);
    tokio::spawn(actor.run());

    for weight in 1..=3 {
        client.create(part("Nut", weight)).await.unwrap();
    }
    client.delete(3).await.unwrap();
    client.delete(2).await.unwrap();

    let next = client.create(part("Nut", 4)).await.unwrap();
    assert_eq!(next.id, 4);

    let ids: Vec<u64> = client
        .list(Query::new(PartFilter::default()))
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![1, 4]);
}

#[tokio::test]
async fn test_update_missing_record_changes_nothing() {
    let (actor, client) = StoreActor::<Part>::new(10);
    tokio::spawn(actor.run());

    client.create(part("Washer", 1)).await.unwrap();

    let result = client
        .update(
            999,
            PartUpdate {
                kind: Some("Gear".into()),
                ..Default::default()
            },
        )
        .await;
    assert_eq!(result, Err(StoreError::NotFound("999".into())));
    assert_eq!(client.count().await.unwrap(), 1);
    assert_eq!(client.get(1).await.unwrap().kind, "Washer");
}

#[tokio::test]
async fn test_filter_runs_before_pagination() {
    let (actor, client) = StoreActor::<Part>::new(10);
    tokio::spawn(actor.run());

    for (kind, weight) in [("Bolt", 5), ("Nut", 1), ("bolt", 12), ("BOLT", 20), ("Gear", 7)] {
        client.create(part(kind, weight)).await.unwrap();
    }

    let filter = PartFilter {
        kind: Some("bolt".into()),
        weight: Bounds::new(Some(5), Some(20)),
    };
    let page = Page::new(1, 1).unwrap();
    let hits = client.list(Query::paged(filter, page)).await.unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 3);

    let past_end = Query::paged(PartFilter::default(), Page::new(5, 10).unwrap());
    assert!(client.list(past_end).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_stats_cover_whole_store() {
    let (actor, client) = StoreActor::<Part>::new(10);
    tokio::spawn(actor.run());

    let empty = client.stats().await.unwrap();
    assert_eq!(empty.total, 0);
    assert!(empty.kinds.is_empty());

    client.create(part("Bolt", 5)).await.unwrap();
    client.create(part("Bolt", 7)).await.unwrap();
    client.create(part("Nut", 1)).await.unwrap();

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.total_weight, 13);
    assert_eq!(stats.kinds.get("Bolt"), 2);
    assert_eq!(stats.kinds.get("Nut"), 1);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let (actor, client) = StoreActor::<Part>::new(4);
    tokio::spawn(actor.run());

    let mut tasks = Vec::new();
    for weight in 0..20 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client.create(part("Spring", weight)).await.unwrap().id
        }));
    }

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = StoreActor::<Part>::new(1);
    drop(actor);

    assert_eq!(
        client.create(part("Bolt", 1)).await,
        Err(StoreError::ActorClosed)
    );
}
