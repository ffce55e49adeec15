//! In-memory event store seeded with sample data.
//!
//! Serves the full [`EventStore`] contract from a process-local list so
//! the blog stays usable when the remote collection is unreachable. The
//! list lives only as long as the store object: nothing is persisted, and
//! a fresh store resets to the three seed events.
//!
//! Every operation first awaits a small artificial latency to approximate
//! a network round-trip. This is a demo affordance, not a performance
//! requirement; tests construct the store with zero latency.
//!
//! Each operation takes the list lock for its whole find-then-mutate
//! step, but there is no versioning: two concurrent updates to the same
//! id resolve as last-writer-wins.

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use nazolog_types::{CreateMysteryEvent, EventFormat, EventId, MysteryEvent, UpdateMysteryEvent};
use rand::Rng;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::store::EventStore;

/// Artificial latency for read operations.
const DEFAULT_READ_DELAY: Duration = Duration::from_millis(100);

/// Artificial latency for write operations.
const DEFAULT_WRITE_DELAY: Duration = Duration::from_millis(200);

/// Characters used in generated mock ids.
const ID_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of the random suffix in generated mock ids.
const ID_SUFFIX_LEN: usize = 9;

/// Process-local event store backed by a seeded mutable list.
pub struct MemoryStore {
    events: Mutex<Vec<MysteryEvent>>,
    read_delay: Duration,
    write_delay: Duration,
}

impl MemoryStore {
    /// Create a store seeded with the three sample events and the
    /// default artificial latency.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(seed_events()),
            read_delay: DEFAULT_READ_DELAY,
            write_delay: DEFAULT_WRITE_DELAY,
        }
    }

    /// Override the artificial latency. Tests pass [`Duration::ZERO`].
    #[must_use]
    pub const fn with_latency(mut self, read: Duration, write: Duration) -> Self {
        self.read_delay = read;
        self.write_delay = write;
        self
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EventStore for MemoryStore {
    async fn list_published(&self) -> Result<Vec<MysteryEvent>, StoreError> {
        tokio::time::sleep(self.read_delay).await;

        let events = self.events.lock().await;
        let mut published: Vec<MysteryEvent> =
            events.iter().filter(|e| e.published).cloned().collect();
        published.sort_by(|a, b| b.participation_date.cmp(&a.participation_date));
        Ok(published)
    }

    async fn list_all(&self) -> Result<Vec<MysteryEvent>, StoreError> {
        tokio::time::sleep(self.read_delay).await;

        let events = self.events.lock().await;
        let mut all = events.clone();
        all.sort_by(|a, b| b.participation_date.cmp(&a.participation_date));
        Ok(all)
    }

    async fn get_by_id(&self, id: &EventId) -> Result<Option<MysteryEvent>, StoreError> {
        tokio::time::sleep(self.read_delay).await;

        let events = self.events.lock().await;
        Ok(events.iter().find(|e| e.id == *id).cloned())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<MysteryEvent>, StoreError> {
        tokio::time::sleep(self.read_delay).await;

        let events = self.events.lock().await;
        Ok(events.iter().find(|e| e.slug == slug).cloned())
    }

    async fn create(&self, data: &CreateMysteryEvent) -> Result<EventId, StoreError> {
        tokio::time::sleep(self.write_delay).await;

        let id = EventId::from(generate_mock_id());
        let now = Utc::now();
        let event = MysteryEvent {
            id: id.clone(),
            participation_date: data.participation_date,
            title: data.title.clone(),
            organization: data.organization.clone(),
            format: data.format,
            overview: data.overview.clone(),
            impression: data.impression.clone(),
            final_mystery: data.final_mystery.clone(),
            created_at: now,
            updated_at: now,
            published: data.published,
            slug: data.slug.clone(),
        };

        let mut events = self.events.lock().await;
        events.push(event);
        Ok(id)
    }

    async fn update(&self, id: &EventId, data: &UpdateMysteryEvent) -> bool {
        tokio::time::sleep(self.write_delay).await;

        let mut events = self.events.lock().await;
        let Some(event) = events.iter_mut().find(|e| e.id == *id) else {
            return false;
        };

        if let Some(date) = data.participation_date {
            event.participation_date = date;
        }
        if let Some(title) = &data.title {
            event.title = title.clone();
        }
        if let Some(organization) = &data.organization {
            event.organization = organization.clone();
        }
        if let Some(format) = data.format {
            event.format = format;
        }
        if let Some(overview) = &data.overview {
            event.overview = overview.clone();
        }
        if let Some(impression) = &data.impression {
            event.impression = impression.clone();
        }
        if let Some(final_mystery) = &data.final_mystery {
            event.final_mystery = final_mystery.clone();
        }
        if let Some(published) = data.published {
            event.published = published;
        }
        if let Some(slug) = &data.slug {
            event.slug = slug.clone();
        }
        event.updated_at = Utc::now();

        true
    }

    async fn delete(&self, id: &EventId) -> bool {
        tokio::time::sleep(self.write_delay).await;

        let mut events = self.events.lock().await;
        let Some(index) = events.iter().position(|e| e.id == *id) else {
            return false;
        };
        events.remove(index);
        true
    }
}

/// Generate a mock id: fixed prefix, current time, short random suffix.
///
/// Uniqueness is probabilistic. Two creates within the same millisecond
/// would need matching 9-character suffixes to collide.
fn generate_mock_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.random_range(0..ID_CHARS.len());
            char::from(ID_CHARS.get(idx).copied().unwrap_or(b'a'))
        })
        .collect();
    format!("event_{}_{}", Utc::now().timestamp_millis(), suffix)
}

/// Build a midnight-UTC date for seed data.
fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// The three fixed sample events every fresh store starts with.
fn seed_events() -> Vec<MysteryEvent> {
    vec![
        MysteryEvent {
            id: EventId::from("sample-1"),
            participation_date: day(2024, 12, 15),
            title: String::from("リアル脱出ゲーム×名探偵コナン"),
            organization: String::from("SCRAP"),
            format: EventFormat::Room,
            overview: String::from(
                "名探偵コナンとコラボした謎解きイベント。黒の組織の陰謀を阻止せよ！",
            ),
            impression: String::from(
                "コナンの世界観が完璧に再現されていて、ファンとしては大満足でした。",
            ),
            final_mystery: String::from(
                "最後は工藤新一として正体を明かすシーンがあり、感動的でした。",
            ),
            created_at: day(2024, 12, 1),
            updated_at: day(2024, 12, 1),
            published: true,
            slug: String::from("conan-escape-game-2024"),
        },
        MysteryEvent {
            id: EventId::from("sample-2"),
            participation_date: day(2024, 11, 20),
            title: String::from("東京駅周遊型謎解き"),
            organization: String::from("謎解き東京"),
            format: EventFormat::Touring,
            overview: String::from("東京駅の歴史を学びながら進む周遊型の謎解きイベント。"),
            impression: String::from(
                "東京駅の隠された歴史を知ることができて、とても勉強になりました。",
            ),
            final_mystery: String::from(
                "最後は東京駅の秘密の部屋で、駅長の謎が明かされました。",
            ),
            created_at: day(2024, 11, 15),
            updated_at: day(2024, 11, 15),
            published: true,
            slug: String::from("tokyo-station-mystery-2024"),
        },
        MysteryEvent {
            id: EventId::from("sample-3"),
            participation_date: day(2024, 12, 10),
            title: String::from("ホテルの密室謎解き"),
            organization: String::from("ホテルミステリー"),
            format: EventFormat::Room,
            overview: String::from("ホテルの一室で起こった事件の真相を解明する密室謎解き。"),
            impression: String::from(
                "本格的な密室トリックが仕掛けられていて、推理小説の世界に入り込んだような体験でした。",
            ),
            final_mystery: String::from(
                "犯人は意外な人物で、最後のどんでん返しに驚きました。",
            ),
            created_at: day(2024, 12, 5),
            updated_at: day(2024, 12, 5),
            published: true,
            slug: String::from("hotel-mystery-room-2024"),
        },
    ]
}
