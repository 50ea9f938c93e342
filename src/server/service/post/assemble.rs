//! Result assembly for posts.
//!
//! Attaches the six association sets to each post row and, for the relations named in the
//! expand set, resolves ids into catalog entries. All lookups are batched over the whole page:
//! one query per association table and at most one per expanded catalog. Ids pointing at
//! catalog rows that no longer exist are left out of the result.

use std::collections::{HashMap, HashSet};

use entity::post;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{catalog::CatalogRepository, post::association::PostAssociationRepository},
    error::AppError,
    model::{
        catalog::{CatalogItem, CatalogKind, Language},
        post::{ExpandSet, Post, PostAssociations, PostIncluded, PostResult},
    },
};

pub struct PostAssembler<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostAssembler<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds results for a list of post rows, keeping their order.
    ///
    /// # Arguments
    /// - `rows` - Post rows as returned by the repository
    /// - `expand` - Relations to resolve into catalog entries
    ///
    /// # Returns
    /// - `Ok(Vec<PostResult>)` - One result per row
    /// - `Err(AppError::InternalErr)` - A row holds an unknown enum value
    /// - `Err(AppError::DbErr)` - Database error during a lookup
    pub async fn assemble(
        &self,
        rows: Vec<post::Model>,
        expand: ExpandSet,
    ) -> Result<Vec<PostResult>, AppError> {
        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let mut associations = PostAssociationRepository::new(self.db)
            .get_for_posts(&ids)
            .await?;

        let posts = rows
            .into_iter()
            .map(Post::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = if expand.is_empty() {
            None
        } else {
            Some(self.load_catalog(&posts, &associations, expand).await?)
        };

        Ok(posts
            .into_iter()
            .map(|post| {
                let sets = associations.remove(&post.id).unwrap_or_default();
                let included = catalog
                    .as_ref()
                    .map(|catalog| catalog.resolve(&post, &sets))
                    .filter(|included| !included.is_empty());

                PostResult {
                    post,
                    associations: sets,
                    included,
                }
            })
            .collect())
    }

    /// Builds the result for a single post row.
    pub async fn assemble_one(
        &self,
        row: post::Model,
        expand: ExpandSet,
    ) -> Result<PostResult, AppError> {
        let id = row.id;

        self.assemble(vec![row], expand)
            .await?
            .pop()
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
    }

    async fn load_catalog(
        &self,
        posts: &[Post],
        associations: &HashMap<i32, PostAssociations>,
        expand: ExpandSet,
    ) -> Result<ResolvedCatalog, AppError> {
        let repo = CatalogRepository::new(self.db);
        let mut resolved = ResolvedCatalog {
            expand,
            ..Default::default()
        };

        if expand.event {
            let ids = collect_ids(posts.iter().filter_map(|p| p.event_id));
            resolved.events = by_id(repo.find_by_ids(CatalogKind::Event, &ids).await?);
        }
        if expand.series {
            let ids = collect_ids(
                posts
                    .iter()
                    .filter_map(|p| p.series_id)
                    .chain(associations.values().flat_map(|a| a.series_ids.iter().copied())),
            );
            resolved.series = by_id(repo.find_by_ids(CatalogKind::Series, &ids).await?);
        }
        if expand.car_class {
            let ids = collect_ids(
                posts.iter().filter_map(|p| p.car_class_id).chain(
                    associations
                        .values()
                        .flat_map(|a| a.car_class_ids.iter().copied()),
                ),
            );
            resolved.car_classes = by_id(repo.find_by_ids(CatalogKind::CarClass, &ids).await?);
        }
        if expand.track {
            let ids = collect_ids(
                posts
                    .iter()
                    .filter_map(|p| p.track_id)
                    .chain(associations.values().flat_map(|a| a.track_ids.iter().copied())),
            );
            resolved.tracks = by_id(repo.find_by_ids(CatalogKind::Track, &ids).await?);
        }
        if expand.cars {
            let ids = collect_ids(associations.values().flat_map(|a| a.car_ids.iter().copied()));
            resolved.cars = by_id(repo.find_by_ids(CatalogKind::Car, &ids).await?);
        }
        if expand.languages {
            let codes: Vec<String> = associations
                .values()
                .flat_map(|a| a.language_codes.iter().cloned())
                .collect::<HashSet<_>>()
                .into_iter()
                .collect();
            resolved.languages = repo
                .languages_by_codes(&codes)
                .await?
                .into_iter()
                .map(|language| (language.code.clone(), language))
                .collect();
        }

        Ok(resolved)
    }
}

/// Catalog entries loaded for one page of posts.
#[derive(Default)]
struct ResolvedCatalog {
    expand: ExpandSet,
    events: HashMap<i32, CatalogItem>,
    series: HashMap<i32, CatalogItem>,
    car_classes: HashMap<i32, CatalogItem>,
    tracks: HashMap<i32, CatalogItem>,
    cars: HashMap<i32, CatalogItem>,
    languages: HashMap<String, Language>,
}

impl ResolvedCatalog {
    /// Resolves the references of one post, in association order.
    fn resolve(&self, post: &Post, sets: &PostAssociations) -> PostIncluded {
        let mut included = PostIncluded::default();

        if self.expand.event {
            included.event = lookup(&self.events, post.event_id);
        }
        if self.expand.series {
            included.series = lookup(&self.series, post.series_id);
            included.all_series = lookup_all(&self.series, &sets.series_ids);
        }
        if self.expand.car_class {
            included.car_class = lookup(&self.car_classes, post.car_class_id);
            included.car_classes = lookup_all(&self.car_classes, &sets.car_class_ids);
        }
        if self.expand.track {
            included.track = lookup(&self.tracks, post.track_id);
            included.tracks = lookup_all(&self.tracks, &sets.track_ids);
        }
        if self.expand.cars {
            included.cars = lookup_all(&self.cars, &sets.car_ids);
        }
        if self.expand.languages {
            included.languages = sets
                .language_codes
                .iter()
                .filter_map(|code| self.languages.get(code).cloned())
                .collect();
        }

        included
    }
}

fn collect_ids(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    ids.collect::<HashSet<_>>().into_iter().collect()
}

fn by_id(items: Vec<CatalogItem>) -> HashMap<i32, CatalogItem> {
    items.into_iter().map(|item| (item.id, item)).collect()
}

fn lookup(items: &HashMap<i32, CatalogItem>, id: Option<i32>) -> Option<CatalogItem> {
    id.and_then(|id| items.get(&id).cloned())
}

fn lookup_all(items: &HashMap<i32, CatalogItem>, ids: &[i32]) -> Vec<CatalogItem> {
    ids.iter().filter_map(|id| items.get(id).cloned()).collect()
}
