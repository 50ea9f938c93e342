//! Post search query compiler.
//!
//! Turns validated [`PostSearchParams`] into two SeaORM plans sharing one predicate and one
//! join set: a count plan that ignores the page window and a page plan with ordering, limit and
//! offset. Predicates accumulate in a single `Condition::all()`.
//!
//! Every multi-valued filter except cars is a membership subquery against its association
//! table, so it never multiplies rows. The car filter is an inner join on `post_car`; a post
//! matching several of the requested cars then appears once per car, so whenever that join is
//! present both plans project distinct post ids. The flag is derived while compiling and read
//! by both plan builders.

use entity::{post, post_car, post_car_class, post_category, post_language, post_series, post_track};
use sea_orm::{
    sea_query::{IntoColumnRef, IntoTableRef, LikeExpr, Query, SelectStatement, SimpleExpr},
    ColumnTrait, Condition, EntityTrait, JoinType, Order, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};

use crate::server::model::{
    filter::PostSearchParams,
    post::{LicenseLevel, PostStatus, SortDirection, SortField},
};

/// Compiled search over the `post` table.
#[derive(Debug, Clone)]
pub struct PostSearchQuery {
    condition: Condition,
    joins_cars: bool,
    sort_by: SortField,
    sort_direction: SortDirection,
    limit: u64,
    offset: u64,
}

impl PostSearchQuery {
    /// Compiles validated search parameters.
    ///
    /// Predicates are ANDed. Within one multi-valued field any listed value matches.
    pub fn compile(params: &PostSearchParams) -> Self {
        let mut condition = Condition::all();
        let mut joins_cars = false;

        // Owners see all of their own posts; everyone else only public ones.
        condition = match params.user_id {
            Some(user_id) => condition.add(post::Column::UserId.eq(user_id)),
            None => condition.add(post::Column::IsPublic.eq(true)),
        };

        if let Some(search) = &params.search {
            condition = condition.add(
                Condition::any()
                    .add(post::Column::Title.like(substring_pattern(search)))
                    .add(post::Column::Body.like(substring_pattern(search))),
            );
        }

        if !params.categories.is_empty() {
            let categories = params.categories.iter().map(|c| c.as_str());
            condition = condition.add(post::Column::Id.in_subquery(membership(
                post_category::Entity,
                post_category::Column::PostId,
                post_category::Column::Category.is_in(categories),
            )));
        }

        if !params.series_ids.is_empty() {
            condition = condition.add(post::Column::Id.in_subquery(membership(
                post_series::Entity,
                post_series::Column::PostId,
                post_series::Column::SeriesId.is_in(params.series_ids.iter().copied()),
            )));
        }

        if !params.car_class_ids.is_empty() {
            condition = condition.add(post::Column::Id.in_subquery(membership(
                post_car_class::Entity,
                post_car_class::Column::PostId,
                post_car_class::Column::CarClassId.is_in(params.car_class_ids.iter().copied()),
            )));
        }

        if !params.track_ids.is_empty() {
            condition = condition.add(post::Column::Id.in_subquery(membership(
                post_track::Entity,
                post_track::Column::PostId,
                post_track::Column::TrackId.is_in(params.track_ids.iter().copied()),
            )));
        }

        if !params.language_codes.is_empty() {
            condition = condition.add(post::Column::Id.in_subquery(membership(
                post_language::Entity,
                post_language::Column::PostId,
                post_language::Column::LanguageCode.is_in(params.language_codes.iter().cloned()),
            )));
        }

        if !params.car_ids.is_empty() {
            joins_cars = true;
            condition =
                condition.add(post_car::Column::CarId.is_in(params.car_ids.iter().copied()));
        }

        if let Some(min) = params.min_irating {
            condition = condition.add(post::Column::MinIrating.gte(min));
        }
        if let Some(max) = params.max_irating {
            condition = condition.add(post::Column::MinIrating.lte(max));
        }

        // An exact level set and a minimum may both be given; they are ANDed.
        if !params.license_levels.is_empty() {
            condition = condition.add(license_membership(&params.license_levels));
        }
        if let Some(min_level) = params.min_license_level {
            condition = condition.add(license_membership(&min_level.at_or_above()));
        }

        if !params.event_ids.is_empty() {
            condition =
                condition.add(post::Column::EventId.is_in(params.event_ids.iter().copied()));
        }
        match params.has_event {
            Some(true) => condition = condition.add(post::Column::EventId.is_not_null()),
            Some(false) => condition = condition.add(post::Column::EventId.is_null()),
            None => {}
        }

        if let Some(timezone) = &params.timezone {
            condition = condition.add(post::Column::Timezone.eq(timezone.as_str()));
        }

        if !params.statuses.is_empty() {
            let statuses = params.statuses.iter().map(|s| s.as_str());
            condition = condition.add(post::Column::Status.is_in(statuses));
        } else if params.user_id.is_none() {
            condition = condition.add(post::Column::Status.eq(PostStatus::Open.as_str()));
        }

        if let Some(from) = params.event_start_from {
            condition = condition.add(post::Column::EventStartAt.gte(from));
        }
        if let Some(to) = params.event_start_to {
            condition = condition.add(post::Column::EventStartAt.lte(to));
        }

        Self {
            condition,
            joins_cars,
            sort_by: params.sort_by,
            sort_direction: params.sort_direction,
            limit: params.limit,
            offset: params.offset,
        }
    }

    /// Whether the car join is part of the plans, which makes both of them distinct.
    pub fn joins_cars(&self) -> bool {
        self.joins_cars
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Plan selecting the ids of every matching post, without ordering or window.
    ///
    /// Meant to be counted with `PaginatorTrait::count`, which wraps it in
    /// `SELECT COUNT(*) FROM (...)`.
    pub fn count_query(&self) -> Select<post::Entity> {
        let query = self.filtered().select_only().column(post::Column::Id);

        if self.joins_cars {
            query.distinct()
        } else {
            query
        }
    }

    /// Plan selecting one page of matching posts, ordered by the sort field with the post id
    /// ascending as tie-break.
    pub fn page_query(&self) -> Select<post::Entity> {
        let mut query = self.filtered();
        if self.joins_cars {
            query = query.distinct();
        }

        let column = match self.sort_by {
            SortField::CreatedAt => post::Column::CreatedAt,
            SortField::EventStartAt => post::Column::EventStartAt,
            SortField::MinIrating => post::Column::MinIrating,
        };
        let order = match self.sort_direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        query
            .order_by(column, order)
            .order_by_asc(post::Column::Id)
            .limit(self.limit)
            .offset(self.offset)
    }

    fn filtered(&self) -> Select<post::Entity> {
        let mut query = post::Entity::find();
        if self.joins_cars {
            query = query.join(JoinType::InnerJoin, post::Relation::PostCar.def());
        }

        query.filter(self.condition.clone())
    }
}

const LIKE_ESCAPE: char = '!';

/// Matches `text` anywhere in a column, with `%` and `_` in `text` taken literally.
fn substring_pattern(text: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, LIKE_ESCAPE | '%' | '_') {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

/// `SELECT <post_id> FROM <table> WHERE <matches>`
fn membership<T, C>(table: T, post_id: C, matches: SimpleExpr) -> SelectStatement
where
    T: IntoTableRef,
    C: IntoColumnRef,
{
    Query::select()
        .column(post_id)
        .from(table)
        .and_where(matches)
        .to_owned()
}

fn license_membership(levels: &[LicenseLevel]) -> SimpleExpr {
    post::Column::MinLicenseLevel.is_in(levels.iter().map(|l| l.as_str()))
}
