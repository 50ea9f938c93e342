//! Validation of post search criteria and post writes.
//!
//! All functions here are pure. The search validator reports the first violation in a fixed
//! order and otherwise only normalizes: strings are trimmed, blank optional strings become
//! `None`, the limit is clamped to `1..=MAX_LIMIT` and a negative offset becomes zero.

use crate::{
    model::post::{CreatePostDto, UpdatePostDto},
    server::{
        error::{filter::FilterError, AppError},
        model::{
            filter::{PostFilter, PostSearchParams, DEFAULT_LIMIT, MAX_LIMIT},
            post::{
                CreatePostParams, LicenseLevel, PostAssociations, PostCategory, PostStatus,
                SortDirection, SortField, UpdatePostParams,
            },
        },
    },
};

/// Validates and normalizes search criteria.
///
/// Checks run in this order: owner id, categories, statuses, sort field, sort direction,
/// minimum license, license set, iRating range, date range.
///
/// # Arguments
/// - `filter` - Raw criteria from the request
///
/// # Returns
/// - `Ok(PostSearchParams)` - Typed criteria ready for the query compiler
/// - `Err(FilterError)` - The first violated check
pub fn validate_filter(filter: PostFilter) -> Result<PostSearchParams, FilterError> {
    if let Some(user_id) = filter.user_id {
        if user_id <= 0 {
            return Err(FilterError::InvalidUserId(user_id));
        }
    }

    let categories = parse_all(
        &filter.categories,
        PostCategory::parse,
        FilterError::InvalidCategory,
    )?;
    let statuses = parse_all(&filter.statuses, PostStatus::parse, FilterError::InvalidStatus)?;

    let sort_by = match non_blank(filter.sort_by) {
        Some(value) => SortField::parse(&value).ok_or(FilterError::InvalidSortField(value))?,
        None => SortField::default(),
    };
    let sort_direction = match non_blank(filter.sort_order) {
        Some(value) => {
            SortDirection::parse(&value).ok_or(FilterError::InvalidSortDirection(value))?
        }
        None => SortDirection::default(),
    };

    let min_license_level = match non_blank(filter.min_license_level) {
        Some(value) => Some(
            LicenseLevel::parse(&value).ok_or(FilterError::InvalidMinLicenseLevel(value))?,
        ),
        None => None,
    };
    let license_levels = parse_all(
        &filter.license_levels,
        LicenseLevel::parse,
        FilterError::InvalidLicenseLevel,
    )?;

    if let (Some(min), Some(max)) = (filter.min_irating, filter.max_irating) {
        if min > max {
            return Err(FilterError::InvertedIratingRange { min, max });
        }
    }
    if filter.min_irating.is_some_and(|min| min < 0) {
        return Err(FilterError::NegativeIrating {
            field: "min_irating",
        });
    }
    if filter.max_irating.is_some_and(|max| max < 0) {
        return Err(FilterError::NegativeIrating {
            field: "max_irating",
        });
    }

    if let (Some(from), Some(to)) = (filter.event_start_from, filter.event_start_to) {
        if from > to {
            return Err(FilterError::InvertedDateRange { from, to });
        }
    }

    let limit = match filter.limit {
        Some(limit) if limit > 0 => (limit as u64).min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    };
    let offset = match filter.offset {
        Some(offset) if offset > 0 => offset as u64,
        _ => 0,
    };

    Ok(PostSearchParams {
        search: non_blank(filter.search),
        user_id: filter.user_id,
        categories,
        series_ids: filter.series_ids,
        car_class_ids: filter.car_class_ids,
        car_ids: filter.car_ids,
        track_ids: filter.track_ids,
        language_codes: trimmed_entries(&filter.language_codes),
        license_levels,
        min_license_level,
        min_irating: filter.min_irating,
        max_irating: filter.max_irating,
        event_ids: filter.event_ids,
        has_event: filter.has_event,
        timezone: non_blank(filter.timezone),
        statuses,
        event_start_from: filter.event_start_from,
        event_start_to: filter.event_start_to,
        sort_by,
        sort_direction,
        limit,
        offset,
    })
}

/// Validates a create request and fills in defaults.
///
/// The legacy `category` column takes the first entry of `categories`. When `categories` is
/// empty the single `category` field is required and becomes the whole set.
///
/// # Returns
/// - `Ok(CreatePostParams)` - Parameters for the repository
/// - `Err(AppError::BadRequest)` - Missing title, non-positive slots or negative iRating
/// - `Err(AppError::FilterErr)` - Unknown category, status or license level
pub fn validate_create(user_id: i32, dto: CreatePostDto) -> Result<CreatePostParams, AppError> {
    let title = required_title(dto.title)?;
    check_slots(dto.slots_total)?;
    check_min_irating(dto.min_irating)?;

    let mut categories = parse_all(
        &dto.categories,
        PostCategory::parse,
        FilterError::InvalidCategory,
    )?;
    if categories.is_empty() {
        let category = non_blank(dto.category)
            .ok_or_else(|| AppError::BadRequest("category is required".to_string()))?;
        categories.push(parse_category(category)?);
    }
    let category = categories[0];

    let min_license_level = match non_blank(dto.min_license_level) {
        Some(value) => parse_license(value)?,
        None => LicenseLevel::R,
    };
    let status = match non_blank(dto.status) {
        Some(value) => parse_status(value)?,
        None => PostStatus::Open,
    };

    Ok(CreatePostParams {
        user_id,
        title,
        body: dto.body,
        event_id: dto.event_id,
        series_id: dto.series_id,
        car_class_id: dto.car_class_id,
        track_id: dto.track_id,
        category,
        min_license_level,
        min_irating: dto.min_irating,
        timezone: dto.timezone.trim().to_string(),
        event_start_at: dto.event_start_at,
        slots_total: dto.slots_total,
        status,
        is_public: dto.is_public,
        contact_hint: dto.contact_hint,
        associations: PostAssociations {
            categories,
            series_ids: dto.series_ids,
            car_class_ids: dto.car_class_ids,
            car_ids: dto.car_ids,
            track_ids: dto.track_ids,
            language_codes: trimmed_entries(&dto.language_codes),
        },
    })
}

/// Validates a partial update.
///
/// Applies the create rules to every supplied field. A non-empty `categories` list also
/// sets the legacy `category` column to its first entry.
pub fn validate_update(id: i32, dto: UpdatePostDto) -> Result<UpdatePostParams, AppError> {
    let title = dto.title.map(required_title).transpose()?;
    if let Some(slots_total) = dto.slots_total {
        check_slots(slots_total)?;
    }
    if let Some(min_irating) = dto.min_irating {
        check_min_irating(min_irating)?;
    }

    let categories = match &dto.categories {
        Some(values) => Some(parse_all(
            values,
            PostCategory::parse,
            FilterError::InvalidCategory,
        )?),
        None => None,
    };
    let category = match categories.as_ref().and_then(|c| c.first()) {
        Some(first) => Some(*first),
        None => non_blank(dto.category).map(parse_category).transpose()?,
    };

    Ok(UpdatePostParams {
        id,
        title,
        body: dto.body,
        event_id: dto.event_id,
        series_id: dto.series_id,
        car_class_id: dto.car_class_id,
        track_id: dto.track_id,
        category,
        min_license_level: non_blank(dto.min_license_level)
            .map(parse_license)
            .transpose()?,
        min_irating: dto.min_irating,
        timezone: dto.timezone.map(|t| t.trim().to_string()),
        event_start_at: dto.event_start_at,
        slots_total: dto.slots_total,
        status: non_blank(dto.status).map(parse_status).transpose()?,
        is_public: dto.is_public,
        contact_hint: dto.contact_hint,
        categories,
        series_ids: dto.series_ids,
        car_class_ids: dto.car_class_ids,
        car_ids: dto.car_ids,
        track_ids: dto.track_ids,
        language_codes: dto.language_codes.map(|codes| trimmed_entries(&codes)),
    })
}

fn required_title(title: String) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }

    Ok(title.to_string())
}

fn check_slots(slots_total: i32) -> Result<(), AppError> {
    if slots_total <= 0 {
        return Err(AppError::BadRequest(
            "slots_total must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

fn check_min_irating(min_irating: i32) -> Result<(), AppError> {
    if min_irating < 0 {
        return Err(FilterError::NegativeIrating {
            field: "min_irating",
        }
        .into());
    }

    Ok(())
}

fn parse_category(value: String) -> Result<PostCategory, AppError> {
    Ok(PostCategory::parse(&value).ok_or(FilterError::InvalidCategory(value))?)
}

fn parse_status(value: String) -> Result<PostStatus, AppError> {
    Ok(PostStatus::parse(&value).ok_or(FilterError::InvalidStatus(value))?)
}

fn parse_license(value: String) -> Result<LicenseLevel, AppError> {
    Ok(LicenseLevel::parse(&value).ok_or(FilterError::InvalidMinLicenseLevel(value))?)
}

/// Parses every non-blank entry, failing on the first unknown one.
fn parse_all<T>(
    values: &[String],
    parse: fn(&str) -> Option<T>,
    invalid: fn(String) -> FilterError,
) -> Result<Vec<T>, FilterError> {
    trimmed_entries(values)
        .into_iter()
        .map(|value| parse(&value).ok_or_else(|| invalid(value)))
        .collect()
}

fn trimmed_entries(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
