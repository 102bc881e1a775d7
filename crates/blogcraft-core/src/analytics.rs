//! Pure aggregation over an author's fetched posts.
//!
//! Both functions take the post sets the repository already fetched and
//! never touch storage themselves. Tie-breaks are deterministic relative to
//! the input order, which the repository fixes (`created_at` ascending,
//! then id) - see `PostRepository::published_for_author`.

use std::collections::HashMap;

use crate::domain::Post;

/// Summary numbers shown on the author's dashboard.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub total_posts: u64,
    pub total_views: i64,
    pub total_likes: i64,
    pub total_comments: i64,
    pub recent_posts: Vec<Post>,
}

/// Per-author analytics: averages, engagement, category ranking, top posts.
#[derive(Debug, Clone)]
pub struct AnalyticsSummary {
    pub avg_views: i64,
    pub engagement_rate: String,
    pub popular_category: String,
    pub top_posts: Vec<Post>,
}

fn totals(published: &[Post]) -> (i64, i64, i64) {
    published.iter().fold((0, 0, 0), |(views, likes, comments), p| {
        (
            views + i64::from(p.views),
            likes + i64::from(p.likes),
            comments + i64::from(p.comments),
        )
    })
}

/// Compute dashboard stats from the published set and the separately
/// fetched recent posts (any status, newest first, at most 5).
pub fn dashboard_stats(published: &[Post], recent_posts: Vec<Post>) -> DashboardStats {
    let (total_views, total_likes, total_comments) = totals(published);

    DashboardStats {
        total_posts: published.len() as u64,
        total_views,
        total_likes,
        total_comments,
        recent_posts,
    }
}

/// Compute the analytics summary over the published set.
///
/// An empty set yields the fixed zero-state (`0`, `"0%"`, `"-"`, `[]`).
/// With zero total views the engagement rate is `"0%"` rather than a
/// division by zero.
pub fn analytics_summary(published: &[Post]) -> AnalyticsSummary {
    if published.is_empty() {
        return AnalyticsSummary {
            avg_views: 0,
            engagement_rate: "0%".to_string(),
            popular_category: "-".to_string(),
            top_posts: Vec::new(),
        };
    }

    let (total_views, total_likes, total_comments) = totals(published);

    let avg_views = (total_views as f64 / published.len() as f64).round() as i64;

    let engagement_rate = if total_views > 0 {
        ((total_likes + total_comments) as f64 / total_views as f64 * 100.0).round() as i64
    } else {
        0
    };

    // Sum views per category, then take the first category in input order
    // that reaches the maximum. Ties resolve to the earliest-fetched post's
    // category, not to hash-map iteration order.
    let mut category_views: HashMap<&str, i64> = HashMap::new();
    for post in published {
        *category_views.entry(post.category.as_str()).or_default() += i64::from(post.views);
    }
    let max_category_views = category_views.values().copied().max().unwrap_or(0);
    let popular_category = published
        .iter()
        .map(|p| p.category.as_str())
        .find(|c| category_views[*c] == max_category_views)
        .unwrap_or("-")
        .to_string();

    // Stable sort: posts with equal views keep their input order.
    let mut top_posts = published.to_vec();
    top_posts.sort_by(|a, b| b.views.cmp(&a.views));
    top_posts.truncate(5);

    AnalyticsSummary {
        avg_views,
        engagement_rate: format!("{engagement_rate}%"),
        popular_category,
        top_posts,
    }
}
